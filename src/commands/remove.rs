//! Remove command implementation
//!
//! Asks for confirmation unless `-y` is given, then removes the repository
//! through the repository manager. Whatever the store reports is returned.

use std::path::PathBuf;

use inquire::Confirm;

use crate::cli::RemoveArgs;
use crate::domain::RepositoryKey;
use crate::error::Result;

use super::{CommandContext, runtime};

/// Run remove command
pub fn run(home: Option<PathBuf>, args: RemoveArgs) -> Result<()> {
    let key = RepositoryKey::new(args.owner, args.name);

    if !args.yes && !confirm_remove(&key)? {
        println!("Removal cancelled.");
        return Ok(());
    }

    let ctx = CommandContext::load(home.as_deref())?;
    let manager = ctx.manager();
    runtime()?.block_on(manager.remove(&key.owner, &key.name))?;

    println!("Removed {key}");
    Ok(())
}

fn confirm_remove(key: &RepositoryKey) -> Result<bool> {
    let confirmed = Confirm::new(&format!("Remove {key}?"))
        .with_default(false)
        .with_help_message("Press 'y' to remove, or Enter to cancel")
        .prompt()?;
    Ok(confirmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RepositoryReference;
    use crate::error::SkillReposError;
    use crate::store::{RepositoryStore, YamlRepositoryStore};
    use tempfile::TempDir;

    fn args(owner: &str, name: &str) -> RemoveArgs {
        RemoveArgs {
            owner: owner.to_string(),
            name: name.to_string(),
            yes: true,
        }
    }

    #[test]
    fn test_remove_registered_repository() {
        let temp = TempDir::new().unwrap();
        let store = YamlRepositoryStore::new(temp.path());
        let rt = runtime().unwrap();
        rt.block_on(store.add_repository(RepositoryReference::source_control("a", "b", None)))
            .unwrap();

        run(Some(temp.path().to_path_buf()), args("a", "b")).unwrap();

        assert!(rt.block_on(store.list_repositories()).unwrap().is_empty());
    }

    #[test]
    fn test_remove_unknown_repository_fails() {
        let temp = TempDir::new().unwrap();
        let err = run(Some(temp.path().to_path_buf()), args("a", "b")).unwrap_err();
        assert!(matches!(err, SkillReposError::RepositoryNotFound { .. }));
    }
}
