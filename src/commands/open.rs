//! Open command implementation

use std::path::PathBuf;

use crate::cli::OpenArgs;
use crate::domain::{RepositoryKey, RepositoryReference};
use crate::error::{Result, SkillReposError};
use crate::store::RepositoryStore;

use super::{CommandContext, runtime};

/// Run open command
///
/// Fails only when the repository is not registered; the viewer itself is
/// best effort.
pub fn run(home: Option<PathBuf>, args: OpenArgs) -> Result<()> {
    let key = RepositoryKey::new(args.owner, args.name);
    let ctx = CommandContext::load(home.as_deref())?;
    let manager = ctx.manager();
    let rt = runtime()?;

    let repos = rt.block_on(manager.store().list_repositories())?;
    let repo = find_repository(&repos, &key)?;

    println!("Opening {}", repo.web_url());
    rt.block_on(manager.open(repo));
    Ok(())
}

fn find_repository<'a>(
    repos: &'a [RepositoryReference],
    key: &RepositoryKey,
) -> Result<&'a RepositoryReference> {
    repos
        .iter()
        .find(|r| r.key() == *key)
        .ok_or_else(|| SkillReposError::RepositoryNotFound {
            key: key.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_repository() {
        let repos = vec![
            RepositoryReference::source_control("a", "b", None),
            RepositoryReference::package_link("pack1", "https://x.com/a.zip"),
        ];

        let found = find_repository(&repos, &RepositoryKey::new("zip", "pack1")).unwrap();
        assert!(found.is_package_link());

        let err = find_repository(&repos, &RepositoryKey::new("a", "c")).unwrap_err();
        assert!(err.to_string().contains("a/c"));
    }

    #[test]
    fn test_open_unregistered_fails() {
        let temp = TempDir::new().unwrap();
        let args = OpenArgs {
            owner: "a".to_string(),
            name: "b".to_string(),
        };
        let err = run(Some(temp.path().to_path_buf()), args).unwrap_err();
        assert!(matches!(err, SkillReposError::RepositoryNotFound { .. }));
    }
}
