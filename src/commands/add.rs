//! Add command implementation
//!
//! Registers a GitHub repository or a package link through the repository
//! manager. The form keeps the entered values when the add fails.

use std::path::PathBuf;

use console::Style;

use crate::cli::AddCommand;
use crate::domain::{RepositoryKind, RepositoryReference};
use crate::error::Result;
use crate::manager::RepositoryForm;
use crate::ui::{self, formatter};

use super::{CommandContext, runtime};

/// Run add command
pub fn run(home: Option<PathBuf>, command: AddCommand) -> Result<()> {
    let ctx = CommandContext::load(home.as_deref())?;
    let manager = ctx.manager();
    let mut form = form_for(command);

    let mut progress = ui::reporter_for_terminal();
    progress.start(&format!("Adding {}", pending_label(&form)));

    match runtime()?.block_on(manager.submit(&mut form)) {
        Ok(repo) => {
            progress.finish();
            println!("{}", success_message(&repo));
            Ok(())
        }
        Err(err) => {
            progress.abandon();
            Err(err)
        }
    }
}

fn form_for(command: AddCommand) -> RepositoryForm {
    match command {
        AddCommand::Github(args) => RepositoryForm::source_control(args.url, args.branch),
        AddCommand::Zip(args) => RepositoryForm::package_link(args.name, args.url),
    }
}

fn pending_label(form: &RepositoryForm) -> String {
    if form.kind == RepositoryKind::PackageLink {
        form.package_name.trim().to_string()
    } else {
        form.url.trim().to_string()
    }
}

fn success_message(repo: &RepositoryReference) -> String {
    format!(
        "{} {} ({})",
        Style::new().green().apply_to("Added"),
        Style::new().bold().apply_to(formatter::display_name(repo)),
        formatter::subtitle(repo)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{AddGithubArgs, AddZipArgs};
    use crate::error::SkillReposError;
    use crate::store::{RepositoryStore, YamlRepositoryStore};
    use tempfile::TempDir;

    fn github(url: &str, branch: &str) -> AddCommand {
        AddCommand::Github(AddGithubArgs {
            url: url.to_string(),
            branch: branch.to_string(),
        })
    }

    fn stored(temp: &TempDir) -> Vec<RepositoryReference> {
        let store = YamlRepositoryStore::new(temp.path());
        runtime()
            .unwrap()
            .block_on(store.list_repositories())
            .unwrap()
    }

    #[test]
    fn test_add_github_persists_reference() {
        let temp = TempDir::new().unwrap();
        run(Some(temp.path().to_path_buf()), github("anthropics/skills", "")).unwrap();

        let repos = stored(&temp);
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].owner, "anthropics");
        assert_eq!(repos[0].name, "skills");
        assert_eq!(repos[0].branch.as_deref(), Some("main"));
    }

    #[test]
    fn test_add_zip_persists_reference() {
        let temp = TempDir::new().unwrap();
        let command = AddCommand::Zip(AddZipArgs {
            name: "pack1".to_string(),
            url: "https://x.com/a.zip".to_string(),
        });
        run(Some(temp.path().to_path_buf()), command).unwrap();

        let repos = stored(&temp);
        assert!(repos[0].is_package_link());
        assert_eq!(repos[0].download_url.as_deref(), Some("https://x.com/a.zip"));
    }

    #[test]
    fn test_add_invalid_reference_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let err = run(Some(temp.path().to_path_buf()), github("not-a-repo", "")).unwrap_err();
        assert!(matches!(err, SkillReposError::InvalidReference { .. }));
        assert!(stored(&temp).is_empty());
    }

    #[test]
    fn test_add_duplicate_fails() {
        let temp = TempDir::new().unwrap();
        run(Some(temp.path().to_path_buf()), github("a/b", "")).unwrap();
        let err = run(
            Some(temp.path().to_path_buf()),
            github("https://github.com/a/b.git", "main"),
        )
        .unwrap_err();
        assert!(matches!(err, SkillReposError::DuplicateRepository { .. }));
    }

    #[test]
    fn test_pending_label() {
        let form = form_for(github(" a/b ", ""));
        assert_eq!(pending_label(&form), "a/b");
    }
}
