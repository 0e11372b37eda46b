//! Display names and subtitles for registered repositories

use crate::domain::{RepositoryKind, RepositoryReference};

/// Label placed before the branch in source-control subtitles
pub const BRANCH_LABEL: &str = "Branch";

/// Primary label for a repository row.
///
/// Package links show their name; source-control repositories show `owner/name`.
pub fn display_name(repo: &RepositoryReference) -> String {
    match repo.kind {
        RepositoryKind::PackageLink => repo.name.clone(),
        RepositoryKind::SourceControl => format!("{}/{}", repo.owner, repo.name),
    }
}

/// Secondary line for a repository row.
///
/// Package links show the download URL verbatim (empty when absent);
/// source-control repositories show the effective branch.
pub fn subtitle(repo: &RepositoryReference) -> String {
    match repo.kind {
        RepositoryKind::PackageLink => repo.download_url.clone().unwrap_or_default(),
        RepositoryKind::SourceControl => format!("{BRANCH_LABEL}: {}", repo.effective_branch()),
    }
}
