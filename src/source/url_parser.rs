//! GitHub URL parsing utilities
//!
//! Normalizes what users paste into the repository field into an owner/name pair.
//! Purely syntactic: nothing here touches the network.

/// Base URL of repository pages on GitHub
pub const GITHUB_WEB_BASE: &str = "https://github.com/";

/// Prefixes stripped from the input before splitting, tried in order
const HOST_PREFIXES: [&str; 3] = ["https://github.com/", "http://github.com/", "github.com/"];

/// Owner and name of a GitHub repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub name: String,
}

/// Strip the scheme and host prefix if present
fn strip_host_prefix(input: &str) -> &str {
    HOST_PREFIXES
        .iter()
        .find_map(|prefix| input.strip_prefix(prefix))
        .unwrap_or(input)
}

/// Parse a GitHub repository URL or `owner/name` shorthand.
///
/// Returns `None` unless exactly two non-empty `/`-separated segments remain
/// once the host prefix and a trailing `.git` are removed.
pub fn parse_source_control_url(input: &str) -> Option<RepoSlug> {
    let path = strip_host_prefix(input.trim());
    let path = path.strip_suffix(".git").unwrap_or(path);

    let mut segments = path.split('/');
    let owner = segments.next()?;
    let name = segments.next()?;
    if segments.next().is_some() || owner.is_empty() || name.is_empty() {
        return None;
    }

    Some(RepoSlug {
        owner: owner.to_string(),
        name: name.to_string(),
    })
}
