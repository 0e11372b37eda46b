//! Repository reference domain types
//!
//! A [`RepositoryReference`] is one registered source of skills: either a GitHub
//! repository (`owner/name` at a branch) or a direct link to a downloadable package.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkillReposError};
use crate::source::url_parser::GITHUB_WEB_BASE;
use crate::source::validation::parse_absolute_url;

/// Branch assumed whenever a branch is absent or blank.
pub const DEFAULT_BRANCH: &str = "main";

/// Owner recorded for package links, which have no owner of their own.
pub const PACKAGE_LINK_OWNER: &str = "zip";

/// Kind of registered repository
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RepositoryKind {
    /// Source-control repository identified by owner/name/branch
    #[default]
    #[serde(rename = "github")]
    SourceControl,

    /// Direct downloadable package identified by a URL
    #[serde(rename = "zip")]
    PackageLink,
}

impl fmt::Display for RepositoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceControl => write!(f, "github"),
            Self::PackageLink => write!(f, "zip"),
        }
    }
}

/// Identity of a registered repository within the list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryKey {
    pub owner: String,
    pub name: String,
}

impl RepositoryKey {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepositoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A registered source of skills
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryReference {
    pub kind: RepositoryKind,

    /// Repository owner, or [`PACKAGE_LINK_OWNER`] for package links
    pub owner: String,

    /// Repository name, or the user-chosen label of a package link
    pub name: String,

    /// Branch to track; only meaningful for source-control repositories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Absolute URL of the package; only present for package links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

fn default_enabled() -> bool {
    true
}

/// Resolve a possibly absent branch to the branch actually meant.
pub fn effective_branch(branch: Option<&str>) -> &str {
    match branch.map(str::trim) {
        Some(b) if !b.is_empty() => b,
        _ => DEFAULT_BRANCH,
    }
}

impl RepositoryReference {
    /// Create an enabled source-control reference.
    ///
    /// A blank branch is stored as [`DEFAULT_BRANCH`].
    pub fn source_control(
        owner: impl Into<String>,
        name: impl Into<String>,
        branch: Option<&str>,
    ) -> Self {
        Self {
            kind: RepositoryKind::SourceControl,
            owner: owner.into(),
            name: name.into(),
            branch: Some(effective_branch(branch).to_string()),
            enabled: true,
            download_url: None,
        }
    }

    /// Create an enabled package-link reference.
    pub fn package_link(name: impl Into<String>, download_url: impl Into<String>) -> Self {
        Self {
            kind: RepositoryKind::PackageLink,
            owner: PACKAGE_LINK_OWNER.to_string(),
            name: name.into(),
            branch: None,
            enabled: true,
            download_url: Some(download_url.into()),
        }
    }

    pub fn is_package_link(&self) -> bool {
        self.kind == RepositoryKind::PackageLink
    }

    pub fn key(&self) -> RepositoryKey {
        RepositoryKey::new(&self.owner, &self.name)
    }

    pub fn effective_branch(&self) -> &str {
        effective_branch(self.branch.as_deref())
    }

    /// URL an external viewer should open for this repository.
    ///
    /// Package links open their download URL; an absent one yields an empty string.
    pub fn web_url(&self) -> String {
        match self.kind {
            RepositoryKind::PackageLink => self.download_url.clone().unwrap_or_default(),
            RepositoryKind::SourceControl => {
                let base = format!("{GITHUB_WEB_BASE}{}/{}", self.owner, self.name);
                match self.effective_branch() {
                    DEFAULT_BRANCH => base,
                    branch => format!("{base}/tree/{branch}"),
                }
            }
        }
    }

    /// Check the invariants a reference must hold before it is persisted.
    pub fn validate(&self) -> Result<()> {
        match self.kind {
            RepositoryKind::SourceControl => {
                if self.owner.trim().is_empty() || self.name.trim().is_empty() {
                    return Err(invalid("source-control repositories need an owner and a name"));
                }
                if self.owner.contains('/') || self.name.contains('/') {
                    return Err(invalid("owner and name must not contain '/'"));
                }
            }
            RepositoryKind::PackageLink => {
                if self.name.trim().is_empty() {
                    return Err(invalid("package links need a name"));
                }
                let url = self.download_url.as_deref().unwrap_or_default();
                if url.trim().is_empty() {
                    return Err(invalid("package links need a download URL"));
                }
                if parse_absolute_url(url).is_none() {
                    return Err(invalid(&format!("download URL '{url}' is not absolute")));
                }
            }
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> SkillReposError {
    SkillReposError::InvalidRepository {
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_control_defaults_blank_branch_to_main() {
        let repo = RepositoryReference::source_control("a", "b", Some("  "));
        assert_eq!(repo.branch.as_deref(), Some(DEFAULT_BRANCH));
        assert!(repo.enabled);
        assert!(repo.download_url.is_none());
    }

    #[test]
    fn test_package_link_uses_owner_sentinel() {
        let repo = RepositoryReference::package_link("pack1", "https://x.com/a.zip");
        assert_eq!(repo.owner, PACKAGE_LINK_OWNER);
        assert!(repo.branch.is_none());
        assert!(repo.is_package_link());
        assert_eq!(repo.key().to_string(), "zip/pack1");
    }

    #[test]
    fn test_effective_branch() {
        assert_eq!(effective_branch(None), "main");
        assert_eq!(effective_branch(Some("")), "main");
        assert_eq!(effective_branch(Some("dev")), "dev");
    }

    #[test]
    fn test_web_url_for_source_control() {
        let main = RepositoryReference::source_control("a", "b", None);
        assert_eq!(main.web_url(), "https://github.com/a/b");

        let dev = RepositoryReference::source_control("a", "b", Some("dev"));
        assert_eq!(dev.web_url(), "https://github.com/a/b/tree/dev");
    }

    #[test]
    fn test_web_url_for_package_link() {
        let repo = RepositoryReference::package_link("pack1", "https://x.com/a.zip");
        assert_eq!(repo.web_url(), "https://x.com/a.zip");
    }

    #[test]
    fn test_validate_accepts_well_formed_references() {
        assert!(
            RepositoryReference::source_control("a", "b", None)
                .validate()
                .is_ok()
        );
        assert!(
            RepositoryReference::package_link("p", "https://x.com/a.zip")
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_validate_rejects_partial_references() {
        let repo = RepositoryReference::source_control("", "b", None);
        assert!(matches!(
            repo.validate(),
            Err(SkillReposError::InvalidRepository { .. })
        ));

        let mut link = RepositoryReference::package_link("p", "not a url");
        assert!(link.validate().is_err());
        link.download_url = None;
        assert!(link.validate().is_err());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let repo = RepositoryReference::package_link("p", "https://x.com/a.zip");
        let json = serde_json::to_value(&repo).unwrap();
        assert_eq!(json["kind"], "zip");
        assert_eq!(json["downloadUrl"], "https://x.com/a.zip");
        assert!(json.get("branch").is_none());
    }
}
