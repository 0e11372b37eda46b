//! Discovered skill domain type
//!
//! Skills are discovered elsewhere; this crate only reads the fields that tie a
//! skill back to the repository it came from.

use serde::{Deserialize, Serialize};

use super::repository::effective_branch;

/// A skill found while indexing a registered repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredSkill {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub repo_owner: String,

    pub repo_name: String,

    /// Branch the skill was found on; absent means the default branch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_branch: Option<String>,
}

impl DiscoveredSkill {
    pub fn new(repo_owner: impl Into<String>, repo_name: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            repo_owner: repo_owner.into(),
            repo_name: repo_name.into(),
            repo_branch: None,
        }
    }

    #[must_use]
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.repo_branch = Some(branch.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn effective_branch(&self) -> &str {
        effective_branch(self.repo_branch.as_deref())
    }
}
