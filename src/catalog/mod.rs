//! Read model for the repository list
//!
//! Everything here is derived from the repository and skill lists passed in
//! and recomputed on each call; nothing is cached.

pub mod counts;

pub use counts::{count_skills, skill_belongs_to};

use serde::Serialize;

use crate::domain::{DiscoveredSkill, RepositoryKind, RepositoryReference};
use crate::ui::formatter;

/// One rendered entry of the repository list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryRow {
    pub owner: String,
    pub name: String,
    pub kind: RepositoryKind,
    pub display_name: String,
    pub subtitle: String,
    pub skill_count: usize,
    pub enabled: bool,
    pub web_url: String,
}

impl RepositoryRow {
    pub fn new(repo: &RepositoryReference, skills: &[DiscoveredSkill]) -> Self {
        Self {
            owner: repo.owner.clone(),
            name: repo.name.clone(),
            kind: repo.kind,
            display_name: formatter::display_name(repo),
            subtitle: formatter::subtitle(repo),
            skill_count: count_skills(repo, skills),
            enabled: repo.enabled,
            web_url: repo.web_url(),
        }
    }
}

/// Build the rows for `repos` in list order.
pub fn rows(repos: &[RepositoryReference], skills: &[DiscoveredSkill]) -> Vec<RepositoryRow> {
    repos
        .iter()
        .map(|repo| RepositoryRow::new(repo, skills))
        .collect()
}

/// Sum of the skill counts across `rows`.
pub fn total_skills(rows: &[RepositoryRow]) -> usize {
    rows.iter().map(|row| row.skill_count).sum()
}
