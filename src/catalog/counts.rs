//! Skill counts per registered repository
//!
//! Counting is a linear scan of the skill list for each repository, so a full
//! list costs O(repositories × skills). Both lists are small in practice and
//! change on every refresh, so no index is kept between calls.

use crate::domain::{DiscoveredSkill, RepositoryKind, RepositoryReference};

/// Whether `skill` was discovered from `repo`.
///
/// Package links match on name alone. Source-control repositories match on
/// owner, name and branch, with an absent branch on either side read as `main`.
pub fn skill_belongs_to(repo: &RepositoryReference, skill: &DiscoveredSkill) -> bool {
    match repo.kind {
        RepositoryKind::PackageLink => skill.repo_name == repo.name,
        RepositoryKind::SourceControl => {
            skill.repo_owner == repo.owner
                && skill.repo_name == repo.name
                && skill.effective_branch() == repo.effective_branch()
        }
    }
}

/// Number of skills in `skills` discovered from `repo`.
pub fn count_skills(repo: &RepositoryReference, skills: &[DiscoveredSkill]) -> usize {
    skills
        .iter()
        .filter(|skill| skill_belongs_to(repo, skill))
        .count()
}
