//! skillrepos - skill repository management
//!
//! Keeps the list of repositories skills are discovered from: GitHub
//! repositories identified by owner, name and branch, and direct links to
//! downloadable skill packages. The [`manager::RepositoryManager`] validates
//! and submits registrations against a [`store::RepositoryStore`], and the
//! [`catalog`] module derives display rows with per-repository skill counts.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod manager;
pub mod source;
pub mod store;
pub mod ui;

pub use catalog::RepositoryRow;
pub use domain::{DiscoveredSkill, RepositoryKind, RepositoryReference};
pub use error::{Result, SkillReposError};
pub use manager::{FormPhase, RepositoryForm, RepositoryManager};
pub use store::{ExternalOpener, RepositoryStore};
