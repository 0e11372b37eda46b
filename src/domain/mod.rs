//! Domain models for skillrepos
//!
//! This module contains pure domain objects representing core business entities.
//! These types carry no I/O and hold the invariants a registered repository must satisfy.

pub mod repository;
pub mod skill;

pub use repository::{
    DEFAULT_BRANCH, PACKAGE_LINK_OWNER, RepositoryKey, RepositoryKind, RepositoryReference,
};
pub use skill::DiscoveredSkill;
