//! Collaborators the repository manager delegates to
//!
//! Persistence and "open in a viewer" live behind these traits so the
//! submission logic never performs I/O itself.
//!
//! - `yaml.rs`: file-backed store (`repositories.yaml`)
//! - `memory.rs`: in-process store for tests and embedders
//! - `opener.rs`: platform URL opener

pub mod memory;
pub mod opener;
pub mod yaml;

use async_trait::async_trait;

use crate::domain::RepositoryReference;
use crate::error::Result;

pub use memory::MemoryRepositoryStore;
pub use opener::SystemOpener;
pub use yaml::YamlRepositoryStore;

/// Persistence for the list of registered repositories
#[async_trait]
pub trait RepositoryStore: Send + Sync {
    /// Persist a new reference.
    ///
    /// Must fail for invalid references and for keys that are already registered,
    /// with an error whose message can be shown to the user.
    async fn add_repository(&self, repo: RepositoryReference) -> Result<()>;

    /// Delete the reference registered under `owner`/`name`.
    async fn remove_repository(&self, owner: &str, name: &str) -> Result<()>;

    /// Current list of registered references, in registration order.
    async fn list_repositories(&self) -> Result<Vec<RepositoryReference>>;
}

/// Opens a URL in an external viewer, best effort
#[async_trait]
pub trait ExternalOpener: Send + Sync {
    async fn open(&self, url: &str) -> Result<()>;
}
