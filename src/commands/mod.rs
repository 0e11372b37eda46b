//! Command implementations for the skillrepos CLI

pub mod add;
pub mod completions;
pub mod list;
pub mod open;
pub mod remove;
pub mod version;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{self, Settings};
use crate::error::Result;
use crate::manager::RepositoryManager;
use crate::store::{SystemOpener, YamlRepositoryStore};

/// Manager wired to the on-disk store and the platform opener
pub type CliManager = RepositoryManager<YamlRepositoryStore, SystemOpener>;

/// Resolved data directory and settings shared by the commands
#[derive(Debug)]
pub struct CommandContext {
    pub data_dir: PathBuf,
    pub settings: Settings,
}

impl CommandContext {
    /// Resolve the data directory and load its settings
    pub fn load(home: Option<&Path>) -> Result<Self> {
        let data_dir = config::data_dir(home)?;
        let settings = Settings::load(&data_dir)?;
        tracing::debug!(data_dir = %data_dir.display(), "Loaded settings");
        Ok(Self { data_dir, settings })
    }

    pub fn manager(&self) -> CliManager {
        RepositoryManager::new(
            Arc::new(YamlRepositoryStore::new(&self.data_dir)),
            Arc::new(SystemOpener::new()),
        )
        .with_submit_timeout(self.settings.submit_timeout())
    }
}

/// Runtime the synchronous command entry points block on
pub fn runtime() -> Result<tokio::runtime::Runtime> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime)
}
