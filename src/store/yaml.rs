//! File-backed repository store (repositories.yaml)
//!
//! The whole list is read, changed and written back on every mutation.
//! Writes go to a temp file in the same directory that is then renamed over
//! the target, so a crash never leaves a half-written list behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use super::RepositoryStore;
use crate::domain::{RepositoryKey, RepositoryReference};
use crate::error::{Result, SkillReposError};

/// File name of the repository list inside the data directory
pub const REPOSITORIES_FILE: &str = "repositories.yaml";

/// On-disk shape of the repository list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositoryList {
    #[serde(default)]
    pub repositories: Vec<RepositoryReference>,
}

impl RepositoryList {
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Repository store persisted as YAML in the data directory
#[derive(Debug)]
pub struct YamlRepositoryStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl YamlRepositoryStore {
    /// Store backed by `repositories.yaml` inside `data_dir`.
    pub fn new(data_dir: &Path) -> Self {
        Self::at(data_dir.join(REPOSITORIES_FILE))
    }

    /// Store backed by the file at `path`.
    pub fn at(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<RepositoryList> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(RepositoryList::default()),
            Ok(content) => serde_yaml::from_str(&content).map_err(|e| {
                SkillReposError::ConfigParseFailed {
                    path: self.path.display().to_string(),
                    reason: e.to_string(),
                }
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(RepositoryList::default()),
            Err(e) => Err(SkillReposError::ConfigReadFailed {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }

    async fn save(&self, list: &RepositoryList) -> Result<()> {
        let yaml = list.to_yaml()?;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomically(&path, &yaml))
            .await
            .map_err(|e| SkillReposError::IoError {
                message: format!("Failed to write repository list: {e}"),
            })?
    }
}

fn write_atomically(path: &Path, content: &str) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(path).map_err(|e| SkillReposError::IoError {
        message: format!("Failed to replace {}: {}", path.display(), e.error),
    })?;
    Ok(())
}

#[async_trait]
impl RepositoryStore for YamlRepositoryStore {
    async fn add_repository(&self, repo: RepositoryReference) -> Result<()> {
        repo.validate()?;

        let _guard = self.write_lock.lock().await;
        let mut list = self.load().await?;

        let key = repo.key();
        if list.repositories.iter().any(|r| r.key() == key) {
            return Err(SkillReposError::DuplicateRepository {
                key: key.to_string(),
            });
        }

        tracing::debug!(key = %key, path = %self.path.display(), "Persisting repository");
        list.repositories.push(repo);
        self.save(&list).await
    }

    async fn remove_repository(&self, owner: &str, name: &str) -> Result<()> {
        let key = RepositoryKey::new(owner, name);

        let _guard = self.write_lock.lock().await;
        let mut list = self.load().await?;

        let before = list.repositories.len();
        list.repositories.retain(|r| r.key() != key);
        if list.repositories.len() == before {
            return Err(SkillReposError::RepositoryNotFound {
                key: key.to_string(),
            });
        }

        self.save(&list).await
    }

    async fn list_repositories(&self) -> Result<Vec<RepositoryReference>> {
        Ok(self.load().await?.repositories)
    }
}
