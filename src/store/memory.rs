//! In-process repository store

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::RepositoryStore;
use crate::domain::{RepositoryKey, RepositoryReference};
use crate::error::{Result, SkillReposError};

#[derive(Debug, Default)]
struct State {
    repositories: Vec<RepositoryReference>,
    fail_next_add: Option<String>,
    add_calls: usize,
}

/// Repository store kept in memory, with the same rules as the file store
#[derive(Debug, Default)]
pub struct MemoryRepositoryStore {
    state: Mutex<State>,
}

impl MemoryRepositoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repositories(repositories: Vec<RepositoryReference>) -> Self {
        Self {
            state: Mutex::new(State {
                repositories,
                ..State::default()
            }),
        }
    }

    /// Make the next add fail with `message` (which may be blank).
    pub async fn fail_next_add(&self, message: impl Into<String>) {
        self.state.lock().await.fail_next_add = Some(message.into());
    }

    /// Number of add calls received, successful or not.
    pub async fn add_calls(&self) -> usize {
        self.state.lock().await.add_calls
    }
}

#[async_trait]
impl RepositoryStore for MemoryRepositoryStore {
    async fn add_repository(&self, repo: RepositoryReference) -> Result<()> {
        let mut state = self.state.lock().await;
        state.add_calls += 1;

        if let Some(message) = state.fail_next_add.take() {
            return Err(SkillReposError::StoreFailed { message });
        }

        repo.validate()?;
        let key = repo.key();
        if state.repositories.iter().any(|r| r.key() == key) {
            return Err(SkillReposError::DuplicateRepository {
                key: key.to_string(),
            });
        }

        state.repositories.push(repo);
        Ok(())
    }

    async fn remove_repository(&self, owner: &str, name: &str) -> Result<()> {
        let key = RepositoryKey::new(owner, name);
        let mut state = self.state.lock().await;
        let before = state.repositories.len();
        state.repositories.retain(|r| r.key() != key);
        if state.repositories.len() == before {
            return Err(SkillReposError::RepositoryNotFound {
                key: key.to_string(),
            });
        }
        Ok(())
    }

    async fn list_repositories(&self) -> Result<Vec<RepositoryReference>> {
        Ok(self.state.lock().await.repositories.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_then_list() {
        let store = MemoryRepositoryStore::new();
        store
            .add_repository(RepositoryReference::source_control("a", "b", None))
            .await
            .unwrap();
        let repos = store.list_repositories().await.unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(store.add_calls().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_key_rejected() {
        let store = MemoryRepositoryStore::new();
        let repo = RepositoryReference::source_control("a", "b", None);
        store.add_repository(repo.clone()).await.unwrap();
        let err = store.add_repository(repo).await.unwrap_err();
        assert!(matches!(err, SkillReposError::DuplicateRepository { .. }));
    }

    #[tokio::test]
    async fn test_fail_next_add_only_once() {
        let store = MemoryRepositoryStore::new();
        store.fail_next_add("nope").await;
        let repo = RepositoryReference::source_control("a", "b", None);
        assert!(store.add_repository(repo.clone()).await.is_err());
        assert!(store.add_repository(repo).await.is_ok());
    }

    #[tokio::test]
    async fn test_remove_unknown_key() {
        let store = MemoryRepositoryStore::new();
        let err = store.remove_repository("a", "b").await.unwrap_err();
        assert!(matches!(err, SkillReposError::RepositoryNotFound { .. }));
    }
}
