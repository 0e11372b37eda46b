//! Repository manager
//!
//! Coordinates a registration: validate the form, hand the reference to the
//! store, then clear the submitted fields or show the error. Removal and
//! "open in viewer" are delegated as-is.
//!
//! Field clearing and error display happen only after the store call has
//! resolved, never optimistically.

pub mod form;

pub use form::{FormPhase, RepositoryForm};

use std::sync::Arc;
use std::time::Duration;

use form::SubmissionGuard;

use crate::catalog::{self, RepositoryRow};
use crate::domain::{DiscoveredSkill, RepositoryReference};
use crate::error::{Result, SkillReposError, surface_add_error};
use crate::store::{ExternalOpener, RepositoryStore};

/// Default upper bound on a single add call
pub const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(30);

/// Registers, removes and opens repositories through its collaborators
pub struct RepositoryManager<S, O> {
    store: Arc<S>,
    opener: Arc<O>,
    submit_timeout: Duration,
}

impl<S, O> RepositoryManager<S, O>
where
    S: RepositoryStore,
    O: ExternalOpener,
{
    pub fn new(store: Arc<S>, opener: Arc<O>) -> Self {
        Self {
            store,
            opener,
            submit_timeout: DEFAULT_SUBMIT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_submit_timeout(mut self, timeout: Duration) -> Self {
        self.submit_timeout = timeout;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Submit the form on its selected path.
    ///
    /// Validation failures return before the store is called. On success the
    /// submitted fields are cleared and the stored reference is returned; on
    /// failure the fields are kept and the error text is set on the form.
    pub async fn submit(&self, form: &mut RepositoryForm) -> Result<RepositoryReference> {
        let mut form = SubmissionGuard::acquire(form)?;

        let repo = match form.build_reference() {
            Ok(repo) => repo,
            Err(err) => {
                tracing::debug!(error = %err, "Form rejected before submission");
                form.show_error(&err);
                return Err(err);
            }
        };

        form.set_phase(FormPhase::Submitting);
        match self.add_with_timeout(repo.clone()).await {
            Ok(()) => {
                tracing::info!(key = %repo.key(), kind = %repo.kind, "Repository added");
                form.clear_submitted();
                Ok(repo)
            }
            Err(err) => {
                tracing::debug!(key = %repo.key(), error = %err, "Repository add failed");
                form.show_error(&err);
                Err(err)
            }
        }
    }

    async fn add_with_timeout(&self, repo: RepositoryReference) -> Result<()> {
        match tokio::time::timeout(self.submit_timeout, self.store.add_repository(repo)).await {
            Ok(result) => result.map_err(surface_add_error),
            Err(_) => Err(SkillReposError::AddTimedOut {
                seconds: self.submit_timeout.as_secs(),
            }),
        }
    }

    /// Remove the repository registered under `owner`/`name`.
    ///
    /// No local checks; whatever the store reports is returned to the caller.
    pub async fn remove(&self, owner: &str, name: &str) -> Result<()> {
        self.store.remove_repository(owner, name).await?;
        tracing::info!(owner, name, "Repository removed");
        Ok(())
    }

    /// Ask the opener to show `repo`. Failures are logged, never returned.
    pub async fn open(&self, repo: &RepositoryReference) {
        let url = repo.web_url();
        if url.is_empty() {
            tracing::warn!(key = %repo.key(), "Repository has no URL to open");
            return;
        }
        if let Err(err) = self.opener.open(&url).await {
            tracing::warn!(url = %url, error = %err, "Failed to open repository");
        }
    }

    /// Rows for the current repository list against `skills`.
    pub async fn rows(&self, skills: &[DiscoveredSkill]) -> Result<Vec<RepositoryRow>> {
        let repos = self.store.list_repositories().await?;
        Ok(catalog::rows(&repos, skills))
    }
}
