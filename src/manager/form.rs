//! Registration form state
//!
//! A form holds the raw text of both registration paths plus the phase of the
//! current submission and the last error shown to the user.

use std::ops::{Deref, DerefMut};

use crate::domain::{RepositoryKind, RepositoryReference};
use crate::error::{Result, SkillReposError, user_message};
use crate::source::{parse_source_control_url, validate_package_link};

/// Where a form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
}

/// Input fields and submission state of one registration form
#[derive(Debug, Clone, Default)]
pub struct RepositoryForm {
    /// Which registration path the form is on
    pub kind: RepositoryKind,

    /// GitHub URL or `owner/name`
    pub url: String,

    /// Branch; blank means `main`
    pub branch: String,

    /// Label of a package link
    pub package_name: String,

    /// Download URL of a package link
    pub package_url: String,

    phase: FormPhase,
    error: Option<String>,
}

impl RepositoryForm {
    pub fn source_control(url: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            kind: RepositoryKind::SourceControl,
            url: url.into(),
            branch: branch.into(),
            ..Self::default()
        }
    }

    pub fn package_link(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: RepositoryKind::PackageLink,
            package_name: name.into(),
            package_url: url.into(),
            ..Self::default()
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Message from the last failed submission, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Build the reference the current fields describe, without side effects.
    pub fn build_reference(&self) -> Result<RepositoryReference> {
        match self.kind {
            RepositoryKind::SourceControl => {
                let slug = parse_source_control_url(&self.url).ok_or_else(|| {
                    SkillReposError::InvalidReference {
                        input: self.url.trim().to_string(),
                    }
                })?;
                Ok(RepositoryReference::source_control(
                    slug.owner,
                    slug.name,
                    Some(self.branch.as_str()),
                ))
            }
            RepositoryKind::PackageLink => {
                let link = validate_package_link(&self.package_name, &self.package_url)?;
                Ok(RepositoryReference::package_link(link.name, link.url))
            }
        }
    }

    /// Clear the fields of the path that was just submitted.
    pub(crate) fn clear_submitted(&mut self) {
        match self.kind {
            RepositoryKind::SourceControl => {
                self.url.clear();
                self.branch.clear();
            }
            RepositoryKind::PackageLink => {
                self.package_name.clear();
                self.package_url.clear();
            }
        }
        self.error = None;
    }

    pub(crate) fn set_phase(&mut self, phase: FormPhase) {
        tracing::debug!(from = ?self.phase, to = ?phase, kind = %self.kind, "Form phase change");
        self.phase = phase;
    }

    pub(crate) fn show_error(&mut self, err: &SkillReposError) {
        self.error = Some(user_message(err));
    }

    pub(crate) fn clear_error(&mut self) {
        self.error = None;
    }
}

/// Exclusive hold on a form for the length of one submission.
///
/// Dropping the guard returns the form to [`FormPhase::Idle`], so a submission
/// abandoned mid-flight never leaves the form stuck in `Submitting`.
pub(crate) struct SubmissionGuard<'a> {
    form: &'a mut RepositoryForm,
}

impl<'a> SubmissionGuard<'a> {
    /// Take the form, refusing if another submission already holds it.
    pub(crate) fn acquire(form: &'a mut RepositoryForm) -> Result<Self> {
        if form.phase != FormPhase::Idle {
            return Err(SkillReposError::SubmissionInFlight);
        }
        form.clear_error();
        form.set_phase(FormPhase::Validating);
        Ok(Self { form })
    }
}

impl Deref for SubmissionGuard<'_> {
    type Target = RepositoryForm;

    fn deref(&self) -> &Self::Target {
        self.form
    }
}

impl DerefMut for SubmissionGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.form
    }
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        if self.form.phase != FormPhase::Idle {
            self.form.set_phase(FormPhase::Idle);
        }
    }
}
