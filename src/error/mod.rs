//! Error types and handling for skillrepos
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Variants are grouped by where the failure is detected:
//! - reference input: rejected locally, before any collaborator is called
//! - submission: failures around the external add call
//! - store: failures raised by a repository store
//! - config and file system

use miette::Diagnostic;
use thiserror::Error;

/// Text shown when an add fails without a usable message.
pub const ADD_FAILED_MESSAGE: &str = "Failed to add repository";

/// Main error type for skillrepos operations
#[derive(Error, Diagnostic, Debug)]
pub enum SkillReposError {
    // Reference input errors
    #[error("Invalid repository reference: {input}")]
    #[diagnostic(
        code(skillrepos::reference::invalid),
        help("Use owner/name or https://github.com/owner/name(.git)")
    )]
    InvalidReference { input: String },

    #[error("Package name is required")]
    #[diagnostic(code(skillrepos::reference::name_required))]
    NameRequired,

    #[error("Package URL is required")]
    #[diagnostic(code(skillrepos::reference::url_required))]
    UrlRequired,

    #[error("Invalid package URL: {url}")]
    #[diagnostic(
        code(skillrepos::reference::invalid_url),
        help("The URL must be absolute, e.g. https://example.com/skills.zip")
    )]
    InvalidUrl { url: String },

    // Submission errors
    #[error("Failed to add repository")]
    #[diagnostic(code(skillrepos::submit::add_failed))]
    AddFailed,

    #[error("Adding repository timed out after {seconds}s")]
    #[diagnostic(
        code(skillrepos::submit::timed_out),
        help("Raise submit_timeout_secs in config.yaml if the store is slow")
    )]
    AddTimedOut { seconds: u64 },

    #[error("A submission is already in progress for this form")]
    #[diagnostic(code(skillrepos::submit::in_flight))]
    SubmissionInFlight,

    // Store errors
    #[error("{message}")]
    #[diagnostic(code(skillrepos::store::failed))]
    StoreFailed { message: String },

    #[error("Repository '{key}' is already registered")]
    #[diagnostic(
        code(skillrepos::store::duplicate),
        help("Remove the existing entry first or pick a different name")
    )]
    DuplicateRepository { key: String },

    #[error("Repository '{key}' not found")]
    #[diagnostic(
        code(skillrepos::store::not_found),
        help("Run 'skillrepos list' to see registered repositories")
    )]
    RepositoryNotFound { key: String },

    #[error("Invalid repository: {reason}")]
    #[diagnostic(code(skillrepos::store::invalid_repository))]
    InvalidRepository { reason: String },

    #[error("Failed to open '{target}': {reason}")]
    #[diagnostic(code(skillrepos::open::failed))]
    OpenFailed { target: String, reason: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(skillrepos::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(skillrepos::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(skillrepos::fs::io_error))]
    IoError { message: String },
}

impl SkillReposError {
    /// True for failures detected locally before any collaborator was called.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidReference { .. }
                | Self::NameRequired
                | Self::UrlRequired
                | Self::InvalidUrl { .. }
        )
    }
}

/// Converts a failed add into the error surfaced in the form.
///
/// Store failures that carry no message collapse into [`SkillReposError::AddFailed`];
/// everything else passes through unchanged.
pub fn surface_add_error(err: SkillReposError) -> SkillReposError {
    match err {
        SkillReposError::StoreFailed { message } if message.trim().is_empty() => {
            SkillReposError::AddFailed
        }
        other => other,
    }
}

/// The single line of text a form shows for `err`.
pub fn user_message(err: &SkillReposError) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        ADD_FAILED_MESSAGE.to_string()
    } else {
        message
    }
}

impl From<std::io::Error> for SkillReposError {
    fn from(err: std::io::Error) -> Self {
        SkillReposError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for SkillReposError {
    fn from(err: serde_yaml::Error) -> Self {
        SkillReposError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SkillReposError {
    fn from(err: serde_json::Error) -> Self {
        SkillReposError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for SkillReposError {
    fn from(err: inquire::InquireError) -> Self {
        SkillReposError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SkillReposError>;
