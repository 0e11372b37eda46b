//! Settings and data directory resolution
//!
//! Settings live in `config.yaml` inside the data directory. Every field has a
//! default, so a missing file or an empty one is fine.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkillReposError};
use crate::manager::DEFAULT_SUBMIT_TIMEOUT;

/// Environment variable overriding the data directory
pub const HOME_ENV: &str = "SKILLREPOS_HOME";

/// Data directory name under the user's data directory
const DATA_DIR: &str = "skillrepos";

/// Settings file name inside the data directory
pub const CONFIG_FILE: &str = "config.yaml";

/// Get the data directory path
///
/// Resolution order: `home_override` (the `--home` flag), then `SKILLREPOS_HOME`,
/// then the platform's data directory with a `skillrepos` subdirectory.
pub fn data_dir(home_override: Option<&Path>) -> Result<PathBuf> {
    if let Some(home) = home_override {
        return Ok(home.to_path_buf());
    }

    if let Ok(home) = std::env::var(HOME_ENV) {
        if !home.trim().is_empty() {
            return Ok(PathBuf::from(home));
        }
    }

    let base = dirs::data_dir().ok_or_else(|| SkillReposError::IoError {
        message: "Could not determine data directory".to_string(),
    })?;

    Ok(base.join(DATA_DIR))
}

/// User settings (config.yaml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Upper bound on one add call, in seconds
    pub submit_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            submit_timeout_secs: DEFAULT_SUBMIT_TIMEOUT.as_secs(),
        }
    }
}

impl Settings {
    /// Load `config.yaml` from `data_dir`, falling back to defaults when absent.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(SkillReposError::ConfigReadFailed {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                });
            }
        };

        Self::from_yaml(&content).map_err(|e| SkillReposError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Parse settings from a YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_secs(self.submit_timeout_secs.max(1))
    }
}
