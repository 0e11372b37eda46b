//! Platform URL opener
//!
//! Tries the platform's opener commands in order and settles for the first
//! one that starts and exits successfully.

use async_trait::async_trait;
use tokio::process::Command;

use super::ExternalOpener;
use crate::error::{Result, SkillReposError};

/// A program plus the arguments placed before the URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenerCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl OpenerCommand {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Candidate openers for the current platform, most preferred first
pub fn platform_commands() -> Vec<OpenerCommand> {
    if cfg!(target_os = "macos") {
        vec![OpenerCommand::new("open", &[])]
    } else if cfg!(target_os = "windows") {
        vec![OpenerCommand::new("cmd", &["/C", "start", ""])]
    } else {
        vec![
            OpenerCommand::new("xdg-open", &[]),
            OpenerCommand::new("gio", &["open"]),
        ]
    }
}

/// Opens URLs with the operating system's default handler
#[derive(Debug, Clone)]
pub struct SystemOpener {
    commands: Vec<OpenerCommand>,
}

impl Default for SystemOpener {
    fn default() -> Self {
        Self {
            commands: platform_commands(),
        }
    }
}

impl SystemOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_commands(commands: Vec<OpenerCommand>) -> Self {
        Self { commands }
    }
}

#[async_trait]
impl ExternalOpener for SystemOpener {
    async fn open(&self, url: &str) -> Result<()> {
        let mut failures = Vec::new();

        for candidate in &self.commands {
            let status = Command::new(&candidate.program)
                .args(&candidate.args)
                .arg(url)
                .status()
                .await;

            match status {
                Ok(status) if status.success() => return Ok(()),
                Ok(status) => failures.push(format!("{} exited with {status}", candidate.program)),
                Err(e) => failures.push(format!("{}: {e}", candidate.program)),
            }
        }

        let reason = if failures.is_empty() {
            "no opener available on this platform".to_string()
        } else {
            failures.join("; ")
        };

        Err(SkillReposError::OpenFailed {
            target: url.to_string(),
            reason,
        })
    }
}
