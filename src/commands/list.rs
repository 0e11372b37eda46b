//! List command implementation
//!
//! This command lists the registered repositories with their display names,
//! subtitles and skill counts. Skill counts come from an optional JSON file
//! holding the discovered skills; without it every count is zero.

use std::path::{Path, PathBuf};

use crate::catalog::RepositoryRow;
use crate::cli::ListArgs;
use crate::domain::DiscoveredSkill;
use crate::error::{Result, SkillReposError};
use crate::ui::display;

use super::{CommandContext, runtime};

/// Run list command
pub fn run(home: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let skills = match args.skills.as_deref() {
        Some(path) => load_skills(path)?,
        None => Vec::new(),
    };

    let ctx = CommandContext::load(home.as_deref())?;
    let manager = ctx.manager();
    let rows = runtime()?.block_on(manager.rows(&skills))?;

    if args.json {
        println!("{}", rows_json(&rows)?);
    } else {
        display::display_rows(&rows, args.detailed);
    }
    Ok(())
}

/// Read the discovered skills from a JSON array file
pub fn load_skills(path: &Path) -> Result<Vec<DiscoveredSkill>> {
    let content =
        std::fs::read_to_string(path).map_err(|e| SkillReposError::ConfigReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    serde_json::from_str(&content).map_err(|e| SkillReposError::ConfigParseFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn rows_json(rows: &[RepositoryRow]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}
