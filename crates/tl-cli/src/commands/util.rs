//! Shared utilities for CLI commands.

use std::path::Path;

use anyhow::{Context, Result};
use tl_core::Project;

/// Loads the project list from a JSON file.
///
/// The file holds an array of `{"name"?, "start", "end"}` records; dates
/// are RFC 3339 timestamps or bare `YYYY-MM-DD` calendar dates.
pub fn load_projects(path: &Path) -> Result<Vec<Project>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let projects: Vec<Project> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse projects from {}", path.display()))?;
    Ok(projects)
}
