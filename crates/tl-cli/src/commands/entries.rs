//! Entries command for inspecting the computed timeline.
//!
//! Shows the segment/branch sequence the renderer would draw, either as a
//! human-readable table or as JSON for downstream tooling.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tl_core::TimelineEntry;

use super::util;

/// Date form used in the human-readable table.
const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn run<W: Write>(writer: &mut W, projects_path: &Path, json: bool) -> Result<()> {
    let projects = util::load_projects(projects_path)?;
    let entries =
        tl_core::build_entries(&projects).context("failed to build timeline entries")?;

    if json {
        serde_json::to_writer_pretty(&mut *writer, &entries)
            .context("failed to serialize entries")?;
        writeln!(writer)?;
        return Ok(());
    }

    for entry in &entries {
        match entry {
            TimelineEntry::Segment { start, end, active } => {
                writeln!(
                    writer,
                    "segment  {} .. {}  active {active}",
                    start.format(DATE_FORMAT),
                    end.format(DATE_FORMAT)
                )?;
            }
            TimelineEntry::Branch { date, project } => {
                let label = projects.get(*project).map_or_else(
                    || format!("Project {}", *project + 1),
                    |found| found.label(*project),
                );
                writeln!(writer, "branch   {}  {label}", date.format(DATE_FORMAT))?;
            }
        }
    }

    Ok(())
}
