//! Render command producing an SVG document.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tl_core::Layout;

use super::util;
use crate::svg;

/// Renders the project file as SVG onto `writer`.
pub fn run<W: Write>(writer: &mut W, projects_path: &Path, layout: &Layout) -> Result<()> {
    let projects = util::load_projects(projects_path)?;
    let instructions = tl_core::render(&projects, layout).context("failed to lay out timeline")?;
    tracing::debug!(
        projects = projects.len(),
        instructions = instructions.len(),
        "rendering timeline"
    );

    writer
        .write_all(svg::document(&instructions).as_bytes())
        .context("failed to write SVG output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_projects(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("projects.json");
        std::fs::write(&path, contents).unwrap();
        (temp, path)
    }

    #[test]
    fn renders_a_complete_svg_document() {
        let (_temp, path) = write_projects(
            r#"[
                {"name": "alpha", "start": "2024-01-01", "end": "2024-01-10"},
                {"start": "2024-01-05", "end": "2024-01-15"}
            ]"#,
        );

        let mut output = Vec::new();
        run(&mut output, &path, &Layout::default()).unwrap();
        let svg = String::from_utf8(output).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("linearGradient"));
        assert!(svg.contains(">alpha</text>"));
        assert!(svg.contains(">Project 2</text>"));
        assert!(svg.contains(">2024-01-01</text>"));
        assert!(svg.contains(">2024-01-15</text>"));
    }

    #[test]
    fn empty_project_list_is_a_structural_error() {
        let (_temp, path) = write_projects("[]");

        let mut output = Vec::new();
        let error = run(&mut output, &path, &Layout::default()).unwrap_err();

        assert!(format!("{error:#}").contains("no projects supplied"));
        assert!(output.is_empty());
    }
}
