//! Core geometry for the trunk-and-branch timeline renderer.
//!
//! This crate contains the fundamental types and logic for:
//! - Sweep: converting project intervals into constant-activity segments
//!   and branch markers
//! - Draw: mapping those entries onto abstract drawing instructions
//! - Color: sampling the time gradient that colors the trunk

use chrono::{DateTime, Utc};
use thiserror::Error;

pub mod color;
mod draw;
mod layout;
mod project;
mod sweep;

pub use color::{Gradient, Rgb};
pub use draw::{Anchor, DrawInstruction, Paint, map_entries};
pub use layout::Layout;
pub use project::{Project, parse_timestamp};
pub use sweep::{TimelineEntry, build_entries};

/// Errors that abort a render.
///
/// Anything recoverable (a date that cannot be placed on the gradient, a
/// zero-width span) is handled inline with a logged fallback instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// No projects were supplied; the sweep needs at least one event.
    #[error("no projects supplied")]
    EmptyInput,

    /// A project interval runs backwards.
    #[error("project {index} ends before it starts ({start} > {end})")]
    ReversedProject {
        index: usize,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// No finite-duration segment exists to establish a date span.
    #[error("no finite-duration segment to establish a date span")]
    EmptySpan,
}

/// Renders projects into drawing instructions in one pass.
///
/// Equivalent to [`build_entries`] followed by [`map_entries`]; both stages
/// are pure, so callers needing the intermediate entry sequence can run
/// them separately.
pub fn render(
    projects: &[Project],
    layout: &Layout,
) -> Result<Vec<DrawInstruction>, RenderError> {
    let entries = build_entries(projects)?;
    map_entries(&entries, projects, layout)
}
