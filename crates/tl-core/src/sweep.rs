//! Event-sweep conversion of project intervals into timeline entries.
//!
//! # Algorithm Summary
//!
//! 1. Split every project into a Start and an End event
//! 2. Sort events by date, closing ends before opening coincident starts
//! 3. Sweep once, emitting a segment whenever the clock advances and a
//!    branch marker at every project end

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::RenderError;
use crate::project::Project;

/// Which boundary of a project interval an event marks.
///
/// `End` orders before `Start`, so a project ending on the exact date
/// another begins is fully closed before the new one opens and the pair
/// never counts as overlapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum EventKind {
    End,
    Start,
}

/// One boundary of a project interval, not retained after the sweep.
#[derive(Debug, Clone, Copy)]
struct SweepEvent {
    date: DateTime<Utc>,
    kind: EventKind,
    project: usize,
}

/// An entry in the computed timeline, in event-processing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TimelineEntry {
    /// A window of constant concurrent activity.
    Segment {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        /// Number of projects active throughout `[start, end)`.
        active: i64,
    },
    /// A project's end marker.
    Branch {
        date: DateTime<Utc>,
        /// Index of the ending project in the input sequence.
        project: usize,
    },
}

/// Converts projects into an ordered sequence of segments and branches.
///
/// Segments are non-overlapping, chronologically ordered, and only emitted
/// for windows of non-zero width; every project contributes exactly one
/// branch at its end date. Rejects empty input and intervals that run
/// backwards.
pub fn build_entries(projects: &[Project]) -> Result<Vec<TimelineEntry>, RenderError> {
    if projects.is_empty() {
        return Err(RenderError::EmptyInput);
    }
    for (index, project) in projects.iter().enumerate() {
        if project.start > project.end {
            return Err(RenderError::ReversedProject {
                index,
                start: project.start,
                end: project.end,
            });
        }
    }

    let mut events = Vec::with_capacity(projects.len() * 2);
    for (index, project) in projects.iter().enumerate() {
        events.push(SweepEvent {
            date: project.start,
            kind: EventKind::Start,
            project: index,
        });
        events.push(SweepEvent {
            date: project.end,
            kind: EventKind::End,
            project: index,
        });
    }
    // Stable sort keeps insertion order for same-kind ties; those do not
    // affect the count.
    events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.kind.cmp(&b.kind)));

    let mut entries = Vec::new();
    let mut active: i64 = 0;
    let mut boundary = events[0].date;

    for event in &events {
        // Sample the count before this event's own delta applies, so the
        // emitted window's thickness is constant across its whole width.
        if event.date > boundary {
            entries.push(TimelineEntry::Segment {
                start: boundary,
                end: event.date,
                active,
            });
            boundary = event.date;
        }

        active += match event.kind {
            EventKind::Start => 1,
            EventKind::End => -1,
        };

        if event.kind == EventKind::End {
            entries.push(TimelineEntry::Branch {
                date: event.date,
                project: event.project,
            });
        }
    }

    Ok(entries)
}
