//! Mapping timeline entries onto abstract drawing instructions.
//!
//! The mapper is the second half of a render: it takes the entry sequence
//! produced by the sweep, establishes the overall date span, and emits the
//! ordered drawing operations a rendering surface replays verbatim.

use chrono::{DateTime, Utc};

use crate::RenderError;
use crate::color::{Gradient, Rgb};
use crate::layout::Layout;
use crate::project::Project;
use crate::sweep::TimelineEntry;

/// Stroke width of a branch tick.
const BRANCH_STROKE_WIDTH: f64 = 2.0;
/// Offset of a branch label right of its tick.
const LABEL_DX: f64 = 5.0;
/// Offset of a branch label above the top of its tick.
const LABEL_DY: f64 = 5.0;
/// Font size for branch and axis labels.
const LABEL_FONT_SIZE: f64 = 12.0;
/// Distance of the axis line above the bottom edge.
const AXIS_OFFSET: f64 = 20.0;
/// Distance of the axis labels above the bottom edge.
const AXIS_LABEL_OFFSET: f64 = 5.0;
const AXIS_STROKE_WIDTH: f64 = 1.0;
/// Calendar-date form for axis labels, no time-of-day component.
const AXIS_DATE_FORMAT: &str = "%Y-%m-%d";

/// Horizontal anchoring of a text instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    End,
}

/// How a line is stroked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Rgb),
    /// Linear horizontal ramp between two x positions in canvas space.
    Gradient {
        start: Rgb,
        end: Rgb,
        x1: f64,
        x2: f64,
    },
}

/// One abstract drawing operation, consumed in order by a rendering
/// surface the core does not own.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawInstruction {
    Background {
        width: f64,
        height: f64,
        fill: Rgb,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Paint,
        stroke_width: f64,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        font_size: f64,
        anchor: Anchor,
    },
}

/// The date range covered by the segment entries.
///
/// Branch entries do not contribute: an instantaneous project can place
/// its branch outside this span, which the color path recovers from.
#[derive(Debug, Clone, Copy)]
struct Span {
    min: DateTime<Utc>,
    max: DateTime<Utc>,
    span_ms: i64,
}

impl Span {
    fn from_entries(entries: &[TimelineEntry]) -> Result<Self, RenderError> {
        let mut dates = entries.iter().filter_map(|entry| match entry {
            TimelineEntry::Segment { start, end, .. } => Some((*start, *end)),
            TimelineEntry::Branch { .. } => None,
        });

        let Some(first) = dates.next() else {
            return Err(RenderError::EmptySpan);
        };
        let (min, max) = dates.fold(first, |(min, max), (start, end)| {
            (min.min(start), max.max(end))
        });

        let span_ms = (max - min).num_milliseconds();
        if span_ms == 0 {
            tracing::warn!(
                date = %min,
                "all segment dates coincide, collapsing positions to the span origin"
            );
        }
        Ok(Self { min, max, span_ms })
    }

    /// Normalized position of a date within the span.
    ///
    /// A zero-width span maps every date to the origin instead of letting
    /// NaN reach coordinates, thickness, or color.
    #[allow(clippy::cast_precision_loss)]
    fn position(&self, date: DateTime<Utc>) -> f64 {
        if self.span_ms == 0 {
            return 0.0;
        }
        (date - self.min).num_milliseconds() as f64 / self.span_ms as f64
    }
}

/// Maps timeline entries onto drawing instructions.
///
/// Emission order is back-to-front: background, then trunk segments and
/// branch marks in entry order, then the date axis. Fails with
/// [`RenderError::EmptySpan`] when no finite-duration segment exists to
/// establish a date span.
pub fn map_entries(
    entries: &[TimelineEntry],
    projects: &[Project],
    layout: &Layout,
) -> Result<Vec<DrawInstruction>, RenderError> {
    let span = Span::from_entries(entries)?;
    let gradient = Gradient {
        start: layout.gradient_start,
        end: layout.gradient_end,
    };
    let x = |date: DateTime<Utc>| layout.padding + span.position(date) * layout.inner_width();
    let trunk_y = layout.trunk_y();

    let mut instructions = vec![DrawInstruction::Background {
        width: layout.width,
        height: layout.height,
        fill: Rgb::WHITE,
    }];

    // Every segment is stroked with one gradient spanning the whole
    // timeline, so adjacent segments read as a single continuous ramp.
    let trunk_paint = Paint::Gradient {
        start: layout.gradient_start,
        end: layout.gradient_end,
        x1: x(span.min),
        x2: x(span.max),
    };

    for entry in entries {
        match entry {
            TimelineEntry::Segment { start, end, active } => {
                instructions.push(DrawInstruction::Line {
                    x1: x(*start),
                    y1: trunk_y,
                    x2: x(*end),
                    y2: trunk_y,
                    stroke: trunk_paint,
                    stroke_width: layout.thickness(*active),
                });
            }
            TimelineEntry::Branch { date, project } => {
                let tick_x = x(*date);
                let tick_top = trunk_y - layout.branch_length;

                // Branches take the color of their project's start date, so
                // each mark points back to where its project began.
                let (color, label) = match projects.get(*project) {
                    Some(found) => (
                        gradient.sample(span.position(found.start)),
                        found.label(*project),
                    ),
                    None => {
                        tracing::warn!(
                            project = *project,
                            "branch references a project outside the input, using fallbacks"
                        );
                        (Rgb::BLACK, format!("Project {}", *project + 1))
                    }
                };

                instructions.push(DrawInstruction::Line {
                    x1: tick_x,
                    y1: trunk_y,
                    x2: tick_x,
                    y2: tick_top,
                    stroke: Paint::Solid(color),
                    stroke_width: BRANCH_STROKE_WIDTH,
                });
                instructions.push(DrawInstruction::Text {
                    x: tick_x + LABEL_DX,
                    y: tick_top - LABEL_DY,
                    content: label,
                    font_size: LABEL_FONT_SIZE,
                    anchor: Anchor::Start,
                });
            }
        }
    }

    let axis_y = layout.height - AXIS_OFFSET;
    instructions.push(DrawInstruction::Line {
        x1: layout.padding,
        y1: axis_y,
        x2: layout.width - layout.padding,
        y2: axis_y,
        stroke: Paint::Solid(Rgb::BLACK),
        stroke_width: AXIS_STROKE_WIDTH,
    });

    let label_y = layout.height - AXIS_LABEL_OFFSET;
    instructions.push(DrawInstruction::Text {
        x: layout.padding,
        y: label_y,
        content: span.min.format(AXIS_DATE_FORMAT).to_string(),
        font_size: LABEL_FONT_SIZE,
        anchor: Anchor::Start,
    });
    instructions.push(DrawInstruction::Text {
        x: layout.width - layout.padding,
        y: label_y,
        content: span.max.format(AXIS_DATE_FORMAT).to_string(),
        font_size: LABEL_FONT_SIZE,
        anchor: Anchor::End,
    });

    Ok(instructions)
}
