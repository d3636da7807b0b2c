//! Visual layout configuration.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Canvas geometry and stroke parameters.
///
/// All lengths are in drawing units (pixels for the SVG surface). Unset
/// fields fall back to their defaults during deserialization so hosts can
/// override just the values they care about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    /// Horizontal inset of the drawable span on both sides.
    pub padding: f64,
    /// Length of the vertical tick above the trunk at each project end.
    pub branch_length: f64,
    /// Trunk stroke width with zero active projects.
    pub base_thickness: f64,
    /// Additional trunk stroke width per concurrently active project.
    pub thickness_per_active: f64,
    /// Color at the earliest date on the timeline.
    pub gradient_start: Rgb,
    /// Color at the latest date on the timeline.
    pub gradient_end: Rgb,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 200.0,
            padding: 50.0,
            branch_length: 30.0,
            base_thickness: 5.0,
            thickness_per_active: 5.0,
            gradient_start: Rgb::new(153, 255, 153),
            gradient_end: Rgb::new(51, 0, 0),
        }
    }
}

impl Layout {
    /// Width of the span between the two padded edges.
    pub fn inner_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    /// Vertical center of the trunk.
    pub fn trunk_y(&self) -> f64 {
        self.height / 2.0
    }

    /// Trunk stroke width for a concurrent activity count, floored at zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn thickness(&self, active: i64) -> f64 {
        (self.base_thickness + active as f64 * self.thickness_per_active).max(0.0)
    }
}
