//! Color mapping for the timeline gradient.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Simple RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Fallback for dates that cannot be placed on the gradient.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Canvas background fill.
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    /// Format as CSS: rgb(r,g,b)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Linear color ramp between two endpoint colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub start: Rgb,
    pub end: Rgb,
}

impl Gradient {
    /// Samples the ramp at `position` in `[0, 1]`.
    ///
    /// Positions outside the range (including NaN) fall back to black and
    /// log the anomaly, so one bad date never blanks the whole drawing.
    pub fn sample(&self, position: f64) -> Rgb {
        if !(0.0..=1.0).contains(&position) {
            tracing::warn!(position, "gradient position out of range, using fallback");
            return Rgb::BLACK;
        }
        Rgb::new(
            lerp(self.start.r, self.end.r, position),
            lerp(self.start.g, self.end.g, position),
            lerp(self.start.b, self.end.b, position),
        )
    }
}

/// Interpolates one channel, rounding to the nearest integer value.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp(from: u8, to: u8, position: f64) -> u8 {
    let value = f64::from(from) + position * (f64::from(to) - f64::from(from));
    value.round() as u8
}
