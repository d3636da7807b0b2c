//! SVG realization of drawing instructions.
//!
//! This is the rendering surface the core emits into: instructions are
//! replayed in order onto an SVG document. Gradient paints become
//! `<linearGradient>` defs in user-space coordinates, deduplicated across
//! the segments that share them.

use std::fmt::Write;

use tl_core::{Anchor, DrawInstruction, Paint, Rgb};

/// A gradient def already emitted, keyed by endpoint colors and geometry.
type GradientKey = (Rgb, Rgb, u64, u64);

/// Renders drawing instructions as a standalone SVG document.
pub fn document(instructions: &[DrawInstruction]) -> String {
    let (width, height) = canvas_size(instructions);
    let mut defs = String::new();
    let mut body = String::new();
    let mut gradients: Vec<GradientKey> = Vec::new();

    for instruction in instructions {
        match instruction {
            DrawInstruction::Background { width, height, fill } => {
                let _ = writeln!(
                    body,
                    r#"  <rect width="{width}" height="{height}" fill="{fill}" />"#
                );
            }
            DrawInstruction::Line {
                x1,
                y1,
                x2,
                y2,
                stroke,
                stroke_width,
            } => match stroke {
                Paint::Solid(color) => {
                    let _ = writeln!(
                        body,
                        r#"  <line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{color}" stroke-width="{stroke_width}" />"#
                    );
                }
                Paint::Gradient { start, end, x1: gx1, x2: gx2 } => {
                    let id = gradient_id(&mut gradients, &mut defs, (*start, *end, gx1.to_bits(), gx2.to_bits()));
                    let _ = writeln!(
                        body,
                        r#"  <line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="url(#trunk{id})" stroke-width="{stroke_width}" stroke-linecap="round" />"#
                    );
                }
            },
            DrawInstruction::Text {
                x,
                y,
                content,
                font_size,
                anchor,
            } => {
                let anchor = match anchor {
                    Anchor::Start => "start",
                    Anchor::End => "end",
                };
                let _ = writeln!(
                    body,
                    r#"  <text x="{x}" y="{y}" font-size="{font_size}" text-anchor="{anchor}">{}</text>"#,
                    escape(content)
                );
            }
        }
    }

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    if !defs.is_empty() {
        svg.push_str("  <defs>\n");
        svg.push_str(&defs);
        svg.push_str("  </defs>\n");
    }
    svg.push_str(&body);
    svg.push_str("</svg>\n");
    svg
}

/// Canvas dimensions, taken from the background instruction.
fn canvas_size(instructions: &[DrawInstruction]) -> (f64, f64) {
    instructions
        .iter()
        .find_map(|instruction| match instruction {
            DrawInstruction::Background { width, height, .. } => Some((*width, *height)),
            _ => None,
        })
        .unwrap_or((0.0, 0.0))
}

/// Returns the def index for a gradient, emitting the def on first use.
fn gradient_id(gradients: &mut Vec<GradientKey>, defs: &mut String, key: GradientKey) -> usize {
    if let Some(id) = gradients.iter().position(|existing| *existing == key) {
        return id;
    }

    gradients.push(key);
    let id = gradients.len() - 1;
    let (start, end, x1, x2) = key;
    let (x1, x2) = (f64::from_bits(x1), f64::from_bits(x2));
    let _ = writeln!(
        defs,
        r#"    <linearGradient id="trunk{id}" gradientUnits="userSpaceOnUse" x1="{x1}" y1="0" x2="{x2}" y2="0">"#
    );
    let _ = writeln!(defs, r#"      <stop offset="0%" stop-color="{start}" />"#);
    let _ = writeln!(defs, r#"      <stop offset="100%" stop-color="{end}" />"#);
    let _ = writeln!(defs, "    </linearGradient>");
    id
}

/// Escapes text content for XML.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
