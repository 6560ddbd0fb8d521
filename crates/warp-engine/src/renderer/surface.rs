//! Drawing-surface contract.
//!
//! The engine never talks to a concrete raster target. Stars draw through
//! [`Surface`], which the web bridge implements on top of a Canvas2D context
//! and [`DrawList`](super::draw_list::DrawList) implements by recording
//! commands (headless runs and tests).
//!
//! Coordinates are screen space: origin at the top-left corner, y down.

use glam::Vec2;

/// RGB color, components in 0.0 - 1.0. Opacity is surface state
/// (see [`Surface::set_alpha`]) rather than part of the color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// CSS `#rrggbb` form, as accepted by canvas fill/stroke styles.
    pub fn to_css(self) -> String {
        let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02X}{:02X}{:02X}", c(self.r), c(self.g), c(self.b))
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// An addressable 2D raster target with immediate-mode primitives.
pub trait Surface {
    /// Clear the axis-aligned rectangle starting at `origin`.
    fn clear_rect(&mut self, origin: Vec2, size: Vec2);

    /// Global opacity applied to subsequent fills and strokes.
    fn set_alpha(&mut self, alpha: f32);

    fn set_fill_color(&mut self, color: Color);

    fn set_stroke_color(&mut self, color: Color);

    /// Fill a circle. Non-positive radii draw nothing.
    fn fill_circle(&mut self, center: Vec2, radius: f32);

    /// Stroke a straight segment with the current stroke color.
    fn stroke_line(&mut self, from: Vec2, to: Vec2);
}
