use glam::Vec2;

use super::surface::{Color, Surface};

/// Kind of a recorded draw command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DrawOp {
    Clear = 0,
    Circle = 1,
    Line = 2,
}

impl DrawOp {
    /// Decode the `op` float of a [`DrawCommand`].
    /// Returns None if the value is not a known op.
    pub fn from_f32(value: f32) -> Option<Self> {
        match value as i32 {
            0 if value == 0.0 => Some(Self::Clear),
            1 if value == 1.0 => Some(Self::Circle),
            2 if value == 2.0 => Some(Self::Line),
            _ => None,
        }
    }

    pub fn as_f32(self) -> f32 {
        self as u8 as f32
    }
}

/// One recorded primitive with its resolved style.
///
/// Field use per op:
/// - `Clear`: `(x0, y0)` corner, `(x1, y1)` width/height.
/// - `Circle`: `(x0, y0)` center, `x1` radius.
/// - `Line`: `(x0, y0)` to `(x1, y1)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DrawCommand {
    pub op: f32,
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub alpha: f32,
}

impl DrawCommand {
    pub fn op(&self) -> Option<DrawOp> {
        DrawOp::from_f32(self.op)
    }
}

/// A [`Surface`] that records commands instead of rasterizing them.
///
/// Style state (alpha, fill and stroke color) is resolved at record time,
/// so every command is self-contained and can be checked on its own.
pub struct DrawList {
    commands: Vec<DrawCommand>,
    alpha: f32,
    fill: Color,
    stroke: Color,
}

impl DrawList {
    pub fn new() -> Self {
        Self::with_capacity(512)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
            alpha: 1.0,
            fill: Color::BLACK,
            stroke: Color::BLACK,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop recorded commands. Style state is kept.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Commands of one kind, in recording order.
    pub fn iter_op(&self, op: DrawOp) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(move |c| c.op() == Some(op))
    }

    fn record(&mut self, op: DrawOp, a: Vec2, b: Vec2, color: Color) {
        self.commands.push(DrawCommand {
            op: op.as_f32(),
            x0: a.x,
            y0: a.y,
            x1: b.x,
            y1: b.y,
            r: color.r,
            g: color.g,
            b: color.b,
            alpha: self.alpha,
        });
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for DrawList {
    fn clear_rect(&mut self, origin: Vec2, size: Vec2) {
        self.record(DrawOp::Clear, origin, size, Color::BLACK);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = color;
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        if radius <= 0.0 {
            return;
        }
        self.record(DrawOp::Circle, center, Vec2::new(radius, 0.0), self.fill);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2) {
        self.record(DrawOp::Line, from, to, self.stroke);
    }
}
