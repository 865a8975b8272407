// File: crates/interval-core/src/surface.rs
// Summary: Backend-agnostic 2-D drawing surface trait and scoped style blocks.

use crate::geometry::{Point, RectF};
use crate::theme::Color;

/// Style registers a surface carries between calls.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleState {
    pub fill: Color,
    pub stroke: Color,
    pub line_width: f32,
    pub dash: Vec<f32>,
}

impl Default for StyleState {
    fn default() -> Self {
        Self { fill: Color::BLACK, stroke: Color::BLACK, line_width: 1.0, dash: Vec::new() }
    }
}

/// Primitive operations the chart renderer needs from a host canvas.
///
/// `save` pushes the style registers and `restore` pops them; an unbalanced
/// `restore` must be a no-op. Paths are built with `begin_path`, `move_to`
/// and `line_to`, then painted by `stroke` using the current stroke color,
/// line width and dash pattern.
pub trait CanvasSurface {
    /// Surface size in pixels.
    fn size(&self) -> (i32, i32);

    fn save(&mut self);
    fn restore(&mut self);

    /// Fill the whole surface with `color`, replacing existing pixels.
    fn clear(&mut self, color: Color);

    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f32);
    /// Empty slice means solid lines.
    fn set_line_dash(&mut self, pattern: &[f32]);

    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn stroke(&mut self);

    fn fill_rect(&mut self, rect: RectF);
    fn fill_circle(&mut self, center: Point, radius: f32);
    /// Draw `text` horizontally centered on `anchor.x` with its baseline at `anchor.y`.
    fn fill_text(&mut self, text: &str, anchor: Point, size: f32);
}

/// Run `f` inside a save/restore pair so style changes do not leak.
pub fn scoped<S, F>(surface: &mut S, f: F)
where
    S: CanvasSurface + ?Sized,
    F: FnOnce(&mut S),
{
    surface.save();
    f(surface);
    surface.restore();
}
