// File: crates/interval-core/src/recording.rs
// Summary: In-memory surface that logs draw calls and replays them into resolved shapes.

use crate::geometry::{Point, RectF};
use crate::surface::{CanvasSurface, StyleState};
use crate::theme::Color;

/// One primitive call, exactly as issued by the renderer.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Save,
    Restore,
    Clear(Color),
    SetFill(Color),
    SetStroke(Color),
    SetLineWidth(f32),
    SetLineDash(Vec<f32>),
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Stroke,
    FillRect(RectF),
    FillCircle { center: Point, radius: f32 },
    FillText { text: String, anchor: Point, size: f32 },
}

/// A painted primitive with the style that was active when it was drawn.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Stroked path; each inner vec is one subpath started by `move_to`.
    Path { subpaths: Vec<Vec<Point>>, color: Color, width: f32, dash: Vec<f32> },
    Rect { rect: RectF, color: Color },
    Circle { center: Point, radius: f32, color: Color },
    Text { text: String, anchor: Point, size: f32, color: Color },
}

pub struct RecordingSurface {
    width: i32,
    height: i32,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, calls: Vec::new() }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<DrawCall> {
        self.calls
    }

    /// Replay the log through a style stack and return what was painted, in order.
    /// `Clear` is not a shape.
    pub fn shapes(&self) -> Vec<Shape> {
        let mut out = Vec::new();
        let mut state = StyleState::default();
        let mut stack: Vec<StyleState> = Vec::new();
        let mut path: Vec<Vec<Point>> = Vec::new();

        for call in &self.calls {
            match call {
                DrawCall::Save => stack.push(state.clone()),
                DrawCall::Restore => {
                    if let Some(s) = stack.pop() { state = s; }
                }
                DrawCall::Clear(_) => {}
                DrawCall::SetFill(c) => state.fill = *c,
                DrawCall::SetStroke(c) => state.stroke = *c,
                DrawCall::SetLineWidth(w) => state.line_width = *w,
                DrawCall::SetLineDash(d) => state.dash = d.clone(),
                DrawCall::BeginPath => path.clear(),
                DrawCall::MoveTo(p) => path.push(vec![*p]),
                DrawCall::LineTo(p) => match path.last_mut() {
                    Some(sub) => sub.push(*p),
                    None => path.push(vec![*p]),
                },
                DrawCall::Stroke => out.push(Shape::Path {
                    subpaths: path.clone(),
                    color: state.stroke,
                    width: state.line_width,
                    dash: state.dash.clone(),
                }),
                DrawCall::FillRect(rect) => out.push(Shape::Rect { rect: *rect, color: state.fill }),
                DrawCall::FillCircle { center, radius } => {
                    out.push(Shape::Circle { center: *center, radius: *radius, color: state.fill })
                }
                DrawCall::FillText { text, anchor, size } => out.push(Shape::Text {
                    text: text.clone(),
                    anchor: *anchor,
                    size: *size,
                    color: state.fill,
                }),
            }
        }
        out
    }
}

impl CanvasSurface for RecordingSurface {
    fn size(&self) -> (i32, i32) { (self.width, self.height) }
    fn save(&mut self) { self.calls.push(DrawCall::Save); }
    fn restore(&mut self) { self.calls.push(DrawCall::Restore); }
    fn clear(&mut self, color: Color) { self.calls.push(DrawCall::Clear(color)); }
    fn set_fill_color(&mut self, color: Color) { self.calls.push(DrawCall::SetFill(color)); }
    fn set_stroke_color(&mut self, color: Color) { self.calls.push(DrawCall::SetStroke(color)); }
    fn set_line_width(&mut self, width: f32) { self.calls.push(DrawCall::SetLineWidth(width)); }
    fn set_line_dash(&mut self, pattern: &[f32]) { self.calls.push(DrawCall::SetLineDash(pattern.to_vec())); }
    fn begin_path(&mut self) { self.calls.push(DrawCall::BeginPath); }
    fn move_to(&mut self, p: Point) { self.calls.push(DrawCall::MoveTo(p)); }
    fn line_to(&mut self, p: Point) { self.calls.push(DrawCall::LineTo(p)); }
    fn stroke(&mut self) { self.calls.push(DrawCall::Stroke); }
    fn fill_rect(&mut self, rect: RectF) { self.calls.push(DrawCall::FillRect(rect)); }
    fn fill_circle(&mut self, center: Point, radius: f32) {
        self.calls.push(DrawCall::FillCircle { center, radius });
    }
    fn fill_text(&mut self, text: &str, anchor: Point, size: f32) {
        self.calls.push(DrawCall::FillText { text: text.to_string(), anchor, size });
    }
}
