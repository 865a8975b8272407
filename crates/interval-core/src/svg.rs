// File: crates/interval-core/src/svg.rs
// Summary: String-building SVG surface. No DOM, one element per painted primitive.

use std::fmt::Write as _;

use crate::geometry::{Point, RectF};
use crate::surface::{CanvasSurface, StyleState};
use crate::theme::Color;

pub struct SvgSurface {
    width: i32,
    height: i32,
    state: StyleState,
    stack: Vec<StyleState>,
    path: String,
    body: String,
}

impl SvgSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            state: StyleState::default(),
            stack: Vec::new(),
            path: String::new(),
            body: String::new(),
        }
    }

    /// Close the document and return it.
    pub fn finish(self) -> String {
        let mut out = String::with_capacity(self.body.len() + 160);
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    fn paint_attr(name: &str, c: Color) -> String {
        if c.a == 255 {
            format!(r#"{name}="{}""#, c.to_hex_rgb())
        } else {
            format!(r#"{name}="{}" {name}-opacity="{:.3}""#, c.to_hex_rgb(), c.opacity())
        }
    }
}

fn escape(text: &str) -> String {
    let mut s = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => s.push_str("&amp;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            '"' => s.push_str("&quot;"),
            _ => s.push(ch),
        }
    }
    s
}

impl CanvasSurface for SvgSurface {
    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(s) = self.stack.pop() {
            self.state = s;
        }
    }

    fn clear(&mut self, color: Color) {
        self.body.clear();
        if color.a > 0 {
            let _ = writeln!(
                self.body,
                r#"<rect x="0" y="0" width="{}" height="{}" {}/>"#,
                self.width,
                self.height,
                Self::paint_attr("fill", color)
            );
        }
    }

    fn set_fill_color(&mut self, color: Color) { self.state.fill = color; }
    fn set_stroke_color(&mut self, color: Color) { self.state.stroke = color; }
    fn set_line_width(&mut self, width: f32) { self.state.line_width = width; }
    fn set_line_dash(&mut self, pattern: &[f32]) { self.state.dash = pattern.to_vec(); }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, p: Point) {
        let _ = write!(self.path, "M{:.2} {:.2} ", p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        let _ = write!(self.path, "L{:.2} {:.2} ", p.x, p.y);
    }

    fn stroke(&mut self) {
        if self.path.is_empty() {
            return;
        }
        let dash = if self.state.dash.is_empty() {
            String::new()
        } else {
            let parts: Vec<String> = self.state.dash.iter().map(|d| format!("{d}")).collect();
            format!(r#" stroke-dasharray="{}""#, parts.join(","))
        };
        let _ = writeln!(
            self.body,
            r#"<path d="{}" fill="none" {} stroke-width="{}"{}/>"#,
            self.path.trim_end(),
            Self::paint_attr("stroke", self.state.stroke),
            self.state.line_width,
            dash
        );
    }

    fn fill_rect(&mut self, rect: RectF) {
        let _ = writeln!(
            self.body,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" {}/>"#,
            rect.left,
            rect.top,
            rect.width(),
            rect.height(),
            Self::paint_attr("fill", self.state.fill)
        );
    }

    fn fill_circle(&mut self, center: Point, radius: f32) {
        let _ = writeln!(
            self.body,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{}" {}/>"#,
            center.x,
            center.y,
            radius,
            Self::paint_attr("fill", self.state.fill)
        );
    }

    fn fill_text(&mut self, text: &str, anchor: Point, size: f32) {
        let _ = writeln!(
            self.body,
            r#"<text x="{:.2}" y="{:.2}" font-family="monospace" font-size="{}" text-anchor="middle" {}>{}</text>"#,
            anchor.x,
            anchor.y,
            size,
            Self::paint_attr("fill", self.state.fill),
            escape(text)
        );
    }
}
