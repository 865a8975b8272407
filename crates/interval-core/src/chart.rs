// File: crates/interval-core/src/chart.rs
// Summary: IntervalChart and the single-pass rendering pipeline over any CanvasSurface.

use tracing::debug;

use crate::error::Result;
use crate::geometry::{Point, RectF};
use crate::layout::ChartLayout;
use crate::record::{IntervalRecord, IntervalSeries};
use crate::surface::{scoped, CanvasSurface};
use crate::svg::SvgSurface;
use crate::theme::Theme;
use crate::types::{
    BOUND_DASH, BOUND_HALF_WIDTH, HEIGHT, LABEL_GAP, LABEL_SIZE, LINE_WIDTH, MARKER_RADIUS, OFFSET, WIDTH,
};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Margin on every side of the plot area.
    pub offset: i32,
    pub theme: Theme,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            offset: OFFSET,
            theme: Theme::classic(),
            draw_labels: false,
        }
    }
}

pub struct IntervalChart {
    pub series: IntervalSeries,
}

impl IntervalChart {
    pub fn new(series: IntervalSeries) -> Self {
        Self { series }
    }

    pub fn layout(&self, opts: &RenderOptions) -> Result<ChartLayout> {
        ChartLayout::compute(&self.series, opts.width, opts.height, opts.offset)
    }

    /// Draw the whole chart onto `surface` in one pass: clear, axes, then
    /// bar, marker and bound bracket for each record in order.
    ///
    /// Layout uses `opts.width`/`opts.height`, not the surface size, so a
    /// chart can be drawn into a larger canvas. Options are validated before
    /// any draw call is issued.
    pub fn render<S>(&self, surface: &mut S, opts: &RenderOptions) -> Result<ChartLayout>
    where
        S: CanvasSurface + ?Sized,
    {
        let layout = self.layout(opts)?;
        debug!(
            records = self.series.len(),
            surface = ?surface.size(),
            max_y = layout.max_y,
            step_x = layout.step_x,
            unit_y = layout.unit_y,
            "rendering interval chart"
        );

        surface.clear(opts.theme.background);
        draw_axes(surface, &layout, &opts.theme);

        for (i, rec) in self.series.iter().enumerate() {
            let x = layout.x_at(i);
            draw_bar(surface, &layout, &opts.theme, x, rec);
            draw_marker(surface, &layout, &opts.theme, x, rec);
            draw_bounds(surface, &layout, &opts.theme, x, rec);
            if opts.draw_labels {
                draw_label(surface, &layout, &opts.theme, x, rec);
            }
        }
        Ok(layout)
    }

    /// Render into an SVG document string sized `opts.width` x `opts.height`.
    pub fn render_to_svg_string(&self, opts: &RenderOptions) -> Result<String> {
        let mut svg = SvgSurface::new(opts.width, opts.height);
        self.render(&mut svg, opts)?;
        Ok(svg.finish())
    }

    /// Render an SVG file at `output_svg_path`, creating parent directories.
    pub fn render_to_svg(
        &self,
        opts: &RenderOptions,
        output_svg_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let doc = self.render_to_svg_string(opts)?;
        if let Some(parent) = output_svg_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_svg_path, doc)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_axes<S: CanvasSurface + ?Sized>(surface: &mut S, layout: &ChartLayout, theme: &Theme) {
    let l = layout.offset as f32;
    let t = layout.offset as f32;
    let b = layout.baseline();
    let r = l + layout.chart_width;

    scoped(surface, |s| {
        s.set_line_width(LINE_WIDTH);
        s.set_stroke_color(theme.axis);
        s.begin_path();
        s.move_to(Point::new(l, t));
        s.line_to(Point::new(l, b));
        s.line_to(Point::new(r, b));
        s.stroke();
    });
}

fn draw_bar<S: CanvasSurface + ?Sized>(
    surface: &mut S,
    layout: &ChartLayout,
    theme: &Theme,
    x: f32,
    rec: &IntervalRecord,
) {
    let height = layout.y_scale.length_px(rec.required);
    let width = layout.step_x / 2.0;
    let rect = RectF::from_ltwh(x - layout.step_x / 4.0, layout.baseline() - height, width, height);

    scoped(surface, |s| {
        s.set_fill_color(theme.bar);
        s.fill_rect(rect);
    });
}

fn draw_marker<S: CanvasSurface + ?Sized>(
    surface: &mut S,
    layout: &ChartLayout,
    theme: &Theme,
    x: f32,
    rec: &IntervalRecord,
) {
    let center = Point::new(x, layout.y_at(rec.assigned));
    scoped(surface, |s| {
        s.set_fill_color(theme.marker);
        s.fill_circle(center, MARKER_RADIUS);
    });
}

fn draw_bounds<S: CanvasSurface + ?Sized>(
    surface: &mut S,
    layout: &ChartLayout,
    theme: &Theme,
    x: f32,
    rec: &IntervalRecord,
) {
    let y_lo = layout.y_at(rec.lower_bound);
    let y_hi = layout.y_at(rec.upper_bound);

    scoped(surface, |s| {
        s.set_line_width(LINE_WIDTH);
        s.set_stroke_color(theme.bound);
        s.set_line_dash(&BOUND_DASH);
        s.begin_path();
        s.move_to(Point::new(x - BOUND_HALF_WIDTH, y_lo));
        s.line_to(Point::new(x + BOUND_HALF_WIDTH, y_lo));
        s.move_to(Point::new(x - BOUND_HALF_WIDTH, y_hi));
        s.line_to(Point::new(x + BOUND_HALF_WIDTH, y_hi));
        s.stroke();
        s.set_line_dash(&[]);
    });
}

fn draw_label<S: CanvasSurface + ?Sized>(
    surface: &mut S,
    layout: &ChartLayout,
    theme: &Theme,
    x: f32,
    rec: &IntervalRecord,
) {
    let anchor = Point::new(x, layout.baseline() + LABEL_GAP);
    scoped(surface, |s| {
        s.set_fill_color(theme.label);
        s.fill_text(&rec.label, anchor, LABEL_SIZE);
    });
}
