// File: crates/interval-render-skia/src/lib.rs
// Summary: Skia raster surface implementing CanvasSurface, plus PNG/RGBA render helpers.

use interval_core::geometry::{Point, RectF};
use interval_core::surface::{CanvasSurface, StyleState};
use interval_core::{ChartError, Color, IntervalChart, RenderOptions, Result};
use skia_safe as skia;
use tracing::debug;

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// CPU raster surface. Style registers live on our side; Skia only sees paints.
pub struct SkiaSurface {
    surface: skia::Surface,
    width: i32,
    height: i32,
    state: StyleState,
    stack: Vec<StyleState>,
    path: skia::Path,
}

impl SkiaSurface {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| ChartError::Backend(format!("failed to create {width}x{height} raster surface")))?;
        Ok(Self {
            surface,
            width,
            height,
            state: StyleState::default(),
            stack: Vec::new(),
            path: skia::Path::new(),
        })
    }

    fn fill_paint(&self) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_skia(self.state.fill));
        paint
    }

    fn stroke_paint(&self) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(self.state.line_width);
        paint.set_color(to_skia(self.state.stroke));
        if !self.state.dash.is_empty() {
            paint.set_path_effect(skia::PathEffect::dash(&self.state.dash, 0.0));
        }
        paint
    }

    /// Encode the current pixels as PNG.
    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ChartError::Backend("encode PNG failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Read back unpremultiplied RGBA8 pixels: `(pixels, width, height, stride)`.
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = self.width as usize * 4;
        let mut pixels = vec![0u8; stride * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::Backend("read pixels failed".into()));
        }
        Ok((pixels, self.width as u32, self.height as u32, stride))
    }
}

impl CanvasSurface for SkiaSurface {
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
        self.surface.canvas().clear(to_skia(color));
    }

    fn set_fill_color(&mut self, color: Color) { self.state.fill = color; }
    fn set_stroke_color(&mut self, color: Color) { self.state.stroke = color; }
    fn set_line_width(&mut self, width: f32) { self.state.line_width = width; }
    fn set_line_dash(&mut self, pattern: &[f32]) { self.state.dash = pattern.to_vec(); }

    fn begin_path(&mut self) {
        self.path = skia::Path::new();
    }

    fn move_to(&mut self, p: Point) {
        self.path.move_to((p.x, p.y));
    }

    fn line_to(&mut self, p: Point) {
        self.path.line_to((p.x, p.y));
    }

    fn stroke(&mut self) {
        let paint = self.stroke_paint();
        self.surface.canvas().draw_path(&self.path, &paint);
    }

    fn fill_rect(&mut self, rect: RectF) {
        let paint = self.fill_paint();
        let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
        self.surface.canvas().draw_rect(r, &paint);
    }

    fn fill_circle(&mut self, center: Point, radius: f32) {
        let paint = self.fill_paint();
        self.surface.canvas().draw_circle((center.x, center.y), radius, &paint);
    }

    fn fill_text(&mut self, text: &str, anchor: Point, size: f32) {
        let paint = self.fill_paint();
        let mut font = skia::Font::default();
        font.set_size(size);
        let (advance, _) = font.measure_str(text, Some(&paint));
        self.surface
            .canvas()
            .draw_str(text, (anchor.x - advance / 2.0, anchor.y), &font, &paint);
    }
}

/// Raster output for [`IntervalChart`].
pub trait RasterRender {
    /// Render to a fresh `opts.width` x `opts.height` raster surface.
    fn render_to_surface(&self, opts: &RenderOptions) -> Result<SkiaSurface>;

    fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        self.render_to_surface(opts)?.encode_png()
    }

    /// Render a PNG at `output_png_path`, creating parent directories.
    fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote png");
        Ok(())
    }

    fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        self.render_to_surface(opts)?.to_rgba8()
    }
}

impl RasterRender for IntervalChart {
    fn render_to_surface(&self, opts: &RenderOptions) -> Result<SkiaSurface> {
        let mut surface = SkiaSurface::new(opts.width, opts.height)?;
        self.render(&mut surface, opts)?;
        Ok(surface)
    }
}
