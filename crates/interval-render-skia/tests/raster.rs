// File: crates/interval-render-skia/tests/raster.rs
// Purpose: PNG output and RGBA pixel checks on the Skia raster surface.

use interval_core::{IntervalChart, IntervalRecord, IntervalSeries, RenderOptions, Theme};
use interval_render_skia::RasterRender;

fn single_record_chart() -> IntervalChart {
    let rec = IntervalRecord::try_new("00:00", 5.0, 5.0, 4.0, 6.0).unwrap();
    IntervalChart::new(IntervalSeries::try_from_records(vec![rec]).unwrap())
}

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let opts = RenderOptions::default();
    let (px, w, h, stride) = single_record_chart().render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (700, 350));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // classic theme clears to transparent
    assert_eq!(pixel(&px, stride, 10, 10)[3], 0);
    // bar interior
    assert_eq!(pixel(&px, stride, 600, 200), [0x44, 0x77, 0xaa, 0xff]);
    // marker covers the top of the bar
    assert_eq!(pixel(&px, stride, 650, 121), [0xee, 0x66, 0x77, 0xff]);
    // vertical axis
    assert!(pixel(&px, stride, 50, 200)[3] > 0);
    // above the upper bracket nothing is drawn
    assert_eq!(pixel(&px, stride, 650, 60)[3], 0);
}

#[test]
fn dark_theme_fills_background() {
    let opts = RenderOptions { theme: Theme::dark(), ..RenderOptions::default() };
    let (px, _, _, stride) = single_record_chart().render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(pixel(&px, stride, 10, 10), [18, 18, 20, 255]);
}

#[test]
fn render_smoke_png() {
    let chart = single_record_chart();
    let opts = RenderOptions { draw_labels: true, ..RenderOptions::default() };
    let out = std::path::PathBuf::from("target/test_out/smoke.png");

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let decoded = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((decoded.width(), decoded.height()), (700, 350));
}

#[test]
fn invalid_options_are_rejected() {
    let opts = RenderOptions { offset: 400, ..RenderOptions::default() };
    assert!(single_record_chart().render_to_png_bytes(&opts).is_err());
}
