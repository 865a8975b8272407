// File: crates/interval-examples/src/bin/staffing.rs
// Summary: Minimal example that renders a small staffing day to PNG and SVG.

use anyhow::Result;
use interval_core::{IntervalChart, IntervalRecord, IntervalSeries, RenderOptions};
use interval_render_skia::RasterRender;

fn main() -> Result<()> {
    // (label, required, assigned, lower bound, upper bound)
    let rows = [
        ("00:00", 5.0, 5.0, 4.0, 6.0),
        ("00:30", 5.0, 5.0, 4.0, 6.0),
        ("01:00", 0.0, 0.0, 0.0, 1.0),
    ];
    let records = rows
        .iter()
        .map(|&(label, req, asg, lo, hi)| IntervalRecord::try_new(label, req, asg, lo, hi))
        .collect::<Result<Vec<_>, _>>()?;

    let chart = IntervalChart::new(IntervalSeries::try_from_records(records)?);
    let opts = RenderOptions { draw_labels: true, ..RenderOptions::default() };

    let out = std::path::PathBuf::from("target/out/example_staffing.png");
    chart.render_to_png(&opts, &out)?;
    println!("Wrote {}", out.display());

    let out_svg = out.with_extension("svg");
    chart.render_to_svg(&opts, &out_svg)?;
    println!("Wrote {}", out_svg.display());
    Ok(())
}
