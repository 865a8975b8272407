// File: crates/interval-cli/src/main.rs
// Summary: Loads interval records (JSON/CSV), applies TOML config and flags, renders PNG or SVG.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use interval_core::{load_records, theme, ChartConfig, IntervalChart, RenderOptions};
use interval_render_skia::RasterRender;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Render a staffing interval chart: required (bars), assigned (markers)
/// and acceptable range (dashed brackets).
#[derive(Debug, Parser)]
#[command(name = "interval-chart", version)]
struct Cli {
    /// Records file (.json or .csv)
    input: PathBuf,

    /// Output file; `.svg` writes SVG, anything else PNG.
    /// Defaults to target/out/<input-stem>.png
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML render config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Theme preset (classic, dark, high-contrast)
    #[arg(long)]
    theme: Option<String>,

    #[arg(long)]
    width: Option<i32>,

    #[arg(long)]
    height: Option<i32>,

    /// Margin around the plot area in pixels
    #[arg(long)]
    offset: Option<i32>,

    /// Draw interval labels under the axis
    #[arg(long, overrides_with = "no_labels")]
    labels: bool,

    /// Hide interval labels, even when the config enables them
    #[arg(long, overrides_with = "labels")]
    no_labels: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let opts = resolve_options(&cli)?;
    let series = load_records(&cli.input)
        .with_context(|| format!("failed to load records from '{}'", cli.input.display()))?;
    info!(records = series.len(), path = %cli.input.display(), "loaded records");

    let chart = IntervalChart::new(series);
    let out = cli.output.clone().unwrap_or_else(|| default_output(&cli.input));

    let written = if is_svg(&out) {
        chart.render_to_svg(&opts, &out)
    } else {
        chart.render_to_png(&opts, &out)
    };
    written.with_context(|| format!("failed to render '{}'", out.display()))?;

    info!(path = %out.display(), theme = opts.theme.name, "wrote chart");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

/// Config file first, then command-line overrides.
fn resolve_options(cli: &Cli) -> Result<RenderOptions> {
    let cfg = match &cli.config {
        Some(path) => ChartConfig::load(path)
            .with_context(|| format!("failed to read config '{}'", path.display()))?,
        None => ChartConfig::default(),
    };
    let mut opts = cfg.to_render_options().context("invalid config")?;

    if let Some(name) = &cli.theme {
        opts.theme = theme::find(name);
    }
    if let Some(w) = cli.width { opts.width = w; }
    if let Some(h) = cli.height { opts.height = h; }
    if let Some(o) = cli.offset { opts.offset = o; }
    if cli.labels { opts.draw_labels = true; }
    if cli.no_labels { opts.draw_labels = false; }
    Ok(opts)
}

/// Produce output file name like target/out/<stem>.png
fn default_output(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    out.push(format!("{stem}.png"));
    out
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}
