// File: crates/interval-core/src/lib.rs
// Summary: Core library entry point; exports records, layout, surfaces and the chart renderer.

pub mod chart;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod loader;
pub mod record;
pub mod recording;
pub mod scale;
pub mod surface;
pub mod svg;
pub mod theme;
pub mod types;

pub use chart::{IntervalChart, RenderOptions};
pub use config::ChartConfig;
pub use error::{ChartError, Result};
pub use layout::ChartLayout;
pub use loader::load_records;
pub use record::{IntervalRecord, IntervalSeries};
pub use recording::{DrawCall, RecordingSurface, Shape};
pub use surface::CanvasSurface;
pub use svg::SvgSurface;
pub use theme::{Color, Theme};
