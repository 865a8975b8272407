// File: crates/interval-core/src/layout.rs
// Summary: Per-render layout: plot area, vertical ceiling, slot spacing and scales.

use crate::error::{ChartError, Result};
use crate::record::IntervalSeries;
use crate::scale::{SlotScale, ValueScale};

/// Quantities derived once per render from the surface size, margin and data.
#[derive(Clone, Copy, Debug)]
pub struct ChartLayout {
    pub width: i32,
    pub height: i32,
    pub offset: i32,
    pub chart_width: f32,
    pub chart_height: f32,
    /// Vertical ceiling: largest upper bound plus one unit of headroom.
    pub max_y: f64,
    /// Horizontal spacing per record; zero when there are no records.
    pub step_x: f32,
    /// Pixels per value unit.
    pub unit_y: f32,
    pub x_scale: SlotScale,
    pub y_scale: ValueScale,
}

impl ChartLayout {
    /// Fails when the margin leaves no plot area.
    pub fn compute(series: &IntervalSeries, width: i32, height: i32, offset: i32) -> Result<Self> {
        // i64 so a huge margin cannot overflow the doubled offset
        let margins = 2 * i64::from(offset);
        let plot_w = i64::from(width) - margins;
        let plot_h = i64::from(height) - margins;
        if offset < 0 || plot_w <= 0 || plot_h <= 0 {
            return Err(ChartError::InvalidSurface { width, height, offset });
        }
        let chart_width = plot_w as f32;
        let chart_height = plot_h as f32;
        let max_y = series.max_upper_bound() + 1.0;
        let step_x = if series.is_empty() { 0.0 } else { chart_width / series.len() as f32 };

        let left = offset as f32;
        let top = offset as f32;
        let bottom = top + chart_height;
        let y_scale = ValueScale::new_linear(top, bottom, 0.0, max_y);
        let x_scale = SlotScale::new(left, step_x);

        Ok(Self {
            width,
            height,
            offset,
            chart_width,
            chart_height,
            max_y,
            step_x,
            unit_y: y_scale.unit(),
            x_scale,
            y_scale,
        })
    }

    /// Bottom edge of the plot area (value 0).
    pub fn baseline(&self) -> f32 {
        self.offset as f32 + self.chart_height
    }

    /// Horizontal anchor of record `index`.
    pub fn x_at(&self, index: usize) -> f32 {
        self.x_scale.to_px(index)
    }

    /// Screen y of a data value: `offset + chart_height - value * unit_y`.
    pub fn y_at(&self, value: f64) -> f32 {
        self.y_scale.to_px(value)
    }
}
