// File: crates/interval-core/src/types.rs
// Summary: Shared constants (surface size, margin, marker and bracket dimensions).

/// Default surface width in pixels.
pub const WIDTH: i32 = 700;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 350;
/// Default margin on every side of the plot area, in pixels.
pub const OFFSET: i32 = 50;

/// Radius of the assigned-level marker.
pub const MARKER_RADIUS: f32 = 3.0;
/// Half width of each bound bracket segment (segments span `x - 5 .. x + 5`).
pub const BOUND_HALF_WIDTH: f32 = 5.0;
/// Dash pattern for bound brackets: 5px on, 3px off.
pub const BOUND_DASH: [f32; 2] = [5.0, 3.0];
/// Stroke width used for axes and brackets.
pub const LINE_WIDTH: f32 = 1.0;

/// Tick label font size in pixels.
pub const LABEL_SIZE: f32 = 12.0;
/// Distance between the baseline and the tick label baseline.
pub const LABEL_GAP: f32 = 16.0;
