// File: crates/interval-core/src/scale.rs
// Summary: Slot (X) and Value (Y) scale transforms.

/// Value Y coordinate (staffing level).
pub type Value = f64;

/// Horizontal slot scale: record `i` sits at `left_px + (i + 1) * step_px`.
#[derive(Clone, Copy, Debug)]
pub struct SlotScale {
    pub left_px: f32,
    pub step_px: f32,
}

impl SlotScale {
    pub fn new(left_px: f32, step_px: f32) -> Self {
        Self { left_px, step_px }
    }
    #[inline]
    pub fn to_px(&self, index: usize) -> f32 {
        self.left_px + (index as f32 + 1.0) * self.step_px
    }
}

/// Vertical linear scale mapping `[vmin, vmax]` to `[bottom_px, top_px]`.
/// Screen y grows downward, values grow upward.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    /// Pixels per value unit.
    #[inline]
    pub fn unit(&self) -> f32 {
        ((self.bottom_px - self.top_px) as f64 / (self.vmax - self.vmin)) as f32
    }
    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        let span = self.vmax - self.vmin;
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
    #[inline]
    pub fn from_px(&self, py: f32) -> Value {
        let span = self.vmax - self.vmin;
        self.vmin + ((self.bottom_px - py) / (self.bottom_px - self.top_px)) as f64 * span
    }
    /// Pixel length of a value magnitude measured from `vmin`.
    #[inline]
    pub fn length_px(&self, magnitude: Value) -> f32 {
        magnitude as f32 * self.unit()
    }
}
