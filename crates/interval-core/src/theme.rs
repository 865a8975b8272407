// File: crates/interval-core/src/theme.rs
// Summary: Color type and chart theme presets.

use crate::error::{ChartError, Result};

/// 8-bit RGBA color, independent of any rendering backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_argb(0, 0, 0, 0);
    pub const BLACK: Color = Color::from_argb(255, 0, 0, 0);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        let bad = || ChartError::InvalidColor(s.to_string());
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        match hex.len() {
            3 => {
                let nib = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17).map_err(|_| bad());
                Ok(Self::from_rgb(nib(0)?, nib(1)?, nib(2)?))
            }
            6 => Ok(Self::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
            _ => Err(bad()),
        }
    }

    /// `#rrggbb`, alpha dropped.
    pub fn to_hex_rgb(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a 0..=1 fraction.
    pub fn opacity(&self) -> f32 {
        self.a as f32 / 255.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axis: Color,
    pub bar: Color,
    pub marker: Color,
    pub bound: Color,
    pub label: Color,
}

impl Theme {
    /// Grey axes, blue bars, red markers, black brackets on a cleared canvas.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: Color::TRANSPARENT,
            axis: Color::from_rgb(0x99, 0x99, 0x99),
            bar: Color::from_rgb(0x44, 0x77, 0xaa),
            marker: Color::from_rgb(0xee, 0x66, 0x77),
            bound: Color::BLACK,
            label: Color::from_rgb(0x99, 0x99, 0x99),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            axis: Color::from_argb(255, 180, 180, 190),
            bar: Color::from_argb(255, 64, 160, 255),
            marker: Color::from_argb(255, 255, 230, 70),
            bound: Color::from_argb(255, 235, 235, 245),
            label: Color::from_argb(255, 150, 150, 160),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            background: Color::from_argb(255, 0x00, 0x00, 0x00),
            axis: Color::from_argb(255, 0xff, 0xff, 0xff),
            bar: Color::from_argb(255, 0x00, 0xaa, 0xff),
            marker: Color::from_argb(255, 0xff, 0xff, 0x00),
            bound: Color::from_argb(255, 0x00, 0xff, 0x00),
            label: Color::from_argb(255, 0xcc, 0xcc, 0xcc),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::dark(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::classic()
}
