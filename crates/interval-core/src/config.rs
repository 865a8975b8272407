// File: crates/interval-core/src/config.rs
// Summary: TOML render configuration mapped onto RenderOptions.

use std::path::Path;

use serde::Deserialize;

use crate::chart::RenderOptions;
use crate::error::Result;
use crate::theme::{self, Color, Theme};

/// Render settings read from TOML. Every key is optional.
///
/// ```toml
/// width = 700
/// height = 350
/// offset = 50
/// theme = "classic"
/// draw_labels = true
///
/// [colors]
/// bar = "#336699"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub offset: Option<i32>,
    pub theme: Option<String>,
    pub draw_labels: Option<bool>,
    pub colors: ColorOverrides,
}

/// Hex color strings replacing individual theme colors.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorOverrides {
    pub background: Option<String>,
    pub axis: Option<String>,
    pub bar: Option<String>,
    pub marker: Option<String>,
    pub bound: Option<String>,
    pub label: Option<String>,
}

impl ChartConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Resolve the theme preset and apply color overrides.
    pub fn theme(&self) -> Result<Theme> {
        let mut t = self.theme.as_deref().map(theme::find).unwrap_or_default();
        let c = &self.colors;
        let slots: [(&Option<String>, &mut Color); 6] = [
            (&c.background, &mut t.background),
            (&c.axis, &mut t.axis),
            (&c.bar, &mut t.bar),
            (&c.marker, &mut t.marker),
            (&c.bound, &mut t.bound),
            (&c.label, &mut t.label),
        ];
        for (hex, slot) in slots {
            if let Some(hex) = hex {
                *slot = Color::from_hex(hex)?;
            }
        }
        Ok(t)
    }

    pub fn to_render_options(&self) -> Result<RenderOptions> {
        let defaults = RenderOptions::default();
        Ok(RenderOptions {
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            offset: self.offset.unwrap_or(defaults.offset),
            theme: self.theme()?,
            draw_labels: self.draw_labels.unwrap_or(defaults.draw_labels),
        })
    }
}
