//! Divider styling
//!
//! Colors are written as `#RRGGBB` or `#RRGGBBAA` in the config file and
//! converted to ARGB `u32` for the pixel buffer.

use serde::{Deserialize, Serialize};

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 format for the softbuffer surface
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        if !s.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&s[range], 16).map_err(|e| e.to_string())
        };
        match s.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }

    /// Format as "#RRGGBB", or "#RRGGBBAA" when not fully opaque
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// Parse a hex color, falling back to `default` with a warning
    pub fn parse_or(s: &str, default: Color) -> Color {
        Color::from_hex(s).unwrap_or_else(|e| {
            tracing::warn!("Invalid color {:?} ({}), using {}", s, e, default.to_hex());
            default
        })
    }
}

/// Visual and hit-test parameters of the divider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerStyle {
    /// Drawn thickness along the resize axis, in pixels
    pub thickness: f32,
    /// Extra grab area on each side of the drawn divider
    pub hit_slop: f32,
    pub color: Color,
    pub hover_color: Color,
    pub drag_color: Color,
}

impl Default for DividerStyle {
    fn default() -> Self {
        Self {
            thickness: 1.0,
            hit_slop: 3.0,
            color: Color::rgb(0x3C, 0x3F, 0x41),
            hover_color: Color::rgb(0x4B, 0x6E, 0xAF),
            drag_color: Color::rgb(0x58, 0x9D, 0xF6),
        }
    }
}

/// Divider style as written in the config file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DividerStyleData {
    pub thickness: f32,
    pub hit_slop: f32,
    pub color: String,
    pub hover_color: String,
    pub drag_color: String,
}

impl Default for DividerStyleData {
    fn default() -> Self {
        let style = DividerStyle::default();
        Self {
            thickness: style.thickness,
            hit_slop: style.hit_slop,
            color: style.color.to_hex(),
            hover_color: style.hover_color.to_hex(),
            drag_color: style.drag_color.to_hex(),
        }
    }
}

impl DividerStyleData {
    /// Resolve into a usable style; bad colors fall back to defaults
    pub fn resolve(&self) -> DividerStyle {
        let defaults = DividerStyle::default();
        DividerStyle {
            thickness: self.thickness.max(0.0),
            hit_slop: self.hit_slop.max(0.0),
            color: Color::parse_or(&self.color, defaults.color),
            hover_color: Color::parse_or(&self.hover_color, defaults.hover_color),
            drag_color: Color::parse_or(&self.drag_color, defaults.drag_color),
        }
    }
}
