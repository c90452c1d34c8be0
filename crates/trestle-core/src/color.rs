//! RGBA colors and the named tones the stock widgets paint with.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// RGBA color with values in the range [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component [0.0, 1.0]
    pub r: f32,
    /// Green component [0.0, 1.0]
    pub g: f32,
    /// Blue component [0.0, 1.0]
    pub b: f32,
    /// Alpha component [0.0, 1.0]
    pub a: f32,
}

impl Color {
    /// Black color
    pub const BLACK: Self = Self::opaque(0.0, 0.0, 0.0);
    /// White color
    pub const WHITE: Self = Self::opaque(1.0, 1.0, 1.0);
    /// Transparent color
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Create a new color, clamping values to [0.0, 1.0].
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque color from RGB values.
    #[must_use]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parse a hex color string (e.g., "#ff0000" or "ff0000").
    ///
    /// Supports 6-character RGB and 8-character RGBA formats.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ColorParseError::InvalidLength(hex.len()));
        }

        let channel = |i: usize| -> Result<f32, ColorParseError> {
            hex.get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .map(|v| f32::from(v) / 255.0)
                .ok_or_else(|| ColorParseError::InvalidHex(hex.to_string()))
        };

        let alpha = if hex.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// Convert to hex string (RGB only).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Invalid hex characters
    #[error("invalid hex characters in '{0}'")]
    InvalidHex(String),
    /// Invalid string length
    #[error("invalid hex string length {0} (expected 6 or 8)")]
    InvalidLength(usize),
}

/// Named tones shared by the stock widgets.
///
/// These mirror the utility palette the markup classes refer to, so canvas
/// painting and HTML output agree on what "gray-200" looks like.
pub mod palette {
    use super::Color;

    pub const GRAY_50: Color = Color::opaque(0.9765, 0.9804, 0.9843);
    pub const GRAY_100: Color = Color::opaque(0.9529, 0.9569, 0.9647);
    pub const GRAY_200: Color = Color::opaque(0.898, 0.9059, 0.9216);
    pub const GRAY_300: Color = Color::opaque(0.8196, 0.8353, 0.8588);
    pub const GRAY_400: Color = Color::opaque(0.6118, 0.6392, 0.6863);
    pub const GRAY_500: Color = Color::opaque(0.4196, 0.4471, 0.502);
    pub const GRAY_700: Color = Color::opaque(0.2157, 0.2549, 0.3176);
    pub const GRAY_800: Color = Color::opaque(0.1216, 0.1608, 0.2157);
    pub const BLUE_50: Color = Color::opaque(0.9373, 0.9647, 1.0);
    pub const BLUE_500: Color = Color::opaque(0.2314, 0.5098, 0.9647);
    pub const BLUE_600: Color = Color::opaque(0.1451, 0.3882, 0.9216);
    pub const RED_400: Color = Color::opaque(0.9725, 0.4431, 0.4431);
    pub const RED_500: Color = Color::opaque(0.9373, 0.2667, 0.2667);
    pub const RED_600: Color = Color::opaque(0.8627, 0.149, 0.149);
    pub const RED_700: Color = Color::opaque(0.7255, 0.1098, 0.1098);
}
