//! Color parsing and component encoding.
//!
//! Supports `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`, `rgb()`/`rgba()`,
//! `hsl()`/`hsla()` and the CSS basic color keywords. Parsed colors are
//! stored as a space-separated component triple so the host can recombine
//! them with any opacity through the `<alpha-value>` placeholder.

mod parse;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use themevars_common::{Color, ColorError};

use parse::{parse_hex, parse_hsl, parse_named, parse_rgb};

/// Placeholder the host substitutes with the requested opacity.
pub const ALPHA_PLACEHOLDER: &str = "<alpha-value>";

/// Parse a color string into a [`Color`].
///
/// Accepted formats:
/// - `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (e.g. `#00d4ff`)
/// - `rgb(r g b / a)` or `rgba(r,g,b,a)`, channels 0-255 or percentages
/// - `hsl(h s% l% / a)` or `hsla(h,s%,l%,a)`
/// - basic keywords such as `white` or `navy`
pub fn parse_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim();
    let lower = s.to_ascii_lowercase();

    // Try hex formats first
    if lower.starts_with('#') {
        return parse_hex(&lower).ok_or_else(|| ColorError::InvalidHex(s.to_string()));
    }

    if lower.starts_with("rgb(") || lower.starts_with("rgba(") {
        return parse_rgb(&lower).ok_or_else(|| ColorError::InvalidFunction(s.to_string()));
    }

    if lower.starts_with("hsl(") || lower.starts_with("hsla(") {
        return parse_hsl(&lower).ok_or_else(|| ColorError::InvalidFunction(s.to_string()));
    }

    parse_named(&lower).ok_or_else(|| ColorError::Unrecognized(s.to_string()))
}

/// Validate that a string is a recognized color format.
pub fn validate_color(s: &str) -> bool {
    parse_color(s).is_ok()
}

/// Component encoding for stored color variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `H S% L%`, consumed as `hsl(var(--x) / <alpha-value>)`.
    #[default]
    Hsl,
    /// `R G B`, consumed as `rgb(var(--x) / <alpha-value>)`.
    Rgb,
}

impl ColorFormat {
    /// Encode a color as this format's component triple.
    pub fn components(&self, color: &Color) -> String {
        match self {
            Self::Hsl => color.to_hsl_components(),
            Self::Rgb => color.to_rgb_components(),
        }
    }

    /// Reference expression for a variable holding this format's triple.
    pub fn reference(&self, variable: &str) -> String {
        let function = match self {
            Self::Hsl => "hsl",
            Self::Rgb => "rgb",
        };
        format!("{function}(var({variable}) / {ALPHA_PLACEHOLDER})")
    }
}
