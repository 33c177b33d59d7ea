//! Internal color parsing helpers.
//!
//! Handles the low-level conversion of hex, `rgb()`, `hsl()` and named
//! color strings into [`Color`] values. Not part of the public API.

use regex::Regex;
use std::sync::LazyLock;
use themevars_common::Color;

/// Regex for hex color: #RGB, #RGBA, #RRGGBB, or #RRGGBBAA.
static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
});

/// Regex for rgb()/rgba() with comma or space separated channels.
static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*([0-9]*\.?[0-9]+%?)\s*[,\s]\s*([0-9]*\.?[0-9]+%?)\s*[,\s]\s*([0-9]*\.?[0-9]+%?)\s*(?:[,/]\s*([0-9]*\.?[0-9]+%?)\s*)?\)$",
    )
    .unwrap()
});

/// Regex for hsl()/hsla() with an optional `deg` unit on the hue.
static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^hsla?\(\s*([0-9]*\.?[0-9]+)(?:deg)?\s*[,\s]\s*([0-9]*\.?[0-9]+)%\s*[,\s]\s*([0-9]*\.?[0-9]+)%\s*(?:[,/]\s*([0-9]*\.?[0-9]+%?)\s*)?\)$",
    )
    .unwrap()
});

/// CSS basic color keywords.
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("silver", [192, 192, 192]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("white", [255, 255, 255]),
    ("maroon", [128, 0, 0]),
    ("red", [255, 0, 0]),
    ("purple", [128, 0, 128]),
    ("fuchsia", [255, 0, 255]),
    ("green", [0, 128, 0]),
    ("lime", [0, 255, 0]),
    ("olive", [128, 128, 0]),
    ("yellow", [255, 255, 0]),
    ("navy", [0, 0, 128]),
    ("blue", [0, 0, 255]),
    ("teal", [0, 128, 128]),
    ("aqua", [0, 255, 255]),
    ("orange", [255, 165, 0]),
];

/// Parse a hex color string (#RGB, #RGBA, #RRGGBB, or #RRGGBBAA).
pub(super) fn parse_hex(s: &str) -> Option<Color> {
    if !HEX_RE.is_match(s) {
        return None;
    }
    let hex = s.strip_prefix('#')?;
    match hex.len() {
        3 | 4 => {
            // Expand #RGB(A) to #RRGGBB(AA)
            let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            let a = if hex.len() == 4 { nibble(3)? } else { 255 };
            Some(Color::from_rgba(nibble(0)?, nibble(1)?, nibble(2)?, a))
        }
        _ => Color::from_hex(s),
    }
}

/// Parse an `rgb()`/`rgba()` color string.
pub(super) fn parse_rgb(s: &str) -> Option<Color> {
    let caps = RGB_RE.captures(s)?;
    let r = parse_channel(&caps[1])?;
    let g = parse_channel(&caps[2])?;
    let b = parse_channel(&caps[3])?;
    let a = match caps.get(4) {
        Some(m) => parse_alpha(m.as_str())?,
        None => 255,
    };
    Some(Color::from_rgba(r, g, b, a))
}

/// Parse an `hsl()`/`hsla()` color string.
pub(super) fn parse_hsl(s: &str) -> Option<Color> {
    let caps = HSL_RE.captures(s)?;
    let h: f64 = caps[1].parse().ok()?;
    let sat: f64 = caps[2].parse().ok()?;
    let light: f64 = caps[3].parse().ok()?;
    if sat > 100.0 || light > 100.0 {
        return None;
    }
    let a = match caps.get(4) {
        Some(m) => parse_alpha(m.as_str())?,
        None => 255,
    };
    Some(Color::from_hsl(h, sat / 100.0, light / 100.0, a))
}

/// Look up a CSS color keyword.
pub(super) fn parse_named(s: &str) -> Option<Color> {
    NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(s))
        .map(|(_, [r, g, b])| Color::from_rgba(*r, *g, *b, 255))
}

/// A channel is either 0-255 or a percentage.
fn parse_channel(s: &str) -> Option<u8> {
    let value = match s.strip_suffix('%') {
        Some(pct) => {
            let pct: f64 = pct.parse().ok()?;
            if pct > 100.0 {
                return None;
            }
            pct / 100.0 * 255.0
        }
        None => {
            let v: f64 = s.parse().ok()?;
            if v > 255.0 {
                return None;
            }
            v
        }
    };
    Some(value.round() as u8)
}

/// Alpha is 0.0-1.0 or a percentage (CSS convention), converted to 0-255.
fn parse_alpha(s: &str) -> Option<u8> {
    let fraction = match s.strip_suffix('%') {
        Some(pct) => pct.parse::<f64>().ok()? / 100.0,
        None => s.parse::<f64>().ok()?,
    };
    if !(0.0..=1.0).contains(&fraction) {
        return None;
    }
    Some((fraction * 255.0).round() as u8)
}
