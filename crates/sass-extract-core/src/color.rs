//! Color formatting shared by the serializer and the structurer.
//!
//! Channels are rounded half away from zero and clamped to `[0, 255]` before
//! any formatting. The serializer additionally rounds alpha to two decimals
//! and uses [`OPAQUE_THRESHOLD`] to choose between `rgba(...)` and a hex or
//! keyword rendering.

use std::collections::{BTreeMap, HashMap};

use crate::keywords::CSS_KEYWORDS;

/// Rounded alpha at or above this value renders as hex/keyword.
pub const OPAQUE_THRESHOLD: f64 = 0.999;

/// Round a raw channel to the nearest integer and clamp it into a byte.
///
/// NaN maps to 0.
pub fn channel(raw: f64) -> u8 {
    // Float-to-int `as` casts saturate and send NaN to 0.
    raw.round().clamp(0.0, 255.0) as u8
}

/// Round alpha to two decimal digits.
pub fn round_alpha(a: f64) -> f64 {
    (a * 100.0).round() / 100.0
}

/// Whether an alpha fraction counts as fully opaque once rounded.
pub fn is_opaque(a: f64) -> bool {
    round_alpha(a) >= OPAQUE_THRESHOLD
}

/// Render three channels as `#rrggbb` with lowercase hex digits.
///
/// ```
/// use sass_extract_core::color::format_hex;
///
/// assert_eq!(format_hex(255.0, 0.0, 127.6), "#ff0080");
/// ```
pub fn format_hex(r: f64, g: f64, b: f64) -> String {
    format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
}

/// A read-only lookup from `#rrggbb` to a color keyword.
///
/// Lookups are total: a miss is `None`, never an error.
pub trait ColorNames {
    fn keyword_for(&self, hex: &str) -> Option<&str>;
}

/// The CSS named colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssColorNames;

impl ColorNames for CssColorNames {
    fn keyword_for(&self, hex: &str) -> Option<&str> {
        CSS_KEYWORDS
            .binary_search_by(|(candidate, _)| (*candidate).cmp(hex))
            .ok()
            .map(|i| CSS_KEYWORDS[i].1)
    }
}

/// A table that knows no names, so opaque colors always render as hex.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoColorNames;

impl ColorNames for NoColorNames {
    fn keyword_for(&self, _hex: &str) -> Option<&str> {
        None
    }
}

impl ColorNames for HashMap<String, String> {
    fn keyword_for(&self, hex: &str) -> Option<&str> {
        self.get(hex).map(String::as_str)
    }
}

impl ColorNames for BTreeMap<String, String> {
    fn keyword_for(&self, hex: &str) -> Option<&str> {
        self.get(hex).map(String::as_str)
    }
}
