//! Value serializer: renders a computed Sass value as a single string.
//!
//! The output is the text a stylesheet author would write for the value:
//!
//! - **Scalars**: strings verbatim, booleans as `true`/`false`, `null`
//! - **Numbers**: magnitude immediately followed by the unit (`10px`, `1.5em`)
//! - **Colors**: `rgba(r,g,b,a)` when translucent, otherwise a CSS keyword
//!   (`white`) or `#rrggbb`
//! - **Lists**: elements joined by `,` or a space; a list nested inside another
//!   list is wrapped in parentheses
//! - **Maps**: `(key: value,key: value)`, always parenthesized
//!
//! The output is meant for embedding in source text or debug output and is not
//! guaranteed to parse back into the same value.
//!
//! # Example
//! ```
//! use sass_extract_core::{serialize, Separator, Value};
//!
//! let margin = Value::list(
//!     vec![Value::number(10.0, "px"), Value::number(1.5, "em")],
//!     Separator::Space,
//! );
//! assert_eq!(serialize(&margin, false).unwrap(), "10px 1.5em");
//! ```

use crate::color::{self, ColorNames};
use crate::error::{ExtractError, Result};
use crate::extractor::Extractor;
use crate::value::{SassColor, SassList, SassMap, SassNumber, Value};

/// Serialize a value using the CSS color keyword table.
///
/// `in_list` tells the serializer that the value is an element of an
/// enclosing list, which makes a list value parenthesize itself.
pub fn serialize(value: &Value, in_list: bool) -> Result<String> {
    Extractor::default().serialize(value, in_list)
}

/// Serialize a value, resolving color keywords through `names`.
pub fn serialize_with(value: &Value, in_list: bool, names: &dyn ColorNames) -> Result<String> {
    Extractor::new(names).serialize(value, in_list)
}

/// Dispatch on the value kind and append its text to `out`.
pub(crate) fn write_value(
    ctx: &Extractor<'_>,
    value: &Value,
    in_list: bool,
    depth: usize,
    out: &mut String,
) -> Result<()> {
    match value {
        Value::String(s) => out.push_str(s),
        Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => write_number(n, out),
        Value::Color(c) => write_color(c, ctx.names(), out),
        Value::Null => out.push_str("null"),
        Value::List(list) => write_list(ctx, list, in_list, depth, out)?,
        Value::Map(map) => write_map(ctx, map, depth, out)?,
        Value::Opaque(type_name) => return Err(unsupported(type_name)),
    }
    Ok(())
}

pub(crate) fn unsupported(type_name: &str) -> ExtractError {
    tracing::debug!(type_name, "Rejecting value of unsupported type");
    ExtractError::UnsupportedValueType {
        type_name: type_name.to_string(),
    }
}

fn write_number(n: &SassNumber, out: &mut String) {
    out.push_str(&format_magnitude(n.value()));
    out.push_str(n.unit());
}

/// Translucent colors keep their alpha as `rgba(...)`; opaque ones prefer a
/// keyword and fall back to hex.
fn write_color(c: &SassColor, names: &dyn ColorNames, out: &mut String) {
    let alpha = color::round_alpha(c.a());
    let (r, g, b) = (color::channel(c.r()), color::channel(c.g()), color::channel(c.b()));

    if alpha < color::OPAQUE_THRESHOLD {
        out.push_str(&format!("rgba({},{},{},{})", r, g, b, format_magnitude(alpha)));
        return;
    }

    let hex = color::format_hex(c.r(), c.g(), c.b());
    match names.keyword_for(&hex) {
        Some(keyword) => out.push_str(keyword),
        None => out.push_str(&hex),
    }
}

/// Elements are always serialized as list members, so nested lists come out
/// parenthesized. The list itself is only wrapped when its caller says so.
fn write_list(
    ctx: &Extractor<'_>,
    list: &SassList,
    in_list: bool,
    depth: usize,
    out: &mut String,
) -> Result<()> {
    let depth = ctx.descend(depth)?;
    let separator = list.separator().as_str();

    if in_list {
        out.push('(');
    }
    for (i, item) in list.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        write_value(ctx, item, true, depth, out)?;
    }
    if in_list {
        out.push(')');
    }
    Ok(())
}

/// Keys and values are serialized as standalone values whatever the caller's
/// context. Keys that serialize to the same text collapse: the later value
/// replaces the earlier one, which keeps its position.
fn write_map(ctx: &Extractor<'_>, map: &SassMap, depth: usize, out: &mut String) -> Result<()> {
    let depth = ctx.descend(depth)?;

    let mut pairs: Vec<(String, String)> = Vec::with_capacity(map.len());
    for (key, value) in map.iter() {
        let key = render(ctx, key, depth)?;
        let value = render(ctx, value, depth)?;
        match pairs.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => pairs.push((key, value)),
        }
    }

    out.push('(');
    for (i, (key, value)) in pairs.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(key);
        out.push_str(": ");
        out.push_str(value);
    }
    out.push(')');
    Ok(())
}

/// Serialize a map key or value on its own.
pub(crate) fn render(ctx: &Extractor<'_>, value: &Value, depth: usize) -> Result<String> {
    let mut out = String::new();
    write_value(ctx, value, false, depth, &mut out)?;
    Ok(out)
}

/// Format a magnitude the way stylesheet source writes it:
/// - Whole numbers without a fractional part (`10`, not `10.0`)
/// - Negative zero normalizes to `0`
/// - Otherwise the shortest decimal that round-trips (`0.5`, `1.25`)
/// - `NaN`, `Infinity` and `-Infinity` spelled out
pub(crate) fn format_magnitude(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Normalize -0 to 0
    let f = if f == 0.0 { 0.0 } else { f };
    if f.fract() == 0.0 && f.abs() < (i64::MAX as f64) {
        return (f as i64).to_string();
    }
    format!("{}", f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude_whole_numbers_have_no_fraction() {
        assert_eq!(format_magnitude(10.0), "10");
        assert_eq!(format_magnitude(-3.0), "-3");
    }

    #[test]
    fn magnitude_negative_zero_is_zero() {
        assert_eq!(format_magnitude(-0.0), "0");
    }

    #[test]
    fn magnitude_fractions_use_shortest_form() {
        assert_eq!(format_magnitude(0.5), "0.5");
        assert_eq!(format_magnitude(1.25), "1.25");
        assert_eq!(format_magnitude(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn magnitude_non_finite_values_are_spelled_out() {
        assert_eq!(format_magnitude(f64::NAN), "NaN");
        assert_eq!(format_magnitude(f64::INFINITY), "Infinity");
        assert_eq!(format_magnitude(f64::NEG_INFINITY), "-Infinity");
    }
}
