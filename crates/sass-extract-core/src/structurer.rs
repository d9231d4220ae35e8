//! Value structurer: projects a computed Sass value into a tagged data tree.
//!
//! Every node serializes as `{ "type": <host type name>, "value": ... }`, with
//! `unit` on numbers and `separator` on lists. Colors carry their rounded
//! channels, their raw alpha and a hex string; a keyword is never substituted
//! here. Map keys become strings through the serializer, while map values stay
//! structured.
//!
//! # Example
//! ```
//! use sass_extract_core::{structure, Value};
//! use serde_json::json;
//!
//! let map = Value::map(vec![(Value::from("a"), Value::unitless(1.0))]);
//! assert_eq!(
//!     structure(&map).unwrap().to_json().unwrap(),
//!     json!({"type": "SassMap", "value": {"a": {"type": "SassNumber", "value": 1, "unit": ""}}})
//! );
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::color::{self, ColorNames};
use crate::error::Result;
use crate::extractor::Extractor;
use crate::serializer;
use crate::value::{SassColor, Separator, Value};

/// Structure a value using the CSS color keyword table for map keys.
pub fn structure(value: &Value) -> Result<StructuredValue> {
    Extractor::default().structure(value)
}

/// Structure a value, resolving color keywords in map keys through `names`.
pub fn structure_with(value: &Value, names: &dyn ColorNames) -> Result<StructuredValue> {
    Extractor::new(names).structure(value)
}

/// The structured projection of a [`Value`].
#[derive(Debug, Clone, PartialEq)]
pub enum StructuredValue {
    String(String),
    Boolean(bool),
    Number { value: f64, unit: String },
    Color(StructuredColor),
    Null,
    List { value: Vec<StructuredValue>, separator: Separator },
    Map(StructuredMap),
}

impl StructuredValue {
    /// The `type` tag this node serializes with.
    pub fn type_name(&self) -> &'static str {
        match self {
            StructuredValue::String(_) => "SassString",
            StructuredValue::Boolean(_) => "SassBoolean",
            StructuredValue::Number { .. } => "SassNumber",
            StructuredValue::Color(_) => "SassColor",
            StructuredValue::Null => "SassNull",
            StructuredValue::List { .. } => "SassList",
            StructuredValue::Map(_) => "SassMap",
        }
    }

    /// Convert into a `serde_json::Value`, preserving map key order.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl Serialize for StructuredValue {
    fn serialize<S>(&self, s: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = match self {
            StructuredValue::Number { .. } | StructuredValue::List { .. } => 3,
            _ => 2,
        };
        let mut m = s.serialize_map(Some(len))?;
        m.serialize_entry("type", self.type_name())?;
        match self {
            StructuredValue::String(v) => m.serialize_entry("value", v)?,
            StructuredValue::Boolean(v) => m.serialize_entry("value", v)?,
            StructuredValue::Number { value, unit } => {
                m.serialize_entry("value", &Magnitude(*value))?;
                m.serialize_entry("unit", unit)?;
            }
            StructuredValue::Color(c) => m.serialize_entry("value", c)?,
            StructuredValue::Null => m.serialize_entry("value", &())?,
            StructuredValue::List { value, separator } => {
                m.serialize_entry("value", value)?;
                m.serialize_entry("separator", separator.as_str())?;
            }
            StructuredValue::Map(map) => m.serialize_entry("value", map)?,
        }
        m.end()
    }
}

/// Whole magnitudes serialize as integers so `10px` reads `10`, not `10.0`.
struct Magnitude(f64);

impl Serialize for Magnitude {
    fn serialize<S>(&self, s: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let f = self.0;
        if f.fract() == 0.0 && f.abs() < (i64::MAX as f64) {
            s.serialize_i64(f as i64)
        } else {
            s.serialize_f64(f)
        }
    }
}

/// A color's structured form.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct StructuredColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha exactly as the host reported it; unlike the serializer, no
    /// rounding is applied.
    pub a: f64,
    pub hex: String,
}

impl From<&SassColor> for StructuredColor {
    fn from(c: &SassColor) -> Self {
        Self {
            r: color::channel(c.r()),
            g: color::channel(c.g()),
            b: color::channel(c.b()),
            a: c.a(),
            hex: color::format_hex(c.r(), c.g(), c.b()),
        }
    }
}

/// String-keyed entries in insertion order.
///
/// Keys are the serialized form of the original map keys, so distinct keys can
/// collide. Inserting an existing key replaces its value and keeps its
/// original position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructuredMap {
    entries: Vec<(String, StructuredValue)>,
}

impl StructuredMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. Returns the replaced value on collision.
    pub fn insert(&mut self, key: String, value: StructuredValue) -> Option<StructuredValue> {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => Some(std::mem::replace(&mut slot.1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&StructuredValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StructuredValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for StructuredMap {
    fn serialize<S>(&self, s: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut m = s.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            m.serialize_entry(k, v)?;
        }
        m.end()
    }
}

/// Dispatch on the value kind and build its structured node.
pub(crate) fn structure_value(
    ctx: &Extractor<'_>,
    value: &Value,
    depth: usize,
) -> Result<StructuredValue> {
    let node = match value {
        Value::String(s) => StructuredValue::String(s.clone()),
        Value::Boolean(b) => StructuredValue::Boolean(*b),
        Value::Number(n) => StructuredValue::Number {
            value: n.value(),
            unit: n.unit().to_string(),
        },
        Value::Color(c) => StructuredValue::Color(c.into()),
        Value::Null => StructuredValue::Null,
        Value::List(list) => {
            let depth = ctx.descend(depth)?;
            let value = list
                .iter()
                .map(|item| structure_value(ctx, item, depth))
                .collect::<Result<Vec<_>>>()?;
            StructuredValue::List {
                value,
                separator: list.separator(),
            }
        }
        Value::Map(map) => {
            let depth = ctx.descend(depth)?;
            let mut out = StructuredMap::new();
            for (key, value) in map.iter() {
                let key = serializer::render(ctx, key, depth)?;
                let value = structure_value(ctx, value, depth)?;
                if out.insert(key, value).is_some() {
                    tracing::trace!("Map key collision after serialization; later entry wins");
                }
            }
            StructuredValue::Map(out)
        }
        Value::Opaque(type_name) => return Err(serializer::unsupported(type_name)),
    };
    Ok(node)
}
