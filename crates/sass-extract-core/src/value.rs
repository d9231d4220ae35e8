//! The closed set of computed Sass values handed over by a host runtime.
//!
//! Values are immutable snapshots. Nothing in this crate creates values on its
//! own behalf or mutates them; the serializer and structurer only read through
//! the accessors defined here.

/// A computed Sass value. Mirrors the host's value kinds and uses
/// `Vec<(Value, Value)>` for maps to keep insertion order and allow
/// arbitrary values as keys.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Boolean(bool),
    Number(SassNumber),
    Color(SassColor),
    Null,
    List(SassList),
    Map(SassMap),
    /// A host value of a kind outside this set, identified by the host's
    /// type name. Every transform rejects it.
    Opaque(String),
}

impl Value {
    /// A number with a unit, e.g. `Value::number(10.0, "px")`.
    pub fn number(value: f64, unit: impl Into<String>) -> Self {
        Value::Number(SassNumber::new(value, unit))
    }

    /// A unitless number.
    pub fn unitless(value: f64) -> Self {
        Value::Number(SassNumber::new(value, ""))
    }

    pub fn color(r: f64, g: f64, b: f64, a: f64) -> Self {
        Value::Color(SassColor::new(r, g, b, a))
    }

    pub fn list(items: Vec<Value>, separator: Separator) -> Self {
        Value::List(SassList::new(items, separator))
    }

    pub fn map(entries: Vec<(Value, Value)>) -> Self {
        Value::Map(SassMap::new(entries))
    }

    /// Host type name for this value, as the host runtime reports it.
    pub fn type_name(&self) -> &str {
        match self {
            Value::String(_) => "SassString",
            Value::Boolean(_) => "SassBoolean",
            Value::Number(_) => "SassNumber",
            Value::Color(_) => "SassColor",
            Value::Null => "SassNull",
            Value::List(_) => "SassList",
            Value::Map(_) => "SassMap",
            Value::Opaque(name) => name,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::unitless(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::unitless(f64::from(n))
    }
}

impl From<SassNumber> for Value {
    fn from(n: SassNumber) -> Self {
        Value::Number(n)
    }
}

impl From<SassColor> for Value {
    fn from(c: SassColor) -> Self {
        Value::Color(c)
    }
}

impl From<SassList> for Value {
    fn from(l: SassList) -> Self {
        Value::List(l)
    }
}

impl From<SassMap> for Value {
    fn from(m: SassMap) -> Self {
        Value::Map(m)
    }
}

/// A numeric magnitude plus a unit label. The unit may be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SassNumber {
    value: f64,
    unit: String,
}

impl SassNumber {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }
}

/// An RGBA color as the host stores it.
///
/// Channels are logically in `[0, 255]` but may carry fractional parts; alpha
/// is a fraction in `[0, 1]`. No rounding happens here, see [`crate::color`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SassColor {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl SassColor {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn a(&self) -> f64 {
        self.a
    }
}

/// How the elements of a list are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    Comma,
    #[default]
    Space,
}

impl Separator {
    /// The delimiter text: `","` or `" "`.
    pub fn as_str(self) -> &'static str {
        match self {
            Separator::Comma => ",",
            Separator::Space => " ",
        }
    }
}

/// An ordered sequence of values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SassList {
    items: Vec<Value>,
    separator: Separator,
}

impl SassList {
    pub fn new(items: Vec<Value>, separator: Separator) -> Self {
        Self { items, separator }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn separator(&self) -> Separator {
        self.separator
    }

    pub fn is_comma_separated(&self) -> bool {
        self.separator == Separator::Comma
    }
}

/// Ordered key/value pairs. Keys are arbitrary values and are not
/// deduplicated here; see [`crate::structurer::StructuredMap`] for how
/// colliding keys are resolved on output.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SassMap {
    entries: Vec<(Value, Value)>,
}

impl SassMap {
    pub fn new(entries: Vec<(Value, Value)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn key(&self, index: usize) -> Option<&Value> {
        self.entries.get(index).map(|(k, _)| k)
    }

    pub fn value(&self, index: usize) -> Option<&Value> {
        self.entries.get(index).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names_match_host_names() {
        assert_eq!(Value::from("a").type_name(), "SassString");
        assert_eq!(Value::Null.type_name(), "SassNull");
        assert_eq!(Value::map(vec![]).type_name(), "SassMap");
        assert_eq!(Value::Opaque("SassFunction".into()).type_name(), "SassFunction");
    }

    #[test]
    fn map_accessors_follow_insertion_order() {
        let map = SassMap::new(vec![
            (Value::from("b"), 2.into()),
            (Value::from("a"), 1.into()),
        ]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.key(0), Some(&Value::from("b")));
        assert_eq!(map.value(1), Some(&Value::unitless(1.0)));
        assert_eq!(map.key(2), None);
    }
}
