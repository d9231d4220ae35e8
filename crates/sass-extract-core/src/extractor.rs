//! Run configuration shared by both transforms.

use crate::color::{ColorNames, CssColorNames};
use crate::error::{ExtractError, Result};
use crate::serializer;
use crate::structurer::{self, StructuredValue};
use crate::value::Value;

/// Default nesting limit for lists and maps.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Holds the color keyword table and the nesting limit.
///
/// Both transforms recurse once per nested list or map; a value nested
/// deeper than `max_depth` fails with [`ExtractError::NestingTooDeep`]
/// instead of exhausting the stack.
///
/// # Example
/// ```
/// use sass_extract_core::{Extractor, NoColorNames, Value};
///
/// let extractor = Extractor::new(&NoColorNames).with_max_depth(16);
/// let white = Value::color(255.0, 255.0, 255.0, 1.0);
/// assert_eq!(extractor.serialize(&white, false).unwrap(), "#ffffff");
/// ```
#[derive(Clone, Copy)]
pub struct Extractor<'n> {
    names: &'n dyn ColorNames,
    max_depth: usize,
}

impl Default for Extractor<'static> {
    fn default() -> Self {
        Self::new(&CssColorNames)
    }
}

impl std::fmt::Debug for Extractor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor")
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}

impl<'n> Extractor<'n> {
    pub fn new(names: &'n dyn ColorNames) -> Self {
        Self {
            names,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn names(&self) -> &'n dyn ColorNames {
        self.names
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Serialize `value` to a string. See [`crate::serializer`].
    pub fn serialize(&self, value: &Value, in_list: bool) -> Result<String> {
        tracing::trace!(type_name = value.type_name(), in_list, "Serializing value");
        let mut out = String::new();
        serializer::write_value(self, value, in_list, 0, &mut out)?;
        Ok(out)
    }

    /// Build the structured projection of `value`. See [`crate::structurer`].
    pub fn structure(&self, value: &Value) -> Result<StructuredValue> {
        tracing::trace!(type_name = value.type_name(), "Structuring value");
        structurer::structure_value(self, value, 0)
    }

    /// Enter a list or map found at `depth`, returning the depth of its
    /// children.
    pub(crate) fn descend(&self, depth: usize) -> Result<usize> {
        if depth >= self.max_depth {
            tracing::debug!(limit = self.max_depth, "Value nesting limit reached");
            return Err(ExtractError::NestingTooDeep {
                limit: self.max_depth,
            });
        }
        Ok(depth + 1)
    }
}
