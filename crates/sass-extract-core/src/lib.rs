//! # sass-extract-core
//!
//! Turns computed Sass values, as a host compiler hands them over, into two
//! output forms:
//!
//! - a **serialized string** that reads like stylesheet source (`10px`, `white`,
//!   `rgba(0,0,0,0.5)`, `(a: 1,b: 2)`), and
//! - a **structured tree** of tagged nodes (`{"type": "SassNumber", "value": 10,
//!   "unit": "px"}`) for tests, tooling and introspection.
//!
//! ## Quick start
//!
//! ```rust
//! use sass_extract_core::{serialize, structure, Separator, Value};
//!
//! let list = Value::list(vec![1.into(), 2.into()], Separator::Comma);
//! assert_eq!(serialize(&list, false).unwrap(), "1,2");
//! assert_eq!(serialize(&list, true).unwrap(), "(1,2)");
//!
//! let white = Value::color(255.0, 255.0, 255.0, 1.0);
//! assert_eq!(serialize(&white, false).unwrap(), "white");
//! assert_eq!(structure(&white).unwrap().type_name(), "SassColor");
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the closed set of input values
//! - [`serializer`] — value → string
//! - [`structurer`] — value → tagged data tree
//! - [`color`] — hex formatting and color keyword lookup
//! - [`extractor`] — keyword table and nesting limit for a run
//! - [`error`] — error types

pub mod color;
pub mod error;
pub mod extractor;
mod keywords;
pub mod serializer;
pub mod structurer;
pub mod value;

pub use color::{format_hex, ColorNames, CssColorNames, NoColorNames};
pub use error::ExtractError;
pub use extractor::{Extractor, DEFAULT_MAX_DEPTH};
pub use serializer::{serialize, serialize_with};
pub use structurer::{structure, structure_with, StructuredColor, StructuredMap, StructuredValue};
pub use value::{SassColor, SassList, SassMap, SassNumber, Separator, Value};
