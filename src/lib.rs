//! Function-header parsing and docstring scaffold generation.
//!
//! Given one logical Python definition header (continuation lines already
//! joined) and its indent width, [`parse`] produces a structured
//! [`FunctionSignature`]; [`render`] turns that into a docstring scaffold
//! ready for verbatim insertion. Malformed headers never raise: they yield a
//! signature with `is_valid` unset, which renders to `None`.
//!
//! ```rust
//! use docstub::{DocstringStyle, parse, render};
//!
//! let signature = parse("def add(a: int, b: int) -> int:", 0);
//! assert!(signature.is_valid);
//! let doc = render(&signature, '"', DocstringStyle::Numpy);
//! assert!(doc.is_some());
//! ```

#![forbid(unsafe_code)]

pub mod parser;
pub mod render;
pub mod scanner;
pub mod signature;

pub use parser::{DEFAULT_MAX_LOOKBACK, indent_width, join_header_above, parse};
pub use render::{DocstringStyle, render};
pub use scanner::{Bracket, DelimiterPairs, ScanError, bracket_pairs, quote_pairs};
pub use signature::{FunctionSignature, ParsedArgument};
