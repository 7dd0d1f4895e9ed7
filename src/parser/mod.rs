//! Header assembly: locate the definition keyword, parameter span, and
//! return-type clause, then delegate to the splitter and classifier.
//!
//! [`parse`] is the single entry point and never fails outward: every
//! malformed input collapses to a signature with `is_valid` unset, logged at
//! debug level so editor callers can perform a silent no-op.

mod classifier;
mod header;
mod splitter;

#[cfg(test)]
mod tests;

pub use header::{DEFAULT_MAX_LOOKBACK, indent_width, join_header_above};

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::scanner::ScanError;
use crate::signature::FunctionSignature;

/// Reasons a header fails to parse. Internal only: every variant collapses
/// to an invalid signature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A delimiter scan over the parameter span or a segment failed.
    #[error(transparent)]
    Scan(#[from] ScanError),
    /// The trimmed header does not start with a definition keyword.
    #[error("no definition keyword at the start of the header")]
    NotAFunctionHeader,
    /// The outer parentheses of the parameter list could not be located.
    #[error("parameter span could not be located")]
    ParameterSpanNotFound,
    /// A parameter segment trimmed to an empty name.
    #[error("parameter segment has no name")]
    MissingName,
}

/// Trailing `-> type:` clause at the end of a joined header.
static RETURN_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    #[expect(clippy::expect_used, reason = "pattern is a literal and must compile")]
    let clause = Regex::new(r"->[ ]*([a-zA-Z0-9_,()\[\] ]*):$").expect("return clause pattern");
    clause
});

/// Parse one logical header line into a structured signature.
///
/// `header` is the definition line with continuation lines already joined;
/// `indent_width` is the width of its leading whitespace (see
/// [`indent_width`]). Malformed input produces a signature with `is_valid`
/// unset rather than an error.
///
/// # Examples
///
/// ```rust
/// use docstub::parse;
///
/// let sig = parse("def foo(self, x):", 4);
/// assert!(sig.is_valid);
/// assert_eq!(sig.arguments.len(), 1); // receiver dropped
/// assert_eq!(sig.arguments[0].name, "x");
/// ```
#[must_use]
pub fn parse(header: &str, indent_width: usize) -> FunctionSignature {
    match try_parse(header, indent_width) {
        Ok(signature) => signature,
        Err(err) => {
            log::debug!("header not parseable: {err}");
            FunctionSignature::invalid(indent_width)
        }
    }
}

fn try_parse(header: &str, indent_width: usize) -> Result<FunctionSignature, ParseError> {
    if !header::is_definition_start(header) {
        return Err(ParseError::NotAFunctionHeader);
    }
    // Leftovers from joining physical lines must not reach the span scans.
    let text: String = header.trim().replace(['\r', '\n'], "");

    let (return_type, clause_start) = capture_return_clause(&text);
    let open = text.find('(').ok_or(ParseError::ParameterSpanNotFound)?;
    let close = text[..clause_start]
        .rfind(')')
        .filter(|&pos| pos > open)
        .ok_or(ParseError::ParameterSpanNotFound)?;

    let mut arguments = splitter::split_arguments(&text[open + 1..close])?
        .into_iter()
        .map(classifier::classify)
        .collect::<Result<Vec<_>, _>>()?;
    if arguments.first().is_some_and(|arg| arg.name == header::RECEIVER_IDENT) {
        arguments.remove(0);
    }

    Ok(FunctionSignature {
        indent_width,
        arguments,
        return_type,
        is_valid: true,
    })
}

/// Capture a trailing `-> type:` clause, returning the declared type (empty
/// captures collapse to `None`) and the byte offset where the clause begins,
/// or the text length when absent.
fn capture_return_clause(text: &str) -> (Option<String>, usize) {
    RETURN_CLAUSE.captures(text).map_or((None, text.len()), |caps| {
        let clause_start = caps.get(0).map_or(text.len(), |whole| whole.start());
        let return_type = caps
            .get(1)
            .map(|ty| ty.as_str().trim())
            .filter(|ty| !ty.is_empty())
            .map(ToString::to_string);
        (return_type, clause_start)
    })
}
