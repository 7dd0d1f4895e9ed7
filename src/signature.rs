//! Structured signature data shared by the parser and the renderer.
//!
//! Values are built fresh per parse call and returned by value; nothing here
//! is shared or persisted.

/// One parsed parameter: name plus optional annotation and default.
///
/// The annotation and default are kept as opaque text, trimmed but otherwise
/// verbatim; text that trims to empty collapses to `None`. The name is
/// guaranteed non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgument {
    pub name: String,
    pub ty: Option<String>,
    pub value: Option<String>,
}

/// Structured view of one function definition header.
///
/// `is_valid` is unset when the header lacks a recognised definition keyword
/// or its parameter span cannot be located or balanced; such signatures
/// carry no arguments and render to nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub indent_width: usize,
    pub arguments: Vec<ParsedArgument>,
    pub return_type: Option<String>,
    pub is_valid: bool,
}

impl FunctionSignature {
    /// A not-parseable marker that preserves the caller's indent width.
    #[must_use]
    pub(crate) fn invalid(indent_width: usize) -> Self {
        Self {
            indent_width,
            arguments: Vec::new(),
            return_type: None,
            is_valid: false,
        }
    }
}
