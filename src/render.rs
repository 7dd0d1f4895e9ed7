//! Docstring scaffold rendering.
//!
//! Turns a parsed signature into the text an editor inserts after the author
//! types the opening triple quote and presses enter. The numpy layout
//! matches the numpydoc convention: a Parameters section (omitted when there
//! is nothing to document) and an always-present Returns section, with
//! placeholder markers for the author to fill in.

use std::fmt::Write;

use crate::signature::{FunctionSignature, ParsedArgument};

/// Placeholder written where the author should fill in a type.
const TYPE_PLACEHOLDER: &str = "[type]";
/// Placeholder written where the author should fill in a description.
const DESCRIPTION_PLACEHOLDER: &str = "[description]";

/// Supported docstring scaffolds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocstringStyle {
    /// Sectioned numpydoc layout with Parameters and Returns.
    #[default]
    Numpy,
    /// No body at all; only the closing triple quote.
    OneLine,
}

/// Render the scaffold for `signature`.
///
/// `quote` is the character that opened the docstring; the scaffold closes
/// with the matching triple quote, and any occurrence of that triple quote
/// inside a default value is swapped for the alternate one so the docstring
/// cannot terminate early. Returns `None` for invalid signatures — the
/// caller performs a silent no-op.
///
/// # Examples
///
/// ```rust
/// use docstub::{DocstringStyle, parse, render};
///
/// let sig = parse("not a function", 0);
/// assert_eq!(render(&sig, '"', DocstringStyle::Numpy), None);
/// ```
#[must_use]
pub fn render(signature: &FunctionSignature, quote: char, style: DocstringStyle) -> Option<String> {
    if !signature.is_valid {
        return None;
    }
    let quote3 = quote.to_string().repeat(3);
    let quote3_other = if quote == '"' { "'''" } else { "\"\"\"" };
    match style {
        DocstringStyle::OneLine => Some(quote3),
        DocstringStyle::Numpy => Some(render_numpy(signature, &quote3, quote3_other)),
    }
}

fn render_numpy(signature: &FunctionSignature, quote3: &str, quote3_other: &str) -> String {
    let indent1 = " ".repeat(4 + signature.indent_width);
    let indent2 = " ".repeat(8 + signature.indent_width);

    let mut doc = String::from("\n");
    if !signature.arguments.is_empty() {
        let _ = write!(doc, "\n{indent1}Parameters\n{indent1}----------\n");
    }
    for argument in &signature.arguments {
        push_argument(&mut doc, argument, &indent1, &indent2, quote3, quote3_other);
    }

    let _ = write!(doc, "\n{indent1}Returns\n{indent1}-------");
    let return_type = signature.return_type.as_deref().unwrap_or("None");
    let _ = write!(doc, "\n{indent1}{return_type}\n{indent2}{DESCRIPTION_PLACEHOLDER}\n");

    let _ = write!(doc, "\n{indent1}{quote3}");
    doc
}

fn push_argument(
    doc: &mut String,
    argument: &ParsedArgument,
    indent1: &str,
    indent2: &str,
    quote3: &str,
    quote3_other: &str,
) {
    let ty = argument.ty.as_deref().unwrap_or(TYPE_PLACEHOLDER);
    let _ = write!(doc, "{indent1}{} : {ty}", argument.name);
    if argument.value.is_some() {
        doc.push_str(", optional");
    }
    let _ = write!(doc, "\n{indent2}{DESCRIPTION_PLACEHOLDER}");
    if let Some(value) = &argument.value {
        let value = value.replace(quote3, quote3_other);
        let _ = write!(doc, " (the default is {value})");
    }
    doc.push('\n');
}

#[cfg(test)]
mod tests;
