//! Name/annotation/default classification for raw parameter segments.

use super::ParseError;
use super::splitter::SpanMaps;
use crate::signature::ParsedArgument;

/// Split one raw segment into name, annotation, and default.
///
/// The tie-break mirrors Python syntax: a top-level colon before any equals
/// introduces an annotation; otherwise a colon can only live inside the
/// default text (e.g. `arg="a:b"`) and stays part of the value verbatim.
/// Annotation and default text is trimmed but never evaluated; empty text
/// collapses to `None`.
///
/// # Errors
///
/// [`ParseError::MissingName`] when the name trims to empty, and scan
/// failures from the segment's own delimiter maps.
pub(crate) fn classify(raw: &str) -> Result<ParsedArgument, ParseError> {
    let trimmed = raw.trim();
    let maps = SpanMaps::scan(trimmed)?;
    let colon = find_top_level(trimmed, ':', &maps);
    let equals = find_top_level(trimmed, '=', &maps);

    let (name, ty, value) = match (colon, equals) {
        (Some(c), Some(e)) if c < e => {
            (&trimmed[..c], Some(&trimmed[c + 1..e]), Some(&trimmed[e + 1..]))
        }
        (_, Some(e)) => (&trimmed[..e], None, Some(&trimmed[e + 1..])),
        (Some(c), None) => (&trimmed[..c], Some(&trimmed[c + 1..]), None),
        (None, None) => (trimmed, None, None),
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(ParseError::MissingName);
    }
    Ok(ParsedArgument {
        name: name.to_string(),
        ty: non_empty(ty),
        value: non_empty(value),
    })
}

fn find_top_level(text: &str, needle: char, maps: &SpanMaps) -> Option<usize> {
    text.char_indices()
        .find(|&(i, c)| c == needle && !maps.encloses(i))
        .map(|(i, _)| i)
}

fn non_empty(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|text| !text.is_empty())
        .map(ToString::to_string)
}
