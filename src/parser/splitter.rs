//! Top-level comma splitting for parameter spans.
//!
//! A comma separates arguments only when no quote or bracket pair encloses
//! it; everything else (`f(1, 2)` calls, `[1,2]` literals, `'a,b'` strings)
//! stays inside its segment untouched.

use crate::scanner::{self, Bracket, DelimiterPairs, ScanError};

/// Pair maps for every delimiter kind over one span.
#[derive(Debug)]
pub(crate) struct SpanMaps {
    quotes: DelimiterPairs,
    round: DelimiterPairs,
    square: DelimiterPairs,
    curly: DelimiterPairs,
}

impl SpanMaps {
    pub(crate) fn scan(text: &str) -> Result<Self, ScanError> {
        let quotes = scanner::quote_pairs(text)?;
        let round = scanner::bracket_pairs(text, Bracket::Round, &quotes)?;
        let square = scanner::bracket_pairs(text, Bracket::Square, &quotes)?;
        let curly = scanner::bracket_pairs(text, Bracket::Curly, &quotes)?;
        Ok(Self {
            quotes,
            round,
            square,
            curly,
        })
    }

    /// True when any quote or bracket pair encloses `pos`.
    pub(crate) fn encloses(&self, pos: usize) -> bool {
        self.quotes.encloses(pos)
            || self.round.encloses(pos)
            || self.square.encloses(pos)
            || self.curly.encloses(pos)
    }
}

/// Split the text between the outer parentheses on top-level commas.
///
/// A whitespace-only span is zero-arity and yields no segments. The trailing
/// substring after the last split point is included unless it trims to empty
/// (which tolerates a trailing comma). Segments are returned verbatim,
/// untrimmed.
///
/// # Errors
///
/// Propagates scan failures; the caller must treat these as not parseable,
/// never as an empty argument list.
pub(crate) fn split_arguments(text: &str) -> Result<Vec<&str>, ScanError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let maps = SpanMaps::scan(text)?;
    let mut segments = Vec::new();
    let mut start = 0usize;
    for (i, c) in text.char_indices() {
        if c == ',' && !maps.encloses(i) {
            segments.push(&text[start..i]);
            start = i + 1;
        }
    }
    let tail = &text[start..];
    if !tail.trim().is_empty() {
        segments.push(tail);
    }
    Ok(segments)
}
