//! Position-pair scanning for quotes and brackets.
//!
//! The scanner walks a span left to right and records, per delimiter kind,
//! which opening byte offset matches which closing byte offset. Everything
//! downstream (comma splitting, colon/equals classification) is phrased as
//! "is this position enclosed by any recorded pair", so the maps are the one
//! structure the whole parser shares. All offsets are byte offsets; the
//! delimiters themselves are ASCII, so offsets always land on character
//! boundaries.

use std::collections::BTreeMap;

use thiserror::Error;

/// Errors produced while scanning a span for delimiter pairs.
///
/// Each variant carries the byte offset of the offending delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A string literal was opened but never closed.
    #[error("unterminated string literal opened at byte {0}")]
    UnbalancedQuote(usize),
    /// A closing bracket appeared with no matching opener.
    #[error("unmatched closing bracket at byte {0}")]
    UnmatchedClose(usize),
    /// An opening bracket was never closed.
    #[error("unmatched opening bracket at byte {0}")]
    UnmatchedOpen(usize),
}

/// Bracket kinds tracked by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    Round,
    Square,
    Curly,
}

impl Bracket {
    #[must_use]
    pub const fn open(self) -> char {
        match self {
            Self::Round => '(',
            Self::Square => '[',
            Self::Curly => '{',
        }
    }

    #[must_use]
    pub const fn close(self) -> char {
        match self {
            Self::Round => ')',
            Self::Square => ']',
            Self::Curly => '}',
        }
    }
}

/// Matching opening → closing byte offsets for one delimiter kind within one
/// span.
///
/// Invariant: every key maps to a strictly greater offset and pairs nest
/// validly; the scan functions fail instead of constructing a map that would
/// break this.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DelimiterPairs(BTreeMap<usize, usize>);

impl DelimiterPairs {
    /// True when `pos` falls strictly inside any recorded pair.
    #[must_use]
    pub fn encloses(&self, pos: usize) -> bool {
        self.0.iter().any(|(&open, &close)| open < pos && pos < close)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pairs in opening-offset order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().map(|(&open, &close)| (open, close))
    }

    fn insert(&mut self, open: usize, close: usize) {
        self.0.insert(open, close);
    }
}

/// Scan `text` for single- and double-quoted string literal pairs.
///
/// An unmatched quote character opens a string; the same character closes it
/// unless immediately preceded by a backslash. The other quote character is
/// literal while inside a string, never a new delimiter start.
///
/// # Errors
///
/// Returns [`ScanError::UnbalancedQuote`] with the opening offset when the
/// scan ends inside a string.
pub fn quote_pairs(text: &str) -> Result<DelimiterPairs, ScanError> {
    let mut pairs = DelimiterPairs::default();
    let mut open: Option<(usize, char)> = None;
    let mut prev: Option<char> = None;
    for (i, c) in text.char_indices() {
        match open {
            None if c == '\'' || c == '"' => open = Some((i, c)),
            Some((start, quote)) if c == quote && prev != Some('\\') => {
                pairs.insert(start, i);
                open = None;
            }
            _ => {}
        }
        prev = Some(c);
    }
    match open {
        Some((start, _)) => Err(ScanError::UnbalancedQuote(start)),
        None => Ok(pairs),
    }
}

/// Scan `text` for matching `kind` bracket pairs.
///
/// Positions enclosed by a pair in `quotes` are skipped, so brackets inside
/// string literals never participate in matching. Each closer pairs with the
/// most recent unmatched opener.
///
/// # Errors
///
/// Returns [`ScanError::UnmatchedClose`] for a closer with no opener and
/// [`ScanError::UnmatchedOpen`] (with the offending opening offset) when an
/// opener is still unmatched at the end of the span.
pub fn bracket_pairs(
    text: &str,
    kind: Bracket,
    quotes: &DelimiterPairs,
) -> Result<DelimiterPairs, ScanError> {
    let mut pairs = DelimiterPairs::default();
    let mut stack: Vec<usize> = Vec::new();
    for (i, c) in text.char_indices() {
        if quotes.encloses(i) {
            continue;
        }
        if c == kind.open() {
            stack.push(i);
        } else if c == kind.close() {
            match stack.pop() {
                Some(open) => pairs.insert(open, i),
                None => return Err(ScanError::UnmatchedClose(i)),
            }
        }
    }
    match stack.pop() {
        Some(open) => Err(ScanError::UnmatchedOpen(open)),
        None => Ok(pairs),
    }
}
