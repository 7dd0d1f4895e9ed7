//! Definition-keyword recognition and physical-line joining.
//!
//! Callers that sit on top of an editor buffer use [`join_header_above`] to
//! reassemble a backslash-continued definition into the one logical line
//! [`crate::parse`] expects, and [`indent_width`] to measure the header's
//! leading whitespace.

use phf::phf_set;

/// Keywords that may begin a function definition header.
static DEFINITION_KEYWORDS: phf::Set<&'static str> = phf_set! {
    "def",
    "async def",
};

/// Receiver name implicitly bound on methods; never documented.
pub(crate) const RECEIVER_IDENT: &str = "self";

/// Default cap on how many physical lines [`join_header_above`] walks back.
pub const DEFAULT_MAX_LOOKBACK: usize = 20;

/// True when trimmed `text` begins a function definition.
///
/// The keyword must be followed by whitespace, so `define(...)` does not
/// qualify.
#[must_use]
pub(crate) fn is_definition_start(text: &str) -> bool {
    let text = text.trim_start();
    DEFINITION_KEYWORDS.iter().any(|&keyword| {
        text.strip_prefix(keyword)
            .and_then(|rest| rest.chars().next())
            .is_some_and(char::is_whitespace)
    })
}

/// Width of the leading whitespace on `line`, in characters.
#[must_use]
pub fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Join backslash-continued physical lines above a docstring trigger into
/// one logical header line.
///
/// `lines_above` yields physical lines nearest first: the line directly
/// above the trigger comes first, then its predecessor, and so on. The
/// nearest line must end with `:`; any earlier line that ends with `:` or is
/// blank belongs to a different statement and aborts the search. Trailing
/// `\` continuation markers are stripped at each join. At most
/// `max_lookback` lines are examined ([`DEFAULT_MAX_LOOKBACK`] matches the
/// original editor behaviour).
///
/// Returns `None` when no definition start is found within the window.
///
/// # Examples
///
/// ```rust
/// use docstub::{DEFAULT_MAX_LOOKBACK, join_header_above};
///
/// let joined = join_header_above(["def foo(a, b):"], DEFAULT_MAX_LOOKBACK);
/// assert_eq!(joined.as_deref(), Some("def foo(a, b):"));
/// ```
#[must_use]
pub fn join_header_above<'a, I>(lines_above: I, max_lookback: usize) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut joined = String::new();
    for (walked, line) in lines_above.into_iter().enumerate() {
        if walked >= max_lookback {
            break;
        }
        let line = line.trim_end();
        if walked == 0 {
            if !line.ends_with(':') {
                return None;
            }
        } else if line.ends_with(':') || line.is_empty() {
            return None;
        }
        let line = line.strip_suffix('\\').unwrap_or(line);
        joined.insert_str(0, line);
        if is_definition_start(line) {
            return Some(joined);
        }
    }
    None
}
