//! Argument splitter tests.

use rstest::rstest;

use crate::parser::splitter::split_arguments;

#[rstest]
#[case::mixed_nesting(
    "a, b=[1,2], c={'x':1}, d: int = 3",
    vec!["a", " b=[1,2]", " c={'x':1}", " d: int = 3"],
)]
#[case::zero_arity("", vec![])]
#[case::whitespace_only("   ", vec![])]
#[case::single("x", vec!["x"])]
#[case::nested_call("x=f(1, 2), y", vec!["x=f(1, 2)", " y"])]
#[case::quoted_comma("s='a,b', t", vec!["s='a,b'", " t"])]
#[case::trailing_comma("a, b,", vec!["a", " b"])]
#[case::trailing_comma_and_space("a, b, ", vec!["a", " b"])]
fn splits_on_top_level_commas(#[case] text: &str, #[case] expected: Vec<&str>) {
    assert_eq!(split_arguments(text), Ok(expected));
}

/// Re-splitting any returned segment yields that segment unchanged: no
/// unguarded top-level comma survives a split.
#[rstest]
#[case("a, b=[1,2], c={'x':1}, d: int = 3")]
#[case("m={'a': (1, 2)}, s=\"x,y\"")]
fn segments_resplit_to_themselves(#[case] text: &str) {
    let Ok(segments) = split_arguments(text) else {
        panic!("split failed for {text:?}");
    };
    for segment in segments {
        assert_eq!(split_arguments(segment), Ok(vec![segment]));
    }
}

#[rstest]
#[case::unmatched_open("a, b[")]
#[case::unmatched_close("a, b)")]
#[case::unterminated_string("a, s='oops")]
fn malformed_span_is_an_error_not_zero_arguments(#[case] text: &str) {
    assert!(split_arguments(text).is_err());
}
