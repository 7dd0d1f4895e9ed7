//! Renderer output tests asserting full scaffold strings.

use rstest::rstest;

use super::{DocstringStyle, render};
use crate::signature::{FunctionSignature, ParsedArgument};

fn signature(
    indent_width: usize,
    arguments: Vec<ParsedArgument>,
    return_type: Option<&str>,
) -> FunctionSignature {
    FunctionSignature {
        indent_width,
        arguments,
        return_type: return_type.map(ToString::to_string),
        is_valid: true,
    }
}

fn argument(name: &str, ty: Option<&str>, value: Option<&str>) -> ParsedArgument {
    ParsedArgument {
        name: name.to_string(),
        ty: ty.map(ToString::to_string),
        value: value.map(ToString::to_string),
    }
}

#[rstest]
fn zero_arity_renders_returns_section_only() {
    let sig = signature(0, vec![], None);
    let expected = "\n\
                    \n    Returns\
                    \n    -------\
                    \n    None\
                    \n        [description]\n\
                    \n    \"\"\"";
    assert_eq!(
        render(&sig, '"', DocstringStyle::Numpy).as_deref(),
        Some(expected),
    );
}

#[rstest]
fn arguments_and_return_type_render_in_full() {
    let sig = signature(
        0,
        vec![
            argument("x", Some("int"), None),
            argument("y", None, Some("2")),
        ],
        Some("bool"),
    );
    let expected = "\n\
                    \n    Parameters\
                    \n    ----------\
                    \n    x : int\
                    \n        [description]\
                    \n    y : [type], optional\
                    \n        [description] (the default is 2)\n\
                    \n    Returns\
                    \n    -------\
                    \n    bool\
                    \n        [description]\n\
                    \n    \"\"\"";
    assert_eq!(
        render(&sig, '"', DocstringStyle::Numpy).as_deref(),
        Some(expected),
    );
}

/// The scaffold indents four and eight spaces past the header's own indent.
#[rstest]
fn indent_width_shifts_the_scaffold() {
    let sig = signature(4, vec![argument("k", None, None)], None);
    let expected = "\n\
                    \n        Parameters\
                    \n        ----------\
                    \n        k : [type]\
                    \n            [description]\n\
                    \n        Returns\
                    \n        -------\
                    \n        None\
                    \n            [description]\n\
                    \n        \"\"\"";
    assert_eq!(
        render(&sig, '"', DocstringStyle::Numpy).as_deref(),
        Some(expected),
    );
}

/// A default value containing the enclosing triple quote is rewritten with
/// the alternate triple quote so the docstring cannot terminate early.
#[rstest]
#[case::double_quoted('"', "'''")]
#[case::single_quoted('\'', "\"\"\"")]
fn default_value_triple_quotes_are_swapped(#[case] quote: char, #[case] swapped: &str) {
    let enclosing = quote.to_string().repeat(3);
    let sig = signature(0, vec![argument("s", None, Some(&enclosing))], None);
    let Some(doc) = render(&sig, quote, DocstringStyle::Numpy) else {
        panic!("expected a scaffold");
    };
    assert!(doc.contains(&format!("(the default is {swapped})")));
    assert!(doc.ends_with(&enclosing));
}

#[rstest]
#[case::double('"', "\"\"\"")]
#[case::single('\'', "'''")]
fn one_line_style_renders_closing_quotes_only(#[case] quote: char, #[case] expected: &str) {
    let sig = signature(0, vec![], None);
    assert_eq!(
        render(&sig, quote, DocstringStyle::OneLine).as_deref(),
        Some(expected),
    );
}

#[rstest]
#[case(DocstringStyle::Numpy)]
#[case(DocstringStyle::OneLine)]
fn invalid_signature_renders_nothing(#[case] style: DocstringStyle) {
    let sig = FunctionSignature::invalid(2);
    assert_eq!(render(&sig, '"', style), None);
}
