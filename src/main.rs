//! CLI entry point for the `docstub` tool.
//!
//! Parses the function header passed as the first argument and prints the
//! numpy scaffold that an editor integration would insert, prefixed with the
//! opening triple quote.

use std::io::{self, Write};

use docstub::{DocstringStyle, indent_width, parse, render};

fn main() {
    let Some(header) = std::env::args().nth(1) else {
        let _ = writeln!(io::stderr(), "usage: docstub '<function header line>'");
        std::process::exit(2);
    };
    let signature = parse(&header, indent_width(&header));
    if let Some(doc) = render(&signature, '"', DocstringStyle::Numpy) {
        let _ = writeln!(io::stdout(), "\"\"\"{doc}");
    } else {
        let _ = writeln!(io::stderr(), "docstub: not a parseable function header");
        std::process::exit(1);
    }
}
