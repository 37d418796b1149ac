//! Prints the raw code of every token.

use std::io;

use scandemo::{
    driver::driver::{describe_all, Detail},
    exit_with_error, init_logging,
    lexer::grammar::KEYWORDS,
};

const INPUTS: &[&[u8]] = &[
    b"",
    b"break===\n\nx",
    b"=====",
    b"breakbreak",
    b"\x84", // Non-ASCII
];

fn main() {
    init_logging();

    let mut out = io::stdout().lock();

    if let Err(error) = describe_all(&mut out, &KEYWORDS, INPUTS, Detail::Code) {
        exit_with_error(error);
    }
}
