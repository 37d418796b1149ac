//! Prints the code and matched text of every token.

use std::io;

use scandemo::{
    driver::driver::{describe_all, Detail},
    exit_with_error, init_logging,
    lexer::grammar::FOO,
};

const INPUTS: &[&[u8]] = &[
    b"",
    b"foofo",
    b"foofobarf",
    b"Hi\nfoo!",
    b"\x84", // Non-ASCII
];

fn main() {
    init_logging();

    let mut out = io::stdout().lock();

    if let Err(error) = describe_all(&mut out, &FOO, INPUTS, Detail::Text) {
        exit_with_error(error);
    }
}
