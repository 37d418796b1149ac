//! Prints the code, matched text and location of every token.

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
    // Where does the end-of-input token land?
    b"foo\n",
    b"foo\nbar",
    b"foo\nbarbar",
];

fn main() {
    init_logging();

    let mut out = io::stdout().lock();

    if let Err(error) = describe_all(&mut out, &FOO, INPUTS, Detail::Location) {
        exit_with_error(error);
    }
}
