//! Unit tests for the token driver.

use super::driver::{describe_all, describe_tokens, Detail};
use crate::lexer::{
    grammar::{FOO, KEYWORDS},
    tokens::END_OF_INPUT,
};

fn render(grammar: &crate::lexer::grammar::Grammar, input: &[u8], detail: Detail) -> String {
    let mut out = Vec::new();
    describe_tokens(&mut out, grammar, input, detail).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_empty_input_every_detail() {
    for detail in [Detail::Code, Detail::Name, Detail::Text, Detail::Location] {
        let mut out = Vec::new();
        let tokens = describe_tokens(&mut out, &KEYWORDS, b"", detail).unwrap();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].code, END_OF_INPUT);
    }
}

#[test]
fn test_codes() {
    assert_eq!(
        render(&KEYWORDS, b"break===\n\nx", Detail::Code),
        "Tokens for \"break===\n\nx\" are:\n259 258 257 10 10 120 0 \n\n"
    );
}

#[test]
fn test_names() {
    assert_eq!(
        render(&KEYWORDS, b"break===\n\nx", Detail::Name),
        "Tokens for \"break===\n\nx\" are:\nbreak == = \n \n x (end of input) \n\n"
    );
}

#[test]
fn test_names_empty() {
    assert_eq!(
        render(&KEYWORDS, b"", Detail::Name),
        "Tokens for \"\" are:\n(end of input) \n\n"
    );
}

#[test]
fn test_text() {
    assert_eq!(
        render(&FOO, b"foofo", Detail::Text),
        "Tokens for \"foofo\" are:\n258 (foo)\n257 (f)\n111 (o)\n0 ()\n\n"
    );
}

#[test]
fn test_location() {
    assert_eq!(
        render(&FOO, b"foo\nbar", Detail::Location),
        "Tokens for \"foo\nbar\" are:\n\
         258 (foo) Line 1, column 1, length 3\n\
         10 (\n) Line 1, column 4, length 1\n\
         98 (b) Line 2, column 1, length 1\n\
         97 (a) Line 2, column 2, length 1\n\
         114 (r) Line 2, column 3, length 1\n\
         0 () Line 2, column 4, length 0\n\n"
    );
}

#[test]
fn test_non_ascii_is_written_raw() {
    let mut out = Vec::new();
    describe_tokens(&mut out, &KEYWORDS, b"\x84", Detail::Name).unwrap();

    assert_eq!(
        out,
        b"Tokens for \"\x84\" are:\n\x84 (end of input) \n\n".to_vec()
    );
}

#[test]
fn test_describe_all() {
    let mut out = Vec::new();
    describe_all(&mut out, &KEYWORDS, &[b"", b"====="], Detail::Code).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Tokens for \"\" are:\n0 \n\nTokens for \"=====\" are:\n258 258 257 0 \n\n"
    );
}

#[test]
fn test_repeated_runs_match() {
    let first = render(&FOO, b"Hi\nfoo!", Detail::Location);
    let second = render(&FOO, b"Hi\nfoo!", Detail::Location);

    assert_eq!(first, second);
}
