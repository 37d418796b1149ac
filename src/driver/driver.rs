use std::io::Write;

use log::debug;

use crate::{
    errors::errors::Error,
    lexer::{
        grammar::Grammar,
        lexer::Scanner,
        tokens::{describe, Token, TokenRecord},
    },
};

/// How much of each token a demo prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detail {
    /// The raw token code.
    Code,
    /// The code's name from the keyword table, or the byte itself.
    Name,
    /// Code and matched text.
    Text,
    /// Code, matched text and location.
    Location,
}

impl Detail {
    fn render(&self, out: &mut impl Write, token: &Token) -> std::io::Result<()> {
        match self {
            Detail::Code => write!(out, "{} ", token.code),
            Detail::Name => {
                out.write_all(&describe(token.code))?;
                out.write_all(b" ")
            }
            Detail::Text => {
                write!(out, "{} (", token.code)?;
                out.write_all(token.text)?;
                writeln!(out, ")")
            }
            Detail::Location => {
                write!(out, "{} (", token.code)?;
                out.write_all(token.text)?;
                writeln!(out, ") {}", token.location)
            }
        }
    }

    fn finish(&self, out: &mut impl Write) -> std::io::Result<()> {
        match self {
            Detail::Code | Detail::Name => write!(out, "\n\n"),
            Detail::Text | Detail::Location => writeln!(out),
        }
    }
}

/// Prints every token of `input`, end-of-input token included, and returns
/// them. The scanner lives only for the duration of the call.
pub fn describe_tokens(
    out: &mut impl Write,
    grammar: &Grammar,
    input: &[u8],
    detail: Detail,
) -> Result<Vec<TokenRecord>, Error> {
    let mut scanner = Scanner::new(grammar)?;
    scanner.scan_bytes(input);

    out.write_all(b"Tokens for \"")?;
    out.write_all(input)?;
    writeln!(out, "\" are:")?;

    let mut tokens = vec![];

    loop {
        let token = scanner.next_token();
        detail.render(out, &token)?;
        tokens.push(token.to_record());

        if token.is_end_of_input() {
            break;
        }
    }

    detail.finish(out)?;
    out.flush()?;

    debug!("described {} tokens of {} byte input", tokens.len(), input.len());

    scanner.delete_buffer();
    Ok(tokens)
}

/// Runs [`describe_tokens`] over each input in turn, stopping at the first
/// error.
pub fn describe_all(
    out: &mut impl Write,
    grammar: &Grammar,
    inputs: &[&[u8]],
    detail: Detail,
) -> Result<(), Error> {
    for input in inputs {
        describe_tokens(out, grammar, input, detail)?;
    }

    Ok(())
}
