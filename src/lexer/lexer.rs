use log::{debug, trace};
use regex::bytes::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, MK_TOKEN};

use super::{grammar::{Grammar, RuleSpec}, tokens::{Location, Token, TokenCode, TokenRecord, END_OF_INPUT}};

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    code: TokenCode,
}

/// A scanner instance. Create it with [`Scanner::new`], bind input with
/// [`Scanner::scan_bytes`], pull tokens with [`Scanner::next_token`] and
/// release the input with [`Scanner::delete_buffer`]. Dropping the scanner
/// releases everything else.
#[derive(Clone)]
pub struct Scanner {
    grammar: &'static str,
    patterns: Vec<RegexPattern>,
    buffer: Option<Vec<u8>>,
    pos: usize,
    line: u32,
    column: u32,
}

impl Scanner {
    pub fn new(grammar: &Grammar) -> Result<Scanner, Error> {
        let patterns = grammar
            .rules
            .iter()
            .map(compile_rule)
            .collect::<Result<Vec<_>, _>>()?;

        debug!("initialized scanner for grammar `{}` with {} rules", grammar.name, patterns.len());

        Ok(Scanner {
            grammar: grammar.name,
            patterns,
            buffer: None,
            pos: 0,
            line: 1,
            column: 1,
        })
    }

    /// Copies `input` into the scanner and rewinds to line 1, column 1.
    pub fn scan_bytes(&mut self, input: &[u8]) {
        debug!("binding {} byte buffer to `{}` scanner", input.len(), self.grammar);

        self.buffer = Some(input.to_vec());
        self.pos = 0;
        self.line = 1;
        self.column = 1;
    }

    pub fn scan_string(&mut self, input: &str) {
        self.scan_bytes(input.as_bytes());
    }

    pub fn delete_buffer(&mut self) {
        if let Some(buffer) = self.buffer.take() {
            debug!("released {} byte buffer", buffer.len());
        }
    }

    pub fn has_buffer(&self) -> bool {
        self.buffer.is_some()
    }

    /// Returns the longest match at the current position. Without a bound
    /// buffer, or once the buffer is exhausted, this is the end-of-input
    /// token, and stays so on every further call.
    pub fn next_token(&mut self) -> Token<'_> {
        let (code, length) = self.match_here();
        let start = self.pos;
        let location = Location {
            line: self.line,
            column: self.column,
            length: length as u32,
        };

        self.advance_n(length);

        let text: &[u8] = match &self.buffer {
            Some(buffer) => &buffer[start..start + length],
            None => &[],
        };

        trace!("matched {} at {}", code, location);

        MK_TOKEN!(code, text, location)
    }

    pub fn remainder(&self) -> &[u8] {
        match &self.buffer {
            Some(buffer) => &buffer[self.pos..],
            None => &[],
        }
    }

    pub fn at_eof(&self) -> bool {
        self.remainder().is_empty()
    }

    fn match_here(&self) -> (TokenCode, usize) {
        let remainder = self.remainder();

        if remainder.is_empty() {
            return (END_OF_INPUT, 0);
        }

        let mut best: Option<(TokenCode, usize)> = None;

        for pattern in self.patterns.iter() {
            if let Some(found) = pattern.regex.find(remainder) {
                let length = found.end();
                if length > 0 && best.map_or(true, |(_, best_length)| length > best_length) {
                    best = Some((pattern.code, length));
                }
            }
        }

        best.unwrap_or((TokenCode::from_byte(remainder[0]), 1))
    }

    fn advance_n(&mut self, n: usize) {
        let consumed = match &self.buffer {
            Some(buffer) => &buffer[self.pos..self.pos + n],
            None => return,
        };

        for byte in consumed {
            if *byte == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.pos += n;
    }
}

fn compile_rule(rule: &RuleSpec) -> Result<RegexPattern, Error> {
    let regex = Regex::new(&format!("^(?:{})", rule.pattern)).map_err(|error| {
        Error::new(ErrorImpl::ScannerInit {
            pattern: String::from(rule.pattern),
            message: error.to_string(),
        })
    })?;

    Ok(RegexPattern {
        regex,
        code: rule.code,
    })
}

/// Scans `source` to completion, end-of-input token included.
pub fn tokenize(grammar: &Grammar, source: &[u8]) -> Result<Vec<TokenRecord>, Error> {
    let mut scanner = Scanner::new(grammar)?;
    scanner.scan_bytes(source);

    let mut tokens = vec![];

    loop {
        let token = scanner.next_token();
        tokens.push(token.to_record());

        if token.is_end_of_input() {
            break;
        }
    }

    scanner.delete_buffer();
    Ok(tokens)
}
