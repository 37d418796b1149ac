use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    /// Human readable names for the codes of the keyword grammar.
    pub static ref KEYWORD_NAMES: HashMap<TokenCode, &'static str> = {
        let mut map = HashMap::new();
        map.insert(END_OF_INPUT, "(end of input)");
        map.insert(T_EQ, "=");
        map.insert(T_EQ_EQ, "==");
        map.insert(T_BREAK, "break");
        map
    };
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct TokenCode(pub u32);

pub const END_OF_INPUT: TokenCode = TokenCode(0);

// Keyword grammar.
pub const T_EQ: TokenCode = TokenCode(257);
pub const T_EQ_EQ: TokenCode = TokenCode(258);
pub const T_BREAK: TokenCode = TokenCode(259);

// Foo grammar.
pub const T_F: TokenCode = TokenCode(257);
pub const T_FOO: TokenCode = TokenCode(258);

impl TokenCode {
    /// Code of a single-byte token that no rule matched.
    pub fn from_byte(byte: u8) -> TokenCode {
        TokenCode(byte as u32)
    }

    pub fn is_end_of_input(&self) -> bool {
        *self == END_OF_INPUT
    }
}

impl Display for TokenCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maps a code of the keyword grammar to its name. Codes without a name
/// are single-byte fallbacks and are rendered as that byte.
pub fn describe(code: TokenCode) -> Vec<u8> {
    match KEYWORD_NAMES.get(&code) {
        Some(name) => name.as_bytes().to_vec(),
        None => vec![code.0 as u8],
    }
}

/// Where a token was matched. Lines and columns start at 1, the length is
/// in bytes.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Location {
    pub line: u32,
    pub column: u32,
    pub length: u32,
}

impl Location {
    pub fn start() -> Self {
        Location {
            line: 1,
            column: 1,
            length: 0,
        }
    }

    pub fn precedes(&self, other: &Location) -> bool {
        (self.line, self.column) < (other.line, other.column)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Line {}, column {}, length {}",
            self.line, self.column, self.length
        )
    }
}

/// A token as handed out by the scanner. `text` borrows from the scanner's
/// copy of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub code: TokenCode,
    pub text: &'a [u8],
    pub location: Location,
}

impl Token<'_> {
    pub fn is_end_of_input(&self) -> bool {
        self.code.is_end_of_input()
    }

    pub fn to_record(&self) -> TokenRecord {
        TokenRecord {
            code: self.code,
            text: self.text.to_vec(),
            location: self.location,
        }
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) {}",
            self.code,
            String::from_utf8_lossy(self.text),
            self.location
        )
    }
}

/// Owned copy of a [`Token`], outliving the scanner it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRecord {
    pub code: TokenCode,
    pub text: Vec<u8>,
    pub location: Location,
}
