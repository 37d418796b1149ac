use crate::MK_RULE;

use super::tokens::{TokenCode, T_BREAK, T_EQ, T_EQ_EQ, T_F, T_FOO};

/// One scanner rule: a regular expression over bytes and the code returned
/// when it produces the longest match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSpec {
    pub pattern: &'static str,
    pub code: TokenCode,
}

/// An ordered rule table. Earlier rules win ties between matches of the
/// same length.
#[derive(Debug, PartialEq, Eq)]
pub struct Grammar {
    pub name: &'static str,
    pub rules: &'static [RuleSpec],
}

pub static KEYWORDS: Grammar = Grammar {
    name: "keywords",
    rules: &[
        MK_RULE!("=", T_EQ),
        MK_RULE!("==", T_EQ_EQ),
        MK_RULE!("break", T_BREAK),
    ],
};

pub static FOO: Grammar = Grammar {
    name: "foo",
    rules: &[MK_RULE!("f", T_F), MK_RULE!("foo", T_FOO)],
};
