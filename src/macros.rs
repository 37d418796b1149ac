//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RULE!` - Creates a grammar rule usable in a `static` table

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$code` - The TokenCode
/// * `$text` - The matched bytes
/// * `$location` - Where the match starts and how long it is
#[macro_export]
macro_rules! MK_TOKEN {
    ($code:expr, $text:expr, $location:expr) => {
        $crate::lexer::tokens::Token {
            code: $code,
            text: $text,
            location: $location,
        }
    };
}

/// Creates a grammar rule.
///
/// # Example
///
/// ```ignore
/// static EQ: Grammar = Grammar {
///     name: "eq",
///     rules: &[MK_RULE!("==", T_EQ_EQ)],
/// };
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($pattern:literal, $code:expr) => {
        $crate::lexer::grammar::RuleSpec {
            pattern: $pattern,
            code: $code,
        }
    };
}
