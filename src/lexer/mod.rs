//! Lexical analysis module.
//!
//! This module contains the scanner that turns a byte buffer into a stream
//! of tokens. It handles:
//!
//! - Rule tables (grammars) of byte regular expressions
//! - Longest-match selection, earliest rule winning ties
//! - Single-byte fallback tokens for input no rule matches
//! - Line and column tracking for every token

pub mod grammar;
pub mod lexer;
pub mod tokens;
