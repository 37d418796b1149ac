//! Token-enumeration driver.
//!
//! Pulls tokens from a fresh scanner until the end-of-input token and
//! prints each one at a chosen level of detail. The four demo executables
//! differ only in the [`driver::Detail`] and the grammar they pass.

pub mod driver;

#[cfg(test)]
mod tests;
