//! Error types shared by the scanner, the token driver and the
//! buffer-clear benchmark.
//!
//! Only scanner initialization can fail in a way the demos care about;
//! output errors are carried along so library code can use `?` on writes.

pub mod errors;
