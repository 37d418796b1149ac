//! Buffer-clear benchmark.
//!
//! Compares a hand-written zeroing loop with the library bulk fill over a
//! buffer owned by the caller. The variants (`V1`, `V2`, `V5`, `V6`) only
//! change the buffer size, the order of the methods, the number of timed
//! runs and how the timings are printed.

pub mod clear;

#[cfg(test)]
mod tests;
