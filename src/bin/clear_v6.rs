//! v5 over a 256 MiB buffer, also reporting the timer resolution.

use std::io;

use scandemo::{
    bench::clear::{run, V6},
    exit_with_error, init_logging,
};

fn main() {
    init_logging();

    let mut buffer = V6.allocate();
    let mut out = io::stdout().lock();

    if let Err(error) = run(&V6, &mut buffer, &mut out) {
        exit_with_error(error);
    }
}
