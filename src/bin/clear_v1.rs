//! Times one pass of each clearing method over a 1 MiB buffer.

use std::io;

use scandemo::{
    bench::clear::{run, V1},
    exit_with_error, init_logging,
};

fn main() {
    init_logging();

    let mut buffer = V1.allocate();
    let mut out = io::stdout().lock();

    if let Err(error) = run(&V1, &mut buffer, &mut out) {
        exit_with_error(error);
    }
}
