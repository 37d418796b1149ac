//! Five timed passes per method after an untimed warm-up pass.

use std::io;

use scandemo::{
    bench::clear::{run, V5},
    exit_with_error, init_logging,
};

fn main() {
    init_logging();

    let mut buffer = V5.allocate();
    let mut out = io::stdout().lock();

    if let Err(error) = run(&V5, &mut buffer, &mut out) {
        exit_with_error(error);
    }
}
