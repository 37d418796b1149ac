//! Same as v1 with the methods in the opposite order.

use std::io;

use scandemo::{
    bench::clear::{run, V2},
    exit_with_error, init_logging,
};

fn main() {
    init_logging();

    let mut buffer = V2.allocate();
    let mut out = io::stdout().lock();

    if let Err(error) = run(&V2, &mut buffer, &mut out) {
        exit_with_error(error);
    }
}
