#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};

pub mod bench;
pub mod driver;
pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// Sets up `env_logger` so `RUST_LOG` controls what reaches stderr.
/// Logging stays off unless asked for, keeping stdout clean.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
        .format_timestamp(None)
        .try_init();
}

/// The line an executable prints to stderr before exiting on `error`.
pub fn error_message(error: &Error) -> String {
    let context = match error.get_impl() {
        ErrorImpl::ScannerInit { .. } => "Error initializing lexer",
        ErrorImpl::Output { .. } => "Error writing output",
        ErrorImpl::EmptyBuffer => "Error running benchmark",
    };

    if let ErrorTip::None = error.get_tip() {
        format!("{}: {}", context, error)
    } else {
        format!("{}: {} ({})", context, error, error.get_tip())
    }
}

/// Reports `error` on stderr and terminates with exit status 1.
pub fn exit_with_error(error: Error) -> ! {
    eprintln!("{}", error_message(&error));
    std::process::exit(1)
}
