use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
        }
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ScannerInit { .. } => "ScannerInit",
            ErrorImpl::Output { .. } => "Output",
            ErrorImpl::EmptyBuffer => "EmptyBuffer",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::ScannerInit { pattern, .. } => ErrorTip::Suggestion(format!(
                "Rule pattern `{}` is not a valid regular expression",
                pattern
            )),
            ErrorImpl::Output { .. } => ErrorTip::None,
            ErrorImpl::EmptyBuffer => ErrorTip::Suggestion(String::from(
                "Allocate a buffer of at least one byte before timing it",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::new(ErrorImpl::Output {
            message: error.to_string(),
        })
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("invalid rule pattern {pattern:?}: {message}")]
    ScannerInit { pattern: String, message: String },
    #[error("failed to write output: {message}")]
    Output { message: String },
    #[error("cannot time an empty buffer")]
    EmptyBuffer,
}
