use std::path::PathBuf;
use thiserror::Error;

/// Exit status for every failure path.
pub const EXIT_FAILURE: u8 = 1;

pub const USAGE: &str = "Usage:  write_to_file <file> <hex_data> [--append]\n\
Optional argument '--append' can be used for debugging.\n\
Do not use it to write to an actual device.";

/// Invocations that do not match `<file> <hex_data> [--append]`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("{}", USAGE)]
    WrongArgCount,

    #[error("input must have an even number of characters")]
    OddLength { len: usize },

    #[error("Third argument can only be '--append'")]
    BadFlag { arg: String },
}

#[derive(Error, Debug)]
pub enum HexWriteError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error("invalid hex digit {ch:?} at offset {index}")]
    InvalidHexDigit { ch: char, index: usize },

    #[error("Could not open file {} for writing: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not write to file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl HexWriteError {
    pub fn exit_code(&self) -> u8 {
        EXIT_FAILURE
    }
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, HexWriteError>;
