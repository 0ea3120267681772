#![forbid(unsafe_code)]

pub mod domain;
pub mod error;
pub mod request;

pub mod codec {
    pub mod hex;
}

pub mod sink;

pub mod write;

// Re-exports: stable API surface
pub use domain::{WriteMode, WriteOutcome};
pub use error::{HexWriteError, Result, UsageError};
pub use request::WriteRequest;
pub use write::write_hex;
