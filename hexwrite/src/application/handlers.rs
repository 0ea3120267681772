use std::ffi::OsString;
use std::process::ExitCode;

use hexwrite_core::error::{HexWriteError, Result, UsageError};
use hexwrite_core::{WriteOutcome, WriteRequest, write_hex};
use tracing::debug;

pub fn handle_write(args: Vec<OsString>) -> Result<WriteOutcome> {
    let req = WriteRequest::from_args(args)?;
    let outcome = write_hex(&req)?;
    debug!(?outcome, "done");
    Ok(outcome)
}

pub fn handle_parse_error(err: clap::Error) -> ExitCode {
    debug!(kind = ?err.kind(), "argument parsing failed: {err}");
    let usage: HexWriteError = UsageError::WrongArgCount.into();
    report(&usage)
}

pub fn report(err: &HexWriteError) -> ExitCode {
    eprintln!("{err}");
    ExitCode::from(err.exit_code())
}
