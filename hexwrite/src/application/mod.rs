pub mod handlers;

use crate::presentation::cli::Cli;
use clap::Parser;
use std::ffi::OsString;
use std::iter;
use std::process::ExitCode;

pub fn run() -> ExitCode {
    run_from(std::env::args_os())
}

pub fn run_from<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let bin = args
        .next()
        .unwrap_or_else(|| OsString::from("write_to_file"));
    // Escape up front so a user-supplied `--` stays a positional value.
    let argv = iter::once(bin)
        .chain(iter::once(OsString::from("--")))
        .chain(args);

    let cli = match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(err) => return handlers::handle_parse_error(err),
    };
    match handlers::handle_write(cli.args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => handlers::report(&err),
    }
}
