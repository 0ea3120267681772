use clap::Parser;
use std::ffi::OsString;

// Argument shape is checked by `WriteRequest::from_args`, so clap only
// collects raw values: no help or version flags, nothing parsed as an option.
#[derive(Parser, Debug)]
#[command(
    name = "write_to_file",
    about = "Decode a hex string and write the bytes to a file (device mock helper)",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// <file> <hex_data> [--append]
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub args: Vec<OsString>,
}
