use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::WriteMode;
use crate::error::{HexWriteError, UsageError};

/// A validated `<file> <hex_data> [--append]` invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteRequest {
    path: PathBuf,
    payload_hex: String,
    mode: WriteMode,
}

impl WriteRequest {
    /// Validates raw arguments (program name excluded): exactly a path and a
    /// payload, optionally followed by `--append`. Nothing is treated as an
    /// option, so paths like `-dev` or `--` are taken literally.
    pub fn from_args<I>(args: I) -> Result<Self, HexWriteError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut it = args.into_iter();
        let (Some(path), Some(payload)) = (it.next(), it.next()) else {
            return Err(UsageError::WrongArgCount.into());
        };
        let flag = it.next();
        if it.next().is_some() {
            return Err(UsageError::WrongArgCount.into());
        }

        let raw_len = payload.as_encoded_bytes().len();
        if raw_len % 2 != 0 {
            return Err(UsageError::OddLength { len: raw_len }.into());
        }
        let flag = flag.map(|f| f.to_string_lossy().into_owned());
        WriteMode::from_flag(flag.as_deref())?;

        let payload_hex = payload.into_string().map_err(|raw| {
            let index = raw
                .as_encoded_bytes()
                .iter()
                .position(|b| !b.is_ascii())
                .unwrap_or(0);
            HexWriteError::InvalidHexDigit {
                ch: char::REPLACEMENT_CHARACTER,
                index,
            }
        })?;

        Ok(Self::new(PathBuf::from(path), payload_hex, flag.as_deref())?)
    }

    /// Checks payload length before the mode flag, so an odd payload wins
    /// over a bad third argument.
    pub fn new(
        path: PathBuf,
        payload_hex: String,
        flag: Option<&str>,
    ) -> Result<Self, UsageError> {
        if payload_hex.len() % 2 != 0 {
            return Err(UsageError::OddLength {
                len: payload_hex.len(),
            });
        }
        let mode = WriteMode::from_flag(flag)?;
        Ok(Self {
            path,
            payload_hex,
            mode,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn payload_hex(&self) -> &str {
        &self.payload_hex
    }

    pub fn mode(&self) -> WriteMode {
        self.mode
    }

    pub fn is_empty(&self) -> bool {
        self.payload_hex.is_empty()
    }
}
