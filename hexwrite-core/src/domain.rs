// hexwrite_core/src/domain.rs
use crate::error::UsageError;

pub const APPEND_FLAG: &str = "--append";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Write-only into a file that must already exist, like a device node.
    #[default]
    Existing,
    /// Create if missing and write at end of file. Debugging only.
    Append,
}

impl WriteMode {
    pub fn from_flag(flag: Option<&str>) -> Result<Self, UsageError> {
        match flag {
            None => Ok(WriteMode::Existing),
            Some(APPEND_FLAG) => Ok(WriteMode::Append),
            Some(other) => Err(UsageError::BadFlag {
                arg: other.to_string(),
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Empty payload; the target was never opened.
    Skipped,
    Written { bytes: u64 },
}
