use crate::error::{HexWriteError, Result, UsageError};
use hex::FromHexError;

/// Decodes hex digit pairs (either case) into bytes. Anything outside
/// `[0-9a-fA-F]` is rejected rather than partially parsed.
pub fn decode_hex(hex_str: &str) -> Result<Vec<u8>> {
    hex::decode(hex_str).map_err(|e| match e {
        FromHexError::InvalidHexCharacter { c, index } => {
            HexWriteError::InvalidHexDigit { ch: c, index }
        }
        // `decode` reports InvalidStringLength only for fixed-size targets.
        FromHexError::OddLength | FromHexError::InvalidStringLength => {
            HexWriteError::Usage(UsageError::OddLength { len: hex_str.len() })
        }
    })
}

pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
