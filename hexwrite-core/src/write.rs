use tracing::{debug, warn};

use crate::codec::hex::decode_hex;
use crate::domain::{WriteMode, WriteOutcome};
use crate::error::Result;
use crate::request::WriteRequest;
use crate::sink::FsSink;

/// Decodes the request payload and writes it to the target in one shot.
///
/// An empty payload returns [`WriteOutcome::Skipped`] without touching the
/// target. Decoding finishes before the target is opened, so a bad digit
/// never creates or modifies a file.
pub fn write_hex(req: &WriteRequest) -> Result<WriteOutcome> {
    if req.is_empty() {
        debug!(path = %req.path().display(), "empty payload, nothing to write");
        return Ok(WriteOutcome::Skipped);
    }

    let payload = decode_hex(req.payload_hex())?;
    debug!(len = payload.len(), "decoded payload");

    if req.mode() == WriteMode::Append {
        warn!(path = %req.path().display(), "append mode is a debugging aid; do not use it on a real device");
    }

    let mut sink = FsSink::open(req.path(), req.mode())?;
    let bytes = sink.write_payload(&payload)?;
    debug!(path = %sink.target().display(), bytes, "payload written");

    Ok(WriteOutcome::Written { bytes })
}
