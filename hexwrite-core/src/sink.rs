use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::WriteMode;
use crate::error::{HexWriteError, Result};

#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

/// rw for owner, group and other; only applies when append mode creates the file.
pub const CREATE_MODE: u32 = 0o666;

/// An opened write target. Dropping it closes the file.
pub struct FsSink {
    file: File,
    path: PathBuf,
}

impl FsSink {
    pub fn open(path: &Path, mode: WriteMode) -> Result<Self> {
        let mut opts = OpenOptions::new();
        opts.write(true);
        if mode == WriteMode::Append {
            opts.append(true).create(true);
        }
        #[cfg(unix)]
        opts.mode(CREATE_MODE);

        let file = opts
            .open(path)
            .map_err(|source| HexWriteError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn target(&self) -> &Path {
        &self.path
    }

    /// Writes the whole payload or fails; returns the byte count written.
    pub fn write_payload(&mut self, payload: &[u8]) -> Result<u64> {
        self.file
            .write_all(payload)
            .and_then(|_| self.file.flush())
            .map_err(|source| HexWriteError::Write {
                path: self.path.clone(),
                source,
            })?;
        Ok(payload.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn existing_mode_requires_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing");
        let err = FsSink::open(&path, WriteMode::Existing)
            .err()
            .expect("open should fail");
        match err {
            HexWriteError::Open { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!path.exists());
    }

    #[test]
    fn existing_mode_overwrites_in_place_without_truncating() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("node");
        fs::write(&path, b"abcdef").unwrap();

        let mut sink = FsSink::open(&path, WriteMode::Existing).unwrap();
        assert_eq!(sink.write_payload(b"XY").unwrap(), 2);
        drop(sink);

        assert_eq!(fs::read(&path).unwrap(), b"XYcdef");
    }

    #[test]
    fn append_mode_creates_then_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.bin");

        for chunk in [&b"ab"[..], &b"cd"[..]] {
            let mut sink = FsSink::open(&path, WriteMode::Append).unwrap();
            sink.write_payload(chunk).unwrap();
        }

        assert_eq!(fs::read(&path).unwrap(), b"abcd");
    }

    #[cfg(unix)]
    #[test]
    fn append_mode_creates_with_permissive_bits() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("created");
        FsSink::open(&path, WriteMode::Append).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        // umask may clear bits but never adds any
        assert_eq!(mode & !CREATE_MODE, 0);
        assert_eq!(mode & 0o600, 0o600);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn full_device_is_a_write_error() {
        let path = Path::new("/dev/full");
        let mut sink = FsSink::open(path, WriteMode::Existing).unwrap();
        match sink.write_payload(b"A") {
            Err(HexWriteError::Write { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.raw_os_error(), Some(28)); // ENOSPC
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
