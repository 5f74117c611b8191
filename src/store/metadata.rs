//! File change detection
//!
//! Modification-time plus byte-size signature used to decide whether the
//! backing file needs to be reparsed.

use std::fs;
use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

/// Signature of the backing file observed at the last successful parse.
///
/// This is a cheap change-detection signal, not a content hash: a rewrite
/// that preserves both the modification time and the size goes undetected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMetadata {
    modified: SystemTime,
    size: u64,
}

impl FileMetadata {
    /// Capture the signature from stat results.
    pub fn of(meta: &fs::Metadata) -> Result<Self, io::Error> {
        Ok(Self {
            modified: meta.modified()?,
            size: meta.len(),
        })
    }
}

impl Default for FileMetadata {
    /// Epoch-zero timestamp and zero size, so the first comparison against
    /// any real file reads as changed.
    fn default() -> Self {
        Self {
            modified: UNIX_EPOCH,
            size: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_differs_from_real_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# nothing").unwrap();

        let stat = std::fs::metadata(file.path()).unwrap();
        let observed = FileMetadata::of(&stat).unwrap();
        assert_ne!(observed, FileMetadata::default());
    }

    #[test]
    fn test_signature_stable_without_changes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# nothing").unwrap();
        file.flush().unwrap();

        let first = FileMetadata::of(&std::fs::metadata(file.path()).unwrap()).unwrap();
        let second = FileMetadata::of(&std::fs::metadata(file.path()).unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
