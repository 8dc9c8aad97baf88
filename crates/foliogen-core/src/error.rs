//! Generator failure modes.

use std::io;
use std::path::PathBuf;

/// Why generation aborted. I/O failures abort the whole run without
/// rolling back files already written; the target directory is assumed
/// freshly created and abandonment is acceptable.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("target directory already exists: {}", .0.display())]
    TargetExists(PathBuf),

    #[error("custom asset source not found: {}", .0.display())]
    AssetSourceMissing(PathBuf),

    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to copy asset {}: {source}", .path.display())]
    CopyAsset {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
