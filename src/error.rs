/// Crate-level error types for hostmap diagnostics.
use std::path::PathBuf;

/// All errors in hostmap carry enough context to produce a useful diagnostic
/// without a debugger. Each variant names the file, value, or reason for failure.
#[allow(clippy::error_impl_error, reason = "crate-internal error type in binary")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file exists but cannot be opened as a ZIP container.
    #[error("cannot read archive {}: {reason}", path.display())]
    ArchiveRead {
        /// Path to the unreadable archive.
        path: PathBuf,
        /// Description of the container failure.
        reason: String,
    },

    /// The archive is readable but does not hold a usable mind map.
    #[error("document corrupt: {reason}")]
    DocumentCorrupt {
        /// Description of what was missing or malformed.
        reason: String,
    },

    /// The fixed input document does not exist on disk.
    #[error("input file not found: {}", path.display())]
    InputNotFound {
        /// Path to the missing input file.
        path: PathBuf,
    },

    /// An address failed the strict dotted-quad re-check at emission time.
    #[error("ip address {value} not valid")]
    InvalidIpAddress {
        /// The rejected address value.
        value: String,
    },

    /// Underlying I/O error from the filesystem.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// `content.json` exists but cannot be deserialized.
    #[error("json deserialize: {0}")]
    JsonDe(
        /// The wrapped JSON deserialization error.
        #[from]
        serde_json::Error,
    ),
}
