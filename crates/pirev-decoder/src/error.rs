//! Error types for revision code decoding

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for decoding operations
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors that can occur while reading, parsing or decoding a revision code
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Input is not a 32-bit hexadecimal number
    #[error("Could not parse revision code \"{input}\": {reason}")]
    UnparsableCode {
        /// Offending input, as given
        input: String,
        /// Why it was rejected
        reason: String,
    },

    /// Old-style code with no known board behind it
    #[error("Invalid old style revision: {code:#06x}")]
    UnknownLegacyCode {
        /// Raw code
        code: u32,
    },

    /// Host cpuinfo file could not be read
    #[error("Could not open {}: {source}", .path.display())]
    CpuInfoUnavailable {
        /// File that was tried
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Host cpuinfo file has no `Revision` line
    #[error("No Revision line in {}", .path.display())]
    RevisionNotFound {
        /// File that was searched
        path: PathBuf,
    },
}

impl DecodeError {
    /// Create an unparsable code error
    pub fn unparsable(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnparsableCode {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a cpuinfo read error
    pub fn cpuinfo_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CpuInfoUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create a missing revision line error
    pub fn revision_not_found(path: impl Into<PathBuf>) -> Self {
        Self::RevisionNotFound { path: path.into() }
    }
}
