//! Checkpoint error types.

use thiserror::Error;

/// Wire encoding a checkpoint was being read from or written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Json,
    Binary,
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => f.write_str("JSON"),
            Self::Binary => f.write_str("binary"),
        }
    }
}

/// Errors raised while encoding, decoding or restoring a checkpoint.
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Failed to encode checkpoint as {encoding}: {reason}")]
    SerializationFailed { encoding: Encoding, reason: String },

    #[error("Failed to decode {encoding} checkpoint: {reason}")]
    DeserializationFailed { encoding: Encoding, reason: String },

    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The checkpoint is internally inconsistent or was taken from a
    /// machine with a different initial state.
    #[error("Checkpoint rejected: {0}")]
    ValidationFailed(String),
}

impl CheckpointError {
    pub(crate) fn encode(encoding: Encoding, reason: impl ToString) -> Self {
        Self::SerializationFailed {
            encoding,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn decode(encoding: Encoding, reason: impl ToString) -> Self {
        Self::DeserializationFailed {
            encoding,
            reason: reason.to_string(),
        }
    }
}
