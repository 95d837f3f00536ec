// ─────────────────────────────────────────────────────────────────────
// TrackCut Kernel — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all TrackCut Kernel failures.
///
/// Every variant is a setup-time failure. Evaluating a track never
/// produces an error: a track that fails a selection is reported as
/// `false` or as an unset bit.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackCutError {
    /// Configuration could not be read.
    #[error("config error: {0}")]
    Config(String),

    /// Invalid input (non-finite threshold or offset).
    #[error("validation error: {0}")]
    Validation(String),

    /// A configured name does not match any catalogued selection.
    #[error("unknown selection: {0}")]
    UnknownSelection(String),

    /// The species hypothesis list names the same species twice.
    #[error("duplicate species hypothesis: {0}")]
    DuplicateSpecies(String),

    /// More selections than the signature container has bits.
    #[error(
        "number of selections too large for the {signature} signature: \
         {required} bits required, {available} available"
    )]
    SignatureOverflow {
        signature: &'static str,
        required: usize,
        available: u32,
    },
}

pub type TrackCutResult<T> = Result<T, TrackCutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_message() {
        let err = TrackCutError::SignatureOverflow {
            signature: "main",
            required: 9,
            available: 8,
        };
        let msg = err.to_string();
        assert!(msg.contains("main signature"));
        assert!(msg.contains("9 bits required"));
        assert!(msg.contains("8 available"));
    }

    #[test]
    fn test_unknown_selection_message() {
        let err = TrackCutError::UnknownSelection("ConfTrkPtMinn".into());
        assert_eq!(err.to_string(), "unknown selection: ConfTrkPtMinn");
    }
}
