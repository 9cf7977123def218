use gf_rs::GfError;
use thiserror::Error;

/// The single error taxonomy of the encoder surface.
///
/// Every public operation reports failures through this enum; nothing is
/// retried, logged or partially returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EncodeError {
    /// The content or the requested parameters cannot be represented in the
    /// chosen symbology.
    #[error("bad input: {0}")]
    BadInput(String),

    /// The content exceeds the symbology's capacity.
    #[error("data overflow: {0}")]
    Overflow(String),

    /// A caller-supplied check digit disagrees with the computed value.
    #[error("checksum mismatch: expected {expected}, found {found}")]
    ChecksumMismatch { expected: char, found: char },

    /// A state that valid inputs can never reach; indicates a defect in the
    /// encoder itself.
    #[error("internal invariant violated: {0}")]
    InternalInvariant(String),
}

impl From<GfError> for EncodeError {
    fn from(err: GfError) -> Self {
        // The QR pipeline always hands the Reed-Solomon engine well-formed
        // block sizes, so any field error surfacing here is a defect.
        EncodeError::InternalInvariant(err.to_string())
    }
}
