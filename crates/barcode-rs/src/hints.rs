use serde::{Deserialize, Serialize};

use crate::common::CharacterSet;
use crate::qr::ErrorCorrectionLevel;

/// Optional encoder configuration.
///
/// An absent field means "use the symbology's default". The struct replaces
/// the loosely typed hint dictionary of older encoders so every option is
/// named and checked at compile time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeHints {
    /// QR Code error correction level; defaults to `L`.
    #[serde(default)]
    pub error_correction: Option<ErrorCorrectionLevel>,

    /// Character set for QR byte mode; defaults to ISO-8859-1.
    #[serde(default)]
    pub character_set: Option<CharacterSet>,

    /// Pins the QR version (1..=40) instead of choosing the smallest fit.
    #[serde(default)]
    pub qr_version: Option<u32>,

    /// Suppresses the ECI header even when the character set would emit one.
    #[serde(default)]
    pub disable_eci: bool,

    /// Formats the symbol for GS1 applications (FNC1 in first position).
    #[serde(default)]
    pub gs1_format: bool,

    /// Forces Code 128 to stay in code set B.
    #[serde(default)]
    pub code128_force_codeset_b: bool,

    /// Overrides the quiet-zone width, in modules.
    #[serde(default)]
    pub margin: Option<u32>,
}
