use crate::common::ByteMatrix;
use crate::qr::{ErrorCorrectionLevel, Mode, Version};

/// The number of data mask patterns defined for QR symbols.
pub const NUM_MASK_PATTERNS: u32 = 8;

/// A fully assembled QR symbol before rasterization.
///
/// The matrix holds one cell per module with the chosen mask already
/// applied; no cell is left empty.
#[derive(Debug)]
pub struct QrCode {
    pub mode: Mode,
    pub ec_level: ErrorCorrectionLevel,
    pub version: &'static Version,
    pub mask_pattern: u32,
    pub matrix: ByteMatrix,
}
