//! Encoders for one- and two-dimensional optical barcodes.
//!
//! Every encoder turns a text payload into a monochrome [`BitMatrix`] ready
//! for rasterization. The supported symbologies are CODABAR, Code 39,
//! Code 93, Code 128, ITF, MSI, Plessey, UPC-A, UPC-E, EAN-8, EAN-13 and
//! QR Code.
//!
//! Encoding is a pure function of its arguments: no I/O, no logging, no
//! shared mutable state beyond the lazily built Galois tables in `gf-rs`.
//! Encoders are zero-sized values and safe to share across threads.
//!
//! ```
//! use barcode_rs::{BarcodeFormat, EncodeHints, Writer};
//! use barcode_rs::oned::Ean13Writer;
//! use barcode_rs::qr::QrCodeWriter;
//!
//! let hints = EncodeHints::default();
//! let ean = Ean13Writer.encode("590123412345", BarcodeFormat::Ean13, 0, 40, &hints)?;
//! assert_eq!(40, ean.height());
//! let qr = QrCodeWriter.encode("HELLO WORLD", BarcodeFormat::QrCode, 0, 0, &hints)?;
//! assert_eq!(qr.width(), qr.height());
//! # Ok::<(), barcode_rs::EncodeError>(())
//! ```

pub mod common;
pub mod oned;
pub mod qr;

mod error;
mod format;
mod hints;

pub use error::EncodeError;
pub use format::BarcodeFormat;
pub use hints::EncodeHints;

use common::BitMatrix;

/// The common encoding surface shared by every symbology.
pub trait Writer {
    /// Encodes `contents` into a bit matrix of at least `width` x `height`
    /// pixels (zero means natural size; negative is rejected).
    ///
    /// The encoder rejects a `format` other than its own. Quiet zones are
    /// included in the output; the matrix may be larger than requested when
    /// the minimal pattern does not fit the preference.
    fn encode(
        &self,
        contents: &str,
        format: BarcodeFormat,
        width: i32,
        height: i32,
        hints: &EncodeHints,
    ) -> Result<BitMatrix, EncodeError>;
}
