use crate::common::BitMatrix;
use crate::error::EncodeError;
use crate::format::BarcodeFormat;
use crate::hints::EncodeHints;
use crate::oned::upc_ean::UPC_EAN_DEFAULT_MARGIN;
use crate::oned::writer::{encode_one_dimensional, OneDimensionalWriter};
use crate::oned::Ean13Writer;
use crate::Writer;

/// Encodes UPC-A symbols as the equivalent EAN-13 with a leading zero.
pub struct UpcAWriter;

impl OneDimensionalWriter for UpcAWriter {
    fn format(&self) -> BarcodeFormat {
        BarcodeFormat::UpcA
    }

    fn default_margin(&self) -> usize {
        UPC_EAN_DEFAULT_MARGIN
    }

    fn encode_contents(&self, contents: &str, hints: &EncodeHints) -> Result<Vec<bool>, EncodeError> {
        let length = contents.chars().count();
        if length != 11 && length != 12 {
            return Err(EncodeError::BadInput(format!(
                "requested contents should be 11 or 12 digits long, but got {}",
                length
            )));
        }
        Ean13Writer.encode_contents(&format!("0{}", contents), hints)
    }
}

impl Writer for UpcAWriter {
    fn encode(
        &self,
        contents: &str,
        format: BarcodeFormat,
        width: i32,
        height: i32,
        hints: &EncodeHints,
    ) -> Result<BitMatrix, EncodeError> {
        encode_one_dimensional(self, contents, format, width, height, hints)
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::oned::writer::modules_text;

    #[test]
    fn delegate_to_ean13_with_a_leading_zero() {
        let hints = EncodeHints::default();
        let upc = UpcAWriter.encode_contents("123456789012", &hints).unwrap();
        let ean = Ean13Writer.encode_contents("0123456789012", &hints).unwrap();
        assert_eq!(modules_text(&ean), modules_text(&upc));
    }

    #[test]
    fn add_the_check_digit_when_missing() {
        let hints = EncodeHints::default();
        let with_check = UpcAWriter.encode_contents("123456789012", &hints).unwrap();
        let without_check = UpcAWriter.encode_contents("12345678901", &hints).unwrap();
        assert_eq!(modules_text(&with_check), modules_text(&without_check));
    }

    #[test]
    fn reject_bad_lengths() {
        let hints = EncodeHints::default();
        assert!(matches!(
            UpcAWriter.encode_contents("1234567890123", &hints),
            Err(EncodeError::BadInput(_))
        ));
        assert!(matches!(
            UpcAWriter.encode_contents("12345", &hints),
            Err(EncodeError::BadInput(_))
        ));
    }

    #[test]
    fn reject_a_wrong_check_digit() {
        assert!(matches!(
            UpcAWriter.encode_contents("123456789010", &EncodeHints::default()),
            Err(EncodeError::ChecksumMismatch { .. })
        ));
    }
}
