use crate::common::BitMatrix;
use crate::error::EncodeError;
use crate::format::BarcodeFormat;
use crate::hints::EncodeHints;
use crate::oned::upc_ean::{
    check_numeric, check_standard_upc_ean_checksum, digit, standard_upc_ean_checksum, L_PATTERNS,
    MIDDLE_PATTERN, START_END_PATTERN, UPC_EAN_DEFAULT_MARGIN,
};
use crate::oned::writer::{append_pattern, encode_one_dimensional, OneDimensionalWriter};
use crate::Writer;

const CODE_WIDTH: usize = 3 + (7 * 4) + 5 + (7 * 4) + 3;

/// Encodes EAN-8 symbols.
///
/// Both halves use the L width tables; the left half is appended starting
/// with a space and the right half starting with a bar.
pub struct Ean8Writer;

impl OneDimensionalWriter for Ean8Writer {
    fn format(&self) -> BarcodeFormat {
        BarcodeFormat::Ean8
    }

    fn default_margin(&self) -> usize {
        UPC_EAN_DEFAULT_MARGIN
    }

    fn encode_contents(&self, contents: &str, _hints: &EncodeHints) -> Result<Vec<bool>, EncodeError> {
        check_numeric(contents)?;
        let contents = match contents.len() {
            7 => {
                let check = standard_upc_ean_checksum(contents)?;
                format!("{}{}", contents, check)
            }
            8 => {
                if !check_standard_upc_ean_checksum(contents)? {
                    let expected = standard_upc_ean_checksum(&contents[..7])?;
                    return Err(EncodeError::ChecksumMismatch {
                        expected: char::from(b'0' + expected as u8),
                        found: contents.as_bytes()[7] as char,
                    });
                }
                contents.to_owned()
            }
            length => {
                return Err(EncodeError::BadInput(format!(
                    "requested contents should be 7 or 8 digits long, but got {}",
                    length
                )))
            }
        };

        let mut result = vec![false; CODE_WIDTH];
        let mut pos = 0;
        pos += append_pattern(&mut result, pos, &START_END_PATTERN, true);
        for i in 0..4 {
            let d = digit(char::from(contents.as_bytes()[i]))? as usize;
            pos += append_pattern(&mut result, pos, &L_PATTERNS[d], false);
        }
        pos += append_pattern(&mut result, pos, &MIDDLE_PATTERN, false);
        for i in 4..8 {
            let d = digit(char::from(contents.as_bytes()[i]))? as usize;
            pos += append_pattern(&mut result, pos, &L_PATTERNS[d], true);
        }
        append_pattern(&mut result, pos, &START_END_PATTERN, true);
        Ok(result)
    }
}

impl Writer for Ean8Writer {
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
