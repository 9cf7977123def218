use crate::common::BitMatrix;
use crate::error::EncodeError;
use crate::format::BarcodeFormat;
use crate::hints::EncodeHints;
use crate::oned::upc_ean::{
    check_numeric, check_standard_upc_ean_checksum, digit, standard_upc_ean_checksum,
    L_AND_G_PATTERNS, L_PATTERNS, MIDDLE_PATTERN, START_END_PATTERN, UPC_EAN_DEFAULT_MARGIN,
};
use crate::oned::writer::{append_pattern, encode_one_dimensional, OneDimensionalWriter};
use crate::Writer;

// How the leading digit selects L/G parities for digits two to seven. Bit
// 5 - i set means digit i + 2 uses the G patterns.
pub(crate) static FIRST_DIGIT_ENCODINGS: [u32; 10] =
    [0x00, 0x0B, 0x0D, 0x0E, 0x13, 0x19, 0x1C, 0x15, 0x16, 0x1A];

const CODE_WIDTH: usize = 3 + (7 * 6) + 5 + (7 * 6) + 3;

/// Encodes EAN-13 symbols.
pub struct Ean13Writer;

impl OneDimensionalWriter for Ean13Writer {
    fn format(&self) -> BarcodeFormat {
        BarcodeFormat::Ean13
    }

    fn default_margin(&self) -> usize {
        UPC_EAN_DEFAULT_MARGIN
    }

    fn encode_contents(&self, contents: &str, _hints: &EncodeHints) -> Result<Vec<bool>, EncodeError> {
        check_numeric(contents)?;
        let contents = match contents.len() {
            12 => {
                let check = standard_upc_ean_checksum(contents)?;
                format!("{}{}", contents, check)
            }
            13 => {
                if !check_standard_upc_ean_checksum(contents)? {
                    let expected = standard_upc_ean_checksum(&contents[..12])?;
                    return Err(EncodeError::ChecksumMismatch {
                        expected: char::from(b'0' + expected as u8),
                        found: contents.as_bytes()[12] as char,
                    });
                }
                contents.to_owned()
            }
            length => {
                return Err(EncodeError::BadInput(format!(
                    "requested contents should be 12 or 13 digits long, but got {}",
                    length
                )))
            }
        };

        let first_digit = digit(char::from(contents.as_bytes()[0]))? as usize;
        let parities = FIRST_DIGIT_ENCODINGS[first_digit];
        let mut result = vec![false; CODE_WIDTH];
        let mut pos = 0;
        pos += append_pattern(&mut result, pos, &START_END_PATTERN, true);

        // The first digit is implied by the parity pattern of the left half.
        for i in 1..=6 {
            let mut d = digit(char::from(contents.as_bytes()[i]))? as usize;
            if (parities >> (6 - i)) & 1 == 1 {
                d += 10;
            }
            pos += append_pattern(&mut result, pos, &L_AND_G_PATTERNS[d], false);
        }
        pos += append_pattern(&mut result, pos, &MIDDLE_PATTERN, false);
        for i in 7..=12 {
            let d = digit(char::from(contents.as_bytes()[i]))? as usize;
            pos += append_pattern(&mut result, pos, &L_PATTERNS[d], true);
        }
        append_pattern(&mut result, pos, &START_END_PATTERN, true);
        Ok(result)
    }
}

impl Writer for Ean13Writer {
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
    use crate::oned::writer::row_text;
    use crate::Writer;

    const FIXTURE: &str = "00001010001011010011101100110010011011110100111010101011001101101100100001010111001001110100010010100000";

    #[test]
    fn encode_a_self_checking_number() {
        let matrix = Ean13Writer
            .encode(
                "5901234123457",
                BarcodeFormat::Ean13,
                FIXTURE.len() as i32,
                0,
                &EncodeHints::default(),
            )
            .unwrap();
        assert_eq!(FIXTURE, row_text(&matrix));
    }

    #[test]
    fn add_the_check_digit_when_missing() {
        let matrix = Ean13Writer
            .encode(
                "590123412345",
                BarcodeFormat::Ean13,
                FIXTURE.len() as i32,
                0,
                &EncodeHints::default(),
            )
            .unwrap();
        assert_eq!(FIXTURE, row_text(&matrix));
    }

    #[test]
    fn reject_a_wrong_check_digit() {
        let result = Ean13Writer.encode_contents("5901234123450", &EncodeHints::default());
        assert_eq!(
            Err(EncodeError::ChecksumMismatch {
                expected: '7',
                found: '0'
            }),
            result
        );
    }

    #[test]
    fn reject_bad_lengths_and_non_digits() {
        let hints = EncodeHints::default();
        assert!(matches!(
            Ean13Writer.encode_contents("123456789", &hints),
            Err(EncodeError::BadInput(_))
        ));
        assert!(matches!(
            Ean13Writer.encode_contents("59012341234a", &hints),
            Err(EncodeError::BadInput(_))
        ));
    }

    #[test]
    fn begin_and_end_with_a_bar() {
        let code = Ean13Writer
            .encode_contents("5901234123457", &EncodeHints::default())
            .unwrap();
        assert_eq!(CODE_WIDTH, code.len());
        assert!(code[0]);
        assert!(code[code.len() - 1]);
    }
}
