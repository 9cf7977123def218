use crate::common::BitMatrix;
use crate::error::EncodeError;
use crate::format::BarcodeFormat;
use crate::hints::EncodeHints;
use crate::oned::upc_ean::{
    check_numeric, check_standard_upc_ean_checksum, digit, standard_upc_ean_checksum, END_PATTERN,
    L_AND_G_PATTERNS, START_END_PATTERN, UPC_EAN_DEFAULT_MARGIN,
};
use crate::oned::writer::{append_pattern, encode_one_dimensional, OneDimensionalWriter};
use crate::Writer;

// Parity patterns for the six data digits, selected by the number system
// digit (0 or 1) and the check digit of the expanded UPC-A number.
pub(crate) static NUMSYS_AND_CHECK_DIGIT_PATTERNS: [[u32; 10]; 2] = [
    [0x38, 0x34, 0x32, 0x31, 0x2C, 0x26, 0x23, 0x2A, 0x29, 0x25],
    [0x07, 0x0B, 0x0D, 0x0E, 0x13, 0x19, 0x1C, 0x15, 0x16, 0x1A],
];

const CODE_WIDTH: usize = 3 + (7 * 6) + 6;

/// Encodes UPC-E, the zero-suppressed compression of UPC-A.
pub struct UpcEWriter;

impl OneDimensionalWriter for UpcEWriter {
    fn format(&self) -> BarcodeFormat {
        BarcodeFormat::UpcE
    }

    fn default_margin(&self) -> usize {
        UPC_EAN_DEFAULT_MARGIN
    }

    fn encode_contents(&self, contents: &str, _hints: &EncodeHints) -> Result<Vec<bool>, EncodeError> {
        check_numeric(contents)?;
        let contents = match contents.len() {
            7 => {
                let check = standard_upc_ean_checksum(&convert_upc_e_to_upc_a(contents)?)?;
                format!("{}{}", contents, check)
            }
            8 => {
                if !check_standard_upc_ean_checksum(&convert_upc_e_to_upc_a(contents)?)? {
                    return Err(EncodeError::ChecksumMismatch {
                        expected: char::from(
                            b'0' + standard_upc_ean_checksum(&convert_upc_e_to_upc_a(
                                &contents[..7],
                            )?)? as u8,
                        ),
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

        let first_digit = digit(char::from(contents.as_bytes()[0]))? as usize;
        if first_digit != 0 && first_digit != 1 {
            return Err(EncodeError::BadInput(
                "number system must be 0 or 1".to_owned(),
            ));
        }
        let check_digit = digit(char::from(contents.as_bytes()[7]))? as usize;
        let parities = NUMSYS_AND_CHECK_DIGIT_PATTERNS[first_digit][check_digit];

        let mut result = vec![false; CODE_WIDTH];
        let mut pos = 0;
        pos += append_pattern(&mut result, pos, &START_END_PATTERN, true);
        for i in 1..=6 {
            let mut d = digit(char::from(contents.as_bytes()[i]))? as usize;
            if (parities >> (6 - i)) & 1 == 1 {
                d += 10;
            }
            pos += append_pattern(&mut result, pos, &L_AND_G_PATTERNS[d], false);
        }
        append_pattern(&mut result, pos, &END_PATTERN, false);
        Ok(result)
    }
}

/// Expands a 7- or 8-digit UPC-E number to its UPC-A equivalent; the check
/// digit, when present, carries over unchanged.
pub(crate) fn convert_upc_e_to_upc_a(upc_e: &str) -> Result<String, EncodeError> {
    let bytes = upc_e.as_bytes();
    if bytes.len() < 7 {
        return Err(EncodeError::BadInput(
            "UPC-E contents should be at least 7 digits long".to_owned(),
        ));
    }
    let upce_chars = &upc_e[1..7];
    let mut result = String::with_capacity(12);
    result.push(bytes[0] as char);
    let last_char = bytes[6] as char;
    match last_char {
        '0' | '1' | '2' => {
            result.push_str(&upce_chars[0..2]);
            result.push(last_char);
            result.push_str("0000");
            result.push_str(&upce_chars[2..5]);
        }
        '3' => {
            result.push_str(&upce_chars[0..3]);
            result.push_str("00000");
            result.push_str(&upce_chars[3..5]);
        }
        '4' => {
            result.push_str(&upce_chars[0..4]);
            result.push_str("00000");
            result.push_str(&upce_chars[4..5]);
        }
        _ => {
            result.push_str(&upce_chars[0..5]);
            result.push_str("0000");
            result.push(last_char);
        }
    }
    if bytes.len() >= 8 {
        result.push(bytes[7] as char);
    }
    Ok(result)
}

impl Writer for UpcEWriter {
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
