use crate::common::BitMatrix;
use crate::error::EncodeError;
use crate::format::BarcodeFormat;
use crate::hints::EncodeHints;
use crate::oned::writer::{append_pattern, encode_one_dimensional, OneDimensionalWriter};
use crate::Writer;

static START_WIDTHS: [usize; 2] = [2, 1];
static END_WIDTHS: [usize; 3] = [1, 2, 1];

// Four bits per digit, each bit a bar/space pair: set bits are 2+1, clear
// bits 1+2. Twelve modules per digit.
static NUMBER_WIDTHS: [[usize; 8]; 10] = [
    [1, 2, 1, 2, 1, 2, 1, 2], // 0
    [1, 2, 1, 2, 1, 2, 2, 1], // 1
    [1, 2, 1, 2, 2, 1, 1, 2], // 2
    [1, 2, 1, 2, 2, 1, 2, 1], // 3
    [1, 2, 2, 1, 1, 2, 1, 2], // 4
    [1, 2, 2, 1, 1, 2, 2, 1], // 5
    [1, 2, 2, 1, 2, 1, 1, 2], // 6
    [1, 2, 2, 1, 2, 1, 2, 1], // 7
    [2, 1, 1, 2, 1, 2, 1, 2], // 8
    [2, 1, 1, 2, 1, 2, 2, 1], // 9
];

/// Encodes MSI (modified Plessey) symbols. No checksum is appended.
pub struct MsiWriter;

impl OneDimensionalWriter for MsiWriter {
    fn format(&self) -> BarcodeFormat {
        BarcodeFormat::Msi
    }

    fn encode_contents(&self, contents: &str, _hints: &EncodeHints) -> Result<Vec<bool>, EncodeError> {
        let digits: Vec<u32> = contents
            .chars()
            .map(|c| {
                c.to_digit(10).ok_or_else(|| {
                    EncodeError::BadInput(format!("'{}' is not a decimal digit", c))
                })
            })
            .collect::<Result<_, _>>()?;

        let code_width = 3 + digits.len() * 12 + 4;
        let mut result = vec![false; code_width];
        let mut pos = append_pattern(&mut result, 0, &START_WIDTHS, true);
        for &digit in &digits {
            pos += append_pattern(&mut result, pos, &NUMBER_WIDTHS[digit as usize], true);
        }
        append_pattern(&mut result, pos, &END_WIDTHS, true);
        Ok(result)
    }
}

impl Writer for MsiWriter {
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
    fn frame_digits_with_the_msi_guards() {
        let code = MsiWriter
            .encode_contents("1", &EncodeHints::default())
            .unwrap();
        assert_eq!("1101001001001101001", modules_text(&code));
    }

    #[test]
    fn spend_twelve_modules_per_digit() {
        let code = MsiWriter
            .encode_contents("480075", &EncodeHints::default())
            .unwrap();
        assert_eq!(3 + 6 * 12 + 4, code.len());
        assert!(code[0]);
        assert!(code[code.len() - 1]);
    }

    #[test]
    fn reject_non_digits() {
        assert!(matches!(
            MsiWriter.encode_contents("12a", &EncodeHints::default()),
            Err(EncodeError::BadInput(_))
        ));
    }
}
