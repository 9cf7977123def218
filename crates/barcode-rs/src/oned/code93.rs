use crate::common::BitMatrix;
use crate::error::EncodeError;
use crate::format::BarcodeFormat;
use crate::hints::EncodeHints;
use crate::oned::writer::{encode_one_dimensional, OneDimensionalWriter};
use crate::Writer;

// The 47 data characters; the last four are the shift metacharacters.
static ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-. $/+%abcd";

// Nine modules per character, encoded directly as bits (three bars and
// three spaces each).
static CHARACTER_ENCODINGS: [u32; 48] = [
    0x114, 0x148, 0x144, 0x142, 0x128, 0x124, 0x122, 0x150, 0x112, 0x10A, // 0-9
    0x1A8, 0x1A4, 0x1A2, 0x194, 0x192, 0x18A, 0x168, 0x164, 0x162, 0x134, // A-J
    0x11A, 0x158, 0x14C, 0x146, 0x12C, 0x116, 0x1B4, 0x1B2, 0x1AC, 0x1A6, // K-T
    0x196, 0x19A, 0x16C, 0x166, 0x136, 0x13A, // U-Z
    0x12E, 0x1D4, 0x1D2, 0x1CA, 0x16E, 0x176, 0x1AE, // - . space $ / + %
    0x126, 0x1DA, 0x1D6, 0x132, // shift characters
    0x15E, // *
];

const ASTERISK_INDEX: usize = 47;

/// Encodes Code 93 symbols with their two weighted check characters.
pub struct Code93Writer;

impl OneDimensionalWriter for Code93Writer {
    fn format(&self) -> BarcodeFormat {
        BarcodeFormat::Code93
    }

    fn encode_contents(&self, contents: &str, _hints: &EncodeHints) -> Result<Vec<bool>, EncodeError> {
        let length = contents.chars().count();
        if length > 80 {
            return Err(EncodeError::Overflow(format!(
                "requested contents should be less than 80 digits long, but got {}",
                length
            )));
        }
        let mut indices = Vec::with_capacity(length + 2);
        for c in contents.chars() {
            let index = ALPHABET.find(c).ok_or_else(|| {
                EncodeError::BadInput(format!("requested content contains '{}'", c))
            })?;
            indices.push(index);
        }

        // Start, contents, two check characters, stop, termination bar.
        let code_width = (length + 2 + 2) * 9 + 1;
        let mut result = vec![false; code_width];
        let mut pos = append_pattern(&mut result, 0, CHARACTER_ENCODINGS[ASTERISK_INDEX]);
        for &index in &indices {
            pos += append_pattern(&mut result, pos, CHARACTER_ENCODINGS[index]);
        }
        // The second checksum covers the first, so it is appended before
        // computing again.
        let check1 = compute_checksum_index(&indices, 20);
        pos += append_pattern(&mut result, pos, CHARACTER_ENCODINGS[check1]);
        indices.push(check1);
        let check2 = compute_checksum_index(&indices, 15);
        pos += append_pattern(&mut result, pos, CHARACTER_ENCODINGS[check2]);
        pos += append_pattern(&mut result, pos, CHARACTER_ENCODINGS[ASTERISK_INDEX]);
        result[pos] = true;
        Ok(result)
    }
}

// Writes the nine modules of one character, most significant bit first.
fn append_pattern(target: &mut [bool], pos: usize, encoding: u32) -> usize {
    for i in 0..9 {
        target[pos + i] = encoding & (1 << (8 - i)) != 0;
    }
    9
}

// Weighted sum modulo 47, weights cycling 1..=max_weight from the right.
fn compute_checksum_index(indices: &[usize], max_weight: usize) -> usize {
    let mut weight = 1;
    let mut total = 0;
    for &index in indices.iter().rev() {
        total += index * weight;
        weight += 1;
        if weight > max_weight {
            weight = 1;
        }
    }
    total % 47
}

impl Writer for Code93Writer {
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
    fn append_both_check_characters_and_terminate() {
        // "AB": checks are V (weights 1, 2) and then - over "ABV".
        let code = Code93Writer
            .encode_contents("AB", &EncodeHints::default())
            .unwrap();
        assert_eq!(
            "1010111101101010001101001001100101101001011101010111101",
            modules_text(&code)
        );
    }

    #[test]
    fn size_the_output_from_the_character_count() {
        let code = Code93Writer
            .encode_contents("TEST93", &EncodeHints::default())
            .unwrap();
        assert_eq!((6 + 4) * 9 + 1, code.len());
        assert!(code[0]);
        assert!(code[code.len() - 1]);
    }

    #[test]
    fn cycle_checksum_weights_past_their_maximum() {
        // 21 identical characters exercise the weight wrap at 20.
        let indices = vec![1usize; 21];
        let total: usize = (1..=20).sum::<usize>() + 1;
        assert_eq!(total % 47, compute_checksum_index(&indices, 20));
    }

    #[test]
    fn reject_characters_outside_the_alphabet() {
        assert!(matches!(
            Code93Writer.encode_contents("ABC!", &EncodeHints::default()),
            Err(EncodeError::BadInput(_))
        ));
    }

    #[test]
    fn reject_overlong_contents() {
        let long = "A".repeat(81);
        assert!(matches!(
            Code93Writer.encode_contents(&long, &EncodeHints::default()),
            Err(EncodeError::Overflow(_))
        ));
    }
}
