use crate::common::BitMatrix;
use crate::error::EncodeError;
use crate::format::BarcodeFormat;
use crate::hints::EncodeHints;
use crate::oned::writer::{encode_one_dimensional, OneDimensionalWriter};
use crate::Writer;

// The sixteen data characters followed by the four guards A to D. Each
// encoding is seven elements, most significant bit first; a set bit means
// a wide element.
static ALPHABET: &[u8] = b"0123456789-$:/.+ABCD";
static CHARACTER_ENCODINGS: [u32; 20] = [
    0x003, 0x006, 0x009, 0x060, 0x012, 0x042, 0x021, 0x024, 0x030, 0x048, // 0-9
    0x00C, 0x018, 0x045, 0x051, 0x054, 0x015, 0x01A, 0x029, 0x00B, 0x00E, // -$:/.+ABCD
];

static START_END_CHARS: [char; 4] = ['A', 'B', 'C', 'D'];
// Aliases accepted for the guards, mapped onto A to D.
static ALT_START_END_CHARS: [char; 4] = ['T', 'N', '*', 'E'];
static CHARS_WHICH_ARE_TEN_LENGTH_EACH_AFTER_DECODED: [char; 4] = ['/', ':', '+', '.'];
const DEFAULT_GUARD: char = 'A';

/// Encodes CODABAR symbols, adding default `A` guards when the contents
/// carry none of their own.
pub struct CodabarWriter;

impl OneDimensionalWriter for CodabarWriter {
    fn format(&self) -> BarcodeFormat {
        BarcodeFormat::Codabar
    }

    fn encode_contents(&self, contents: &str, _hints: &EncodeHints) -> Result<Vec<bool>, EncodeError> {
        let mut contents: Vec<char> = contents.chars().collect();
        if contents.len() < 2 {
            // Can't have a start/end guard, so tentatively add default guards.
            contents.insert(0, DEFAULT_GUARD);
            contents.push(DEFAULT_GUARD);
        } else {
            // Verify input and calculate decoded length.
            let first_char = contents[0].to_ascii_uppercase();
            let last_char = contents[contents.len() - 1].to_ascii_uppercase();
            let starts_normal = START_END_CHARS.contains(&first_char);
            let ends_normal = START_END_CHARS.contains(&last_char);
            let starts_alt = ALT_START_END_CHARS.contains(&first_char);
            let ends_alt = ALT_START_END_CHARS.contains(&last_char);
            if starts_normal {
                if !ends_normal {
                    return Err(EncodeError::BadInput(
                        "invalid start/end guards".to_owned(),
                    ));
                }
            } else if starts_alt {
                if !ends_alt {
                    return Err(EncodeError::BadInput(
                        "invalid start/end guards".to_owned(),
                    ));
                }
            } else {
                // Doesn't start with a guard; it must not end with one either.
                if ends_normal || ends_alt {
                    return Err(EncodeError::BadInput(
                        "invalid start/end guards".to_owned(),
                    ));
                }
                contents.insert(0, DEFAULT_GUARD);
                contents.push(DEFAULT_GUARD);
            }
        }

        // The start and end guards decode to ten modules each.
        let mut result_length = 20;
        for &c in &contents[1..contents.len() - 1] {
            if c.is_ascii_digit() || c == '-' || c == '$' {
                result_length += 9;
            } else if CHARS_WHICH_ARE_TEN_LENGTH_EACH_AFTER_DECODED.contains(&c) {
                result_length += 10;
            } else {
                return Err(EncodeError::BadInput(format!("cannot encode: '{}'", c)));
            }
        }
        // A blank is placed between each character.
        result_length += contents.len() - 1;

        let mut result = vec![false; result_length];
        let mut position = 0;
        for (index, &original) in contents.iter().enumerate() {
            let mut c = original.to_ascii_uppercase();
            if index == 0 || index == contents.len() - 1 {
                // The alias guards map onto the canonical ones.
                c = match c {
                    'T' => 'A',
                    'N' => 'B',
                    '*' => 'C',
                    'E' => 'D',
                    other => other,
                };
            }
            let code = ALPHABET
                .iter()
                .position(|&a| a as char == c)
                .map(|at| CHARACTER_ENCODINGS[at])
                .ok_or_else(|| EncodeError::BadInput(format!("cannot encode: '{}'", c)))?;

            // Wide elements span two modules, narrow elements one.
            let mut color = true;
            let mut counter = 0;
            let mut bit = 0;
            while bit < 7 {
                result[position] = color;
                position += 1;
                if (code >> (6 - bit)) & 1 == 0 || counter == 1 {
                    color = !color;
                    bit += 1;
                    counter = 0;
                } else {
                    counter += 1;
                }
            }
            if index < contents.len() - 1 {
                result[position] = false;
                position += 1;
            }
        }
        Ok(result)
    }
}

impl Writer for CodabarWriter {
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
