use crate::common::BitMatrix;
use crate::error::EncodeError;
use crate::format::BarcodeFormat;
use crate::hints::EncodeHints;
use crate::oned::writer::{append_pattern, encode_one_dimensional, OneDimensionalWriter};
use crate::Writer;

static ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-. $/+%";

// Nine elements per character (five bars, four spaces); a set bit means a
// wide element. Three of the nine are always wide.
static CHARACTER_ENCODINGS: [u32; 43] = [
    0x034, 0x121, 0x061, 0x160, 0x031, 0x130, 0x070, 0x025, 0x124, 0x064, // 0-9
    0x109, 0x049, 0x148, 0x019, 0x118, 0x058, 0x00D, 0x10C, 0x04C, 0x01C, // A-J
    0x103, 0x043, 0x142, 0x013, 0x112, 0x052, 0x007, 0x106, 0x046, 0x016, // K-T
    0x181, 0x0C1, 0x1C0, 0x091, 0x190, 0x0D0, 0x085, 0x184, 0x0C4, 0x0A8, // U-$
    0x0A2, 0x08A, 0x02A, // /-%
];

const ASTERISK_ENCODING: u32 = 0x094;

/// Encodes Code 39 symbols; characters outside the 43-character alphabet
/// go through the extended-mode pair translation first.
pub struct Code39Writer;

impl OneDimensionalWriter for Code39Writer {
    fn format(&self) -> BarcodeFormat {
        BarcodeFormat::Code39
    }

    fn encode_contents(&self, contents: &str, _hints: &EncodeHints) -> Result<Vec<bool>, EncodeError> {
        let mut contents = contents.to_owned();
        let mut length = contents.chars().count();
        if length > 80 {
            return Err(EncodeError::Overflow(format!(
                "requested contents should be less than 80 digits long, but got {}",
                length
            )));
        }
        if contents.chars().any(|c| !ALPHABET.contains(c)) {
            contents = try_to_convert_to_extended_mode(&contents)?;
            length = contents.chars().count();
            if length > 80 {
                return Err(EncodeError::Overflow(format!(
                    "requested contents should be less than 80 digits long, but got {} (extended full ascii mode)",
                    length
                )));
            }
        }

        let mut widths = [0usize; 9];
        let code_width = 24 + 1 + (13 * length);
        let mut result = vec![false; code_width];
        to_narrow_wide_pattern(ASTERISK_ENCODING, &mut widths);
        let mut pos = append_pattern(&mut result, 0, &widths, true);
        let narrow_white = [1usize];
        pos += append_pattern(&mut result, pos, &narrow_white, false);
        // Append each character, separated by a narrow space.
        for c in contents.chars() {
            let index = ALPHABET.find(c).ok_or_else(|| {
                EncodeError::BadInput(format!("bad contents: '{}'", c))
            })?;
            to_narrow_wide_pattern(CHARACTER_ENCODINGS[index], &mut widths);
            pos += append_pattern(&mut result, pos, &widths, true);
            pos += append_pattern(&mut result, pos, &narrow_white, false);
        }
        to_narrow_wide_pattern(ASTERISK_ENCODING, &mut widths);
        append_pattern(&mut result, pos, &widths, true);
        Ok(result)
    }
}

fn to_narrow_wide_pattern(encoding: u32, widths: &mut [usize; 9]) {
    for (i, width) in widths.iter_mut().enumerate() {
        *width = if encoding & (1 << (8 - i)) == 0 { 1 } else { 2 };
    }
}

// Maps full-ASCII input onto alphabet pairs ($A for control characters,
// +A for lower case, and so on).
fn try_to_convert_to_extended_mode(contents: &str) -> Result<String, EncodeError> {
    let mut extended = String::new();
    for c in contents.chars() {
        match c {
            '\u{0}' => extended.push_str("%U"),
            ' ' | '-' | '.' => extended.push(c),
            '@' => extended.push_str("%V"),
            '`' => extended.push_str("%W"),
            _ => {
                let value = u32::from(c);
                if value <= 26 {
                    extended.push('$');
                    extended.push(char::from((b'A' + (value as u8 - 1)) as u8));
                } else if value < 32 {
                    extended.push('%');
                    extended.push(char::from(b'A' + (value as u8 - 27)));
                } else if value <= 44 || value == 47 || value == 58 {
                    extended.push('/');
                    extended.push(char::from(b'A' + (value as u8 - 33)));
                } else if value <= 57 {
                    extended.push(char::from(b'0' + (value as u8 - 48)));
                } else if value <= 63 {
                    extended.push('%');
                    extended.push(char::from(b'F' + (value as u8 - 59)));
                } else if value <= 90 {
                    extended.push(char::from(b'A' + (value as u8 - 65)));
                } else if value <= 95 {
                    extended.push('%');
                    extended.push(char::from(b'K' + (value as u8 - 91)));
                } else if value <= 122 {
                    extended.push('+');
                    extended.push(char::from(b'A' + (value as u8 - 97)));
                } else if value <= 127 {
                    extended.push('%');
                    extended.push(char::from(b'P' + (value as u8 - 123)));
                } else {
                    return Err(EncodeError::BadInput(format!(
                        "requested content contains a non-encodable character: '{}'",
                        c
                    )));
                }
            }
        }
    }
    Ok(extended)
}

impl Writer for Code39Writer {
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
    fn frame_contents_with_asterisks_and_narrow_separators() {
        let code = Code39Writer
            .encode_contents("1", &EncodeHints::default())
            .unwrap();
        assert_eq!(
            "10010110110101101001010110100101101101",
            modules_text(&code)
        );
    }

    #[test]
    fn size_the_output_from_the_character_count() {
        let code = Code39Writer
            .encode_contents("ABC123", &EncodeHints::default())
            .unwrap();
        assert_eq!(25 + 13 * 6, code.len());
        assert!(code[0]);
        assert!(code[code.len() - 1]);
    }

    #[test]
    fn translate_lower_case_through_extended_mode() {
        let hints = EncodeHints::default();
        let lower = Code39Writer.encode_contents("a", &hints).unwrap();
        let pair = Code39Writer.encode_contents("+A", &hints).unwrap();
        assert_eq!(modules_text(&pair), modules_text(&lower));
    }

    #[test]
    fn translate_control_characters_through_extended_mode() {
        let hints = EncodeHints::default();
        let control = Code39Writer.encode_contents("\u{1}", &hints).unwrap();
        let pair = Code39Writer.encode_contents("$A", &hints).unwrap();
        assert_eq!(modules_text(&pair), modules_text(&control));
    }

    #[test]
    fn reject_overlong_contents() {
        let hints = EncodeHints::default();
        let long = "A".repeat(81);
        assert!(matches!(
            Code39Writer.encode_contents(&long, &hints),
            Err(EncodeError::Overflow(_))
        ));
        // 41 lower-case letters become 82 extended characters.
        let sneaky = "a".repeat(41);
        assert!(matches!(
            Code39Writer.encode_contents(&sneaky, &hints),
            Err(EncodeError::Overflow(_))
        ));
    }

    #[test]
    fn reject_non_ascii_characters() {
        assert!(matches!(
            Code39Writer.encode_contents("caf\u{e9}", &EncodeHints::default()),
            Err(EncodeError::BadInput(_))
        ));
    }
}
