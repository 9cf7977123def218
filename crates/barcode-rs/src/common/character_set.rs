use serde::{Deserialize, Serialize};

use crate::error::EncodeError;

/// The character encodings the QR byte mode can declare through an ECI
/// header.
///
/// The wider ECI registry is opaque data this crate does not carry; only
/// the sets the encoder actually produces are enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterSet {
    Iso8859_1,
    ShiftJis,
    Utf8,
}

impl CharacterSet {
    /// The ECI assignment value declaring this encoding.
    pub fn eci_value(self) -> u32 {
        match self {
            Self::Iso8859_1 => 1,
            Self::ShiftJis => 20,
            Self::Utf8 => 26,
        }
    }

    /// The IANA-style name of the encoding.
    pub fn name(self) -> &'static str {
        match self {
            Self::Iso8859_1 => "ISO-8859-1",
            Self::ShiftJis => "Shift_JIS",
            Self::Utf8 => "UTF-8",
        }
    }

    /// Encodes `contents` into bytes of this character set.
    ///
    /// Shift_JIS accepts its ASCII subset only; no Unicode-to-JIS mapping
    /// table is embedded, so double-byte text is rejected here and Kanji
    /// payloads enter the pipeline as pre-encoded bytes.
    pub fn encode(self, contents: &str) -> Result<Vec<u8>, EncodeError> {
        match self {
            Self::Utf8 => Ok(contents.as_bytes().to_vec()),
            Self::Iso8859_1 => contents
                .chars()
                .map(|c| {
                    u8::try_from(u32::from(c)).map_err(|_| {
                        EncodeError::BadInput(format!("cannot encode '{}' as {}", c, self.name()))
                    })
                })
                .collect(),
            Self::ShiftJis => {
                if contents.is_ascii() {
                    Ok(contents.as_bytes().to_vec())
                } else {
                    Err(EncodeError::BadInput(format!(
                        "cannot encode contents as {}",
                        self.name()
                    )))
                }
            }
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn expose_the_eci_registry_values() {
        assert_eq!(1, CharacterSet::Iso8859_1.eci_value());
        assert_eq!(20, CharacterSet::ShiftJis.eci_value());
        assert_eq!(26, CharacterSet::Utf8.eci_value());
    }

    #[test]
    fn encode_latin1_code_points_as_single_bytes() {
        let bytes = CharacterSet::Iso8859_1.encode("caf\u{e9}").unwrap();
        assert_eq!(vec![b'c', b'a', b'f', 0xE9], bytes);
    }

    #[test]
    fn reject_code_points_outside_latin1() {
        assert!(matches!(
            CharacterSet::Iso8859_1.encode("\u{65e5}"),
            Err(EncodeError::BadInput(_))
        ));
    }

    #[test]
    fn pass_utf8_bytes_through() {
        let bytes = CharacterSet::Utf8.encode("\u{65e5}").unwrap();
        assert_eq!("\u{65e5}".as_bytes(), bytes.as_slice());
    }

    #[test]
    fn limit_shift_jis_to_ascii_input() {
        assert!(CharacterSet::ShiftJis.encode("ABC123").is_ok());
        assert!(CharacterSet::ShiftJis.encode("\u{65e5}").is_err());
    }
}
