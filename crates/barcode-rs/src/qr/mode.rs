use crate::qr::Version;

/// A data mode (or control marker) in the QR bit stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Terminator,
    Numeric,
    Alphanumeric,
    StructuredAppend,
    Byte,
    Eci,
    Kanji,
    Fnc1FirstPosition,
    Fnc1SecondPosition,
}

impl Mode {
    /// The four mode indicator bits.
    pub fn bits(self) -> u32 {
        match self {
            Self::Terminator => 0x0,
            Self::Numeric => 0x1,
            Self::Alphanumeric => 0x2,
            Self::StructuredAppend => 0x3,
            Self::Byte => 0x4,
            Self::Fnc1FirstPosition => 0x5,
            Self::Eci => 0x7,
            Self::Kanji => 0x8,
            Self::Fnc1SecondPosition => 0x9,
        }
    }

    /// The width of the character count field for this mode at the given
    /// version. Control markers carry no count and report 0.
    pub fn character_count_bits(self, version: &Version) -> usize {
        // Version brackets 1-9, 10-26 and 27-40 map to indices 0, 1, 2.
        let bracket = ((version.version_number() + 7) / 17) as usize;
        match self {
            Self::Numeric => [10, 12, 14][bracket],
            Self::Alphanumeric => [9, 11, 13][bracket],
            Self::Byte => [8, 16, 16][bracket],
            Self::Kanji => [8, 10, 12][bracket],
            _ => 0,
        }
    }
}
