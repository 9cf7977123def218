use crate::error::EncodeError;
use crate::qr::ErrorCorrectionLevel;

/// One run of equally sized error correction blocks: `count` blocks of
/// `data_codewords` data codewords each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ecb {
    count: u32,
    data_codewords: u32,
}

impl Ecb {
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn data_codewords(&self) -> u32 {
        self.data_codewords
    }
}

/// The block layout of one (version, level) pair.
///
/// Either one or two block sizes occur; when two, the smaller blocks come
/// first, exactly as they are laid out in the codeword stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcBlocks {
    ec_codewords_per_block: u32,
    ecbs: &'static [Ecb],
}

impl EcBlocks {
    pub fn ec_codewords_per_block(&self) -> u32 {
        self.ec_codewords_per_block
    }

    pub fn num_blocks(&self) -> u32 {
        self.ecbs.iter().map(Ecb::count).sum()
    }

    pub fn total_ec_codewords(&self) -> u32 {
        self.ec_codewords_per_block * self.num_blocks()
    }

    pub fn total_data_codewords(&self) -> u32 {
        self.ecbs.iter().map(|b| b.count * b.data_codewords).sum()
    }

    pub fn ec_blocks(&self) -> &'static [Ecb] {
        self.ecbs
    }
}

/// A QR Code version: the symbol size bracket 1..=40 with its codeword
/// budget, error correction layouts and alignment pattern grid, as compiled
/// in from ISO/IEC 18004.
#[derive(Debug, PartialEq, Eq)]
pub struct Version {
    version_number: u32,
    alignment_pattern_centers: &'static [usize],
    ec_blocks: [EcBlocks; 4],
}

impl Version {
    /// Looks up a version by its number in 1..=40.
    pub fn version_for_number(version_number: u32) -> Result<&'static Version, EncodeError> {
        if !(1..=40).contains(&version_number) {
            return Err(EncodeError::BadInput(format!(
                "version number {} is out of range 1..=40",
                version_number
            )));
        }
        Ok(&VERSIONS[(version_number - 1) as usize])
    }

    pub fn version_number(&self) -> u32 {
        self.version_number
    }

    /// The symbol width and height in modules: 17 + 4 * version.
    pub fn dimension(&self) -> usize {
        17 + 4 * self.version_number as usize
    }

    /// Data plus error correction codewords for the whole symbol.
    pub fn total_codewords(&self) -> u32 {
        self.ec_blocks[0].total_data_codewords() + self.ec_blocks[0].total_ec_codewords()
    }

    pub fn ec_blocks_for_level(&self, level: ErrorCorrectionLevel) -> &EcBlocks {
        &self.ec_blocks[level.ordinal()]
    }

    /// Row/column coordinates of the alignment pattern centers; empty for
    /// version 1. Every cross product of two coordinates is a center unless
    /// it collides with a finder pattern.
    pub fn alignment_pattern_centers(&self) -> &'static [usize] {
        self.alignment_pattern_centers
    }
}

static VERSIONS: [Version; 40] = [
    // Version 1
    Version {
        version_number: 1,
        alignment_pattern_centers: &[],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 7, ecbs: &[Ecb { count: 1, data_codewords: 19 }] },
            EcBlocks { ec_codewords_per_block: 10, ecbs: &[Ecb { count: 1, data_codewords: 16 }] },
            EcBlocks { ec_codewords_per_block: 13, ecbs: &[Ecb { count: 1, data_codewords: 13 }] },
            EcBlocks { ec_codewords_per_block: 17, ecbs: &[Ecb { count: 1, data_codewords: 9 }] },
        ],
    },
    // Version 2
    Version {
        version_number: 2,
        alignment_pattern_centers: &[6, 18],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 10, ecbs: &[Ecb { count: 1, data_codewords: 34 }] },
            EcBlocks { ec_codewords_per_block: 16, ecbs: &[Ecb { count: 1, data_codewords: 28 }] },
            EcBlocks { ec_codewords_per_block: 22, ecbs: &[Ecb { count: 1, data_codewords: 22 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 1, data_codewords: 16 }] },
        ],
    },
    // Version 3
    Version {
        version_number: 3,
        alignment_pattern_centers: &[6, 22],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 15, ecbs: &[Ecb { count: 1, data_codewords: 55 }] },
            EcBlocks { ec_codewords_per_block: 26, ecbs: &[Ecb { count: 1, data_codewords: 44 }] },
            EcBlocks { ec_codewords_per_block: 18, ecbs: &[Ecb { count: 2, data_codewords: 17 }] },
            EcBlocks { ec_codewords_per_block: 22, ecbs: &[Ecb { count: 2, data_codewords: 13 }] },
        ],
    },
    // Version 4
    Version {
        version_number: 4,
        alignment_pattern_centers: &[6, 26],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 20, ecbs: &[Ecb { count: 1, data_codewords: 80 }] },
            EcBlocks { ec_codewords_per_block: 18, ecbs: &[Ecb { count: 2, data_codewords: 32 }] },
            EcBlocks { ec_codewords_per_block: 26, ecbs: &[Ecb { count: 2, data_codewords: 24 }] },
            EcBlocks { ec_codewords_per_block: 16, ecbs: &[Ecb { count: 4, data_codewords: 9 }] },
        ],
    },
    // Version 5
    Version {
        version_number: 5,
        alignment_pattern_centers: &[6, 30],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 26, ecbs: &[Ecb { count: 1, data_codewords: 108 }] },
            EcBlocks { ec_codewords_per_block: 24, ecbs: &[Ecb { count: 2, data_codewords: 43 }] },
            EcBlocks { ec_codewords_per_block: 18, ecbs: &[Ecb { count: 2, data_codewords: 15 }, Ecb { count: 2, data_codewords: 16 }] },
            EcBlocks { ec_codewords_per_block: 22, ecbs: &[Ecb { count: 2, data_codewords: 11 }, Ecb { count: 2, data_codewords: 12 }] },
        ],
    },
    // Version 6
    Version {
        version_number: 6,
        alignment_pattern_centers: &[6, 34],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 18, ecbs: &[Ecb { count: 2, data_codewords: 68 }] },
            EcBlocks { ec_codewords_per_block: 16, ecbs: &[Ecb { count: 4, data_codewords: 27 }] },
            EcBlocks { ec_codewords_per_block: 24, ecbs: &[Ecb { count: 4, data_codewords: 19 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 4, data_codewords: 15 }] },
        ],
    },
    // Version 7
    Version {
        version_number: 7,
        alignment_pattern_centers: &[6, 22, 38],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 20, ecbs: &[Ecb { count: 2, data_codewords: 78 }] },
            EcBlocks { ec_codewords_per_block: 18, ecbs: &[Ecb { count: 4, data_codewords: 31 }] },
            EcBlocks { ec_codewords_per_block: 18, ecbs: &[Ecb { count: 2, data_codewords: 14 }, Ecb { count: 4, data_codewords: 15 }] },
            EcBlocks { ec_codewords_per_block: 26, ecbs: &[Ecb { count: 4, data_codewords: 13 }, Ecb { count: 1, data_codewords: 14 }] },
        ],
    },
    // Version 8
    Version {
        version_number: 8,
        alignment_pattern_centers: &[6, 24, 42],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 24, ecbs: &[Ecb { count: 2, data_codewords: 97 }] },
            EcBlocks { ec_codewords_per_block: 22, ecbs: &[Ecb { count: 2, data_codewords: 38 }, Ecb { count: 2, data_codewords: 39 }] },
            EcBlocks { ec_codewords_per_block: 22, ecbs: &[Ecb { count: 4, data_codewords: 18 }, Ecb { count: 2, data_codewords: 19 }] },
            EcBlocks { ec_codewords_per_block: 26, ecbs: &[Ecb { count: 4, data_codewords: 14 }, Ecb { count: 2, data_codewords: 15 }] },
        ],
    },
    // Version 9
    Version {
        version_number: 9,
        alignment_pattern_centers: &[6, 26, 46],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 2, data_codewords: 116 }] },
            EcBlocks { ec_codewords_per_block: 22, ecbs: &[Ecb { count: 3, data_codewords: 36 }, Ecb { count: 2, data_codewords: 37 }] },
            EcBlocks { ec_codewords_per_block: 20, ecbs: &[Ecb { count: 4, data_codewords: 16 }, Ecb { count: 4, data_codewords: 17 }] },
            EcBlocks { ec_codewords_per_block: 24, ecbs: &[Ecb { count: 4, data_codewords: 12 }, Ecb { count: 4, data_codewords: 13 }] },
        ],
    },
    // Version 10
    Version {
        version_number: 10,
        alignment_pattern_centers: &[6, 28, 50],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 18, ecbs: &[Ecb { count: 2, data_codewords: 68 }, Ecb { count: 2, data_codewords: 69 }] },
            EcBlocks { ec_codewords_per_block: 26, ecbs: &[Ecb { count: 4, data_codewords: 43 }, Ecb { count: 1, data_codewords: 44 }] },
            EcBlocks { ec_codewords_per_block: 24, ecbs: &[Ecb { count: 6, data_codewords: 19 }, Ecb { count: 2, data_codewords: 20 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 6, data_codewords: 15 }, Ecb { count: 2, data_codewords: 16 }] },
        ],
    },
    // Version 11
    Version {
        version_number: 11,
        alignment_pattern_centers: &[6, 30, 54],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 20, ecbs: &[Ecb { count: 4, data_codewords: 81 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 1, data_codewords: 50 }, Ecb { count: 4, data_codewords: 51 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 4, data_codewords: 22 }, Ecb { count: 4, data_codewords: 23 }] },
            EcBlocks { ec_codewords_per_block: 24, ecbs: &[Ecb { count: 3, data_codewords: 12 }, Ecb { count: 8, data_codewords: 13 }] },
        ],
    },
    // Version 12
    Version {
        version_number: 12,
        alignment_pattern_centers: &[6, 32, 58],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 24, ecbs: &[Ecb { count: 2, data_codewords: 92 }, Ecb { count: 2, data_codewords: 93 }] },
            EcBlocks { ec_codewords_per_block: 22, ecbs: &[Ecb { count: 6, data_codewords: 36 }, Ecb { count: 2, data_codewords: 37 }] },
            EcBlocks { ec_codewords_per_block: 26, ecbs: &[Ecb { count: 4, data_codewords: 20 }, Ecb { count: 6, data_codewords: 21 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 7, data_codewords: 14 }, Ecb { count: 4, data_codewords: 15 }] },
        ],
    },
    // Version 13
    Version {
        version_number: 13,
        alignment_pattern_centers: &[6, 34, 62],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 26, ecbs: &[Ecb { count: 4, data_codewords: 107 }] },
            EcBlocks { ec_codewords_per_block: 22, ecbs: &[Ecb { count: 8, data_codewords: 37 }, Ecb { count: 1, data_codewords: 38 }] },
            EcBlocks { ec_codewords_per_block: 24, ecbs: &[Ecb { count: 8, data_codewords: 20 }, Ecb { count: 4, data_codewords: 21 }] },
            EcBlocks { ec_codewords_per_block: 22, ecbs: &[Ecb { count: 12, data_codewords: 11 }, Ecb { count: 4, data_codewords: 12 }] },
        ],
    },
    // Version 14
    Version {
        version_number: 14,
        alignment_pattern_centers: &[6, 26, 46, 66],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 3, data_codewords: 115 }, Ecb { count: 1, data_codewords: 116 }] },
            EcBlocks { ec_codewords_per_block: 24, ecbs: &[Ecb { count: 4, data_codewords: 40 }, Ecb { count: 5, data_codewords: 41 }] },
            EcBlocks { ec_codewords_per_block: 20, ecbs: &[Ecb { count: 11, data_codewords: 16 }, Ecb { count: 5, data_codewords: 17 }] },
            EcBlocks { ec_codewords_per_block: 24, ecbs: &[Ecb { count: 11, data_codewords: 12 }, Ecb { count: 5, data_codewords: 13 }] },
        ],
    },
    // Version 15
    Version {
        version_number: 15,
        alignment_pattern_centers: &[6, 26, 48, 70],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 22, ecbs: &[Ecb { count: 5, data_codewords: 87 }, Ecb { count: 1, data_codewords: 88 }] },
            EcBlocks { ec_codewords_per_block: 24, ecbs: &[Ecb { count: 5, data_codewords: 41 }, Ecb { count: 5, data_codewords: 42 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 5, data_codewords: 24 }, Ecb { count: 7, data_codewords: 25 }] },
            EcBlocks { ec_codewords_per_block: 24, ecbs: &[Ecb { count: 11, data_codewords: 12 }, Ecb { count: 7, data_codewords: 13 }] },
        ],
    },
    // Version 16
    Version {
        version_number: 16,
        alignment_pattern_centers: &[6, 26, 50, 74],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 24, ecbs: &[Ecb { count: 5, data_codewords: 98 }, Ecb { count: 1, data_codewords: 99 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 7, data_codewords: 45 }, Ecb { count: 3, data_codewords: 46 }] },
            EcBlocks { ec_codewords_per_block: 24, ecbs: &[Ecb { count: 15, data_codewords: 19 }, Ecb { count: 2, data_codewords: 20 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 3, data_codewords: 15 }, Ecb { count: 13, data_codewords: 16 }] },
        ],
    },
    // Version 17
    Version {
        version_number: 17,
        alignment_pattern_centers: &[6, 30, 54, 78],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 1, data_codewords: 107 }, Ecb { count: 5, data_codewords: 108 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 10, data_codewords: 46 }, Ecb { count: 1, data_codewords: 47 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 1, data_codewords: 22 }, Ecb { count: 15, data_codewords: 23 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 2, data_codewords: 14 }, Ecb { count: 17, data_codewords: 15 }] },
        ],
    },
    // Version 18
    Version {
        version_number: 18,
        alignment_pattern_centers: &[6, 30, 56, 82],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 5, data_codewords: 120 }, Ecb { count: 1, data_codewords: 121 }] },
            EcBlocks { ec_codewords_per_block: 26, ecbs: &[Ecb { count: 9, data_codewords: 43 }, Ecb { count: 4, data_codewords: 44 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 17, data_codewords: 22 }, Ecb { count: 1, data_codewords: 23 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 2, data_codewords: 14 }, Ecb { count: 19, data_codewords: 15 }] },
        ],
    },
    // Version 19
    Version {
        version_number: 19,
        alignment_pattern_centers: &[6, 30, 58, 86],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 3, data_codewords: 113 }, Ecb { count: 4, data_codewords: 114 }] },
            EcBlocks { ec_codewords_per_block: 26, ecbs: &[Ecb { count: 3, data_codewords: 44 }, Ecb { count: 11, data_codewords: 45 }] },
            EcBlocks { ec_codewords_per_block: 26, ecbs: &[Ecb { count: 17, data_codewords: 21 }, Ecb { count: 4, data_codewords: 22 }] },
            EcBlocks { ec_codewords_per_block: 26, ecbs: &[Ecb { count: 9, data_codewords: 13 }, Ecb { count: 16, data_codewords: 14 }] },
        ],
    },
    // Version 20
    Version {
        version_number: 20,
        alignment_pattern_centers: &[6, 34, 62, 90],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 3, data_codewords: 107 }, Ecb { count: 5, data_codewords: 108 }] },
            EcBlocks { ec_codewords_per_block: 26, ecbs: &[Ecb { count: 3, data_codewords: 41 }, Ecb { count: 13, data_codewords: 42 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 15, data_codewords: 24 }, Ecb { count: 5, data_codewords: 25 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 15, data_codewords: 15 }, Ecb { count: 10, data_codewords: 16 }] },
        ],
    },
    // Version 21
    Version {
        version_number: 21,
        alignment_pattern_centers: &[6, 28, 50, 72, 94],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 4, data_codewords: 116 }, Ecb { count: 4, data_codewords: 117 }] },
            EcBlocks { ec_codewords_per_block: 26, ecbs: &[Ecb { count: 17, data_codewords: 42 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 17, data_codewords: 22 }, Ecb { count: 6, data_codewords: 23 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 19, data_codewords: 16 }, Ecb { count: 6, data_codewords: 17 }] },
        ],
    },
    // Version 22
    Version {
        version_number: 22,
        alignment_pattern_centers: &[6, 26, 50, 74, 98],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 2, data_codewords: 111 }, Ecb { count: 7, data_codewords: 112 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 17, data_codewords: 46 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 7, data_codewords: 24 }, Ecb { count: 16, data_codewords: 25 }] },
            EcBlocks { ec_codewords_per_block: 24, ecbs: &[Ecb { count: 34, data_codewords: 13 }] },
        ],
    },
    // Version 23
    Version {
        version_number: 23,
        alignment_pattern_centers: &[6, 30, 54, 78, 102],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 4, data_codewords: 121 }, Ecb { count: 5, data_codewords: 122 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 4, data_codewords: 47 }, Ecb { count: 14, data_codewords: 48 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 11, data_codewords: 24 }, Ecb { count: 14, data_codewords: 25 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 16, data_codewords: 15 }, Ecb { count: 14, data_codewords: 16 }] },
        ],
    },
    // Version 24
    Version {
        version_number: 24,
        alignment_pattern_centers: &[6, 28, 54, 80, 106],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 6, data_codewords: 117 }, Ecb { count: 4, data_codewords: 118 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 6, data_codewords: 45 }, Ecb { count: 14, data_codewords: 46 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 11, data_codewords: 24 }, Ecb { count: 16, data_codewords: 25 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 30, data_codewords: 16 }, Ecb { count: 2, data_codewords: 17 }] },
        ],
    },
    // Version 25
    Version {
        version_number: 25,
        alignment_pattern_centers: &[6, 32, 58, 84, 110],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 26, ecbs: &[Ecb { count: 8, data_codewords: 106 }, Ecb { count: 4, data_codewords: 107 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 8, data_codewords: 47 }, Ecb { count: 13, data_codewords: 48 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 7, data_codewords: 24 }, Ecb { count: 22, data_codewords: 25 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 22, data_codewords: 15 }, Ecb { count: 13, data_codewords: 16 }] },
        ],
    },
    // Version 26
    Version {
        version_number: 26,
        alignment_pattern_centers: &[6, 30, 58, 86, 114],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 10, data_codewords: 114 }, Ecb { count: 2, data_codewords: 115 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 19, data_codewords: 46 }, Ecb { count: 4, data_codewords: 47 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 28, data_codewords: 22 }, Ecb { count: 6, data_codewords: 23 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 33, data_codewords: 16 }, Ecb { count: 4, data_codewords: 17 }] },
        ],
    },
    // Version 27
    Version {
        version_number: 27,
        alignment_pattern_centers: &[6, 34, 62, 90, 118],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 8, data_codewords: 122 }, Ecb { count: 4, data_codewords: 123 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 22, data_codewords: 45 }, Ecb { count: 3, data_codewords: 46 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 8, data_codewords: 23 }, Ecb { count: 26, data_codewords: 24 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 12, data_codewords: 15 }, Ecb { count: 28, data_codewords: 16 }] },
        ],
    },
    // Version 28
    Version {
        version_number: 28,
        alignment_pattern_centers: &[6, 26, 50, 74, 98, 122],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 3, data_codewords: 117 }, Ecb { count: 10, data_codewords: 118 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 3, data_codewords: 45 }, Ecb { count: 23, data_codewords: 46 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 4, data_codewords: 24 }, Ecb { count: 31, data_codewords: 25 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 11, data_codewords: 15 }, Ecb { count: 31, data_codewords: 16 }] },
        ],
    },
    // Version 29
    Version {
        version_number: 29,
        alignment_pattern_centers: &[6, 30, 54, 78, 102, 126],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 7, data_codewords: 116 }, Ecb { count: 7, data_codewords: 117 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 21, data_codewords: 45 }, Ecb { count: 7, data_codewords: 46 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 1, data_codewords: 23 }, Ecb { count: 37, data_codewords: 24 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 19, data_codewords: 15 }, Ecb { count: 26, data_codewords: 16 }] },
        ],
    },
    // Version 30
    Version {
        version_number: 30,
        alignment_pattern_centers: &[6, 26, 52, 78, 104, 130],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 5, data_codewords: 115 }, Ecb { count: 10, data_codewords: 116 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 19, data_codewords: 47 }, Ecb { count: 10, data_codewords: 48 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 15, data_codewords: 24 }, Ecb { count: 25, data_codewords: 25 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 23, data_codewords: 15 }, Ecb { count: 25, data_codewords: 16 }] },
        ],
    },
    // Version 31
    Version {
        version_number: 31,
        alignment_pattern_centers: &[6, 30, 56, 82, 108, 134],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 13, data_codewords: 115 }, Ecb { count: 3, data_codewords: 116 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 2, data_codewords: 46 }, Ecb { count: 29, data_codewords: 47 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 42, data_codewords: 24 }, Ecb { count: 1, data_codewords: 25 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 23, data_codewords: 15 }, Ecb { count: 28, data_codewords: 16 }] },
        ],
    },
    // Version 32
    Version {
        version_number: 32,
        alignment_pattern_centers: &[6, 34, 60, 86, 112, 138],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 17, data_codewords: 115 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 10, data_codewords: 46 }, Ecb { count: 23, data_codewords: 47 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 10, data_codewords: 24 }, Ecb { count: 35, data_codewords: 25 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 19, data_codewords: 15 }, Ecb { count: 35, data_codewords: 16 }] },
        ],
    },
    // Version 33
    Version {
        version_number: 33,
        alignment_pattern_centers: &[6, 30, 58, 86, 114, 142],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 17, data_codewords: 115 }, Ecb { count: 1, data_codewords: 116 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 14, data_codewords: 46 }, Ecb { count: 21, data_codewords: 47 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 29, data_codewords: 24 }, Ecb { count: 19, data_codewords: 25 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 11, data_codewords: 15 }, Ecb { count: 46, data_codewords: 16 }] },
        ],
    },
    // Version 34
    Version {
        version_number: 34,
        alignment_pattern_centers: &[6, 34, 62, 90, 118, 146],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 13, data_codewords: 115 }, Ecb { count: 6, data_codewords: 116 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 14, data_codewords: 46 }, Ecb { count: 23, data_codewords: 47 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 44, data_codewords: 24 }, Ecb { count: 7, data_codewords: 25 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 59, data_codewords: 16 }, Ecb { count: 1, data_codewords: 17 }] },
        ],
    },
    // Version 35
    Version {
        version_number: 35,
        alignment_pattern_centers: &[6, 30, 54, 78, 102, 126, 150],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 12, data_codewords: 121 }, Ecb { count: 7, data_codewords: 122 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 12, data_codewords: 47 }, Ecb { count: 26, data_codewords: 48 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 39, data_codewords: 24 }, Ecb { count: 14, data_codewords: 25 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 22, data_codewords: 15 }, Ecb { count: 41, data_codewords: 16 }] },
        ],
    },
    // Version 36
    Version {
        version_number: 36,
        alignment_pattern_centers: &[6, 24, 50, 76, 102, 128, 154],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 6, data_codewords: 121 }, Ecb { count: 14, data_codewords: 122 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 6, data_codewords: 47 }, Ecb { count: 34, data_codewords: 48 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 46, data_codewords: 24 }, Ecb { count: 10, data_codewords: 25 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 2, data_codewords: 15 }, Ecb { count: 64, data_codewords: 16 }] },
        ],
    },
    // Version 37
    Version {
        version_number: 37,
        alignment_pattern_centers: &[6, 28, 54, 80, 106, 132, 158],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 17, data_codewords: 122 }, Ecb { count: 4, data_codewords: 123 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 29, data_codewords: 46 }, Ecb { count: 14, data_codewords: 47 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 49, data_codewords: 24 }, Ecb { count: 10, data_codewords: 25 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 24, data_codewords: 15 }, Ecb { count: 46, data_codewords: 16 }] },
        ],
    },
    // Version 38
    Version {
        version_number: 38,
        alignment_pattern_centers: &[6, 32, 58, 84, 110, 136, 162],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 4, data_codewords: 122 }, Ecb { count: 18, data_codewords: 123 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 13, data_codewords: 46 }, Ecb { count: 32, data_codewords: 47 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 48, data_codewords: 24 }, Ecb { count: 14, data_codewords: 25 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 42, data_codewords: 15 }, Ecb { count: 32, data_codewords: 16 }] },
        ],
    },
    // Version 39
    Version {
        version_number: 39,
        alignment_pattern_centers: &[6, 26, 54, 82, 110, 138, 166],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 20, data_codewords: 117 }, Ecb { count: 4, data_codewords: 118 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 40, data_codewords: 47 }, Ecb { count: 7, data_codewords: 48 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 43, data_codewords: 24 }, Ecb { count: 22, data_codewords: 25 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 10, data_codewords: 15 }, Ecb { count: 67, data_codewords: 16 }] },
        ],
    },
    // Version 40
    Version {
        version_number: 40,
        alignment_pattern_centers: &[6, 30, 58, 86, 114, 142, 170],
        ec_blocks: [
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 19, data_codewords: 118 }, Ecb { count: 6, data_codewords: 119 }] },
            EcBlocks { ec_codewords_per_block: 28, ecbs: &[Ecb { count: 18, data_codewords: 47 }, Ecb { count: 31, data_codewords: 48 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 34, data_codewords: 24 }, Ecb { count: 34, data_codewords: 25 }] },
            EcBlocks { ec_codewords_per_block: 30, ecbs: &[Ecb { count: 20, data_codewords: 15 }, Ecb { count: 61, data_codewords: 16 }] },
        ],
    },
];
