use crate::common::{BitArray, ByteMatrix};
use crate::error::EncodeError;
use crate::qr::{mask_util, ErrorCorrectionLevel, Version};

const POSITION_DETECTION_PATTERN: [[u8; 7]; 7] = [
    [1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 1, 0, 1],
    [1, 0, 1, 1, 1, 0, 1],
    [1, 0, 1, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1],
];

const POSITION_ADJUSTMENT_PATTERN: [[u8; 5]; 5] = [
    [1, 1, 1, 1, 1],
    [1, 0, 0, 0, 1],
    [1, 0, 1, 0, 1],
    [1, 0, 0, 0, 1],
    [1, 1, 1, 1, 1],
];

// The fifteen positions of the first type info copy, along the edges of the
// top-left finder pattern.
const TYPE_INFO_COORDINATES: [(usize, usize); 15] = [
    (8, 0),
    (8, 1),
    (8, 2),
    (8, 3),
    (8, 4),
    (8, 5),
    (8, 7),
    (8, 8),
    (7, 8),
    (5, 8),
    (4, 8),
    (3, 8),
    (2, 8),
    (1, 8),
    (0, 8),
];

// 1 1111 0010 0101
const VERSION_INFO_POLY: u32 = 0x1F25;
// 101 0011 0111
const TYPE_INFO_POLY: u32 = 0x537;
const TYPE_INFO_MASK_PATTERN: u32 = 0x5412;

/// Builds the complete module grid: function patterns, type and version
/// info, then the masked data bits.
pub(crate) fn build_matrix(
    data_bits: &BitArray,
    ec_level: ErrorCorrectionLevel,
    version: &'static Version,
    mask_pattern: u32,
    matrix: &mut ByteMatrix,
) -> Result<(), EncodeError> {
    matrix.clear(ByteMatrix::EMPTY);
    embed_basic_patterns(version, matrix)?;
    embed_type_info(ec_level, mask_pattern, matrix)?;
    maybe_embed_version_info(version, matrix)?;
    embed_data_bits(data_bits, mask_pattern, matrix)?;
    Ok(())
}

/// Places the patterns every symbol carries: finders with separators, the
/// dark module, alignment patterns and timing patterns.
pub(crate) fn embed_basic_patterns(
    version: &'static Version,
    matrix: &mut ByteMatrix,
) -> Result<(), EncodeError> {
    embed_position_detection_patterns_and_separators(matrix)?;
    embed_dark_dot_at_left_bottom_corner(matrix)?;
    maybe_embed_position_adjustment_patterns(version, matrix);
    embed_timing_patterns(matrix);
    Ok(())
}

/// Writes both copies of the 15 type info bits for the level/mask pair.
pub(crate) fn embed_type_info(
    ec_level: ErrorCorrectionLevel,
    mask_pattern: u32,
    matrix: &mut ByteMatrix,
) -> Result<(), EncodeError> {
    let type_info_bits = make_type_info_bits(ec_level, mask_pattern)?;

    for (i, &(x1, y1)) in TYPE_INFO_COORDINATES.iter().enumerate() {
        // Type info bits are placed least significant bit first.
        let bit = type_info_bits.get(type_info_bits.size() - 1 - i);

        matrix.set_bool(x1, y1, bit);

        if i < 8 {
            // Right top corner.
            let x2 = matrix.width() - i - 1;
            matrix.set_bool(x2, 8, bit);
        } else {
            // Left bottom corner.
            let y2 = matrix.height() - 7 + (i - 8);
            matrix.set_bool(8, y2, bit);
        }
    }
    Ok(())
}

/// Writes both copies of the 18 version info bits for version 7 and up.
pub(crate) fn maybe_embed_version_info(
    version: &'static Version,
    matrix: &mut ByteMatrix,
) -> Result<(), EncodeError> {
    if version.version_number() < 7 {
        return Ok(());
    }
    let version_info_bits = make_version_info_bits(version)?;

    let mut bit_index = 6 * 3 - 1;
    for i in 0..6 {
        for j in 0..3 {
            let bit = version_info_bits.get(bit_index);
            bit_index = bit_index.wrapping_sub(1);
            // Left bottom corner and its transpose at the right top.
            matrix.set_bool(i, matrix.height() - 11 + j, bit);
            matrix.set_bool(matrix.height() - 11 + j, i, bit);
        }
    }
    Ok(())
}

/// Walks the data region in the two-column snake and writes each payload
/// bit XORed with the mask predicate.
pub(crate) fn embed_data_bits(
    data_bits: &BitArray,
    mask_pattern: u32,
    matrix: &mut ByteMatrix,
) -> Result<(), EncodeError> {
    let mut bit_index = 0usize;
    let mut direction: i32 = -1;
    // Start at the bottom right cell.
    let mut x = matrix.width() as i32 - 1;
    let mut y = matrix.height() as i32 - 1;
    while x > 0 {
        // Skip the vertical timing pattern column.
        if x == 6 {
            x -= 1;
        }
        while y >= 0 && y < matrix.height() as i32 {
            for i in 0..2 {
                let xx = (x - i) as usize;
                let yy = y as usize;
                if !matrix.is_empty(xx, yy) {
                    continue;
                }
                // Pad with false once the payload runs out; remainder cells
                // exist in every version.
                let mut bit = if bit_index < data_bits.size() {
                    let b = data_bits.get(bit_index);
                    bit_index += 1;
                    b
                } else {
                    false
                };
                if mask_util::get_data_mask_bit(mask_pattern, xx, yy) {
                    bit = !bit;
                }
                matrix.set_bool(xx, yy, bit);
            }
            y += direction;
        }
        direction = -direction;
        y += direction;
        x -= 2;
    }
    // All bits should be consumed.
    if bit_index != data_bits.size() {
        return Err(EncodeError::InternalInvariant(format!(
            "not all bits consumed: {}/{}",
            bit_index,
            data_bits.size()
        )));
    }
    Ok(())
}

/// The 1-based position of the most significant set bit, or 0 for 0.
pub(crate) fn find_msb_set(value: u32) -> u32 {
    32 - value.leading_zeros()
}

/// The BCH remainder of `value` under `poly`, by long division over GF(2).
///
/// The encoder only needs poly 0x537 (type info) and poly 0x1F25 (version
/// info), but the division is generic.
pub(crate) fn calculate_bch_code(value: u32, poly: u32) -> Result<u32, EncodeError> {
    if poly == 0 {
        return Err(EncodeError::InternalInvariant(
            "0 polynomial".to_owned(),
        ));
    }
    let msb_set_in_poly = find_msb_set(poly);
    let mut value = value << (msb_set_in_poly - 1);
    // Do the division using exclusive-or operations.
    while find_msb_set(value) >= msb_set_in_poly {
        value ^= poly << (find_msb_set(value) - msb_set_in_poly);
    }
    Ok(value)
}

/// The 15 type info bits: 5 data bits (level and mask), the 10-bit BCH
/// remainder, XORed with the fixed mask.
pub(crate) fn make_type_info_bits(
    ec_level: ErrorCorrectionLevel,
    mask_pattern: u32,
) -> Result<BitArray, EncodeError> {
    let mut bits = BitArray::new();
    let type_info = (ec_level.bits() << 3) | mask_pattern;
    bits.append_bits(type_info, 5)?;

    let bch_code = calculate_bch_code(type_info, TYPE_INFO_POLY)?;
    bits.append_bits(bch_code, 10)?;

    let mut mask_bits = BitArray::new();
    mask_bits.append_bits(TYPE_INFO_MASK_PATTERN, 15)?;
    bits.xor(&mask_bits)?;

    if bits.size() != 15 {
        return Err(EncodeError::InternalInvariant(format!(
            "type info size does not equal 15: {}",
            bits.size()
        )));
    }
    Ok(bits)
}

/// The 18 version info bits: 6 version bits and the 12-bit BCH remainder.
pub(crate) fn make_version_info_bits(version: &'static Version) -> Result<BitArray, EncodeError> {
    let mut bits = BitArray::new();
    bits.append_bits(version.version_number(), 6)?;
    let bch_code = calculate_bch_code(version.version_number(), VERSION_INFO_POLY)?;
    bits.append_bits(bch_code, 12)?;

    if bits.size() != 18 {
        return Err(EncodeError::InternalInvariant(format!(
            "version info size does not equal 18: {}",
            bits.size()
        )));
    }
    Ok(bits)
}

fn embed_dark_dot_at_left_bottom_corner(matrix: &mut ByteMatrix) -> Result<(), EncodeError> {
    if matrix.get(8, matrix.height() - 8) == 0 {
        return Err(EncodeError::InternalInvariant(
            "dark module position already written as light".to_owned(),
        ));
    }
    matrix.set(8, matrix.height() - 8, 1);
    Ok(())
}

fn embed_horizontal_separation_pattern(
    x_start: usize,
    y_start: usize,
    matrix: &mut ByteMatrix,
) -> Result<(), EncodeError> {
    for x in 0..8 {
        if !matrix.is_empty(x_start + x, y_start) {
            return Err(EncodeError::InternalInvariant(
                "separator cell written twice".to_owned(),
            ));
        }
        matrix.set(x_start + x, y_start, 0);
    }
    Ok(())
}

fn embed_vertical_separation_pattern(
    x_start: usize,
    y_start: usize,
    matrix: &mut ByteMatrix,
) -> Result<(), EncodeError> {
    for y in 0..7 {
        if !matrix.is_empty(x_start, y_start + y) {
            return Err(EncodeError::InternalInvariant(
                "separator cell written twice".to_owned(),
            ));
        }
        matrix.set(x_start, y_start + y, 0);
    }
    Ok(())
}

fn embed_position_adjustment_pattern(x_start: usize, y_start: usize, matrix: &mut ByteMatrix) {
    for (y, row) in POSITION_ADJUSTMENT_PATTERN.iter().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            matrix.set(x_start + x, y_start + y, cell);
        }
    }
}

fn embed_position_detection_pattern(x_start: usize, y_start: usize, matrix: &mut ByteMatrix) {
    for (y, row) in POSITION_DETECTION_PATTERN.iter().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            matrix.set(x_start + x, y_start + y, cell);
        }
    }
}

fn embed_position_detection_patterns_and_separators(
    matrix: &mut ByteMatrix,
) -> Result<(), EncodeError> {
    // Embed three big squares at corners.
    let pdp_width = POSITION_DETECTION_PATTERN[0].len();
    embed_position_detection_pattern(0, 0, matrix);
    embed_position_detection_pattern(matrix.width() - pdp_width, 0, matrix);
    embed_position_detection_pattern(0, matrix.width() - pdp_width, matrix);

    // Embed horizontal separation patterns around the squares.
    let hsp_width = 8;
    embed_horizontal_separation_pattern(0, hsp_width - 1, matrix)?;
    embed_horizontal_separation_pattern(matrix.width() - hsp_width, hsp_width - 1, matrix)?;
    embed_horizontal_separation_pattern(0, matrix.width() - hsp_width, matrix)?;

    // Embed vertical separation patterns around the squares.
    let vsp_size = 7;
    embed_vertical_separation_pattern(vsp_size, 0, matrix)?;
    embed_vertical_separation_pattern(matrix.height() - vsp_size - 1, 0, matrix)?;
    embed_vertical_separation_pattern(vsp_size, matrix.height() - vsp_size, matrix)?;
    Ok(())
}

fn maybe_embed_position_adjustment_patterns(version: &'static Version, matrix: &mut ByteMatrix) {
    if version.version_number() < 2 {
        return;
    }
    let coordinates = version.alignment_pattern_centers();
    for &y in coordinates {
        for &x in coordinates {
            // Centers falling on a finder pattern are already written.
            if matrix.is_empty(x, y) {
                embed_position_adjustment_pattern(x - 2, y - 2, matrix);
            }
        }
    }
}

fn embed_timing_patterns(matrix: &mut ByteMatrix) {
    // Separation patterns already occupy the ends, so start at 8.
    for i in 8..matrix.width() - 8 {
        let bit = ((i + 1) % 2) as u8;
        if matrix.is_empty(i, 6) {
            matrix.set(i, 6, bit);
        }
        if matrix.is_empty(6, i) {
            matrix.set(6, i, bit);
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::common::BitArray;

    fn version(number: u32) -> &'static Version {
        Version::version_for_number(number).unwrap()
    }

    #[test]
    fn find_the_most_significant_set_bit() {
        assert_eq!(0, find_msb_set(0));
        assert_eq!(1, find_msb_set(1));
        assert_eq!(8, find_msb_set(0x80));
        assert_eq!(32, find_msb_set(0x8000_0000));
    }

    #[test]
    fn compute_bch_remainders() {
        // Poly is 101 0011 0111 (0x537).
        assert_eq!(0, calculate_bch_code(0x00, TYPE_INFO_POLY).unwrap());
        // Version 7 has the well-known encoded value 0x1F25's remainder 0xC94:
        // 000111 110010010100.
        assert_eq!(0xC94, calculate_bch_code(7, VERSION_INFO_POLY).unwrap());
        // Type info for data value 0x13 (M level, mask 3).
        assert_eq!(0x1C2, calculate_bch_code(0x13, TYPE_INFO_POLY).unwrap());
    }

    #[test]
    fn assemble_masked_type_info_bits() {
        // Level M (bits 00), mask 0: data 00000, BCH 0, XOR mask alone.
        let bits = make_type_info_bits(ErrorCorrectionLevel::M, 0).unwrap();
        assert_eq!(15, bits.size());
        let mut expected = BitArray::new();
        expected.append_bits(TYPE_INFO_MASK_PATTERN, 15).unwrap();
        assert_eq!(expected, bits);
    }

    #[test]
    fn assemble_version_info_bits() {
        let bits = make_version_info_bits(version(7)).unwrap();
        assert_eq!(18, bits.size());
        let mut expected = BitArray::new();
        expected.append_bits((7 << 12) | 0xC94, 18).unwrap();
        assert_eq!(expected, bits);
    }

    #[test]
    fn embed_finders_separators_timing_and_dark_module() {
        let version = version(1);
        let mut matrix = ByteMatrix::new(21, 21);
        matrix.clear(ByteMatrix::EMPTY);
        embed_basic_patterns(version, &mut matrix).unwrap();

        // Finder corners.
        assert_eq!(1, matrix.get(0, 0));
        assert_eq!(1, matrix.get(6, 6));
        assert_eq!(0, matrix.get(1, 1));
        assert_eq!(1, matrix.get(20, 0));
        assert_eq!(1, matrix.get(0, 20));
        // Separators.
        assert_eq!(0, matrix.get(7, 0));
        assert_eq!(0, matrix.get(0, 7));
        assert_eq!(0, matrix.get(13, 0));
        // Dark module.
        assert_eq!(1, matrix.get(8, 13));
        // Timing pattern alternates starting dark at (8, 6).
        assert_eq!(1, matrix.get(8, 6));
        assert_eq!(0, matrix.get(9, 6));
        assert_eq!(1, matrix.get(6, 8));
        assert_eq!(0, matrix.get(6, 9));
    }

    #[test]
    fn embed_alignment_patterns_from_version_two() {
        let version = version(2);
        let mut matrix = ByteMatrix::new(25, 25);
        matrix.clear(ByteMatrix::EMPTY);
        embed_basic_patterns(version, &mut matrix).unwrap();
        // Center of the single alignment pattern at (18, 18).
        assert_eq!(1, matrix.get(18, 18));
        assert_eq!(0, matrix.get(17, 18));
        assert_eq!(1, matrix.get(16, 16));
    }

    #[test]
    fn fill_every_cell_when_building_the_matrix() {
        let version = version(1);
        let mut bits = BitArray::new();
        // Version 1 holds 26 codewords.
        for i in 0..26u32 {
            bits.append_bits(i * 7 % 256, 8).unwrap();
        }
        let mut matrix = ByteMatrix::new(21, 21);
        build_matrix(&bits, ErrorCorrectionLevel::L, version, 3, &mut matrix).unwrap();
        for y in 0..21 {
            for x in 0..21 {
                assert!(!matrix.is_empty(x, y), "cell ({}, {}) left empty", x, y);
            }
        }
    }

    #[test]
    fn report_unconsumed_data_bits() {
        let version = version(1);
        let mut bits = BitArray::new();
        // Far more bits than version 1 can hold.
        for _ in 0..40u32 {
            bits.append_bits(0xAB, 8).unwrap();
        }
        let mut matrix = ByteMatrix::new(21, 21);
        let result = build_matrix(&bits, ErrorCorrectionLevel::L, version, 0, &mut matrix);
        assert!(matches!(result, Err(EncodeError::InternalInvariant(_))));
    }
}
