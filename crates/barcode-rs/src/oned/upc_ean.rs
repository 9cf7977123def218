//! Tables and checksum arithmetic shared by the UPC/EAN family.

use crate::error::EncodeError;

/// The start and end guard: bar, space, bar.
pub(crate) static START_END_PATTERN: [usize; 3] = [1, 1, 1];

/// The middle guard of EAN-8 and EAN-13: space, bar, space, bar, space.
pub(crate) static MIDDLE_PATTERN: [usize; 5] = [1, 1, 1, 1, 1];

/// The six-module end guard of UPC-E.
pub(crate) static END_PATTERN: [usize; 6] = [1, 1, 1, 1, 1, 1];

/// Quiet zone of the UPC/EAN family, in modules.
pub(crate) const UPC_EAN_DEFAULT_MARGIN: usize = 9;

/// "Odd" (L) digit patterns: four run widths summing to seven modules.
pub(crate) static L_PATTERNS: [[usize; 4]; 10] = [
    [3, 2, 1, 1], // 0
    [2, 2, 2, 1], // 1
    [2, 1, 2, 2], // 2
    [1, 4, 1, 1], // 3
    [1, 1, 3, 2], // 4
    [1, 2, 3, 1], // 5
    [1, 1, 1, 4], // 6
    [1, 3, 1, 2], // 7
    [1, 2, 1, 3], // 8
    [3, 1, 1, 2], // 9
];

/// L patterns followed by their mirrored G ("even") counterparts; indices
/// 10..=19 select G.
pub(crate) static L_AND_G_PATTERNS: [[usize; 4]; 20] = [
    [3, 2, 1, 1],
    [2, 2, 2, 1],
    [2, 1, 2, 2],
    [1, 4, 1, 1],
    [1, 1, 3, 2],
    [1, 2, 3, 1],
    [1, 1, 1, 4],
    [1, 3, 1, 2],
    [1, 2, 1, 3],
    [3, 1, 1, 2],
    [1, 1, 2, 3], // G 0
    [1, 2, 2, 2], // G 1
    [2, 2, 1, 2], // G 2
    [1, 1, 4, 1], // G 3
    [2, 3, 1, 1], // G 4
    [1, 3, 2, 1], // G 5
    [4, 1, 1, 1], // G 6
    [2, 1, 3, 1], // G 7
    [3, 1, 2, 1], // G 8
    [2, 1, 1, 3], // G 9
];

pub(crate) fn digit(c: char) -> Result<u32, EncodeError> {
    c.to_digit(10)
        .ok_or_else(|| EncodeError::BadInput(format!("'{}' is not a decimal digit", c)))
}

pub(crate) fn check_numeric(contents: &str) -> Result<(), EncodeError> {
    for c in contents.chars() {
        digit(c)?;
    }
    Ok(())
}

/// The UPC/EAN check digit for `contents`: digits at odd positions from the
/// right weigh three, the rest one.
pub(crate) fn standard_upc_ean_checksum(contents: &str) -> Result<u32, EncodeError> {
    let digits: Vec<u32> = contents
        .chars()
        .map(digit)
        .collect::<Result<_, _>>()?;
    let mut sum = 0;
    for d in digits.iter().rev().step_by(2) {
        sum += d;
    }
    sum *= 3;
    for d in digits.iter().rev().skip(1).step_by(2) {
        sum += d;
    }
    Ok((1000 - sum) % 10)
}

/// Whether the trailing digit of `contents` is its own check digit.
pub(crate) fn check_standard_upc_ean_checksum(contents: &str) -> Result<bool, EncodeError> {
    let length = contents.chars().count();
    if length == 0 {
        return Ok(false);
    }
    let check = digit(contents.chars().last().unwrap_or('0'))?;
    let body: String = contents.chars().take(length - 1).collect();
    Ok(standard_upc_ean_checksum(&body)? == check)
}
