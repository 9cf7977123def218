use crate::common::BitMatrix;
use crate::error::EncodeError;
use crate::format::BarcodeFormat;
use crate::hints::EncodeHints;
use crate::oned::writer::{append_pattern, encode_one_dimensional, OneDimensionalWriter};
use crate::Writer;

static START_PATTERN: [usize; 4] = [1, 1, 1, 1];
static END_PATTERN: [usize; 3] = [3, 1, 1];

const W: usize = 3; // Width of a wide line
const N: usize = 1; // Width of a narrow line

// Two wide and three narrow elements per digit.
static PATTERNS: [[usize; 5]; 10] = [
    [N, N, W, W, N], // 0
    [W, N, N, N, W], // 1
    [N, W, N, N, W], // 2
    [W, W, N, N, N], // 3
    [N, N, W, N, W], // 4
    [W, N, W, N, N], // 5
    [N, W, W, N, N], // 6
    [N, N, N, W, W], // 7
    [W, N, N, W, N], // 8
    [N, W, N, W, N], // 9
];

/// Encodes ITF (Interleaved Two of Five): each digit pair shares eighteen
/// modules, the first digit as bars and the second as spaces.
pub struct ItfWriter;

impl OneDimensionalWriter for ItfWriter {
    fn format(&self) -> BarcodeFormat {
        BarcodeFormat::Itf
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
        let length = digits.len();
        if length % 2 != 0 {
            return Err(EncodeError::BadInput(
                "the length of the input should be even".to_owned(),
            ));
        }
        if length > 80 {
            return Err(EncodeError::Overflow(format!(
                "requested contents should be less than 80 digits long, but got {}",
                length
            )));
        }

        let mut result = vec![false; 9 + 9 * length];
        let mut pos = append_pattern(&mut result, 0, &START_PATTERN, true);
        for pair in digits.chunks_exact(2) {
            let one = PATTERNS[pair[0] as usize];
            let two = PATTERNS[pair[1] as usize];
            let mut encoding = [0usize; 10];
            for j in 0..5 {
                encoding[2 * j] = one[j];
                encoding[2 * j + 1] = two[j];
            }
            pos += append_pattern(&mut result, pos, &encoding, true);
        }
        append_pattern(&mut result, pos, &END_PATTERN, true);
        Ok(result)
    }
}

impl Writer for ItfWriter {
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
