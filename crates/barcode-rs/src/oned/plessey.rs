use crate::common::BitMatrix;
use crate::error::EncodeError;
use crate::format::BarcodeFormat;
use crate::hints::EncodeHints;
use crate::oned::writer::{append_pattern, encode_one_dimensional, OneDimensionalWriter};
use crate::Writer;

// The start code bits, rendered like data bits.
static START_BITS: [bool; 4] = [true, true, false, true];

// Generator 111101001 for the eight check bits over the digit bit stream.
static CRC_GENERATOR: [bool; 9] = [true, true, true, true, false, true, false, false, true];

// Bar/space widths of one bit: four modules, wide bar for a set bit.
static ONE_WIDTHS: [usize; 2] = [3, 1];
static ZERO_WIDTHS: [usize; 2] = [1, 3];

static TERMINATION_WIDTHS: [usize; 1] = [3];

/// Encodes Plessey symbols: start code, digits four bits each (least
/// significant first), the CRC-8 of the digit bits, and a termination bar.
pub struct PlesseyWriter;

impl OneDimensionalWriter for PlesseyWriter {
    fn format(&self) -> BarcodeFormat {
        BarcodeFormat::Plessey
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

        let mut data_bits = Vec::with_capacity(digits.len() * 4);
        for &digit in &digits {
            for bit in 0..4 {
                data_bits.push((digit >> bit) & 1 == 1);
            }
        }
        let crc_bits = crc8(&data_bits);

        // Start + data + CRC bits at four modules each, then the wide
        // termination bar.
        let num_bits = START_BITS.len() + data_bits.len() + crc_bits.len();
        let mut result = vec![false; num_bits * 4 + TERMINATION_WIDTHS[0]];
        let mut pos = 0;
        for bit in START_BITS
            .iter()
            .chain(data_bits.iter())
            .chain(crc_bits.iter())
        {
            let widths = if *bit { &ONE_WIDTHS } else { &ZERO_WIDTHS };
            pos += append_pattern(&mut result, pos, widths, true);
        }
        append_pattern(&mut result, pos, &TERMINATION_WIDTHS, true);
        Ok(result)
    }
}

// Long division of the data bits (with eight appended zeros) by the
// nine-bit generator; the remainder is the check byte.
fn crc8(data_bits: &[bool]) -> [bool; 8] {
    let mut register = data_bits.to_vec();
    register.extend([false; 8]);
    for i in 0..data_bits.len() {
        if register[i] {
            for (j, &gen_bit) in CRC_GENERATOR.iter().enumerate() {
                register[i + j] ^= gen_bit;
            }
        }
    }
    let mut crc = [false; 8];
    crc.copy_from_slice(&register[data_bits.len()..]);
    crc
}

impl Writer for PlesseyWriter {
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
