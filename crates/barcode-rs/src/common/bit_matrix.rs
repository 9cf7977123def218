use crate::common::BitArray;
use crate::error::EncodeError;

/// A two-dimensional grid of bits with the origin at the top left.
///
/// Indexing is `(x, y)`, column first and row second. Rows are stored as
/// `ceil(width / 32)` packed words each, so a whole row can be handed out
/// as a [`BitArray`] cheaply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    row_size: usize,
    bits: Vec<u32>,
}

impl BitMatrix {
    /// A matrix of the given dimensions with every bit unset.
    pub fn new(width: usize, height: usize) -> Self {
        let row_size = (width + 31) / 32;
        Self {
            width,
            height,
            row_size,
            bits: vec![0; row_size * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        let offset = y * self.row_size + x / 32;
        (self.bits[offset] >> (x & 0x1F)) & 1 != 0
    }

    pub fn set(&mut self, x: usize, y: usize) {
        let offset = y * self.row_size + x / 32;
        self.bits[offset] |= 1 << (x & 0x1F);
    }

    pub fn unset(&mut self, x: usize, y: usize) {
        let offset = y * self.row_size + x / 32;
        self.bits[offset] &= !(1 << (x & 0x1F));
    }

    pub fn flip(&mut self, x: usize, y: usize) {
        let offset = y * self.row_size + x / 32;
        self.bits[offset] ^= 1 << (x & 0x1F);
    }

    /// XORs with an equally shaped mask.
    pub fn xor(&mut self, mask: &BitMatrix) -> Result<(), EncodeError> {
        if self.width != mask.width || self.height != mask.height || self.row_size != mask.row_size
        {
            return Err(EncodeError::InternalInvariant(
                "input matrix dimensions do not match".to_owned(),
            ));
        }
        for (word, &mask_word) in self.bits.iter_mut().zip(&mask.bits) {
            *word ^= mask_word;
        }
        Ok(())
    }

    /// Sets every bit of the given rectangle.
    pub fn set_region(
        &mut self,
        left: usize,
        top: usize,
        width: usize,
        height: usize,
    ) -> Result<(), EncodeError> {
        if width == 0 || height == 0 {
            return Err(EncodeError::BadInput(
                "region width and height must be at least 1".to_owned(),
            ));
        }
        let right = left + width;
        let bottom = top + height;
        if right > self.width || bottom > self.height {
            return Err(EncodeError::BadInput(
                "the region must fit inside the matrix".to_owned(),
            ));
        }
        for y in top..bottom {
            let offset = y * self.row_size;
            for x in left..right {
                self.bits[offset + x / 32] |= 1 << (x & 0x1F);
            }
        }
        Ok(())
    }

    /// A copy of row `y` as a bit array of exactly `width` bits.
    pub fn row(&self, y: usize) -> BitArray {
        let mut row = BitArray::new();
        for _ in 0..self.width {
            row.append_bit(false);
        }
        for x in (0..self.width).step_by(32) {
            row.set_bulk(x, self.bits[y * self.row_size + x / 32]);
        }
        row
    }

    /// Overwrites row `y` from a bit array of at least `width` bits.
    pub fn set_row(&mut self, y: usize, row: &BitArray) {
        for x in 0..self.width {
            if row.get(x) {
                self.set(x, y);
            } else {
                self.unset(x, y);
            }
        }
    }

    /// Rotates the matrix half a turn in place.
    pub fn rotate180(&mut self) {
        for i in 0..(self.height + 1) / 2 {
            let mut top_row = self.row(i);
            let mut bottom_row = self.row(self.height - 1 - i);
            top_row.reverse();
            bottom_row.reverse();
            self.set_row(i, &bottom_row);
            self.set_row(self.height - 1 - i, &top_row);
        }
    }

    /// Renders the matrix as text, one row per line.
    pub fn to_text(&self, set_string: &str, unset_string: &str) -> String {
        let mut text = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                text.push_str(if self.get(x, y) { set_string } else { unset_string });
            }
            text.push('\n');
        }
        text
    }

    /// Parses the textual form produced by [`to_text`](Self::to_text).
    ///
    /// Blank lines and trailing carriage returns are ignored; every row must
    /// decode to the same width.
    pub fn parse(text: &str, set_string: &str, unset_string: &str) -> Result<Self, EncodeError> {
        if set_string.is_empty() || unset_string.is_empty() || set_string == unset_string {
            return Err(EncodeError::BadInput(
                "set and unset strings must be distinct and non-empty".to_owned(),
            ));
        }
        let mut rows: Vec<Vec<bool>> = Vec::new();
        for line in text.lines() {
            let mut rest = line.trim_end_matches(['\r', ' ', '\t']);
            if rest.is_empty() {
                continue;
            }
            let mut row = Vec::new();
            while !rest.is_empty() {
                if let Some(tail) = rest.strip_prefix(set_string) {
                    row.push(true);
                    rest = tail;
                } else if let Some(tail) = rest.strip_prefix(unset_string) {
                    row.push(false);
                    rest = tail;
                } else if rest.starts_with([' ', '\t']) {
                    rest = &rest[1..];
                } else {
                    return Err(EncodeError::BadInput(format!(
                        "unexpected input at: {}",
                        rest
                    )));
                }
            }
            rows.push(row);
        }
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(EncodeError::BadInput("found empty matrix text".to_owned()));
        }
        if rows.iter().any(|row| row.len() != width) {
            return Err(EncodeError::BadInput("row widths do not match".to_owned()));
        }
        let mut matrix = BitMatrix::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, &bit) in row.iter().enumerate() {
                if bit {
                    matrix.set(x, y);
                }
            }
        }
        Ok(matrix)
    }
}

impl std::fmt::Display for BitMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_text("X ", "  "))
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn start_with_every_bit_unset() {
        let matrix = BitMatrix::new(33, 5);
        for y in 0..5 {
            for x in 0..33 {
                assert!(!matrix.get(x, y));
            }
        }
    }

    #[test]
    fn set_unset_and_flip_individual_bits() {
        let mut matrix = BitMatrix::new(40, 40);
        matrix.set(35, 3);
        assert!(matrix.get(35, 3));
        matrix.unset(35, 3);
        assert!(!matrix.get(35, 3));
        matrix.flip(0, 0);
        assert!(matrix.get(0, 0));
        matrix.flip(0, 0);
        assert!(!matrix.get(0, 0));
    }

    #[test]
    fn fill_rectangular_regions() {
        let mut matrix = BitMatrix::new(10, 10);
        matrix.set_region(2, 3, 4, 2).unwrap();
        for y in 0..10 {
            for x in 0..10 {
                let inside = (2..6).contains(&x) && (3..5).contains(&y);
                assert_eq!(inside, matrix.get(x, y), "at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn reject_out_of_bounds_regions() {
        let mut matrix = BitMatrix::new(10, 10);
        assert!(matches!(
            matrix.set_region(8, 8, 4, 1),
            Err(EncodeError::BadInput(_))
        ));
        assert!(matches!(
            matrix.set_region(0, 0, 0, 1),
            Err(EncodeError::BadInput(_))
        ));
    }

    #[test]
    fn xor_equal_shapes_and_refuse_mismatches() {
        let mut a = BitMatrix::new(4, 4);
        a.set(1, 1);
        let mut b = BitMatrix::new(4, 4);
        b.set(1, 1);
        b.set(2, 2);
        a.xor(&b).unwrap();
        assert!(!a.get(1, 1));
        assert!(a.get(2, 2));

        let other = BitMatrix::new(5, 4);
        assert!(matches!(
            a.xor(&other),
            Err(EncodeError::InternalInvariant(_))
        ));
    }

    #[test]
    fn hand_out_rows_and_take_them_back() {
        let mut matrix = BitMatrix::new(35, 3);
        matrix.set(0, 1);
        matrix.set(34, 1);
        let row = matrix.row(1);
        assert_eq!(35, row.size());
        assert!(row.get(0));
        assert!(row.get(34));
        assert!(!row.get(17));

        let mut other = BitMatrix::new(35, 3);
        other.set_row(2, &row);
        assert!(other.get(0, 2));
        assert!(other.get(34, 2));
    }

    #[test]
    fn rotate_half_a_turn() {
        let mut matrix = BitMatrix::new(3, 2);
        matrix.set(0, 0);
        matrix.set(2, 1);
        matrix.rotate180();
        assert!(matrix.get(2, 1));
        assert!(matrix.get(0, 0));
        assert!(!matrix.get(1, 0));

        let mut asymmetric = BitMatrix::new(3, 3);
        asymmetric.set(0, 0);
        asymmetric.rotate180();
        assert!(!asymmetric.get(0, 0));
        assert!(asymmetric.get(2, 2));
    }

    #[test]
    fn round_trip_through_text() {
        let mut matrix = BitMatrix::new(3, 2);
        matrix.set(0, 0);
        matrix.set(1, 1);
        let text = matrix.to_text("1", "0");
        assert_eq!("100\n010\n", text);
        let parsed = BitMatrix::parse(&text, "1", "0").unwrap();
        assert_eq!(matrix, parsed);
    }

    #[test]
    fn ignore_whitespace_when_parsing() {
        let parsed = BitMatrix::parse(" 1 0\n0 1 \n", "1", "0").unwrap();
        assert!(parsed.get(0, 0));
        assert!(!parsed.get(1, 0));
        assert!(parsed.get(1, 1));
    }

    #[test]
    fn reject_ragged_or_malformed_text() {
        assert!(BitMatrix::parse("10\n1\n", "1", "0").is_err());
        assert!(BitMatrix::parse("12\n", "1", "0").is_err());
        assert!(BitMatrix::parse("", "1", "0").is_err());
    }
}
