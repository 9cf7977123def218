use crate::common::ByteMatrix;

// Weights of the four penalty rules.
const PENALTY_N1: i32 = 3;
const PENALTY_N2: i32 = 3;
const PENALTY_N3: i32 = 40;
const PENALTY_N4: i32 = 10;

/// Penalty for runs of same-colored modules in rows and columns.
pub(crate) fn apply_mask_penalty_rule1(matrix: &ByteMatrix) -> i32 {
    apply_mask_penalty_rule1_internal(matrix, true) + apply_mask_penalty_rule1_internal(matrix, false)
}

fn apply_mask_penalty_rule1_internal(matrix: &ByteMatrix, is_horizontal: bool) -> i32 {
    let mut penalty = 0;
    let i_limit = if is_horizontal { matrix.height() } else { matrix.width() };
    let j_limit = if is_horizontal { matrix.width() } else { matrix.height() };
    for i in 0..i_limit {
        let mut num_same_cells = 0;
        let mut prev_value = ByteMatrix::EMPTY;
        for j in 0..j_limit {
            let value = if is_horizontal { matrix.get(j, i) } else { matrix.get(i, j) };
            if value == prev_value {
                num_same_cells += 1;
            } else {
                if num_same_cells >= 5 {
                    penalty += PENALTY_N1 + (num_same_cells - 5);
                }
                num_same_cells = 1;
                prev_value = value;
            }
        }
        if num_same_cells >= 5 {
            penalty += PENALTY_N1 + (num_same_cells - 5);
        }
    }
    penalty
}

/// Penalty for 2x2 blocks of same-colored modules; overlapping blocks all
/// count.
pub(crate) fn apply_mask_penalty_rule2(matrix: &ByteMatrix) -> i32 {
    let mut penalty = 0;
    for y in 0..matrix.height() - 1 {
        for x in 0..matrix.width() - 1 {
            let value = matrix.get(x, y);
            if value == matrix.get(x + 1, y)
                && value == matrix.get(x, y + 1)
                && value == matrix.get(x + 1, y + 1)
            {
                penalty += 1;
            }
        }
    }
    PENALTY_N2 * penalty
}

/// Penalty for finder-like runs (dark-light-dark-dark-dark-light-dark with
/// four light modules on either side) in rows and columns.
pub(crate) fn apply_mask_penalty_rule3(matrix: &ByteMatrix) -> i32 {
    let mut num_penalties = 0;
    let width = matrix.width();
    let height = matrix.height();
    for y in 0..height {
        for x in 0..width {
            if x + 6 < width
                && matrix.get(x, y) == 1
                && matrix.get(x + 1, y) == 0
                && matrix.get(x + 2, y) == 1
                && matrix.get(x + 3, y) == 1
                && matrix.get(x + 4, y) == 1
                && matrix.get(x + 5, y) == 0
                && matrix.get(x + 6, y) == 1
                && (is_white_horizontal(matrix, y, x as isize - 4, x as isize)
                    || is_white_horizontal(matrix, y, x as isize + 7, x as isize + 11))
            {
                num_penalties += 1;
            }
            if y + 6 < height
                && matrix.get(x, y) == 1
                && matrix.get(x, y + 1) == 0
                && matrix.get(x, y + 2) == 1
                && matrix.get(x, y + 3) == 1
                && matrix.get(x, y + 4) == 1
                && matrix.get(x, y + 5) == 0
                && matrix.get(x, y + 6) == 1
                && (is_white_vertical(matrix, x, y as isize - 4, y as isize)
                    || is_white_vertical(matrix, x, y as isize + 7, y as isize + 11))
            {
                num_penalties += 1;
            }
        }
    }
    num_penalties * PENALTY_N3
}

fn is_white_horizontal(matrix: &ByteMatrix, y: usize, from: isize, to: isize) -> bool {
    let from = from.max(0) as usize;
    let to = (to.max(0) as usize).min(matrix.width());
    (from..to).all(|x| matrix.get(x, y) != 1)
}

fn is_white_vertical(matrix: &ByteMatrix, x: usize, from: isize, to: isize) -> bool {
    let from = from.max(0) as usize;
    let to = (to.max(0) as usize).min(matrix.height());
    (from..to).all(|y| matrix.get(x, y) != 1)
}

/// Penalty for an unbalanced dark/light ratio, in steps away from 50%.
pub(crate) fn apply_mask_penalty_rule4(matrix: &ByteMatrix) -> i32 {
    let mut num_dark_cells: i64 = 0;
    for y in 0..matrix.height() {
        for x in 0..matrix.width() {
            if matrix.get(x, y) == 1 {
                num_dark_cells += 1;
            }
        }
    }
    let num_total_cells = (matrix.width() * matrix.height()) as i64;
    let variances = (num_dark_cells * 2 - num_total_cells).abs() * 20 / num_total_cells;
    variances as i32 * PENALTY_N4
}

/// Whether the data bit at `(x, y)` is flipped by the given mask pattern.
pub(crate) fn get_data_mask_bit(mask_pattern: u32, x: usize, y: usize) -> bool {
    let intermediate = match mask_pattern {
        0 => (y + x) & 0x1,
        1 => y & 0x1,
        2 => x % 3,
        3 => (y + x) % 3,
        4 => ((y / 2) + (x / 3)) & 0x1,
        5 => {
            let temp = y * x;
            (temp & 0x1) + (temp % 3)
        }
        6 => {
            let temp = y * x;
            ((temp & 0x1) + (temp % 3)) & 0x1
        }
        7 => {
            let temp = y * x;
            ((temp % 3) + ((y + x) & 0x1)) & 0x1
        }
        _ => unreachable!("mask pattern out of range"),
    };
    intermediate == 0
}

#[cfg(test)]
mod should {
    use super::*;

    fn matrix_from(rows: &[&[u8]]) -> ByteMatrix {
        let mut matrix = ByteMatrix::new(rows[0].len(), rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                matrix.set(x, y, value);
            }
        }
        matrix
    }

    #[test]
    fn charge_long_runs_by_their_excess_length() {
        // One row of six dark modules: 3 + (6 - 5) horizontally, nothing else
        // reaches five in a 1-module-high matrix.
        let matrix = matrix_from(&[&[1, 1, 1, 1, 1, 1]]);
        assert_eq!(4, apply_mask_penalty_rule1_internal(&matrix, true));
        assert_eq!(0, apply_mask_penalty_rule1_internal(&matrix, false));

        // Exactly five costs the base penalty.
        let matrix = matrix_from(&[&[0, 0, 0, 0, 0, 1]]);
        assert_eq!(3, apply_mask_penalty_rule1_internal(&matrix, true));
    }

    #[test]
    fn count_every_overlapping_two_by_two_block() {
        let matrix = matrix_from(&[&[0, 0], &[0, 0]]);
        assert_eq!(3, apply_mask_penalty_rule2(&matrix));

        let matrix = matrix_from(&[&[0, 0, 0], &[0, 0, 0], &[0, 0, 1]]);
        // Three of the four 2x2 windows are uniform.
        assert_eq!(9, apply_mask_penalty_rule2(&matrix));

        let matrix = matrix_from(&[&[0, 1], &[1, 0]]);
        assert_eq!(0, apply_mask_penalty_rule2(&matrix));
    }

    #[test]
    fn spot_finder_like_runs_next_to_light_regions() {
        // 1011101 followed by 0000 at the row end.
        let matrix = matrix_from(&[&[1, 0, 1, 1, 1, 0, 1, 0, 0, 0, 0]]);
        assert_eq!(40, apply_mask_penalty_rule3(&matrix));

        // 0000 then 1011101.
        let matrix = matrix_from(&[&[0, 0, 0, 0, 1, 0, 1, 1, 1, 0, 1]]);
        assert_eq!(40, apply_mask_penalty_rule3(&matrix));

        // The core alone, hemmed in by dark modules, is no finder.
        let matrix = matrix_from(&[&[1, 1, 0, 1, 1, 1, 0, 1, 1, 0, 0]]);
        assert_eq!(0, apply_mask_penalty_rule3(&matrix));
    }

    #[test]
    fn charge_ratio_imbalance_in_five_percent_steps() {
        // All light: |0 - total| * 20 / total = 20 steps of 10.
        let matrix = matrix_from(&[&[0, 0], &[0, 0]]);
        assert_eq!(200, apply_mask_penalty_rule4(&matrix));

        // Perfectly balanced.
        let matrix = matrix_from(&[&[0, 1], &[1, 0]]);
        assert_eq!(0, apply_mask_penalty_rule4(&matrix));
    }

    #[test]
    fn reproduce_the_mask_predicates() {
        for (x, y) in [(0usize, 0usize), (1, 0), (2, 1), (3, 5), (4, 2), (7, 6)] {
            assert_eq!((y + x) % 2 == 0, get_data_mask_bit(0, x, y));
            assert_eq!(y % 2 == 0, get_data_mask_bit(1, x, y));
            assert_eq!(x % 3 == 0, get_data_mask_bit(2, x, y));
            assert_eq!((y + x) % 3 == 0, get_data_mask_bit(3, x, y));
            assert_eq!((y / 2 + x / 3) % 2 == 0, get_data_mask_bit(4, x, y));
            assert_eq!((y * x) % 2 + (y * x) % 3 == 0, get_data_mask_bit(5, x, y));
            assert_eq!(
                ((y * x) % 2 + (y * x) % 3) % 2 == 0,
                get_data_mask_bit(6, x, y)
            );
            assert_eq!(
                ((y + x) % 2 + (y * x) % 3) % 2 == 0,
                get_data_mask_bit(7, x, y)
            );
        }
    }
}
