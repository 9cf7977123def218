use crate::common::BitMatrix;
use crate::error::EncodeError;
use crate::format::BarcodeFormat;
use crate::hints::EncodeHints;
use crate::oned::writer::{append_pattern, encode_one_dimensional, OneDimensionalWriter};
use crate::Writer;

// Bar/space run widths of every symbol value; index 106 is the stop
// pattern with its extra termination bar.
static CODE_PATTERNS: [&[usize]; 107] = [
    &[2, 1, 2, 2, 2, 2], // 0
    &[2, 2, 2, 1, 2, 2],
    &[2, 2, 2, 2, 2, 1],
    &[1, 2, 1, 2, 2, 3],
    &[1, 2, 1, 3, 2, 2],
    &[1, 3, 1, 2, 2, 2], // 5
    &[1, 2, 2, 2, 1, 3],
    &[1, 2, 2, 3, 1, 2],
    &[1, 3, 2, 2, 1, 2],
    &[2, 2, 1, 2, 1, 3],
    &[2, 2, 1, 3, 1, 2], // 10
    &[2, 3, 1, 2, 1, 2],
    &[1, 1, 2, 2, 3, 2],
    &[1, 2, 2, 1, 3, 2],
    &[1, 2, 2, 2, 3, 1],
    &[1, 1, 3, 2, 2, 2], // 15
    &[1, 2, 3, 1, 2, 2],
    &[1, 2, 3, 2, 2, 1],
    &[2, 2, 3, 2, 1, 1],
    &[2, 2, 1, 1, 3, 2],
    &[2, 2, 1, 2, 3, 1], // 20
    &[2, 1, 3, 2, 1, 2],
    &[2, 2, 3, 1, 1, 2],
    &[3, 1, 2, 1, 3, 1],
    &[3, 1, 1, 2, 2, 2],
    &[3, 2, 1, 1, 2, 2], // 25
    &[3, 2, 1, 2, 2, 1],
    &[3, 1, 2, 2, 1, 2],
    &[3, 2, 2, 1, 1, 2],
    &[3, 2, 2, 2, 1, 1],
    &[2, 1, 2, 1, 2, 3], // 30
    &[2, 1, 2, 3, 2, 1],
    &[2, 3, 2, 1, 2, 1],
    &[1, 1, 1, 3, 2, 3],
    &[1, 3, 1, 1, 2, 3],
    &[1, 3, 1, 3, 2, 1], // 35
    &[1, 1, 2, 3, 1, 3],
    &[1, 3, 2, 1, 1, 3],
    &[1, 3, 2, 3, 1, 1],
    &[2, 1, 1, 3, 1, 3],
    &[2, 3, 1, 1, 1, 3], // 40
    &[2, 3, 1, 3, 1, 1],
    &[1, 1, 2, 1, 3, 3],
    &[1, 1, 2, 3, 3, 1],
    &[1, 3, 2, 1, 3, 1],
    &[1, 1, 3, 1, 2, 3], // 45
    &[1, 1, 3, 3, 2, 1],
    &[1, 3, 3, 1, 2, 1],
    &[3, 1, 3, 1, 2, 1],
    &[2, 1, 1, 3, 3, 1],
    &[2, 3, 1, 1, 3, 1], // 50
    &[2, 1, 3, 1, 1, 3],
    &[2, 1, 3, 3, 1, 1],
    &[2, 1, 3, 1, 3, 1],
    &[3, 1, 1, 1, 2, 3],
    &[3, 1, 1, 3, 2, 1], // 55
    &[3, 3, 1, 1, 2, 1],
    &[3, 1, 2, 1, 1, 3],
    &[3, 1, 2, 3, 1, 1],
    &[3, 3, 2, 1, 1, 1],
    &[3, 1, 4, 1, 1, 1], // 60
    &[2, 2, 1, 4, 1, 1],
    &[4, 3, 1, 1, 1, 1],
    &[1, 1, 1, 2, 2, 4],
    &[1, 1, 1, 4, 2, 2],
    &[1, 2, 1, 1, 2, 4], // 65
    &[1, 2, 1, 4, 2, 1],
    &[1, 4, 1, 1, 2, 2],
    &[1, 4, 1, 2, 2, 1],
    &[1, 1, 2, 2, 1, 4],
    &[1, 1, 2, 4, 1, 2], // 70
    &[1, 2, 2, 1, 1, 4],
    &[1, 2, 2, 4, 1, 1],
    &[1, 4, 2, 1, 1, 2],
    &[1, 4, 2, 2, 1, 1],
    &[2, 4, 1, 2, 1, 1], // 75
    &[2, 2, 1, 1, 1, 4],
    &[4, 1, 3, 1, 1, 1],
    &[2, 4, 1, 1, 1, 2],
    &[1, 3, 4, 1, 1, 1],
    &[1, 1, 1, 2, 4, 2], // 80
    &[1, 2, 1, 1, 4, 2],
    &[1, 2, 1, 2, 4, 1],
    &[1, 1, 4, 2, 1, 2],
    &[1, 2, 4, 1, 1, 2],
    &[1, 2, 4, 2, 1, 1], // 85
    &[4, 1, 1, 2, 1, 2],
    &[4, 2, 1, 1, 1, 2],
    &[4, 2, 1, 2, 1, 1],
    &[2, 1, 2, 1, 4, 1],
    &[2, 1, 4, 1, 2, 1], // 90
    &[4, 1, 2, 1, 2, 1],
    &[1, 1, 1, 1, 4, 3],
    &[1, 1, 1, 3, 4, 1],
    &[1, 3, 1, 1, 4, 1],
    &[1, 1, 4, 1, 1, 3], // 95
    &[1, 1, 4, 3, 1, 1],
    &[4, 1, 1, 1, 1, 3],
    &[4, 1, 1, 3, 1, 1],
    &[1, 1, 3, 1, 4, 1],
    &[1, 1, 4, 1, 3, 1], // 100
    &[3, 1, 1, 1, 4, 1],
    &[4, 1, 1, 1, 3, 1],
    &[2, 1, 1, 4, 1, 2],
    &[2, 1, 1, 2, 1, 4],
    &[2, 1, 1, 2, 3, 2], // 105
    &[2, 3, 3, 1, 1, 1, 2],
];

const CODE_START_A: usize = 103;
const CODE_START_B: usize = 104;
const CODE_START_C: usize = 105;
const CODE_CODE_A: usize = 101;
const CODE_CODE_B: usize = 100;
const CODE_CODE_C: usize = 99;
const CODE_STOP: usize = 106;

// Escape characters that stand in for the function codes.
const ESCAPE_FNC_1: char = '\u{f1}';
const ESCAPE_FNC_2: char = '\u{f2}';
const ESCAPE_FNC_3: char = '\u{f3}';
const ESCAPE_FNC_4: char = '\u{f4}';

const CODE_FNC_1: usize = 102; // Code A, Code B, Code C
const CODE_FNC_2: usize = 97; // Code A, Code B
const CODE_FNC_3: usize = 96; // Code A, Code B
const CODE_FNC_4_A: usize = 101; // Code A
const CODE_FNC_4_B: usize = 100; // Code B

// Results of minimal lookahead while choosing a code set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CType {
    Uncodable,
    OneDigit,
    TwoDigits,
    Fnc1,
}

/// Encodes Code 128 symbols, picking the code set that yields the shortest
/// symbol unless the hints force code set B.
pub struct Code128Writer;

impl OneDimensionalWriter for Code128Writer {
    fn format(&self) -> BarcodeFormat {
        BarcodeFormat::Code128
    }

    fn encode_contents(&self, contents: &str, hints: &EncodeHints) -> Result<Vec<bool>, EncodeError> {
        let mut contents: Vec<char> = contents.chars().collect();
        // GS1 formatting puts FNC1 in the first position.
        if hints.gs1_format && contents.first() != Some(&ESCAPE_FNC_1) {
            contents.insert(0, ESCAPE_FNC_1);
        }

        let length = contents.len();
        if !(1..=80).contains(&length) {
            return Err(EncodeError::Overflow(format!(
                "contents length should be between 1 and 80 characters, but got {}",
                length
            )));
        }
        for &c in &contents {
            match c {
                ESCAPE_FNC_1 | ESCAPE_FNC_2 | ESCAPE_FNC_3 | ESCAPE_FNC_4 => {}
                _ if u32::from(c) > 127 => {
                    return Err(EncodeError::BadInput(format!(
                        "bad character in input: '{}'",
                        c
                    )))
                }
                _ => {}
            }
        }

        let forced_code_set = if hints.code128_force_codeset_b {
            Some(CODE_CODE_B)
        } else {
            None
        };

        let mut patterns: Vec<&[usize]> = Vec::new();
        let mut check_sum = 0usize;
        let mut check_weight = 1usize;
        let mut code_set = 0usize;
        let mut position = 0usize;

        while position < length {
            let new_code_set = forced_code_set.unwrap_or_else(|| choose_code(&contents, position, code_set));

            let pattern_index;
            if new_code_set == code_set {
                // Encode the current character or function escape.
                match contents[position] {
                    ESCAPE_FNC_1 => pattern_index = CODE_FNC_1,
                    ESCAPE_FNC_2 => pattern_index = CODE_FNC_2,
                    ESCAPE_FNC_3 => pattern_index = CODE_FNC_3,
                    ESCAPE_FNC_4 => {
                        pattern_index = if code_set == CODE_CODE_A {
                            CODE_FNC_4_A
                        } else {
                            CODE_FNC_4_B
                        }
                    }
                    c => match code_set {
                        CODE_CODE_A => {
                            let value = u32::from(c) as i32 - ' ' as i32;
                            // Control characters sit past the underscore.
                            pattern_index = if value < 0 {
                                (value + '`' as i32) as usize
                            } else {
                                value as usize
                            };
                        }
                        CODE_CODE_B => {
                            pattern_index = (u32::from(c) as usize) - (' ' as usize);
                        }
                        _ => {
                            // Code C packs two digits into one symbol.
                            let first = contents[position].to_digit(10).ok_or_else(|| {
                                EncodeError::BadInput("expected a digit in code set C".to_owned())
                            })?;
                            let second = contents
                                .get(position + 1)
                                .and_then(|c| c.to_digit(10))
                                .ok_or_else(|| {
                                    EncodeError::BadInput(
                                        "expected a digit pair in code set C".to_owned(),
                                    )
                                })?;
                            pattern_index = (first * 10 + second) as usize;
                            position += 1;
                        }
                    },
                }
                position += 1;
            } else {
                // Switch (or start) into the chosen code set.
                pattern_index = if code_set == 0 {
                    match new_code_set {
                        CODE_CODE_A => CODE_START_A,
                        CODE_CODE_B => CODE_START_B,
                        _ => CODE_START_C,
                    }
                } else {
                    new_code_set
                };
                code_set = new_code_set;
            }

            patterns.push(CODE_PATTERNS[pattern_index]);
            check_sum += pattern_index * check_weight;
            if position != 0 {
                check_weight += 1;
            }
        }

        check_sum %= 103;
        patterns.push(CODE_PATTERNS[check_sum]);
        patterns.push(CODE_PATTERNS[CODE_STOP]);

        let code_width: usize = patterns.iter().flat_map(|p| p.iter()).sum();
        let mut result = vec![false; code_width];
        let mut pos = 0;
        for pattern in patterns {
            pos += append_pattern(&mut result, pos, pattern, true);
        }
        Ok(result)
    }
}

fn find_c_type(value: &[char], start: usize) -> CType {
    if start >= value.len() {
        return CType::Uncodable;
    }
    let c = value[start];
    if c == ESCAPE_FNC_1 {
        return CType::Fnc1;
    }
    if !c.is_ascii_digit() {
        return CType::Uncodable;
    }
    match value.get(start + 1) {
        Some(d) if d.is_ascii_digit() => CType::TwoDigits,
        _ => CType::OneDigit,
    }
}

// Greedy lookahead: switch to code C only when at least four digits (or a
// digit pair around FNC1) make it pay off; an odd trailing digit defers
// the switch.
fn choose_code(value: &[char], start: usize, old_code: usize) -> usize {
    let mut lookahead = find_c_type(value, start);
    if lookahead == CType::OneDigit {
        if old_code == CODE_CODE_A {
            return CODE_CODE_A;
        }
        return CODE_CODE_B;
    }
    if lookahead == CType::Uncodable {
        if start < value.len() {
            let c = value[start];
            if u32::from(c) < u32::from(' ')
                || (old_code == CODE_CODE_A
                    && (u32::from(c) < u32::from('`')
                        || (ESCAPE_FNC_1..=ESCAPE_FNC_4).contains(&c)))
            {
                // Code A encodes the control range and keeps FNC escapes.
                return CODE_CODE_A;
            }
        }
        return CODE_CODE_B;
    }
    if old_code == CODE_CODE_A && lookahead == CType::Fnc1 {
        return CODE_CODE_A;
    }
    if old_code == CODE_CODE_C {
        return CODE_CODE_C;
    }
    if old_code == CODE_CODE_B {
        if lookahead == CType::Fnc1 {
            return CODE_CODE_B;
        }
        // Two digits seen; look at what follows them.
        lookahead = find_c_type(value, start + 2);
        if lookahead == CType::Uncodable || lookahead == CType::OneDigit {
            return CODE_CODE_B;
        }
        if lookahead == CType::Fnc1 {
            // Two digits, FNC1, then what?
            lookahead = find_c_type(value, start + 3);
            if lookahead == CType::TwoDigits {
                return CODE_CODE_C;
            }
            return CODE_CODE_B;
        }
        // At least four consecutive digits from here.
        let mut index = start + 4;
        loop {
            lookahead = find_c_type(value, index);
            if lookahead != CType::TwoDigits {
                break;
            }
            index += 2;
        }
        if lookahead == CType::OneDigit {
            // An odd run; switching now would strand the last digit.
            return CODE_CODE_B;
        }
        return CODE_CODE_C;
    }
    // No code set yet: FNC1 is transparent for the decision.
    if lookahead == CType::Fnc1 {
        lookahead = find_c_type(value, start + 1);
    }
    if lookahead == CType::TwoDigits {
        return CODE_CODE_C;
    }
    CODE_CODE_B
}

impl Writer for Code128Writer {
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
