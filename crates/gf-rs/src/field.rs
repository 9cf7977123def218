use std::sync::OnceLock;

use crate::error::GfError;
use crate::poly::GfPoly;

/// A finite field of the form GF(2^k) over a primitive polynomial.
///
/// Elements are integers in `[0, size)`. Addition and subtraction are both
/// XOR; multiplication and inversion go through the discrete log and antilog
/// tables built once at construction time. The generator element is always
/// alpha = 2.
#[derive(Debug)]
pub struct GenericGf {
    exp_table: Vec<u32>,
    log_table: Vec<u32>,
    size: u32,
    generator_base: u32,
}

impl GenericGf {
    /// Builds the log/antilog tables for the field of the given order.
    ///
    /// `primitive` is the irreducible polynomial with the bit of degree k
    /// set; `size` is 2^k. `generator_base` is the power of alpha at which
    /// generator polynomials start (0 for QR Code).
    pub fn new(primitive: u32, size: u32, generator_base: u32) -> Self {
        let mut exp_table = vec![0u32; size as usize];
        let mut x: u32 = 1;
        for entry in exp_table.iter_mut() {
            *entry = x;
            x <<= 1;
            if x >= size {
                x ^= primitive;
                x &= size - 1;
            }
        }
        let mut log_table = vec![0u32; size as usize];
        for i in 0..size - 1 {
            log_table[exp_table[i as usize] as usize] = i;
        }
        // log_table[0] stays 0; log() guards the undefined case.
        Self {
            exp_table,
            log_table,
            size,
            generator_base,
        }
    }

    /// The field used by QR Code error correction: GF(2^8) over 0x011D.
    ///
    /// Built on first use and shared by every encode call afterwards.
    pub fn qr_code_field_256() -> &'static GenericGf {
        static FIELD: OnceLock<GenericGf> = OnceLock::new();
        FIELD.get_or_init(|| GenericGf::new(0x011D, 256, 0))
    }

    /// The order of the field.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The power of alpha at which generator polynomials start.
    pub fn generator_base(&self) -> u32 {
        self.generator_base
    }

    /// Field addition and subtraction, which coincide in characteristic 2.
    pub fn add_or_subtract(a: u32, b: u32) -> u32 {
        a ^ b
    }

    /// alpha^a.
    pub fn exp(&self, a: u32) -> u32 {
        self.exp_table[a as usize]
    }

    /// The base-alpha discrete logarithm of a nonzero element.
    pub fn log(&self, a: u32) -> Result<u32, GfError> {
        if a == 0 {
            return Err(GfError::LogOfZero);
        }
        Ok(self.log_table[a as usize])
    }

    /// The multiplicative inverse of a nonzero element.
    pub fn inverse(&self, a: u32) -> Result<u32, GfError> {
        if a == 0 {
            return Err(GfError::DivisionByZero);
        }
        Ok(self.exp_table[(self.size - 1 - self.log_table[a as usize]) as usize])
    }

    /// Field multiplication through the log tables.
    pub fn multiply(&self, a: u32, b: u32) -> u32 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_sum = self.log_table[a as usize] + self.log_table[b as usize];
        self.exp_table[(log_sum % (self.size - 1)) as usize]
    }

    /// Returns the polynomial `coefficient * x^degree`.
    pub fn build_monomial(&self, degree: usize, coefficient: u32) -> GfPoly {
        if coefficient == 0 {
            return GfPoly::zero();
        }
        let mut coefficients = vec![0u32; degree + 1];
        coefficients[0] = coefficient;
        GfPoly::new(coefficients)
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn build_the_qr_tables_from_the_primitive_polynomial() {
        let field = GenericGf::qr_code_field_256();
        assert_eq!(1, field.exp(0));
        assert_eq!(2, field.exp(1));
        assert_eq!(4, field.exp(2));
        // 128 * 2 = 256, reduced by 0x11D
        assert_eq!(0x1D, field.exp(8));
        assert_eq!(8, field.log(0x1D).unwrap());
    }

    #[test]
    fn add_and_subtract_as_xor() {
        assert_eq!(0, GenericGf::add_or_subtract(0x53, 0x53));
        assert_eq!(0x53 ^ 0xCA, GenericGf::add_or_subtract(0x53, 0xCA));
    }

    #[test]
    fn multiply_by_zero_to_zero() {
        let field = GenericGf::qr_code_field_256();
        assert_eq!(0, field.multiply(0, 0xA7));
        assert_eq!(0, field.multiply(0xA7, 0));
    }

    #[test]
    fn multiply_every_nonzero_element_by_its_inverse_to_one() {
        let field = GenericGf::qr_code_field_256();
        for a in 1..field.size() {
            let inverse = field.inverse(a).unwrap();
            assert_eq!(1, field.multiply(a, inverse), "a = {}", a);
        }
    }

    #[test]
    fn refuse_log_and_inverse_of_zero() {
        let field = GenericGf::qr_code_field_256();
        assert_eq!(Err(GfError::LogOfZero), field.log(0));
        assert_eq!(Err(GfError::DivisionByZero), field.inverse(0));
    }

    #[test]
    fn round_trip_exp_and_log() {
        let field = GenericGf::qr_code_field_256();
        for a in 1..field.size() {
            assert_eq!(a, field.exp(field.log(a).unwrap()));
        }
    }

    #[test]
    fn build_monomials() {
        let field = GenericGf::qr_code_field_256();
        let monomial = field.build_monomial(3, 5);
        assert_eq!(3, monomial.degree());
        assert_eq!(5, monomial.coefficient(3));
        assert_eq!(0, monomial.coefficient(0));
        assert!(field.build_monomial(4, 0).is_zero());
    }
}
