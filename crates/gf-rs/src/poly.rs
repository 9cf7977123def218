use crate::error::GfError;
use crate::field::GenericGf;

/// A polynomial with coefficients in a GF(2^k) field.
///
/// Coefficients are stored from the highest-degree term down and leading
/// zeros are trimmed at construction, so the degree is always exact. The
/// zero polynomial is the single coefficient `[0]`. The field is not stored;
/// arithmetic takes it as a parameter, which keeps instances plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GfPoly {
    coefficients: Vec<u32>,
}

impl GfPoly {
    /// Wraps a coefficient vector, trimming leading zeros.
    ///
    /// An empty or all-zero vector yields the zero polynomial.
    pub fn new(coefficients: Vec<u32>) -> Self {
        let first_nonzero = coefficients.iter().position(|&c| c != 0);
        match first_nonzero {
            None => GfPoly::zero(),
            Some(0) => Self { coefficients },
            Some(at) => Self {
                coefficients: coefficients[at..].to_vec(),
            },
        }
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self {
            coefficients: vec![0],
        }
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients[0] == 0
    }

    /// The degree of the polynomial; 0 for constants and for zero.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// The coefficient of the x^degree term.
    pub fn coefficient(&self, degree: usize) -> u32 {
        self.coefficients[self.coefficients.len() - 1 - degree]
    }

    /// The coefficients, highest-degree first.
    pub fn coefficients(&self) -> &[u32] {
        &self.coefficients
    }

    /// Polynomial sum, which equals the difference in characteristic 2.
    pub fn add_or_subtract(&self, other: &GfPoly) -> GfPoly {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        let (smaller, larger) = if self.coefficients.len() <= other.coefficients.len() {
            (&self.coefficients, &other.coefficients)
        } else {
            (&other.coefficients, &self.coefficients)
        };
        let diff = larger.len() - smaller.len();
        // The high-order terms of the larger polynomial pass through untouched.
        let mut sum = larger[..diff].to_vec();
        sum.extend(
            smaller
                .iter()
                .zip(&larger[diff..])
                .map(|(&a, &b)| GenericGf::add_or_subtract(a, b)),
        );
        GfPoly::new(sum)
    }

    /// Polynomial product over the given field.
    pub fn multiply(&self, field: &GenericGf, other: &GfPoly) -> GfPoly {
        if self.is_zero() || other.is_zero() {
            return GfPoly::zero();
        }
        let a = &self.coefficients;
        let b = &other.coefficients;
        let mut product = vec![0u32; a.len() + b.len() - 1];
        for (i, &a_coeff) in a.iter().enumerate() {
            for (j, &b_coeff) in b.iter().enumerate() {
                product[i + j] =
                    GenericGf::add_or_subtract(product[i + j], field.multiply(a_coeff, b_coeff));
            }
        }
        GfPoly::new(product)
    }

    /// Product with a field scalar.
    pub fn multiply_scalar(&self, field: &GenericGf, scalar: u32) -> GfPoly {
        if scalar == 0 {
            return GfPoly::zero();
        }
        if scalar == 1 {
            return self.clone();
        }
        let product = self
            .coefficients
            .iter()
            .map(|&c| field.multiply(c, scalar))
            .collect();
        GfPoly::new(product)
    }

    /// Product with `coefficient * x^degree`.
    pub fn multiply_by_monomial(&self, field: &GenericGf, degree: usize, coefficient: u32) -> GfPoly {
        if coefficient == 0 {
            return GfPoly::zero();
        }
        let mut product = vec![0u32; self.coefficients.len() + degree];
        for (i, &c) in self.coefficients.iter().enumerate() {
            product[i] = field.multiply(c, coefficient);
        }
        GfPoly::new(product)
    }

    /// Polynomial long division, yielding `(quotient, remainder)`.
    pub fn divide(&self, field: &GenericGf, other: &GfPoly) -> Result<(GfPoly, GfPoly), GfError> {
        if other.is_zero() {
            return Err(GfError::DivisionByZero);
        }
        let mut quotient = GfPoly::zero();
        let mut remainder = self.clone();

        let denominator_leading_term = other.coefficient(other.degree());
        let inverse_denominator_leading_term = field.inverse(denominator_leading_term)?;

        while remainder.degree() >= other.degree() && !remainder.is_zero() {
            let degree_difference = remainder.degree() - other.degree();
            let scale = field.multiply(
                remainder.coefficient(remainder.degree()),
                inverse_denominator_leading_term,
            );
            let term = other.multiply_by_monomial(field, degree_difference, scale);
            let iteration_quotient = field.build_monomial(degree_difference, scale);
            quotient = quotient.add_or_subtract(&iteration_quotient);
            remainder = remainder.add_or_subtract(&term);
        }
        Ok((quotient, remainder))
    }
}
