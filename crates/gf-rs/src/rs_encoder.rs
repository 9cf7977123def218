use std::sync::Mutex;

use crate::error::GfError;
use crate::field::GenericGf;
use crate::poly::GfPoly;

/// Systematic Reed-Solomon encoder over a shared field.
///
/// Generator polynomials are grown degree by degree on demand and memoized,
/// so repeated encodes with the same parity width reuse earlier work. The
/// cache sits behind a mutex and only ever grows; the encoder itself is
/// shareable across threads through `&self`.
pub struct ReedSolomonEncoder {
    field: &'static GenericGf,
    cached_generators: Mutex<Vec<GfPoly>>,
}

impl ReedSolomonEncoder {
    pub fn new(field: &'static GenericGf) -> Self {
        Self {
            field,
            cached_generators: Mutex::new(vec![GfPoly::new(vec![1])]),
        }
    }

    // Grows the cache up to the requested degree by successive products
    // with (x - alpha^(base + i)).
    fn build_generator(&self, degree: usize) -> GfPoly {
        let mut cache = self
            .cached_generators
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        while cache.len() <= degree {
            let d = cache.len();
            let root = self.field.exp((d as u32 - 1) + self.field.generator_base());
            let next = cache[d - 1].multiply(self.field, &GfPoly::new(vec![1, root]));
            cache.push(next);
        }
        cache[degree].clone()
    }

    /// Fills the trailing `ec_count` positions of `codewords` with parity.
    ///
    /// On entry the message occupies the leading `len - ec_count` positions;
    /// the tail is overwritten. Fails on an empty message or an EC count
    /// outside `(0, field size)`.
    pub fn encode(&self, codewords: &mut [u32], ec_count: usize) -> Result<(), GfError> {
        if ec_count == 0 || ec_count >= self.field.size() as usize {
            return Err(GfError::InvalidEcCount(ec_count));
        }
        let data_len = codewords
            .len()
            .checked_sub(ec_count)
            .filter(|&n| n > 0)
            .ok_or(GfError::EmptyMessage)?;

        let generator = self.build_generator(ec_count);
        let info = GfPoly::new(codewords[..data_len].to_vec());
        let info = info.multiply_by_monomial(self.field, ec_count, 1);
        let (_, remainder) = info.divide(self.field, &generator)?;

        let coefficients = remainder.coefficients();
        let num_zero_coefficients = ec_count - coefficients.len();
        for slot in codewords[data_len..data_len + num_zero_coefficients].iter_mut() {
            *slot = 0;
        }
        codewords[data_len + num_zero_coefficients..].copy_from_slice(coefficients);
        Ok(())
    }
}

#[cfg(test)]
mod should {
    use super::*;

    fn encoder() -> ReedSolomonEncoder {
        ReedSolomonEncoder::new(GenericGf::qr_code_field_256())
    }

    // Re-divides the full codeword polynomial by an independently rebuilt
    // generator; a correct systematic encoding leaves no remainder.
    fn assert_divisible(codewords: &[u32], ec_count: usize) {
        let field = GenericGf::qr_code_field_256();
        let mut generator = GfPoly::new(vec![1]);
        for i in 0..ec_count {
            let root = field.exp(i as u32 + field.generator_base());
            generator = generator.multiply(field, &GfPoly::new(vec![1, root]));
        }
        let codeword_poly = GfPoly::new(codewords.to_vec());
        let (_, remainder) = codeword_poly.divide(field, &generator).unwrap();
        assert!(remainder.is_zero(), "remainder: {:?}", remainder);
    }

    #[test]
    fn produce_codewords_divisible_by_the_generator() {
        let encoder = encoder();
        let mut codewords = vec![0u32; 9 + 17];
        codewords[..9].copy_from_slice(&[32, 65, 205, 69, 41, 220, 46, 128, 236]);
        encoder.encode(&mut codewords, 17).unwrap();
        assert_divisible(&codewords, 17);
    }

    #[test]
    fn leave_the_message_prefix_untouched() {
        let encoder = encoder();
        let message = [17u32, 0, 255, 9, 4];
        let mut codewords = vec![0u32; message.len() + 10];
        codewords[..message.len()].copy_from_slice(&message);
        encoder.encode(&mut codewords, 10).unwrap();
        assert_eq!(&message, &codewords[..message.len()]);
    }

    #[test]
    fn reuse_the_cache_and_stay_deterministic() {
        let encoder = encoder();
        let mut first = vec![1u32, 2, 3, 4, 0, 0, 0, 0];
        let mut second = first.clone();
        encoder.encode(&mut first, 4).unwrap();
        encoder.encode(&mut second, 4).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn cover_several_parity_widths() {
        let encoder = encoder();
        for ec_count in [7usize, 10, 13, 17, 30] {
            let mut codewords = vec![0u32; 12 + ec_count];
            for (i, slot) in codewords[..12].iter_mut().enumerate() {
                *slot = (i as u32 * 37 + 5) & 0xFF;
            }
            encoder.encode(&mut codewords, ec_count).unwrap();
            assert_divisible(&codewords, ec_count);
        }
    }

    #[test]
    fn refuse_degenerate_parameters() {
        let encoder = encoder();
        let mut empty_message = vec![0u32; 4];
        assert_eq!(
            Err(GfError::EmptyMessage),
            encoder.encode(&mut empty_message, 4)
        );
        let mut codewords = vec![0u32; 8];
        assert_eq!(
            Err(GfError::InvalidEcCount(0)),
            encoder.encode(&mut codewords, 0)
        );
        let mut oversized = vec![0u32; 300];
        assert_eq!(
            Err(GfError::InvalidEcCount(256)),
            encoder.encode(&mut oversized, 256)
        );
    }
}
