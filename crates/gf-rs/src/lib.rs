//! Galois field arithmetic over GF(2^k) and systematic Reed-Solomon encoding.
//!
//! The field is parameterized by its primitive polynomial, its order and the
//! base power of its generator element, so the same machinery serves any
//! barcode symbology that needs error correction codewords. The QR Code
//! field, GF(2^8) over 0x011D with generator base 0, is provided as a
//! process-wide instance built once on first use.
//!
//! Encoding is the classic construction: multiply the message polynomial by
//! x^n, divide by the degree-n generator polynomial, and append the remainder
//! coefficients as parity.
//!
//! ```
//! use gf_rs::{GenericGf, ReedSolomonEncoder};
//!
//! let encoder = ReedSolomonEncoder::new(GenericGf::qr_code_field_256());
//! let mut codewords = vec![0x40, 0xD2, 0x75, 0x47, 0x76, 0x17, 0x32, 0x06, 0x27, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
//! encoder.encode(&mut codewords, 17).unwrap();
//! ```

mod error;
mod field;
mod poly;
mod rs_encoder;

pub use error::*;
pub use field::*;
pub use poly::*;
pub use rs_encoder::*;
