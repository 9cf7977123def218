//! The 1-D symbology framework and per-symbology encoders.
//!
//! Every encoder produces the minimal run of modules as booleans (true for
//! bar, false for space); the shared renderer in `writer` scales that run
//! into the requested pixel box with a quiet zone on both sides.

mod codabar;
mod code128;
mod code39;
mod code93;
mod ean13;
mod ean8;
mod itf;
mod msi;
mod plessey;
mod upc_a;
mod upc_e;
mod writer;

pub(crate) mod upc_ean;

pub use codabar::*;
pub use code128::*;
pub use code39::*;
pub use code93::*;
pub use ean13::*;
pub use ean8::*;
pub use itf::*;
pub use msi::*;
pub use plessey::*;
pub use upc_a::*;
pub use upc_e::*;
pub use writer::*;
