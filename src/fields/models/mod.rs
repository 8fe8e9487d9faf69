//! Montgomery arithmetic for large prime fields and models of their
//! towered extensions.
//!
//! - `Fp256`, `Fp384`, `Fp768` capture moduli of length 4, 6 and 12 words of
//!   64 bits,
//! - quadratic and cubic-over-quadratic extensions, and the degree 12
//!   extension by towering, as used by the supported pairing curves.

pub mod fp_256;
pub use self::fp_256::*;

pub mod fp_384;
pub use self::fp_384::*;

pub mod fp_768;
pub use self::fp_768::*;

pub mod fp2;
pub use self::fp2::*;

pub mod fp6_3over2;
pub use self::fp6_3over2::*;

pub mod fp12_2over3over2;
pub use self::fp12_2over3over2::*;
