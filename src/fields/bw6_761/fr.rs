//! As outer curve of the BLS12-377, its field of exponents is the BLS12-377
//! base field.

pub use crate::fields::bls12_377::fq::{Fq as Fr, FqParameters as FrParameters};
