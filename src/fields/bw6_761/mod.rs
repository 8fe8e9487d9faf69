//! Base field Fq, exponent field Fr, and embedding field Fq6 for the BW6-761.
//!
//! The degree 6 embedding field is towered as cubic-over-quadratic over the
//! non-square and non-cube -4, i.e. by adjoining the roots of X^6 + 4.
pub mod fr;
pub use self::fr::*;

pub mod fq;
pub use self::fq::*;

pub mod fq2;
pub use self::fq2::*;

pub mod fq6;
pub use self::fq6::*;

#[cfg(test)]
mod tests;
