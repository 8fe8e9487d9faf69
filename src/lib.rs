//! A library for the optimal Ate pairings over two pairing-friendly curves:
//!
//! - [Zexe's BLS12-377](https://eprint.iacr.org/2018/962.pdf), a Barreto-Lynn-Scott
//!   curve of embedding degree 12 with a 377 bit base field, and
//! - [BW6-761](https://eprint.iacr.org/2020/351.pdf), a Brezing-Weng curve of
//!   embedding degree 6 over a 761 bit base field, whose subgroup order equals
//!   the BLS12-377 base field characteristic, making it a one-layer proof
//!   composition partner for the BLS12-377.
//!
//! The crate provides Montgomery arithmetic for the base fields, the towered
//! extension fields up to the embedding fields, the short Weierstrass groups
//! consumed by the Miller loop, and the curve-specific Miller loop and final
//! exponentiation recipes.

#[macro_use]
extern crate derivative;

#[macro_use]
pub mod biginteger;
pub use self::biginteger::*;

#[macro_use]
pub mod fields;
pub use self::fields::*;

pub mod curves;
pub use self::curves::*;

pub mod bytes;
pub use self::bytes::*;

pub mod rand;
pub use self::rand::*;
