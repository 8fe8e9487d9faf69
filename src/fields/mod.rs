//! Traits for prime fields and their towered extensions, together with the
//! concrete fields of the supported curves.

use crate::{
    biginteger::BigInteger,
    bytes::{FromBytes, ToBytes},
    UniformRand,
};
use std::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

#[macro_use]
pub mod macros;

pub mod models;
pub use self::models::*;

#[cfg(feature = "bls12_377")]
pub mod bls12_377;

#[cfg(feature = "bw6_761")]
pub mod bw6_761;

#[cfg(test)]
pub mod tests;

/// The interface for a generic field.
pub trait Field:
    ToBytes
    + FromBytes
    + Copy
    + Clone
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + 'static
    + Eq
    + Hash
    + Neg<Output = Self>
    + UniformRand
    + Sized
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Div<Self, Output = Self>
    + AddAssign<Self>
    + SubAssign<Self>
    + MulAssign<Self>
    + DivAssign<Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + for<'a> Div<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
    + for<'a> DivAssign<&'a Self>
{
    /// Returns the zero element of the field, the additive identity.
    fn zero() -> Self;

    /// Returns true if and only if `self == Self::zero()`.
    fn is_zero(&self) -> bool;

    /// Returns the one element of the field, the multiplicative identity.
    fn one() -> Self;

    /// Returns true if and only if `self == Self::one()`.
    fn is_one(&self) -> bool;

    /// Returns `self + self`.
    #[must_use]
    fn double(&self) -> Self;

    /// Doubles `self` in place.
    fn double_in_place(&mut self) -> &mut Self;

    /// Returns `self * self`.
    #[must_use]
    fn square(&self) -> Self;

    /// Squares `self` in place.
    fn square_in_place(&mut self) -> &mut Self;

    /// Computes the multiplicative inverse of `self`, if it exists.
    fn inverse(&self) -> Option<Self>;

    /// Sets `self` to its multiplicative inverse, if it exists.
    fn inverse_in_place(&mut self) -> Option<&mut Self>;

    /// Exponentiates this element by a power of the base prime modulus via
    /// the Frobenius automorphism.
    fn frobenius_map(&mut self, power: usize);

    /// Exponentiates this element by a number represented with `u64` limbs,
    /// least significant limb first.
    #[must_use]
    fn pow<S: AsRef<[u64]>>(&self, exp: S) -> Self {
        let mut res = Self::one();

        let mut found_one = false;

        for i in BitIterator::new(exp) {
            if !found_one {
                if i {
                    found_one = true;
                } else {
                    continue;
                }
            }

            res.square_in_place();

            if i {
                res *= self;
            }
        }
        res
    }
}

/// A trait that defines parameters for a prime field.
pub trait FpParameters: 'static + Send + Sync + Sized {
    type BigInt: BigInteger;

    /// The modulus of the field.
    const MODULUS: Self::BigInt;

    /// The number of bits needed to represent the modulus.
    const MODULUS_BITS: u32;

    /// The number of bits that can be reliably stored.
    /// (Should equal `MODULUS_BITS - 1`)
    const CAPACITY: u32;

    /// The number of bits that must be shaved from the most significant limb
    /// when uniformly sampling an element from the representation.
    const REPR_SHAVE_BITS: u32;

    /// Montgomery constant R = 2^(64 * NUM_LIMBS) mod MODULUS.
    const R: Self::BigInt;

    /// R2 = R^2 mod MODULUS, the Montgomery conversion factor.
    const R2: Self::BigInt;

    /// INV = -MODULUS^{-1} mod 2^64.
    const INV: u64;
}

/// The interface for a prime field.
pub trait PrimeField: Field + FromStr + From<<Self as PrimeField>::BigInt> {
    type Params: FpParameters<BigInt = Self::BigInt>;
    type BigInt: BigInteger;

    /// Constructs a field element from its raw representation, converting it
    /// into the Montgomery domain.
    fn from_repr(repr: Self::BigInt) -> Self;

    /// Returns the underlying raw representation of the prime field element.
    fn into_repr(&self) -> Self::BigInt;

    /// Returns the field size in bits.
    fn size_in_bits() -> usize {
        Self::Params::MODULUS_BITS as usize
    }
}

/// Iterates over the bits of a limb sequence, most significant bit first.
#[derive(Debug)]
pub struct BitIterator<E> {
    t: E,
    n: usize,
}

impl<E: AsRef<[u64]>> BitIterator<E> {
    pub fn new(t: E) -> Self {
        let n = t.as_ref().len() * 64;
        BitIterator { t, n }
    }
}

impl<E: AsRef<[u64]>> Iterator for BitIterator<E> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.n == 0 {
            None
        } else {
            self.n -= 1;
            let part = self.n / 64;
            let bit = self.n - (64 * part);

            Some(self.t.as_ref()[part] & (1 << bit) > 0)
        }
    }
}

#[cfg(test)]
mod bititerator_tests {
    use super::BitIterator;

    #[test]
    fn test_bit_iterator() {
        let bits: Vec<bool> = BitIterator::new([0b101u64]).collect();
        assert_eq!(bits.len(), 64);
        assert_eq!(&bits[61..], [true, false, true]);
    }
}
