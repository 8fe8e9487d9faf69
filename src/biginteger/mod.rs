//! Fixed-length big integers, the raw representation of prime field elements.
//!
//! - `BigInteger256`, `BigInteger384` capture moduli of length 4 and 6 words
//!   of 64 bits (the BLS12-377 exponent and base fields),
//! - `BigInteger768` captures moduli of length 12 words (the BW6-761 base field).

use crate::bytes::{FromBytes, ToBytes};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Debug, Display},
    io::{Read, Result as IoResult, Write},
};

pub(crate) mod arithmetic;

/// The interface for a fixed-length sequence of 64 bit limbs,
/// stored in little-endian limb order.
pub trait BigInteger:
    ToBytes
    + FromBytes
    + Copy
    + Clone
    + Debug
    + Default
    + Display
    + Eq
    + Ord
    + Send
    + Sized
    + Sync
    + 'static
    + AsMut<[u64]>
    + AsRef<[u64]>
    + From<u64>
{
    /// The number of 64 bit limbs.
    const NUM_LIMBS: usize;

    /// Add another representation to this one, returning the carry bit.
    fn add_nocarry(&mut self, other: &Self) -> bool;

    /// Subtract another representation from this one, returning the borrow bit.
    fn sub_noborrow(&mut self, other: &Self) -> bool;

    /// Perform a leftwise bitshift of this number, effectively multiplying it by 2.
    /// Overflow is ignored.
    fn mul2(&mut self);

    /// Perform a rightwise bitshift of this number, effectively dividing it by 2.
    fn div2(&mut self);

    /// Returns true iff this number is odd.
    fn is_odd(&self) -> bool;

    /// Returns true iff this number is even.
    fn is_even(&self) -> bool;

    /// Returns true iff this number is zero.
    fn is_zero(&self) -> bool;

    /// Compute the number of bits needed to encode this number.
    fn num_bits(&self) -> u32;

    /// Compute the `i`-th bit of `self`.
    fn get_bit(&self, i: usize) -> bool;

    /// Returns the non-adjacent form of `self`, least significant digit first.
    /// No two consecutive digits of the output are non-zero, so the number of
    /// additions in a double-and-add loop driven by it is minimal.
    fn find_naf(&self) -> Vec<i8> {
        let one = Self::from(1);

        let mut naf = vec![];
        let mut e = *self;
        while !e.is_zero() {
            let z: i8;
            if e.is_odd() {
                // z = 2 - (e mod 4)
                z = if e.get_bit(1) { -1 } else { 1 };
                if z > 0 {
                    e.sub_noborrow(&one);
                } else {
                    e.add_nocarry(&one);
                }
            } else {
                z = 0;
            }
            naf.push(z);
            e.div2();
        }
        naf
    }
}

macro_rules! bigint_impl {
    ($name:ident, $num_limbs:expr) => {
        #[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
        pub struct $name(pub [u64; $num_limbs]);

        impl Ord for $name {
            // numeric comparison, most significant limb first
            #[inline]
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                for (a, b) in self.0.iter().rev().zip(other.0.iter().rev()) {
                    if a < b {
                        return std::cmp::Ordering::Less;
                    } else if a > b {
                        return std::cmp::Ordering::Greater;
                    }
                }
                std::cmp::Ordering::Equal
            }
        }

        impl PartialOrd for $name {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl $name {
            pub const fn new(value: [u64; $num_limbs]) -> Self {
                $name(value)
            }
        }

        impl BigInteger for $name {
            const NUM_LIMBS: usize = $num_limbs;

            #[inline]
            fn add_nocarry(&mut self, other: &Self) -> bool {
                let mut carry = 0;
                for (a, b) in self.0.iter_mut().zip(other.0.iter()) {
                    *a = arithmetic::adc(*a, *b, &mut carry);
                }
                carry != 0
            }

            #[inline]
            fn sub_noborrow(&mut self, other: &Self) -> bool {
                let mut borrow = 0;
                for (a, b) in self.0.iter_mut().zip(other.0.iter()) {
                    *a = arithmetic::sbb(*a, *b, &mut borrow);
                }
                borrow != 0
            }

            #[inline]
            fn mul2(&mut self) {
                let mut last = 0;
                for i in &mut self.0 {
                    let tmp = *i >> 63;
                    *i <<= 1;
                    *i |= last;
                    last = tmp;
                }
            }

            #[inline]
            fn div2(&mut self) {
                let mut t = 0;
                for i in self.0.iter_mut().rev() {
                    let t2 = *i << 63;
                    *i >>= 1;
                    *i |= t;
                    t = t2;
                }
            }

            #[inline]
            fn is_odd(&self) -> bool {
                self.0[0] & 1 == 1
            }

            #[inline]
            fn is_even(&self) -> bool {
                !self.is_odd()
            }

            #[inline]
            fn is_zero(&self) -> bool {
                self.0.iter().all(|&e| e == 0)
            }

            #[inline]
            fn num_bits(&self) -> u32 {
                let mut ret = $num_limbs * 64;
                for i in self.0.iter().rev() {
                    let leading = i.leading_zeros();
                    ret -= leading;
                    if leading != 64 {
                        break;
                    }
                }
                ret
            }

            #[inline]
            fn get_bit(&self, i: usize) -> bool {
                if i >= 64 * $num_limbs {
                    false
                } else {
                    let limb = i / 64;
                    let bit = i - (64 * limb);
                    (self.0[limb] & (1 << bit)) != 0
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                for i in self.0.iter().rev() {
                    write!(f, "{:016X}", *i)?;
                }
                Ok(())
            }
        }

        impl Distribution<$name> for Standard {
            #[inline]
            fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> $name {
                $name(rng.gen())
            }
        }

        impl AsMut<[u64]> for $name {
            #[inline]
            fn as_mut(&mut self) -> &mut [u64] {
                &mut self.0
            }
        }

        impl AsRef<[u64]> for $name {
            #[inline]
            fn as_ref(&self) -> &[u64] {
                &self.0
            }
        }

        impl From<u64> for $name {
            #[inline]
            fn from(val: u64) -> $name {
                let mut repr = Self::default();
                repr.0[0] = val;
                repr
            }
        }

        impl ToBytes for $name {
            #[inline]
            fn write<W: Write>(&self, mut writer: W) -> IoResult<()> {
                for limb in &self.0 {
                    limb.write(&mut writer)?;
                }
                Ok(())
            }
        }

        impl FromBytes for $name {
            #[inline]
            fn read<R: Read>(mut reader: R) -> IoResult<Self> {
                let mut limbs = [0u64; $num_limbs];
                for limb in limbs.iter_mut() {
                    *limb = u64::read(&mut reader)?;
                }
                Ok($name(limbs))
            }
        }
    };
}

bigint_impl!(BigInteger256, 4);
bigint_impl!(BigInteger384, 6);
bigint_impl!(BigInteger768, 12);

#[cfg(test)]
mod tests {
    use super::{BigInteger, BigInteger256, BigInteger384};

    #[test]
    fn test_add_sub() {
        let mut a = BigInteger384::from(u64::max_value());
        let b = BigInteger384::from(1);
        assert!(!a.add_nocarry(&b));
        assert_eq!(a, BigInteger384([0, 1, 0, 0, 0, 0]));
        assert!(!a.sub_noborrow(&b));
        assert_eq!(a, BigInteger384::from(u64::max_value()));
        let mut z = BigInteger384::default();
        assert!(z.sub_noborrow(&b));
    }

    #[test]
    fn test_shifts() {
        let mut a = BigInteger384::from(1);
        a.mul2();
        assert_eq!(a, BigInteger384::from(2));
        a.div2();
        a.div2();
        assert!(a.is_zero());
    }

    #[test]
    fn test_num_bits() {
        assert_eq!(BigInteger384::from(1).num_bits(), 1);
        assert_eq!(BigInteger384::from(0b1011).num_bits(), 4);
        assert_eq!(BigInteger384([0, 0, 0, 0, 0, 1]).num_bits(), 321);
        assert_eq!(BigInteger384::default().num_bits(), 0);
    }

    #[test]
    fn test_find_naf() {
        // 7 = 8 - 1
        let naf = BigInteger256::from(7).find_naf();
        assert_eq!(naf, vec![-1, 0, 0, 1]);
        for (i, d) in naf.iter().enumerate() {
            if *d != 0 && i + 1 < naf.len() {
                assert_eq!(naf[i + 1], 0);
            }
        }
    }

    /// The BN-family optimal Ate loop count 29793968203157093288 decomposes
    /// into 66 NAF digits.
    #[test]
    fn test_find_naf_length() {
        let c = BigInteger256([0x9d797039be763ba8, 0x1, 0, 0]);
        assert_eq!(c.find_naf().len(), 66);
    }
}
