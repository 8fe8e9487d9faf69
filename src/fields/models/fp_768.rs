use crate::{
    biginteger::{arithmetic as fa, BigInteger as _BigInteger, BigInteger768 as BigInteger},
    bytes::{FromBytes, ToBytes},
    fields::{Field, FpParameters, PrimeField},
};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use std::{
    cmp::Ordering,
    fmt::{Display, Formatter, Result as FmtResult},
    io::{Read, Result as IoResult, Write},
    marker::PhantomData,
    ops::{AddAssign, MulAssign, Neg, SubAssign},
    str::FromStr,
};
use unroll::unroll_for_loops;

pub trait Fp768Parameters: FpParameters<BigInt = BigInteger> {}

/// An element of a prime field of at most 762 bits, in Montgomery
/// representation: `Fp768(c)` stands for the residue class of `c / R`,
/// with `R = 2^768 mod p`.
#[derive(Derivative)]
#[derivative(
    Default(bound = ""),
    Hash(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Debug(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
pub struct Fp768<P>(
    pub BigInteger,
    #[derivative(Debug = "ignore")] PhantomData<P>,
);

impl<P> Fp768<P> {
    #[inline]
    pub const fn new(element: BigInteger) -> Self {
        Fp768(element, PhantomData)
    }
}

impl<P: Fp768Parameters> Fp768<P> {
    #[inline]
    fn is_valid(&self) -> bool {
        self.0 < P::MODULUS
    }

    #[inline]
    fn reduce(&mut self) {
        if !self.is_valid() {
            self.0.sub_noborrow(&P::MODULUS);
        }
    }

    #[inline]
    #[unroll_for_loops]
    fn mont_reduce(&mut self, r: &mut [u64; 24]) {
        // Montgomery reduction of the double-width product, interleaving
        // the elimination of the low limbs with the carry chain of the high
        // half.
        let mut carry2 = 0;
        for i in 0..12 {
            let k = r[i].wrapping_mul(P::INV);
            let mut carry = 0;
            fa::mac_with_carry(r[i], k, P::MODULUS.0[0], &mut carry);
            for j in 1..12 {
                r[i + j] = fa::mac_with_carry(r[i + j], k, P::MODULUS.0[j], &mut carry);
            }
            r[12 + i] = fa::adc(r[12 + i], carry2, &mut carry);
            carry2 = carry;
        }
        (self.0).0.copy_from_slice(&r[12..]);
        self.reduce();
    }
}

impl<P: Fp768Parameters> Field for Fp768<P> {
    #[inline]
    fn zero() -> Self {
        Fp768::new(BigInteger::default())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    fn one() -> Self {
        Fp768::new(P::R)
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.0 == P::R
    }

    #[inline]
    fn double(&self) -> Self {
        let mut temp = *self;
        temp.double_in_place();
        temp
    }

    #[inline]
    fn double_in_place(&mut self) -> &mut Self {
        self.0.mul2();
        self.reduce();
        self
    }

    #[inline]
    fn square(&self) -> Self {
        let mut temp = *self;
        temp.square_in_place();
        temp
    }

    #[unroll_for_loops]
    fn square_in_place(&mut self) -> &mut Self {
        // Schoolbook squaring over the upper triangle, doubled, plus the
        // diagonal, followed by a fused Montgomery reduction.
        let mut r = [0u64; 24];

        let mut carry = 0;
        for i in 0..11 {
            for j in (i + 1)..12 {
                r[i + j] = fa::mac_with_carry(r[i + j], (self.0).0[i], (self.0).0[j], &mut carry);
            }
            r[12 + i] = carry;
            carry = 0;
        }
        r[23] = r[22] >> 63;
        for i in (2..23).rev() {
            r[i] = (r[i] << 1) | (r[i - 1] >> 63);
        }
        r[1] <<= 1;

        for i in 0..12 {
            r[2 * i] = fa::mac_with_carry(r[2 * i], (self.0).0[i], (self.0).0[i], &mut carry);
            r[2 * i + 1] = fa::adc(r[2 * i + 1], 0, &mut carry);
        }
        self.mont_reduce(&mut r);
        self
    }

    #[inline]
    fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            // Guajardo, Kumar, Paar, Pelzl. Efficient software implementation
            // of finite fields with applications to cryptography.
            // Algorithm 16 (BEA for inversion in Fp).
            let one = BigInteger::from(1);

            let mut u = self.0;
            let mut v = P::MODULUS;
            let mut b = Fp768::<P>::new(P::R2); // Avoids unnecessary reduction step.
            let mut c = Self::zero();

            while u != one && v != one {
                while u.is_even() {
                    u.div2();

                    if b.0.is_even() {
                        b.0.div2();
                    } else {
                        b.0.add_nocarry(&P::MODULUS);
                        b.0.div2();
                    }
                }

                while v.is_even() {
                    v.div2();

                    if c.0.is_even() {
                        c.0.div2();
                    } else {
                        c.0.add_nocarry(&P::MODULUS);
                        c.0.div2();
                    }
                }

                if v < u {
                    u.sub_noborrow(&v);
                    b -= &c;
                } else {
                    v.sub_noborrow(&u);
                    c -= &b;
                }
            }

            if u == one {
                Some(b)
            } else {
                Some(c)
            }
        }
    }

    fn inverse_in_place(&mut self) -> Option<&mut Self> {
        if let Some(inverse) = self.inverse() {
            *self = inverse;
            Some(self)
        } else {
            None
        }
    }

    /// The Frobenius map is the identity on the prime field.
    #[inline]
    fn frobenius_map(&mut self, _: usize) {}
}

impl<P: Fp768Parameters> PrimeField for Fp768<P> {
    type Params = P;
    type BigInt = BigInteger;

    #[inline]
    fn from_repr(r: BigInteger) -> Self {
        let mut r_new = Fp768::new(r);
        if r_new.is_valid() {
            r_new.mul_assign(&Fp768::new(P::R2));
            r_new
        } else {
            Self::zero()
        }
    }

    #[inline]
    fn into_repr(&self) -> BigInteger {
        let mut tmp = *self;
        let mut r = [0u64; 24];
        r[..12].copy_from_slice(&(tmp.0).0);
        tmp.mont_reduce(&mut r);
        tmp.0
    }
}

impl<P: Fp768Parameters> Ord for Fp768<P> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.into_repr().cmp(&other.into_repr())
    }
}

impl<P: Fp768Parameters> PartialOrd for Fp768<P> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Fp768Parameters> From<BigInteger> for Fp768<P> {
    fn from(repr: BigInteger) -> Self {
        Self::from_repr(repr)
    }
}

impl<P: Fp768Parameters> From<u64> for Fp768<P> {
    fn from(val: u64) -> Self {
        Self::from_repr(BigInteger::from(val))
    }
}

impl<P: Fp768Parameters> ToBytes for Fp768<P> {
    #[inline]
    fn write<W: Write>(&self, writer: W) -> IoResult<()> {
        self.into_repr().write(writer)
    }
}

impl<P: Fp768Parameters> FromBytes for Fp768<P> {
    #[inline]
    fn read<R: Read>(reader: R) -> IoResult<Self> {
        BigInteger::read(reader).map(Fp768::from_repr)
    }
}

impl<P: Fp768Parameters> FromStr for Fp768<P> {
    type Err = ();

    /// Interpret a string of numbers as a (congruent) prime field element.
    /// Does not accept unnecessary leading zeroes or a blank string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(());
        }

        if s == "0" {
            return Ok(Self::zero());
        }

        let mut res = Self::zero();

        let ten = Self::from_repr(BigInteger::from(10));

        let mut first_digit = true;

        for c in s.chars() {
            match c.to_digit(10) {
                Some(c) => {
                    if first_digit {
                        if c == 0 {
                            return Err(());
                        }

                        first_digit = false;
                    }

                    res.mul_assign(&ten);
                    res.add_assign(&Self::from_repr(BigInteger::from(u64::from(c))));
                }
                None => return Err(()),
            }
        }
        if !res.is_valid() {
            Err(())
        } else {
            Ok(res)
        }
    }
}

impl<P: Fp768Parameters> Display for Fp768<P> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Fp768({})", self.into_repr())
    }
}

impl<P: Fp768Parameters> Neg for Fp768<P> {
    type Output = Self;

    #[inline]
    #[must_use]
    fn neg(self) -> Self {
        if !self.is_zero() {
            let mut tmp = P::MODULUS;
            tmp.sub_noborrow(&self.0);
            Fp768::new(tmp)
        } else {
            self
        }
    }
}

impl<'a, P: Fp768Parameters> AddAssign<&'a Self> for Fp768<P> {
    #[inline]
    fn add_assign(&mut self, other: &Self) {
        self.0.add_nocarry(&other.0);
        self.reduce();
    }
}

impl<'a, P: Fp768Parameters> SubAssign<&'a Self> for Fp768<P> {
    #[inline]
    fn sub_assign(&mut self, other: &Self) {
        // If `other` is larger than `self`, add the modulus to self first.
        if other.0 > self.0 {
            self.0.add_nocarry(&P::MODULUS);
        }
        self.0.sub_noborrow(&other.0);
    }
}

impl<'a, P: Fp768Parameters> MulAssign<&'a Self> for Fp768<P> {
    #[inline]
    #[unroll_for_loops]
    fn mul_assign(&mut self, other: &Self) {
        // Operand scanning schoolbook multiplication into the double-width
        // buffer, then a fused Montgomery reduction.
        let mut r = [0u64; 24];

        for i in 0..12 {
            let mut carry = 0;
            for j in 0..12 {
                r[i + j] = fa::mac_with_carry(r[i + j], (self.0).0[i], (other.0).0[j], &mut carry);
            }
            r[12 + i] = carry;
        }
        self.mont_reduce(&mut r);
    }
}

impl_ops_from_ref!(Fp768, Fp768Parameters);

impl<P: Fp768Parameters> Distribution<Fp768<P>> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp768<P> {
        loop {
            let mut tmp = Fp768::new(rng.sample(Standard));
            // Mask away the unused most-significant bits.
            tmp.0.as_mut()[11] &= u64::max_value() >> P::REPR_SHAVE_BITS;

            if tmp.is_valid() {
                return tmp;
            }
        }
    }
}
