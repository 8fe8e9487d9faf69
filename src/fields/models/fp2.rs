use crate::{
    bytes::{FromBytes, ToBytes},
    fields::{Field, PrimeField},
    UniformRand,
};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    io::{Read, Result as IoResult, Write},
    marker::PhantomData,
    ops::{AddAssign, MulAssign, Neg, SubAssign},
};

/// Parameters of a quadratic extension F2 = Fp[u]/(u^2 - NONRESIDUE).
pub trait Fp2Parameters: 'static + Send + Sync {
    type Fp: PrimeField;

    /// The quadratic non-residue defining the extension.
    const NONRESIDUE: Self::Fp;

    /// The inverse of the non-residue, as consumed by the sparse multipliers
    /// of the degree 6 embedding field.
    const NONRESIDUE_INV: Self::Fp;

    /// Coefficients of the Frobenius automorphism: NONRESIDUE^((p^i - 1)/2)
    /// for i = 0, 1.
    const FROBENIUS_COEFF_FP2_C1: [Self::Fp; 2];

    /// A multiplication by the non-residue; cheaper than a generic `Fp`
    /// multiplication for the small non-residues of the supported curves.
    #[inline(always)]
    fn mul_fp_by_nonresidue(fe: &Self::Fp) -> Self::Fp {
        Self::NONRESIDUE * fe
    }
}

/// Element A0 + A1 * u of the quadratic extension.
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
pub struct Fp2<P: Fp2Parameters> {
    pub c0: P::Fp,
    pub c1: P::Fp,
    #[derivative(Debug = "ignore")]
    _parameters: PhantomData<P>,
}

impl<P: Fp2Parameters> Fp2<P> {
    #[inline]
    pub const fn new(c0: P::Fp, c1: P::Fp) -> Self {
        Fp2 {
            c0,
            c1,
            _parameters: PhantomData,
        }
    }

    /// Multiply by an element of the base field.
    pub fn mul_by_fp(&mut self, element: &P::Fp) {
        self.c0.mul_assign(element);
        self.c1.mul_assign(element);
    }

    /// Negate the imaginary coordinate, i.e. apply the non-trivial
    /// automorphism of the extension.
    pub fn conjugate(&mut self) {
        self.c1 = -self.c1;
    }
}

impl<P: Fp2Parameters> Field for Fp2<P> {
    #[inline]
    fn zero() -> Self {
        Fp2::new(P::Fp::zero(), P::Fp::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    #[inline]
    fn one() -> Self {
        Fp2::new(P::Fp::one(), P::Fp::zero())
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero()
    }

    #[inline]
    fn double(&self) -> Self {
        let mut result = *self;
        result.double_in_place();
        result
    }

    #[inline]
    fn double_in_place(&mut self) -> &mut Self {
        self.c0.double_in_place();
        self.c1.double_in_place();
        self
    }

    #[inline]
    fn square(&self) -> Self {
        let mut result = *self;
        result.square_in_place();
        result
    }

    fn square_in_place(&mut self) -> &mut Self {
        // (c0, c1)^2 = (c0 + u*c1)^2 with the complex squaring identity:
        //   v0 = (c0 - c1) * (c0 - NONRESIDUE * c1)
        //   c0' = v0 + (1 + NONRESIDUE) * c0*c1,  c1' = 2 c0*c1
        let mut v0 = self.c0 - &self.c1;
        let v3 = self.c0 - &P::mul_fp_by_nonresidue(&self.c1);
        let v2 = self.c0 * &self.c1;
        v0 *= &v3;
        self.c1 = v2.double();
        self.c0 = v0 + &v2 + &P::mul_fp_by_nonresidue(&v2);
        self
    }

    fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            // (A0 - A1*u) / (A0^2 - NONRESIDUE * A1^2)
            let v1 = self.c1.square();
            let v0 = self.c0.square() - &P::mul_fp_by_nonresidue(&v1);
            v0.inverse().map(|v1| {
                let c0 = self.c0 * &v1;
                let c1 = -(self.c1 * &v1);
                Self::new(c0, c1)
            })
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

    fn frobenius_map(&mut self, power: usize) {
        self.c1.mul_assign(&P::FROBENIUS_COEFF_FP2_C1[power % 2]);
    }
}

impl<P: Fp2Parameters> Display for Fp2<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Fp2({} + {} * u)", self.c0, self.c1)
    }
}

impl<P: Fp2Parameters> Distribution<Fp2<P>> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp2<P> {
        Fp2::new(UniformRand::rand(rng), UniformRand::rand(rng))
    }
}

impl<P: Fp2Parameters> Neg for Fp2<P> {
    type Output = Self;

    #[inline]
    #[must_use]
    fn neg(self) -> Self {
        Self::new(-self.c0, -self.c1)
    }
}

impl<P: Fp2Parameters> ToBytes for Fp2<P> {
    #[inline]
    fn write<W: Write>(&self, mut writer: W) -> IoResult<()> {
        self.c0.write(&mut writer)?;
        self.c1.write(writer)
    }
}

impl<P: Fp2Parameters> FromBytes for Fp2<P> {
    #[inline]
    fn read<R: Read>(mut reader: R) -> IoResult<Self> {
        let c0 = P::Fp::read(&mut reader)?;
        let c1 = P::Fp::read(reader)?;
        Ok(Fp2::new(c0, c1))
    }
}

impl<'a, P: Fp2Parameters> AddAssign<&'a Self> for Fp2<P> {
    #[inline]
    fn add_assign(&mut self, other: &Self) {
        self.c0.add_assign(&other.c0);
        self.c1.add_assign(&other.c1);
    }
}

impl<'a, P: Fp2Parameters> SubAssign<&'a Self> for Fp2<P> {
    #[inline]
    fn sub_assign(&mut self, other: &Self) {
        self.c0.sub_assign(&other.c0);
        self.c1.sub_assign(&other.c1);
    }
}

impl<'a, P: Fp2Parameters> MulAssign<&'a Self> for Fp2<P> {
    fn mul_assign(&mut self, other: &Self) {
        // Karatsuba: three base field multiplications.
        let v0 = self.c0 * &other.c0;
        let v1 = self.c1 * &other.c1;

        self.c1 += &self.c0;
        self.c1 *= &(other.c0 + &other.c1);
        self.c1 -= &v0;
        self.c1 -= &v1;
        self.c0 = v0 + &P::mul_fp_by_nonresidue(&v1);
    }
}

impl_ops_from_ref!(Fp2, Fp2Parameters);
