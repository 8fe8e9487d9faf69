use crate::{
    bytes::{FromBytes, ToBytes},
    fields::{BitIterator, Field, Fp2, Fp2Parameters, Fp6, Fp6Parameters},
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

type Fp2Params<P> = <<P as Fp12Parameters>::Fp6Params as Fp6Parameters>::Fp2Params;

/// Parameters of the quadratic extension F12 = F6[w]/(w^2 - v) on top of the
/// degree 6 tower.
pub trait Fp12Parameters: 'static + Send + Sync {
    type Fp6Params: Fp6Parameters;

    /// Coefficients of the Frobenius automorphism, living in F2:
    /// NONRESIDUE^((p^i - 1)/6) for i = 0, ..., 11, where NONRESIDUE is the
    /// cubic non-residue of the F6 layer.
    const FROBENIUS_COEFF_FP12_C1: [Fp2<Fp2Params<Self>>; 12];

    /// Multiply an F6 element by the quadratic non-residue w^2 = v.
    #[inline(always)]
    fn mul_fp6_by_nonresidue(fe: &Fp6<Self::Fp6Params>) -> Fp6<Self::Fp6Params> {
        let mut result = *fe;
        result.mul_by_nonresidue();
        result
    }
}

/// Element C0 + C1 * w of the embedding field.
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
pub struct Fp12<P: Fp12Parameters> {
    pub c0: Fp6<P::Fp6Params>,
    pub c1: Fp6<P::Fp6Params>,
    #[derivative(Debug = "ignore")]
    _parameters: PhantomData<P>,
}

impl<P: Fp12Parameters> Fp12<P> {
    #[inline]
    pub const fn new(c0: Fp6<P::Fp6Params>, c1: Fp6<P::Fp6Params>) -> Self {
        Fp12 {
            c0,
            c1,
            _parameters: PhantomData,
        }
    }

    /// Negate the C1 coordinate. On the cyclotomic subgroup this coincides
    /// with Frobenius^6 and hence with the inverse.
    pub fn conjugate(&mut self) {
        self.c1 = -self.c1;
    }

    /// The inverse of a cyclotomic-subgroup element, by conjugation.
    /// Incorrect outside of the cyclotomic subgroup.
    pub fn unitary_inverse(&self) -> Self {
        let mut result = *self;
        result.conjugate();
        result
    }

    /// Multiply by the sparse element y*v*w, i.e. the F12 element whose only
    /// non-vanishing F2 coordinate is C1.B1 = y. Costs 13 base field
    /// multiplications instead of the 54 of a generic product.
    pub fn mul_by_vw(&self, y: &Fp2<Fp2Params<P>>) -> Self {
        let ynr = P::Fp6Params::mul_fp2_by_nonresidue(y);
        let mut result = Self::default();
        result.c0.c0 = self.c1.c1 * &ynr;
        result.c0.c1 = self.c1.c2 * &ynr;
        result.c0.c2 = self.c1.c0 * y;
        result.c1.c0 = self.c0.c2 * &ynr;
        result.c1.c1 = self.c0.c0 * y;
        result.c1.c2 = self.c0.c1 * y;
        result
    }

    /// Multiply by the sparse element y*v (only C0.B1 = y non-zero).
    pub fn mul_by_v(&self, y: &Fp2<Fp2Params<P>>) -> Self {
        let ynr = P::Fp6Params::mul_fp2_by_nonresidue(y);
        let mut result = Self::default();
        result.c0.c0 = self.c0.c2 * &ynr;
        result.c0.c1 = self.c0.c0 * y;
        result.c0.c2 = self.c0.c1 * y;
        result.c1.c0 = self.c1.c2 * &ynr;
        result.c1.c1 = self.c1.c0 * y;
        result.c1.c2 = self.c1.c1 * y;
        result
    }

    /// Multiply by the sparse element y*v^2*w (only C1.B2 = y non-zero).
    pub fn mul_by_v2w(&self, y: &Fp2<Fp2Params<P>>) -> Self {
        let ynr = P::Fp6Params::mul_fp2_by_nonresidue(y);
        let mut result = Self::default();
        result.c0.c0 = self.c1.c0 * &ynr;
        result.c0.c1 = self.c1.c1 * &ynr;
        result.c0.c2 = self.c1.c2 * &ynr;
        result.c1.c0 = self.c0.c1 * &ynr;
        result.c1.c1 = self.c0.c2 * &ynr;
        result.c1.c2 = self.c0.c0 * y;
        result
    }

    /// Faster squaring for elements of the cyclotomic subgroup.
    ///
    /// Following Granger-Scott, "Faster Squaring in the Cyclotomic Subgroup
    /// of Sixth Degree Extensions".
    pub fn cyclotomic_square(&self) -> Self {
        let fp2_nr = <P::Fp6Params as Fp6Parameters>::mul_fp2_by_nonresidue;

        let mut z0 = self.c0.c0;
        let mut z4 = self.c0.c1;
        let mut z3 = self.c0.c2;
        let mut z2 = self.c1.c0;
        let mut z1 = self.c1.c1;
        let mut z5 = self.c1.c2;

        let mut result = Self::default();

        // t0 + t1*y = (z0 + z1*y)^2 = a^2
        let mut tmp = z0 * &z1;
        let t0 = (z0 + &z1) * &(z0 + &fp2_nr(&z1)) - &tmp - &fp2_nr(&tmp);
        let t1 = tmp.double();

        // t2 + t3*y = (z2 + z3*y)^2 = b^2
        tmp = z2 * &z3;
        let t2 = (z2 + &z3) * &(z2 + &fp2_nr(&z3)) - &tmp - &fp2_nr(&tmp);
        let t3 = tmp.double();

        // t4 + t5*y = (z4 + z5*y)^2 = c^2
        tmp = z4 * &z5;
        let t4 = (z4 + &z5) * &(z4 + &fp2_nr(&z5)) - &tmp - &fp2_nr(&tmp);
        let t5 = tmp.double();

        // for A
        // z0 = 3 * t0 - 2 * z0
        z0 = t0 - &z0;
        z0 = z0 + &z0;
        result.c0.c0 = z0 + &t0;

        // z1 = 3 * t1 + 2 * z1
        z1 = t1 + &z1;
        z1 = z1 + &z1;
        result.c1.c1 = z1 + &t1;

        // for B
        // z2 = 3 * (xi * t5) + 2 * z2
        tmp = fp2_nr(&t5);
        z2 = tmp + &z2;
        z2 = z2 + &z2;
        result.c1.c0 = z2 + &tmp;

        // z3 = 3 * t4 - 2 * z3
        z3 = t4 - &z3;
        z3 = z3 + &z3;
        result.c0.c2 = z3 + &t4;

        // for C
        // z4 = 3 * t2 - 2 * z4
        z4 = t2 - &z4;
        z4 = z4 + &z4;
        result.c0.c1 = z4 + &t2;

        // z5 = 3 * t3 + 2 * z5
        z5 = t3 + &z5;
        z5 = z5 + &z5;
        result.c1.c2 = z5 + &t3;

        result
    }

    /// Exponentiation in the cyclotomic subgroup, with fast squarings.
    #[must_use]
    pub fn cyclotomic_exp<S: AsRef<[u64]>>(&self, exp: S) -> Self {
        let mut res = Self::one();
        let mut found_one = false;

        for i in BitIterator::new(exp) {
            if found_one {
                res = res.cyclotomic_square();
            }
            if i {
                found_one = true;
                res *= self;
            }
        }
        res
    }
}

impl<P: Fp12Parameters> Field for Fp12<P> {
    #[inline]
    fn zero() -> Self {
        Fp12::new(Fp6::zero(), Fp6::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    #[inline]
    fn one() -> Self {
        Fp12::new(Fp6::one(), Fp6::zero())
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
        // Complex squaring over F6.
        let v0 = self.c0 - &self.c1;
        let v3 = self.c0 - &P::mul_fp6_by_nonresidue(&self.c1);
        let v2 = self.c0 * &self.c1;
        let v0 = v0 * &v3 + &v2;
        self.c1 = v2.double();
        self.c0 = v0 + &P::mul_fp6_by_nonresidue(&v2);
        self
    }

    fn inverse(&self) -> Option<Self> {
        // (C0 - C1*w) / (C0^2 - v*C1^2)
        let v1 = self.c1.square();
        let v0 = self.c0.square() - &P::mul_fp6_by_nonresidue(&v1);
        v0.inverse().map(|v1| {
            let c0 = self.c0 * &v1;
            let c1 = -(self.c1 * &v1);
            Self::new(c0, c1)
        })
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
        self.c0.frobenius_map(power);
        self.c1.frobenius_map(power);
        self.c1
            .mul_by_fp2(&P::FROBENIUS_COEFF_FP12_C1[power % 12]);
    }
}

impl<P: Fp12Parameters> Display for Fp12<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Fp12({} + {} * w)", self.c0, self.c1)
    }
}

impl<P: Fp12Parameters> Distribution<Fp12<P>> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp12<P> {
        Fp12::new(UniformRand::rand(rng), UniformRand::rand(rng))
    }
}

impl<P: Fp12Parameters> Neg for Fp12<P> {
    type Output = Self;

    #[inline]
    #[must_use]
    fn neg(self) -> Self {
        Fp12::new(-self.c0, -self.c1)
    }
}

impl<P: Fp12Parameters> ToBytes for Fp12<P> {
    #[inline]
    fn write<W: Write>(&self, mut writer: W) -> IoResult<()> {
        self.c0.write(&mut writer)?;
        self.c1.write(writer)
    }
}

impl<P: Fp12Parameters> FromBytes for Fp12<P> {
    #[inline]
    fn read<R: Read>(mut reader: R) -> IoResult<Self> {
        let c0 = Fp6::read(&mut reader)?;
        let c1 = Fp6::read(reader)?;
        Ok(Fp12::new(c0, c1))
    }
}

impl<'a, P: Fp12Parameters> AddAssign<&'a Self> for Fp12<P> {
    #[inline]
    fn add_assign(&mut self, other: &Self) {
        self.c0.add_assign(&other.c0);
        self.c1.add_assign(&other.c1);
    }
}

impl<'a, P: Fp12Parameters> SubAssign<&'a Self> for Fp12<P> {
    #[inline]
    fn sub_assign(&mut self, other: &Self) {
        self.c0.sub_assign(&other.c0);
        self.c1.sub_assign(&other.c1);
    }
}

impl<'a, P: Fp12Parameters> MulAssign<&'a Self> for Fp12<P> {
    fn mul_assign(&mut self, other: &Self) {
        // Karatsuba: three F6 multiplications.
        let v0 = self.c0 * &other.c0;
        let v1 = self.c1 * &other.c1;

        self.c1 += &self.c0;
        self.c1 *= &(other.c0 + &other.c1);
        self.c1 -= &v0;
        self.c1 -= &v1;
        self.c0 = v0 + &P::mul_fp6_by_nonresidue(&v1);
    }
}

impl_ops_from_ref!(Fp12, Fp12Parameters);
