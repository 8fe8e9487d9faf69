use crate::{
    bytes::{FromBytes, ToBytes},
    fields::{BitIterator, Field, Fp2, Fp2Parameters},
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

/// Parameters of a cubic extension F6 = F2[v]/(v^3 - NONRESIDUE) on top of a
/// quadratic one.
pub trait Fp6Parameters: 'static + Send + Sync {
    type Fp2Params: Fp2Parameters;

    /// The cubic non-residue of F2 defining the extension.
    const NONRESIDUE: Fp2<Self::Fp2Params>;

    /// Coefficients of the Frobenius automorphism: NONRESIDUE^((p^i - 1)/3)
    /// for i = 0, ..., 5.
    const FROBENIUS_COEFF_FP6_C1: [Fp2<Self::Fp2Params>; 6];

    /// NONRESIDUE^((2 p^i - 2)/3) for i = 0, ..., 5.
    const FROBENIUS_COEFF_FP6_C2: [Fp2<Self::Fp2Params>; 6];

    /// A multiplication by the cubic non-residue.
    #[inline(always)]
    fn mul_fp2_by_nonresidue(fe: &Fp2<Self::Fp2Params>) -> Fp2<Self::Fp2Params> {
        Self::NONRESIDUE * fe
    }
}

/// Element B0 + B1 * v + B2 * v^2 of the cubic extension.
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
pub struct Fp6<P: Fp6Parameters> {
    pub c0: Fp2<P::Fp2Params>,
    pub c1: Fp2<P::Fp2Params>,
    pub c2: Fp2<P::Fp2Params>,
    #[derivative(Debug = "ignore")]
    _parameters: PhantomData<P>,
}

type BaseFp<P> = <<P as Fp6Parameters>::Fp2Params as Fp2Parameters>::Fp;

impl<P: Fp6Parameters> Fp6<P> {
    #[inline]
    pub const fn new(
        c0: Fp2<P::Fp2Params>,
        c1: Fp2<P::Fp2Params>,
        c2: Fp2<P::Fp2Params>,
    ) -> Self {
        Fp6 {
            c0,
            c1,
            c2,
            _parameters: PhantomData,
        }
    }

    /// Multiply by the generator v of the next tower layer: (B0, B1, B2)
    /// becomes (NONRESIDUE * B2, B0, B1).
    pub fn mul_by_nonresidue(&mut self) {
        use std::mem::swap;
        swap(&mut self.c0, &mut self.c1);
        swap(&mut self.c0, &mut self.c2);
        self.c0 = P::mul_fp2_by_nonresidue(&self.c0);
    }

    /// Multiply by an element of F2, i.e. by an F6 element whose B1 and B2
    /// coordinates vanish.
    pub fn mul_by_fp2(&mut self, element: &Fp2<P::Fp2Params>) {
        self.c0.mul_assign(element);
        self.c1.mul_assign(element);
        self.c2.mul_assign(element);
    }

    /// Multiply by an element of the base prime field.
    pub fn mul_by_fp(&mut self, element: &BaseFp<P>) {
        self.c0.mul_by_fp(element);
        self.c1.mul_by_fp(element);
        self.c2.mul_by_fp(element);
    }

    /// The conjugate over the cubic subfield Fp3 = Fp[v^2]: negates the
    /// coordinates of the odd powers of v. On the cyclotomic subgroup of F6
    /// this coincides with both Frobenius^3 and the inverse.
    pub fn conjugate(&mut self) {
        self.c0.c1 = -self.c0.c1;
        self.c1.c0 = -self.c1.c0;
        self.c2.c1 = -self.c2.c1;
    }

    /// The inverse of a cyclotomic-subgroup element, by conjugation.
    /// Incorrect outside of the cyclotomic subgroup.
    pub fn unitary_inverse(&self) -> Self {
        let mut result = *self;
        result.conjugate();
        result
    }

    /// Faster squaring for elements of the cyclotomic subgroup, exploiting
    /// z * conj(z) = 1.
    ///
    /// In the quadratic-over-cubic regrouping F6 = Fp3[v], Fp3 = Fp[s] with
    /// s = v^2 and s^3 = NONRESIDUE of F2, a cyclotomic z = a + b*v satisfies
    /// a^2 - s*b^2 = 1, so that z^2 = (2a^2 - 1) + 2ab*v.
    pub fn cyclotomic_square(&self) -> Self {
        let beta = <P::Fp2Params as Fp2Parameters>::NONRESIDUE;

        // Coordinates of self in the Fp3[v] basis.
        let a = (self.c0.c0, self.c2.c0, self.c1.c1);
        let b = (self.c1.c0, self.c0.c1, self.c2.c1);

        let a2 = Self::fp3_mul(&a, &a, &beta);
        let ab = Self::fp3_mul(&a, &b, &beta);

        let mut r = Fp6::<P>::default();
        r.c0.c0 = a2.0.double() - &<P::Fp2Params as Fp2Parameters>::Fp::one();
        r.c2.c0 = a2.1.double();
        r.c1.c1 = a2.2.double();
        r.c1.c0 = ab.0.double();
        r.c0.c1 = ab.1.double();
        r.c2.c1 = ab.2.double();
        r
    }

    // Karatsuba multiplication in Fp3 = Fp[s]/(s^3 - beta), on raw coordinate
    // triples of the cyclotomic regrouping.
    #[inline]
    fn fp3_mul(
        a: &(BaseFp<P>, BaseFp<P>, BaseFp<P>),
        b: &(BaseFp<P>, BaseFp<P>, BaseFp<P>),
        beta: &BaseFp<P>,
    ) -> (BaseFp<P>, BaseFp<P>, BaseFp<P>) {
        let v0 = a.0 * &b.0;
        let v1 = a.1 * &b.1;
        let v2 = a.2 * &b.2;

        let c0 = v0 + &(*beta * &((a.1 + &a.2) * &(b.1 + &b.2) - &v1 - &v2));
        let c1 = (a.0 + &a.1) * &(b.0 + &b.1) - &v0 - &v1 + &(*beta * &v2);
        let c2 = (a.0 + &a.2) * &(b.0 + &b.2) - &v0 - &v2 + &v1;
        (c0, c1, c2)
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

impl<P: Fp6Parameters> Field for Fp6<P> {
    #[inline]
    fn zero() -> Self {
        Fp6::new(Fp2::zero(), Fp2::zero(), Fp2::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
    }

    #[inline]
    fn one() -> Self {
        Fp6::new(Fp2::one(), Fp2::zero(), Fp2::zero())
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero() && self.c2.is_zero()
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
        self.c2.double_in_place();
        self
    }

    #[inline]
    fn square(&self) -> Self {
        let mut result = *self;
        result.square_in_place();
        result
    }

    fn square_in_place(&mut self) -> &mut Self {
        // Chung-Hasan SQR2.
        let s0 = self.c0.square();
        let ab = self.c0 * &self.c1;
        let s1 = ab.double();
        let s2 = (self.c0 - &self.c1 + &self.c2).square();
        let bc = self.c1 * &self.c2;
        let s3 = bc.double();
        let s4 = self.c2.square();

        self.c0 = s0 + &P::mul_fp2_by_nonresidue(&s3);
        self.c1 = s1 + &P::mul_fp2_by_nonresidue(&s4);
        self.c2 = s1 + &s2 + &s3 - &s0 - &s4;
        self
    }

    fn inverse(&self) -> Option<Self> {
        // From "Multiplication and Squaring on Pairing-Friendly Fields",
        // section 4 (the norm to F2 of degree 3 extensions).
        let t0 = self.c0.square() - &P::mul_fp2_by_nonresidue(&(self.c1 * &self.c2));
        let t1 = P::mul_fp2_by_nonresidue(&self.c2.square()) - &(self.c0 * &self.c1);
        let t2 = self.c1.square() - &(self.c0 * &self.c2);

        let norm = self.c0 * &t0
            + &P::mul_fp2_by_nonresidue(&(self.c2 * &t1))
            + &P::mul_fp2_by_nonresidue(&(self.c1 * &t2));
        norm.inverse().map(|n| Fp6::new(t0 * &n, t1 * &n, t2 * &n))
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
        self.c2.frobenius_map(power);

        self.c1.mul_assign(&P::FROBENIUS_COEFF_FP6_C1[power % 6]);
        self.c2.mul_assign(&P::FROBENIUS_COEFF_FP6_C2[power % 6]);
    }
}

impl<P: Fp6Parameters> Display for Fp6<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Fp6({} + {} * v + {} * v^2)", self.c0, self.c1, self.c2)
    }
}

impl<P: Fp6Parameters> Distribution<Fp6<P>> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp6<P> {
        Fp6::new(
            UniformRand::rand(rng),
            UniformRand::rand(rng),
            UniformRand::rand(rng),
        )
    }
}

impl<P: Fp6Parameters> Neg for Fp6<P> {
    type Output = Self;

    #[inline]
    #[must_use]
    fn neg(self) -> Self {
        Fp6::new(-self.c0, -self.c1, -self.c2)
    }
}

impl<P: Fp6Parameters> ToBytes for Fp6<P> {
    #[inline]
    fn write<W: Write>(&self, mut writer: W) -> IoResult<()> {
        self.c0.write(&mut writer)?;
        self.c1.write(&mut writer)?;
        self.c2.write(writer)
    }
}

impl<P: Fp6Parameters> FromBytes for Fp6<P> {
    #[inline]
    fn read<R: Read>(mut reader: R) -> IoResult<Self> {
        let c0 = Fp2::read(&mut reader)?;
        let c1 = Fp2::read(&mut reader)?;
        let c2 = Fp2::read(reader)?;
        Ok(Fp6::new(c0, c1, c2))
    }
}

impl<'a, P: Fp6Parameters> AddAssign<&'a Self> for Fp6<P> {
    #[inline]
    fn add_assign(&mut self, other: &Self) {
        self.c0.add_assign(&other.c0);
        self.c1.add_assign(&other.c1);
        self.c2.add_assign(&other.c2);
    }
}

impl<'a, P: Fp6Parameters> SubAssign<&'a Self> for Fp6<P> {
    #[inline]
    fn sub_assign(&mut self, other: &Self) {
        self.c0.sub_assign(&other.c0);
        self.c1.sub_assign(&other.c1);
        self.c2.sub_assign(&other.c2);
    }
}

impl<'a, P: Fp6Parameters> MulAssign<&'a Self> for Fp6<P> {
    fn mul_assign(&mut self, other: &Self) {
        // Toom-Cook-like interpolation with three coordinate products
        // (Karatsuba for cubic extensions).
        let v0 = self.c0 * &other.c0;
        let v1 = self.c1 * &other.c1;
        let v2 = self.c2 * &other.c2;

        let c0 = v0
            + &P::mul_fp2_by_nonresidue(
                &((self.c1 + &self.c2) * &(other.c1 + &other.c2) - &v1 - &v2),
            );
        let c1 = (self.c0 + &self.c1) * &(other.c0 + &other.c1) - &v0 - &v1
            + &P::mul_fp2_by_nonresidue(&v2);
        let c2 = (self.c0 + &self.c2) * &(other.c0 + &other.c2) - &v0 - &v2 + &v1;

        self.c0 = c0;
        self.c1 = c1;
        self.c2 = c2;
    }
}

impl_ops_from_ref!(Fp6, Fp6Parameters);
