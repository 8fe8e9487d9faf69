//! Trait interfaces of the source groups and pairing engines, the short
//! Weierstrass group model they build on, and the supported curves.

use crate::{
    bytes::{FromBytes, ToBytes},
    fields::{Field, PrimeField},
    UniformRand,
};
use std::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

pub mod models;
pub use self::models::*;

#[cfg(feature = "bls12_377")]
pub mod bls12_377;

#[cfg(feature = "bw6_761")]
pub mod bw6_761;

#[cfg(test)]
pub mod tests;

/// A bilinear pairing e: G1 x G2 -> GT, split into its Miller loop and final
/// exponentiation stages.
pub trait PairingEngine: Sized + 'static + Copy + Debug + Send + Sync {
    /// The prime order of the pairing groups.
    type Fr: PrimeField;
    /// G1 in Jacobian coordinates.
    type G1Projective: ProjectiveCurve<
        BaseField = Self::Fq,
        ScalarField = Self::Fr,
        Affine = Self::G1Affine,
    >;
    /// G1 in affine coordinates.
    type G1Affine: AffineCurve<
        BaseField = Self::Fq,
        ScalarField = Self::Fr,
        Projective = Self::G1Projective,
    >;
    /// G2 in Jacobian coordinates.
    type G2Projective: ProjectiveCurve<
        BaseField = Self::Fqe,
        ScalarField = Self::Fr,
        Affine = Self::G2Affine,
    >;
    /// G2 in affine coordinates.
    type G2Affine: AffineCurve<
        BaseField = Self::Fqe,
        ScalarField = Self::Fr,
        Projective = Self::G2Projective,
    >;
    /// The base field of G1.
    type Fq: PrimeField;
    /// The base field of G2, an extension of Fq (or Fq itself).
    type Fqe: Field;
    /// The embedding field, target of the pairing.
    type Fqk: Field;

    /// Computes the product of Miller loops over pairs of prepared points.
    /// Returns one whenever one of the points of a pair is the point at
    /// infinity.
    fn miller_loop<'a, I>(i: I) -> Self::Fqk
    where
        I: IntoIterator<
            Item = &'a (
                &'a <Self::G1Affine as PairingCurve>::Prepared,
                &'a <Self::G2Affine as PairingCurve>::Prepared,
            ),
        >,
        Self::G1Affine: PairingCurve,
        Self::G2Affine: PairingCurve;

    /// Raises the Miller loop output into the order r subgroup of the
    /// embedding field. `None` only for a zero input, which no Miller loop
    /// over valid points produces.
    fn final_exponentiation(f: &Self::Fqk) -> Option<Self::Fqk>;

    /// The full pairing computation.
    fn pairing<G1, G2>(p: G1, q: G2) -> Self::Fqk
    where
        G1: Into<Self::G1Affine>,
        G2: Into<Self::G2Affine>,
        Self::G1Affine: PairingCurve,
        Self::G2Affine: PairingCurve,
    {
        let p = p.into().prepare();
        let q = q.into().prepare();
        let pairs = [(&p, &q)];
        Self::final_exponentiation(&Self::miller_loop(&pairs)).unwrap()
    }
}

/// An elliptic curve group usable as one side of a pairing.
pub trait PairingCurve: AffineCurve {
    type Engine: PairingEngine;
    /// A pre-processed form of the point, as consumed by the Miller loop.
    type Prepared: Clone + Debug + Send + Sync + 'static;
    /// The group on the other side of the pairing.
    type PairWith: PairingCurve<PairWith = Self>;
    /// The embedding field the pairing maps into.
    type PairingResult: Field;

    /// Pre-process the point for pairing purposes.
    fn prepare(&self) -> Self::Prepared;

    /// Compute the full pairing of `self` and `other`.
    fn pairing_with(&self, other: &Self::PairWith) -> Self::PairingResult;
}

/// An elliptic curve point in affine coordinates, plus an infinity flag.
pub trait AffineCurve:
    Copy
    + Clone
    + Debug
    + Display
    + Default
    + Eq
    + Hash
    + Send
    + Sync
    + 'static
    + Neg<Output = Self>
    + ToBytes
    + FromBytes
{
    type BaseField: Field;
    type ScalarField: PrimeField;
    type Projective: ProjectiveCurve<
        Affine = Self,
        BaseField = Self::BaseField,
        ScalarField = Self::ScalarField,
    >;

    /// The point at infinity.
    fn zero() -> Self;

    /// Is this the point at infinity?
    fn is_zero(&self) -> bool;

    /// A fixed generator of the prime order subgroup.
    fn prime_subgroup_generator() -> Self;

    /// Convert into Jacobian coordinates.
    fn into_projective(&self) -> Self::Projective;

    /// Multiply by a scalar, via its big integer representation.
    fn mul<S: Into<<Self::ScalarField as PrimeField>::BigInt>>(&self, by: S) -> Self::Projective;
}

/// An elliptic curve point in Jacobian coordinates.
pub trait ProjectiveCurve:
    Copy
    + Clone
    + Debug
    + Display
    + Default
    + Eq
    + Send
    + Sync
    + 'static
    + Neg<Output = Self>
    + UniformRand
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + AddAssign<Self>
    + SubAssign<Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
{
    type BaseField: Field;
    type ScalarField: PrimeField;
    type Affine: AffineCurve<
        Projective = Self,
        BaseField = Self::BaseField,
        ScalarField = Self::ScalarField,
    >;

    /// The point at infinity.
    fn zero() -> Self;

    /// Is this the point at infinity?
    fn is_zero(&self) -> bool;

    /// A fixed generator of the prime order subgroup.
    fn prime_subgroup_generator() -> Self;

    /// Is the Z coordinate one (or the point zero)?
    fn is_normalized(&self) -> bool;

    /// Convert back to affine coordinates.
    fn into_affine(&self) -> Self::Affine;

    /// Doubles the point.
    #[must_use]
    fn double(&self) -> Self;

    /// Doubles the point in place.
    fn double_in_place(&mut self) -> &mut Self;

    /// Adds an affine point to `self`, using the cheaper mixed addition.
    fn add_assign_mixed(&mut self, other: &Self::Affine);

    /// Multiply by a scalar, via its big integer representation.
    #[must_use]
    fn mul<S: Into<<Self::ScalarField as PrimeField>::BigInt>>(&self, by: S) -> Self;
}
