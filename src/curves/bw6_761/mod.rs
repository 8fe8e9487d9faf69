//! [BW6-761](https://eprint.iacr.org/2020/351.pdf), a Brezing-Weng curve of
//! embedding degree 6 over a 761 bit base field, built on top of the
//! BLS12-377: its subgroup order r equals the BLS12-377 base field
//! characteristic, which makes it suitable as outer curve for one layer of
//! proof composition.

use crate::{
    curves::{
        bw6::{
            Bw6, Bw6Parameters, G1Affine as Bw6G1Affine, G1Prepared,
            G1Projective as Bw6G1Projective, G2Affine as Bw6G2Affine, G2Prepared,
            G2Projective as Bw6G2Projective,
        },
        PairingCurve, PairingEngine,
    },
    fields::bw6_761::{Fq, Fq2Parameters, Fq6, Fq6Parameters},
};

pub mod g1;
pub mod g2;
#[cfg(test)]
mod tests;

use self::{g1::Bw6_761G1Parameters, g2::Bw6_761G2Parameters};

pub struct Bw6_761Parameters;

impl Bw6Parameters for Bw6_761Parameters {
    /// Binary digits of x = 9586122913090633729, least significant bit
    /// first. 63 doublings and 6 additions make for 69 line evaluations in
    /// the first Miller pass.
    const ATE_LOOP_COUNT_1: &'static [i8] = &[
        1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 1,
        0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1,
    ];
    /// Non-adjacent form of x^2 - x - 1 =
    /// 91893752504881257691937156713741811711, least
    /// significant digit first. 126 doublings and 18 additions make for 144
    /// line evaluations in the second Miller pass.
    const ATE_LOOP_COUNT_2: &'static [i8] = &[
        -1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, -1, 0, 1, 0, 0, 1,
        0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 1, 0, 0, 1, 0, 0, -1, 0, 1, 0, -1, 0,
        0, 0, 0, -1, 0, 1, 0, 0, 0, 1, 0, 0, 0,
        1, 0, 0, 1, 0, 1, 0, 0, 0, 1,
    ];
    type Fp = Fq;
    type Fp2Params = Fq2Parameters;
    type Fp6Params = Fq6Parameters;
    type G1Parameters = Bw6_761G1Parameters;
    type G2Parameters = Bw6_761G2Parameters;
}

pub type Bw6_761 = Bw6<Bw6_761Parameters>;

pub type G1Affine = Bw6G1Affine<Bw6_761Parameters>;
pub type G1Projective = Bw6G1Projective<Bw6_761Parameters>;
pub type G2Affine = Bw6G2Affine<Bw6_761Parameters>;
pub type G2Projective = Bw6G2Projective<Bw6_761Parameters>;

impl PairingCurve for G1Affine {
    type Engine = Bw6_761;
    type Prepared = G1Prepared<Bw6_761Parameters>;
    type PairWith = G2Affine;
    type PairingResult = Fq6;

    fn prepare(&self) -> Self::Prepared {
        Self::Prepared::from_affine(*self)
    }

    fn pairing_with(&self, other: &Self::PairWith) -> Self::PairingResult {
        Bw6_761::pairing(*self, *other)
    }
}

impl PairingCurve for G2Affine {
    type Engine = Bw6_761;
    type Prepared = G2Prepared<Bw6_761Parameters>;
    type PairWith = G1Affine;
    type PairingResult = Fq6;

    fn prepare(&self) -> Self::Prepared {
        Self::Prepared::from_affine(*self)
    }

    fn pairing_with(&self, other: &Self::PairWith) -> Self::PairingResult {
        Bw6_761::pairing(*other, *self)
    }
}
