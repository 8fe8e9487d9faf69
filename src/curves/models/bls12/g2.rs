use crate::{
    bytes::{FromBytes, ToBytes},
    curves::{
        bls12::Bls12Parameters,
        short_weierstrass_jacobian::{GroupAffine, GroupProjective},
        AffineCurve,
    },
    fields::Fp2,
};
use std::io;
use std::io::{Read, Result as IoResult, Write};

pub type G2Affine<P> = GroupAffine<<P as Bls12Parameters>::G2Parameters>;
pub type G2Projective<P> = GroupProjective<<P as Bls12Parameters>::G2Parameters>;

/// The evaluation at a G1 point of a Miller line through two points of the
/// twist; a sparse element r0*V + r1*V*W + r2*V^2*W of the embedding field.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "P: Bls12Parameters"),
    Debug(bound = "P: Bls12Parameters")
)]
pub struct LineEvaluation<P: Bls12Parameters> {
    pub(crate) r0: Fp2<P::Fp2Params>,
    pub(crate) r1: Fp2<P::Fp2Params>,
    pub(crate) r2: Fp2<P::Fp2Params>,
}

#[derive(Derivative)]
#[derivative(
    Clone(bound = "P: Bls12Parameters"),
    Debug(bound = "P: Bls12Parameters"),
    PartialEq(bound = "P: Bls12Parameters"),
    Eq(bound = "P: Bls12Parameters")
)]
pub struct G2Prepared<P: Bls12Parameters>(pub G2Affine<P>);

impl<P: Bls12Parameters> G2Prepared<P> {
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn from_affine(q: G2Affine<P>) -> Self {
        G2Prepared(q)
    }
}

impl<P: Bls12Parameters> Default for G2Prepared<P> {
    fn default() -> Self {
        G2Prepared(G2Affine::<P>::prime_subgroup_generator())
    }
}

impl<P: Bls12Parameters> ToBytes for G2Prepared<P> {
    fn write<W: Write>(&self, writer: W) -> IoResult<()> {
        self.0.write(writer)
    }
}

impl<P: Bls12Parameters> FromBytes for G2Prepared<P> {
    fn read<R: Read>(mut reader: R) -> IoResult<Self> {
        let g2a = G2Affine::<P>::read(&mut reader)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(G2Prepared(g2a))
    }
}
