use crate::{
    bytes::{FromBytes, ToBytes},
    curves::{
        bw6::Bw6Parameters,
        short_weierstrass_jacobian::{GroupAffine, GroupProjective},
        AffineCurve,
    },
};
use std::io;
use std::io::{Read, Result as IoResult, Write};

pub type G2Affine<P> = GroupAffine<<P as Bw6Parameters>::G2Parameters>;
pub type G2Projective<P> = GroupProjective<<P as Bw6Parameters>::G2Parameters>;

/// The evaluation at a G1 point of a Miller line through two points of the
/// twist; a sparse element r0*V^-2 + r1*V^-3 + r2*V^-5 of the embedding
/// field, with plain base field coordinates.
#[derive(Derivative)]
#[derivative(Clone(bound = "P: Bw6Parameters"), Debug(bound = "P: Bw6Parameters"))]
pub struct LineEvaluation<P: Bw6Parameters> {
    pub(crate) r0: P::Fp,
    pub(crate) r1: P::Fp,
    pub(crate) r2: P::Fp,
}

#[derive(Derivative)]
#[derivative(
    Clone(bound = "P: Bw6Parameters"),
    Debug(bound = "P: Bw6Parameters"),
    PartialEq(bound = "P: Bw6Parameters"),
    Eq(bound = "P: Bw6Parameters")
)]
pub struct G2Prepared<P: Bw6Parameters>(pub G2Affine<P>);

impl<P: Bw6Parameters> G2Prepared<P> {
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn from_affine(q: G2Affine<P>) -> Self {
        G2Prepared(q)
    }
}

impl<P: Bw6Parameters> Default for G2Prepared<P> {
    fn default() -> Self {
        G2Prepared(G2Affine::<P>::prime_subgroup_generator())
    }
}

impl<P: Bw6Parameters> ToBytes for G2Prepared<P> {
    fn write<W: Write>(&self, writer: W) -> IoResult<()> {
        self.0.write(writer)
    }
}

impl<P: Bw6Parameters> FromBytes for G2Prepared<P> {
    fn read<R: Read>(mut reader: R) -> IoResult<Self> {
        let g2a = G2Affine::<P>::read(&mut reader)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(G2Prepared(g2a))
    }
}
