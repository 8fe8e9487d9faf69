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

pub type G1Affine<P> = GroupAffine<<P as Bw6Parameters>::G1Parameters>;
pub type G1Projective<P> = GroupProjective<<P as Bw6Parameters>::G1Parameters>;

#[derive(Derivative)]
#[derivative(
    Clone(bound = "P: Bw6Parameters"),
    Debug(bound = "P: Bw6Parameters"),
    PartialEq(bound = "P: Bw6Parameters"),
    Eq(bound = "P: Bw6Parameters")
)]
pub struct G1Prepared<P: Bw6Parameters>(pub G1Affine<P>);

impl<P: Bw6Parameters> G1Prepared<P> {
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn from_affine(p: G1Affine<P>) -> Self {
        G1Prepared(p)
    }
}

impl<P: Bw6Parameters> Default for G1Prepared<P> {
    fn default() -> Self {
        G1Prepared(G1Affine::<P>::prime_subgroup_generator())
    }
}

impl<P: Bw6Parameters> ToBytes for G1Prepared<P> {
    fn write<W: Write>(&self, writer: W) -> IoResult<()> {
        self.0.write(writer)
    }
}

impl<P: Bw6Parameters> FromBytes for G1Prepared<P> {
    fn read<R: Read>(mut reader: R) -> IoResult<Self> {
        let g1a = G1Affine::<P>::read(&mut reader)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(G1Prepared(g1a))
    }
}
