use crate::{
    biginteger::BigInteger768 as BigInteger,
    field_new,
    fields::{fp2::*, Field},
};

use crate::fields::bw6_761::fq::Fq;

pub type Fq2 = Fp2<Fq2Parameters>;

pub struct Fq2Parameters;

impl Fp2Parameters for Fq2Parameters {
    type Fp = Fq;

    /// NONRESIDUE = -4
    const NONRESIDUE: Fq = field_new!(Fq, BigInteger([
        0xe12e00000001e9c2,
        0x63c1e3faa001cd69,
        0xb1b4384fcbe29cf6,
        0xc79630bc713d5a1d,
        0x30127ac071851e2d,
        0x979f350dcd36af1,
        0x6a66defed8b361f2,
        0x53abac78b24d4e23,
        0xb7ab89dede485a92,
        0x5c3a0745675e8452,
        0x446f17918c5f5700,
        0xfdf24e3267fa1e,
    ]));

    /// (-4)^{-1}, the constant mixed into the line evaluations by the sparse
    /// multipliers of the Miller loop.
    const NONRESIDUE_INV: Fq = field_new!(Fq, BigInteger([
        0x76f5000000001ef3,
        0x5656e540f0001d28,
        0xe8e35ef24f949072,
        0xfbde11453d149f3c,
        0x5a2b2c15cf8bd15f,
        0xf4adbcc939a97529,
        0xd907a2cf651bcc01,
        0xb8802ab1a97e691,
        0x5f0c42539e395c92,
        0x397b6fb6e798b45a,
        0xa73bcf411be2d4f7,
        0xc5b03c0058e068,
    ]));

    /// Coefficients:  (-4)^((q^i - 1)/2)   for i = 0, 1
    const FROBENIUS_COEFF_FP2_C1: [Fq; 2] = [
        field_new!(Fq, BigInteger([
            0x202ffffffff85d5,
            0x5a5826358fff8ce7,
            0x9e996e43827faade,
            0xda6aff320ee47df4,
            0xece9cb3e1d94b80b,
            0xc0e667a25248240b,
            0xa74da5bfdcad3905,
            0x2352e7fe462f2103,
            0x7b56588008b1c87c,
            0x45848a63e711022f,
            0xd7a81ebb9f65a9df,
            0x51f77ef127e87d,
        ])),
        field_new!(Fq, BigInteger([
            0xf29a000000007ab6,
            0x8c391832e000739b,
            0x77738a6b6870f959,
            0xbe36179047832b03,
            0x84f3089e56574722,
            0xc5a3614ac0b1d984,
            0x5c81153f4906e9fe,
            0x4d28be3a9f55c815,
            0xd72c1d6f77d5f5c5,
            0x73a18e069ac04458,
            0xf9dfaa846595555f,
            0xd0f0a60a5be58c,
        ])),
    ];

    #[inline(always)]
    fn mul_fp_by_nonresidue(fe: &Self::Fp) -> Self::Fp {
        let double = fe.double();
        -double.double()
    }
}
