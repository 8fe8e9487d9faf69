use crate::{
    biginteger::{BigInteger384, BigInteger768},
    curves::models::{ModelParameters, SWModelParameters},
    field_new,
    fields::bw6_761::{Fq, Fr},
    fields::Field,
};

#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct Bw6_761G2Parameters;

impl ModelParameters for Bw6_761G2Parameters {
    type BaseField = Fq;
    type ScalarField = Fr;
}

impl SWModelParameters for Bw6_761G2Parameters {
    /// COEFF_A = 0
    const COEFF_A: Fq = field_new!(Fq, BigInteger768([
        0x0,
        0x0,
        0x0,
        0x0,
        0x0,
        0x0,
        0x0,
        0x0,
        0x0,
        0x0,
        0x0,
        0x0,
    ]));

    /// COEFF_B = 4,
    /// the M-twist of the curve equation.
    const COEFF_B: Fq = field_new!(Fq, BigInteger768([
        0x136efffffffe16c9,
        0x82cf5a6dcffe3319,
        0x6458c05f1f0e0741,
        0xd10ae605e52a4eda,
        0x41ca591c0266e100,
        0x7d0fd59c3626929f,
        0x9967dc004d00c112,
        0x1ccff9c033379af5,
        0x9ad6ec10a23f63af,
        0x5cec11251a72c235,
        0x8d18b1ae789ba83e,
        0x24f5d6c91bd3ec,
    ]));

    /// COFACTOR =
    /// 2664243587933581668398767770148807386775111827005265065594210250231297\
    /// 7592501693353047140953112195348280268661194869
    const COFACTOR: &'static [u64] = &[
        0x3de5800000000075, 0x832ba4061000003b,
        0xc61c554757551c0c, 0xc856a0853c9db94c,
        0x2c77d5ac34cb12ef, 0xad1972339049ce76,
    ];

    /// COFACTOR_INV = COFACTOR^{-1} mod r
    /// = 2149115223658864535912448990954807477237900545508668105512977762986644\
    /// 28889000553861210287833206024638187939842124
    const COFACTOR_INV: Fr = field_new!(Fr, BigInteger384([
        0xc789f8066b9af9ee,
        0xca6c6dc67d6d42ce,
        0x87d7a8a9da8db962,
        0xaf9ef54b967af20c,
        0xd2be337d7d38f0a5,
        0x5ef152cf9ffea4,
    ]));

    /// AFFINE_GENERATOR_COEFFS = (G2_GENERATOR_X, G2_GENERATOR_Y)
    const AFFINE_GENERATOR_COEFFS: (Fq, Fq) = (G2_GENERATOR_X, G2_GENERATOR_Y);

    #[inline(always)]
    fn mul_by_a(_: &Fq) -> Fq {
        Fq::zero()
    }
}

/// G2_GENERATOR_X =
/// 4299495046121976197967899669570453663523609133273326781652351086315825\
/// 5386136471968681867652173970676545409629559758401766934196571934868452\
/// 7376781417023810434639044621135685138167671971847741594468840009844213\
/// 9983341339355564981
pub const G2_GENERATOR_X: Fq = field_new!(Fq, BigInteger768([
    0x22aab15d6e6db785,
    0x2d4ff25bb7779d47,
    0xd6e307f08fd0c1a9,
    0xe1f9a0520c1f952d,
    0xa4fb4fd53ad518d4,
    0xf19a04a7a47da06d,
    0xb40146bfc4efa321,
    0x42eaf4df92bc1fcf,
    0x941a4672957418ab,
    0xce598708852a92dc,
    0xc5676a44843ae7bb,
    0x2fc541f69a8dbe,
]));

/// G2_GENERATOR_Y =
/// 5390068907621955088169558704058566111636841949933812064258391788701969\
/// 8849354707808158062051082665912808688723407934479613014465664653517363\
/// 0397016670375656726943420218228438819756329067080106211237625933649149\
/// 9915806321277334517
pub const G2_GENERATOR_Y: Fq = field_new!(Fq, BigInteger768([
    0x797e6c45cf5a4db,
    0xf2af166031457596,
    0x40a34fe935a0bd36,
    0xb5b1538e72692756,
    0x8b2071df96488d9b,
    0x41914b18661e79e2,
    0xc5ddedd06903d6f2,
    0x6dda5abf0c1df1aa,
    0xd561192fc0f03d13,
    0xe45ff24a1d016a19,
    0x14d2af10a474f091,
    0xa11703f4f8d9f4,
]));
