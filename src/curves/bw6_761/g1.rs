use crate::{
    biginteger::{BigInteger384, BigInteger768},
    curves::models::{ModelParameters, SWModelParameters},
    field_new,
    fields::bw6_761::{Fq, Fr},
    fields::Field,
};

#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct Bw6_761G1Parameters;

impl ModelParameters for Bw6_761G1Parameters {
    type BaseField = Fq;
    type ScalarField = Fr;
}

impl SWModelParameters for Bw6_761G1Parameters {
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

    /// COEFF_B = -1
    const COEFF_B: Fq = field_new!(Fq, BigInteger768([
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
    ]));

    /// COFACTOR =
    /// 2664243587933581668398767770148807386775111827005265065594210250231297\
    /// 7592501693353047140953112195348280268661194876
    const COFACTOR: &'static [u64] = &[
        0x3de580000000007c, 0x832ba4061000003b,
        0xc61c554757551c0c, 0xc856a0853c9db94c,
        0x2c77d5ac34cb12ef, 0xad1972339049ce76,
    ];

    /// COFACTOR_INV = COFACTOR^{-1} mod r
    /// = 9114132676766994070781929124195831871798225127771315005323436752235794\
    /// 6997763584490607453720072232540829942217804
    const COFACTOR_INV: Fr = field_new!(Fr, BigInteger384([
        0x6cbc6719306b799,
        0x35e466ec4fc64c14,
        0x174a5cff3b221c74,
        0x512b12e900a45d2e,
        0x62eba10945bdbdf0,
        0xfe1019f053865a,
    ]));

    /// AFFINE_GENERATOR_COEFFS = (G1_GENERATOR_X, G1_GENERATOR_Y)
    const AFFINE_GENERATOR_COEFFS: (Fq, Fq) = (G1_GENERATOR_X, G1_GENERATOR_Y);

    #[inline(always)]
    fn mul_by_a(_: &Fq) -> Fq {
        Fq::zero()
    }
}

/// G1_GENERATOR_X =
/// 5121082781502305659180673370797932802982723165543122975335209418297923\
/// 3451909755593670244707945672131888676246179396988186271340480049155648\
/// 9136909621372120269363009014809788892349370818244288590807634660730008\
/// 3583163982163789167
pub const G1_GENERATOR_X: Fq = field_new!(Fq, BigInteger768([
    0x851a1c1166ae2603,
    0xeea72e25492571be,
    0xa6f20c75f7feab02,
    0xeeea8a1b066c47a4,
    0x6469c9e9402afc4f,
    0x4cd9755dfe95e5ba,
    0x3a1be33544ef7b02,
    0x1e7fe0555536b119,
    0xfd947c7fee73da05,
    0xcffde31744f837a0,
    0xa7b583036935c864,
    0x9918c73dcc124a,
]));

/// G1_GENERATOR_Y =
/// 3936891438836912583780051937508657570812555345221986954460153541952284\
/// 1231913226739076926879180625492206722075080163069005118211369157237071\
/// 8122527675035397396137629201647867432998742184794788331199320600454863\
/// 1860683957877121757
pub const G1_GENERATOR_Y: Fq = field_new!(Fq, BigInteger768([
    0xa3c13889f58ed694,
    0xee5cb8acda0ea650,
    0xcea7c1807dfc6e02,
    0xdc672db2da00df5d,
    0xcde53070a22b574d,
    0x4f3dc271f97fe60b,
    0xd5a2d25bb5f4cc8c,
    0xd68088f33580a980,
    0x760b0d826b393143,
    0xe54149ee3970878e,
    0xc62f69887a0e0ed1,
    0x30ceaa8cbab39d,
]));
