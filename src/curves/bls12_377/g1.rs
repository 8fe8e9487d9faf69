use crate::{
    biginteger::{BigInteger256, BigInteger384},
    curves::models::{ModelParameters, SWModelParameters},
    field_new,
    fields::bls12_377::{Fq, Fr},
    fields::Field,
};

#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct Bls12_377G1Parameters;

impl ModelParameters for Bls12_377G1Parameters {
    type BaseField = Fq;
    type ScalarField = Fr;
}

impl SWModelParameters for Bls12_377G1Parameters {
    /// COEFF_A = 0
    const COEFF_A: Fq = field_new!(Fq, BigInteger384([
        0x0,
        0x0,
        0x0,
        0x0,
        0x0,
        0x0,
    ]));

    /// COEFF_B = 1
    const COEFF_B: Fq = field_new!(Fq, BigInteger384([
        0x2cdffffffffff68,
        0x51409f837fffffb1,
        0x9f7db3a98a7d3ff2,
        0x7b4e97b76e7c6305,
        0x4cf495bf803c84e8,
        0x8d6661e2fdf49a,
    ]));

    /// COFACTOR = (x - 1)^2 / 3 = 30631250834960419227450344600217059328
    const COFACTOR: &'static [u64] = &[0x0, 0x170b5d4430000000];

    /// COFACTOR_INV = COFACTOR^{-1} mod r
    /// = 5285428838741532253824584287042945485047145357130994810877
    const COFACTOR_INV: Fr = field_new!(Fr, BigInteger256([
        0x1bf076c4583372ec,
        0x3a4d9b4b9f7a544d,
        0x2310e0a5dfb6400c,
        0xf77f5a276b9452f,
    ]));

    /// AFFINE_GENERATOR_COEFFS = (G1_GENERATOR_X, G1_GENERATOR_Y)
    const AFFINE_GENERATOR_COEFFS: (Fq, Fq) = (G1_GENERATOR_X, G1_GENERATOR_Y);

    #[inline(always)]
    fn mul_by_a(_: &Fq) -> Fq {
        Fq::zero()
    }
}

/// G1_GENERATOR_X =
/// 8193799937315096423993825557346594823998867150264797659421969564485530\
/// 4257327692006745978603320413799295628339695
pub const G1_GENERATOR_X: Fq = field_new!(Fq, BigInteger384([
    0x260f33b9772451f4,
    0xc54dd773169d5658,
    0x5c1551c469a510dd,
    0x761662e4425e1698,
    0xc97d78cc6f065272,
    0xa41206b361fd4d,
]));

/// G1_GENERATOR_Y =
/// 2412667498597154737397888782405856817339271911686018963837591221021129\
/// 07357779751001206799952863815012735208165030
pub const G1_GENERATOR_Y: Fq = field_new!(Fq, BigInteger384([
    0x8193961fb8cb81f3,
    0x638d4c5f44adb8,
    0xfafaf3dad4daf54a,
    0xc27849e2d655cd18,
    0x2ec3ddb401d52814,
    0x7da93326303c71,
]));
