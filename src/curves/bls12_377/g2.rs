use crate::{
    biginteger::{BigInteger256, BigInteger384},
    curves::models::{ModelParameters, SWModelParameters},
    field_new,
    fields::bls12_377::{Fq, Fq2, Fr},
    fields::Field,
};

#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct Bls12_377G2Parameters;

impl ModelParameters for Bls12_377G2Parameters {
    type BaseField = Fq2;
    type ScalarField = Fr;
}

impl SWModelParameters for Bls12_377G2Parameters {
    /// COEFF_A = [0, 0]
    const COEFF_A: Fq2 = field_new!(
        Fq2,
        field_new!(Fq, BigInteger384([
            0x0,
            0x0,
            0x0,
            0x0,
            0x0,
            0x0,
        ])),
        field_new!(Fq, BigInteger384([
            0x0,
            0x0,
            0x0,
            0x0,
            0x0,
            0x0,
        ])),
    );

    /// COEFF_B = 1 / u = [0, 155198655607781456406391640216936120121836107652948796323930557600032281009004493664981332883744016074664192874906],
    /// the D-twist of the curve equation.
    const COEFF_B: Fq2 = field_new!(
        Fq2,
        field_new!(Fq, BigInteger384([
            0x0,
            0x0,
            0x0,
            0x0,
            0x0,
            0x0,
        ])),
        field_new!(Fq, BigInteger384([
            0x8072266666666685,
            0x8df55926899999a9,
            0x7fe4561ad64f34cf,
            0xb95da6d8b6e4f01b,
            0x4b747cccfc142743,
            0x39c3fa70f49f43,
        ])),
    );

    /// COFACTOR =
    /// 7923214915284317143930293550643874566881017850177945424769256759165301\
    /// 4366169332282092779667740924864672894786184047614126306918357646745593\
    /// 76407658497
    const COFACTOR: &'static [u64] = &[
        0x1, 0x452217cc90000000,
        0xa0f3622fba094800, 0xd693e8c36676bd09,
        0x8c505634fae2e189, 0xfbb36b00e1dcc40c,
        0xddd88d99a6f6a829, 0x26ba558ae9562a,
    ];

    /// COFACTOR_INV = COFACTOR^{-1} mod r
    /// = 6764900296503390671038341982857278410319949526107311149686707033187604\
    /// 810669
    const COFACTOR_INV: Fr = field_new!(Fr, BigInteger256([
        0xd71a8dd4febfc477,
        0x40068e6d1b563e49,
        0xc9e08997b5e0ce1d,
        0x79fdeb1e8c83891,
    ]));

    /// AFFINE_GENERATOR_COEFFS = (G2_GENERATOR_X, G2_GENERATOR_Y)
    const AFFINE_GENERATOR_COEFFS: (Fq2, Fq2) = (G2_GENERATOR_X, G2_GENERATOR_Y);

    #[inline(always)]
    fn mul_by_a(_: &Fq2) -> Fq2 {
        Fq2::zero()
    }
}

pub const G2_GENERATOR_X: Fq2 = field_new!(Fq2, G2_GENERATOR_X_C0, G2_GENERATOR_X_C1);
pub const G2_GENERATOR_Y: Fq2 = field_new!(Fq2, G2_GENERATOR_Y_C0, G2_GENERATOR_Y_C1);

/// G2_GENERATOR_X_C0 =
/// 6700421652136276913996030463824166246338450491204509554364911896416783\
/// 1559549275276665917802324363056069254155209
pub const G2_GENERATOR_X_C0: Fq = field_new!(Fq, BigInteger384([
    0x87e4cb96756a6edb,
    0x99aa13a4fa9b9c4b,
    0xd702cf5f38b86463,
    0x7ed4ce7924c167ed,
    0x1b447e91a9c5329f,
    0x84963f63a498b7,
]));

/// G2_GENERATOR_X_C1 =
/// 1880391000338305348355609263334959388120998844916882405988498966996855\
/// 45777288948680356069069856197422355451241144
pub const G2_GENERATOR_X_C1: Fq = field_new!(Fq, BigInteger384([
    0x8554a79176a27e27,
    0xba4edb07f79e64a3,
    0xe2dc99bdfb15b037,
    0xe7d8740ff9d797f7,
    0x140c90e86aa2ea12,
    0xcab5f295c622d3,
]));

/// G2_GENERATOR_Y_C0 =
/// 2129611251995396726324818646924438890058429645804345727708145825203965\
/// 90909323644956646137861647360575214633605398
pub const G2_GENERATOR_Y_C0: Fq = field_new!(Fq, BigInteger384([
    0x2050bf7247d3ced4,
    0x67a8ee8100d17921,
    0x17d6f6cda3578307,
    0xd0eaa7550e0e26d8,
    0xf7aa721a161d7284,
    0x1604cec93c28ee1,
]));

/// G2_GENERATOR_Y_C1 =
/// 6762575890733221845724368501427836213459018952040825096302341230154793\
/// 2120327362287218456798771752606845621278268
pub const G2_GENERATOR_Y_C1: Fq = field_new!(Fq, BigInteger384([
    0x4fc1f83c331faed0,
    0x6783c3d79d164e16,
    0x7ecc86be7de427ff,
    0xbe7b613ac02526d5,
    0xb5eb2e9573178cee,
    0xf5f8619a031dbf,
]));
