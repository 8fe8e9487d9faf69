use crate::{
    biginteger::BigInteger384 as BigInteger,
    field_new,
    fields::{fp2::*, Field},
};

use crate::fields::bls12_377::fq::Fq;

pub type Fq2 = Fp2<Fq2Parameters>;

pub struct Fq2Parameters;

impl Fp2Parameters for Fq2Parameters {
    type Fp = Fq;

    /// NONRESIDUE = -5
    const NONRESIDUE: Fq = field_new!(Fq, BigInteger([
        0xfc0b8000000002fa,
        0x97d39cf6e000018b,
        0x2072420fbfa05044,
        0xcbbcbd50d97c3802,
        0xbaf1ec35813f9eb,
        0x9974a2c0945ad2,
    ]));

    /// (-5)^{-1} = 1551986556077814564063916402169361201218361076529487963239305576000322\
    /// 81009004493664981332883744016074664192874906
    const NONRESIDUE_INV: Fq = field_new!(Fq, BigInteger([
        0x8072266666666685,
        0x8df55926899999a9,
        0x7fe4561ad64f34cf,
        0xb95da6d8b6e4f01b,
        0x4b747cccfc142743,
        0x39c3fa70f49f43,
    ]));

    /// Coefficients:  (-5)^((q^i - 1)/2)   for i = 0, 1
    const FROBENIUS_COEFF_FP2_C1: [Fq; 2] = [
        field_new!(Fq, BigInteger([
            0x2cdffffffffff68,
            0x51409f837fffffb1,
            0x9f7db3a98a7d3ff2,
            0x7b4e97b76e7c6305,
            0x4cf495bf803c84e8,
            0x8d6661e2fdf49a,
        ])),
        field_new!(Fq, BigInteger([
            0x823ac00000000099,
            0xc5cabdc0b000004f,
            0x7f75ae862f8c080d,
            0x9ed4423b9278b089,
            0x79467000ec64c452,
            0x120d3e434c71c50,
        ])),
    ];

    #[inline(always)]
    fn mul_fp_by_nonresidue(fe: &Self::Fp) -> Self::Fp {
        let original = -(*fe);
        let double = original.double();
        double.double() + &original
    }
}
