//! The scalar field of the BLS12-377, a 253 bit prime field.

use crate::{
    biginteger::BigInteger256 as BigInteger,
    fields::{Fp256, Fp256Parameters, FpParameters},
};

pub type Fr = Fp256<FrParameters>;

pub struct FrParameters;

impl Fp256Parameters for FrParameters {}
impl FpParameters for FrParameters {
    type BigInt = BigInteger;

    /// MODULUS = 8444461749428370424248824938781546531375899335154063827935233455917409\
    /// 239041
    const MODULUS: BigInteger = BigInteger([
        0xa11800000000001,
        0x59aa76fed0000001,
        0x60b44d1e5c37b001,
        0x12ab655e9a2ca556,
    ]);

    const MODULUS_BITS: u32 = 253;

    const CAPACITY: u32 = Self::MODULUS_BITS - 1;

    const REPR_SHAVE_BITS: u32 = 3;

    /// Montgomery constant = 6014086494747379908336260804527802945383293308637734276299549080986809\
    /// 532403
    const R: BigInteger = BigInteger([
        0x7d1c7ffffffffff3,
        0x7257f50f6ffffff2,
        0x16d81575512c0fee,
        0xd4bda322bbb9a9d,
    ]);

    /// Montgomery constant squared = 5085959413117794721136926001468180272786333304992140717377457929293367\
    /// 55579
    const R2: BigInteger = BigInteger([
        0x25d577bab861857b,
        0xcc2c27b58860591f,
        0xa7cc008fe5dc8593,
        0x11fdae7eff1c939,
    ]);

    const INV: u64 = 725501752471715839u64;
}
