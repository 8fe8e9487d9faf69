//! The BW6-761 base field, a 761 bit prime field. The subgroup order of the
//! curve equals the BLS12-377 base field characteristic.

use crate::{
    biginteger::BigInteger768 as BigInteger,
    fields::{Fp768, Fp768Parameters, FpParameters},
};

pub type Fq = Fp768<FqParameters>;

pub struct FqParameters;

impl Fp768Parameters for FqParameters {}
impl FpParameters for FqParameters {
    type BigInt = BigInteger;

    /// MODULUS = 6891450384315732539396789682275657542479668912536150109513790160209623\
    /// 4222434917360876831832894116876408645677537866134511617591205542477593\
    /// 4951169912530159895160509937850885037254363142359679595189970042996911\
    /// 2842764913119068299
    const MODULUS: BigInteger = BigInteger([
        0xf49d00000000008b,
        0xe6913e6870000082,
        0x160cf8aeeaf0a437,
        0x98a116c25667a8f8,
        0x71dcd3dc73ebff2e,
        0x8689c8ed12f9fd90,
        0x3cebaff25b42304,
        0x707ba638e584e919,
        0x528275ef8087be41,
        0xb926186a81d14688,
        0xd187c94004faff3e,
        0x122e824fb83ce0a,
    ]);

    const MODULUS_BITS: u32 = 761;

    const CAPACITY: u32 = Self::MODULUS_BITS - 1;

    const REPR_SHAVE_BITS: u32 = 7;

    /// Montgomery constant = 1941755829669113784701809950479608198960511796062836498449251978885682\
    /// 6815912457111496925885288482312932029525290851796601842419901086455906\
    /// 4714273798827944034382866068541421644296856128916573608556659697341836\
    /// 1270741402025690581
    const R: BigInteger = BigInteger([
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
    ]);

    /// Montgomery constant squared = 4101737105507298352442561313393192324180371814155294089883586780083371\
    /// 3100254353121041876566711852608729662728430495702959234229808667713778\
    /// 1899438438783090920915449892454598380340650741080836049574942867895127\
    /// 9422657716620863065
    const R2: BigInteger = BigInteger([
        0xc686392d2d1fa659,
        0x7b14c9b2f79484ab,
        0x7fa1e825c1d2b459,
        0xd6ec28f848329d88,
        0x4afb427b73a1ed40,
        0x972c69400d5930ae,
        0x2c7a26bf8c995976,
        0xac52e458c6e57af9,
        0xac731bfa0c536dfe,
        0x121e5c630b103f50,
        0x8f1b0953b886cda4,
        0xad253c2da8d807,
    ]);

    const INV: u64 = 744663313386281181u64;
}
