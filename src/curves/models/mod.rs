use crate::fields::{Field, PrimeField};

pub mod short_weierstrass_jacobian;

pub mod bls12;
pub mod bw6;

pub trait ModelParameters: Send + Sync + 'static {
    type BaseField: Field;
    type ScalarField: PrimeField;
}

/// Parameters of a short Weierstrass curve y^2 = x^3 + a*x + b.
pub trait SWModelParameters: ModelParameters {
    const COEFF_A: Self::BaseField;
    const COEFF_B: Self::BaseField;
    const COFACTOR: &'static [u64];
    const COFACTOR_INV: Self::ScalarField;
    const AFFINE_GENERATOR_COEFFS: (Self::BaseField, Self::BaseField);

    #[inline(always)]
    fn mul_by_a(elem: &Self::BaseField) -> Self::BaseField {
        let mut copy = *elem;
        copy *= &Self::COEFF_A;
        copy
    }
}
