use crate::{
    curves::{AffineCurve, ProjectiveCurve},
    fields::{Field, FpParameters, PrimeField},
    UniformRand,
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

pub(crate) const ITERATIONS: usize = 10;

pub(crate) fn test_rng() -> XorShiftRng {
    XorShiftRng::seed_from_u64(1231275789u64)
}

/// The group laws, on random subgroup elements.
pub(crate) fn curve_tests<G: ProjectiveCurve>() {
    let mut rng = test_rng();

    // identity and doubling of zero
    {
        let mut z = G::zero();
        assert!(z.is_zero());
        z.double_in_place();
        assert!(z.is_zero());
        assert_eq!(G::zero() + &G::zero(), G::zero());
    }

    for _ in 0..ITERATIONS {
        let a = G::rand(&mut rng);
        let b = G::rand(&mut rng);
        let c = G::rand(&mut rng);

        // associativity and commutativity
        assert_eq!((a + &b) + &c, a + &(b + &c));
        assert_eq!(a + &b, b + &a);

        // a - a = 0, a + 0 = a
        assert_eq!(a - &a, G::zero());
        assert_eq!(a + &G::zero(), a);

        // a + a = 2a
        assert_eq!(a + &a, a.double());

        // -(-a) = a
        assert_eq!(-(-a), a);

        // mixed addition agrees with projective addition
        let a_affine = a.into_affine();
        let mut b2 = b;
        b2.add_assign_mixed(&a_affine);
        assert_eq!(b2, a + &b);

        // affine round trip
        assert_eq!(a_affine.into_projective(), a);
    }
}

/// Scalar multiplication distributes over the group and field structure.
pub(crate) fn curve_mul_tests<G: ProjectiveCurve>() {
    let mut rng = test_rng();

    for _ in 0..ITERATIONS {
        let a = G::rand(&mut rng);
        let s = G::ScalarField::rand(&mut rng);
        let t = G::ScalarField::rand(&mut rng);

        // (s + t) * a = s * a + t * a
        let st_a = a.mul((s + &t).into_repr());
        assert_eq!(st_a, a.mul(s.into_repr()) + &a.mul(t.into_repr()));

        // (s * t) * a = s * (t * a)
        assert_eq!(
            a.mul((s * &t).into_repr()),
            a.mul(t.into_repr()).mul(s.into_repr()),
        );

        // r * a = 0
        let modulus = <G::ScalarField as PrimeField>::Params::MODULUS;
        assert!(a.mul(modulus).is_zero());

        // 1 * a = a
        assert_eq!(a.mul(G::ScalarField::one().into_repr()), a);
    }
}

/// Byte round trip of affine points, including the point at infinity.
pub(crate) fn curve_serialization_tests<G: ProjectiveCurve>() {
    use crate::bytes::{FromBytes, ToBytes};

    let mut rng = test_rng();

    for _ in 0..ITERATIONS {
        let a = G::rand(&mut rng).into_affine();
        let mut bytes = vec![];
        a.write(&mut bytes).unwrap();
        let b = G::Affine::read(bytes.as_slice()).unwrap();
        assert_eq!(a, b);
    }

    let zero = G::Affine::zero();
    let mut bytes = vec![];
    zero.write(&mut bytes).unwrap();
    let z = G::Affine::read(bytes.as_slice()).unwrap();
    assert!(z.is_zero());
}
