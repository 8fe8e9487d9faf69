use crate::{
    curves::{
        bls12_377::{Bls12_377, Bls12_377Parameters, G1Affine, G1Projective, G2Affine, G2Projective},
        models::bls12::Bls12Parameters,
        tests::{curve_mul_tests, curve_serialization_tests, curve_tests, test_rng},
        AffineCurve, PairingCurve, PairingEngine, ProjectiveCurve,
    },
    fields::{
        bls12_377::{Fq12, Fr, FrParameters},
        Field, FpParameters, PrimeField,
    },
    UniformRand,
};

#[test]
fn test_g1_curve() {
    curve_tests::<G1Projective>();
    curve_mul_tests::<G1Projective>();
    curve_serialization_tests::<G1Projective>();
}

#[test]
fn test_g2_curve() {
    curve_tests::<G2Projective>();
    curve_mul_tests::<G2Projective>();
    curve_serialization_tests::<G2Projective>();
}

#[test]
fn test_g1_generator() {
    let generator = G1Affine::prime_subgroup_generator();
    assert!(generator.is_on_curve());
    assert!(generator.is_in_correct_subgroup_assuming_on_curve());
}

#[test]
fn test_g2_generator() {
    let generator = G2Affine::prime_subgroup_generator();
    assert!(generator.is_on_curve());
    assert!(generator.is_in_correct_subgroup_assuming_on_curve());
}

#[test]
fn test_bilinearity() {
    let mut rng = test_rng();

    let p = G1Projective::rand(&mut rng);
    let q = G2Projective::rand(&mut rng);
    let s = Fr::rand(&mut rng);
    let t = Fr::rand(&mut rng);

    let sp = p.mul(s.into_repr()).into_affine();
    let tq = q.mul(t.into_repr()).into_affine();

    let ans1 = Bls12_377::pairing(sp, q.into_affine());
    let ans2 = Bls12_377::pairing(p.into_affine(), q.into_affine()).pow(s.into_repr());
    assert_eq!(ans1, ans2);

    let lhs = Bls12_377::pairing(sp, tq);
    let rhs = Bls12_377::pairing(p.into_affine(), q.into_affine()).pow((s * &t).into_repr());
    assert_eq!(lhs, rhs);
    assert_ne!(lhs, Fq12::one());
}

#[test]
fn test_non_degeneracy() {
    let e = Bls12_377::pairing(
        G1Affine::prime_subgroup_generator(),
        G2Affine::prime_subgroup_generator(),
    );
    assert_ne!(e, Fq12::one());
    assert!(!e.is_zero());
}

#[test]
fn test_pairing_value_order() {
    let e = Bls12_377::pairing(
        G1Affine::prime_subgroup_generator(),
        G2Affine::prime_subgroup_generator(),
    );
    // the pairing value has order dividing r
    assert_eq!(e.pow(FrParameters::MODULUS), Fq12::one());
}

#[test]
fn test_miller_loop_at_infinity() {
    let p = G1Affine::prime_subgroup_generator();
    let q = G2Affine::prime_subgroup_generator();

    assert_eq!(
        Bls12_377::ate_miller_loop(&G1Affine::zero(), &q),
        Fq12::one()
    );
    assert_eq!(
        Bls12_377::ate_miller_loop(&p, &G2Affine::zero()),
        Fq12::one()
    );
}

/// The product of Miller loops fed into a single final exponentiation
/// computes the product of pairings.
#[test]
fn test_product_of_pairings() {
    let mut rng = test_rng();

    let p1 = G1Projective::rand(&mut rng).into_affine();
    let q1 = G2Projective::rand(&mut rng).into_affine();
    let p2 = G1Projective::rand(&mut rng).into_affine();
    let q2 = G2Projective::rand(&mut rng).into_affine();

    let prepared = [
        (p1.prepare(), q1.prepare()),
        (p2.prepare(), q2.prepare()),
    ];
    let pairs = [
        (&prepared[0].0, &prepared[0].1),
        (&prepared[1].0, &prepared[1].1),
    ];
    let product =
        Bls12_377::final_exponentiation(&Bls12_377::miller_loop(&pairs)).unwrap();

    assert_eq!(
        product,
        Bls12_377::pairing(p1, q1) * &Bls12_377::pairing(p2, q2)
    );
}

/// e(sP, Q) * e(P, Q)^{-s} == 1.
#[test]
fn test_bilinearity_inverse_form() {
    let mut rng = test_rng();

    let p = G1Projective::rand(&mut rng);
    let q = G2Projective::rand(&mut rng);
    let s = Fr::rand(&mut rng);

    let lhs = Bls12_377::pairing(p.mul(s.into_repr()).into_affine(), q.into_affine());
    let rhs = Bls12_377::pairing(p.into_affine(), q.into_affine())
        .pow(s.into_repr())
        .inverse()
        .unwrap();
    assert_eq!(lhs * &rhs, Fq12::one());
}

/// The addition chain exponentiation by the curve parameter agrees with a
/// slow square-and-multiply by tAbsVal = 9586122913090633729.
#[test]
fn test_exp_by_x() {
    // any pairing output lies in the cyclotomic subgroup
    let c = Bls12_377::pairing(
        G1Affine::prime_subgroup_generator(),
        G2Affine::prime_subgroup_generator(),
    );
    assert_eq!(Bls12_377::exp_by_x(&c), c.pow(&[9586122913090633729u64]));
    assert_eq!(
        Bls12_377::exp_by_x(&c),
        c.cyclotomic_exp(&[9586122913090633729u64])
    );
}

/// 63 doubling steps plus 6 addition steps: 69 line evaluations per loop.
#[test]
fn test_line_evaluation_count() {
    let counter = Bls12_377Parameters::ATE_LOOP_COUNT;
    assert_eq!(counter.len(), 64);
    let doublings = counter.len() - 1;
    let additions: usize = counter[..counter.len() - 1]
        .iter()
        .filter(|&&d| d != 0)
        .count();
    assert_eq!(doublings + additions, 69);
}
