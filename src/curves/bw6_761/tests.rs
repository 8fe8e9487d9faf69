use crate::{
    biginteger::{BigInteger, BigInteger384},
    curves::{
        bw6_761::{Bw6_761, Bw6_761Parameters, G1Affine, G1Projective, G2Affine, G2Projective},
        models::bw6::Bw6Parameters,
        tests::{curve_mul_tests, curve_serialization_tests, curve_tests, test_rng},
        AffineCurve, PairingCurve, PairingEngine, ProjectiveCurve,
    },
    fields::{
        bw6_761::{Fq, Fq2, Fq6, Fr, FrParameters},
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

    let lhs = Bw6_761::pairing(sp, tq);
    let rhs = Bw6_761::pairing(p.into_affine(), q.into_affine()).pow((s * &t).into_repr());
    assert_eq!(lhs, rhs);
    assert_ne!(lhs, Fq6::one());
}

#[test]
fn test_non_degeneracy() {
    let e = Bw6_761::pairing(
        G1Affine::prime_subgroup_generator(),
        G2Affine::prime_subgroup_generator(),
    );
    assert_ne!(e, Fq6::one());
    assert!(!e.is_zero());
}

#[test]
fn test_pairing_value_order() {
    let e = Bw6_761::pairing(
        G1Affine::prime_subgroup_generator(),
        G2Affine::prime_subgroup_generator(),
    );
    assert_eq!(e.pow(FrParameters::MODULUS), Fq6::one());
}

/// Both infinity fast paths return the multiplicative identity.
#[test]
fn test_miller_loop_at_infinity() {
    let p = G1Affine::prime_subgroup_generator();
    let q = G2Affine::prime_subgroup_generator();

    assert_eq!(Bw6_761::ate_miller_loop(&G1Affine::zero(), &q), Fq6::one());
    assert_eq!(Bw6_761::ate_miller_loop(&p, &G2Affine::zero()), Fq6::one());
    assert_eq!(
        Bw6_761::pairing(G1Affine::zero(), q),
        Fq6::one()
    );
}

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
    let product = Bw6_761::final_exponentiation(&Bw6_761::miller_loop(&pairs)).unwrap();

    assert_eq!(
        product,
        Bw6_761::pairing(p1, q1) * &Bw6_761::pairing(p2, q2)
    );
}

/// The addition chain exponentiation by the curve parameter agrees with a
/// slow square-and-multiply by tAbsVal = 9586122913090633729.
#[test]
fn test_exp_by_x() {
    let c = Bw6_761::pairing(
        G1Affine::prime_subgroup_generator(),
        G2Affine::prime_subgroup_generator(),
    );
    assert_eq!(Bw6_761::exp_by_x(&c), c.pow(&[9586122913090633729u64]));
    assert_eq!(
        Bw6_761::exp_by_x(&c),
        c.cyclotomic_exp(&[9586122913090633729u64])
    );
}

/// The sparse multipliers agree with full multiplications by the sparse
/// elements y*V^-2, y*V^-3 and y*V^-5, also when the output aliases the
/// input buffer.
#[test]
fn test_sparse_multipliers() {
    let mut rng = test_rng();

    let v = Fq6::new(Fq2::zero(), Fq2::one(), Fq2::zero());
    let v_inv = v.inverse().unwrap();

    for _ in 0..10 {
        let f = Fq6::rand(&mut rng);
        let y = Fq::rand(&mut rng);
        let mut y6 = Fq6::one();
        y6.mul_by_fp(&y);

        let v_inv_2 = v_inv.square() * &y6;
        let v_inv_3 = v_inv.pow(&[3u64]) * &y6;
        let v_inv_5 = v_inv.pow(&[5u64]) * &y6;

        assert_eq!(Bw6_761::mul_by_v_inv_2(&f, &y), f * &v_inv_2);
        assert_eq!(Bw6_761::mul_by_v_inv_3(&f, &y), f * &v_inv_3);
        assert_eq!(Bw6_761::mul_by_v_inv_5(&f, &y), f * &v_inv_5);

        // aliasing: writing the result back over the operand
        let mut g = f;
        g = Bw6_761::mul_by_v_inv_2(&g, &y);
        assert_eq!(g, f * &v_inv_2);
    }
}

/// First pass: 63 doublings plus 6 additions = 69 evaluations. Second pass:
/// 126 doublings plus 18 additions = 144 evaluations.
#[test]
fn test_line_evaluation_counts() {
    let c1 = Bw6_761Parameters::ATE_LOOP_COUNT_1;
    assert_eq!(c1.len(), 64);
    let slots1 = (c1.len() - 1) + c1[..c1.len() - 1].iter().filter(|&&d| d != 0).count();
    assert_eq!(slots1, 69);

    let c2 = Bw6_761Parameters::ATE_LOOP_COUNT_2;
    assert_eq!(c2.len(), 127);
    let slots2 = (c2.len() - 1) + c2[..c2.len() - 1].iter().filter(|&&d| d != 0).count();
    assert_eq!(slots2, 144);
}

/// The second loop count is the non-adjacent form of x^2 - x - 1.
#[test]
fn test_second_loop_count_is_naf() {
    // x^2 - x - 1 = 91893752504881257691937156713741811711
    let c = BigInteger384([0x8508bfffffffffff, 0x452217cc90000000, 0, 0, 0, 0]);
    let naf = c.find_naf();
    assert_eq!(naf.as_slice(), Bw6_761Parameters::ATE_LOOP_COUNT_2);
    // NAF: no two adjacent non-zero digits
    for w in naf.windows(2) {
        assert!(w[0] == 0 || w[1] == 0);
    }
}
