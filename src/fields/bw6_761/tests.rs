use crate::{
    fields::{
        bw6_761::{Fq, Fq2, Fq2Parameters, Fq6, Fq6Parameters, FqParameters},
        tests::{
            field_serialization_tests, random_aliasing_tests, random_field_tests,
            random_frobenius_tests, random_pow_tests, test_rng,
        },
        Field, Fp2Parameters, Fp6Parameters, FpParameters,
    },
    UniformRand,
};

macro_rules! field_suite {
    ($name:ident, $field:ty) => {
        paste::paste! {
            #[test]
            fn [<test_ $name _ring_laws>]() {
                random_field_tests::<$field>();
            }

            #[test]
            fn [<test_ $name _aliasing>]() {
                random_aliasing_tests::<$field>();
            }

            #[test]
            fn [<test_ $name _pow>]() {
                random_pow_tests::<$field>();
            }

            #[test]
            fn [<test_ $name _serialization>]() {
                field_serialization_tests::<$field>();
            }
        }
    };
}

field_suite!(fq, Fq);
field_suite!(fq2, Fq2);
field_suite!(fq6, Fq6);

#[test]
fn test_fq2_nonresidue() {
    // u^2 = -4 for u = (0, 1)
    let u = Fq2::new(Fq::zero(), Fq::one());
    let m4 = -Fq::one().double().double();
    assert_eq!(u.square(), Fq2::new(m4, Fq::zero()));
    assert_eq!(Fq2Parameters::NONRESIDUE, m4);
    assert_eq!(
        Fq2Parameters::NONRESIDUE * &Fq2Parameters::NONRESIDUE_INV,
        Fq::one()
    );
    let mut rng = test_rng();
    let a = Fq::rand(&mut rng);
    assert_eq!(Fq2Parameters::mul_fp_by_nonresidue(&a), a * &m4);
}

#[test]
fn test_fq6_tower() {
    // v^3 = u and v^6 = -4
    let v = Fq6::new(Fq2::zero(), Fq2::one(), Fq2::zero());
    let u = Fq6::new(Fq2::new(Fq::zero(), Fq::one()), Fq2::zero(), Fq2::zero());
    assert_eq!(v.square() * &v, u);
    let m4 = Fq2::new(-Fq::one().double().double(), Fq::zero());
    assert_eq!(u.square(), Fq6::new(m4, Fq2::zero(), Fq2::zero()));
}

#[test]
fn test_frobenius() {
    random_frobenius_tests::<Fq2, _>(FqParameters::MODULUS, 2);
    random_frobenius_tests::<Fq6, _>(FqParameters::MODULUS, 6);
}

#[test]
fn test_frobenius_order_six() {
    let mut rng = test_rng();
    let a = Fq6::rand(&mut rng);
    let mut b = a;
    for _ in 0..6 {
        b.frobenius_map(1);
    }
    assert_eq!(a, b);
}

/// Maps a random element into the cyclotomic subgroup by exponentiation
/// with (q^3 - 1)(q + 1).
pub(crate) fn random_cyclotomic(rng: &mut impl rand::Rng) -> Fq6 {
    let a = Fq6::rand(rng);
    let mut t = a;
    t.frobenius_map(3);
    let t = t * &a.inverse().unwrap();
    let mut t_q = t;
    t_q.frobenius_map(1);
    t_q * &t
}

#[test]
fn test_fq6_cyclotomic_square() {
    let mut rng = test_rng();
    for _ in 0..10 {
        let c = random_cyclotomic(&mut rng);
        assert_eq!(c.cyclotomic_square(), c.square());
        assert_eq!(c.unitary_inverse(), c.inverse().unwrap());
        // Frobenius^3 conjugates the quadratic-over-cubic decomposition
        let mut f3 = c;
        f3.frobenius_map(3);
        assert_eq!(f3, c.unitary_inverse());
    }
}

#[test]
fn test_fq6_cyclotomic_exp() {
    let mut rng = test_rng();
    let c = random_cyclotomic(&mut rng);
    let exp = [0xdeadu64, 0xbeef];
    assert_eq!(c.cyclotomic_exp(&exp), c.pow(&exp));
}

#[test]
fn test_fq6_mul_by_fp2() {
    let mut rng = test_rng();
    for _ in 0..10 {
        let a = Fq6::rand(&mut rng);
        let y = Fq2::rand(&mut rng);
        let mut sparse = Fq6::zero();
        sparse.c0 = y;
        let mut b = a;
        b.mul_by_fp2(&y);
        assert_eq!(b, a * &sparse);
    }
}

#[test]
fn test_fq6_mul_by_nonresidue() {
    let mut rng = test_rng();
    let a = Fq6::rand(&mut rng);
    let v = Fq6::new(Fq2::zero(), Fq2::one(), Fq2::zero());
    let mut b = a;
    b.mul_by_nonresidue();
    assert_eq!(b, a * &v);
    let y = Fq2::rand(&mut rng);
    assert_eq!(
        Fq6Parameters::mul_fp2_by_nonresidue(&y),
        y * &Fq6Parameters::NONRESIDUE
    );
}
