use crate::{
    biginteger::BigInteger384,
    fields::{
        bls12_377::{Fq, Fq12, Fq2, Fq2Parameters, Fq6, FqParameters, Fr},
        tests::{
            field_serialization_tests, random_aliasing_tests, random_field_tests,
            random_frobenius_tests, random_pow_tests, test_rng,
        },
        Field, Fp2Parameters, FpParameters, PrimeField,
    },
    UniformRand,
};
use std::str::FromStr;

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

field_suite!(fr, Fr);
field_suite!(fq, Fq);
field_suite!(fq2, Fq2);
field_suite!(fq6, Fq6);
field_suite!(fq12, Fq12);

#[test]
fn test_fq_from_str() {
    let a = Fq::from_str("84580").unwrap();
    assert_eq!(a.into_repr(), BigInteger384::from(84580));
    assert!(Fq::from_str("").is_err());
    assert!(Fq::from_str("04").is_err());
    assert!(Fq::from_str("a").is_err());
    assert_eq!(Fq::from_str("0").unwrap(), Fq::zero());
}

#[test]
fn test_fq_repr_roundtrip() {
    let mut rng = test_rng();
    for _ in 0..20 {
        let a = Fq::rand(&mut rng);
        assert_eq!(Fq::from_repr(a.into_repr()), a);
    }
}

#[test]
fn test_fq2_nonresidue() {
    // u^2 = -5 for u = (0, 1)
    let u = Fq2::new(Fq::zero(), Fq::one());
    let mut m5 = Fq::one().double().double() + &Fq::one();
    m5 = -m5;
    assert_eq!(u.square(), Fq2::new(m5, Fq::zero()));
    assert_eq!(Fq2Parameters::NONRESIDUE, m5);
    assert_eq!(
        Fq2Parameters::NONRESIDUE * &Fq2Parameters::NONRESIDUE_INV,
        Fq::one()
    );
    let mut rng = test_rng();
    let a = Fq::rand(&mut rng);
    assert_eq!(Fq2Parameters::mul_fp_by_nonresidue(&a), a * &m5);
}

#[test]
fn test_fq2_conjugation() {
    let mut rng = test_rng();
    for _ in 0..20 {
        let a = Fq2::rand(&mut rng);
        let mut abar = a;
        abar.conjugate();
        assert!((a + &abar).c1.is_zero());
        assert!((a - &abar).c0.is_zero());
        assert_eq!((a + &abar).c0, a.c0.double());
    }
}

#[test]
fn test_frobenius() {
    random_frobenius_tests::<Fq2, _>(FqParameters::MODULUS, 2);
    random_frobenius_tests::<Fq6, _>(FqParameters::MODULUS, 6);
    random_frobenius_tests::<Fq12, _>(FqParameters::MODULUS, 12);
}

#[test]
fn test_frobenius_orders() {
    let mut rng = test_rng();
    let a = Fq6::rand(&mut rng);
    let mut b = a;
    for _ in 0..6 {
        b.frobenius_map(1);
    }
    assert_eq!(a, b);
    let mut b = a;
    for _ in 0..3 {
        b.frobenius_map(2);
    }
    assert_eq!(a, b);
    let mut b = a;
    for _ in 0..2 {
        b.frobenius_map(3);
    }
    assert_eq!(a, b);

    let a = Fq12::rand(&mut rng);
    let mut b = a;
    for _ in 0..12 {
        b.frobenius_map(1);
    }
    assert_eq!(a, b);
    let mut b = a;
    for _ in 0..6 {
        b.frobenius_map(2);
    }
    assert_eq!(a, b);
    let mut b = a;
    for _ in 0..4 {
        b.frobenius_map(3);
    }
    assert_eq!(a, b);
}

/// Maps a random element into the cyclotomic subgroup by exponentiation
/// with (q^6 - 1)(q^2 + 1).
fn random_cyclotomic(rng: &mut impl rand::Rng) -> Fq12 {
    let a = Fq12::rand(rng);
    let mut t = a.unitary_inverse() * &a.inverse().unwrap();
    let t2 = t;
    t.frobenius_map(2);
    t * &t2
}

#[test]
fn test_fq12_cyclotomic_square() {
    let mut rng = test_rng();
    for _ in 0..10 {
        let c = random_cyclotomic(&mut rng);
        assert_eq!(c.cyclotomic_square(), c.square());
        assert_eq!(c.unitary_inverse(), c.inverse().unwrap());
    }
    // outside of the subgroup the two squarings differ
    let a = Fq12::rand(&mut rng);
    assert_ne!(a.cyclotomic_square(), a.square());
}

#[test]
fn test_fq12_cyclotomic_exp() {
    let mut rng = test_rng();
    let c = random_cyclotomic(&mut rng);
    let exp = [0x1234u64, 0x5678];
    assert_eq!(c.cyclotomic_exp(&exp), c.pow(&exp));
}

#[test]
fn test_fq12_conjugation() {
    let mut rng = test_rng();
    let a = Fq12::rand(&mut rng);
    let mut abar = a;
    abar.conjugate();
    assert!((a + &abar).c1.is_zero());
    assert!((a - &abar).c0.is_zero());
}

#[test]
fn test_fq12_sparse_multipliers() {
    let mut rng = test_rng();
    for _ in 0..10 {
        let f = Fq12::rand(&mut rng);
        let y = Fq2::rand(&mut rng);

        // y*v*w has C1.B1 = y as only non-zero coordinate
        let mut l = Fq12::zero();
        l.c1.c1 = y;
        assert_eq!(f.mul_by_vw(&y), f * &l);

        // y*v has C0.B1 = y
        let mut l = Fq12::zero();
        l.c0.c1 = y;
        assert_eq!(f.mul_by_v(&y), f * &l);

        // y*v^2*w has C1.B2 = y
        let mut l = Fq12::zero();
        l.c1.c2 = y;
        assert_eq!(f.mul_by_v2w(&y), f * &l);
    }
}

/// The easy part of the final exponentiation, computed via Frobenius
/// twiddles, must equal a plain exponentiation by (q^6 - 1)(q^2 + 1).
#[test]
fn test_easy_part_exponent() {
    // (q^6 - 1)(q^2 + 1) in 64 bit limbs, little endian
    let q = FqParameters::MODULUS;
    let exponent = naive_exponent(&q);

    let mut rng = test_rng();
    let a = Fq12::rand(&mut rng);
    let mut t = a.unitary_inverse() * &a.inverse().unwrap();
    let t2 = t;
    t.frobenius_map(2);
    let via_frobenius = t * &t2;
    assert_eq!(via_frobenius, a.pow(&exponent));
}

// Schoolbook bignum helpers, only used to build the easy part exponent above.
fn naive_exponent(q: &BigInteger384) -> Vec<u64> {
    let q = q.as_ref();
    let q6 = naive_pow(q, 6);
    let q2 = naive_pow(q, 2);
    let q6_minus_one = naive_sub(&q6, &[1]);
    let q2_plus_one = naive_add(&q2, &[1]);
    naive_mul(&q6_minus_one, &q2_plus_one)
}

fn naive_mul(a: &[u64], b: &[u64]) -> Vec<u64> {
    let mut r = vec![0u64; a.len() + b.len()];
    for (i, &ai) in a.iter().enumerate() {
        let mut carry = 0u128;
        for (j, &bj) in b.iter().enumerate() {
            let t = u128::from(ai) * u128::from(bj) + u128::from(r[i + j]) + carry;
            r[i + j] = t as u64;
            carry = t >> 64;
        }
        let mut k = i + b.len();
        while carry != 0 {
            let t = u128::from(r[k]) + carry;
            r[k] = t as u64;
            carry = t >> 64;
            k += 1;
        }
    }
    r
}

fn naive_pow(a: &[u64], e: usize) -> Vec<u64> {
    let mut r = vec![1u64];
    for _ in 0..e {
        r = naive_mul(&r, a);
    }
    r
}

fn naive_add(a: &[u64], b: &[u64]) -> Vec<u64> {
    let mut r = a.to_vec();
    r.push(0);
    let mut carry = 0u128;
    for i in 0..r.len() {
        let t = u128::from(r[i]) + u128::from(*b.get(i).unwrap_or(&0)) + carry;
        r[i] = t as u64;
        carry = t >> 64;
    }
    r
}

fn naive_sub(a: &[u64], b: &[u64]) -> Vec<u64> {
    let mut r = a.to_vec();
    let mut borrow = 0i128;
    for i in 0..r.len() {
        let t = i128::from(r[i]) - i128::from(*b.get(i).unwrap_or(&0)) - borrow;
        if t < 0 {
            r[i] = (t + (1i128 << 64)) as u64;
            borrow = 1;
        } else {
            r[i] = t as u64;
            borrow = 0;
        }
    }
    r
}
