use crate::fields::Field;
use crate::UniformRand;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

pub(crate) const ITERATIONS: usize = 40;

pub(crate) fn test_rng() -> XorShiftRng {
    XorShiftRng::seed_from_u64(1231275789u64)
}

/// The ring laws every field has to satisfy, on random elements.
pub(crate) fn random_field_tests<F: Field>() {
    let mut rng = test_rng();

    for _ in 0..ITERATIONS {
        let a = F::rand(&mut rng);
        let b = F::rand(&mut rng);

        // (a + b) - b = a
        assert_eq!(a + &b - &b, a);
        // a + b = b + a
        assert_eq!(a + &b, b + &a);
        // (a * b) * b^-1 = a
        if !b.is_zero() {
            assert_eq!(a * &b * &b.inverse().unwrap(), a);
            assert_eq!(a / &b * &b, a);
        }
        // (a^-1)^-1 = a
        if !a.is_zero() {
            assert_eq!(a.inverse().unwrap().inverse().unwrap(), a);
        }
        // -(-a) = a
        assert_eq!(-(-a), a);
        // a^2 = a * a
        assert_eq!(a.square(), a * &a);
        // 2 * a = a + a
        assert_eq!(a.double(), a + &a);
        // a * 0 = 0, a * 1 = a
        assert_eq!(a * &F::zero(), F::zero());
        assert_eq!(a * &F::one(), a);
        // distributivity
        let c = F::rand(&mut rng);
        assert_eq!((a + &b) * &c, a * &c + &(b * &c));
    }

    assert!(F::zero().is_zero());
    assert!(F::one().is_one());
    assert_eq!(F::zero().inverse(), None);
}

/// Every mutating operation must give the same result when the receiver
/// aliases an operand.
pub(crate) fn random_aliasing_tests<F: Field>() {
    let mut rng = test_rng();

    for _ in 0..ITERATIONS {
        let a = F::rand(&mut rng);
        let b = F::rand(&mut rng);

        let mut tmp = a;
        tmp += &b;
        assert_eq!(tmp, a + &b);

        // receiver as both operands
        let mut tmp = a;
        let a_copy = a;
        tmp *= &a_copy;
        assert_eq!(tmp, a.square());

        let mut tmp = a;
        tmp.square_in_place();
        assert_eq!(tmp, a * &a);

        let mut tmp = a;
        tmp.double_in_place();
        let a_copy = a;
        let mut sum = a;
        sum += &a_copy;
        assert_eq!(tmp, sum);

        let mut tmp = a;
        tmp -= &a_copy;
        assert_eq!(tmp, F::zero());

        if !a.is_zero() {
            let mut tmp = a;
            tmp.inverse_in_place().unwrap();
            assert_eq!(tmp, a.inverse().unwrap());
        }
    }
}

/// `frobenius_map(power)` must agree with exponentiation by p^power.
pub(crate) fn random_frobenius_tests<F: Field, C: AsRef<[u64]>>(characteristic: C, maxpower: usize) {
    let mut rng = test_rng();

    for _ in 0..ITERATIONS / 4 {
        let a = F::rand(&mut rng);

        let mut a_0 = a;
        a_0.frobenius_map(0);
        assert_eq!(a, a_0);

        let mut a_q = a.pow(&characteristic);
        for power in 1..maxpower {
            let mut a_qi = a;
            a_qi.frobenius_map(power);
            assert_eq!(a_qi, a_q);

            a_q = a_q.pow(&characteristic);
        }
    }
}

/// Exercises the `pow` ladder against repeated multiplication.
pub(crate) fn random_pow_tests<F: Field>() {
    let mut rng = test_rng();

    for _ in 0..ITERATIONS {
        let a = F::rand(&mut rng);
        let exp = rng.gen_range(0u64..32);
        let mut expected = F::one();
        for _ in 0..exp {
            expected *= &a;
        }
        assert_eq!(a.pow(&[exp]), expected);
    }
}

/// Round trip through the byte serialization.
pub(crate) fn field_serialization_tests<F: Field>() {
    use crate::bytes::{FromBytes, ToBytes};

    let mut rng = test_rng();

    for _ in 0..ITERATIONS {
        let a = F::rand(&mut rng);
        let mut bytes = vec![];
        a.write(&mut bytes).unwrap();
        let b = F::read(bytes.as_slice()).unwrap();
        assert_eq!(a, b);
    }
}
