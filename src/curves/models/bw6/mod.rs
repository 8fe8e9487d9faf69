//! Model for BW6 curves and their optimal Ate pairing.
//!
//! BW6 curves are embedding degree 6 outer curves: both source groups live
//! over the base field itself, G2 on the sextic twist. The Miller
//! accumulator is computed in two passes driven by two loop counters, and
//! the hard part of the final exponentiation follows the recipe of
//! [HG 2020](https://eprint.iacr.org/2020/351.pdf), Appendix B.

use crate::{
    curves::{
        models::{ModelParameters, SWModelParameters},
        AffineCurve, PairingCurve, PairingEngine, ProjectiveCurve,
    },
    fields::{
        fp2::Fp2Parameters,
        fp6_3over2::{Fp6, Fp6Parameters},
        Field, Fp2, PrimeField,
    },
};

use std::marker::PhantomData;
use std::sync::mpsc::{sync_channel, SyncSender};
use std::thread;

/// Parameters of a BW6 curve E: y^2 = x^3 + b mod p as needed by the Ate
/// pairing.
///
/// The embedding field F6 is regarded as towered extension
///
/// ```text
///     F6 = F2[V]/(V^3-U),
///     F2 = Fp[U]/(U^2-alpha),
/// ```
///
/// with a non-square and non-cube alpha from Fp, so that V^6 = alpha. G2 is
/// a prime order subgroup of the sextic M-twist over Fp itself; line
/// evaluations are plain base field triples mixed into the accumulator
/// through multiplications by sparse elements supported on negative powers
/// of V.
pub trait Bw6Parameters: 'static {
    /// Binary digits of the first loop count, the absolute value of the
    /// curve parameter x, least significant bit first.
    const ATE_LOOP_COUNT_1: &'static [i8];
    /// Non-adjacent form of the second loop count x^2 - x - 1, least
    /// significant digit first.
    const ATE_LOOP_COUNT_2: &'static [i8];
    /// Base field
    type Fp: PrimeField;
    /// quadratic slice of the embedding field, carrier of the sparse line
    /// multipliers
    type Fp2Params: Fp2Parameters<Fp = Self::Fp>;
    /// embedding field
    type Fp6Params: Fp6Parameters<Fp2Params = Self::Fp2Params>;
    type G1Parameters: SWModelParameters<BaseField = Self::Fp>;
    type G2Parameters: SWModelParameters<
        BaseField = Self::Fp,
        ScalarField = <Self::G1Parameters as ModelParameters>::ScalarField,
    >;
}

pub mod g1;
pub mod g2;

pub use self::{
    g1::{G1Affine, G1Prepared, G1Projective},
    g2::{G2Affine, G2Prepared, G2Projective, LineEvaluation},
};

/// Channel bound for the line-evaluation workers. Larger than the number of
/// evaluations of either pass, so the workers run freely ahead of the
/// accumulation loops.
const EVALUATION_BUFFER: usize = 213;

#[derive(Derivative)]
#[derivative(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Bw6<P: Bw6Parameters>(PhantomData<fn() -> P>);

impl<P: Bw6Parameters> Bw6<P> {
    /// The single-pair Miller loop. Returns one if either input is the point
    /// at infinity.
    ///
    /// The accumulator is built in two passes. The first walks the binary
    /// expansion of x and yields g(P) with divisor x(Q) - ([x]Q) - (x-1)(O).
    /// The second walks the NAF of x^2 - x - 1 starting from [x]Q, mixing
    /// the cached g(P) (resp. its inverse) back in at every non-zero digit,
    /// and is finished by a Frobenius twist and the chord through [x]Q and Q
    /// correcting for the missing "plus one" term.
    pub fn ate_miller_loop(p: &G1Affine<P>, q: &G2Affine<P>) -> Fp6<P::Fp6Params> {
        let mut f = Fp6::<P::Fp6Params>::one();

        if p.is_zero() || q.is_zero() {
            return f;
        }

        let p = *p;
        let q = *q;

        thread::scope(|scope| {
            // Miller loop part 1: f(P), div(f) = x(Q) - ([x]Q) - (x-1)(O)
            let (evaluations_1, next_evaluation_1) = sync_channel(EVALUATION_BUFFER);
            let producer = scope.spawn(move || {
                let mut xq = q.into_projective();
                Self::pre_compute_1(&mut xq, &q, &p, evaluations_1);
                xq
            });

            for i in (0..P::ATE_LOOP_COUNT_1.len() - 1).rev() {
                f.square_in_place();
                Self::mul_assign_line(&mut f, &next_evaluation_1.recv().unwrap());

                if P::ATE_LOOP_COUNT_1[i] == 1 {
                    Self::mul_assign_line(&mut f, &next_evaluation_1.recv().unwrap());
                }
            }

            let xq = producer.join().unwrap();

            // Cache g(P) and its inverse; the second pass accumulates them
            // at the signed digits of its loop count.
            let mx = f;
            let mx_inv = f.inverse().unwrap();

            // Complete g(P) to div(g) = (x+1)(Q) - ([x+1]Q) - x(O) by the
            // chord through [x]Q and Q (the vertical line is dropped).
            let mut mx_plus_one = mx;
            let chord = Self::line_eval(&xq, &q.into_projective(), &p);
            Self::mul_assign_line(&mut mx_plus_one, &chord);

            // Miller loop part 2:
            // f(P), div(f) = (x^3-x^2-x)(Q) - ([x^3-x^2-x]Q) - (x^3-x^2-x-1)(O)
            let (evaluations_2, next_evaluation_2) = sync_channel(EVALUATION_BUFFER);
            scope.spawn(move || Self::pre_compute_2(xq, &p, evaluations_2));

            for i in (0..P::ATE_LOOP_COUNT_2.len() - 1).rev() {
                f.square_in_place();
                Self::mul_assign_line(&mut f, &next_evaluation_2.recv().unwrap());

                match P::ATE_LOOP_COUNT_2[i] {
                    1 => {
                        Self::mul_assign_line(&mut f, &next_evaluation_2.recv().unwrap());
                        f *= &mx;
                    }
                    -1 => {
                        Self::mul_assign_line(&mut f, &next_evaluation_2.recv().unwrap());
                        f *= &mx_inv;
                    }
                    _ => {}
                }
            }

            // g(P) * f(P)^q
            f.frobenius_map(1);
            f *= &mx_plus_one;
        });

        f
    }

    /// Produces the line evaluations of the first pass, and leaves `xq` at
    /// [x]Q.
    fn pre_compute_1(
        xq: &mut G2Projective<P>,
        q: &G2Affine<P>,
        p: &G1Affine<P>,
        evaluations: SyncSender<LineEvaluation<P>>,
    ) {
        let mut q1: G2Projective<P>;

        for i in (0..P::ATE_LOOP_COUNT_1.len() - 1).rev() {
            q1 = *xq;
            xq.double_in_place();
            *xq = -*xq;
            evaluations.send(Self::line_eval(&q1, xq, p)).unwrap();
            *xq = -*xq;

            if P::ATE_LOOP_COUNT_1[i] == 1 {
                evaluations
                    .send(Self::line_eval(xq, &q.into_projective(), p))
                    .unwrap();
                xq.add_assign_mixed(q);
            }
        }
    }

    /// Produces the line evaluations of the second pass, walking from [x]Q
    /// with additions of +/-[x]Q at the signed digits.
    fn pre_compute_2(
        xq: G2Projective<P>,
        p: &G1Affine<P>,
        evaluations: SyncSender<LineEvaluation<P>>,
    ) {
        let mut q = xq;
        let mut q1: G2Projective<P>;
        let q_base = xq;
        let q_neg = -xq;

        for i in (0..P::ATE_LOOP_COUNT_2.len() - 1).rev() {
            q1 = q;
            q.double_in_place();
            q = -q;
            evaluations.send(Self::line_eval(&q1, &q, p)).unwrap();
            q = -q;

            match P::ATE_LOOP_COUNT_2[i] {
                1 => {
                    evaluations.send(Self::line_eval(&q, &q_base, p)).unwrap();
                    q += &q_base;
                }
                -1 => {
                    evaluations.send(Self::line_eval(&q, &q_neg, p)).unwrap();
                    q += &q_neg;
                }
                _ => {}
            }
        }
    }

    /// Computes the evaluation at P of the line through Q and R (on the
    /// twist). Q and R are in Jacobian coordinates and are read through
    /// their homogeneous projective form.
    fn line_eval(
        q: &G2Projective<P>,
        r: &G2Projective<P>,
        p: &G1Affine<P>,
    ) -> LineEvaluation<P> {
        let qx = q.x * &q.z;
        let qy = q.y;
        let qz = q.z.square() * &q.z;
        let rx = r.x * &r.z;
        let ry = r.y;
        let rz = r.z.square() * &r.z;

        let mut r0 = qz * &rx - &(qx * &rz);
        let mut r1 = qy * &rz - &(qz * &ry);
        let r2 = qx * &ry - &(qy * &rx);

        r0 *= &p.y;
        r1 *= &p.x;

        LineEvaluation { r0, r1, r2 }
    }

    /// Mixes a line evaluation into the accumulator. The line is the sparse
    /// embedding-field element r0*V^-2 + r1*V^-3 + r2*V^-5.
    fn mul_assign_line(f: &mut Fp6<P::Fp6Params>, l: &LineEvaluation<P>) {
        let a = Self::mul_by_v_inv_3(f, &l.r1);
        let b = Self::mul_by_v_inv_2(f, &l.r0);
        let c = Self::mul_by_v_inv_5(f, &l.r2);
        *f = a + &b + &c;
    }

    /// Multiply by the sparse element y*V^-3. With V^3 = U and U^2 = alpha,
    /// V^-3 = alpha^-1 * U, an element of F2.
    pub fn mul_by_v_inv_3(f: &Fp6<P::Fp6Params>, y: &P::Fp) -> Fp6<P::Fp6Params> {
        let tmp = Fp2::<P::Fp2Params>::new(
            P::Fp::zero(),
            *y * &P::Fp2Params::NONRESIDUE_INV,
        );
        let mut result = *f;
        result.mul_by_fp2(&tmp);
        result
    }

    /// Multiply by the sparse element y*V^-2 = y * alpha^-1 * U * V.
    pub fn mul_by_v_inv_2(f: &Fp6<P::Fp6Params>, y: &P::Fp) -> Fp6<P::Fp6Params> {
        let tmp = Fp2::<P::Fp2Params>::new(
            P::Fp::zero(),
            *y * &P::Fp2Params::NONRESIDUE_INV,
        );
        let mut b0 = f.c2;
        b0.mul_by_fp(y);
        Fp6::new(b0, f.c0 * &tmp, f.c1 * &tmp)
    }

    /// Multiply by the sparse element y*V^-5 = y * alpha^-1 * V.
    pub fn mul_by_v_inv_5(f: &Fp6<P::Fp6Params>, y: &P::Fp) -> Fp6<P::Fp6Params> {
        let tmp = Fp2::<P::Fp2Params>::new(
            P::Fp::zero(),
            *y * &P::Fp2Params::NONRESIDUE_INV,
        );
        let b0 = f.c2 * &tmp;
        let mut b1 = f.c0;
        b1.mul_by_fp(&tmp.c1);
        let mut b2 = f.c1;
        b2.mul_by_fp(&tmp.c1);
        Fp6::new(b0, b1, b2)
    }

    /// Exponentiation by the curve parameter x = 9586122913090633729, as a
    /// fixed addition chain: the Brauer chain for x >> 46 = 136227, the 46
    /// trailing squarings, and the final multiplication for the low bit.
    /// Valid on the cyclotomic subgroup only.
    pub fn exp_by_x(f: &Fp6<P::Fp6Params>) -> Fp6<P::Fp6Params> {
        let mut result = *f;
        for _ in 0..5 {
            result = result.cyclotomic_square();
        }
        result *= f; // 33
        let x33 = result;
        for _ in 0..7 {
            result = result.cyclotomic_square();
        }
        result *= &x33; // 4257
        for _ in 0..4 {
            result = result.cyclotomic_square();
        }
        result *= f; // 68113
        result = result.cyclotomic_square();
        result *= f; // 136227
        for _ in 0..46 {
            result = result.cyclotomic_square();
        }
        result *= f;
        result
    }
}

impl<P: Bw6Parameters> PairingEngine for Bw6<P>
where
    G1Affine<P>: PairingCurve<
        BaseField = <P::G1Parameters as ModelParameters>::BaseField,
        ScalarField = <P::G1Parameters as ModelParameters>::ScalarField,
        Projective = G1Projective<P>,
        PairWith = G2Affine<P>,
        Prepared = G1Prepared<P>,
        PairingResult = Fp6<P::Fp6Params>,
    >,
    G2Affine<P>: PairingCurve<
        BaseField = <P::G2Parameters as ModelParameters>::BaseField,
        ScalarField = <P::G1Parameters as ModelParameters>::ScalarField,
        Projective = G2Projective<P>,
        PairWith = G1Affine<P>,
        Prepared = G2Prepared<P>,
        PairingResult = Fp6<P::Fp6Params>,
    >,
{
    type Fr = <P::G1Parameters as ModelParameters>::ScalarField;
    type G1Projective = G1Projective<P>;
    type G1Affine = G1Affine<P>;
    type G2Projective = G2Projective<P>;
    type G2Affine = G2Affine<P>;
    type Fq = P::Fp;
    type Fqe = P::Fp;
    type Fqk = Fp6<P::Fp6Params>;

    fn miller_loop<'a, I>(i: I) -> Self::Fqk
    where
        I: IntoIterator<
            Item = &'a (
                &'a <Self::G1Affine as PairingCurve>::Prepared,
                &'a <Self::G2Affine as PairingCurve>::Prepared,
            ),
        >,
    {
        let mut result = Self::Fqk::one();
        for &(p, q) in i {
            result *= &Self::ate_miller_loop(&p.0, &q.0);
        }
        result
    }

    fn final_exponentiation(f: &Self::Fqk) -> Option<Self::Fqk> {
        // The exponent (p^6 - 1)/r factors as (p^3 - 1)(p + 1) (the easy
        // part) times a multiple of (p^2 - p + 1)/r (the hard part below).
        match f.inverse() {
            Some(f_inv) => {
                // f^(p^3 - 1)
                let mut t = *f;
                t.frobenius_map(3);
                t *= &f_inv;
                // f^((p^3 - 1)(p + 1))
                let mut result = t;
                result.frobenius_map(1);
                result *= &t;

                // Hard part, Appendix B of https://eprint.iacr.org/2020/351.pdf:
                // a degree 7 polynomial in exp_by_x interleaved with Frobenius
                // powers and cyclotomic squarings.
                let mut f_pow = [Fp6::<P::Fp6Params>::zero(); 8];
                let mut fp_pow = [Fp6::<P::Fp6Params>::zero(); 10];

                f_pow[0] = result;
                for i in 1..8 {
                    f_pow[i] = Self::exp_by_x(&f_pow[i - 1]);
                }
                for i in 0..8 {
                    fp_pow[i] = f_pow[i];
                    fp_pow[i].frobenius_map(1);
                }
                fp_pow[8] = Self::exp_by_x(&fp_pow[7]);
                fp_pow[9] = Self::exp_by_x(&fp_pow[8]);

                let mut result = fp_pow[5];
                result.frobenius_map(3);
                result *= &fp_pow[3];
                result *= &fp_pow[6];
                result = result.cyclotomic_square();

                let f4fp2 = f_pow[4] * &fp_pow[2];
                let mut buf = f_pow[0] * &f_pow[1];
                buf *= &f_pow[3];
                buf *= &f4fp2;
                buf *= &fp_pow[8];
                buf.frobenius_map(3);
                result *= &buf;

                result *= &f_pow[5];
                result *= &fp_pow[0];
                result = result.cyclotomic_square();

                let mut buf = f_pow[7];
                buf.frobenius_map(3);
                result *= &buf;

                result *= &fp_pow[9];
                result = result.cyclotomic_square();

                let f2fp4 = f_pow[2] * &fp_pow[4];
                let f4fp2fp5 = f4fp2 * &fp_pow[5];
                let mut buf = f2fp4 * &f_pow[3];
                buf *= &fp_pow[3];
                buf.frobenius_map(3);
                result *= &buf;

                result *= &f4fp2fp5;
                result *= &f_pow[6];
                result *= &fp_pow[7];
                result = result.cyclotomic_square();

                let mut buf = fp_pow[0] * &fp_pow[9];
                buf.frobenius_map(3);
                result *= &buf;
                result *= &f_pow[0];
                result *= &f_pow[7];
                result *= &fp_pow[1];
                result = result.cyclotomic_square();

                let fp6fp8 = fp_pow[6] * &fp_pow[8];
                let f5fp7 = f_pow[5] * &fp_pow[7];
                let mut buf = fp6fp8;
                buf.frobenius_map(3);
                result *= &buf;

                result *= &f5fp7;
                result *= &fp_pow[2];
                result = result.cyclotomic_square();

                let f3f6 = f_pow[3] * &f_pow[6];
                let f1f7 = f_pow[1] * &f_pow[7];

                let mut buf = f1f7 * &f_pow[2];
                buf.frobenius_map(3);
                result *= &buf;

                result *= &f3f6;
                result *= &fp_pow[9];
                result = result.cyclotomic_square();

                let mut buf = f4fp2 * &f5fp7;
                buf *= &fp6fp8;
                buf.frobenius_map(3);
                result *= &buf;

                result *= &f_pow[0];
                result *= &fp_pow[0];
                result *= &fp_pow[3];
                result *= &fp_pow[5];
                result = result.cyclotomic_square();

                let mut buf = f3f6;
                buf.frobenius_map(3);
                result *= &buf;

                result *= &fp_pow[1];
                result = result.cyclotomic_square();

                let mut buf = f2fp4 * &f4fp2fp5;
                buf *= &fp_pow[9];
                buf.frobenius_map(3);
                result *= &buf;

                result *= &f1f7;
                result *= &f5fp7;
                result *= &fp_pow[0];

                Some(result)
            }
            None => None,
        }
    }
}
