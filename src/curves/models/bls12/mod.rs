//! Model for BLS12 curves and their optimal Ate pairing.
//!
//! Supports the following standard efficiency measures for pairings:
//!
//! - G2 is represented by a sextic twist over a quadratic extension of the base field,
//! - the Frobenius operator is applied to reduce the cost of the final exponentiation,
//! - line evaluations are produced by a dedicated worker running concurrently
//!   with the accumulation loop, coordinated through a bounded channel.

use crate::{
    curves::{
        models::{ModelParameters, SWModelParameters},
        AffineCurve, PairingCurve, PairingEngine, ProjectiveCurve,
    },
    fields::{
        fp12_2over3over2::{Fp12, Fp12Parameters},
        fp2::Fp2Parameters,
        fp6_3over2::Fp6Parameters,
        Field, Fp2, PrimeField,
    },
};

use std::marker::PhantomData;
use std::sync::mpsc::{sync_channel, SyncSender};
use std::thread;

/// Parameters of a BLS12 curve E: y^2 = x^3 + b mod p as needed by the Ate
/// pairing.
///
/// The embedding field F12 is regarded as towered extension
///
/// ```text
///     F12 = F6[W]/(W^2-V),
///     F6 = F2[V]/(V^3-U),
///     F2 = Fp[U]/(U^2-alpha),
/// ```
///
/// using a non-square alpha from Fp, and the non-cube U from F2. G2 is
/// represented by a subgroup of prime order r = ord(G1) of the sextic D-twist
///
/// ```text
///     E2: y^2 = x^3 + b/U
/// ```
///
/// over F2; the sparse multipliers mixing the line evaluations into the
/// Miller accumulator encode this twist layout.
pub trait Bls12Parameters: 'static {
    /// Binary digits of the Ate loop count, equal to the absolute value of
    /// the BLS parameter x, least significant bit first.
    const ATE_LOOP_COUNT: &'static [i8];
    /// Base field
    type Fp: PrimeField;
    /// extension field for the sextic twist
    type Fp2Params: Fp2Parameters<Fp = Self::Fp>;
    /// intermediate field as cubic extension of Fp2
    type Fp6Params: Fp6Parameters<Fp2Params = Self::Fp2Params>;
    /// embedding field
    type Fp12Params: Fp12Parameters<Fp6Params = Self::Fp6Params>;
    type G1Parameters: SWModelParameters<BaseField = Self::Fp>;
    type G2Parameters: SWModelParameters<
        BaseField = Fp2<Self::Fp2Params>,
        ScalarField = <Self::G1Parameters as ModelParameters>::ScalarField,
    >;
}

pub mod g1;
pub mod g2;

pub use self::{
    g1::{G1Affine, G1Prepared, G1Projective},
    g2::{G2Affine, G2Prepared, G2Projective, LineEvaluation},
};

/// How far ahead of the accumulation loop the line-evaluation worker may run.
/// Deliberately smaller than the number of produced evaluations, so the
/// channel exerts backpressure on the worker.
const EVALUATION_BUFFER: usize = 20;

#[derive(Derivative)]
#[derivative(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Bls12<P: Bls12Parameters>(PhantomData<fn() -> P>);

impl<P: Bls12Parameters> Bls12<P> {
    /// The single-pair Miller loop. Returns one if either input is the point
    /// at infinity.
    ///
    /// Walks the binary expansion of the loop count from the bit below the
    /// most significant one downwards, squaring the accumulator at every
    /// step and mixing in the line evaluations received from the worker.
    pub fn ate_miller_loop(
        p: &G1Affine<P>,
        q: &G2Affine<P>,
    ) -> Fp12<P::Fp12Params> {
        let mut f = Fp12::<P::Fp12Params>::one();

        if p.is_zero() || q.is_zero() {
            return f;
        }

        let p = *p;
        let q = *q;

        thread::scope(|scope| {
            let (evaluations, next_evaluation) = sync_channel(EVALUATION_BUFFER);
            scope.spawn(move || Self::pre_compute(&q, &p, evaluations));

            for i in (0..P::ATE_LOOP_COUNT.len() - 1).rev() {
                f.square_in_place();
                Self::mul_assign_line(&mut f, &next_evaluation.recv().unwrap());

                if P::ATE_LOOP_COUNT[i] == 1 {
                    Self::mul_assign_line(&mut f, &next_evaluation.recv().unwrap());
                }
            }
        });

        f
    }

    /// Produces the line evaluations consumed by the Miller loop, walking Q
    /// through its doubling/addition schedule. Sends exactly one message per
    /// evaluation; blocks when the channel is full.
    fn pre_compute(
        q: &G2Affine<P>,
        p: &G1Affine<P>,
        evaluations: SyncSender<LineEvaluation<P>>,
    ) {
        let mut q1: G2Projective<P>;
        let mut q2 = q.into_projective();
        let q_base = *q;

        for i in (0..P::ATE_LOOP_COUNT.len() - 1).rev() {
            q1 = q2;
            q2.double_in_place();
            q2 = -q2;
            // the tangent at Q1 passes through Q1 twice and -2*Q1
            evaluations
                .send(Self::line_eval(&q1, &q2, p))
                .unwrap();
            q2 = -q2;

            if P::ATE_LOOP_COUNT[i] == 1 {
                // the chord through Q2 and the base point
                evaluations
                    .send(Self::line_eval(&q2, &q_base.into_projective(), p))
                    .unwrap();
                q2.add_assign_mixed(&q_base);
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
        // (X/Z^2, Y/Z^3) = (X*Z : Y : Z^3) in homogeneous coordinates
        let qx = q.x * &q.z;
        let qy = q.y;
        let qz = q.z.square() * &q.z;
        let rx = r.x * &r.z;
        let ry = r.y;
        let rz = r.z.square() * &r.z;

        let mut r0 = qz * &rx - &(qx * &rz);
        let mut r1 = qy * &rz - &(qz * &ry);
        let r2 = qx * &ry - &(qy * &rx);

        r0.mul_by_fp(&p.y);
        r1.mul_by_fp(&p.x);

        LineEvaluation { r0, r1, r2 }
    }

    /// Mixes a line evaluation into the accumulator. The line is the sparse
    /// embedding-field element r0*V + r1*V*W + r2*V^2*W.
    fn mul_assign_line(f: &mut Fp12<P::Fp12Params>, l: &LineEvaluation<P>) {
        let a = f.mul_by_vw(&l.r1);
        let b = f.mul_by_v(&l.r0);
        let c = f.mul_by_v2w(&l.r2);
        *f = a + &b + &c;
    }

    /// Exponentiation by the curve parameter x = 9586122913090633729, as a
    /// fixed addition chain.
    ///
    /// x >> 46 = 136227 is reached by a Brauer chain of 21 steps
    ///
    /// ```text
    ///     1 2 4 8 16 32 33 66 132 264 528 1056 2112 4224 4257
    ///     8514 17028 34056 68112 68113 136226 136227
    /// ```
    ///
    /// followed by the 46 trailing squarings and the final multiplication
    /// for the low bit. Valid on the cyclotomic subgroup only, where the
    /// fast squaring applies.
    pub fn exp_by_x(f: &Fp12<P::Fp12Params>) -> Fp12<P::Fp12Params> {
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

impl<P: Bls12Parameters> PairingEngine for Bls12<P>
where
    G1Affine<P>: PairingCurve<
        BaseField = <P::G1Parameters as ModelParameters>::BaseField,
        ScalarField = <P::G1Parameters as ModelParameters>::ScalarField,
        Projective = G1Projective<P>,
        PairWith = G2Affine<P>,
        Prepared = G1Prepared<P>,
        PairingResult = Fp12<P::Fp12Params>,
    >,
    G2Affine<P>: PairingCurve<
        BaseField = <P::G2Parameters as ModelParameters>::BaseField,
        ScalarField = <P::G1Parameters as ModelParameters>::ScalarField,
        Projective = G2Projective<P>,
        PairWith = G1Affine<P>,
        Prepared = G2Prepared<P>,
        PairingResult = Fp12<P::Fp12Params>,
    >,
{
    type Fr = <P::G1Parameters as ModelParameters>::ScalarField;
    type G1Projective = G1Projective<P>;
    type G1Affine = G1Affine<P>;
    type G2Projective = G2Projective<P>;
    type G2Affine = G2Affine<P>;
    type Fq = P::Fp;
    type Fqe = Fp2<P::Fp2Params>;
    type Fqk = Fp12<P::Fp12Params>;

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
        // The exponent (p^12 - 1)/r factors as (p^6 - 1)(p^2 + 1) (the easy
        // part, a couple of Frobenius applications and one inversion) times
        // Phi_12(p)/r (the hard part below).
        match f.inverse() {
            Some(f_inv) => {
                // f^(p^6)
                let mut t0 = *f;
                t0.frobenius_map(3);
                t0.frobenius_map(3);
                // f^(p^6 - 1)
                t0 *= &f_inv;
                // f^((p^6 - 1)(p^2 + 1))
                let mut r = t0;
                r.frobenius_map(2);
                r *= &t0;

                // Hard part, following https://eprint.iacr.org/2016/130.pdf
                // (up to permutation): nine applications of exp_by_x mixed
                // with Frobenius powers and unitary inverses.
                let mut t0 = r.unitary_inverse().cyclotomic_square();
                let mut t5 = Self::exp_by_x(&r);
                let t1 = t5.cyclotomic_square();
                let mut t3 = t0 * &t5;

                t0 = Self::exp_by_x(&t3);
                let t2 = Self::exp_by_x(&t0);
                let mut t4 = Self::exp_by_x(&t2);

                t4 *= &t1;
                let mut t1 = Self::exp_by_x(&t4);
                t3 = t3.unitary_inverse();
                t1 *= &t3;
                t1 *= &r;

                t0 *= &r;
                t0.frobenius_map(3);

                t3 = r.unitary_inverse();
                t4 = t3 * &t4;
                t4.frobenius_map(1);

                t5 *= &t2;
                t5.frobenius_map(2);

                t5 *= &t0;
                t5 *= &t4;
                t5 *= &t1;

                Some(t5)
            }
            None => None,
        }
    }
}
