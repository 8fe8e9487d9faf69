use criterion::{criterion_group, criterion_main, Criterion};

use pairings::{
    curves::bls12_377::{
        Bls12_377, G1Projective as BlsG1Projective, G2Projective as BlsG2Projective,
    },
    curves::bw6_761::{Bw6_761, G1Projective as BwG1Projective, G2Projective as BwG2Projective},
    PairingEngine, ProjectiveCurve, UniformRand,
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn bench_bls12_377(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    let p = BlsG1Projective::rand(&mut rng).into_affine();
    let q = BlsG2Projective::rand(&mut rng).into_affine();

    c.bench_function("bls12_377: pairing", |b| {
        b.iter(|| Bls12_377::pairing(p, q))
    });

    let f = Bls12_377::ate_miller_loop(&p, &q);
    c.bench_function("bls12_377: miller loop", |b| {
        b.iter(|| Bls12_377::ate_miller_loop(&p, &q))
    });
    c.bench_function("bls12_377: final exponentiation", |b| {
        b.iter(|| Bls12_377::final_exponentiation(&f))
    });
}

fn bench_bw6_761(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    let p = BwG1Projective::rand(&mut rng).into_affine();
    let q = BwG2Projective::rand(&mut rng).into_affine();

    c.bench_function("bw6_761: pairing", |b| b.iter(|| Bw6_761::pairing(p, q)));

    let f = Bw6_761::ate_miller_loop(&p, &q);
    c.bench_function("bw6_761: miller loop", |b| {
        b.iter(|| Bw6_761::ate_miller_loop(&p, &q))
    });
    c.bench_function("bw6_761: final exponentiation", |b| {
        b.iter(|| Bw6_761::final_exponentiation(&f))
    });
}

criterion_group!(benches, bench_bls12_377, bench_bw6_761);
criterion_main!(benches);
