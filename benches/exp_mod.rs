use mpi_core::mpi::Mpi;
use mpi_core::rng::Csprng;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// A 384-bit base and exponent, independent of the modulus below, so neither
// operand is accidentally the other's expected output.
const E_HEX: &str =
    "b2e7efd37075b9f03ff989c7c5051c20034d2621b7c7a469bfc00fcc9645d8f\
     a08d8080f07f7e5e5595d10ff5a8e4c9f731d602b5814e3f7c9650d1a2b8e7f";
const A_HEX: &str =
    "3d9a7c1e06f2b8451aa93c6d0e7f28b5c41d90a6e3f7b2081c95d4a6e0f3b27\
     18c2a9e7d506b3f41c8a9d0e6f37b215c8a4f90d6e3b7c0182f9a5d6e0c3b48";

// The reference self-test's modulus is quoted in the design reference only
// as elided prefix/suffix fragments ("EFE021C2...0B29B7"); the exact full
// literal wasn't recoverable from the retrieval pack (see DESIGN.md), so
// this benchmark instead times `exp_mod` against a freshly generated
// 512-bit prime, which exercises the same modulus bit-length the reference
// vector targets.
fn bench_modulus() -> Mpi {
    let mut rng = Csprng::from_seed([0x51u8; 32]);
    Mpi::gen_prime(512, false, &mut rng).unwrap()
}

pub fn bench_exp_mod(c: &mut Criterion) {
    let n = bench_modulus();
    let e = Mpi::read_string(E_HEX, 16).unwrap();
    let a = Mpi::read_string(A_HEX, 16).unwrap();

    c.bench_function("exp_mod 512-bit", |b| {
        b.iter(|| Mpi::exp_mod(black_box(&a), black_box(&e), black_box(&n), None).unwrap())
    });
}

pub fn bench_mul(c: &mut Criterion) {
    let a = bench_modulus();
    let b = Mpi::read_string(A_HEX, 16).unwrap();

    c.bench_function("mul 512-bit", |bencher| {
        bencher.iter(|| Mpi::mul(black_box(&a), black_box(&b)).unwrap())
    });
}

criterion_group!(benches, bench_exp_mod, bench_mul);
criterion_main!(benches);
