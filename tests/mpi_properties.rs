//! Property-based tests over `Mpi`, mirroring the universal invariants.
//!
//! Quickcheck drives these off small signed integers and bit-shift amounts
//! rather than directly generating `Mpi` values, since the latter has no
//! `Arbitrary` impl (and doesn't need one just for this).

use quickcheck_macros::quickcheck;

use mpi_core::mpi::Mpi;
use std::cmp::Ordering;

fn mpi(z: i64) -> Mpi {
    let mut m = Mpi::new();
    m.set_int(z);
    m
}

#[quickcheck]
fn add_is_commutative(a: i64, b: i64) -> bool {
    let (a, b) = (mpi(a), mpi(b));
    Mpi::add(&a, &b).unwrap().cmp(&Mpi::add(&b, &a).unwrap()) == Ordering::Equal
}

#[quickcheck]
fn mul_is_commutative(a: i32, b: i32) -> bool {
    let (a, b) = (mpi(a as i64), mpi(b as i64));
    Mpi::mul(&a, &b).unwrap().cmp(&Mpi::mul(&b, &a).unwrap()) == Ordering::Equal
}

#[quickcheck]
fn add_then_sub_is_identity(a: i64, b: i64) -> bool {
    let (a, b) = (mpi(a), mpi(b));
    let sum = Mpi::add(&a, &b).unwrap();
    Mpi::sub(&sum, &b).unwrap().cmp(&a) == Ordering::Equal
}

#[quickcheck]
fn div_rem_reconstructs_dividend(a: i64, b: i64) -> bool {
    if b == 0 {
        return true;
    }
    let (a, b) = (mpi(a), mpi(b));
    let (q, r) = Mpi::div_rem(&a, &b).unwrap();
    let reconstructed = Mpi::add(&Mpi::mul(&q, &b).unwrap(), &r).unwrap();
    reconstructed.cmp(&a) == Ordering::Equal && r.cmp_abs(&b) == Ordering::Less
}

#[quickcheck]
fn modulo_is_always_in_range(a: i64, b: i64) -> bool {
    if b == 0 {
        return true;
    }
    let (a, b) = (mpi(a), mpi(b.abs()));
    let r = Mpi::modulo(&a, &b).unwrap();
    r.cmp_int(0) != Ordering::Less && r.cmp(&b) == Ordering::Less
}

#[quickcheck]
fn shift_left_then_right_is_identity(a: u32, k: u8) -> bool {
    let k = (k % 64) as usize;
    let a = mpi(a as i64);
    let shifted = Mpi::shift_left(&a, k).unwrap();
    Mpi::shift_right(&shifted, k).cmp(&a) == Ordering::Equal
}

#[quickcheck]
fn msb_grows_by_shift_amount(a: u32, k: u8) -> bool {
    if a == 0 {
        return true; // msb(0) == 0 regardless of shift; the property is stated for x > 0
    }
    let k = (k % 64) as usize;
    let a = mpi(a as i64);
    let shifted = Mpi::shift_left(&a, k).unwrap();
    shifted.msb() == a.msb() + k
}

#[quickcheck]
fn gcd_divides_both_operands(a: u32, b: u32) -> bool {
    let (am, bm) = (mpi(a as i64), mpi(b as i64));
    let g = Mpi::gcd(&am, &bm).unwrap();
    if g.is_zero() {
        return a == 0 && b == 0;
    }
    Mpi::modulo(&am, &g).unwrap().is_zero() && Mpi::modulo(&bm, &g).unwrap().is_zero()
}

#[quickcheck]
fn gcd_with_zero_is_other_operand(a: u32) -> bool {
    let am = mpi(a as i64);
    let zero = mpi(0);
    Mpi::gcd(&am, &zero).unwrap().cmp(&am) == Ordering::Equal
}

#[quickcheck]
fn inv_mod_roundtrips_when_coprime(a: u32, n: u32) -> bool {
    if n < 2 {
        return true;
    }
    let (am, nm) = (mpi(a as i64), mpi(n as i64));
    let g = Mpi::gcd(&am, &nm).unwrap();
    if g.cmp_int(1) != Ordering::Equal {
        return true; // not coprime, inv_mod legitimately fails
    }
    let inv = match Mpi::inv_mod(&am, &nm) {
        Ok(x) => x,
        Err(_) => return false,
    };
    let product = Mpi::modulo(&Mpi::mul(&am, &inv).unwrap(), &nm).unwrap();
    product.cmp_int(1) == Ordering::Equal
}

#[quickcheck]
fn radix_roundtrip(a: i64, radix_pick: u8) -> bool {
    let radix = 2 + (radix_pick % 15) as u32; // 2..=16
    let a = mpi(a);
    let s = a.to_radix_string(radix).unwrap();
    Mpi::read_string(&s, radix).unwrap().cmp(&a) == Ordering::Equal
}

#[quickcheck]
fn binary_roundtrip(a: u64) -> bool {
    let a = mpi(a as i64);
    let mut buf = vec![0u8; a.size_bytes()];
    a.write_binary(&mut buf).unwrap();
    Mpi::read_binary(&buf).cmp(&a) == Ordering::Equal
}
