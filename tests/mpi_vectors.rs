//! Literal scenarios from the design reference: hand-checkable inputs and
//! their expected outputs, rather than generated properties (see
//! `tests/mpi_properties.rs` for those).

use mpi_core::error::MpiError;
use mpi_core::mpi::Mpi;
use std::cmp::Ordering;

fn mpi(z: i64) -> Mpi {
    let mut m = Mpi::new();
    m.set_int(z);
    m
}

#[test]
fn inv_mod_three_mod_eleven_is_four() {
    // 3*4 = 12 = 11 + 1, so 4 is 3's inverse mod 11.
    let x = Mpi::inv_mod(&mpi(3), &mpi(11)).unwrap();
    assert_eq!(x.cmp_int(4), Ordering::Equal);
}

#[test]
fn gcd_known_vectors() {
    assert_eq!(Mpi::gcd(&mpi(693), &mpi(609)).unwrap().cmp_int(21), Ordering::Equal);
    assert_eq!(Mpi::gcd(&mpi(1764), &mpi(868)).unwrap().cmp_int(28), Ordering::Equal);
}

#[test]
fn div_rem_known_vector() {
    let (q, r) = Mpi::div_rem(&mpi(1_000_003), &mpi(1_000)).unwrap();
    assert_eq!(q.cmp_int(1000), Ordering::Equal);
    assert_eq!(r.cmp_int(3), Ordering::Equal);
}

#[test]
fn modulo_known_vector() {
    // -7 mod 3 == 2, not -1: the result is normalized into [0, 3).
    let r = Mpi::modulo(&mpi(-7), &mpi(3)).unwrap();
    assert_eq!(r.cmp_int(2), Ordering::Equal);
}

#[test]
fn write_binary_reports_required_length() {
    // 2^300 - 1 has msb() == 300, so size_bytes() == ceil(300/8) == 38.
    let one = mpi(1);
    let x = Mpi::sub_int(&Mpi::shift_left(&one, 300).unwrap(), 1).unwrap();
    assert_eq!(x.size_bytes(), 38);

    let mut buf: Vec<u8> = Vec::new();
    assert_eq!(x.write_binary(&mut buf), Err(MpiError::BufferTooSmall { needed: 38 }));
}

#[test]
fn exp_mod_identities() {
    let n = Mpi::read_string("ffffffffffffffc5", 16).unwrap(); // a large odd modulus
    let a = Mpi::read_string("123456789abcdef0", 16).unwrap();

    // x^0 mod n == 1 for any odd n > 1.
    let r0 = Mpi::exp_mod(&a, &mpi(0), &n, None).unwrap();
    assert_eq!(r0.cmp_int(1), Ordering::Equal);

    // x^1 mod n == x mod n.
    let r1 = Mpi::exp_mod(&a, &mpi(1), &n, None).unwrap();
    let expected = Mpi::modulo(&a, &n).unwrap();
    assert_eq!(r1.cmp(&expected), Ordering::Equal);
}

#[test]
fn exp_mod_fermat_little_theorem() {
    // 97 is prime; a^96 mod 97 == 1 for any a coprime to 97.
    let n = mpi(97);
    let a = mpi(11);
    let e = mpi(96);
    let r = Mpi::exp_mod(&a, &e, &n, None).unwrap();
    assert_eq!(r.cmp_int(1), Ordering::Equal);
}

/// The reference self-test's modulus and exponent are quoted in the design
/// reference only as elided prefix/suffix fragments
/// (`"EFE021C2...0B29B7"`, `"B2E7EFD3...0FF5"`), with the full literal hex
/// given only for the 512-bit result. Recovering the exact middle digits
/// wasn't possible from the retrieval pack (see DESIGN.md), so this checks
/// the same shape of claim — a 512-bit `exp_mod` against a generated prime,
/// verified against Fermat's little theorem rather than a stored constant.
#[test]
fn exp_mod_holds_at_reference_vector_bit_length() {
    use mpi_core::rng::Csprng;

    let mut rng = Csprng::from_seed([0x51u8; 32]);
    let n = Mpi::gen_prime(512, false, &mut rng).unwrap();
    assert_eq!(n.msb(), 512);

    let e = Mpi::sub_int(&n, 1).unwrap();
    let a = mpi(65537);

    let r = Mpi::exp_mod(&a, &e, &n, None).unwrap();
    assert_eq!(r.cmp_int(1), Ordering::Equal);
}

#[test]
fn gen_prime_dh_flag_produces_safe_prime() {
    use mpi_core::rng::Csprng;

    let mut rng = Csprng::from_seed([7u8; 32]);
    let p = Mpi::gen_prime(96, true, &mut rng).unwrap();
    assert_eq!(p.msb(), 96);
    assert!(Mpi::is_prime(&p, &mut rng).unwrap());

    let half = Mpi::shift_right(&Mpi::sub_int(&p, 1).unwrap(), 1);
    assert!(Mpi::is_prime(&half, &mut rng).unwrap());
}

#[test]
fn radix_and_binary_roundtrip_through_a_900_bit_value() {
    use mpi_core::rng::Csprng;
    use mpi_core::rng::fill_random;

    let mut rng = Csprng::from_seed([3u8; 32]);
    let mut x = Mpi::new();
    fill_random(&mut x, 113, &mut rng).unwrap();

    for radix in 2..=16u32 {
        let s = x.to_radix_string(radix).unwrap();
        let back = Mpi::read_string(&s, radix).unwrap();
        assert_eq!(back.cmp(&x), Ordering::Equal, "radix {radix} round-trip failed");
    }

    let mut buf = vec![0u8; x.size_bytes()];
    x.write_binary(&mut buf).unwrap();
    let back = Mpi::read_binary(&buf);
    assert_eq!(back.cmp(&x), Ordering::Equal);
}
