//! Greatest common divisor and number-theoretic primality testing.

use super::{Mpi, Sign};
use crate::error::MpiError;
use crate::rng::RandomSource;
use std::cmp::Ordering;

/// Primes below 200, used as a cheap trial-division filter ahead of the
/// (much more expensive) Miller-Rabin rounds in [`Mpi::is_prime`]. This
/// table is intentionally modest: it exists to reject the overwhelming
/// majority of random composite candidates in O(1) limb operations, not to
/// replace the probabilistic test.
const SMALL_PRIMES: &[u32] = &[
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199,
];

fn small_int(z: i64) -> Mpi {
    let mut m = Mpi::new();
    m.set_int(z);
    m
}

impl Mpi {
    /// `gcd(|a|, |b|)`, always non-negative, via Stein's binary GCD
    /// algorithm: factor out the common power of two, then repeatedly
    /// strip factors of two from the larger operand and subtract.
    pub fn gcd(a: &Mpi, b: &Mpi) -> Result<Mpi, MpiError> {
        let mut u = Mpi {
            sign: Sign::Positive,
            limbs: a.limbs.clone(),
        };
        let mut v = Mpi {
            sign: Sign::Positive,
            limbs: b.limbs.clone(),
        };
        u.normalize_sign();
        v.normalize_sign();
        if u.is_zero() {
            return Ok(v);
        }
        if v.is_zero() {
            return Ok(u);
        }

        let shift = u.lsb().min(v.lsb());
        u = Mpi::shift_right(&u, u.lsb());

        loop {
            v = Mpi::shift_right(&v, v.lsb());
            if u.cmp_abs(&v) == Ordering::Greater {
                std::mem::swap(&mut u, &mut v);
            }
            v = Mpi::sub_abs(&v, &u)?;
            if v.is_zero() {
                break;
            }
        }

        Mpi::shift_left(&u, shift)
    }

    /// Checks `n` against the small-prime table. `Some(true)`/`Some(false)`
    /// is a definitive verdict (`n` equals one of the table's primes, or is
    /// divisible by one); `None` means the table was inconclusive and the
    /// caller should fall through to Miller-Rabin.
    fn check_small_factors(n: &Mpi) -> Result<Option<bool>, MpiError> {
        for &p in SMALL_PRIMES {
            if n.cmp_int(p as i64) == Ordering::Equal {
                return Ok(Some(true));
            }
            if Mpi::mod_int(n, p as i64)? == 0 {
                return Ok(Some(false));
            }
        }
        Ok(None)
    }

    /// Number of Miller-Rabin rounds for a candidate of `bits` significant
    /// bits. Smaller candidates are cheap to test, so this table is
    /// conservative at the low end and relaxes for large, expensive moduli
    /// where each round already carries very high confidence.
    fn miller_rabin_rounds(bits: usize) -> usize {
        match bits {
            0..=128 => 64,
            129..=256 => 56,
            257..=512 => 40,
            513..=1024 => 24,
            1025..=2048 => 12,
            _ => 8,
        }
    }

    fn random_base(
        n: &Mpi,
        rng: &mut impl RandomSource,
    ) -> Result<Mpi, MpiError> {
        let range = Mpi::sub_int(n, 3)?; // a in [2, n-2] <=> a-2 in [0, n-3]
        if range.cmp_int(0) != Ordering::Greater {
            return Ok(small_int(2));
        }
        let modulus = Mpi::add_int(&range, 1)?; // n-3+1 = n-2
        let nbytes = modulus.size_bytes().max(1);
        let mut buf = vec![0u8; nbytes];
        rng.fill_bytes(&mut buf);
        let raw = Mpi::read_binary(&buf);
        let r = Mpi::modulo(&raw, &modulus)?;
        Mpi::add_int(&r, 2)
    }

    /// Miller-Rabin primality test. Trial-divides against
    /// [`SMALL_PRIMES`] first, then runs a number of witness rounds chosen
    /// from `n`'s bit length (see [`Mpi::miller_rabin_rounds`]), each using
    /// a fresh random base drawn from `rng`.
    pub fn is_prime(n: &Mpi, rng: &mut impl RandomSource) -> Result<bool, MpiError> {
        if n.cmp_int(2) == Ordering::Less {
            return Ok(false);
        }
        if n.is_even() {
            return Ok(n.cmp_int(2) == Ordering::Equal);
        }

        if let Some(verdict) = Self::check_small_factors(n)? {
            return Ok(verdict);
        }

        let n_minus_1 = Mpi::sub_int(n, 1)?;
        let s = n_minus_1.lsb();
        let d = Mpi::shift_right(&n_minus_1, s);

        // Every witness round below calls exp_mod against the same modulus
        // n, so R^2 mod n is computed once here and reused for the rest.
        let mut rr_cache = Mpi::new();

        let rounds = Self::miller_rabin_rounds(n.msb());
        for _ in 0..rounds {
            let a = Self::random_base(n, rng)?;
            let mut x = Mpi::exp_mod(&a, &d, n, Some(&mut rr_cache))?;
            if x.cmp_int(1) == Ordering::Equal || x.cmp(&n_minus_1) == Ordering::Equal {
                continue;
            }

            let mut witness_for_composite = true;
            for _ in 0..s.saturating_sub(1) {
                x = Mpi::modulo(&Mpi::mul(&x, &x)?, n)?;
                if x.cmp(&n_minus_1) == Ordering::Equal {
                    witness_for_composite = false;
                    break;
                }
            }
            if witness_for_composite {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn random_odd_of_bitlen(nbits: usize, rng: &mut impl RandomSource) -> Result<Mpi, MpiError> {
        let nbytes = nbits.div_ceil(8);
        let mut buf = vec![0u8; nbytes];
        rng.fill_bytes(&mut buf);
        let mut x = Mpi::read_binary(&buf);
        for i in nbits..(nbytes * 8) {
            x.set_bit(i, 0)?;
        }
        x.set_bit(nbits - 1, 1)?;
        if nbits >= 2 {
            x.set_bit(nbits - 2, 1)?;
        }
        x.set_bit(0, 1)?;
        Ok(x)
    }

    /// Generates a random probable prime with exactly `nbits` significant
    /// bits. Fails with [`MpiError::BadInput`] if `nbits < 3`. When
    /// `dh_flag` is set, generates a safe prime instead: `p` such that
    /// `(p-1)/2` is also prime, suitable as a Diffie-Hellman modulus.
    ///
    /// A single odd candidate of the requested bit length is drawn, then
    /// walked forward in place (by 4 when `dh_flag`, by 2 otherwise) rather
    /// than redrawn fresh on each rejection. When `dh_flag` is set, bit 1
    /// is forced so `p = 3 mod 4`, and candidates `1 mod 3` are skipped
    /// without running Miller-Rabin: for such `p`, `3` divides either `p`
    /// or `(p-1)/2`, so the safe-prime pair can never both be prime.
    pub fn gen_prime(
        nbits: usize,
        dh_flag: bool,
        rng: &mut impl RandomSource,
    ) -> Result<Mpi, MpiError> {
        if nbits < 3 {
            return Err(MpiError::BadInput);
        }

        let mut candidate = Self::random_odd_of_bitlen(nbits, rng)?;
        if dh_flag {
            candidate.set_bit(1, 1)?; // force p = 3 mod 4
        }

        let step = if dh_flag { 4 } else { 2 };
        let mut attempts: u64 = 0;

        loop {
            attempts += 1;

            if dh_flag && Mpi::mod_int(&candidate, 3)? == 1 {
                candidate = Mpi::add_int(&candidate, step)?;
                continue;
            }

            let accept = if dh_flag {
                let half = Mpi::shift_right(&Mpi::sub_int(&candidate, 1)?, 1);
                Mpi::is_prime(&candidate, rng)? && Mpi::is_prime(&half, rng)?
            } else {
                Mpi::is_prime(&candidate, rng)?
            };

            if accept {
                log::trace!("gen_prime: accepted after {attempts} candidate(s)");
                return Ok(candidate);
            }

            candidate = Mpi::add_int(&candidate, step)?;
        }
    }
}
