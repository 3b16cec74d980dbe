//! Montgomery modular multiplication and sliding-window exponentiation.
//!
//! The modulus for every function in this module must be odd and greater
//! than 1 — Montgomery reduction requires the low limb of `n` to be
//! invertible mod `2^LIMB_BITS`, which only holds for odd `n`. Callers that
//! might see an even or non-positive modulus (e.g. [`Mpi::exp_mod`]) check
//! this up front and fail with [`MpiError::BadInput`] instead of silently
//! producing a wrong answer.

use super::{Mpi, Sign};
use crate::error::MpiError;
use crate::limb::{muladdc, Limb, LIMB_BITS};
use std::cmp::Ordering;

/// Computes `mm = -n.limbs[0]^{-1} mod 2^LIMB_BITS` via Newton-Raphson
/// iteration on the modular inverse: `x_{k+1} = x_k * (2 - n0*x_k)`, which
/// doubles the number of correct low bits each step. The starting guess
/// `(3*n0) xor 2` is correct to 5 bits, so 5 iterations comfortably cover
/// both the 32-bit and 64-bit limb widths this crate supports.
fn montgomery_setup(n: &Mpi) -> Limb {
    let n0 = n.limbs[0];
    let mut x: Limb = n0.wrapping_mul(3) ^ 2;
    for _ in 0..5 {
        x = x.wrapping_mul((2 as Limb).wrapping_sub(n0.wrapping_mul(x)));
    }
    x.wrapping_neg()
}

/// `R^2 mod n`, where `R = 2^(limbs_used(n) * LIMB_BITS)`. Used to move
/// operands into and out of Montgomery form.
fn r_squared_mod_n(n: &Mpi) -> Result<Mpi, MpiError> {
    let bits = 2 * n.limbs_used() * LIMB_BITS as usize;
    let mut one = Mpi::new();
    one.set_int(1);
    let shifted = Mpi::shift_left(&one, bits)?;
    Mpi::modulo(&shifted, n)
}

/// Montgomery reduction (REDC): given a double-width product `t`, returns
/// `t * R^-1 mod n` as an `n`-limb value in `[0, n)`.
fn redc(t: Vec<Limb>, n: &Mpi, mm: Limb) -> Mpi {
    let nlen = n.limbs_used();
    let mut t = t;
    t.resize(2 * nlen + 2, 0);

    for i in 0..nlen {
        let m = t[i].wrapping_mul(mm);
        let mut carry: Limb = 0;
        for j in 0..nlen {
            let (lo, hi) = muladdc(t[i + j], m, n.limbs[j], carry);
            t[i + j] = lo;
            carry = hi;
        }
        let mut k = i + nlen;
        while carry != 0 {
            let (sum, c) = t[k].overflowing_add(carry);
            t[k] = sum;
            carry = c as Limb;
            k += 1;
        }
    }

    let limbs = t[nlen..2 * nlen + 1].to_vec();
    let mut result = Mpi {
        sign: Sign::Positive,
        limbs,
    };
    if result.cmp_abs(n) != Ordering::Less {
        result = Mpi::sub_abs(&result, n).expect("REDC output is always < 2n");
    }
    result.normalize_sign();
    result
}

/// Montgomery multiplication: `a*b*R^-1 mod n`, for `a, b` already reduced
/// mod `n`.
fn montgomery_mul(a: &Mpi, b: &Mpi, n: &Mpi, mm: Limb) -> Result<Mpi, MpiError> {
    let product = Mpi::mul(a, b)?;
    Ok(redc(product.limbs, n, mm))
}

fn from_montgomery(a: &Mpi, n: &Mpi, mm: Limb) -> Result<Mpi, MpiError> {
    let mut one = Mpi::new();
    one.set_int(1);
    montgomery_mul(a, &one, n, mm)
}

/// Picks a sliding-window width from the exponent's bit length. Wider
/// windows trade more precomputed odd powers for fewer modular multiplies;
/// these thresholds balance that trade-off across the exponent sizes this
/// crate expects to see (RSA/DH-scale and down).
fn window_size(ebits: usize) -> usize {
    match ebits {
        0..=17 => 1,
        18..=49 => 2,
        50..=115 => 3,
        116..=275 => 4,
        276..=670 => 5,
        _ => 6,
    }
}

impl Mpi {
    /// `x^e mod n`, via Montgomery multiplication and HAC Algorithm 14.85
    /// (left-to-right sliding-window exponentiation). Requires `n > 1` and
    /// odd, and `e >= 0`; fails with [`MpiError::BadInput`] otherwise. `x`
    /// is reduced mod `n` first, so it may be negative or exceed `n`.
    ///
    /// `rr_cache` lets a caller that repeats `exp_mod` against the same
    /// modulus (Miller-Rabin's witness loop, repeated private-key
    /// operations against one key) skip recomputing `R^2 mod n` every
    /// call: pass `None` to always compute it fresh, or `Some(&mut cache)`
    /// with `cache` initialized to a value other than the true `R^2 mod n`
    /// on the first call — `exp_mod` fills it in and every subsequent call
    /// with the same `n` reuses it.
    pub fn exp_mod(
        x: &Mpi,
        e: &Mpi,
        n: &Mpi,
        rr_cache: Option<&mut Mpi>,
    ) -> Result<Mpi, MpiError> {
        if n.cmp_int(1) != Ordering::Greater || n.is_even() {
            return Err(MpiError::BadInput);
        }
        if e.sign.is_negative() {
            return Err(MpiError::BadInput);
        }

        let mm = montgomery_setup(n);
        let rr = match rr_cache {
            Some(cache) => {
                if cache.is_zero() {
                    *cache = r_squared_mod_n(n)?;
                }
                cache.clone()
            }
            None => r_squared_mod_n(n)?,
        };

        let mut one = Mpi::new();
        one.set_int(1);
        let mut acc = montgomery_mul(&one, &rr, n, mm)?; // Montgomery form of 1

        if e.is_zero() {
            return from_montgomery(&acc, n, mm);
        }

        let x_mod = Mpi::modulo(x, n)?;
        let ebits = e.msb();
        let w = window_size(ebits);
        let window_count = 1usize << (w - 1);

        let g1 = montgomery_mul(&x_mod, &rr, n, mm)?;
        let g2 = montgomery_mul(&g1, &g1, n, mm)?;
        let mut odd_powers = Vec::with_capacity(window_count);
        odd_powers.push(g1);
        for _ in 1..window_count {
            let prev = odd_powers.last().expect("just pushed g1").clone();
            odd_powers.push(montgomery_mul(&prev, &g2, n, mm)?);
        }

        let mut i = ebits - 1;
        loop {
            if e.get_bit(i) == 0 {
                acc = montgomery_mul(&acc, &acc, n, mm)?;
                if i == 0 {
                    break;
                }
                i -= 1;
                continue;
            }

            let lower = i.saturating_sub(w - 1);
            let mut l = i;
            for cand in lower..=i {
                if e.get_bit(cand) == 1 {
                    l = cand;
                    break;
                }
            }

            let mut window_val: usize = 0;
            for j in (l..=i).rev() {
                window_val = (window_val << 1) | e.get_bit(j) as usize;
            }

            for _ in 0..(i - l + 1) {
                acc = montgomery_mul(&acc, &acc, n, mm)?;
            }
            acc = montgomery_mul(&acc, &odd_powers[(window_val - 1) / 2], n, mm)?;

            if l == 0 {
                break;
            }
            i = l - 1;
        }

        from_montgomery(&acc, n, mm)
    }
}
