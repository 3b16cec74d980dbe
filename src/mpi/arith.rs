//! Core arithmetic: addition, subtraction, shifts, multiplication, and
//! schoolbook long division.
//!
//! Every operation here is a free-standing associated function that takes
//! its operands by shared reference and returns a freshly built [`Mpi`].
//! This sidesteps the aliasing problem the original C API solved with
//! `goto cleanup` and careful temporary use: since operands are never
//! mutated in place, `let x = Mpi::add(&a, &a)?;` ("aliasing" `a` with
//! itself) is unremarkable instead of requiring special-casing.

use super::{Mpi, Sign, MAX_LIMBS};
use crate::error::MpiError;
use crate::limb::{muladdc, DoubleLimb, Limb, LIMB_BITS};
use std::cmp::Ordering;

impl Mpi {
    /// `|a| + |b|`. Sign of the result is always positive. May need one
    /// limb beyond `max(capacity(a), capacity(b))` for the final carry;
    /// fails with [`MpiError::Alloc`] if that would exceed [`MAX_LIMBS`].
    pub fn add_abs(a: &Mpi, b: &Mpi) -> Result<Mpi, MpiError> {
        let a_used = a.limbs_used();
        let b_used = b.limbs_used();
        let n = a_used.max(b_used);
        if n + 1 > MAX_LIMBS {
            return Err(MpiError::Alloc);
        }

        let mut limbs = vec![0 as Limb; n + 1];
        let mut carry: Limb = 0;
        for i in 0..n {
            let av = a.limbs.get(i).copied().unwrap_or(0);
            let bv = b.limbs.get(i).copied().unwrap_or(0);
            let (s1, c1) = av.overflowing_add(bv);
            let (s2, c2) = s1.overflowing_add(carry);
            limbs[i] = s2;
            carry = c1 as Limb + c2 as Limb;
        }
        limbs[n] = carry;

        let mut x = Mpi { sign: Sign::Positive, limbs };
        x.normalize_sign();
        Ok(x)
    }

    /// `|a| - |b|`. Fails with [`MpiError::Negative`] when `|a| < |b|`; the
    /// caller (signed `sub`/`add`) is responsible for picking the operand
    /// order that keeps this a non-negative subtraction.
    pub fn sub_abs(a: &Mpi, b: &Mpi) -> Result<Mpi, MpiError> {
        if a.cmp_abs(b) == Ordering::Less {
            return Err(MpiError::Negative);
        }

        let n = a.limbs_used();
        let mut limbs = vec![0 as Limb; n];
        let mut borrow: Limb = 0;
        for i in 0..n {
            let av = a.limbs.get(i).copied().unwrap_or(0);
            let bv = b.limbs.get(i).copied().unwrap_or(0);
            let (d1, b1) = av.overflowing_sub(bv);
            let (d2, b2) = d1.overflowing_sub(borrow);
            limbs[i] = d2;
            borrow = b1 as Limb + b2 as Limb;
        }

        let mut x = Mpi { sign: Sign::Positive, limbs };
        x.normalize_sign();
        Ok(x)
    }

    /// Signed addition. Dispatches to [`Mpi::add_abs`]/[`Mpi::sub_abs`]
    /// based on the operands' signs and magnitudes.
    pub fn add(a: &Mpi, b: &Mpi) -> Result<Mpi, MpiError> {
        let mut result = if a.sign == b.sign {
            let mut r = Self::add_abs(a, b)?;
            r.sign = a.sign;
            r
        } else if a.cmp_abs(b) != Ordering::Less {
            let mut r = Self::sub_abs(a, b)?;
            r.sign = a.sign;
            r
        } else {
            let mut r = Self::sub_abs(b, a)?;
            r.sign = b.sign;
            r
        };
        result.normalize_sign();
        Ok(result)
    }

    /// Signed subtraction: `a - b`.
    pub fn sub(a: &Mpi, b: &Mpi) -> Result<Mpi, MpiError> {
        let negated_b = Mpi {
            sign: b.sign.flip(),
            limbs: b.limbs.clone(),
        };
        Self::add(a, &negated_b)
    }

    /// Signed addition against a small integer.
    pub fn add_int(a: &Mpi, z: i64) -> Result<Mpi, MpiError> {
        let mut tmp = Mpi::new();
        tmp.set_int(z);
        Self::add(a, &tmp)
    }

    /// Signed subtraction of a small integer: `a - z`.
    pub fn sub_int(a: &Mpi, z: i64) -> Result<Mpi, MpiError> {
        let mut tmp = Mpi::new();
        tmp.set_int(z);
        Self::sub(a, &tmp)
    }

    /// In-place-equivalent logical left shift of the magnitude by `k` bits;
    /// sign is preserved. Grows as needed, failing with
    /// [`MpiError::Alloc`] if the required capacity exceeds [`MAX_LIMBS`].
    pub fn shift_left(a: &Mpi, k: usize) -> Result<Mpi, MpiError> {
        let used = a.limbs_used();
        if used == 0 {
            return Ok(Mpi::new());
        }

        let limb_shift = k / LIMB_BITS as usize;
        let bit_shift = k % LIMB_BITS as usize;
        let new_len = used + limb_shift + 1;
        if new_len > MAX_LIMBS {
            return Err(MpiError::Alloc);
        }

        let mut limbs = vec![0 as Limb; new_len];
        for i in 0..used {
            let v = a.limbs[i];
            if bit_shift == 0 {
                limbs[i + limb_shift] |= v;
            } else {
                limbs[i + limb_shift] |= v << bit_shift;
                limbs[i + limb_shift + 1] |= v >> (LIMB_BITS as usize - bit_shift);
            }
        }

        let mut x = Mpi { sign: a.sign, limbs };
        x.normalize_sign();
        Ok(x)
    }

    /// Logical right shift of the magnitude by `k` bits; sign is preserved.
    /// Never allocates beyond the input's significant limbs; infallible.
    pub fn shift_right(a: &Mpi, k: usize) -> Mpi {
        let used = a.limbs_used();
        if used == 0 || k >= used * LIMB_BITS as usize {
            return Mpi::new();
        }

        let limb_shift = k / LIMB_BITS as usize;
        let bit_shift = k % LIMB_BITS as usize;
        let new_len = used - limb_shift;

        let mut limbs = vec![0 as Limb; new_len];
        for i in 0..new_len {
            let lo = a.limbs[i + limb_shift];
            let hi = if i + limb_shift + 1 < used {
                a.limbs[i + limb_shift + 1]
            } else {
                0
            };
            limbs[i] = if bit_shift == 0 {
                lo
            } else {
                (lo >> bit_shift) | (hi << (LIMB_BITS as usize - bit_shift))
            };
        }

        let mut x = Mpi { sign: a.sign, limbs };
        x.normalize_sign();
        x
    }

    /// Schoolbook multiply using [`muladdc`] as the inner accumulate step.
    pub fn mul(a: &Mpi, b: &Mpi) -> Result<Mpi, MpiError> {
        let a_used = a.limbs_used();
        let b_used = b.limbs_used();
        if a_used == 0 || b_used == 0 {
            return Ok(Mpi::new());
        }

        let n = a_used + b_used;
        if n > MAX_LIMBS {
            return Err(MpiError::Alloc);
        }

        let mut limbs = vec![0 as Limb; n];
        for i in 0..a_used {
            let ai = a.limbs[i];
            let mut carry: Limb = 0;
            for j in 0..b_used {
                let (lo, hi) = muladdc(limbs[i + j], ai, b.limbs[j], carry);
                limbs[i + j] = lo;
                carry = hi;
            }
            let mut k = i + b_used;
            while carry != 0 {
                let (s, c) = limbs[k].overflowing_add(carry);
                limbs[k] = s;
                carry = c as Limb;
                k += 1;
            }
        }

        let mut x = Mpi {
            sign: a.sign.combine(b.sign),
            limbs,
        };
        x.normalize_sign();
        Ok(x)
    }

    /// Multiply against a small integer magnitude, with sign applied.
    pub fn mul_int(a: &Mpi, z: i64) -> Result<Mpi, MpiError> {
        let mut tmp = Mpi::new();
        tmp.set_int(z);
        Self::mul(a, &tmp)
    }

    /// `a = q*b + r`, with `0 <= |r| < |b|` and `sign(r) = sign(a)`.
    /// Fails with [`MpiError::DivByZero`] if `b` is zero.
    ///
    /// Single-limb divisors take a linear-time fast path; everything else
    /// runs Knuth's Algorithm D (TAOCP vol. 2, §4.3.1 — equivalently the
    /// `divmnu` routine from Hacker's Delight ch. 9), which estimates each
    /// quotient limb from the top two remainder limbs and the top divisor
    /// limb, then corrects the estimate at most twice before the
    /// multiply-subtract step.
    pub fn div_rem(a: &Mpi, b: &Mpi) -> Result<(Mpi, Mpi), MpiError> {
        if b.is_zero() {
            return Err(MpiError::DivByZero);
        }
        if a.is_zero() {
            return Ok((Mpi::new(), Mpi::new()));
        }

        let a_used = a.limbs_used();
        let b_used = b.limbs_used();

        let (q_mag, r_mag) = if a_used < b_used {
            (Vec::new(), a.limbs[..a_used].to_vec())
        } else if b_used == 1 {
            let d = b.limbs[0] as DoubleLimb;
            let mut q = vec![0 as Limb; a_used];
            let mut rem: DoubleLimb = 0;
            for i in (0..a_used).rev() {
                let cur = (rem << LIMB_BITS) | a.limbs[i] as DoubleLimb;
                q[i] = (cur / d) as Limb;
                rem = cur % d;
            }
            (q, vec![rem as Limb])
        } else {
            knuth_div(&a.limbs[..a_used], &b.limbs[..b_used])
        };

        let mut q = Mpi {
            sign: a.sign.combine(b.sign),
            limbs: q_mag,
        };
        q.normalize_sign();
        let mut r = Mpi {
            sign: a.sign,
            limbs: r_mag,
        };
        r.normalize_sign();
        Ok((q, r))
    }

    /// Convenience wrapper over [`Mpi::div_rem`] for callers that only need
    /// the quotient.
    pub fn div(a: &Mpi, b: &Mpi) -> Result<Mpi, MpiError> {
        Ok(Self::div_rem(a, b)?.0)
    }

    /// `a = q*b + rem`, returning only `rem` with `sign(rem) = sign(a)`.
    pub fn rem(a: &Mpi, b: &Mpi) -> Result<Mpi, MpiError> {
        Ok(Self::div_rem(a, b)?.1)
    }

    /// Remainder adjusted into `[0, |b|)`: `div_rem` followed by adding `b`
    /// back in when the raw remainder came out negative. Fails with
    /// [`MpiError::DivByZero`] if `b` is zero, [`MpiError::Negative`] if
    /// `b` is negative.
    pub fn modulo(a: &Mpi, b: &Mpi) -> Result<Mpi, MpiError> {
        if b.is_zero() {
            return Err(MpiError::DivByZero);
        }
        if b.sign.is_negative() {
            return Err(MpiError::Negative);
        }

        let (_, r) = Self::div_rem(a, b)?;
        let mut r = r;
        if r.sign.is_negative() && !r.is_zero() {
            r = Self::add(&r, b)?;
        }
        r.normalize_sign();
        Ok(r)
    }

    /// Fast single-limb remainder: `a mod z`, adjusted into `[0, z)`.
    /// Iterates limbs from most to least significant, maintaining
    /// `r <- (r << LIMB_BITS | limb) mod z` in a double-width accumulator.
    /// Fails with [`MpiError::DivByZero`] if `z == 0`,
    /// [`MpiError::Negative`] if `z < 0`.
    pub fn mod_int(a: &Mpi, z: i64) -> Result<Limb, MpiError> {
        if z == 0 {
            return Err(MpiError::DivByZero);
        }
        if z < 0 {
            return Err(MpiError::Negative);
        }

        let divisor = z as DoubleLimb;
        let used = a.limbs_used();
        let mut r: DoubleLimb = 0;
        for i in (0..used).rev() {
            r = ((r << LIMB_BITS) | a.limbs[i] as DoubleLimb) % divisor;
        }

        if a.sign.is_negative() && r != 0 {
            r = divisor - r;
        }
        Ok(r as Limb)
    }
}

/// `|a| = q*|b| + r` via Knuth's Algorithm D. Requires `a.len() >= b.len()
/// >= 2` and both slices trimmed (no high zero limbs). Returns `(q, r)`
/// with `q.len() == a.len() - b.len() + 1` and `r.len() == b.len()`.
fn knuth_div(a: &[Limb], b: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    let n = b.len();
    let m = a.len() - n;
    let shift = b[n - 1].leading_zeros() as usize;

    let a_mag = Mpi {
        sign: Sign::Positive,
        limbs: a.to_vec(),
    };
    let b_mag = Mpi {
        sign: Sign::Positive,
        limbs: b.to_vec(),
    };

    // Normalize: shift both operands so the divisor's top limb has its top
    // bit set. `shift_left` on an `a`/`b`-length input always yields exactly
    // one extra limb since `shift < LIMB_BITS`.
    let mut un = Mpi::shift_left(&a_mag, shift)
        .expect("normalization shift stays within MAX_LIMBS")
        .limbs;
    un.resize(m + n + 1, 0);
    let mut vn = Mpi::shift_left(&b_mag, shift)
        .expect("normalization shift stays within MAX_LIMBS")
        .limbs;
    vn.truncate(n);

    let base: DoubleLimb = 1 << LIMB_BITS;
    let mask: DoubleLimb = base - 1;
    let mut q = vec![0 as Limb; m + 1];

    for j in (0..=m).rev() {
        let top2 = ((un[j + n] as DoubleLimb) << LIMB_BITS) | un[j + n - 1] as DoubleLimb;
        let mut qhat = top2 / vn[n - 1] as DoubleLimb;
        let mut rhat = top2 % vn[n - 1] as DoubleLimb;

        while qhat >= base
            || qhat * vn[n - 2] as DoubleLimb > (rhat << LIMB_BITS) + un[j + n - 2] as DoubleLimb
        {
            qhat -= 1;
            rhat += vn[n - 1] as DoubleLimb;
            if rhat >= base {
                break;
            }
        }

        // Multiply-and-subtract qhat*vn from un[j..j+n+1).
        let mut carry: DoubleLimb = 0;
        let mut borrow: i128 = 0;
        for i in 0..n {
            let p = qhat * vn[i] as DoubleLimb + carry;
            carry = p >> LIMB_BITS;
            let sub = un[i + j] as i128 - (p & mask) as i128 - borrow;
            if sub < 0 {
                un[i + j] = (sub + base as i128) as Limb;
                borrow = 1;
            } else {
                un[i + j] = sub as Limb;
                borrow = 0;
            }
        }
        let top = un[j + n] as i128 - carry as i128 - borrow;

        if top < 0 {
            // qhat was one too large: add vn back once and decrement.
            qhat -= 1;
            let mut add_carry: DoubleLimb = 0;
            for i in 0..n {
                let s = un[i + j] as DoubleLimb + vn[i] as DoubleLimb + add_carry;
                un[i + j] = s as Limb;
                add_carry = s >> LIMB_BITS;
            }
            un[j + n] = (top + base as i128 + add_carry as i128) as Limb;
        } else {
            un[j + n] = top as Limb;
        }
        q[j] = qhat as Limb;
    }

    let un_remainder = Mpi {
        sign: Sign::Positive,
        limbs: un[..n].to_vec(),
    };
    let mut r = Mpi::shift_right(&un_remainder, shift).limbs;
    r.resize(n, 0);

    (q, r)
}

impl std::ops::Add<&Mpi> for &Mpi {
    type Output = Mpi;
    fn add(self, rhs: &Mpi) -> Mpi {
        Mpi::add(self, rhs).expect("addition exceeded MAX_LIMBS")
    }
}

impl std::ops::Sub<&Mpi> for &Mpi {
    type Output = Mpi;
    fn sub(self, rhs: &Mpi) -> Mpi {
        Mpi::sub(self, rhs).expect("subtraction exceeded MAX_LIMBS")
    }
}

impl std::ops::Mul<&Mpi> for &Mpi {
    type Output = Mpi;
    fn mul(self, rhs: &Mpi) -> Mpi {
        Mpi::mul(self, rhs).expect("multiplication exceeded MAX_LIMBS")
    }
}
