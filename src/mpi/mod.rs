//! Multi-precision integer representation, lifecycle, and bit-level queries.
//!
//! An [`Mpi`] is a signed arbitrary-precision integer: a sign and a
//! little-endian sequence of fixed-width [limbs](crate::limb). Zero is
//! always represented with a positive sign. Every public operation that can
//! yield zero re-normalizes the sign before returning, so equality and
//! ordering never need to special-case "negative zero".
//!
//! This module covers layers L1 (representation) and the bit-query half of
//! L2 from the design; arithmetic lives in [`arith`], comparisons in
//! [`cmp`], radix/binary I/O in [`radix`] and [`binary`], modular
//! arithmetic in [`montgomery`] and [`modular`], and number theory in
//! [`primes`].

pub mod arith;
pub mod binary;
pub mod cmp;
pub mod modular;
pub mod montgomery;
pub mod primes;
pub mod radix;

use crate::error::MpiError;
use crate::limb::{Limb, LIMB_BITS};

/// Hard ceiling on the number of limbs any `Mpi` may allocate. Operations
/// that would grow past this return [`MpiError::Alloc`]. Configurable only
/// by editing this constant and rebuilding, matching the original design's
/// treatment of `MAX_LIMBS` as a compile-time safety ceiling rather than a
/// runtime-tunable parameter.
pub const MAX_LIMBS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub(crate) fn flip(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    pub(crate) fn combine(self, other: Sign) -> Sign {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }

    pub(crate) fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }
}

/// A signed, arbitrary-precision integer.
///
/// See the module documentation for the representation invariants. All
/// fallible operations leave `self` either unchanged or in a well-defined
/// zero state on error; scratch values used internally are ordinary stack
/// locals and are zeroized via [`Drop`] on every exit path, including
/// early returns from `?`.
#[derive(Debug)]
pub struct Mpi {
    pub(crate) sign: Sign,
    pub(crate) limbs: Vec<Limb>,
}

impl Drop for Mpi {
    fn drop(&mut self) {
        // Zero the entire backing allocation, not just the logical length,
        // since Vec's growth strategy can leave the buffer larger than
        // `limbs.len()`. This storage may have held key material.
        let cap = self.limbs.capacity();
        self.limbs.resize(cap, 0);
        for limb in self.limbs.iter_mut() {
            *limb = 0;
        }
    }
}

impl Clone for Mpi {
    fn clone(&self) -> Self {
        Mpi {
            sign: self.sign,
            limbs: self.limbs.clone(),
        }
    }
}

impl Default for Mpi {
    fn default() -> Self {
        Mpi::new()
    }
}

impl Mpi {
    /// Produces an empty (zero-valued) MPI. Infallible; allocates nothing.
    pub fn new() -> Self {
        Mpi {
            sign: Sign::Positive,
            limbs: Vec::new(),
        }
    }

    /// Current capacity in limbs (`capacity >= significant_limbs`).
    pub fn capacity(&self) -> usize {
        self.limbs.len()
    }

    /// Ensures `capacity(self) >= n`, preserving the value. Newly acquired
    /// limbs are zeroed. Fails with [`MpiError::Alloc`] when `n` exceeds
    /// [`MAX_LIMBS`].
    pub fn grow(&mut self, n: usize) -> Result<(), MpiError> {
        if n > MAX_LIMBS {
            return Err(MpiError::Alloc);
        }
        if self.limbs.len() < n {
            log::trace!("mpi: growing capacity from {} to {} limbs", self.limbs.len(), n);
            self.limbs.resize(n, 0);
        }
        Ok(())
    }

    /// Index one past the highest non-zero limb, or 0 if the value is zero.
    /// This is the "significant limb count" used by invariant 3 and by
    /// `cmp_abs`'s tie-break.
    pub(crate) fn limbs_used(&self) -> usize {
        self.limbs
            .iter()
            .rposition(|&l| l != 0)
            .map_or(0, |i| i + 1)
    }

    /// `dst <- src`. A no-op if `src` and `self` are the same allocation
    /// (aliasing is always safe in this crate, never just "usually fine").
    pub fn copy_from(&mut self, src: &Mpi) -> Result<(), MpiError> {
        if std::ptr::eq(self, src) {
            return Ok(());
        }
        let used = src.limbs_used();
        self.grow(used)?;
        self.limbs.fill(0);
        self.limbs[..used].copy_from_slice(&src.limbs[..used]);
        self.sign = src.sign;
        Ok(())
    }

    /// Exchanges the contents of `self` and `other`. Infallible, no
    /// allocation.
    pub fn swap(&mut self, other: &mut Mpi) {
        std::mem::swap(self, other);
    }

    /// Sets `self` to a small signed integer. Shrinks capacity to exactly
    /// the number of limbs needed to hold `|z|` (at least one), matching the
    /// original design's "capacity-shrinks to 1 limb" contract generalized
    /// to limb widths narrower than 64 bits.
    pub fn set_int(&mut self, z: i64) {
        let sign = if z < 0 { Sign::Negative } else { Sign::Positive };
        let mag = z.unsigned_abs();

        let needed = if mag == 0 {
            1
        } else {
            ((64 - mag.leading_zeros()) as usize).div_ceil(LIMB_BITS as usize).max(1)
        };

        self.limbs.clear();
        self.limbs.resize(needed, 0);

        let mut rem = mag;
        for limb in self.limbs.iter_mut() {
            *limb = rem as Limb;
            if LIMB_BITS < 64 {
                rem >>= LIMB_BITS;
            } else {
                rem = 0;
            }
        }

        self.sign = if self.limbs_used() == 0 { Sign::Positive } else { sign };
    }

    /// Index of the lowest set bit, or 0 if `self` is zero.
    pub fn lsb(&self) -> usize {
        for (i, &limb) in self.limbs.iter().enumerate() {
            if limb != 0 {
                return i * LIMB_BITS as usize + limb.trailing_zeros() as usize;
            }
        }
        0
    }

    /// `1 + index of the highest set bit`, or 0 if `self` is zero. This is
    /// the value's bit length.
    pub fn msb(&self) -> usize {
        let used = self.limbs_used();
        if used == 0 {
            return 0;
        }
        let top = self.limbs[used - 1];
        (used - 1) * LIMB_BITS as usize + (LIMB_BITS - top.leading_zeros()) as usize
    }

    /// `ceil(msb(self) / 8)`: the number of bytes needed for a big-endian
    /// export of the magnitude.
    pub fn size_bytes(&self) -> usize {
        self.msb().div_ceil(8)
    }

    /// Reads bit `i` (0 = least significant), or 0 if `i` is beyond the
    /// current significant range.
    pub fn get_bit(&self, i: usize) -> u8 {
        let limb_idx = i / LIMB_BITS as usize;
        if limb_idx >= self.limbs.len() {
            return 0;
        }
        ((self.limbs[limb_idx] >> (i % LIMB_BITS as usize)) & 1) as u8
    }

    /// Sets (or clears) bit `i`, growing capacity as needed.
    pub fn set_bit(&mut self, i: usize, val: u8) -> Result<(), MpiError> {
        let limb_idx = i / LIMB_BITS as usize;
        self.grow(limb_idx + 1)?;
        let mask: Limb = 1 << (i % LIMB_BITS as usize);
        if val != 0 {
            self.limbs[limb_idx] |= mask;
        } else {
            self.limbs[limb_idx] &= !mask;
        }
        Ok(())
    }

    /// `true` if `self` is zero.
    pub fn is_zero(&self) -> bool {
        self.limbs_used() == 0
    }

    /// `true` if `self` is even (including zero).
    pub fn is_even(&self) -> bool {
        self.get_bit(0) == 0
    }

    /// `true` if `self` is odd.
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    pub(crate) fn normalize_sign(&mut self) {
        if self.is_zero() {
            self.sign = Sign::Positive;
        }
    }
}
