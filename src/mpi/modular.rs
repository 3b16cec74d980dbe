//! Modular inverse via the extended Euclidean algorithm.

use super::Mpi;
use crate::error::MpiError;
use std::cmp::Ordering;

impl Mpi {
    /// The multiplicative inverse of `a` mod `n`: an `x` with
    /// `a*x == 1 (mod n)`. Requires `n > 1`; fails with
    /// [`MpiError::BadInput`] otherwise, and with
    /// [`MpiError::NotAcceptable`] if `gcd(a, n) != 1`.
    ///
    /// Runs the standard extended Euclidean algorithm (tracking only the
    /// Bézout coefficient for `a`, since the one for `n` is never needed)
    /// rather than the binary variant, so it works for both even and odd
    /// moduli without a separate code path.
    pub fn inv_mod(a: &Mpi, n: &Mpi) -> Result<Mpi, MpiError> {
        if n.cmp_int(1) != Ordering::Greater {
            return Err(MpiError::BadInput);
        }

        let mut old_r = Mpi::modulo(a, n)?;
        let mut r = n.clone();
        let mut old_s = {
            let mut one = Mpi::new();
            one.set_int(1);
            one
        };
        let mut s = Mpi::new();

        while !r.is_zero() {
            let (q, rem) = Mpi::div_rem(&old_r, &r)?;
            let qs = Mpi::mul(&q, &s)?;

            let new_old_r = std::mem::replace(&mut r, rem);
            old_r = new_old_r;

            let new_s = Mpi::sub(&old_s, &qs)?;
            let new_old_s = std::mem::replace(&mut s, new_s);
            old_s = new_old_s;
        }

        if old_r.cmp_int(1) != Ordering::Equal {
            return Err(MpiError::NotAcceptable);
        }

        Mpi::modulo(&old_s, n)
    }
}
