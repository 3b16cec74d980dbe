//! Big-endian unsigned binary import/export.

use super::{Mpi, Sign};
use crate::error::MpiError;
use crate::limb::Limb;

const LIMB_BYTES: usize = std::mem::size_of::<Limb>();

impl Mpi {
    /// Parses a big-endian unsigned byte string. There is no encoded sign;
    /// the result is always non-negative. Empty input yields zero.
    pub fn read_binary(bytes: &[u8]) -> Mpi {
        let mut limbs = vec![0 as Limb; bytes.len().div_ceil(LIMB_BYTES)];
        for (i, &byte) in bytes.iter().rev().enumerate() {
            let limb_idx = i / LIMB_BYTES;
            let byte_in_limb = i % LIMB_BYTES;
            limbs[limb_idx] |= (byte as Limb) << (byte_in_limb * 8);
        }
        let mut x = Mpi {
            sign: Sign::Positive,
            limbs,
        };
        x.normalize_sign();
        x
    }

    /// Writes the magnitude as a big-endian byte string, right-aligned and
    /// zero-padded up front to fill `buf` exactly. Fails with
    /// [`MpiError::BufferTooSmall`] (`needed` = [`Mpi::size_bytes`]) if
    /// `buf` cannot hold the value.
    pub fn write_binary(&self, buf: &mut [u8]) -> Result<(), MpiError> {
        let needed = self.size_bytes();
        if buf.len() < needed {
            return Err(MpiError::BufferTooSmall { needed });
        }

        buf.fill(0);
        for (i, &limb) in self.limbs.iter().enumerate() {
            for b in 0..LIMB_BYTES {
                let offset_from_lsb = i * LIMB_BYTES + b;
                if offset_from_lsb >= buf.len() {
                    continue;
                }
                let byte = ((limb >> (b * 8)) & 0xff) as u8;
                buf[buf.len() - 1 - offset_from_lsb] = byte;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_through_binary() {
        let x = Mpi::read_string("123456789abcdef0", 16).unwrap();
        let mut buf = vec![0u8; x.size_bytes()];
        x.write_binary(&mut buf).unwrap();
        let back = Mpi::read_binary(&buf);
        assert_eq!(back.cmp(&x), std::cmp::Ordering::Equal);
    }

    #[test]
    fn write_binary_reports_needed_size() {
        let one = {
            let mut m = Mpi::new();
            m.set_int(1);
            m
        };
        // 2^299 has msb == 300, so size_bytes() == ceil(300/8) == 38.
        let x = Mpi::shift_left(&one, 299).unwrap();
        assert_eq!(x.size_bytes(), 38);

        let mut tiny = [0u8; 10];
        assert_eq!(
            x.write_binary(&mut tiny),
            Err(MpiError::BufferTooSmall { needed: 38 })
        );

        let mut buf = vec![0u8; 38];
        x.write_binary(&mut buf).unwrap();
        assert_eq!(buf[0], 0x08); // bit 299 sits at offset 3 of the top byte
    }

    #[test]
    fn empty_input_is_zero() {
        let x = Mpi::read_binary(&[]);
        assert!(x.is_zero());
    }

    #[test]
    fn padding_into_larger_buffer_is_zero_filled() {
        let mut x = Mpi::new();
        x.set_int(0xff);
        let mut buf = [0xaa; 4];
        x.write_binary(&mut buf).unwrap();
        assert_eq!(buf, [0x00, 0x00, 0x00, 0xff]);
    }
}
