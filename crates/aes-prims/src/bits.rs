//! Byte <-> bit repacking, most significant bit first.

use crate::error::{Error, Result};

/// A single bit stored as `0` or `1`.
pub type Bit = u8;

/// Bits per byte.
pub const BYTE_BITS: usize = 8;

/// Expands each byte into its eight bits, MSB first, concatenated in order.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<Bit> {
    let mut bits = Vec::with_capacity(bytes.len() * BYTE_BITS);
    for &byte in bytes {
        for shift in (0..BYTE_BITS).rev() {
            bits.push((byte >> shift) & 1);
        }
    }
    bits
}

/// Packs groups of eight MSB-first bits back into bytes.
///
/// Fails with [`Error::Misaligned`] when the length is not a multiple of
/// eight and with [`Error::InvalidBit`] when an entry is neither 0 nor 1.
pub fn bits_to_bytes(bits: &[Bit]) -> Result<Vec<u8>> {
    if bits.len() % BYTE_BITS != 0 {
        return Err(Error::Misaligned {
            len: bits.len(),
            width: BYTE_BITS,
        });
    }
    bits.chunks_exact(BYTE_BITS)
        .enumerate()
        .map(|(chunk_idx, chunk)| {
            chunk.iter().enumerate().try_fold(0u8, |acc, (offset, &bit)| {
                if bit > 1 {
                    return Err(Error::InvalidBit {
                        index: chunk_idx * BYTE_BITS + offset,
                        value: bit,
                    });
                }
                Ok((acc << 1) | bit)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn expands_msb_first() {
        assert_eq!(bytes_to_bits(&[0x80]), vec![1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(
            bytes_to_bits(&[0x01, 0xa5]),
            vec![0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1]
        );
        assert!(bytes_to_bits(&[]).is_empty());
    }

    #[test]
    fn packs_msb_first() {
        assert_eq!(bits_to_bytes(&[0, 0, 0, 0, 1, 1, 1, 1]).unwrap(), vec![0x0f]);
        assert_eq!(bits_to_bytes(&[]).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn rejects_misaligned_length() {
        let err = bits_to_bytes(&[1; 9]).unwrap_err();
        assert_eq!(err, Error::Misaligned { len: 9, width: 8 });
        assert!(bits_to_bytes(&[0; 7]).is_err());
    }

    #[test]
    fn rejects_values_other_than_zero_or_one() {
        let mut bits = vec![0u8; 16];
        bits[11] = 2;
        assert_eq!(
            bits_to_bytes(&bits).unwrap_err(),
            Error::InvalidBit { index: 11, value: 2 }
        );
    }

    #[test]
    fn round_trip_random_blocks() {
        let mut rng = ChaCha20Rng::from_seed([11u8; 32]);
        for len in [0usize, 1, 16, 32, 33] {
            let mut bytes = vec![0u8; len];
            rng.fill_bytes(&mut bytes);
            let bits = bytes_to_bits(&bytes);
            assert_eq!(bits.len(), len * BYTE_BITS);
            assert_eq!(bits_to_bytes(&bits).unwrap(), bytes);
        }
    }
}
