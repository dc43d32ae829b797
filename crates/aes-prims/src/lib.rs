//! Byte-level building blocks for AES-style block ciphers.
//!
//! This crate provides:
//! - GF(2^8) arithmetic under the AES polynomial (`gmul`, `xtime`, [`Gf256`]).
//! - Hex text <-> byte conversions and a bracketed display format.
//! - MSB-first byte <-> bit repacking.
//! - Row-major grid helpers: flatten/reshape, element-wise XOR and sum.
//!
//! Everything is a pure function over borrowed input. There is no cipher
//! here: no key schedule, S-box or round structure.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bits;
mod block;
mod codec;
mod error;
mod field;
mod grid;

pub use crate::bits::{bits_to_bytes, bytes_to_bits, Bit, BYTE_BITS};
pub use crate::block::{xor_blocks, xor_in_place};
pub use crate::codec::{decode_hex, encode_hex, format_hex_list};
pub use crate::error::{Error, Result};
pub use crate::field::{gadd, gmul, xtime, Gf256, REDUCTION};
pub use crate::grid::{flatten, grid_to_bits, sum_grids, to_grid, xor_grids};
