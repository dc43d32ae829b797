//! Rectangular (row-major) grids of bytes or bits, the shape of a cipher state.

use core::ops::BitXor;

use crate::bits::{bytes_to_bits, Bit};
use crate::error::{Error, Result};

/// Expands every row of a byte grid into bits, making each row eight times wider.
pub fn grid_to_bits(grid: &[Vec<u8>]) -> Vec<Vec<Bit>> {
    grid.iter().map(|row| bytes_to_bits(row)).collect()
}

/// Concatenates all rows in row-major order.
pub fn flatten<T: Clone>(grid: &[Vec<T>]) -> Vec<T> {
    grid.iter().flat_map(|row| row.iter().cloned()).collect()
}

/// Splits a flat sequence into rows of `row_len`.
///
/// Fails with [`Error::Misaligned`] when `row_len` is zero or does not divide
/// the input length.
pub fn to_grid<T: Clone>(flat: &[T], row_len: usize) -> Result<Vec<Vec<T>>> {
    if row_len == 0 || flat.len() % row_len != 0 {
        return Err(Error::Misaligned {
            len: flat.len(),
            width: row_len,
        });
    }
    Ok(flat.chunks_exact(row_len).map(<[T]>::to_vec).collect())
}

/// Element-wise XOR of two grids of identical shape.
pub fn xor_grids<T>(lhs: &[Vec<T>], rhs: &[Vec<T>]) -> Result<Vec<Vec<T>>>
where
    T: BitXor<Output = T> + Copy,
{
    zip_grids(lhs, rhs, |a, b| a ^ b)
}

/// Element-wise integer sum of two byte grids of identical shape.
///
/// Sums are widened to `u16` and never reduced, so `0xff + 0xff` is `510`.
pub fn sum_grids(lhs: &[Vec<u8>], rhs: &[Vec<u8>]) -> Result<Vec<Vec<u16>>> {
    zip_grids(lhs, rhs, |a, b| u16::from(a) + u16::from(b))
}

fn ensure_same_shape<T, U>(lhs: &[Vec<T>], rhs: &[Vec<U>]) -> Result<()> {
    if lhs.len() != rhs.len() {
        return Err(Error::shape(format!(
            "row count {} vs {}",
            lhs.len(),
            rhs.len()
        )));
    }
    for (idx, (left, right)) in lhs.iter().zip(rhs.iter()).enumerate() {
        if left.len() != right.len() {
            return Err(Error::shape(format!(
                "row {idx} has length {} vs {}",
                left.len(),
                right.len()
            )));
        }
    }
    Ok(())
}

fn zip_grids<T, O, F>(lhs: &[Vec<T>], rhs: &[Vec<T>], op: F) -> Result<Vec<Vec<O>>>
where
    T: Copy,
    F: Fn(T, T) -> O,
{
    ensure_same_shape(lhs, rhs)?;
    Ok(lhs
        .iter()
        .zip(rhs.iter())
        .map(|(left, right)| left.iter().zip(right.iter()).map(|(&a, &b)| op(a, b)).collect())
        .collect())
}
