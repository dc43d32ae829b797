//! Flat byte-block helpers.

/// XORs `rhs` into `dst` over their common prefix.
#[inline]
pub fn xor_in_place(dst: &mut [u8], rhs: &[u8]) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Returns the element-wise XOR of two blocks.
///
/// The result is as long as the shorter input; trailing bytes of the longer
/// one are dropped.
pub fn xor_blocks(lhs: &[u8], rhs: &[u8]) -> Vec<u8> {
    let mut out = lhs[..lhs.len().min(rhs.len())].to_vec();
    xor_in_place(&mut out, rhs);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_blocks_combines_bytewise() {
        assert_eq!(xor_blocks(&[0x00, 0xff, 0x0f], &[0xff, 0xff, 0xf0]), vec![0xff, 0x00, 0xff]);
    }

    #[test]
    fn xor_blocks_truncates_to_shorter_input() {
        assert_eq!(xor_blocks(&[1, 2, 3], &[1]), vec![0]);
        assert_eq!(xor_blocks(&[1], &[1, 2, 3]), vec![0]);
        assert!(xor_blocks(&[], &[1, 2]).is_empty());
    }

    #[test]
    fn xor_in_place_is_an_involution() {
        let key = [0x2b, 0x7e, 0x15, 0x16];
        let mut block = [0x32, 0x43, 0xf6, 0xa8];
        let original = block;
        xor_in_place(&mut block, &key);
        assert_ne!(block, original);
        xor_in_place(&mut block, &key);
        assert_eq!(block, original);
    }
}
