//! Walks a 16-byte state through the conversion helpers and back.

use aes_prims::{
    bits_to_bytes, decode_hex, flatten, format_hex_list, gmul, grid_to_bits, to_grid, xor_grids,
};

fn main() -> aes_prims::Result<()> {
    // FIPS-197 appendix B input and first round key.
    let state = decode_hex("0x3243f6a8885a308d313198a2e0370734")?;
    let key = decode_hex("0x2b7e151628aed2a6abf7158809cf4f3c")?;

    let state = to_grid(&state, 4)?;
    let key = to_grid(&key, 4)?;
    let mixed = xor_grids(&state, &key)?;
    println!("after AddRoundKey: {}", format_hex_list(&flatten(&mixed)));

    let bits = grid_to_bits(&mixed);
    let restored = bits_to_bytes(&flatten(&bits))?;
    assert_eq!(restored, flatten(&mixed));

    assert_eq!(gmul(0x57, 0x83), 0xc1);
    println!("example succeeded; {} bits round-tripped", restored.len() * 8);
    Ok(())
}
