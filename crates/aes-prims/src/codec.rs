//! Hex text <-> byte conversions.

use crate::error::Result;

const PREFIX: &str = "0x";

/// Decodes a hex string such as `"0x0001ff"` into bytes.
///
/// A leading `0x` is optional. Digits are case-insensitive. An odd digit
/// count is left-padded with a single `0`, so `"0x1"` decodes like `"0x01"`.
pub fn decode_hex(input: &str) -> Result<Vec<u8>> {
    let digits = input.strip_prefix(PREFIX).unwrap_or(input);
    if digits.len() % 2 == 0 {
        return Ok(hex::decode(digits)?);
    }
    log::trace!("left-padding odd-length hex input ({} digits)", digits.len());
    let mut padded = String::with_capacity(digits.len() + 1);
    padded.push('0');
    padded.push_str(digits);
    Ok(hex::decode(padded)?)
}

/// Canonical hex encoding: `0x` followed by lower-case digit pairs.
///
/// Inverse of [`decode_hex`] up to the zero padding of odd-length input.
pub fn encode_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(PREFIX.len() + bytes.len() * 2);
    out.push_str(PREFIX);
    out.push_str(&hex::encode(bytes));
    out
}

/// Renders bytes as `[0x00, 0xff, 0x10]` for logs and terminal output.
///
/// This is a display format only; there is no parser for it.
pub fn format_hex_list(bytes: &[u8]) -> String {
    let tokens: Vec<String> = bytes.iter().map(|byte| format!("0x{byte:02x}")).collect();
    format!("[{}]", tokens.join(", "))
}
