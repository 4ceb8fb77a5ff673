//! Base62 encoding of digest prefixes.

/// Alphabet order is load-bearing: digits, then uppercase, then lowercase.
/// Existing backups contain identifiers produced with this ordering
/// (`0xc2103439` encodes to `3YLBCD`).
const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Encodes a value as a compact base62 identifier.
pub fn encode(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHABET[(value % 62) as usize] as char);
        value /= 62;
    }
    digits.iter().rev().collect()
}
