use sha3::{Digest as _, Keccak256};

/// Keccak-256 (the pre-standard SHA-3 padding) of the concatenation of `parts`.
pub fn keccak256(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// Splits a 32-byte value into two big-endian 128-bit halves and XORs them.
pub(crate) fn fold_halves(bytes: &[u8; 32]) -> u128 {
    let mut hi = [0u8; 16];
    let mut lo = [0u8; 16];
    hi.copy_from_slice(&bytes[..16]);
    lo.copy_from_slice(&bytes[16..]);
    u128::from_be_bytes(hi) ^ u128::from_be_bytes(lo)
}
