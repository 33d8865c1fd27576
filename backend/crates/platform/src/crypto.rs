//! Cryptographic Utilities

/// Constant-time comparison to prevent timing attacks
///
/// Length mismatch returns early; only the contents are compared in
/// constant time.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
