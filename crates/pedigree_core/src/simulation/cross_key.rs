//! Cross key: stable identity of an ordered (sire, dam) request.
//!
//! `cross_key = xxhash64(sire_public_id 0xFF dam_public_id)`
//!
//! Order matters: swapping sire and dam is a different cross because the
//! variation term treats the two sides differently.

use xxhash_rust::xxh64::xxh64;

/// Hash the ordered (sire, dam) pair of public ids.
pub fn compute_cross_key(sire_public_id: &str, dam_public_id: &str) -> u64 {
    // 0xFF never appears in UTF-8, so field boundaries are unambiguous.
    let mut buf = Vec::with_capacity(sire_public_id.len() + dam_public_id.len() + 1);
    buf.extend_from_slice(sire_public_id.as_bytes());
    buf.push(0xFF);
    buf.extend_from_slice(dam_public_id.as_bytes());
    xxh64(&buf, 0)
}

/// Render a cross key as 16 lowercase hex digits.
pub fn format_cross_key(key: u64) -> String {
    format!("{key:016x}")
}
