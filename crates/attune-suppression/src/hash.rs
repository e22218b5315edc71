//! Deterministic streak coin.
//!
//! `streak_respect` suppresses with 50% probability, but the flip must be
//! stable: repeated evaluations on the same day with the same streak must
//! agree. The coin is a blake3 hash over `"YYYY-MM-DD:streak"`; the first
//! eight bytes read little-endian, even = suppress. No RNG anywhere.

use chrono::NaiveDate;

/// Flip the stable coin for `(date, streak)`. `true` = suppress.
pub fn streak_coin(date: NaiveDate, streak: u32) -> bool {
    let input = format!("{}:{}", date.format("%Y-%m-%d"), streak);
    let hash = blake3::hash(input.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes) % 2 == 0
}
