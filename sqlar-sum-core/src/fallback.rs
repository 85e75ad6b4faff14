//! Derived value for integer arguments
//!
//! Integers have no byte buffer to checksum. Both functions instead return
//! `(value & 0xFFFFFFFF) ^ high_word`, where `high_word` is the upper 32 bits
//! of the extracted integer when it is wider than 32 bits and the complement
//! of the low word otherwise. This is not a checksum of anything; callers
//! rely on the exact value.

use serde::Deserialize;

/// Width at which the host integer is extracted before folding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackWidth {
    /// Truncate to 32 bits first. The high word is then the complement of
    /// the low word, so every integer folds to all bits set.
    #[default]
    Narrow,
    /// Keep all 64 bits and fold the upper word into the lower one.
    Wide,
}

/// Fold an integer argument into the 32-bit fallback value
pub fn integer_fallback(value: i64, width: FallbackWidth) -> u32 {
    match width {
        FallbackWidth::Narrow => {
            let low = value as i32 as u32;
            low ^ !low
        }
        FallbackWidth::Wide => {
            let bits = value as u64;
            (bits & 0xFFFF_FFFF) as u32 ^ (bits >> 32) as u32
        }
    }
}
