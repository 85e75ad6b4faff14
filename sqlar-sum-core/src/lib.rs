//! SQLar Sum Core - Checksum dispatch for the `crc32()` and `adler32()` SQL functions
//!
//! This crate holds everything that does not touch a database host:
//!
//! - Tagged argument values and function outputs
//! - CRC-32 (gzip) and Adler-32 wrappers
//! - The integer fallback value
//! - Per-type dispatch

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod adapter;
pub mod checksum;
pub mod fallback;
pub mod value;

// Re-export commonly used types
pub use adapter::{compute, compute_adler32, compute_crc32};
pub use checksum::ChecksumKind;
pub use fallback::{integer_fallback, FallbackWidth};
pub use value::{ChecksumOutput, OtherValue, TaggedValue};
