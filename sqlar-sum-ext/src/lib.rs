//! SQLar Sum Extension - Installs `crc32()` and `adler32()` into a database host
//!
//! This crate provides the host-facing layer:
//!
//! - Function flags and host result codes
//! - The [`FunctionRegistry`] host interface
//! - The load-time entry point ([`init`] / [`register`])
//! - An in-memory [`Catalog`] host
//! - Configuration loading
//! - A SQLite binding (feature `sqlite`)

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod flags;
pub mod function;
pub mod register;
pub mod registry;
#[cfg(feature = "sqlite")]
pub mod sqlite;
pub mod status;

// Re-export commonly used types
pub use catalog::Catalog;
pub use config::ExtensionConfig;
pub use error::{ExtensionError, Result};
pub use flags::FunctionFlags;
pub use function::ChecksumFunction;
pub use register::{init, init_with_config, register};
pub use registry::{FunctionRegistry, HostError};
pub use sqlar_sum_core::{
    compute_adler32, compute_crc32, ChecksumKind, ChecksumOutput, FallbackWidth, OtherValue,
    TaggedValue,
};
pub use status::StatusCode;
