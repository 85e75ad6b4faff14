//! In-memory function catalog
//!
//! A minimal host: it stores installed functions keyed by case-insensitive
//! name and arity, and can invoke them. Useful for embedding the checksum
//! functions in something that is not a SQL engine, and for exercising
//! loading without one.

use crate::error::{ExtensionError, Result};
use crate::flags::FunctionFlags;
use crate::function::ChecksumFunction;
use crate::registry::{FunctionRegistry, HostError};
use crate::status::StatusCode;
use sqlar_sum_core::{ChecksumOutput, TaggedValue};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
struct Entry {
    flags: FunctionFlags,
    function: ChecksumFunction,
}

/// Function catalog keyed by (lowercased name, arity)
#[derive(Debug, Default)]
pub struct Catalog {
    entries: HashMap<(String, i32), Entry>,
    capacity: Option<usize>,
}

impl Catalog {
    /// Create an empty catalog with no size limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty catalog that refuses more than `capacity` functions
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: Some(capacity),
        }
    }

    /// Number of installed functions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is installed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `name/arity` is installed
    pub fn contains(&self, name: &str, arity: i32) -> bool {
        self.entries.contains_key(&key(name, arity))
    }

    /// Flags `name/arity` was installed with
    pub fn flags(&self, name: &str, arity: i32) -> Option<FunctionFlags> {
        self.entries.get(&key(name, arity)).map(|entry| entry.flags)
    }

    /// Call `name` with `args`, resolving the overload by argument count
    pub fn invoke<'a>(&self, name: &str, args: &[TaggedValue<'a>]) -> Result<ChecksumOutput<'a>> {
        let unknown = || ExtensionError::UnknownFunction {
            name: name.to_string(),
            arity: args.len(),
        };

        let arity = i32::try_from(args.len()).map_err(|_| unknown())?;
        let entry = self.entries.get(&key(name, arity)).ok_or_else(unknown)?;

        // Every installed function is unary
        match args {
            [arg] => Ok(entry.function.call(arg)),
            _ => Err(unknown()),
        }
    }
}

impl FunctionRegistry for Catalog {
    fn register_function(
        &mut self,
        name: &str,
        arity: i32,
        flags: FunctionFlags,
        callback: ChecksumFunction,
    ) -> std::result::Result<(), HostError> {
        if arity != ChecksumFunction::ARITY {
            return Err(HostError::new(
                StatusCode::MISUSE,
                format!("unsupported arity {} for {}", arity, name),
            ));
        }

        let key = key(name, arity);
        if self.entries.contains_key(&key) {
            return Err(HostError::new(
                StatusCode::ERROR,
                format!("function {}/{} already exists", name, arity),
            ));
        }

        if let Some(capacity) = self.capacity {
            if self.entries.len() >= capacity {
                return Err(HostError::new(StatusCode::NOMEM, "function catalog is full"));
            }
        }

        self.entries.insert(
            key,
            Entry {
                flags,
                function: callback,
            },
        );
        Ok(())
    }
}

fn key(name: &str, arity: i32) -> (String, i32) {
    (name.to_ascii_lowercase(), arity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlar_sum_core::{ChecksumKind, FallbackWidth, OtherValue};

    fn crc32() -> ChecksumFunction {
        ChecksumFunction::new(ChecksumKind::Crc32, FallbackWidth::Narrow)
    }

    #[test]
    fn test_names_are_case_insensitive() {
        let mut catalog = Catalog::new();
        catalog
            .register_function("CRC32", 1, FunctionFlags::CHECKSUM, crc32())
            .unwrap();

        assert!(catalog.contains("crc32", 1));
        assert!(!catalog.contains("crc32", 2));
        assert_eq!(
            catalog.invoke("Crc32", &[TaggedValue::text("123456789")]).unwrap(),
            ChecksumOutput::Integer(-873_187_034)
        );
    }

    #[test]
    fn test_duplicate_is_error() {
        let mut catalog = Catalog::new();
        catalog
            .register_function("crc32", 1, FunctionFlags::CHECKSUM, crc32())
            .unwrap();
        let err = catalog
            .register_function("crc32", 1, FunctionFlags::NONE, crc32())
            .unwrap_err();
        assert_eq!(err.status, StatusCode::ERROR);
        assert_eq!(catalog.flags("crc32", 1), Some(FunctionFlags::CHECKSUM));
    }

    #[test]
    fn test_capacity_limit() {
        let mut catalog = Catalog::with_capacity_limit(0);
        let err = catalog
            .register_function("crc32", 1, FunctionFlags::CHECKSUM, crc32())
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOMEM);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_rejects_non_unary() {
        let mut catalog = Catalog::new();
        let err = catalog
            .register_function("crc32", 2, FunctionFlags::CHECKSUM, crc32())
            .unwrap_err();
        assert_eq!(err.status, StatusCode::MISUSE);
    }

    #[test]
    fn test_invoke_wrong_arity() {
        let mut catalog = Catalog::new();
        catalog
            .register_function("crc32", 1, FunctionFlags::CHECKSUM, crc32())
            .unwrap();

        let null = TaggedValue::Other(OtherValue::Null);
        assert!(matches!(
            catalog.invoke("crc32", &[]),
            Err(ExtensionError::UnknownFunction { arity: 0, .. })
        ));
        assert!(matches!(
            catalog.invoke("crc32", &[null, null]),
            Err(ExtensionError::UnknownFunction { arity: 2, .. })
        ));
        assert!(matches!(
            catalog.invoke("md5", &[null]),
            Err(ExtensionError::UnknownFunction { .. })
        ));
    }
}
