//! Host function catalog interface

use crate::flags::FunctionFlags;
use crate::function::ChecksumFunction;
use crate::status::StatusCode;
use std::fmt;

/// A host refusal to install a function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostError {
    /// Host result code
    pub status: StatusCode,
    /// Host-provided detail
    pub message: String,
}

impl HostError {
    /// Error with a code and message
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.status)
    }
}

/// A database host that can install scalar SQL functions
pub trait FunctionRegistry {
    /// Install `callback` under `name` with `arity` arguments.
    ///
    /// The host owns the installed function afterwards; nothing is returned
    /// besides success or the host's refusal.
    fn register_function(
        &mut self,
        name: &str,
        arity: i32,
        flags: FunctionFlags,
        callback: ChecksumFunction,
    ) -> Result<(), HostError>;
}

impl<R: FunctionRegistry + ?Sized> FunctionRegistry for &mut R {
    fn register_function(
        &mut self,
        name: &str,
        arity: i32,
        flags: FunctionFlags,
        callback: ChecksumFunction,
    ) -> Result<(), HostError> {
        (**self).register_function(name, arity, flags, callback)
    }
}
