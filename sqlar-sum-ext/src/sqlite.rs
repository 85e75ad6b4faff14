//! SQLite host binding through `rusqlite`

use crate::flags::FunctionFlags;
use crate::function::ChecksumFunction;
use crate::registry::{FunctionRegistry, HostError};
use crate::status::StatusCode;
use rusqlite::functions::FunctionFlags as SqliteFunctionFlags;
use rusqlite::types::{Value, ValueRef};
use rusqlite::Connection;
use sqlar_sum_core::{ChecksumOutput, OtherValue, TaggedValue};

/// View a SQLite value as a tagged argument
pub fn tagged_value(value: ValueRef<'_>) -> TaggedValue<'_> {
    match value {
        ValueRef::Blob(data) => TaggedValue::Blob(data),
        ValueRef::Text(data) => TaggedValue::Text(data),
        ValueRef::Integer(v) => TaggedValue::Integer(v),
        ValueRef::Real(v) => TaggedValue::Other(OtherValue::Real(v)),
        ValueRef::Null => TaggedValue::Other(OtherValue::Null),
    }
}

impl FunctionRegistry for Connection {
    fn register_function(
        &mut self,
        name: &str,
        arity: i32,
        flags: FunctionFlags,
        callback: ChecksumFunction,
    ) -> Result<(), HostError> {
        let sqlite_flags = SqliteFunctionFlags::from_bits_truncate(flags.bits() as i32);

        self.create_scalar_function(name, arity, sqlite_flags, move |ctx| {
            let raw = ctx.get_raw(0);
            let arg = tagged_value(raw);
            tracing::trace!(function = callback.name(), value_type = arg.type_name(), "dispatch");

            Ok(match callback.call(&arg) {
                ChecksumOutput::Integer(v) => Value::Integer(i64::from(v)),
                ChecksumOutput::Passthrough(_) => Value::from(raw),
            })
        })
        .map_err(host_error)
    }
}

fn host_error(err: rusqlite::Error) -> HostError {
    match err {
        rusqlite::Error::SqliteFailure(failure, message) => {
            let status = StatusCode(failure.extended_code & 0xff);
            let message = message.unwrap_or_else(|| failure.to_string());
            HostError::new(status, message)
        }
        other => HostError::new(StatusCode::MISUSE, other.to_string()),
    }
}
