//! Extension entry point

use crate::config::ExtensionConfig;
use crate::error::{ExtensionError, Result};
use crate::function::ChecksumFunction;
use crate::registry::FunctionRegistry;
use crate::status::StatusCode;

/// Install `crc32` then `adler32` on `host`.
///
/// Stops at the first refusal. A function installed before the failure
/// stays installed.
pub fn register<H: FunctionRegistry + ?Sized>(host: &mut H, config: &ExtensionConfig) -> Result<()> {
    for function in ChecksumFunction::all(config) {
        let name = function.name();
        let arity = ChecksumFunction::ARITY;
        let flags = function.flags();

        // ROW and DONE are success codes as far as loading is concerned
        match host.register_function(name, arity, flags, function) {
            Err(err) if !err.status.is_ok() => {
                tracing::warn!(
                    function = name,
                    status = %err.status,
                    message = %err.message,
                    "function registration failed"
                );
                return Err(ExtensionError::Registration {
                    name: name.to_string(),
                    arity,
                    status: err.status,
                    message: err.message,
                });
            }
            _ => {
                tracing::debug!(function = name, arity, flags = flags.bits(), "function registered");
            }
        }
    }

    Ok(())
}

/// Load-time entry point with the default configuration
pub fn init<H: FunctionRegistry + ?Sized>(host: &mut H) -> StatusCode {
    init_with_config(host, &ExtensionConfig::default())
}

/// Load-time entry point reporting the first failure as a result code
pub fn init_with_config<H: FunctionRegistry + ?Sized>(
    host: &mut H,
    config: &ExtensionConfig,
) -> StatusCode {
    match register(host, config) {
        Ok(()) => StatusCode::OK,
        Err(err) => err.status(),
    }
}
