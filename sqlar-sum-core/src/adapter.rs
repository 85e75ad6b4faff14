//! Type dispatch for the `crc32()` and `adler32()` SQL functions

use crate::checksum::ChecksumKind;
use crate::fallback::{integer_fallback, FallbackWidth};
use crate::value::{ChecksumOutput, TaggedValue};

/// `crc32(X)` with the default integer width
pub fn compute_crc32<'a>(arg: &TaggedValue<'a>) -> ChecksumOutput<'a> {
    compute(ChecksumKind::Crc32, arg, FallbackWidth::Narrow)
}

/// `adler32(X)` with the default integer width
pub fn compute_adler32<'a>(arg: &TaggedValue<'a>) -> ChecksumOutput<'a> {
    compute(ChecksumKind::Adler32, arg, FallbackWidth::Narrow)
}

/// Dispatch one argument on its runtime tag.
///
/// Blob and Text are digested with `kind`; the 32-bit result is returned with
/// its bit pattern reinterpreted as signed. Integers go through
/// [`integer_fallback`]. Everything else is handed back unchanged.
pub fn compute<'a>(
    kind: ChecksumKind,
    arg: &TaggedValue<'a>,
    width: FallbackWidth,
) -> ChecksumOutput<'a> {
    match *arg {
        TaggedValue::Blob(data) | TaggedValue::Text(data) => {
            ChecksumOutput::Integer(kind.digest(data) as i32)
        }
        TaggedValue::Integer(value) => {
            ChecksumOutput::Integer(integer_fallback(value, width) as i32)
        }
        TaggedValue::Other(_) => ChecksumOutput::Passthrough(*arg),
    }
}
