//! Registrable checksum functions

use crate::config::ExtensionConfig;
use crate::flags::FunctionFlags;
use sqlar_sum_core::{compute, ChecksumKind, ChecksumOutput, FallbackWidth, TaggedValue};

/// One SQL-callable checksum function together with its registration data.
///
/// Holds no state besides its configuration, so a host can call it from any
/// thread and any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumFunction {
    kind: ChecksumKind,
    fallback: FallbackWidth,
}

impl ChecksumFunction {
    /// Every checksum function takes exactly one argument
    pub const ARITY: i32 = 1;

    /// Function for `kind` with the given integer fallback width
    pub fn new(kind: ChecksumKind, fallback: FallbackWidth) -> Self {
        Self { kind, fallback }
    }

    /// The `crc32` and `adler32` functions, in registration order
    pub fn all(config: &ExtensionConfig) -> [ChecksumFunction; 2] {
        [
            ChecksumFunction::new(ChecksumKind::Crc32, config.integer_fallback),
            ChecksumFunction::new(ChecksumKind::Adler32, config.integer_fallback),
        ]
    }

    /// SQL name
    pub fn name(&self) -> &'static str {
        self.kind.function_name()
    }

    /// Algorithm used for Blob and Text arguments
    pub fn kind(&self) -> ChecksumKind {
        self.kind
    }

    /// Flags declared at registration
    pub fn flags(&self) -> FunctionFlags {
        FunctionFlags::CHECKSUM
    }

    /// Evaluate for one argument
    pub fn call<'a>(&self, arg: &TaggedValue<'a>) -> ChecksumOutput<'a> {
        compute(self.kind, arg, self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_order() {
        let [first, second] = ChecksumFunction::all(&ExtensionConfig::default());
        assert_eq!(first.name(), "crc32");
        assert_eq!(second.name(), "adler32");
        assert_eq!(first.flags(), FunctionFlags::CHECKSUM);
    }

    #[test]
    fn test_call_uses_configured_width() {
        let arg = TaggedValue::Integer(0x2_0000_0003);
        let narrow = ChecksumFunction::new(ChecksumKind::Crc32, FallbackWidth::Narrow);
        let wide = ChecksumFunction::new(ChecksumKind::Crc32, FallbackWidth::Wide);
        assert_eq!(narrow.call(&arg), ChecksumOutput::Integer(-1));
        assert_eq!(wide.call(&arg), ChecksumOutput::Integer(1));
    }
}
