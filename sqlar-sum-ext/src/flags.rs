//! Function property flags

use std::ops::{BitOr, BitOrAssign};

/// Bit set of properties declared when a function is registered.
///
/// Bit values match the host's C-level constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FunctionFlags(u32);

impl FunctionFlags {
    /// No properties
    pub const NONE: FunctionFlags = FunctionFlags(0);
    /// Arguments are presented as UTF-8 text
    pub const UTF8: FunctionFlags = FunctionFlags(0x0000_0001);
    /// Same inputs always give the same output
    pub const DETERMINISTIC: FunctionFlags = FunctionFlags(0x0000_0800);
    /// Only callable from top-level SQL
    pub const DIRECTONLY: FunctionFlags = FunctionFlags(0x0008_0000);
    /// No side effects, safe to call from triggers, views and schema
    pub const INNOCUOUS: FunctionFlags = FunctionFlags(0x0020_0000);

    /// Flags both checksum functions are registered with
    pub const CHECKSUM: FunctionFlags =
        FunctionFlags(Self::UTF8.0 | Self::INNOCUOUS.0 | Self::DETERMINISTIC.0);

    /// Build from raw bits
    pub const fn from_bits(bits: u32) -> Self {
        FunctionFlags(bits)
    }

    /// Raw bits
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// True when every bit of `other` is set
    pub const fn contains(&self, other: FunctionFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for FunctionFlags {
    type Output = FunctionFlags;

    fn bitor(self, rhs: FunctionFlags) -> FunctionFlags {
        FunctionFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for FunctionFlags {
    fn bitor_assign(&mut self, rhs: FunctionFlags) {
        self.0 |= rhs.0;
    }
}
