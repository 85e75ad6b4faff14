//! CRC-32 and Adler-32 checksum utilities

use std::fmt;

/// Compute the gzip (reflected IEEE) CRC-32 of `data` with seed 0
pub fn compute_crc32(data: &[u8]) -> u32 {
    crc32fast::hash(data)
}

/// Continue a CRC-32 from a previous value
pub fn update_crc32(prev: u32, data: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new_with_initial(prev);
    hasher.update(data);
    hasher.finalize()
}

/// Compute the standard Adler-32 of `data` (empty input yields 1)
pub fn compute_adler32(data: &[u8]) -> u32 {
    let mut adler = adler::Adler32::new();
    adler.write_slice(data);
    adler.checksum()
}

/// Continue an Adler-32 from a previous checksum
pub fn update_adler32(prev: u32, data: &[u8]) -> u32 {
    let mut adler = adler::Adler32::from_checksum(prev);
    adler.write_slice(data);
    adler.checksum()
}

/// Checksum algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecksumKind {
    /// gzip reflected CRC-32
    Crc32,
    /// zlib Adler-32
    Adler32,
}

impl ChecksumKind {
    /// SQL function name this algorithm is exposed under
    pub fn function_name(&self) -> &'static str {
        match self {
            ChecksumKind::Crc32 => "crc32",
            ChecksumKind::Adler32 => "adler32",
        }
    }

    /// Digest a complete buffer
    pub fn digest(&self, data: &[u8]) -> u32 {
        match self {
            ChecksumKind::Crc32 => compute_crc32(data),
            ChecksumKind::Adler32 => compute_adler32(data),
        }
    }
}

impl fmt::Display for ChecksumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.function_name())
    }
}
