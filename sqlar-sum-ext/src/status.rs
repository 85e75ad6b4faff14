//! Host result codes

use std::fmt;

/// Result code as returned by the host's C-level API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(pub i32);

impl StatusCode {
    /// Successful result
    pub const OK: StatusCode = StatusCode(0);
    /// Generic error
    pub const ERROR: StatusCode = StatusCode(1);
    /// The database file is locked
    pub const BUSY: StatusCode = StatusCode(5);
    /// A memory allocation failed
    pub const NOMEM: StatusCode = StatusCode(7);
    /// Library used incorrectly
    pub const MISUSE: StatusCode = StatusCode(21);
    /// A step has another row ready
    pub const ROW: StatusCode = StatusCode(100);
    /// A step has finished executing
    pub const DONE: StatusCode = StatusCode(101);

    /// Raw numeric code
    pub fn code(&self) -> i32 {
        self.0
    }

    /// `OK`, `ROW` and `DONE` all count as success
    pub fn is_ok(&self) -> bool {
        matches!(*self, StatusCode::OK | StatusCode::ROW | StatusCode::DONE)
    }
}

impl From<i32> for StatusCode {
    fn from(code: i32) -> Self {
        StatusCode(code)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            StatusCode::OK => "OK",
            StatusCode::ERROR => "ERROR",
            StatusCode::BUSY => "BUSY",
            StatusCode::NOMEM => "NOMEM",
            StatusCode::MISUSE => "MISUSE",
            StatusCode::ROW => "ROW",
            StatusCode::DONE => "DONE",
            _ => return write!(f, "code {}", self.0),
        };
        f.write_str(name)
    }
}
