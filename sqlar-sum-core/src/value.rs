//! Tagged host values

/// Value kinds with no checksum meaning
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OtherValue {
    /// SQL NULL
    Null,
    /// Floating point value
    Real(f64),
}

/// A borrowed, dynamically typed argument handed over by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaggedValue<'a> {
    /// Binary buffer
    Blob(&'a [u8]),
    /// Text buffer, encoded as the host stores it
    Text(&'a [u8]),
    /// Signed integer
    Integer(i64),
    /// Anything else
    Other(OtherValue),
}

impl<'a> TaggedValue<'a> {
    /// Text value from a string slice
    pub fn text(s: &'a str) -> Self {
        TaggedValue::Text(s.as_bytes())
    }

    /// The byte buffer for Blob and Text values
    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        match *self {
            TaggedValue::Blob(data) | TaggedValue::Text(data) => Some(data),
            TaggedValue::Integer(_) | TaggedValue::Other(_) => None,
        }
    }

    /// Short name of the runtime tag
    pub fn type_name(&self) -> &'static str {
        match self {
            TaggedValue::Blob(_) => "blob",
            TaggedValue::Text(_) => "text",
            TaggedValue::Integer(_) => "integer",
            TaggedValue::Other(OtherValue::Null) => "null",
            TaggedValue::Other(OtherValue::Real(_)) => "real",
        }
    }
}

impl From<OtherValue> for TaggedValue<'_> {
    fn from(value: OtherValue) -> Self {
        TaggedValue::Other(value)
    }
}

/// Result written back to the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChecksumOutput<'a> {
    /// 32-bit signed integer result
    Integer(i32),
    /// The argument, returned unchanged
    Passthrough(TaggedValue<'a>),
}

impl ChecksumOutput<'_> {
    /// Integer result, if any
    pub fn as_integer(&self) -> Option<i32> {
        match self {
            ChecksumOutput::Integer(v) => Some(*v),
            ChecksumOutput::Passthrough(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_bytes() {
        assert_eq!(TaggedValue::Blob(&[1, 2, 3]).as_bytes(), Some(&[1u8, 2, 3][..]));
        assert_eq!(TaggedValue::text("abc").as_bytes(), Some(&b"abc"[..]));
        assert_eq!(TaggedValue::Integer(7).as_bytes(), None);
        assert_eq!(TaggedValue::Other(OtherValue::Null).as_bytes(), None);
    }

    #[test]
    fn test_type_names() {
        let cases = vec![
            (TaggedValue::Blob(b""), "blob"),
            (TaggedValue::text(""), "text"),
            (TaggedValue::Integer(0), "integer"),
            (TaggedValue::Other(OtherValue::Null), "null"),
            (TaggedValue::from(OtherValue::Real(1.5)), "real"),
        ];

        for (value, expected) in cases {
            assert_eq!(value.type_name(), expected);
        }
    }

    #[test]
    fn test_output_as_integer() {
        assert_eq!(ChecksumOutput::Integer(-1).as_integer(), Some(-1));
        let passthrough = ChecksumOutput::Passthrough(TaggedValue::Other(OtherValue::Null));
        assert_eq!(passthrough.as_integer(), None);
    }
}
