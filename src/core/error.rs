use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed query string.
    SyntaxError,
    /// Required field attributes missing at the host.
    SchemaError,
    /// Payload could not decode as four integers, or exceeded the length bound.
    CorruptPayload,
    /// Offsets not sorted, `qty` exceeds buffer capacity, constraint arrays mismatched.
    InternalInvariant,
    /// Propagated unchanged from the underlying posting enumerator.
    IoError,
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub fn new(kind: ErrorKind, context: impl Into<String>) -> Self {
        Error { kind, context: context.into() }
    }

    pub fn syntax(context: impl Into<String>) -> Self {
        Self::new(ErrorKind::SyntaxError, context)
    }

    pub fn schema(context: impl Into<String>) -> Self {
        Self::new(ErrorKind::SchemaError, context)
    }

    pub fn corrupt_payload(context: impl Into<String>) -> Self {
        Self::new(ErrorKind::CorruptPayload, context)
    }

    pub fn internal(context: impl Into<String>) -> Self {
        Self::new(ErrorKind::InternalInvariant, context)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.context)
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error { kind: ErrorKind::IoError, context: err.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
