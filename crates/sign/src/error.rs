//! Error handling for signature operations

use ecrypt_algorithms::error::Error as PrimitiveError;
use ecrypt_api::Error as CoreError;
use std::fmt;

/// Error type for signature generation
///
/// Verification never errors; it returns a
/// [`Verification`](crate::ecdsa::Verification) value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An underlying elliptic-curve primitive failed
    Primitive(PrimitiveError),
    /// The value to sign is outside its domain [0, n)
    InvalidValue(&'static str),
}

/// Result type for signature operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "ECDSA primitive error: {}", e),
            Error::InvalidValue(reason) => write!(f, "ECDSA invalid value: {}", reason),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::InvalidValue(reason) => CoreError::InvalidParameter {
                context: "ECDSA value",
                message: reason.to_string(),
            },
        }
    }
}
