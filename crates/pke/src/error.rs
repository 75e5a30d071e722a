//! Error handling for public-key encryption operations

use ecrypt_algorithms::error::Error as PrimitiveError;
use ecrypt_api::Error as CoreError;
use std::fmt;

/// Error type for public-key encryption operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An underlying elliptic-curve primitive failed
    Primitive(PrimitiveError),
    /// The plaintext violates its domain: both coordinates must satisfy
    /// 0 < m < p
    InvalidPlaintext(&'static str),
    /// A shared-point coordinate is zero modulo p, so the masking (or its
    /// inverse) does not exist
    ///
    /// A fatal precondition violation of the key material — decryption with
    /// a merely wrong key does NOT produce this; it yields a non-matching
    /// plaintext without error.
    DegenerateKey(&'static str),
}

/// Result type for public-key encryption operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "MV-ElGamal primitive error: {}", e),
            Error::InvalidPlaintext(reason) => {
                write!(f, "MV-ElGamal invalid plaintext: {}", reason)
            }
            Error::DegenerateKey(context) => {
                write!(f, "MV-ElGamal degenerate key component in {}", context)
            }
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
            Error::InvalidPlaintext(reason) => CoreError::InvalidParameter {
                context: "MV-ElGamal plaintext",
                message: reason.to_string(),
            },
            Error::DegenerateKey(context) => CoreError::DegenerateKey { context },
        }
    }
}
