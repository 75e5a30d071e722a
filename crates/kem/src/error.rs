//! Error handling for key-agreement operations

use ecrypt_algorithms::error::Error as PrimitiveError;
use ecrypt_api::Error as CoreError;
use std::fmt;

/// Error type for key-agreement operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An underlying elliptic-curve primitive failed
    Primitive(PrimitiveError),
    /// The two parties of an exchange derived different secrets
    ///
    /// A caller-side protocol bug (wrong keys exchanged), reported as a
    /// branchable value rather than a panic.
    AgreementMismatch,
}

/// Result type for key-agreement operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "ECDH primitive error: {}", e),
            Error::AgreementMismatch => {
                write!(f, "ECDH exchange: the parties derived different secrets")
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
            Error::AgreementMismatch => CoreError::AgreementMismatch {
                context: "ECDH exchange",
            },
        }
    }
}
