//! Error handling for elliptic-curve primitives

use ecrypt_api::Error as CoreError;
use std::fmt;

/// The error type for elliptic-curve primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: String,
    },

    /// An integer literal could not be parsed
    Literal {
        /// Operation that received the literal
        context: &'static str,
        /// The offending literal, verbatim
        literal: String,
    },

    /// A rejection-sampling loop hit its attempt cap
    RetriesExhausted {
        /// The sampling operation that gave up
        operation: &'static str,
        /// Number of rejected draws
        attempts: u32,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: impl Into<String>) -> Self {
        Error::Parameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for elliptic-curve primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Literal { context, literal } => {
                write!(f, "Unparseable integer literal in {}: '{}'", context, literal)
            }
            Error::RetriesExhausted {
                operation,
                attempts,
            } => {
                write!(
                    f,
                    "Rejection sampling for {} exhausted {} attempts",
                    operation, attempts
                )
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason,
            },
            Error::Literal { context, literal } => CoreError::InvalidLiteral { context, literal },
            Error::RetriesExhausted {
                operation,
                attempts,
            } => CoreError::RetriesExhausted {
                operation,
                attempts,
            },
        }
    }
}
