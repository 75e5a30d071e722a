//! Error type definitions for elliptic-curve operations

use std::fmt;

/// Primary error type for ecrypt operations
///
/// Verification mismatches are deliberately absent: a failed signature check
/// or a disagreeing key exchange is an ordinary result value the caller
/// branches on, not an error. Only conditions that prevent an operation from
/// producing a meaningful result live here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A supplied parameter is outside its documented domain
    InvalidParameter {
        /// Operation that rejected the parameter
        context: &'static str,
        /// Reason the parameter is unusable
        message: String,
    },

    /// An integer literal could not be parsed
    InvalidLiteral {
        /// Operation that received the literal
        context: &'static str,
        /// The offending literal, verbatim
        literal: String,
    },

    /// A key component reduced to zero where a modular inverse is required
    ///
    /// Raised by decryption when the recovered shared point has a zero
    /// coordinate. Distinct from a wrong-key mismatch, which decrypts
    /// without error to a non-matching plaintext.
    DegenerateKey {
        /// Operation that hit the degenerate component
        context: &'static str,
    },

    /// A rejection-sampling loop hit its attempt cap
    RetriesExhausted {
        /// The sampling operation that gave up
        operation: &'static str,
        /// Number of draws that were rejected
        attempts: u32,
    },

    /// Both parties of a key exchange derived different secrets
    ///
    /// Indicates a caller-side protocol bug (wrong keys exchanged);
    /// reportable and non-fatal.
    AgreementMismatch {
        /// Exchange flow that observed the mismatch
        context: &'static str,
    },

    /// Fallback for other errors
    Other {
        /// Operation that failed
        context: &'static str,
        /// Failure details
        message: String,
    },
}

/// Result type for ecrypt operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::InvalidLiteral { literal, .. } => Self::InvalidLiteral { context, literal },
            Self::DegenerateKey { .. } => Self::DegenerateKey { context },
            Self::RetriesExhausted { attempts, .. } => Self::RetriesExhausted {
                operation: context,
                attempts,
            },
            Self::AgreementMismatch { .. } => Self::AgreementMismatch { context },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter { context, message } => {
                write!(f, "Invalid parameter in {}: {}", context, message)
            }
            Error::InvalidLiteral { context, literal } => {
                write!(f, "Unparseable integer literal in {}: '{}'", context, literal)
            }
            Error::DegenerateKey { context } => {
                write!(f, "Degenerate key component in {}", context)
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
            Error::AgreementMismatch { context } => {
                write!(f, "Key agreement mismatch in {}", context)
            }
            Error::Other { context, message } => write!(f, "{}: {}", context, message),
        }
    }
}

impl std::error::Error for Error {}
