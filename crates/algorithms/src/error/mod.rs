//! Error handling for the polynomial ring engine

use std::borrow::Cow;
use std::fmt;

use ntrumls_api::Error as CoreError;

/// The error type for ring arithmetic and encoding primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Operand degree is not below the ring dimension
    OutOfRing {
        /// Operation that rejected the operand
        operation: &'static str,
        /// Degree of the offending operand
        degree: usize,
        /// Ring dimension N
        dimension: usize,
    },

    /// No inverse exists under the given modulus
    NonInvertible {
        /// Operation that needed the inverse
        operation: &'static str,
        /// Modulus the inverse was requested under
        modulus: i64,
    },

    /// A bounded loop ran past its cap
    IterationLimit {
        /// Operation that hit the cap
        operation: &'static str,
        /// The configured cap
        limit: usize,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<R: Into<Cow<'static, str>>>(name: &'static str, reason: R) -> Self {
        Error::Parameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for ring primitives
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => write!(
                f,
                "Invalid length for {}: expected {}, got {}",
                context, expected, actual
            ),
            Error::OutOfRing {
                operation,
                degree,
                dimension,
            } => write!(
                f,
                "{}: degree {} is outside the ring of dimension {}",
                operation, degree, dimension
            ),
            Error::NonInvertible { operation, modulus } => {
                write!(f, "{}: not invertible modulo {}", operation, modulus)
            }
            Error::IterationLimit { operation, limit } => {
                write!(f, "{}: iteration limit {} exceeded", operation, limit)
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
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::MalformedWireData {
                context,
                expected,
                actual,
            },
            Error::OutOfRing {
                operation,
                degree,
                dimension,
            } => CoreError::OutOfRing {
                context: operation,
                degree,
                dimension,
            },
            Error::NonInvertible { operation, modulus } => CoreError::NonInvertible {
                context: operation,
                modulus,
            },
            Error::IterationLimit { operation, limit } => CoreError::IterationLimitExceeded {
                context: operation,
                limit,
            },
        }
    }
}

// Include the validation submodule
pub mod validate;
