//! Error type definitions for ring arithmetic and signature operations

use thiserror::Error;

/// Primary error type for ntrumls operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An operand's degree does not fit the ring dimension
    #[error("{context}: operand of degree {degree} lies outside the ring of dimension {dimension}")]
    OutOfRing {
        context: &'static str,
        degree: usize,
        dimension: usize,
    },

    /// Invalid parameter error
    #[error("{context}: invalid parameter: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// No inverse exists for the operand under the requested modulus
    #[error("{context}: operand has no inverse modulo {modulus}")]
    NonInvertible {
        context: &'static str,
        modulus: i64,
    },

    /// A bounded loop hit its configured cap
    #[error("{context}: exceeded iteration limit of {limit}")]
    IterationLimitExceeded {
        context: &'static str,
        limit: usize,
    },

    /// The scheme holds no key pair
    #[error("{context}: no key pair has been generated or imported")]
    KeypairMissing {
        context: &'static str,
    },

    /// Packed bytes do not match the expected layout
    #[error("{context}: malformed wire data (expected {expected} bytes, got {actual})")]
    MalformedWireData {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Rejection sampling ran out of attempts
    #[error("{context}: rejection sampling exhausted after {attempts} attempts")]
    SigningExhausted {
        context: &'static str,
        attempts: u32,
    },

    /// Invalid signature error
    #[error("{context}: invalid signature")]
    InvalidSignature {
        context: &'static str,
    },

    /// Serialization error
    #[error("Serialization error: {context}: {message}")]
    SerializationError {
        context: &'static str,
        message: String,
    },
}

/// Result type for ntrumls operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidParameter` error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::OutOfRing { degree, dimension, .. } => Self::OutOfRing {
                context,
                degree,
                dimension,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::NonInvertible { modulus, .. } => Self::NonInvertible { context, modulus },
            Self::IterationLimitExceeded { limit, .. } => {
                Self::IterationLimitExceeded { context, limit }
            }
            Self::KeypairMissing { .. } => Self::KeypairMissing { context },
            Self::MalformedWireData { expected, actual, .. } => Self::MalformedWireData {
                context,
                expected,
                actual,
            },
            Self::SigningExhausted { attempts, .. } => Self::SigningExhausted { context, attempts },
            Self::InvalidSignature { .. } => Self::InvalidSignature { context },
            Self::SerializationError { message, .. } => {
                Self::SerializationError { context, message }
            }
        }
    }

    /// The static context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::OutOfRing { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::NonInvertible { context, .. }
            | Self::IterationLimitExceeded { context, .. }
            | Self::KeypairMissing { context }
            | Self::MalformedWireData { context, .. }
            | Self::SigningExhausted { context, .. }
            | Self::InvalidSignature { context }
            | Self::SerializationError { context, .. } => context,
        }
    }
}
