//! Error types for the signature crate

use core::fmt;

use ntrumls_algorithms::error::Error as AlgoError;

/// Errors that can occur during signature operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The scheme holds no key pair
    KeypairMissing {
        /// Operation that needed the key pair
        operation: &'static str,
    },

    /// Rejection sampling did not produce an acceptable signature
    SigningExhausted {
        /// Number of attempts made
        attempts: u32,
    },

    /// Invalid parameter set
    InvalidParameter(String),

    /// Invalid key material
    InvalidKey(String),

    /// Polynomial with the wrong number of coefficients for a public key
    InvalidKeySize { expected: usize, actual: usize },

    /// Polynomial with the wrong number of coefficients for a signature
    InvalidSignatureSize { expected: usize, actual: usize },

    /// Serialization error
    Serialization(String),

    /// Error raised by the ring engine
    Algorithm(AlgoError),

    /// Error raised through the public API layer (e.g. by a random source)
    Core(ntrumls_api::Error),
}

/// Result type for signature operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::KeypairMissing { operation } => {
                write!(f, "{}: no key pair has been generated or imported", operation)
            }
            Error::SigningExhausted { attempts } => {
                write!(f, "Signing gave up after {} attempts", attempts)
            }
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::InvalidKey(msg) => write!(f, "Invalid key: {}", msg),
            Error::InvalidKeySize { expected, actual } => write!(
                f,
                "Invalid public key size: expected {} coefficients, got {}",
                expected, actual
            ),
            Error::InvalidSignatureSize { expected, actual } => write!(
                f,
                "Invalid signature size: expected {} coefficients, got {}",
                expected, actual
            ),
            Error::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            Error::Algorithm(err) => write!(f, "{}", err),
            Error::Core(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<AlgoError> for Error {
    fn from(err: AlgoError) -> Self {
        Error::Algorithm(err)
    }
}

impl From<ntrumls_api::Error> for Error {
    fn from(err: ntrumls_api::Error) -> Self {
        Error::Core(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

// Convert to api::Error
impl From<Error> for ntrumls_api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::KeypairMissing { operation } => ntrumls_api::Error::KeypairMissing {
                context: operation,
            },
            Error::SigningExhausted { attempts } => ntrumls_api::Error::SigningExhausted {
                context: "ntrumls sign",
                attempts,
            },
            Error::InvalidParameter(message) => ntrumls_api::Error::InvalidParameter {
                context: "ntrumls parameters",
                message,
            },
            Error::InvalidKey(message) => ntrumls_api::Error::InvalidParameter {
                context: "ntrumls key",
                message,
            },
            Error::InvalidKeySize { expected, actual } => ntrumls_api::Error::InvalidParameter {
                context: "ntrumls public key",
                message: format!("expected {} coefficients, got {}", expected, actual),
            },
            Error::InvalidSignatureSize { expected, actual } => {
                ntrumls_api::Error::InvalidParameter {
                    context: "ntrumls signature",
                    message: format!("expected {} coefficients, got {}", expected, actual),
                }
            }
            Error::Serialization(message) => ntrumls_api::Error::SerializationError {
                context: "ntrumls key export",
                message,
            },
            Error::Algorithm(err) => ntrumls_api::Error::from(err),
            Error::Core(err) => err,
        }
    }
}
