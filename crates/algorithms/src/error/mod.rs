//! Error handling for the toycrypt primitives

use toycrypt_api::Error as CoreError;

#[cfg(not(feature = "std"))]
use core::fmt;
#[cfg(feature = "std")]
use std::fmt;

/// The error type for toycrypt primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
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

    /// An externally supplied point does not satisfy the curve equation
    PointNotOnCurve {
        /// Operation that rejected the point
        context: &'static str,
    },

    /// A private or ephemeral scalar outside `[1, n-1]`
    ScalarOutOfRange {
        /// Operation that rejected the scalar
        context: &'static str,
        /// The offending value
        value: u64,
        /// The claimed group order the scalar was checked against
        order: u64,
    },

    /// Hex input that cannot be decoded into whole bytes
    MalformedHex {
        /// Operation that rejected the input
        context: &'static str,
        /// What exactly was wrong
        reason: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for toycrypt primitive operations
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
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::PointNotOnCurve { context } => {
                write!(f, "Point is not on the curve in {}", context)
            }
            Error::ScalarOutOfRange {
                context,
                value,
                order,
            } => {
                write!(
                    f,
                    "Scalar {} out of range [1, {}] in {}",
                    value,
                    order.saturating_sub(1),
                    context
                )
            }
            Error::MalformedHex { context, reason } => {
                write!(f, "Malformed hex input in {}: {}", context, reason)
            }
        }
    }
}

// Implement std::error::Error when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::PointNotOnCurve { context } => CoreError::InvalidKey {
                context,
                #[cfg(feature = "std")]
                message: "point is not on the curve".to_string(),
            },
            Error::ScalarOutOfRange { context, .. } => CoreError::InvalidKey {
                context,
                #[cfg(feature = "std")]
                message: "scalar out of range".to_string(),
            },
            Error::MalformedHex { context, reason } => CoreError::InvalidCiphertext {
                context,
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
        }
    }
}

// Include the validation submodule
pub mod validate;
