//! Error handling for key-agreement operations.

use core::fmt;
use toycrypt_algorithms::Error as PrimitiveError;
use toycrypt_api::Error as CoreError;

/// Error type for key-agreement operations.
#[derive(Debug)]
pub enum Error {
    /// An error bubbled up from the primitive layer
    Primitive(PrimitiveError),
    /// An error bubbled up from the api layer
    Api(CoreError),
    /// A peer or derived point degenerated to the identity
    IdentityPoint(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Key agreement primitive error: {}", e),
            Error::Api(e) => write!(f, "Key agreement API error: {}", e),
            Error::IdentityPoint(context) => {
                write!(f, "Identity point in key agreement: {}", context)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        Error::Api(err)
    }
}

// Conversion from key-agreement Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Api(e) => e,
            Error::IdentityPoint(context) => CoreError::InvalidKey {
                context,
                #[cfg(feature = "std")]
                message: "point is the identity".to_string(),
            },
        }
    }
}

/// Result type for key-agreement operations.
pub type Result<T> = core::result::Result<T, Error>;
