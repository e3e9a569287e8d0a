//! Error handling for the ECIES-style scheme.

use core::fmt;
use toycrypt_algorithms::Error as PrimitiveError;
use toycrypt_api::Error as CoreError;
use toycrypt_kem::Error as KemError;

/// Error type for encrypt/decrypt operations.
#[derive(Debug)]
pub enum Error {
    /// An error bubbled up from the primitive layer
    Primitive(PrimitiveError),
    /// An error bubbled up from the api layer
    Api(CoreError),
    /// Encryption could not proceed
    EncryptionFailed(&'static str),
    /// Decryption could not proceed
    DecryptionFailed(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "PKE primitive error: {}", e),
            Error::Api(e) => write!(f, "PKE API error: {}", e),
            Error::EncryptionFailed(reason) => write!(f, "PKE encryption failed: {}", reason),
            Error::DecryptionFailed(reason) => write!(f, "PKE decryption failed: {}", reason),
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

impl From<KemError> for Error {
    fn from(err: KemError) -> Self {
        // flatten through the api error so callers see one wrapping layer
        Error::Api(CoreError::from(err))
    }
}

// Conversion from PKE Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Api(e) => e,
            Error::EncryptionFailed(reason) => CoreError::Other {
                context: "ECIES encryption",
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
            Error::DecryptionFailed(reason) => CoreError::DecryptionFailed {
                context: "ECIES decryption",
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
        }
    }
}

/// Result type for encrypt/decrypt operations.
pub type Result<T> = core::result::Result<T, Error>;
