//! Error types

use core::fmt;

/// The error returned by [`Pkcs1v15SignatureVerifier::verify_signature`]
/// when verification could not be attempted.
///
/// A signature that simply does not match is not an error; it is reported as
/// `Ok(false)`.
///
/// [`Pkcs1v15SignatureVerifier::verify_signature`]: crate::Pkcs1v15SignatureVerifier::verify_signature
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The digest argument was empty.
    EmptyDigest,
    /// The signature argument was empty.
    EmptySignature,
    /// No recognized hash algorithm is configured, either because none was
    /// ever selected or because the last selected name was unrecognized.
    MissingHashAlgorithm,
    /// No key is configured.
    MissingKey,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::EmptyDigest => "digest to verify is empty",
            Error::EmptySignature => "signature to verify is empty",
            Error::MissingHashAlgorithm => "no recognized hash algorithm is configured",
            Error::MissingKey => "no key is configured",
        })
    }
}

impl core::error::Error for Error {}
