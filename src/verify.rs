//! PKCS#1 v1.5 signature verification adapter.

use digest::Digest;

use crate::{Error, HashAlgorithmName, HashOidResolver, OidRegistry};

/// RSA signature padding schemes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum SignaturePadding {
    /// The deterministic PKCS#1 v1.5 scheme.
    Pkcs1,
}

/// Key-bound asymmetric verification capability.
///
/// The public key material lives inside the implementing value; the adapter
/// only supplies the prehashed data, the signature, the canonical digest
/// algorithm name, and the padding scheme. The RSA computation itself
/// (modular exponentiation, padding validation, digest comparison) is
/// entirely the implementation's concern.
pub trait AsymmetricVerifier {
    /// Returns `true` when `signature` is a valid signature over `hash`
    /// under this key, the named digest algorithm, and `padding`.
    fn verify_hash(
        &self,
        hash: &[u8],
        signature: &[u8],
        hash_algorithm: &HashAlgorithmName,
        padding: SignaturePadding,
    ) -> bool;
}

/// Verifies PKCS#1 v1.5 signatures over prehashed data.
///
/// The adapter holds two pieces of mutable configuration, a borrowed
/// key-bound [`AsymmetricVerifier`] and a canonical hash algorithm name, and
/// exposes a single verification entry point. Both may be set or replaced in
/// any order, any number of times; [`verify_signature`] is the sole point
/// where completeness of the configuration is enforced.
///
/// Selecting an unrecognized algorithm name does not fail immediately. It
/// clears the configured name, and the error surfaces from the next
/// verification call instead (see [`set_hash_algorithm`]).
///
/// There is no internal locking; a configure-then-verify sequence shared
/// across threads needs caller-side synchronization to be atomic.
///
/// [`verify_signature`]: Self::verify_signature
/// [`set_hash_algorithm`]: Self::set_hash_algorithm
#[must_use]
pub struct Pkcs1v15SignatureVerifier<'k, K, R = OidRegistry> {
    key: Option<&'k K>,
    hash_algorithm: Option<HashAlgorithmName>,
    resolver: R,
}

impl<'k, K> Pkcs1v15SignatureVerifier<'k, K> {
    /// Create an adapter with no key and no hash algorithm configured,
    /// resolving names through the built-in [`OidRegistry`].
    pub fn new() -> Self {
        Self::with_resolver(OidRegistry)
    }

    /// Create an adapter bound to `key`, with no hash algorithm configured.
    pub fn with_key(key: &'k K) -> Self {
        let mut verifier = Self::new();
        verifier.set_key(key);
        verifier
    }
}

impl<K> Default for Pkcs1v15SignatureVerifier<'_, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'k, K, R: HashOidResolver> Pkcs1v15SignatureVerifier<'k, K, R> {
    /// Create an adapter that resolves hash algorithm names through
    /// `resolver` instead of the built-in table.
    pub fn with_resolver(resolver: R) -> Self {
        Self {
            key: None,
            hash_algorithm: None,
            resolver,
        }
    }

    /// Replace the key used by subsequent verifications.
    pub fn set_key(&mut self, key: &'k K) {
        self.key = Some(key);
    }

    /// Select the digest algorithm by name.
    ///
    /// A recognized name is stored in its canonical uppercase form. An
    /// unrecognized name clears the configured algorithm instead of failing
    /// here; the error is deferred to the next [`verify_signature`] call.
    /// This matches the legacy deformatter contract, where names are
    /// validated at the point of use rather than at the point of naming.
    ///
    /// [`verify_signature`]: Self::verify_signature
    pub fn set_hash_algorithm(&mut self, name: &str) {
        self.hash_algorithm = self
            .resolver
            .resolve(name)
            .map(|_| HashAlgorithmName::new(name));
    }

    /// The currently configured canonical algorithm name, if any.
    #[must_use]
    pub fn hash_algorithm(&self) -> Option<&HashAlgorithmName> {
        self.hash_algorithm.as_ref()
    }

    /// Verify `signature` against the prehashed `hash` bytes under the
    /// configured key and algorithm.
    ///
    /// `Ok(false)` means the signature does not match; an [`Error`] means
    /// verification could not be attempted at all. No adapter state changes,
    /// so the call may be repeated freely under the same configuration.
    pub fn verify_signature(&self, hash: &[u8], signature: &[u8]) -> Result<bool, Error>
    where
        K: AsymmetricVerifier,
    {
        if hash.is_empty() {
            return Err(Error::EmptyDigest);
        }
        if signature.is_empty() {
            return Err(Error::EmptySignature);
        }

        let hash_algorithm = self
            .hash_algorithm
            .as_ref()
            .ok_or(Error::MissingHashAlgorithm)?;
        let key = self.key.ok_or(Error::MissingKey)?;

        Ok(key.verify_hash(hash, signature, hash_algorithm, SignaturePadding::Pkcs1))
    }

    /// Hash `data` with `D` and verify `signature` against the digest.
    ///
    /// `D` must match the algorithm previously selected with
    /// [`set_hash_algorithm`]: the configured name, not `D`, is what reaches
    /// the verification backend.
    ///
    /// [`set_hash_algorithm`]: Self::set_hash_algorithm
    pub fn verify_data<D>(&self, data: &[u8], signature: &[u8]) -> Result<bool, Error>
    where
        D: Digest,
        K: AsymmetricVerifier,
    {
        self.verify_signature(D::digest(data).as_slice(), signature)
    }
}
