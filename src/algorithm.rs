//! Hash algorithm names and their registered object identifiers.

use alloc::string::String;
use core::fmt;

use const_oid::ObjectIdentifier;

/// MD5 object identifier as defined by [RFC 8017 Appendix B.1].
///
/// [RFC 8017 Appendix B.1]: https://www.rfc-editor.org/rfc/rfc8017#appendix-B.1
pub const MD5_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.2.5");

/// SHA-1 object identifier as defined by [RFC 8017 Appendix B.1].
///
/// [RFC 8017 Appendix B.1]: https://www.rfc-editor.org/rfc/rfc8017#appendix-B.1
pub const SHA1_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.14.3.2.26");

/// SHA-256 object identifier as defined by [RFC 5912 § 2].
///
/// [RFC 5912 § 2]: https://www.rfc-editor.org/rfc/rfc5912#section-2
pub const SHA256_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.2.1");

/// SHA-384 object identifier as defined by [RFC 5912 § 2].
///
/// [RFC 5912 § 2]: https://www.rfc-editor.org/rfc/rfc5912#section-2
pub const SHA384_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.2.2");

/// SHA-512 object identifier as defined by [RFC 5912 § 2].
///
/// [RFC 5912 § 2]: https://www.rfc-editor.org/rfc/rfc5912#section-2
pub const SHA512_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.2.3");

/// Canonical name of a recognized hash algorithm.
///
/// Values of this type always hold the uppercase ASCII form of a name a
/// [`HashOidResolver`] recognized, e.g. `"SHA256"`. This is the token handed
/// to the verification backend to select the digest algorithm.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct HashAlgorithmName(String);

impl HashAlgorithmName {
    /// Uppercase known names as required by verification backends.
    pub(crate) fn new(name: &str) -> Self {
        Self(name.to_ascii_uppercase())
    }

    /// Borrow the canonical uppercase name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for HashAlgorithmName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for HashAlgorithmName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for HashAlgorithmName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for HashAlgorithmName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Maps textual hash algorithm names to registered object identifiers.
///
/// The verification adapter only acts on the recognized/unrecognized outcome;
/// the identifier itself is returned for callers that need it.
pub trait HashOidResolver {
    /// Returns the object identifier registered for `name`, or `None` when
    /// the name is not recognized.
    fn resolve(&self, name: &str) -> Option<ObjectIdentifier>;
}

impl<T: HashOidResolver + ?Sized> HashOidResolver for &T {
    fn resolve(&self, name: &str) -> Option<ObjectIdentifier> {
        (**self).resolve(name)
    }
}

/// Built-in name table covering the digest algorithms used with PKCS#1 v1.5
/// signatures.
///
/// Matching is ASCII case-insensitive and accepts both the bare (`"SHA256"`)
/// and dashed (`"SHA-256"`) spellings.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct OidRegistry;

impl HashOidResolver for OidRegistry {
    fn resolve(&self, name: &str) -> Option<ObjectIdentifier> {
        const TABLE: &[(&str, ObjectIdentifier)] = &[
            ("MD5", MD5_OID),
            ("SHA1", SHA1_OID),
            ("SHA-1", SHA1_OID),
            ("SHA256", SHA256_OID),
            ("SHA-256", SHA256_OID),
            ("SHA384", SHA384_OID),
            ("SHA-384", SHA384_OID),
            ("SHA512", SHA512_OID),
            ("SHA-512", SHA512_OID),
        ];

        TABLE
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|(_, oid)| *oid)
    }
}
