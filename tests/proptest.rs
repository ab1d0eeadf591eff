//! Property-based tests for name resolution and canonicalization.

use pkcs1v15_verifier::{HashOidResolver, OidRegistry, Pkcs1v15SignatureVerifier};
use proptest::prelude::*;

const RECOGNIZED: &[&str] = &[
    "md5", "sha1", "sha-1", "sha256", "sha-256", "sha384", "sha-384", "sha512", "sha-512",
];

prop_compose! {
    /// A recognized name under an arbitrary mix of upper and lower casing.
    fn recognized_name()(
        base in prop::sample::select(RECOGNIZED),
        flips in prop::collection::vec(any::<bool>(), 7),
    ) -> String {
        base.chars()
            .zip(flips.into_iter().chain(std::iter::repeat(false)))
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect()
    }
}

fn adapter() -> Pkcs1v15SignatureVerifier<'static, ()> {
    Pkcs1v15SignatureVerifier::new()
}

proptest! {
    #[test]
    fn registry_recognition_is_case_insensitive(name in recognized_name()) {
        prop_assert!(OidRegistry.resolve(&name).is_some());
        prop_assert!(OidRegistry.resolve(&name.to_ascii_uppercase()).is_some());
    }

    #[test]
    fn last_write_wins_with_canonical_form(n1 in recognized_name(), n2 in recognized_name()) {
        let mut verifier = adapter();
        verifier.set_hash_algorithm(&n1);
        verifier.set_hash_algorithm(&n2);

        let current = verifier.hash_algorithm().expect("recognized name was cleared");
        prop_assert_eq!(current.as_str(), n2.to_ascii_uppercase());
    }

    #[test]
    fn canonicalization_is_idempotent(name in recognized_name()) {
        let mut verifier = adapter();
        verifier.set_hash_algorithm(&name);
        let first = verifier.hash_algorithm().expect("recognized name was cleared").clone();

        verifier.set_hash_algorithm(first.as_str());
        prop_assert_eq!(verifier.hash_algorithm(), Some(&first));
    }

    #[test]
    fn unrecognized_name_clears_the_algorithm(
        good in recognized_name(),
        bad in "[a-z0-9-]{1,16}",
    ) {
        prop_assume!(
            !RECOGNIZED.iter().any(|known| known.eq_ignore_ascii_case(&bad))
        );

        let mut verifier = adapter();
        verifier.set_hash_algorithm(&good);
        prop_assert!(verifier.hash_algorithm().is_some());

        verifier.set_hash_algorithm(&bad);
        prop_assert!(verifier.hash_algorithm().is_none());
    }
}
