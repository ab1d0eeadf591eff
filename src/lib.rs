#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]
#![doc = include_str!("../README.md")]

extern crate alloc;

pub use const_oid;
pub use const_oid::ObjectIdentifier;

pub use crate::{
    algorithm::{
        HashAlgorithmName, HashOidResolver, MD5_OID, OidRegistry, SHA1_OID, SHA256_OID, SHA384_OID,
        SHA512_OID,
    },
    error::Error,
    verify::{AsymmetricVerifier, Pkcs1v15SignatureVerifier, SignaturePadding},
};

mod algorithm;
mod error;
mod verify;
