//! Ed25519 signature round-trip primitives.
//!
//! This crate provides the building blocks for a derive → sign → verify
//! round trip: deterministic key-pair derivation from a fixed-length seed,
//! combined and detached Ed25519 signing, verification that recovers the
//! original message, and hex rendering of key material for diagnostics.
//!
//! # Example
//!
//! ```
//! use edrt_sig::{init, open, sign, KeyPair, Seed};
//!
//! init().expect("cryptographic subsystem unusable");
//!
//! let seed = Seed::from_bytes(&[7u8; 32]).unwrap();
//! let pair = KeyPair::derive(&seed);
//!
//! let signed = sign(&pair, b"hello");
//! let recovered = open(&signed, &pair.public_bytes()).unwrap();
//! assert_eq!(recovered, b"hello");
//! ```

mod encode;
mod init;
mod keys;
mod sign;
mod types;
mod verify;

pub use encode::{from_hex, to_hex};
pub use init::{init, InitError};
pub use keys::{KeyError, KeyPair};
pub use sign::{sign, sign_detached};
pub use types::{
    Seed, SeedError, SignedMessage, PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH, SEED_LENGTH,
    SIGNATURE_LENGTH,
};
pub use verify::{open, verify_detached, VerifyError};
