//! Key-pair derivation and generation.

use crate::types::{Seed, PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH, SEED_LENGTH};
use ed25519_dalek::SigningKey;
use thiserror::Error;

/// Errors that can occur while generating a key pair.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("failed to gather key entropy: {0}")]
    Entropy(String),
}

/// Matched Ed25519 signing/verifying key pair.
#[derive(Clone)]
pub struct KeyPair {
    signing: SigningKey,
}

impl KeyPair {
    /// Deterministically derive a key pair from a seed.
    ///
    /// The same seed reproduces bit-identical keys across runs and
    /// platforms (RFC 8032).
    pub fn derive(seed: &Seed) -> Self {
        Self {
            signing: SigningKey::from_bytes(seed.as_bytes()),
        }
    }

    /// Generate a key pair from a fresh OS-entropy seed.
    pub fn generate() -> Result<Self, KeyError> {
        let mut seed_bytes = [0u8; SEED_LENGTH];
        getrandom::fill(&mut seed_bytes).map_err(|err| KeyError::Entropy(err.to_string()))?;
        Ok(Self {
            signing: SigningKey::from_bytes(&seed_bytes),
        })
    }

    /// The 32-byte verifying (public) key.
    pub fn public_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.signing.verifying_key().to_bytes()
    }

    /// The 64-byte secret key: the derivation seed followed by the embedded
    /// public key.
    pub fn secret_bytes(&self) -> [u8; SECRET_KEY_LENGTH] {
        self.signing.to_keypair_bytes()
    }

    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.signing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::to_hex;

    const KNOWN_SEED_HEX: &str =
        "eb6d092894154bdbd66e6369b6d84c981292742c3bd27682dd176ca7a4fbc1a2";
    const KNOWN_PUBLIC_HEX: &str =
        "b30b51c8d1704f9936db039bddc3d75af498b7ff6ce890ceffadbff11528458e";

    #[test]
    fn test_derive_is_deterministic() {
        let seed = Seed::from_bytes(&[42u8; SEED_LENGTH]).unwrap();
        let first = KeyPair::derive(&seed);
        let second = KeyPair::derive(&seed);
        assert_eq!(first.public_bytes(), second.public_bytes());
        assert_eq!(first.secret_bytes(), second.secret_bytes());
    }

    #[test]
    fn test_derive_matches_known_answer() {
        let seed = Seed::from_hex(KNOWN_SEED_HEX).unwrap();
        let pair = KeyPair::derive(&seed);
        assert_eq!(to_hex(&pair.public_bytes()), KNOWN_PUBLIC_HEX);
    }

    #[test]
    fn test_secret_key_is_seed_then_public() {
        let seed = Seed::from_hex(KNOWN_SEED_HEX).unwrap();
        let pair = KeyPair::derive(&seed);
        let secret = pair.secret_bytes();
        assert_eq!(&secret[..SEED_LENGTH], seed.as_bytes());
        assert_eq!(&secret[SEED_LENGTH..], &pair.public_bytes());
    }

    #[test]
    fn test_different_seeds_yield_different_keys() {
        let a = KeyPair::derive(&Seed::from_bytes(&[1u8; SEED_LENGTH]).unwrap());
        let b = KeyPair::derive(&Seed::from_bytes(&[2u8; SEED_LENGTH]).unwrap());
        assert_ne!(a.public_bytes(), b.public_bytes());
    }

    #[test]
    fn test_generate_yields_distinct_pairs() {
        let a = KeyPair::generate().unwrap();
        let b = KeyPair::generate().unwrap();
        assert_ne!(a.public_bytes(), b.public_bytes());
    }
}
