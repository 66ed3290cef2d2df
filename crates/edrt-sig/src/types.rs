//! Core data types for the signature round trip.

use thiserror::Error;

/// Length in bytes of a key-derivation seed.
pub const SEED_LENGTH: usize = 32;
/// Length in bytes of a verifying (public) key.
pub const PUBLIC_KEY_LENGTH: usize = 32;
/// Length in bytes of a secret key: the seed followed by the embedded public key.
pub const SECRET_KEY_LENGTH: usize = 64;
/// Length in bytes of a detached Ed25519 signature.
pub const SIGNATURE_LENGTH: usize = 64;

/// Errors that can occur while constructing a [`Seed`].
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("seed must be exactly {SEED_LENGTH} bytes, got {0}")]
    InvalidLength(usize),

    #[error("seed is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Fixed-length entropy input from which a key pair is derived.
///
/// The same seed always reproduces bit-identical keys, which is what allows
/// a hard-coded seed to regenerate a known key pair for testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed([u8; SEED_LENGTH]);

impl Seed {
    /// Construct a seed from a byte slice, rejecting any length other than
    /// [`SEED_LENGTH`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SeedError> {
        let array: [u8; SEED_LENGTH] = bytes
            .try_into()
            .map_err(|_| SeedError::InvalidLength(bytes.len()))?;
        Ok(Self(array))
    }

    /// Construct a seed from its hex rendering.
    pub fn from_hex(text: &str) -> Result<Self, SeedError> {
        let bytes = crate::encode::from_hex(text)?;
        Self::from_bytes(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SEED_LENGTH] {
        &self.0
    }
}

/// A 64-byte signature followed by the message it covers.
///
/// This is the combined form produced by signing; verification consumes it
/// and recovers the trailing message bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedMessage(Vec<u8>);

impl SignedMessage {
    /// Wrap raw bytes as a signed message. No validation happens here;
    /// whether the contents check out is decided by verification.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
