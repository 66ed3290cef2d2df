//! Signature verification.

use crate::types::{SignedMessage, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};
use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use thiserror::Error;

/// Verification failed.
///
/// Carries no detail on purpose: a wrong key, a tampered message, a tampered
/// signature, and a truncated input are indistinguishable to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid signature")]
pub struct VerifyError;

/// Check a combined signed message against `public_key` and recover the
/// original message on success.
pub fn open(
    signed: &SignedMessage,
    public_key: &[u8; PUBLIC_KEY_LENGTH],
) -> Result<Vec<u8>, VerifyError> {
    let bytes = signed.as_bytes();
    if bytes.len() < SIGNATURE_LENGTH {
        return Err(VerifyError);
    }

    let (signature_bytes, message) = bytes.split_at(SIGNATURE_LENGTH);
    let mut signature = [0u8; SIGNATURE_LENGTH];
    signature.copy_from_slice(signature_bytes);

    if verify_detached(&signature, message, public_key) {
        Ok(message.to_vec())
    } else {
        Err(VerifyError)
    }
}

/// Check a detached signature over `message` against `public_key`.
pub fn verify_detached(
    signature: &[u8; SIGNATURE_LENGTH],
    message: &[u8],
    public_key: &[u8; PUBLIC_KEY_LENGTH],
) -> bool {
    let verifying_key = match VerifyingKey::from_bytes(public_key) {
        Ok(key) => key,
        Err(_) => return false,
    };

    let signature = Signature::from_bytes(signature);
    verifying_key.verify(message, &signature).is_ok()
}
