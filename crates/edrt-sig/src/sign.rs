//! Message signing.

use crate::keys::KeyPair;
use crate::types::{SignedMessage, SIGNATURE_LENGTH};
use ed25519_dalek::Signer;

/// Sign `message`, producing the combined `signature ‖ message` form.
///
/// Ed25519 signing is deterministic: the same key and message always yield
/// the same signature. The message may be empty.
pub fn sign(keypair: &KeyPair, message: &[u8]) -> SignedMessage {
    let signature = keypair.signing_key().sign(message);
    let mut bytes = Vec::with_capacity(SIGNATURE_LENGTH + message.len());
    bytes.extend_from_slice(&signature.to_bytes());
    bytes.extend_from_slice(message);
    SignedMessage::from_bytes(bytes)
}

/// Sign `message`, returning only the 64-byte detached signature.
pub fn sign_detached(keypair: &KeyPair, message: &[u8]) -> [u8; SIGNATURE_LENGTH] {
    keypair.signing_key().sign(message).to_bytes()
}
