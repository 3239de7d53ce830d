//! Signature verification for ownership challenges.
//!
//! The registry only sees signatures through [`SignatureVerifier`]. The
//! bundled implementation uses Ed25519: a wallet address is the hex-encoded
//! public key and a signature is the hex-encoded 64-byte Ed25519 signature
//! over the UTF-8 challenge message.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use std::fmt;
use std::sync::Arc;

/// Checks that `signature` authenticates `address` over `message`.
///
/// Implementations must be deterministic and free of side effects.
pub trait SignatureVerifier: Send + Sync {
    fn verify(&self, message: &str, address: &str, signature: &str) -> bool;
}

impl<V: SignatureVerifier + ?Sized> SignatureVerifier for Arc<V> {
    fn verify(&self, message: &str, address: &str, signature: &str) -> bool {
        (**self).verify(message, address, signature)
    }
}

impl<V: SignatureVerifier + ?Sized> SignatureVerifier for &V {
    fn verify(&self, message: &str, address: &str, signature: &str) -> bool {
        (**self).verify(message, address, signature)
    }
}

/// Ed25519 verifier over hex addresses and hex signatures.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Verifier;

impl SignatureVerifier for Ed25519Verifier {
    fn verify(&self, message: &str, address: &str, signature: &str) -> bool {
        let Some(key) = parse_address(address) else {
            return false;
        };
        let Some(sig) = parse_signature(signature) else {
            return false;
        };
        key.verify(message.as_bytes(), &sig).is_ok()
    }
}

fn parse_address(address: &str) -> Option<VerifyingKey> {
    let bytes: [u8; 32] = hex::decode(address).ok()?.try_into().ok()?;
    VerifyingKey::from_bytes(&bytes).ok()
}

fn parse_signature(signature: &str) -> Option<Signature> {
    let bytes: [u8; 64] = hex::decode(signature).ok()?.try_into().ok()?;
    Some(Signature::from_bytes(&bytes))
}

/// A wallet keypair.
///
/// This wraps ed25519-dalek's SigningKey.
#[derive(Clone)]
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Generate a new random keypair.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let signing_key = SigningKey::generate(&mut rng);
        Self { signing_key }
    }

    /// Create from a 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(seed);
        Self { signing_key }
    }

    /// The wallet address (hex public key).
    pub fn address(&self) -> String {
        hex::encode(self.signing_key.verifying_key().to_bytes())
    }

    /// Sign a challenge message, returning the hex signature.
    pub fn sign_message(&self, message: &str) -> String {
        hex::encode(self.signing_key.sign(message.as_bytes()).to_bytes())
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keypair({})", &self.address()[..16])
    }
}
