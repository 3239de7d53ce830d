//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::Arc;

use serde_json::Value;

use star_registry::{RegistryConfig, StarRegistry};
use star_registry_core::{BlockRecord, Challenge, Clock, Ed25519Verifier, Keypair, ManualClock};
use star_registry_store::MemoryStore;

/// Start time of every fixture clock (Unix seconds).
pub const T0: i64 = 1_700_000_000;

/// A registry over an in-memory store, driven by a manual clock.
pub struct TestFixture {
    pub clock: Arc<ManualClock>,
    pub registry: StarRegistry<MemoryStore, Ed25519Verifier>,
}

impl TestFixture {
    /// Create a fixture with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a fixture with a custom configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        let clock = Arc::new(ManualClock::new(T0));
        let registry = StarRegistry::new(MemoryStore::new(), Ed25519Verifier, clock.clone(), config);
        Self { clock, registry }
    }

    /// Request a challenge for `wallet` and sign it. Returns `(message, signature)`.
    pub async fn sign_challenge(&self, wallet: &Keypair) -> star_registry::Result<(String, String)> {
        let message = self.registry.issue_challenge(&wallet.address()).await?;
        let signature = wallet.sign_message(&message);
        Ok((message, signature))
    }

    /// Build and sign a challenge stamped `age` seconds before the current clock.
    pub fn signed_challenge_aged(&self, wallet: &Keypair, age: i64) -> (String, String) {
        let issued_at = self.clock.now_secs() - age;
        let message = Challenge::new(
            wallet.address(),
            issued_at,
            self.registry.config().domain_tag.as_str(),
        )
        .to_message();
        let signature = wallet.sign_message(&message);
        (message, signature)
    }

    /// Run the full challenge/sign/submit flow for one star.
    pub async fn submit(&self, wallet: &Keypair, star: Value) -> star_registry::Result<BlockRecord> {
        let (message, signature) = self.sign_challenge(wallet).await?;
        self.registry
            .submit_star(&wallet.address(), &message, &signature, star)
            .await
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic wallets for multi-party tests.
pub fn wallets(count: usize) -> Vec<Keypair> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[0] = i as u8;
            seed[31] = 0x5a;
            Keypair::from_seed(&seed)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stars;

    #[tokio::test]
    async fn test_fixture_submit() {
        let fixture = TestFixture::new();
        let wallet = &wallets(1)[0];

        let block = fixture.submit(wallet, stars::sirius()).await.unwrap();
        assert_eq!(block.height, 1);
        assert_eq!(block.timestamp, T0);
    }

    #[tokio::test]
    async fn test_aged_challenge_carries_age() {
        let fixture = TestFixture::new();
        let wallet = &wallets(1)[0];
        let (message, _) = fixture.signed_challenge_aged(wallet, 42);
        let challenge = Challenge::parse(&message).unwrap();
        assert_eq!(challenge.timestamp, T0 - 42);
        assert_eq!(challenge.address, wallet.address());
    }

    #[test]
    fn test_wallets_unique() {
        let ws = wallets(3);
        assert_ne!(ws[0].address(), ws[1].address());
        assert_ne!(ws[1].address(), ws[2].address());
        assert_ne!(ws[0].address(), ws[2].address());
    }
}
