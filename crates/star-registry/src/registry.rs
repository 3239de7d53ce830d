//! The StarRegistry: unified API for the star registry.
//!
//! Brings the ledger and ownership challenges together behind the six
//! operations a transport layer exposes. Every operation waits for the
//! genesis block before doing anything else.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use star_registry_core::{
    BlockHash, BlockRecord, Clock, Ed25519Verifier, SignatureVerifier, StarRecord, SystemClock,
    ValidationFailure,
};
use star_registry_store::{BlockStore, MemoryStore};

use crate::config::RegistryConfig;
use crate::error::Result;
use crate::ledger::Ledger;
use crate::ownership::OwnershipChallenge;

/// The main registry struct.
///
/// Provides a unified API for:
/// - Issuing ownership challenges
/// - Submitting stars
/// - Querying blocks and stars
/// - Validating the chain
pub struct StarRegistry<S: BlockStore, V: SignatureVerifier> {
    ledger: Ledger<S>,
    ownership: OwnershipChallenge<V>,
    config: RegistryConfig,
}

impl StarRegistry<MemoryStore, Ed25519Verifier> {
    /// In-memory registry with Ed25519 wallets, wall-clock time and default config.
    pub fn in_memory() -> Self {
        Self::new(
            MemoryStore::new(),
            Ed25519Verifier,
            Arc::new(SystemClock),
            RegistryConfig::default(),
        )
    }
}

impl<S: BlockStore, V: SignatureVerifier> StarRegistry<S, V> {
    /// Create a new registry instance.
    pub fn new(store: S, verifier: V, clock: Arc<dyn Clock>, config: RegistryConfig) -> Self {
        Self {
            ledger: Ledger::new(store, Arc::clone(&clock)),
            ownership: OwnershipChallenge::new(verifier, clock, &config),
            config,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Get the underlying ledger (also the fault-injection entry point).
    pub fn ledger(&self) -> &Ledger<S> {
        &self.ledger
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Submission Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Issue a challenge message for `address` to sign.
    pub async fn issue_challenge(&self, address: &str) -> Result<String> {
        self.ledger.initialize().await?;
        Ok(self.ownership.issue(address))
    }

    /// Submit a star signed through a previously issued challenge.
    pub async fn submit_star(
        &self,
        address: &str,
        message: &str,
        signature: &str,
        star: Value,
    ) -> Result<BlockRecord> {
        self.ledger.initialize().await?;
        self.ownership
            .submit(&self.ledger, address, message, signature, star)
            .await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Number of blocks in the chain, genesis included.
    pub async fn chain_height(&self) -> Result<u64> {
        self.ledger.height().await
    }

    /// Get a block by height.
    pub async fn block_by_height(&self, height: u64) -> Result<Option<BlockRecord>> {
        self.ledger.get_by_height(height).await
    }

    /// Get a block by hash.
    pub async fn block_by_hash(&self, hash: &BlockHash) -> Result<Option<BlockRecord>> {
        self.ledger.get_by_hash(hash).await
    }

    /// Get a block by hex hash. Text that is not a 32-byte hex hash finds nothing.
    pub async fn block_by_hash_hex(&self, hash: &str) -> Result<Option<BlockRecord>> {
        match BlockHash::from_hex(hash) {
            Ok(hash) => self.block_by_hash(&hash).await,
            Err(e) => {
                debug!(hash, error = %e, "lookup with unparseable hash");
                self.ledger.initialize().await?;
                Ok(None)
            }
        }
    }

    /// All stars owned by `address`, in submission order.
    pub async fn stars_by_address(&self, address: &str) -> Result<Vec<StarRecord>> {
        self.ledger.stars_by_owner(address).await
    }

    /// Validate the chain using the configured mode.
    pub async fn validate_chain(&self) -> Result<Vec<ValidationFailure>> {
        self.ledger.validate(self.config.validation_mode).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use star_registry_core::Keypair;

    #[tokio::test]
    async fn test_in_memory_roundtrip() {
        let registry = StarRegistry::in_memory();
        let wallet = Keypair::generate();
        let address = wallet.address();

        let message = registry.issue_challenge(&address).await.unwrap();
        let signature = wallet.sign_message(&message);
        let block = registry
            .submit_star(&address, &message, &signature, json!({"story": "Sirius"}))
            .await
            .unwrap();

        assert_eq!(registry.chain_height().await.unwrap(), 2);
        assert_eq!(
            registry.block_by_hash_hex(&block.hash.to_hex()).await.unwrap(),
            Some(block)
        );
        assert!(registry.validate_chain().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_hash_finds_nothing() {
        let registry = StarRegistry::in_memory();
        assert_eq!(registry.block_by_hash_hex("12345").await.unwrap(), None);
        assert_eq!(registry.chain_height().await.unwrap(), 1);
    }
}
