//! The Ledger: an append-only, hash-chained sequence of blocks.
//!
//! The ledger owns the writer side of its store. Genesis creation and every
//! append run under one writer lock, so height assignment and previous-hash
//! linkage always see the same tip. Genesis is created exactly once, on first
//! use, behind a one-time barrier that concurrent callers all await.

use std::sync::Arc;

use tokio::sync::{Mutex, OnceCell};
use tracing::{debug, info, warn};

use star_registry_core::{
    validate_chain, BlockHash, BlockRecord, Clock, Payload, StarRecord, ValidationFailure,
    ValidationMode,
};
use star_registry_store::{BlockStore, InsertResult};

use crate::error::{RegistryError, Result};

/// An append-only ledger over a [`BlockStore`].
pub struct Ledger<S: BlockStore> {
    store: S,
    clock: Arc<dyn Clock>,
    /// Set once the genesis block exists. The block itself lives only in the store.
    genesis: OnceCell<()>,
    /// Serializes genesis creation, appends and tampering.
    writer: Mutex<()>,
}

impl<S: BlockStore> Ledger<S> {
    /// Create a ledger. No block is written until first use.
    pub fn new(store: S, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            genesis: OnceCell::new(),
            writer: Mutex::new(()),
        }
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Write Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Create the genesis block if it does not exist yet.
    ///
    /// Idempotent. Concurrent first callers all wait for the same creation.
    /// A store that already holds a block at height 0 is adopted as is.
    pub async fn initialize(&self) -> Result<()> {
        self.genesis
            .get_or_try_init(|| self.create_genesis())
            .await
            .map(|_| ())
    }

    async fn create_genesis(&self) -> Result<()> {
        let _writer = self.writer.lock().await;

        if let Some(existing) = self.store.get_by_height(0).await? {
            debug!(hash = %existing.hash, "adopting existing genesis block");
            return Ok(());
        }

        let body = Payload::genesis().encode()?;
        let block = BlockRecord::seal(0, body, self.clock.now_secs(), None);
        self.insert(block).await.map(|_| ())
    }

    /// Append a payload as a new block at the tip.
    pub async fn append(&self, payload: &Payload) -> Result<BlockRecord> {
        self.initialize().await?;
        let body = payload.encode()?;

        let _writer = self.writer.lock().await;
        let height = self.store.len().await?;
        let previous_hash = self.store.tip().await?.map(|tip| tip.hash);
        let block = BlockRecord::seal(height, body, self.clock.now_secs(), previous_hash);
        self.insert(block).await
    }

    async fn insert(&self, block: BlockRecord) -> Result<BlockRecord> {
        match self.store.append(block.clone()).await? {
            InsertResult::Inserted => {
                info!(height = block.height, hash = %block.hash, "block appended");
                Ok(block)
            }
            InsertResult::Conflict {
                expected_height, ..
            } => Err(RegistryError::Conflict { expected_height }),
        }
    }

    /// Mutate a stored block in place, without resealing it.
    ///
    /// Fault injection for exercising validation. Returns `false` if there is
    /// no block at `height`.
    pub async fn tamper<F>(&self, height: u64, f: F) -> Result<bool>
    where
        F: FnOnce(&mut BlockRecord) + Send,
    {
        self.initialize().await?;

        let _writer = self.writer.lock().await;
        let Some(mut block) = self.store.get_by_height(height).await? else {
            return Ok(false);
        };
        f(&mut block);
        block.height = height;
        warn!(height, "tampering with stored block");
        Ok(self.store.overwrite(block).await?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Number of blocks, genesis included.
    pub async fn height(&self) -> Result<u64> {
        self.initialize().await?;
        Ok(self.store.len().await?)
    }

    /// Get a block by height. Out of range is `None`.
    pub async fn get_by_height(&self, height: u64) -> Result<Option<BlockRecord>> {
        self.initialize().await?;
        Ok(self.store.get_by_height(height).await?)
    }

    /// Get a block by its stored hash.
    pub async fn get_by_hash(&self, hash: &BlockHash) -> Result<Option<BlockRecord>> {
        self.initialize().await?;
        Ok(self.store.get_by_hash(hash).await?)
    }

    /// A consistent copy of the whole chain.
    pub async fn blocks(&self) -> Result<Vec<BlockRecord>> {
        self.initialize().await?;
        Ok(self.store.snapshot().await?)
    }

    /// Every star submitted by `address`, in append order.
    pub async fn stars_by_owner(&self, address: &str) -> Result<Vec<StarRecord>> {
        let mut stars = Vec::new();
        for block in self.blocks().await? {
            let payload = block.payload()?;
            if payload.address() == Some(address) {
                stars.extend(payload.into_star_record());
            }
        }
        debug!(address, count = stars.len(), "stars by owner");
        Ok(stars)
    }

    /// Validate the chain, returning every failure found.
    pub async fn validate(&self, mode: ValidationMode) -> Result<Vec<ValidationFailure>> {
        let blocks = self.blocks().await?;
        let failures = validate_chain(&blocks, mode);
        for failure in &failures {
            warn!(height = failure.height, kind = ?failure.kind, "chain validation failure");
        }
        Ok(failures)
    }
}
