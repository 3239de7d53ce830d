//! Store trait: the abstract interface for block storage.

use async_trait::async_trait;
use star_registry_core::{BlockHash, BlockRecord};

use crate::error::Result;

/// Result of appending a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertResult {
    /// Block was appended at the tip.
    Inserted,
    /// Block does not extend the current tip.
    Conflict {
        /// The height the next block must have.
        expected_height: u64,
        /// The previous hash the next block must carry.
        expected_previous: Option<BlockHash>,
    },
}

/// The BlockStore trait: async interface for an append-only sequence of blocks.
///
/// Heights are dense and zero-based: the block at height `h` is the
/// `h`-th element in insertion order.
#[async_trait]
pub trait BlockStore: Send + Sync {
    /// Append a block at the tip.
    ///
    /// # Returns
    /// - `Inserted` if `block.height` equals the current length and
    ///   `block.previous_hash` equals the tip's hash (`None` when empty).
    /// - `Conflict` otherwise; nothing is stored.
    async fn append(&self, block: BlockRecord) -> Result<InsertResult>;

    /// Get a block by height.
    async fn get_by_height(&self, height: u64) -> Result<Option<BlockRecord>>;

    /// Get the first block whose stored hash equals `hash`.
    async fn get_by_hash(&self, hash: &BlockHash) -> Result<Option<BlockRecord>>;

    /// Get the most recently appended block.
    async fn tip(&self) -> Result<Option<BlockRecord>>;

    /// Number of stored blocks.
    async fn len(&self) -> Result<u64>;

    /// Check if no block has been stored yet.
    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }

    /// A consistent copy of every block, in height order.
    async fn snapshot(&self) -> Result<Vec<BlockRecord>>;

    /// Replace the block at `block.height` without any checks.
    ///
    /// Fault injection only: lets tests corrupt a stored block to exercise
    /// validation. Returns `false` if no block exists at that height.
    async fn overwrite(&self, block: BlockRecord) -> Result<bool>;
}
