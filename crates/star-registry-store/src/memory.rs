//! In-memory implementation of the BlockStore trait.
//!
//! The ledger is memory-resident for the lifetime of the process, so this is
//! the production backend as well as the one used in tests.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::{debug, warn};

use star_registry_core::{BlockHash, BlockRecord};

use crate::error::{Result, StoreError};
use crate::traits::{BlockStore, InsertResult};

/// In-memory block store.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock:
/// readers run concurrently, an append holds the write lock for the push.
#[derive(Default)]
pub struct MemoryStore {
    blocks: RwLock<Vec<BlockRecord>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<BlockRecord>>> {
        self.blocks.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<BlockRecord>>> {
        self.blocks.write().map_err(|_| StoreError::LockPoisoned)
    }
}

#[async_trait]
impl BlockStore for MemoryStore {
    async fn append(&self, block: BlockRecord) -> Result<InsertResult> {
        let mut blocks = self.write()?;

        let expected_height = blocks.len() as u64;
        let expected_previous = blocks.last().map(|b| b.hash);

        if block.height != expected_height || block.previous_hash != expected_previous {
            warn!(
                height = block.height,
                expected_height, "rejected block that does not extend the tip"
            );
            return Ok(InsertResult::Conflict {
                expected_height,
                expected_previous,
            });
        }

        blocks.push(block);
        Ok(InsertResult::Inserted)
    }

    async fn get_by_height(&self, height: u64) -> Result<Option<BlockRecord>> {
        let blocks = self.read()?;
        let block = usize::try_from(height)
            .ok()
            .and_then(|i| blocks.get(i))
            .cloned();
        Ok(block)
    }

    async fn get_by_hash(&self, hash: &BlockHash) -> Result<Option<BlockRecord>> {
        let blocks = self.read()?;
        Ok(blocks.iter().find(|b| &b.hash == hash).cloned())
    }

    async fn tip(&self) -> Result<Option<BlockRecord>> {
        let blocks = self.read()?;
        Ok(blocks.last().cloned())
    }

    async fn len(&self) -> Result<u64> {
        let blocks = self.read()?;
        Ok(blocks.len() as u64)
    }

    async fn snapshot(&self) -> Result<Vec<BlockRecord>> {
        let blocks = self.read()?;
        Ok(blocks.clone())
    }

    async fn overwrite(&self, block: BlockRecord) -> Result<bool> {
        let mut blocks = self.write()?;
        let Some(slot) = usize::try_from(block.height)
            .ok()
            .and_then(|i| blocks.get_mut(i))
        else {
            return Ok(false);
        };

        debug!(height = block.height, "overwriting stored block");
        *slot = block;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn next_block(store_tip: Option<&BlockRecord>, body: &str) -> BlockRecord {
        let height = store_tip.map(|b| b.height + 1).unwrap_or(0);
        BlockRecord::seal(height, body.into(), 1_700_000_000, store_tip.map(|b| b.hash))
    }

    #[tokio::test]
    async fn test_memory_store_basic() {
        let store = MemoryStore::new();
        assert!(store.is_empty().await.unwrap());

        let genesis = next_block(None, "00");
        assert_eq!(store.append(genesis.clone()).await.unwrap(), InsertResult::Inserted);

        let second = next_block(Some(&genesis), "01");
        assert_eq!(store.append(second.clone()).await.unwrap(), InsertResult::Inserted);

        assert_eq!(store.len().await.unwrap(), 2);
        assert_eq!(store.tip().await.unwrap(), Some(second.clone()));
        assert_eq!(store.get_by_height(0).await.unwrap(), Some(genesis));
        assert_eq!(store.get_by_hash(&second.hash).await.unwrap(), Some(second));
        assert_eq!(store.get_by_height(2).await.unwrap(), None);
        assert_eq!(store.get_by_height(u64::MAX).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_store_rejects_non_tip_blocks() {
        let store = MemoryStore::new();
        let genesis = next_block(None, "00");
        store.append(genesis.clone()).await.unwrap();

        // Same height again
        let result = store.append(next_block(None, "ff")).await.unwrap();
        assert_eq!(
            result,
            InsertResult::Conflict {
                expected_height: 1,
                expected_previous: Some(genesis.hash),
            }
        );

        // Right height, wrong link
        let stray = BlockRecord::seal(1, "01".into(), 1, Some(BlockHash::from_bytes([9; 32])));
        assert!(matches!(
            store.append(stray).await.unwrap(),
            InsertResult::Conflict { .. }
        ));

        assert_eq!(store.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_memory_store_overwrite() {
        let store = MemoryStore::new();
        let genesis = next_block(None, "00");
        store.append(genesis.clone()).await.unwrap();

        let mut tampered = genesis.clone();
        tampered.hash = BlockHash::from_bytes([0x12; 32]);
        assert!(store.overwrite(tampered.clone()).await.unwrap());
        assert_eq!(store.get_by_height(0).await.unwrap(), Some(tampered));
        assert_eq!(store.get_by_hash(&genesis.hash).await.unwrap(), None);

        let mut missing = genesis;
        missing.height = 7;
        assert!(!store.overwrite(missing).await.unwrap());
    }
}
