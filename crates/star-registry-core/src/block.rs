//! Block: the sealed unit of the ledger.
//!
//! A block carries an encoded payload plus its chain linkage, and a hash
//! computed over exactly four fields: height, body, timestamp and previous
//! hash. The stored hash is never an input to its own computation.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::payload::Payload;
use crate::types::BlockHash;

/// Domain separator prefixed to every block hash input.
const BLOCK_DOMAIN: &[u8] = b"star-registry-block-v0:";

/// One record of the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRecord {
    /// Blake3 over the four canonical fields.
    pub hash: BlockHash,

    /// Index of this block in the ledger (0 for genesis).
    pub height: u64,

    /// Hex-rendered payload text, see [`crate::codec`].
    pub body: String,

    /// Append time (Unix seconds).
    #[serde(rename = "time")]
    pub timestamp: i64,

    /// Hash of the preceding block (None for genesis).
    #[serde(rename = "previousBlockHash")]
    pub previous_hash: Option<BlockHash>,
}

impl BlockRecord {
    /// Build a block and compute its hash.
    pub fn seal(
        height: u64,
        body: String,
        timestamp: i64,
        previous_hash: Option<BlockHash>,
    ) -> Self {
        let hash = hash_fields(height, &body, timestamp, previous_hash.as_ref());
        Self {
            hash,
            height,
            body,
            timestamp,
            previous_hash,
        }
    }

    /// Recompute this block's hash from its fields.
    pub fn compute_hash(&self) -> BlockHash {
        hash_block(self)
    }

    /// Check the stored hash against the recomputed one.
    pub fn is_valid(&self) -> bool {
        validate_block(self)
    }

    /// Decode the payload held in the body.
    pub fn payload(&self) -> Result<Payload> {
        Payload::decode(&self.body)
    }

    /// Check if this is the first block of a ledger.
    pub fn is_genesis(&self) -> bool {
        self.height == 0 && self.previous_hash.is_none()
    }
}

/// Hash a block's four canonical fields. Ignores `block.hash`.
pub fn hash_block(block: &BlockRecord) -> BlockHash {
    hash_fields(
        block.height,
        &block.body,
        block.timestamp,
        block.previous_hash.as_ref(),
    )
}

/// Compare the stored hash against the recomputed one.
pub fn validate_block(block: &BlockRecord) -> bool {
    hash_block(block) == block.hash
}

fn hash_fields(
    height: u64,
    body: &str,
    timestamp: i64,
    previous_hash: Option<&BlockHash>,
) -> BlockHash {
    let mut hasher = blake3::Hasher::new();
    hasher.update(BLOCK_DOMAIN);
    hasher.update(&height.to_be_bytes());
    hasher.update(&(body.len() as u64).to_be_bytes());
    hasher.update(body.as_bytes());
    hasher.update(&timestamp.to_be_bytes());
    match previous_hash {
        Some(prev) => {
            hasher.update(&[1]);
            hasher.update(prev.as_bytes());
        }
        None => {
            hasher.update(&[0]);
        }
    }
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn genesis() -> BlockRecord {
        let body = Payload::genesis().encode().unwrap();
        BlockRecord::seal(0, body, 1_700_000_000, None)
    }

    #[test]
    fn test_sealed_block_is_valid() {
        let block = genesis();
        assert!(block.is_valid());
        assert!(block.is_genesis());
        assert_eq!(block.hash.to_hex().len(), 64);
    }

    #[test]
    fn test_hash_ignores_stored_hash() {
        let mut block = genesis();
        let before = block.compute_hash();
        block.hash = BlockHash::from_bytes([0x12; 32]);
        assert_eq!(block.compute_hash(), before);
        assert!(!block.is_valid());
    }

    #[test]
    fn test_each_field_changes_hash() {
        let block = genesis();
        let original = block.compute_hash();

        let mut b = block.clone();
        b.height = 1;
        assert_ne!(b.compute_hash(), original);

        let mut b = block.clone();
        b.body.push('0');
        assert_ne!(b.compute_hash(), original);

        let mut b = block.clone();
        b.timestamp += 1;
        assert_ne!(b.compute_hash(), original);

        let mut b = block;
        b.previous_hash = Some(BlockHash::from_bytes([0; 32]));
        assert_ne!(b.compute_hash(), original);
    }

    #[test]
    fn test_json_field_names() {
        let value = serde_json::to_value(genesis()).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj["previousBlockHash"].is_null());
        assert_eq!(obj["time"], 1_700_000_000);
        assert_eq!(obj["height"], 0);
        assert!(obj["hash"].is_string());
        assert!(obj["body"].is_string());
    }

    #[test]
    fn test_payload_accessor() {
        assert_eq!(genesis().payload().unwrap(), Payload::genesis());
    }

    proptest! {
        #[test]
        fn test_hash_deterministic(
            height in any::<u64>(),
            body in "[0-9a-f]{0,128}",
            timestamp in 0i64..=4_000_000_000,
            prev in any::<Option<[u8; 32]>>(),
            junk in any::<[u8; 32]>(),
        ) {
            let prev = prev.map(BlockHash::from_bytes);
            let mut block = BlockRecord::seal(height, body, timestamp, prev);
            let first = hash_block(&block);
            prop_assert_eq!(hash_block(&block), first);

            block.hash = BlockHash::from_bytes(junk);
            prop_assert_eq!(hash_block(&block), first);
        }
    }
}
