//! Chain validation.
//!
//! Validation walks the chain in height order and reports every block that
//! fails. Failures are returned as data, never raised.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::block::{validate_block, BlockRecord};

/// How much of the chain structure to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValidationMode {
    /// Recompute each block's own hash only.
    #[default]
    PerBlock,
    /// Also check every `previous_hash` against the preceding block's stored hash.
    WithLinks,
}

/// Why a block failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    /// Stored hash differs from the recomputed one.
    HashMismatch,
    /// `previous_hash` does not point at the preceding block.
    LinkMismatch,
}

/// A block that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    pub height: u64,
    pub kind: FailureKind,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FailureKind::HashMismatch => write!(f, "Block at height {} is invalid", self.height),
            FailureKind::LinkMismatch => write!(
                f,
                "Block at height {} does not link to its predecessor",
                self.height
            ),
        }
    }
}

/// Validate a chain, returning one entry per failing check.
///
/// An empty result means the chain is consistent under `mode`. A block can
/// appear twice if it fails both its hash and its link.
pub fn validate_chain(blocks: &[BlockRecord], mode: ValidationMode) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();

    for (i, block) in blocks.iter().enumerate() {
        if !validate_block(block) {
            failures.push(ValidationFailure {
                height: block.height,
                kind: FailureKind::HashMismatch,
            });
        }

        if mode == ValidationMode::WithLinks {
            let expected = i.checked_sub(1).map(|prev| blocks[prev].hash);
            if block.previous_hash != expected {
                failures.push(ValidationFailure {
                    height: block.height,
                    kind: FailureKind::LinkMismatch,
                });
            }
        }
    }

    failures
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BlockHash;

    fn make_chain(len: u64) -> Vec<BlockRecord> {
        let mut blocks: Vec<BlockRecord> = Vec::new();
        for height in 0..len {
            let prev = blocks.last().map(|b| b.hash);
            blocks.push(BlockRecord::seal(
                height,
                format!("{:x}", height + 0x30),
                1_700_000_000 + height as i64,
                prev,
            ));
        }
        blocks
    }

    #[test]
    fn test_clean_chain() {
        let chain = make_chain(4);
        assert!(validate_chain(&chain, ValidationMode::PerBlock).is_empty());
        assert!(validate_chain(&chain, ValidationMode::WithLinks).is_empty());
    }

    #[test]
    fn test_tampered_hash_reported_at_its_height() {
        let mut chain = make_chain(4);
        chain[1].hash = BlockHash::from_bytes([0x12; 32]);

        let failures = validate_chain(&chain, ValidationMode::PerBlock);
        assert_eq!(
            failures,
            vec![ValidationFailure {
                height: 1,
                kind: FailureKind::HashMismatch
            }]
        );
        assert_eq!(failures[0].to_string(), "Block at height 1 is invalid");
    }

    #[test]
    fn test_tampered_hash_breaks_next_link() {
        let mut chain = make_chain(4);
        chain[1].hash = BlockHash::from_bytes([0x12; 32]);

        let failures = validate_chain(&chain, ValidationMode::WithLinks);
        assert_eq!(
            failures,
            vec![
                ValidationFailure {
                    height: 1,
                    kind: FailureKind::HashMismatch
                },
                ValidationFailure {
                    height: 2,
                    kind: FailureKind::LinkMismatch
                },
            ]
        );
    }

    #[test]
    fn test_resealed_block_passes_per_block_only() {
        let mut chain = make_chain(3);
        let b = &chain[1];
        chain[1] = BlockRecord::seal(b.height, "7a".into(), b.timestamp, b.previous_hash);

        assert!(validate_chain(&chain, ValidationMode::PerBlock).is_empty());
        let failures = validate_chain(&chain, ValidationMode::WithLinks);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].height, 2);
        assert_eq!(failures[0].kind, FailureKind::LinkMismatch);
    }

    #[test]
    fn test_genesis_with_previous_hash() {
        let chain = vec![BlockRecord::seal(
            0,
            String::new(),
            1,
            Some(BlockHash::from_bytes([1; 32])),
        )];
        assert!(validate_chain(&chain, ValidationMode::PerBlock).is_empty());
        assert_eq!(validate_chain(&chain, ValidationMode::WithLinks).len(), 1);
    }
}
