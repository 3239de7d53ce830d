//! # Star Registry
//!
//! An append-only, hash-chained ledger of star records. Before a star is
//! appended, the submitter proves control of a wallet address by signing a
//! time-stamped challenge.
//!
//! ## Overview
//!
//! - **Blocks**: sealed records whose hash covers height, body, time and the
//!   previous block's hash
//! - **Ledger**: one genesis block, then one block per accepted submission
//! - **Challenges**: `address:timestamp:starRegistry`, valid for 300 seconds
//! - **Validation**: recompute every block hash and report the failures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use serde_json::json;
//! use star_registry::StarRegistry;
//! use star_registry::core::Keypair;
//!
//! async fn example() {
//!     let registry = StarRegistry::in_memory();
//!     let wallet = Keypair::generate();
//!     let address = wallet.address();
//!
//!     // Request a challenge and sign it with the wallet
//!     let message = registry.issue_challenge(&address).await.unwrap();
//!     let signature = wallet.sign_message(&message);
//!
//!     // Submit the star
//!     let star = json!({"dec": "-16º 42' 58", "ra": "6h 45m 9s", "story": "Sirius"});
//!     registry
//!         .submit_star(&address, &message, &signature, star)
//!         .await
//!         .unwrap();
//!
//!     let stars = registry.stars_by_address(&address).await.unwrap();
//!     assert_eq!(stars.len(), 1);
//!     assert!(registry.validate_chain().await.unwrap().is_empty());
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `star_registry::core` - Core primitives (BlockRecord, Payload, etc.)
//! - `star_registry::store` - Storage abstraction and the in-memory store

pub mod config;
pub mod error;
pub mod ledger;
pub mod ownership;
pub mod registry;

// Re-export component crates
pub use star_registry_core as core;
pub use star_registry_store as store;

// Re-export main types for convenience
pub use config::{RegistryConfig, DEFAULT_CHALLENGE_WINDOW_SECS};
pub use error::{RegistryError, Result};
pub use ledger::Ledger;
pub use ownership::OwnershipChallenge;
pub use registry::StarRegistry;

// Re-export commonly used core types
pub use star_registry_core::{
    BlockHash, BlockRecord, Clock, Ed25519Verifier, FailureKind, Keypair, ManualClock, Payload,
    SignatureVerifier, StarRecord, SystemClock, ValidationFailure, ValidationMode,
};
pub use star_registry_store::{BlockStore, MemoryStore};
