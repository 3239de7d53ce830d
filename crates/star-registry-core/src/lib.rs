//! # Star Registry Core
//!
//! Pure primitives for the Star Registry: blocks, payloads, ownership
//! challenges and chain validation.
//!
//! This crate contains no I/O, no storage, no locking. It is pure computation
//! over the ledger's data structures.
//!
//! ## Key Types
//!
//! - [`BlockRecord`] - One sealed unit of the ledger
//! - [`BlockHash`] - Blake3 digest identifying a block
//! - [`Payload`] - The document stored inside a block body
//! - [`Challenge`] - The `address:timestamp:tag` message a wallet signs
//! - [`SignatureVerifier`] - Seam to the signature primitive
//!
//! ## Body Encoding
//!
//! Payloads are stored as hex-rendered character codes of their JSON text.
//! See the [`codec`] module.

pub mod block;
pub mod challenge;
pub mod clock;
pub mod codec;
pub mod crypto;
pub mod error;
pub mod payload;
pub mod types;
pub mod validation;

pub use block::{hash_block, validate_block, BlockRecord};
pub use challenge::{Challenge, DEFAULT_DOMAIN_TAG};
pub use clock::{Clock, ManualClock, SystemClock};
pub use codec::{decode, encode};
pub use crypto::{Ed25519Verifier, Keypair, SignatureVerifier};
pub use error::{CoreError, Result};
pub use payload::{GenesisPayload, Payload, StarRecord, Submission, GENESIS_DATA};
pub use types::BlockHash;
pub use validation::{validate_chain, FailureKind, ValidationFailure, ValidationMode};
