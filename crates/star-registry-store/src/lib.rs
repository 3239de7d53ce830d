//! # Star Registry Store
//!
//! Storage abstraction for the Star Registry ledger. Blocks live behind the
//! [`BlockStore`] trait so the ledger logic does not care where they are kept.
//!
//! ## Key Types
//!
//! - [`BlockStore`] - The async trait for all block storage operations
//! - [`MemoryStore`] - Process-lifetime in-memory storage
//! - [`InsertResult`] - Outcome of appending a block
//!
//! ## Design Notes
//!
//! - **Tip-checked appends**: a block is only accepted if it extends the
//!   current tip (next height, linked to the tip's hash). Anything else is
//!   reported as `Conflict`, not stored.
//! - **Atomic visibility**: readers see a block either fully present or absent.
//! - **No persistence**: restarting the process loses every block.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use traits::{BlockStore, InsertResult};
