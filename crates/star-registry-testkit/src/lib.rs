//! # Star Registry Testkit
//!
//! Testing utilities for the Star Registry.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: a registry over an in-memory store with a manual clock,
//!   plus deterministic wallets
//! - **Generators**: Proptest strategies for stars and payloads
//! - **Stars**: the sample star documents used across tests
//!
//! ## Test Fixtures
//!
//! ```rust,no_run
//! use star_registry_testkit::{stars, wallets, TestFixture};
//!
//! async fn example() {
//!     let fixture = TestFixture::new();
//!     let alice = &wallets(1)[0];
//!     let block = fixture.submit(alice, stars::sirius()).await.unwrap();
//!     assert_eq!(block.height, 1);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use star_registry_testkit::generators::latin1_star;
//!
//! proptest! {
//!     #[test]
//!     fn star_survives_encoding(star in latin1_star()) {
//!         let body = star_registry_core::encode(&star).unwrap();
//!         prop_assert_eq!(star_registry_core::decode::<serde_json::Value>(&body).unwrap(), star);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod stars;

pub use fixtures::{wallets, TestFixture, T0};
pub use generators::{latin1_star, latin1_text, StarParams};
