//! Proptest generators for property-based testing.
//!
//! Text generators stay inside `0x20..=0xFF`, the range the body encoding
//! round-trips exactly.

use proptest::prelude::*;
use serde_json::{json, Value};

use star_registry_core::{Keypair, Payload};

/// Generate a random wallet.
pub fn keypair() -> impl Strategy<Value = Keypair> {
    any::<[u8; 32]>().prop_map(|seed| Keypair::from_seed(&seed))
}

/// Generate printable Latin-1 text.
pub fn latin1_text(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(0x20u8..=0xff, 0..=max_len)
        .prop_map(|bytes| bytes.into_iter().map(char::from).collect())
}

/// Generate a star document with Latin-1 coordinates and story.
pub fn latin1_star() -> impl Strategy<Value = Value> {
    (latin1_text(16), latin1_text(16), latin1_text(64))
        .prop_map(|(dec, ra, story)| json!({ "dec": dec, "ra": ra, "story": story }))
}

/// Parameters for a submission payload.
#[derive(Debug, Clone)]
pub struct StarParams {
    pub address: String,
    pub message: String,
    pub signature: String,
    pub star: Value,
}

impl StarParams {
    pub fn into_payload(self) -> Payload {
        Payload::submission(self.address, self.message, self.signature, self.star)
    }
}

impl Arbitrary for StarParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            "[0-9a-f]{64}",
            0i64..=4_000_000_000i64,
            "[0-9a-f]{128}",
            latin1_star(),
        )
            .prop_map(|(address, ts, signature, star)| StarParams {
                message: format!("{address}:{ts}:starRegistry"),
                address,
                signature,
                star,
            })
            .boxed()
    }
}
