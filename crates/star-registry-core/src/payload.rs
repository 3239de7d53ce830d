//! Payloads: the documents stored inside block bodies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec;
use crate::error::Result;

/// The placeholder text stored in the genesis block.
pub const GENESIS_DATA: &str = "Genesis Block";

/// Body of the genesis block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenesisPayload {
    pub data: String,
}

impl Default for GenesisPayload {
    fn default() -> Self {
        Self {
            data: GENESIS_DATA.to_string(),
        }
    }
}

/// A verified star submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Submission {
    /// Wallet address that signed the challenge.
    pub address: String,
    /// The challenge message that was signed.
    pub message: String,
    /// Signature over `message`, as supplied by the wallet.
    pub signature: String,
    /// Caller-supplied star document. Never interpreted by the ledger.
    pub star: Value,
}

/// The document held by a block.
///
/// Serialized without a tag so each variant keeps exactly its own fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    Submission(Submission),
    Genesis(GenesisPayload),
}

impl Payload {
    /// The fixed genesis payload.
    pub fn genesis() -> Self {
        Payload::Genesis(GenesisPayload::default())
    }

    /// Build a submission payload.
    pub fn submission(
        address: impl Into<String>,
        message: impl Into<String>,
        signature: impl Into<String>,
        star: Value,
    ) -> Self {
        Payload::Submission(Submission {
            address: address.into(),
            message: message.into(),
            signature: signature.into(),
            star,
        })
    }

    /// Encode into a block body.
    pub fn encode(&self) -> Result<String> {
        codec::encode(self)
    }

    /// Decode from a block body.
    pub fn decode(body: &str) -> Result<Self> {
        codec::decode(body)
    }

    /// The owning address, if this is a submission.
    pub fn address(&self) -> Option<&str> {
        match self {
            Payload::Submission(s) => Some(&s.address),
            Payload::Genesis(_) => None,
        }
    }

    /// Project a submission into the record returned by owner queries.
    pub fn into_star_record(self) -> Option<StarRecord> {
        match self {
            Payload::Submission(s) => Some(StarRecord {
                owner: s.address,
                star: s.star,
            }),
            Payload::Genesis(_) => None,
        }
    }
}

/// A star as seen by its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarRecord {
    pub owner: String,
    pub star: Value,
}
