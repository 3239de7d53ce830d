//! Ownership challenges: prove control of a wallet before appending.
//!
//! The registry hands out `address:timestamp:tag` messages. A submission is
//! accepted only if its message is fresh (at most `challenge_window_secs`
//! old, inclusive) and the signature authenticates the address over it. A
//! message whose timestamp cannot be read counts as issued at the epoch.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use star_registry_core::{BlockRecord, Challenge, Clock, CoreError, Payload, SignatureVerifier};
use star_registry_store::BlockStore;

use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::ledger::Ledger;

/// Issues challenges and gates submissions on them.
pub struct OwnershipChallenge<V: SignatureVerifier> {
    verifier: V,
    clock: Arc<dyn Clock>,
    window_secs: i64,
    domain_tag: String,
    require_domain_tag: bool,
}

impl<V: SignatureVerifier> OwnershipChallenge<V> {
    pub fn new(verifier: V, clock: Arc<dyn Clock>, config: &RegistryConfig) -> Self {
        Self {
            verifier,
            clock,
            window_secs: config.challenge_window_secs,
            domain_tag: config.domain_tag.clone(),
            require_domain_tag: config.require_domain_tag,
        }
    }

    /// Issue a challenge message for `address`, stamped with the current time.
    pub fn issue(&self, address: &str) -> String {
        let message = Challenge::new(address, self.clock.now_secs(), &self.domain_tag).to_message();
        debug!(address, %message, "issued ownership challenge");
        message
    }

    /// Check freshness, then the signature.
    ///
    /// With `require_domain_tag` set, the message must also parse and carry
    /// the configured tag.
    pub fn authorize(&self, address: &str, message: &str, signature: &str) -> Result<()> {
        if self.require_domain_tag {
            self.check_tag(message)?;
        }

        let elapsed = self
            .clock
            .now_secs()
            .saturating_sub(Challenge::issued_at(message));
        if elapsed > self.window_secs {
            warn!(address, elapsed, window = self.window_secs, "stale challenge");
            return Err(RegistryError::TimeWindowExceeded {
                elapsed,
                window: self.window_secs,
            });
        }

        if !self.verifier.verify(message, address, signature) {
            warn!(address, "signature rejected");
            return Err(RegistryError::SignatureInvalid {
                address: address.to_string(),
            });
        }

        Ok(())
    }

    fn check_tag(&self, message: &str) -> Result<()> {
        let challenge = Challenge::parse(message).map_err(|e| match e {
            CoreError::MalformedChallenge(msg) => RegistryError::MalformedChallenge(msg),
            other => RegistryError::Core(other),
        })?;

        if challenge.tag != self.domain_tag {
            warn!(tag = %challenge.tag, "foreign challenge tag");
            return Err(RegistryError::MalformedChallenge(format!(
                "unexpected tag {:?}",
                challenge.tag
            )));
        }
        Ok(())
    }

    /// Authorize a submission and append it to `ledger`.
    pub async fn submit<S: BlockStore>(
        &self,
        ledger: &Ledger<S>,
        address: &str,
        message: &str,
        signature: &str,
        star: Value,
    ) -> Result<BlockRecord> {
        self.authorize(address, message, signature)?;
        let payload = Payload::submission(address, message, signature, star);
        ledger.append(&payload).await
    }
}
