//! Ownership challenge messages.
//!
//! A challenge is the string `address:timestamp:tag`. The wallet signs it
//! off-ledger and hands it back together with the signature.

use std::fmt;

use crate::error::{CoreError, Result};

/// The tag embedded in every challenge issued by the registry.
pub const DEFAULT_DOMAIN_TAG: &str = "starRegistry";

/// A parsed challenge message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub address: String,
    /// Issue time (Unix seconds).
    pub timestamp: i64,
    pub tag: String,
}

impl Challenge {
    pub fn new(address: impl Into<String>, timestamp: i64, tag: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            timestamp,
            tag: tag.into(),
        }
    }

    /// Parse a message of the form `address:timestamp:tag`.
    ///
    /// Split from the right: the last two segments are the tag and the
    /// timestamp, everything before them is the address.
    pub fn parse(message: &str) -> Result<Self> {
        let mut parts = message.rsplitn(3, ':');
        let tag = parts.next().unwrap_or_default();
        let timestamp = parts
            .next()
            .ok_or_else(|| CoreError::MalformedChallenge(format!("missing timestamp in {message:?}")))?;
        let address = parts
            .next()
            .ok_or_else(|| CoreError::MalformedChallenge(format!("missing address in {message:?}")))?;

        let timestamp = timestamp.parse::<i64>().map_err(|_| {
            CoreError::MalformedChallenge(format!("timestamp {timestamp:?} is not an integer"))
        })?;

        Ok(Self::new(address, timestamp, tag))
    }

    /// Issue time embedded in `message`, or 0 if the message does not parse.
    ///
    /// An unreadable challenge is as old as the epoch and fails any
    /// freshness window.
    pub fn issued_at(message: &str) -> i64 {
        Self::parse(message).map(|c| c.timestamp).unwrap_or(0)
    }

    /// Seconds elapsed between issue time and `now`. Negative if issued in the future.
    pub fn elapsed(&self, now: i64) -> i64 {
        now.saturating_sub(self.timestamp)
    }

    /// Render as the message string.
    pub fn to_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.address, self.timestamp, self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_format() {
        let challenge = Challenge::new("1AbC", 1_700_000_000, DEFAULT_DOMAIN_TAG);
        assert_eq!(challenge.to_message(), "1AbC:1700000000:starRegistry");
    }

    #[test]
    fn test_parse_roundtrip() {
        let challenge = Challenge::new("deadbeef", 42, DEFAULT_DOMAIN_TAG);
        assert_eq!(Challenge::parse(&challenge.to_message()).unwrap(), challenge);
    }

    #[test]
    fn test_parse_splits_from_right() {
        let challenge = Challenge::parse("a:b:100:starRegistry").unwrap();
        assert_eq!(challenge.address, "a:b");
        assert_eq!(challenge.timestamp, 100);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Challenge::parse("no-colons"),
            Err(CoreError::MalformedChallenge(_))
        ));
        assert!(matches!(
            Challenge::parse("ts:starRegistry"),
            Err(CoreError::MalformedChallenge(_))
        ));
        assert!(matches!(
            Challenge::parse("addr:soon:starRegistry"),
            Err(CoreError::MalformedChallenge(_))
        ));
    }

    #[test]
    fn test_issued_at_falls_back_to_epoch() {
        assert_eq!(Challenge::issued_at("addr:1700000000:starRegistry"), 1_700_000_000);
        assert_eq!(Challenge::issued_at("addr:1700000000:otherTag"), 1_700_000_000);
        assert_eq!(Challenge::issued_at("addr:notanumber:starRegistry"), 0);
        assert_eq!(Challenge::issued_at("nonsense"), 0);
    }

    #[test]
    fn test_elapsed() {
        let challenge = Challenge::new("a", 1000, DEFAULT_DOMAIN_TAG);
        assert_eq!(challenge.elapsed(1300), 300);
        assert_eq!(challenge.elapsed(900), -100);
    }
}
