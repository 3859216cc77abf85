//! # Session References
//!
//! Opaque references to provider-hosted pages: checkout sessions (collect a
//! payment, start a subscription) and billing-portal sessions (manage an
//! existing subscription).
//!
//! The gateway never reshapes these: callers receive the provider's session
//! object byte-for-byte equivalent, hosted-page URL included. Both types are
//! transparent wrappers over raw JSON; the accessors exist for logging and
//! for the one orchestration that reads a portal URL back out.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A provider checkout session, returned to the caller verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckoutSession(Value);

impl CheckoutSession {
    /// Provider session identifier (e.g., "cs_...")
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// Hosted checkout page URL
    pub fn url(&self) -> Option<&str> {
        self.0.get("url").and_then(Value::as_str)
    }
}

impl From<Value> for CheckoutSession {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// A provider billing-portal session, returned to the caller verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortalSession(Value);

impl PortalSession {
    /// Provider session identifier (e.g., "bps_...")
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// Hosted portal page URL
    pub fn url(&self) -> Option<&str> {
        self.0.get("url").and_then(Value::as_str)
    }
}

impl From<Value> for PortalSession {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
