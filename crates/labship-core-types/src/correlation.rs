//! Correlation types for invocation tracking
//!
//! The host assigns a transaction id to every invocation, but that id is only
//! available once the stub has been consulted and may be absent for local
//! runs. `InvocationId` is generated by the contract itself so that all log
//! events of one invocation can be correlated regardless.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Contract-local identifier for a single command invocation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvocationId(String);

impl InvocationId {
    /// Generate a new time-ordered InvocationId (UUIDv7)
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for InvocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for InvocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Context carried through one invocation for log correlation
#[derive(Debug, Clone)]
pub struct InvocationContext {
    pub invocation_id: InvocationId,
    /// Host-assigned transaction id, once known
    pub tx_id: Option<String>,
}

impl InvocationContext {
    /// Create a new context with a fresh InvocationId
    pub fn new() -> Self {
        Self {
            invocation_id: InvocationId::new(),
            tx_id: None,
        }
    }

    /// Attach the host transaction id
    pub fn with_tx_id(mut self, tx_id: impl Into<String>) -> Self {
        self.tx_id = Some(tx_id.into());
        self
    }

    /// The transaction id, or an empty string when the host supplied none
    pub fn tx_id_or_empty(&self) -> &str {
        self.tx_id.as_deref().unwrap_or("")
    }
}

impl Default for InvocationContext {
    fn default() -> Self {
        Self::new()
    }
}
