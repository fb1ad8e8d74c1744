//! Interfaces supplied by the host ledger platform
//!
//! The contract never talks to peers, certificates or the world state
//! directly. It consumes exactly two narrow interfaces: a keyed byte store
//! with the invocation arguments attached ([`LedgerStub`]) and the verified
//! caller identity ([`ClientIdentity`]).

pub mod memory;

pub use memory::{MemoryLedger, StaticIdentity};

use thiserror::Error;

/// Failure reported by a host interface
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HostError {
    message: String,
}

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Per-invocation view of the ledger
pub trait LedgerStub {
    /// Raw invocation arguments; `args[0]` is the command name
    fn args(&self) -> Vec<Vec<u8>>;

    /// Read the value stored under `key`; `Ok(None)` when nothing is stored
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, HostError>;

    /// Write `value` under `key`
    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), HostError>;

    /// Transaction id assigned by the host to this invocation
    fn tx_id(&self) -> String;
}

/// Verified attributes of the invoking client
pub trait ClientIdentity {
    /// Membership service provider id of the caller's organization
    fn msp_id(&self) -> Result<String, HostError>;

    /// Unique id of the caller within its organization
    fn id(&self) -> Result<String, HostError>;

    /// Succeeds only when attribute `name` is present and equals `value`
    fn assert_attribute_value(&self, name: &str, value: &str) -> Result<(), HostError>;

    /// Read attribute `name`; `Ok(None)` when the certificate does not carry it
    fn attribute_value(&self, name: &str) -> Result<Option<String>, HostError>;
}
