//! In-memory host implementations
//!
//! Used by tests and by the CLI to run the contract without a peer.

use std::collections::{BTreeMap, HashMap};

use uuid::Uuid;

use super::{ClientIdentity, HostError, LedgerStub};

/// In-memory world state with per-invocation arguments
///
/// Every call to [`MemoryLedger::begin`] starts a new invocation with fresh
/// arguments and a new UUIDv7 transaction id. Keys must be non-empty, as on
/// the host platform.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    state: BTreeMap<String, Vec<u8>>,
    args: Vec<Vec<u8>>,
    tx_id: String,
    writes: usize,
}

impl MemoryLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger over existing state
    pub fn from_state(state: BTreeMap<String, Vec<u8>>) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    /// Start a new invocation with the given string arguments
    pub fn begin<I, S>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args = args
            .into_iter()
            .map(|a| a.as_ref().as_bytes().to_vec())
            .collect();
        self.tx_id = Uuid::now_v7().to_string();
        self
    }

    /// Start a new invocation with raw byte arguments
    pub fn begin_raw(&mut self, args: Vec<Vec<u8>>) -> &mut Self {
        self.args = args;
        self.tx_id = Uuid::now_v7().to_string();
        self
    }

    /// Raw value under `key`
    pub fn raw(&self, key: &str) -> Option<&[u8]> {
        self.state.get(key).map(Vec::as_slice)
    }

    /// Seed raw bytes directly, bypassing the write counter
    pub fn insert_raw(&mut self, key: impl Into<String>, value: Vec<u8>) {
        self.state.insert(key.into(), value);
    }

    /// Entire world state
    pub fn state(&self) -> &BTreeMap<String, Vec<u8>> {
        &self.state
    }

    /// Number of successful `put_state` calls since creation
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl LedgerStub for MemoryLedger {
    fn args(&self) -> Vec<Vec<u8>> {
        self.args.clone()
    }

    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, HostError> {
        if key.is_empty() {
            return Err(HostError::new("key must not be an empty string"));
        }
        Ok(self.state.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), HostError> {
        if key.is_empty() {
            return Err(HostError::new("key must not be an empty string"));
        }
        self.state.insert(key.to_string(), value);
        self.writes += 1;
        Ok(())
    }

    fn tx_id(&self) -> String {
        self.tx_id.clone()
    }
}

/// Fixed caller identity
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    msp_id: Option<String>,
    id: String,
    attributes: HashMap<String, String>,
}

impl StaticIdentity {
    /// Identity belonging to organization `msp_id`
    pub fn new(msp_id: impl Into<String>) -> Self {
        Self {
            msp_id: Some(msp_id.into()),
            ..Self::default()
        }
    }

    /// Identity whose organization cannot be determined
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Set the caller id (certificate subject)
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Add a certificate attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Shorthand for the `role` attribute
    pub fn with_role(self, role: impl Into<String>) -> Self {
        self.with_attribute("role", role)
    }
}

impl ClientIdentity for StaticIdentity {
    fn msp_id(&self) -> Result<String, HostError> {
        self.msp_id
            .clone()
            .ok_or_else(|| HostError::new("caller certificate carries no MSP id"))
    }

    fn id(&self) -> Result<String, HostError> {
        Ok(self.id.clone())
    }

    fn assert_attribute_value(&self, name: &str, value: &str) -> Result<(), HostError> {
        match self.attributes.get(name) {
            Some(actual) if actual == value => Ok(()),
            Some(_) => Err(HostError::new(format!(
                "attribute '{}' does not equal '{}'",
                name, value
            ))),
            None => Err(HostError::new(format!(
                "attribute '{}' was not found",
                name
            ))),
        }
    }

    fn attribute_value(&self, name: &str) -> Result<Option<String>, HostError> {
        Ok(self.attributes.get(name).cloned())
    }
}
