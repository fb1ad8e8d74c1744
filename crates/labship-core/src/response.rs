//! Invocation results and their wire encoding

use serde::{Deserialize, Serialize};

use crate::errors::{LabshipError, Result};
use crate::model::PackageStatusView;

/// Status code of a successful invocation
pub const OK: i32 = 200;
/// Status code of a failed invocation
pub const ERROR: i32 = 500;

/// Response handed back to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: i32,
    /// Failure message; empty on success
    pub message: String,
    /// Success payload; empty on failure
    pub payload: Vec<u8>,
}

impl Response {
    pub fn success(payload: Vec<u8>) -> Self {
        Self {
            status: OK,
            message: String::new(),
            payload,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ERROR,
            message: message.into(),
            payload: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == OK
    }

    /// Payload as UTF-8 text (lossy)
    pub fn payload_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.payload)
    }
}

/// `{"txid": .., "err": null}` returned by every mutating command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationReceipt {
    pub txid: String,
    pub err: Option<String>,
}

impl MutationReceipt {
    pub fn new(txid: impl Into<String>) -> Self {
        Self {
            txid: txid.into(),
            err: None,
        }
    }
}

/// Typed result of a command handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    Receipt(MutationReceipt),
    Status(PackageStatusView),
}

impl CommandOutput {
    /// Encode as the JSON success payload
    ///
    /// # Errors
    /// `EncodeFailed` if serialization fails.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let encoded = match self {
            CommandOutput::Receipt(receipt) => serde_json::to_vec(receipt),
            CommandOutput::Status(view) => serde_json::to_vec(view),
        };
        encoded.map_err(|e| LabshipError::EncodeFailed {
            reason: e.to_string(),
        })
    }
}
