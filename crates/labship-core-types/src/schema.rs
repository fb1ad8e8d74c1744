//! Canonical schema constants for structured logging
//!
//! Every log line emitted by the contract uses these keys so that JSON output
//! stays queryable across commands.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_INVOCATION_ID: &str = "invocation_id";
pub const FIELD_TX_ID: &str = "tx_id";

// Caller identity
pub const FIELD_MSP_ID: &str = "msp_id";
pub const FIELD_ROLE: &str = "role";

// Entity identifiers
pub const FIELD_PACKAGE_ID: &str = "package_id";
pub const FIELD_STATUS: &str = "status";
pub const FIELD_ENTITY_ID: &str = "entity_id";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";
pub const FIELD_ERR_MESSAGE: &str = "err.message";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
