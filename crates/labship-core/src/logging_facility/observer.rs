//! Invocation observer
//!
//! The dispatcher reports the lifecycle of every invocation to an injected
//! observer instead of writing to a process-global logger. The subscriber
//! behind [`TracingObserver`] is installed by the host via [`super::init`].

use crate::errors::ExError;
use labship_core_types::schema::{FIELD_ENTITY_ID, FIELD_INVOCATION_ID, FIELD_TX_ID};
use labship_core_types::InvocationContext;

/// Receives the start/end/error boundary of each command invocation
pub trait InvocationObserver: Send + Sync {
    /// A command was resolved and is about to run
    fn on_start(&self, ctx: &InvocationContext, op: &str);

    /// The command succeeded
    fn on_end(&self, ctx: &InvocationContext, op: &str, duration_ms: u64);

    /// The command failed with `err`
    fn on_error(&self, ctx: &InvocationContext, op: &str, err: &ExError, duration_ms: u64);
}

/// Observer that emits canonical `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl InvocationObserver for TracingObserver {
    fn on_start(&self, ctx: &InvocationContext, op: &str) {
        crate::log_op_start!(
            op,
            { FIELD_INVOCATION_ID } = ctx.invocation_id.as_str(),
            { FIELD_TX_ID } = ctx.tx_id_or_empty()
        );
    }

    fn on_end(&self, ctx: &InvocationContext, op: &str, duration_ms: u64) {
        crate::log_op_end!(
            op,
            duration_ms = duration_ms,
            { FIELD_INVOCATION_ID } = ctx.invocation_id.as_str(),
            { FIELD_TX_ID } = ctx.tx_id_or_empty()
        );
    }

    fn on_error(&self, ctx: &InvocationContext, op: &str, err: &ExError, duration_ms: u64) {
        crate::log_op_error!(
            op,
            err.clone(),
            duration_ms = duration_ms,
            { FIELD_INVOCATION_ID } = ctx.invocation_id.as_str(),
            { FIELD_TX_ID } = ctx.tx_id_or_empty(),
            { FIELD_ENTITY_ID } = err.entity_id().unwrap_or("")
        );
    }
}

/// Observer that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl InvocationObserver for NoopObserver {
    fn on_start(&self, _: &InvocationContext, _: &str) {}

    fn on_end(&self, _: &InvocationContext, _: &str, _: u64) {}

    fn on_error(&self, _: &InvocationContext, _: &str, _: &ExError, _: u64) {}
}
