//! Core types shared by the LabShip contract crates
//!
//! - **Correlation types**: InvocationId, InvocationContext
//! - **Schema constants**: canonical structured-logging field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::{InvocationContext, InvocationId};
