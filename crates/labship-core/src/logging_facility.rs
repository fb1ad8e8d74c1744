//! Structured logging facility
//!
//! - Single initialization point via `init(profile)`, owned by the host entry point
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - `InvocationObserver`, the logging capability injected into the dispatcher
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use labship_core::logging_facility::{init, Profile};
//!
//! // Initialize once at process startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod observer;
pub mod test_capture;

pub use init::{init, Profile};
pub use observer::{InvocationObserver, NoopObserver, TracingObserver};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
