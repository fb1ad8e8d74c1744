//! Canonical logging macros
//!
//! Field keys come from [`labship_core_types::schema`]. Every event carries
//! the component, the operation and the boundary it marks, so the phases of
//! one invocation can be joined in structured output.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use labship_core::log_op_start;
/// log_op_start!("Ship");
/// log_op_start!("Ship", package_id = "P1");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            { labship_core_types::schema::FIELD_COMPONENT } = module_path!(),
            { labship_core_types::schema::FIELD_OP } = $op,
            { labship_core_types::schema::FIELD_EVENT } = labship_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            { labship_core_types::schema::FIELD_COMPONENT } = module_path!(),
            { labship_core_types::schema::FIELD_OP } = $op,
            { labship_core_types::schema::FIELD_EVENT } = labship_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use labship_core::log_op_end;
/// log_op_end!("Ship", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            { labship_core_types::schema::FIELD_COMPONENT } = module_path!(),
            { labship_core_types::schema::FIELD_OP } = $op,
            { labship_core_types::schema::FIELD_EVENT } = labship_core_types::schema::EVENT_END,
            { labship_core_types::schema::FIELD_DURATION_MS } = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            { labship_core_types::schema::FIELD_COMPONENT } = module_path!(),
            { labship_core_types::schema::FIELD_OP } = $op,
            { labship_core_types::schema::FIELD_EVENT } = labship_core_types::schema::EVENT_END,
            { labship_core_types::schema::FIELD_DURATION_MS } = $duration,
            $($field)*
        );
    };
}

/// Log a failed operation with its error classification
///
/// Accepts anything convertible into [`ExError`](crate::errors::ExError).
///
/// # Example
///
/// ```
/// # use labship_core::{log_op_error, errors::LabshipError};
/// let err = LabshipError::PackageNotFound { package_id: "P1".to_string() };
/// log_op_error!("Ship", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {
        $crate::log_op_error!($op, $err, duration_ms = $duration,)
    };
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        let err_kind = format!("{:?}", ex_err.kind());
        tracing::error!(
            { labship_core_types::schema::FIELD_COMPONENT } = module_path!(),
            { labship_core_types::schema::FIELD_OP } = $op,
            { labship_core_types::schema::FIELD_EVENT } = labship_core_types::schema::EVENT_END_ERROR,
            { labship_core_types::schema::FIELD_DURATION_MS } = $duration,
            { labship_core_types::schema::FIELD_ERR_KIND } = err_kind.as_str(),
            { labship_core_types::schema::FIELD_ERR_CODE } = ex_err.code(),
            { labship_core_types::schema::FIELD_ERR_MESSAGE } = ex_err.message(),
            $($field)*
        );
    }};
}
