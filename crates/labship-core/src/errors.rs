use thiserror::Error;

/// Result type alias using LabshipError
pub type Result<T> = std::result::Result<T, LabshipError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used in structured logs and tests.
/// The user-visible failure message of an invocation is derived from the
/// kind and message, see [`ExError::response_message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Authorization
    OrganizationNotAuthorized,
    RoleNotAuthorized,
    IdentityUnavailable,

    // Input
    Validation,
    InvalidArguments,
    UnknownCommand,

    // Encoding
    Serialization,

    // Ledger
    LedgerRead,
    LedgerWrite,

    // Lifecycle
    IllegalTransition,
    AlreadyExists,

    // Setup
    Config,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::OrganizationNotAuthorized => "ERR_ORGANIZATION_NOT_AUTHORIZED",
            ExErrorKind::RoleNotAuthorized => "ERR_ROLE_NOT_AUTHORIZED",
            ExErrorKind::IdentityUnavailable => "ERR_IDENTITY_UNAVAILABLE",
            ExErrorKind::Validation => "ERR_VALIDATION",
            ExErrorKind::InvalidArguments => "ERR_INVALID_ARGUMENTS",
            ExErrorKind::UnknownCommand => "ERR_UNKNOWN_COMMAND",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::LedgerRead => "ERR_LEDGER_READ",
            ExErrorKind::LedgerWrite => "ERR_LEDGER_WRITE",
            ExErrorKind::IllegalTransition => "ERR_ILLEGAL_TRANSITION",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::Config => "ERR_CONFIG",
        }
    }

    /// Whether this kind is reported to the caller as a plain authorization failure
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            ExErrorKind::OrganizationNotAuthorized
                | ExErrorKind::RoleNotAuthorized
                | ExErrorKind::IdentityUnavailable
        )
    }
}

/// Message returned to callers for every authorization failure
pub const NOT_AUTHORIZED_MESSAGE: &str = "User not authorized";

/// Canonical structured error type
///
/// Carries classification fields for logging alongside the flat message that
/// ends up in the failure response.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
    detail: Option<String>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
            detail: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (package id, organization...)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add low-level detail (underlying decoder or host error), logged but never returned
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the low-level detail, if any
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Flat message placed in a failure response
    ///
    /// Authorization and identity failures all collapse to
    /// [`NOT_AUTHORIZED_MESSAGE`]; every other kind returns its message.
    pub fn response_message(&self) -> String {
        if self.kind.is_authorization() {
            NOT_AUTHORIZED_MESSAGE.to_string()
        } else {
            self.message.clone()
        }
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(detail) = &self.detail {
            write!(f, " [{}]", detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for contract operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LabshipError {
    // ===== Authorization =====
    /// The identity provider could not report the caller's organization
    #[error("Unable to read caller identity: {reason}")]
    IdentityUnavailable { reason: String },

    /// Caller organization is absent from the authorization matrix
    #[error("Organization {msp_id} is not authorized")]
    OrganizationNotAuthorized { msp_id: String },

    /// No role listed for the caller organization could be asserted
    #[error("No authorized role could be asserted for organization {msp_id}")]
    RoleNotAuthorized { msp_id: String },

    // ===== Input =====
    /// Required package fields are missing or empty
    #[error("Missing or empty attributes: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },

    /// No command name was supplied
    #[error("No function name supplied")]
    MissingCommand,

    /// Command name is not part of the contract
    #[error("Unknown function: {name}")]
    UnknownCommand { name: String },

    /// Wrong number of positional arguments
    #[error("Incorrect number of arguments for {command}: expected {expected}, got {got}")]
    InvalidArguments {
        command: String,
        expected: usize,
        got: usize,
    },

    /// A positional argument is not valid UTF-8
    #[error("Argument {position} of {command} is not valid UTF-8")]
    InvalidArgumentEncoding { command: String, position: usize },

    // ===== Encoding =====
    /// OrderShipment payload is not a valid package document
    #[error("Failed to Unmarshal package input data")]
    InvalidPayload { reason: String },

    /// Stored bytes for a package could not be decoded
    #[error("Failed to Unmarshal package data {package_id}")]
    CorruptPackage { package_id: String, reason: String },

    /// A package or response could not be encoded
    #[error("Failed to marshal Package object")]
    EncodeFailed { reason: String },

    // ===== Ledger =====
    /// Nothing stored under the package id
    #[error("Failed to get package {package_id}")]
    PackageNotFound { package_id: String },

    /// The host store failed to read the package
    #[error("Failed to get package {package_id}")]
    LedgerRead { package_id: String, reason: String },

    /// The host store failed to write the package
    #[error("Failed to write package {package_id}")]
    LedgerWrite { package_id: String, reason: String },

    // ===== Lifecycle =====
    /// Status change rejected by the transition hook
    #[error("Illegal status transition for package {package_id}: {current} -> {next}")]
    IllegalTransition {
        package_id: String,
        current: String,
        next: String,
    },

    /// Status value outside the package status domain
    #[error("Unknown package status for package {package_id}: {status}")]
    UnknownStatus { package_id: String, status: String },

    /// OrderShipment refused to replace an existing package
    #[error("Package {package_id} already exists")]
    AlreadyExists { package_id: String },

    // ===== Setup =====
    /// Contract configuration could not be loaded
    #[error("Invalid configuration: {reason}")]
    Config { reason: String },
}

impl From<LabshipError> for ExError {
    fn from(err: LabshipError) -> Self {
        let message = err.to_string();
        match err {
            LabshipError::IdentityUnavailable { reason } => {
                ExError::new(ExErrorKind::IdentityUnavailable)
                    .with_op("check_authorization")
                    .with_message(message)
                    .with_detail(reason)
            }

            LabshipError::OrganizationNotAuthorized { msp_id } => {
                ExError::new(ExErrorKind::OrganizationNotAuthorized)
                    .with_op("check_authorization")
                    .with_entity_id(msp_id)
                    .with_message(message)
            }

            LabshipError::RoleNotAuthorized { msp_id } => {
                ExError::new(ExErrorKind::RoleNotAuthorized)
                    .with_op("check_authorization")
                    .with_entity_id(msp_id)
                    .with_message(message)
            }

            LabshipError::MissingFields { .. } => ExError::new(ExErrorKind::Validation)
                .with_op("validate_package")
                .with_message(message),

            LabshipError::MissingCommand => {
                ExError::new(ExErrorKind::UnknownCommand).with_message(message)
            }

            LabshipError::UnknownCommand { name } => ExError::new(ExErrorKind::UnknownCommand)
                .with_entity_id(name)
                .with_message(message),

            LabshipError::InvalidArguments { command, .. }
            | LabshipError::InvalidArgumentEncoding { command, .. } => {
                ExError::new(ExErrorKind::InvalidArguments)
                    .with_op(command)
                    .with_message(message)
            }

            LabshipError::InvalidPayload { reason } => ExError::new(ExErrorKind::Serialization)
                .with_op("decode_payload")
                .with_message(message)
                .with_detail(reason),

            LabshipError::CorruptPackage { package_id, reason } => {
                ExError::new(ExErrorKind::Serialization)
                    .with_op("load_package")
                    .with_entity_id(package_id)
                    .with_message(message)
                    .with_detail(reason)
            }

            LabshipError::EncodeFailed { reason } => ExError::new(ExErrorKind::Serialization)
                .with_op("encode")
                .with_message(message)
                .with_detail(reason),

            LabshipError::PackageNotFound { package_id } => {
                ExError::new(ExErrorKind::LedgerRead)
                    .with_op("load_package")
                    .with_entity_id(package_id)
                    .with_message(message)
                    .with_detail("no state stored under key")
            }

            LabshipError::LedgerRead { package_id, reason } => {
                ExError::new(ExErrorKind::LedgerRead)
                    .with_op("load_package")
                    .with_entity_id(package_id)
                    .with_message(message)
                    .with_detail(reason)
            }

            LabshipError::LedgerWrite { package_id, reason } => {
                ExError::new(ExErrorKind::LedgerWrite)
                    .with_op("save_package")
                    .with_entity_id(package_id)
                    .with_message(message)
                    .with_detail(reason)
            }

            LabshipError::IllegalTransition { package_id, .. }
            | LabshipError::UnknownStatus { package_id, .. } => {
                ExError::new(ExErrorKind::IllegalTransition)
                    .with_op("check_transition")
                    .with_entity_id(package_id)
                    .with_message(message)
            }

            LabshipError::AlreadyExists { package_id } => {
                ExError::new(ExErrorKind::AlreadyExists)
                    .with_op("order_shipment")
                    .with_entity_id(package_id)
                    .with_message(message)
            }

            LabshipError::Config { reason } => ExError::new(ExErrorKind::Config)
                .with_op("load_config")
                .with_message(message)
                .with_detail(reason),
        }
    }
}
