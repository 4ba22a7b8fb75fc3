use leadflow_core_types::RequestId;
use thiserror::Error;

/// Result type alias using LeadFlowError
pub type Result<T> = std::result::Result<T, LeadFlowError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every error surfaced by LeadFlow maps onto one of these kinds. Each kind
/// has a stable code that tests and the CLI match on instead of messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    InvalidName,
    NotFound,
    AlreadyExists,

    // Buyer field mapping
    InvalidMapping,
    DuplicateMapping,

    // Cross references (rule -> buyer)
    UnknownReference,

    // Access control
    Forbidden,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidName => "ERR_INVALID_NAME",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::InvalidMapping => "ERR_INVALID_MAPPING",
            ExErrorKind::DuplicateMapping => "ERR_DUPLICATE_MAPPING",
            ExErrorKind::UnknownReference => "ERR_UNKNOWN_REFERENCE",
            ExErrorKind::Forbidden => "ERR_FORBIDDEN",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification (`kind`) used for programmatic handling plus
/// optional context for whoever reads the log line.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (rule, buyer or lead id)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
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
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for LeadFlow domain operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LeadFlowError {
    // ===== Lookup Errors =====
    /// Rule not found in the rule book
    #[error("Rule not found: {rule_id}")]
    RuleNotFound { rule_id: String },

    /// Buyer not found in the directory
    #[error("Buyer not found: {buyer_id}")]
    BuyerNotFound { buyer_id: String },

    /// Lead not found in the workspace
    #[error("Lead not found: {lead_id}")]
    LeadNotFound { lead_id: String },

    /// A rule with this id already exists
    #[error("Rule already exists: {rule_id}")]
    RuleAlreadyExists { rule_id: String },

    // ===== Validation Errors =====
    /// Rule name is empty or whitespace-only
    #[error("Invalid name: {reason}")]
    InvalidName { reason: String },

    /// A textual value could not be parsed into the named type
    #[error("Invalid {kind} value: {value:?}")]
    InvalidValue { kind: &'static str, value: String },

    /// Mapping row has no buyer-side field name
    #[error("Mapping row {row} has no target field")]
    MappingTargetMissing { row: usize },

    /// Two mapping rows write the same buyer-side field
    #[error("Duplicate mapping target field: {field}")]
    DuplicateMappingTarget { field: String },

    /// Mapping row reads a field that leads do not have
    #[error("Unknown internal field: {field}")]
    UnknownInternalField { field: String },

    /// A rule action routes to a buyer that does not exist
    #[error("Rule {rule_id} routes to unknown buyer {buyer_id}")]
    UnknownBuyerReference { rule_id: String, buyer_id: String },

    // ===== Access Errors =====
    /// The caller's role lacks the permission for this operation
    #[error("Role {role} lacks permission {permission}")]
    Forbidden { role: String, permission: String },

    // ===== Integration Errors =====
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<LeadFlowError> for ExError {
    fn from(err: LeadFlowError) -> Self {
        match err {
            LeadFlowError::RuleNotFound { rule_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(rule_id)
                .with_message("Rule not found"),

            LeadFlowError::BuyerNotFound { buyer_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(buyer_id)
                .with_message("Buyer not found"),

            LeadFlowError::LeadNotFound { lead_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(lead_id)
                .with_message("Lead not found"),

            LeadFlowError::RuleAlreadyExists { rule_id } => {
                ExError::new(ExErrorKind::AlreadyExists)
                    .with_entity_id(rule_id)
                    .with_message("Rule already exists")
            }

            LeadFlowError::InvalidName { reason } => ExError::new(ExErrorKind::InvalidName)
                .with_message(format!("Invalid name: {}", reason)),

            LeadFlowError::InvalidValue { kind, value } => ExError::new(ExErrorKind::InvalidInput)
                .with_message(format!("Invalid {} value: {:?}", kind, value)),

            LeadFlowError::MappingTargetMissing { row } => {
                ExError::new(ExErrorKind::InvalidMapping)
                    .with_op("validate_mapping")
                    .with_message(format!("Mapping row {} has no target field", row))
            }

            LeadFlowError::DuplicateMappingTarget { field } => {
                ExError::new(ExErrorKind::DuplicateMapping)
                    .with_op("validate_mapping")
                    .with_message(format!("Duplicate target field {}", field))
            }

            LeadFlowError::UnknownInternalField { field } => {
                ExError::new(ExErrorKind::InvalidMapping)
                    .with_op("validate_mapping")
                    .with_message(format!("Unknown internal field {}", field))
            }

            LeadFlowError::UnknownBuyerReference { rule_id, buyer_id } => {
                ExError::new(ExErrorKind::UnknownReference)
                    .with_entity_id(rule_id)
                    .with_message(format!("Routes to unknown buyer {}", buyer_id))
            }

            LeadFlowError::Forbidden { role, permission } => ExError::new(ExErrorKind::Forbidden)
                .with_message(format!("Role {} lacks permission {}", role, permission)),

            LeadFlowError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to LeadFlowError
impl From<serde_json::Error> for LeadFlowError {
    fn from(err: serde_json::Error) -> Self {
        LeadFlowError::Serialization {
            message: err.to_string(),
        }
    }
}
