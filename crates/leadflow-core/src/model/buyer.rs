use serde::{Deserialize, Serialize};

/// Internal lead fields a buyer mapping may read from
pub const INTERNAL_FIELDS: [&str; 7] = [
    "name", "phone", "email", "city", "budget", "source", "status",
];

/// How LeadFlow authenticates against a buyer endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthType {
    None,
    ApiKey,
    Bearer,
}

impl AuthType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthType::None => "none",
            AuthType::ApiKey => "api_key",
            AuthType::Bearer => "bearer",
        }
    }
}

/// One row of a buyer field mapping: internal field -> buyer payload field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapRow {
    /// Internal field name (one of `INTERNAL_FIELDS`)
    pub from: String,
    /// Buyer-side payload key
    pub to: String,
}

impl FieldMapRow {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Buyer - a delivery endpoint leads can be routed to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Buyer {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub endpoint: String,
    pub auth_type: AuthType,
    /// Maximum deliveries per day; 0 means uncapped
    pub daily_cap: u32,
    pub sent_today: u32,
    pub timeout_ms: u64,
    #[serde(default)]
    pub mapping: Vec<FieldMapRow>,
}

impl Buyer {
    /// Create an active buyer with no mapping and default limits
    pub fn new(id: impl Into<String>, name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            active: true,
            endpoint: endpoint.into(),
            auth_type: AuthType::None,
            daily_cap: 0,
            sent_today: 0,
            timeout_ms: 5000,
            mapping: Vec::new(),
        }
    }
}
