//! Role based access control
//!
//! Roles map to a fixed permission set. Write operations on rules and buyers
//! are gated by `require()`; read-only roles can still evaluate rules.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{LeadFlowError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Admin,
    Operator,
    Viewer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Operator => "operator",
            Role::Viewer => "viewer",
        }
    }

    /// Lenient parse used for ambient role settings (session values,
    /// environment variables): anything unrecognised means `Admin`.
    pub fn from_cookie_value(value: &str) -> Self {
        value.trim().parse().unwrap_or(Role::Admin)
    }

    fn permissions(&self) -> &'static [Permission] {
        use Permission::*;
        match self {
            Role::Admin => &[
                RulesRead,
                RulesWrite,
                BuyersRead,
                BuyersWrite,
                LeadsRead,
                IntegrationsRead,
                IntegrationsWrite,
                ReportsRead,
                SettingsRead,
                SettingsWrite,
            ],
            Role::Operator => &[
                RulesRead,
                BuyersRead,
                LeadsRead,
                IntegrationsRead,
                ReportsRead,
                SettingsRead,
            ],
            Role::Viewer => &[RulesRead, BuyersRead, LeadsRead, ReportsRead, SettingsRead],
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = LeadFlowError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "operator" => Ok(Role::Operator),
            "viewer" => Ok(Role::Viewer),
            other => Err(LeadFlowError::InvalidValue {
                kind: "role",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    RulesRead,
    RulesWrite,
    BuyersRead,
    BuyersWrite,
    LeadsRead,
    IntegrationsRead,
    IntegrationsWrite,
    ReportsRead,
    SettingsRead,
    SettingsWrite,
}

impl Permission {
    /// `resource:verb` form, e.g. `rules:write`
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::RulesRead => "rules:read",
            Permission::RulesWrite => "rules:write",
            Permission::BuyersRead => "buyers:read",
            Permission::BuyersWrite => "buyers:write",
            Permission::LeadsRead => "leads:read",
            Permission::IntegrationsRead => "integrations:read",
            Permission::IntegrationsWrite => "integrations:write",
            Permission::ReportsRead => "reports:read",
            Permission::SettingsRead => "settings:read",
            Permission::SettingsWrite => "settings:write",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn has_permission(role: Role, permission: Permission) -> bool {
    role.permissions().contains(&permission)
}

/// Fail with `Forbidden` unless `role` holds `permission`
///
/// # Errors
///
/// Returns `LeadFlowError::Forbidden` when the permission is missing.
pub fn require(role: Role, permission: Permission) -> Result<()> {
    if has_permission(role, permission) {
        Ok(())
    } else {
        tracing::warn!(role = %role, permission = %permission, "permission denied");
        Err(LeadFlowError::Forbidden {
            role: role.to_string(),
            permission: permission.to_string(),
        })
    }
}
