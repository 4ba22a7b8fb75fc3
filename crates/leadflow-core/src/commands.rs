//! Command types for every workspace mutation
//!
//! Commands are the single entry point for changing a `Workspace` through
//! `apply()`, which checks permissions before anything is touched.

use crate::model::{FieldMapRow, Rule};
use crate::rbac::Permission;

/// Workspace mutations
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Create a rule with editor defaults
    RuleCreate,

    /// Replace a stored rule with an edited draft
    RuleSave { rule: Rule },

    /// Toggle a rule on or off
    RuleSetEnabled { rule_id: String, enabled: bool },

    RuleDelete { rule_id: String },

    /// Toggle a buyer on or off
    BuyerSetActive { buyer_id: String, active: bool },

    BuyerSetDailyCap { buyer_id: String, daily_cap: u32 },

    /// Replace a buyer's field mapping
    BuyerSaveMapping {
        buyer_id: String,
        mapping: Vec<FieldMapRow>,
    },
}

impl Command {
    /// Operation name used in logs and errors
    pub fn name(&self) -> &'static str {
        match self {
            Command::RuleCreate => "rule_create",
            Command::RuleSave { .. } => "rule_save",
            Command::RuleSetEnabled { .. } => "rule_set_enabled",
            Command::RuleDelete { .. } => "rule_delete",
            Command::BuyerSetActive { .. } => "buyer_set_active",
            Command::BuyerSetDailyCap { .. } => "buyer_set_daily_cap",
            Command::BuyerSaveMapping { .. } => "buyer_save_mapping",
        }
    }

    /// Permission the caller must hold
    pub fn required_permission(&self) -> Permission {
        match self {
            Command::RuleCreate
            | Command::RuleSave { .. }
            | Command::RuleSetEnabled { .. }
            | Command::RuleDelete { .. } => Permission::RulesWrite,
            Command::BuyerSetActive { .. }
            | Command::BuyerSetDailyCap { .. }
            | Command::BuyerSaveMapping { .. } => Permission::BuyersWrite,
        }
    }
}

/// What a successfully applied command produced
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    RuleCreated { rule_id: String },
    RuleDeleted { rule: Rule },
    Updated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permissions_split_by_resource() {
        assert_eq!(
            Command::RuleCreate.required_permission(),
            Permission::RulesWrite
        );
        let cmd = Command::BuyerSetDailyCap {
            buyer_id: "b1".to_string(),
            daily_cap: 10,
        };
        assert_eq!(cmd.required_permission(), Permission::BuyersWrite);
        assert_eq!(cmd.name(), "buyer_set_daily_cap");
    }
}
