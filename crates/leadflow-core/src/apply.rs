//! Functional-boundary apply function
//!
//! `apply()` is the single entry point for workspace mutations. The access
//! policy is consulted first, then the command is dispatched to the rule or
//! buyer operations.
//!
//! ## Atomicity Contract
//!
//! - Either the whole command succeeds and a new state is returned, or it fails
//!   with a typed error and nothing was mutated
//! - Validation (names, buyer references, mappings) runs before any write
//!
//! ## Example
//!
//! ```
//! use leadflow_core::{apply, Command, Role, Workspace};
//!
//! let state = Workspace::new();
//! let (state, _result) = apply(state, Command::RuleCreate, &Role::Admin).unwrap();
//! assert_eq!(state.list_rules().len(), 1);
//! ```

use std::time::Instant;

use crate::commands::{Command, CommandResult};
use crate::errors::Result;
use crate::ops::{buyer_ops, rule_ops, Workspace};
use crate::policy::AccessPolicy;
use crate::{log_op_end, log_op_error, log_op_start};

/// Apply a command to a workspace
///
/// Takes ownership of the current state and returns the new state together
/// with what the command produced. Callers that want to keep the old state
/// around on failure should clone it first.
///
/// # Errors
///
/// * `Forbidden` - the policy denies the command's permission
/// * any error from the underlying rule or buyer operation
pub fn apply(
    mut state: Workspace,
    cmd: Command,
    policy: &dyn AccessPolicy,
) -> Result<(Workspace, CommandResult)> {
    let op = cmd.name();
    let start = Instant::now();
    log_op_start!(op);

    match dispatch(&mut state, cmd, policy) {
        Ok(result) => {
            log_op_end!(op, duration_ms = start.elapsed().as_millis() as u64);
            Ok((state, result))
        }
        Err(err) => {
            log_op_error!(
                op,
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}

fn dispatch(
    state: &mut Workspace,
    cmd: Command,
    policy: &dyn AccessPolicy,
) -> Result<CommandResult> {
    policy.check(cmd.required_permission())?;

    match cmd {
        Command::RuleCreate => {
            let rule_id = rule_ops::create_rule(state)?;
            Ok(CommandResult::RuleCreated { rule_id })
        }
        Command::RuleSave { rule } => {
            rule_ops::save_rule(state, rule)?;
            Ok(CommandResult::Updated)
        }
        Command::RuleSetEnabled { rule_id, enabled } => {
            rule_ops::set_rule_enabled(state, &rule_id, enabled)?;
            Ok(CommandResult::Updated)
        }
        Command::RuleDelete { rule_id } => {
            let rule = rule_ops::delete_rule(state, &rule_id)?;
            Ok(CommandResult::RuleDeleted { rule })
        }
        Command::BuyerSetActive { buyer_id, active } => {
            buyer_ops::set_buyer_active(state, &buyer_id, active)?;
            Ok(CommandResult::Updated)
        }
        Command::BuyerSetDailyCap {
            buyer_id,
            daily_cap,
        } => {
            buyer_ops::set_daily_cap(state, &buyer_id, daily_cap)?;
            Ok(CommandResult::Updated)
        }
        Command::BuyerSaveMapping { buyer_id, mapping } => {
            buyer_ops::save_mapping(state, &buyer_id, mapping)?;
            Ok(CommandResult::Updated)
        }
    }
}
