//! LeadFlow Core - in-memory lead routing kernel
//!
//! This crate provides the domain model and operations behind the LeadFlow
//! dashboard, including:
//! - Leads, buyers (delivery endpoints) and IF/THEN/ELSE routing rules
//! - The rule evaluation engine that decides which rule fires for a lead
//! - Role based access control for write operations
//! - Rule book, buyer and lead listing operations behind a command `apply()`
//! - Plain-text rendering of rules and routing decisions

pub mod apply;
pub mod commands;
pub mod errors;
pub mod id;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod policy;
pub mod rbac;
pub mod render;
pub mod rules_engine;

// Used by the logging macros
pub use leadflow_core_types as core_types;

// Re-export commonly used types
pub use apply::apply;
pub use commands::{Command, CommandResult};
pub use errors::{ExError, ExErrorKind, LeadFlowError, Result};
pub use model::{Action, Buyer, Condition, Field, Lead, LeadStatus, Operator, Rule};
pub use ops::Workspace;
pub use policy::{AccessPolicy, AllowAll};
pub use rbac::{Permission, Role};
pub use rules_engine::{evaluate_rule, route, RoutingDecision, RoutingOutcome, RuleInput};
