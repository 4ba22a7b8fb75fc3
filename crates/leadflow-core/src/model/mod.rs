pub mod buyer;
pub mod lead;
pub mod rule;
pub mod stats;

pub use buyer::{AuthType, Buyer, FieldMapRow, INTERNAL_FIELDS};
pub use lead::{DeliveryAttempt, DeliveryOutcome, Lead, LeadStatus};
pub use rule::{Action, Condition, Field, Operator, Rule};
pub use stats::{DailyVolume, DashboardStats};
