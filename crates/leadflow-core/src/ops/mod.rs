pub mod buyer_ops;
pub mod lead_query;
pub mod rule_ops;
pub mod workspace;

pub use buyer_ops::{cap_state, CapState};
pub use lead_query::{filter_leads, LeadQuery, SortKey};
pub use workspace::Workspace;
