use serde::{Deserialize, Serialize};

/// Headline counters shown on the dashboard
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub leads_today: u64,
    pub delivered_today: u64,
    pub rejected_today: u64,
    pub revenue_today: f64,
    /// Fraction in `0.0..=1.0`
    pub acceptance_rate: f64,
}

/// Lead volume for one weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyVolume {
    pub day: String,
    pub leads: u64,
}
