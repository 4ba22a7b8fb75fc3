use crate::errors::{LeadFlowError, Result};
use crate::model::{Buyer, DailyVolume, DashboardStats, Lead, Rule};

/// In-memory state of one LeadFlow account: rules, buyers and leads
///
/// Plain owned collections, no interior mutability. All access goes through
/// these methods so that the priority ordering of rules is kept in one place.
/// Rules are edited through `rule_ops`, never in place:
///
/// ```compile_fail
/// use leadflow_core::Workspace;
///
/// let mut ws = Workspace::new();
/// let _ = ws.get_rule_mut("r1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    /// Always sorted by ascending priority (stable)
    pub(crate) rules: Vec<Rule>,
    pub(crate) buyers: Vec<Buyer>,
    pub(crate) leads: Vec<Lead>,
    pub stats: DashboardStats,
    pub daily_volume: Vec<DailyVolume>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Rules =====

    /// Get a rule by ID
    ///
    /// # Errors
    ///
    /// Returns `RuleNotFound` if no rule has this id.
    pub fn get_rule(&self, id: &str) -> Result<&Rule> {
        self.rules
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| LeadFlowError::RuleNotFound {
                rule_id: id.to_string(),
            })
    }

    /// Get a mutable reference to a rule
    ///
    /// Callers that change `priority` must call `sort_rules()` afterwards,
    /// which is why this stays crate-private.
    ///
    /// # Errors
    ///
    /// Returns `RuleNotFound` if no rule has this id.
    pub(crate) fn get_rule_mut(&mut self, id: &str) -> Result<&mut Rule> {
        self.rules
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| LeadFlowError::RuleNotFound {
                rule_id: id.to_string(),
            })
    }

    /// Rules in evaluation order
    pub fn list_rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Insert a new rule
    ///
    /// # Errors
    ///
    /// Returns `RuleAlreadyExists` if the id is taken.
    pub fn insert_rule(&mut self, rule: Rule) -> Result<()> {
        if self.rules.iter().any(|r| r.id == rule.id) {
            return Err(LeadFlowError::RuleAlreadyExists { rule_id: rule.id });
        }
        self.rules.push(rule);
        self.sort_rules();
        Ok(())
    }

    pub(crate) fn remove_rule(&mut self, id: &str) -> Result<Rule> {
        let idx = self
            .rules
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| LeadFlowError::RuleNotFound {
                rule_id: id.to_string(),
            })?;
        Ok(self.rules.remove(idx))
    }

    pub(crate) fn sort_rules(&mut self) {
        self.rules.sort_by_key(|r| r.priority);
    }

    // ===== Buyers =====

    /// Get a buyer by ID
    ///
    /// # Errors
    ///
    /// Returns `BuyerNotFound` if no buyer has this id.
    pub fn get_buyer(&self, id: &str) -> Result<&Buyer> {
        self.buyers
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| LeadFlowError::BuyerNotFound {
                buyer_id: id.to_string(),
            })
    }

    /// # Errors
    ///
    /// Returns `BuyerNotFound` if no buyer has this id.
    pub fn get_buyer_mut(&mut self, id: &str) -> Result<&mut Buyer> {
        self.buyers
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| LeadFlowError::BuyerNotFound {
                buyer_id: id.to_string(),
            })
    }

    /// Buyers in insertion order
    pub fn list_buyers(&self) -> &[Buyer] {
        &self.buyers
    }

    /// Insert or replace a buyer
    pub fn insert_buyer(&mut self, buyer: Buyer) {
        match self.buyers.iter_mut().find(|b| b.id == buyer.id) {
            Some(existing) => *existing = buyer,
            None => self.buyers.push(buyer),
        }
    }

    // ===== Leads =====

    /// # Errors
    ///
    /// Returns `LeadNotFound` if no lead has this id.
    pub fn get_lead(&self, id: &str) -> Result<&Lead> {
        self.leads
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| LeadFlowError::LeadNotFound {
                lead_id: id.to_string(),
            })
    }

    pub fn list_leads(&self) -> &[Lead] {
        &self.leads
    }

    /// Insert or replace a lead
    pub fn insert_lead(&mut self, lead: Lead) {
        match self.leads.iter_mut().find(|l| l.id == lead.id) {
            Some(existing) => *existing = lead,
            None => self.leads.push(lead),
        }
    }
}
