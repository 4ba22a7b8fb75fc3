use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::errors::LeadFlowError;
use crate::model::{Lead, LeadStatus};

/// Sort order of a lead listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    NameAsc,
    NameDesc,
}

impl FromStr for SortKey {
    type Err = LeadFlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "name_asc" => Ok(SortKey::NameAsc),
            "name_desc" => Ok(SortKey::NameDesc),
            other => Err(LeadFlowError::InvalidValue {
                kind: "sort key",
                value: other.to_string(),
            }),
        }
    }
}

/// Filters and ordering for a lead listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadQuery {
    /// Free text matched against id, name, phone and email
    pub q: String,
    pub status: Option<LeadStatus>,
    /// Exact source name
    pub source: Option<String>,
    pub sort: SortKey,
}

impl LeadQuery {
    /// Whether anything differs from the default listing
    pub fn has_filters(&self) -> bool {
        !self.q.trim().is_empty()
            || self.status.is_some()
            || self.source.is_some()
            || self.sort != SortKey::Newest
    }

    fn matches(&self, lead: &Lead, needle: &str) -> bool {
        let matches_query = needle.is_empty()
            || contains_ci(Some(&lead.id), needle)
            || contains_ci(Some(&lead.name), needle)
            || contains_ci(Some(&lead.phone), needle)
            || contains_ci(lead.email.as_deref(), needle);

        let matches_status = self.status.map_or(true, |s| lead.status == s);
        let matches_source = self.source.as_deref().map_or(true, |s| lead.source == s);

        matches_query && matches_status && matches_source
    }
}

/// `needle` must already be lower-case
fn contains_ci(hay: Option<&str>, needle: &str) -> bool {
    hay.is_some_and(|h| h.to_lowercase().contains(needle))
}

/// Case-insensitive name order, falling back to the raw names for a total order
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Apply a query to a lead list
pub fn filter_leads<'a>(leads: &'a [Lead], query: &LeadQuery) -> Vec<&'a Lead> {
    let needle = query.q.trim().to_lowercase();

    let mut rows: Vec<&Lead> = leads.iter().filter(|l| query.matches(l, &needle)).collect();

    match query.sort {
        SortKey::Newest => rows.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Oldest => rows.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortKey::NameAsc => rows.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::NameDesc => rows.sort_by(|a, b| compare_names(&b.name, &a.name)),
    }

    rows
}

/// Distinct lead sources, sorted
pub fn distinct_sources(leads: &[Lead]) -> Vec<String> {
    leads
        .iter()
        .map(|l| l.source.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_has_no_filters() {
        assert!(!LeadQuery::default().has_filters());
        let q = LeadQuery {
            q: "   ".to_string(),
            ..Default::default()
        };
        assert!(!q.has_filters());

        let sorted = LeadQuery {
            sort: SortKey::Oldest,
            ..Default::default()
        };
        assert!(sorted.has_filters());
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("name_desc".parse::<SortKey>().unwrap(), SortKey::NameDesc);
        assert!("alphabetical".parse::<SortKey>().is_err());
    }
}
