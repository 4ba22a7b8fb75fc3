//! Seed digest canonicalization
//!
//! Computes stable SHA256 digests of seeds so that two seeds with the same
//! content in a different order are recognised as identical

use crate::errors::{serialization, Result};
use crate::seed::format_v0::SeedV0;
use sha2::{Digest, Sha256};

/// Compute a stable digest for a seed
///
/// Buyers, rules and leads are sorted by id before hashing; the order of
/// conditions, mapping rows and daily volume entries is significant and is
/// kept.
///
/// # Errors
///
/// `ERR_SERIALIZATION` if the seed cannot be encoded as JSON.
pub fn compute_seed_digest(seed: &SeedV0) -> Result<String> {
    let canonical = canonicalize_seed(seed);

    let json = serde_json::to_string(&canonical).map_err(|e| serialization("seed_digest", e))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

/// Canonicalize a seed for deterministic digest calculation
fn canonicalize_seed(seed: &SeedV0) -> SeedV0 {
    let mut canonical = seed.clone();
    canonical.buyers.sort_by(|a, b| a.id.cmp(&b.id));
    canonical.rules.sort_by(|a, b| a.id.cmp(&b.id));
    canonical.leads.sort_by(|a, b| a.id.cmp(&b.id));
    canonical
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::parse_seed_str;

    const TWO_BUYERS: &str = r#"
schema_version: 0
buyers:
  - id: b1
    name: "One"
    endpoint: "https://one"
  - id: b2
    name: "Two"
    endpoint: "https://two"
"#;

    const TWO_BUYERS_REVERSED: &str = r#"
schema_version: 0
buyers:
  - id: b2
    name: "Two"
    endpoint: "https://two"
  - id: b1
    name: "One"
    endpoint: "https://one"
"#;

    #[test]
    fn test_digest_ignores_entity_order() {
        let a = compute_seed_digest(&parse_seed_str(TWO_BUYERS).unwrap()).unwrap();
        let b = compute_seed_digest(&parse_seed_str(TWO_BUYERS_REVERSED).unwrap()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_digest_changes_with_content() {
        let a = compute_seed_digest(&parse_seed_str(TWO_BUYERS).unwrap()).unwrap();
        let changed = TWO_BUYERS.replace("https://two", "https://two.example");
        let b = compute_seed_digest(&parse_seed_str(&changed).unwrap()).unwrap();
        assert_ne!(a, b);
    }
}
