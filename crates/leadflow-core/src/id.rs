use uuid::Uuid;

/// Generate a prefixed, time-ordered id such as `rule_01890a5d...`
pub fn uid(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::now_v7().simple())
}
