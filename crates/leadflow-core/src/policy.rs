//! Access policy trait and implementations
//!
//! `apply()` asks an `AccessPolicy` whether a command may run. A `Role` is
//! the usual policy; `AllowAll` is for trusted callers such as seed loading.

use crate::errors::Result;
use crate::rbac::{self, Permission, Role};

/// Decides whether a permission is granted
pub trait AccessPolicy {
    /// # Errors
    ///
    /// Returns `LeadFlowError::Forbidden` when the permission is not granted.
    fn check(&self, permission: Permission) -> Result<()>;
}

impl AccessPolicy for Role {
    fn check(&self, permission: Permission) -> Result<()> {
        rbac::require(*self, permission)
    }
}

/// Grants everything
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AccessPolicy for AllowAll {
    fn check(&self, _permission: Permission) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LeadFlowError;

    #[test]
    fn test_role_policy_uses_rbac() {
        assert!(Role::Admin.check(Permission::RulesWrite).is_ok());
        assert!(matches!(
            Role::Viewer.check(Permission::RulesWrite),
            Err(LeadFlowError::Forbidden { .. })
        ));
    }

    #[test]
    fn test_allow_all() {
        assert!(AllowAll.check(Permission::SettingsWrite).is_ok());
    }
}
