//! # Validation Policy
//!
//! Deployment-level constants consulted by the pack validator.
//!
//! The freshness SLA ceiling is the only tunable. Forbidden-claim matching
//! is always a plain case-insensitive substring test.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Maximum `freshness.sla_days` a pack may declare under the demo SLA.
pub const DEFAULT_MAX_SLA_DAYS: i64 = 30;

/// Policy constants applied to every pack in a validation run.
///
/// Deserializes from the `policy` section of the operator config. Absent
/// keys take their documented defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    /// Inclusive upper bound on `freshness.sla_days`.
    pub max_sla_days: i64,
}

impl ValidationPolicy {
    /// Build a policy with a custom SLA ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPolicy`] if `max_sla_days` is negative.
    pub fn with_max_sla_days(max_sla_days: i64) -> Result<Self, CoreError> {
        let policy = Self { max_sla_days };
        policy.check()?;
        Ok(policy)
    }

    /// Reject out-of-range values. Called after deserializing operator config.
    pub fn check(&self) -> Result<(), CoreError> {
        if self.max_sla_days < 0 {
            return Err(CoreError::InvalidPolicy(format!(
                "max_sla_days must not be negative (got {})",
                self.max_sla_days
            )));
        }
        Ok(())
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            max_sla_days: DEFAULT_MAX_SLA_DAYS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_thirty_days() {
        assert_eq!(ValidationPolicy::default().max_sla_days, 30);
        assert_eq!(DEFAULT_MAX_SLA_DAYS, 30);
    }

    #[test]
    fn test_with_max_sla_days() {
        let policy = ValidationPolicy::with_max_sla_days(14).unwrap();
        assert_eq!(policy.max_sla_days, 14);
    }

    #[test]
    fn test_negative_ceiling_rejected() {
        assert!(ValidationPolicy::with_max_sla_days(-1).is_err());
    }

    #[test]
    fn test_zero_ceiling_allowed() {
        assert!(ValidationPolicy::with_max_sla_days(0).is_ok());
    }

    #[test]
    fn test_deserialize_empty_mapping_uses_defaults() {
        let policy: ValidationPolicy = serde_yaml::from_str("{}").unwrap();
        assert_eq!(policy, ValidationPolicy::default());
    }

    #[test]
    fn test_deserialize_override() {
        let policy: ValidationPolicy = serde_yaml::from_str("max_sla_days: 7\n").unwrap();
        assert_eq!(policy.max_sla_days, 7);
    }
}
