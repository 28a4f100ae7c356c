//! # Operator Configuration
//!
//! Optional YAML file that tells `lcp` where packs live and which policy
//! constants apply:
//!
//! ```yaml
//! packs_dir: packs
//! policy:
//!   max_sla_days: 30
//! ```
//!
//! Lookup order: `--config <path>` if given (must exist), else `lcp.yaml`
//! in the current directory if present, else built-in defaults. A relative
//! `packs_dir` is resolved against the config file's directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use lcp_core::ValidationPolicy;

/// Config file picked up from the current directory when `--config` is
/// not given.
pub const DEFAULT_CONFIG_FILE: &str = "lcp.yaml";

/// Directory scanned for `*.yaml` packs when nothing else is configured.
pub const DEFAULT_PACKS_DIR: &str = "packs";

/// Settings read from the operator config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LcpConfig {
    /// Directory holding one `*.yaml` pack per market.
    pub packs_dir: PathBuf,
    /// Policy constants applied to every pack.
    pub policy: ValidationPolicy,
}

impl Default for LcpConfig {
    fn default() -> Self {
        Self {
            packs_dir: PathBuf::from(DEFAULT_PACKS_DIR),
            policy: ValidationPolicy::default(),
        }
    }
}

impl LcpConfig {
    /// Read and check a config file, resolving `packs_dir` against the
    /// file's directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let mut config: Self = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("invalid config file: {}", path.display()))?
        };
        config
            .policy
            .check()
            .with_context(|| format!("invalid policy in {}", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.packs_dir = crate::resolve_path(&config.packs_dir, base);
        Ok(config)
    }

    /// Load the effective configuration.
    ///
    /// `explicit` comes from `--config`; `cwd` is where the default file is
    /// looked for.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let default_path = cwd.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            tracing::debug!(path = %default_path.display(), "using default config file");
            return Self::from_file(&default_path);
        }
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LcpConfig::default();
        assert_eq!(config.packs_dir, PathBuf::from("packs"));
        assert_eq!(config.policy.max_sla_days, 30);
    }

    #[test]
    fn test_load_without_any_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = LcpConfig::load(None, dir.path()).unwrap();
        assert_eq!(config, LcpConfig::default());
    }

    #[test]
    fn test_load_picks_up_default_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("markets")).unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "packs_dir: markets\npolicy:\n  max_sla_days: 14\n",
        )
        .unwrap();

        let config = LcpConfig::load(None, dir.path()).unwrap();
        assert_eq!(config.packs_dir, dir.path().join("markets"));
        assert_eq!(config.policy.max_sla_days, 14);
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        let err = LcpConfig::load(Some(&missing), dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.yaml");
        std::fs::write(&path, "policy:\n  max_sla_days: 7\n").unwrap();

        let config = LcpConfig::from_file(&path).unwrap();
        assert_eq!(config.policy.max_sla_days, 7);
        assert_eq!(config.packs_dir, PathBuf::from("packs"));
    }

    #[test]
    fn test_empty_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.yaml");
        std::fs::write(&path, "").unwrap();
        assert_eq!(
            LcpConfig::from_file(&path).unwrap().policy,
            ValidationPolicy::default()
        );
    }

    #[test]
    fn test_negative_sla_ceiling_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "policy:\n  max_sla_days: -3\n").unwrap();
        let err = LcpConfig::from_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("max_sla_days"));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("typo.yaml");
        std::fs::write(&path, "pack_dir: packs\n").unwrap();
        assert!(LcpConfig::from_file(&path).is_err());
    }
}
