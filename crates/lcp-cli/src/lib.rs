//! # lcp-cli — CLI Tool for Localization Content Packs
//!
//! Provides the `lcp` command-line interface, the driver around
//! `lcp-pack`'s loader and validator.
//!
//! ## Subcommands
//!
//! - `lcp validate` — validate every `packs/*.yaml`, or the given paths.
//!
//! ```bash
//! lcp validate
//! lcp validate packs/in.yaml packs/br.yaml
//! lcp --config lcp.yaml validate --json
//! ```
//!
//! Exit status is 0 only when at least one pack was found and every pack
//! is clean. CI pipelines gate on it.

pub mod config;
pub mod validate;

use std::path::{Path, PathBuf};

/// Resolve a path that may be relative to a base directory.
///
/// If the path is absolute, returns it as-is. If relative and it exists
/// under `base`, uses that. Otherwise returns the path relative to the
/// current directory.
pub fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let based = base.join(path);
    if based.exists() {
        based
    } else {
        path.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_packs_dir_ignores_config_location() {
        let config_dir = Path::new("/etc/lcp");
        assert_eq!(
            resolve_path(Path::new("/srv/content/packs"), config_dir),
            PathBuf::from("/srv/content/packs")
        );
    }

    #[test]
    fn packs_dir_beside_config_file_is_used() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("markets")).unwrap();
        assert_eq!(
            resolve_path(Path::new("markets"), dir.path()),
            dir.path().join("markets")
        );
    }

    #[test]
    fn packs_dir_absent_beside_config_stays_cwd_relative() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            resolve_path(Path::new("markets"), dir.path()),
            PathBuf::from("markets")
        );
    }
}
