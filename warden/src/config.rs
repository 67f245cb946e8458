//! Locating the configuration file.

use std::path::{Path, PathBuf};

use crate::WardenError;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "WARDEN_CONFIG";

/// Locations searched, in order, when no path is given explicitly.
pub const DEFAULT_PATHS: [&str; 2] = ["./warden.config.ron", "/etc/warden/warden.config.ron"];

/// Find the configuration file using the following precedence:
/// 1. `explicit` (the `--config` flag or `WARDEN_CONFIG`)
/// 2. ./warden.config.ron (current working directory)
/// 3. /etc/warden/warden.config.ron (system-wide config)
///
/// # Errors
///
/// - [`WardenError::MissingConfig`] if `explicit` names a file that does not exist
/// - [`WardenError::NoConfig`] if no default location exists
pub fn locate(explicit: Option<&Path>) -> Result<PathBuf, WardenError> {
    let defaults = DEFAULT_PATHS.map(PathBuf::from);
    locate_in(explicit, &defaults)
}

/// [`locate`], searching `candidates` instead of [`DEFAULT_PATHS`].
///
/// # Errors
///
/// As for [`locate`].
pub fn locate_in(explicit: Option<&Path>, candidates: &[PathBuf]) -> Result<PathBuf, WardenError> {
    if let Some(path) = explicit {
        if path.exists() {
            return Ok(path.to_path_buf());
        }

        return Err(WardenError::MissingConfig {
            path: path.to_path_buf(),
        });
    }

    if let Some(path) = candidates.iter().find(|path| path.exists()) {
        return Ok(path.clone());
    }

    let tried = candidates
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(WardenError::NoConfig {
        tried: format!("  - {CONFIG_ENV} environment variable\n{tried}"),
    })
}
