//! Locations of AWS configuration artifacts.

use std::path::{Path, PathBuf};

use crate::core::constants::AWS_DIR;
use crate::error::{GatherError, Result};

/// Build `<home>/.aws/<name>`.
///
/// `name` may contain `/` separators (e.g. `cli/cache`). No existence check.
pub fn aws_path(home: &Path, name: &str) -> PathBuf {
    let mut path = home.join(AWS_DIR);
    for part in name.split('/').filter(|p| !p.is_empty()) {
        path.push(part);
    }
    path
}

/// Resolve the current user's home directory.
///
/// # Errors
///
/// Returns `GatherError::HomeNotFound` if the platform reports none.
pub fn home() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| GatherError::HomeNotFound.into())
}
