use std::path::PathBuf;

use crate::domain::HomeError;

/// Returns the invoking user's home directory.
///
/// `$HOME` wins when set; otherwise the platform account database is used.
/// An empty result is treated as missing.
pub(crate) fn home_dir() -> Result<PathBuf, HomeError> {
    dirs::home_dir()
        .filter(|home| !home.as_os_str().is_empty())
        .ok_or(HomeError::NotFound)
}
