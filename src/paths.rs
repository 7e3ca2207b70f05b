//! Path resolution for the web-s config file.
//!
//! The config file lives directly in the user's home directory as
//! `~/.web-s.conf`. Setting `WEB_S_CONFIG` points web-s at another file,
//! which is handy for keeping several provider sets around and for tests.

use std::path::PathBuf;

use crate::error::WebsError;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "WEB_S_CONFIG";

/// File name of the config file inside the home directory.
pub const CONFIG_FILE_NAME: &str = ".web-s.conf";

/// Returns the path of the config file.
///
/// Resolution order:
/// 1. `$WEB_S_CONFIG` if set and non-empty
/// 2. `~/.web-s.conf` otherwise
pub fn config_file() -> Result<PathBuf, WebsError> {
    if let Ok(custom) = std::env::var(CONFIG_ENV)
        && !custom.is_empty()
    {
        return Ok(PathBuf::from(custom));
    }

    dirs::home_dir()
        .map(|home| home.join(CONFIG_FILE_NAME))
        .ok_or(WebsError::NoHomeDir)
}
