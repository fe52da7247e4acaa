use std::env;
use std::path::PathBuf;

use super::ConfigError;

pub const APP_DIR_NAME: &str = "ledgerview";
pub const CONFIG_DIR_ENV: &str = "LEDGERVIEW_CONFIG_DIR";

/// `$LEDGERVIEW_CONFIG_DIR`, else the platform config dir.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    if let Some(dir) = env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join(APP_DIR_NAME))
}

/// Log files live with the caches, away from user-edited config.
pub fn log_dir() -> Result<PathBuf, ConfigError> {
    let base = dirs::cache_dir().ok_or(ConfigError::NoCacheDir)?;
    Ok(base.join(APP_DIR_NAME))
}
