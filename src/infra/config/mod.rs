pub mod app_config;
pub mod layout_file;
pub mod paths;

use std::path::PathBuf;

pub use app_config::AppConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not find the config directory")]
    NoConfigDir,
    #[error("could not find the cache directory")]
    NoCacheDir,
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
    #[error("unknown log level `{0}`")]
    InvalidLogLevel(String),
}
