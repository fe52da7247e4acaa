use std::path::PathBuf;

use ledgerview_domain::LayoutPreferences;

#[derive(Debug, thiserror::Error)]
pub enum PreferenceStoreError {
    #[error("preference file version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },
    #[error("invalid preference file {}: {message}", path.display())]
    InvalidFormat { path: PathBuf, message: String },
    #[error("preference file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Key/value storage of table layouts, keyed by table kind.
#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
pub trait PreferenceStore: Send + Sync {
    /// `Ok(None)` when nothing was stored for `table_kind` yet.
    fn load(&self, table_kind: &str) -> Result<Option<LayoutPreferences>, PreferenceStoreError>;

    /// Replaces whatever was stored for `table_kind`.
    fn save(
        &self,
        table_kind: &str,
        preferences: &LayoutPreferences,
    ) -> Result<(), PreferenceStoreError>;
}
