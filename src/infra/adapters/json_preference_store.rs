use std::fs;
use std::path::{Path, PathBuf};

use ledgerview_app::ports::preference_store::{PreferenceStore, PreferenceStoreError};
use ledgerview_domain::LayoutPreferences;
use log::warn;

use crate::config::ConfigError;
use crate::config::layout_file::{CURRENT_VERSION, LayoutFile};
use crate::config::paths::config_dir;

pub const LAYOUT_FILE_NAME: &str = "layouts.json";

/// Keeps every table's layout in one `layouts.json`.
///
/// A save rewrites only its own table entry. Files written by a newer version
/// are never overwritten.
pub struct JsonPreferenceStore {
    config_dir: PathBuf,
}

impl JsonPreferenceStore {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            config_dir: config_dir()?,
        })
    }

    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    pub fn storage_path(&self) -> PathBuf {
        self.config_dir.join(LAYOUT_FILE_NAME)
    }

    /// Parses the file without checking its version.
    fn read_file(&self, path: &Path) -> Result<Option<LayoutFile>, PreferenceStoreError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        LayoutFile::parse(&content)
            .map(Some)
            .map_err(|e| PreferenceStoreError::InvalidFormat {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }

    fn file_for_save(&self, path: &Path) -> Result<LayoutFile, PreferenceStoreError> {
        let file = match self.read_file(path) {
            Ok(Some(file)) => file,
            Ok(None) => return Ok(LayoutFile::new()),
            Err(err @ PreferenceStoreError::InvalidFormat { .. }) => {
                warn!("replacing unreadable {}: {err}", path.display());
                return Ok(LayoutFile::new());
            }
            Err(err) => return Err(err),
        };
        match file.version() {
            Some(CURRENT_VERSION) => Ok(file),
            Some(found) if found > CURRENT_VERSION => {
                warn!(
                    "not saving layout: {} was written by a newer version ({found})",
                    path.display()
                );
                Err(PreferenceStoreError::VersionMismatch {
                    found,
                    expected: CURRENT_VERSION,
                })
            }
            found => {
                warn!(
                    "replacing {} with outdated version {found:?}",
                    path.display()
                );
                Ok(LayoutFile::new())
            }
        }
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn load(&self, table_kind: &str) -> Result<Option<LayoutPreferences>, PreferenceStoreError> {
        let Some(file) = self.read_file(&self.storage_path())? else {
            return Ok(None);
        };
        match file.version() {
            Some(CURRENT_VERSION) => Ok(file.table(table_kind)),
            found => Err(PreferenceStoreError::VersionMismatch {
                found: found.unwrap_or_default(),
                expected: CURRENT_VERSION,
            }),
        }
    }

    fn save(
        &self,
        table_kind: &str,
        preferences: &LayoutPreferences,
    ) -> Result<(), PreferenceStoreError> {
        let path = self.storage_path();
        let mut file = self.file_for_save(&path)?;
        file.set_table(table_kind, preferences);

        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir)?;
        }
        let content = file
            .to_string_pretty()
            .map_err(|e| PreferenceStoreError::InvalidFormat {
                path: path.clone(),
                message: e.to_string(),
            })?;
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}
