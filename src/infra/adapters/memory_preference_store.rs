use std::collections::HashMap;
use std::sync::Mutex;

use ledgerview_app::ports::preference_store::{PreferenceStore, PreferenceStoreError};
use ledgerview_domain::LayoutPreferences;

/// Session-only store: layouts survive table switches but not restarts.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    tables: Mutex<HashMap<String, LayoutPreferences>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self, table_kind: &str) -> Result<Option<LayoutPreferences>, PreferenceStoreError> {
        let tables = self.tables.lock().unwrap_or_else(|e| e.into_inner());
        Ok(tables.get(table_kind).cloned())
    }

    fn save(
        &self,
        table_kind: &str,
        preferences: &LayoutPreferences,
    ) -> Result<(), PreferenceStoreError> {
        let mut tables = self.tables.lock().unwrap_or_else(|e| e.into_inner());
        tables.insert(table_kind.to_string(), preferences.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_layout_is_loaded_back() {
        let store = MemoryPreferenceStore::new();
        let prefs = LayoutPreferences {
            font_size: "large".into(),
            ..LayoutPreferences::default()
        };

        store.save("trades", &prefs).unwrap();

        assert_eq!(store.load("trades").unwrap(), Some(prefs));
        assert_eq!(store.load("positions").unwrap(), None);
    }
}
