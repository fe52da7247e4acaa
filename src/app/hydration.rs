//! Reads stored layouts through the preference store port.

use std::sync::Arc;

use ledgerview_domain::{ColumnCatalog, ColumnId};
use log::warn;

use crate::layout::TableLayout;
use crate::ports::PreferenceStore;

/// Store failures fall back to the defaults; nothing is written back.
pub fn load_layout<C: ColumnId>(
    store: &dyn PreferenceStore,
    catalog: Arc<ColumnCatalog<C>>,
) -> TableLayout<C> {
    let table_kind = catalog.table_kind();
    let stored = match store.load(table_kind) {
        Ok(stored) => stored,
        Err(err) => {
            warn!("{table_kind}: cannot load stored layout, using defaults: {err}");
            None
        }
    };
    TableLayout::hydrate(catalog, stored.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::test_support::{Col, shared_catalog};
    use crate::ports::preference_store::{MockPreferenceStore, PreferenceStoreError};
    use ledgerview_domain::LayoutPreferences;

    #[test]
    fn stored_layout_is_hydrated() {
        let mut store = MockPreferenceStore::new();
        store
            .expect_load()
            .withf(|kind| kind == "test")
            .times(1)
            .returning(|_| {
                Ok(Some(LayoutPreferences {
                    visible_columns: vec!["a".into(), "d".into()],
                    ..LayoutPreferences::default()
                }))
            });
        store.expect_save().never();

        let layout = load_layout(&store, shared_catalog());

        assert_eq!(layout.visible_columns(), &[Col::A, Col::D]);
    }

    #[test]
    fn store_failure_falls_back_to_defaults() {
        let mut store = MockPreferenceStore::new();
        store
            .expect_load()
            .returning(|_| Err(PreferenceStoreError::VersionMismatch { found: 9, expected: 1 }));
        store.expect_save().never();

        let layout = load_layout(&store, shared_catalog());

        assert_eq!(layout.visible_columns(), &[Col::A, Col::B, Col::C]);
    }
}
