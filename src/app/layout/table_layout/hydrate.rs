//! Load-only path from persisted preferences, and the snapshot written back.

use std::sync::Arc;

use ledgerview_domain::{ColumnCatalog, ColumnId, FontSize, LayoutPreferences};
use log::warn;

use super::TableLayout;
use crate::layout::fraction::FractionModel;
use crate::layout::visibility::VisibilitySet;

impl<C: ColumnId> TableLayout<C> {
    /// Builds a layout from stored preferences.
    ///
    /// Unknown column keys, non-finite or non-positive fractions and unknown
    /// font sizes are dropped; anything missing falls back to the defaults.
    /// Never fails and never writes.
    pub fn hydrate(catalog: Arc<ColumnCatalog<C>>, stored: Option<&LayoutPreferences>) -> Self {
        let Some(stored) = stored else {
            return Self::new(catalog);
        };
        let table_kind = catalog.table_kind();

        let visible = visible_from(&catalog, &stored.visible_columns)
            .unwrap_or_else(|| VisibilitySet::defaults(&catalog));
        let fractions = fractions_from(&catalog, stored, &visible);

        let font_size = if stored.font_size.is_empty() {
            FontSize::default()
        } else {
            stored.font_size.parse().unwrap_or_else(|_| {
                warn!("{table_kind}: unknown font size {:?}, using default", stored.font_size);
                FontSize::default()
            })
        };

        Self::from_parts(catalog, visible, fractions, font_size)
    }

    /// Current state in the persisted shape.
    pub fn preferences(&self) -> LayoutPreferences {
        LayoutPreferences {
            visible_columns: self
                .visible
                .as_slice()
                .iter()
                .map(|column| column.key().to_string())
                .collect(),
            fractions: self
                .fractions
                .iter()
                .map(|(column, value)| (column.key().to_string(), value))
                .collect(),
            font_size: self.font_size.as_str().to_string(),
        }
    }
}

fn visible_from<C: ColumnId>(
    catalog: &ColumnCatalog<C>,
    keys: &[String],
) -> Option<VisibilitySet<C>> {
    if keys.is_empty() {
        return None;
    }
    let columns: Vec<C> = keys
        .iter()
        .filter_map(|key| {
            let column = C::from_key(key).filter(|column| catalog.contains(*column));
            if column.is_none() {
                warn!("{}: ignoring unknown column {key:?}", catalog.table_kind());
            }
            column
        })
        .collect();
    if columns.is_empty() {
        return None;
    }
    VisibilitySet::from_columns(catalog, columns)
}

/// Starts from the defaults and overrides every valid stored entry, so columns
/// added since the file was written still get a share.
fn fractions_from<C: ColumnId>(
    catalog: &ColumnCatalog<C>,
    stored: &LayoutPreferences,
    visible: &VisibilitySet<C>,
) -> FractionModel<C> {
    let defaults = FractionModel::defaults(catalog);
    let mut fractions = defaults.clone();
    let mut valid = 0;
    for (key, value) in &stored.fractions {
        let Some(column) = C::from_key(key).filter(|column| catalog.contains(*column)) else {
            warn!("{}: ignoring fraction for unknown column {key:?}", catalog.table_kind());
            continue;
        };
        if !(value.is_finite() && *value > 0.0) {
            warn!(
                "{}: discarding invalid fraction {value} for {key:?}",
                catalog.table_kind()
            );
            continue;
        }
        fractions.set(column, *value);
        valid += 1;
    }
    if valid == 0 {
        return defaults;
    }
    fractions.normalize(visible.as_slice());
    fractions
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::layout::test_support::{Col, shared_catalog};

    fn prefs(visible: &[&str], fractions: &[(&str, f64)], font: &str) -> LayoutPreferences {
        LayoutPreferences {
            visible_columns: visible.iter().map(|key| key.to_string()).collect(),
            fractions: fractions
                .iter()
                .map(|(key, value)| (key.to_string(), *value))
                .collect::<BTreeMap<_, _>>(),
            font_size: font.to_string(),
        }
    }

    #[test]
    fn missing_preferences_give_defaults() {
        let hydrated = TableLayout::hydrate(shared_catalog(), None);
        let fresh = TableLayout::new(shared_catalog());

        assert_eq!(hydrated.visible_columns(), fresh.visible_columns());
        assert_eq!(hydrated.fractions(), fresh.fractions());
        assert_eq!(hydrated.font_size(), FontSize::Medium);
    }

    #[test]
    fn snapshot_round_trips_through_hydrate() {
        let mut layout = TableLayout::new(shared_catalog());
        layout.set_available_width(900.0);
        layout.toggle_column(Col::D);
        layout.nudge(Col::A, 55.0);
        layout.set_font_size(FontSize::Large);

        let mut restored = TableLayout::hydrate(shared_catalog(), Some(&layout.preferences()));
        restored.set_available_width(900.0);

        assert_eq!(restored.visible_columns(), layout.visible_columns());
        assert_eq!(restored.font_size(), FontSize::Large);
        for (column, width) in layout.resolved_widths().iter() {
            let now = restored.resolved_widths().get(column).unwrap();
            assert!((now - width).abs() < 1e-6, "{column:?}: {width} vs {now}");
        }
    }

    #[test]
    fn unknown_columns_are_filtered() {
        let stored = prefs(&["a", "retired", "c"], &[("retired", 0.5)], "");

        let mut layout = TableLayout::hydrate(shared_catalog(), Some(&stored));
        layout.set_available_width(600.0);

        assert_eq!(layout.visible_columns(), &[Col::A, Col::C]);
        assert!(!layout.preferences().fractions.contains_key("retired"));
        for (_, width) in layout.resolved_widths().iter() {
            assert!((width - 300.0).abs() < 1e-6);
        }
    }

    #[test]
    fn required_column_is_restored_when_missing() {
        let stored = prefs(&["b"], &[], "");

        let layout = TableLayout::hydrate(shared_catalog(), Some(&stored));

        assert_eq!(layout.visible_columns(), &[Col::A, Col::B]);
    }

    #[test]
    fn only_unknown_columns_fall_back_to_defaults() {
        let stored = prefs(&["gone", "also-gone"], &[], "");

        let layout = TableLayout::hydrate(shared_catalog(), Some(&stored));

        assert_eq!(layout.visible_columns(), &[Col::A, Col::B, Col::C]);
    }

    #[test]
    fn invalid_fractions_are_replaced_by_defaults() {
        let stored = prefs(
            &["a", "b", "c"],
            &[("a", f64::NAN), ("b", -1.0), ("c", 0.0)],
            "",
        );

        let mut layout = TableLayout::hydrate(shared_catalog(), Some(&stored));
        layout.set_available_width(900.0);

        for (_, width) in layout.resolved_widths().iter() {
            assert!((width - 300.0).abs() < 1e-6);
        }
    }

    #[test]
    fn valid_fractions_drive_widths() {
        let stored = prefs(&["a", "b", "c"], &[("a", 2.0), ("b", 1.0), ("c", 1.0)], "");

        let mut layout = TableLayout::hydrate(shared_catalog(), Some(&stored));
        layout.set_available_width(800.0);

        assert!((layout.resolved_widths().get(Col::A).unwrap() - 400.0).abs() < 1e-6);
        assert!((layout.resolved_widths().get(Col::B).unwrap() - 200.0).abs() < 1e-6);
    }

    #[test]
    fn unknown_font_size_falls_back() {
        let stored = prefs(&[], &[], "gigantic");

        let layout = TableLayout::hydrate(shared_catalog(), Some(&stored));

        assert_eq!(layout.font_size(), FontSize::Medium);
    }

    #[test]
    fn snapshot_uses_column_keys() {
        let layout = TableLayout::new(shared_catalog());

        let prefs = layout.preferences();

        assert_eq!(prefs.visible_columns, vec!["a", "b", "c"]);
        assert_eq!(
            prefs.fractions.keys().collect::<Vec<_>>(),
            vec!["a", "b", "c", "d"]
        );
        assert_eq!(prefs.font_size, "medium");
    }
}
