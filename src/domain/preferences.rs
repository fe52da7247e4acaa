use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Persisted layout of one table, keyed by raw column identifiers.
///
/// Every field defaults when absent so that older or newer files load; the
/// values are sanitized against the catalog on hydration, not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutPreferences {
    pub visible_columns: Vec<String>,
    pub fractions: BTreeMap<String, f64>,
    pub font_size: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case_shape() {
        let prefs = LayoutPreferences {
            visible_columns: vec!["account".into(), "value".into()],
            fractions: BTreeMap::from([("account".into(), 0.25), ("value".into(), 0.75)]),
            font_size: "small".into(),
        };

        let json = serde_json::to_value(&prefs).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "visibleColumns": ["account", "value"],
                "fractions": {"account": 0.25, "value": 0.75},
                "fontSize": "small",
            })
        );
    }

    #[test]
    fn missing_and_unknown_keys_fall_back_to_defaults() {
        let prefs: LayoutPreferences =
            serde_json::from_str(r#"{"fontSize": "large", "columnOrder": ["x"]}"#).unwrap();

        assert!(prefs.visible_columns.is_empty());
        assert!(prefs.fractions.is_empty());
        assert_eq!(prefs.font_size, "large");
    }
}
