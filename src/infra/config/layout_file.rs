use std::collections::BTreeMap;

use ledgerview_domain::LayoutPreferences;
use log::warn;
use serde_json::{Map, Value};

pub const CURRENT_VERSION: u32 = 1;

const VERSION_KEY: &str = "version";
const TABLES_KEY: &str = "tables";

#[derive(Debug, thiserror::Error)]
pub enum LayoutFileError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("top level is not a JSON object")]
    NotAnObject,
    #[error("missing or non-integer `version`")]
    MissingVersion,
}

/// On-disk shape of `layouts.json`: `{"version": 1, "tables": {kind: prefs}}`.
///
/// The document is kept as raw JSON so that a save only replaces its own
/// table; other tables and unknown keys are written back untouched. Tables are
/// decoded one at a time and leniently.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutFile {
    root: Map<String, Value>,
}

impl Default for LayoutFile {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutFile {
    pub fn new() -> Self {
        let mut root = Map::new();
        root.insert(VERSION_KEY.to_string(), Value::from(CURRENT_VERSION));
        root.insert(TABLES_KEY.to_string(), Value::Object(Map::new()));
        Self { root }
    }

    pub fn parse(content: &str) -> Result<Self, LayoutFileError> {
        match serde_json::from_str::<Value>(content)? {
            Value::Object(root) => {
                let file = Self { root };
                file.version().ok_or(LayoutFileError::MissingVersion)?;
                Ok(file)
            }
            _ => Err(LayoutFileError::NotAnObject),
        }
    }

    pub fn version(&self) -> Option<u32> {
        self.root
            .get(VERSION_KEY)
            .and_then(Value::as_u64)
            .and_then(|version| u32::try_from(version).ok())
    }

    /// `None` when the table is absent or its entry is not an object.
    pub fn table(&self, table_kind: &str) -> Option<LayoutPreferences> {
        let entry = self.tables()?.get(table_kind)?;
        match entry {
            Value::Object(fields) => Some(decode_preferences(table_kind, fields)),
            other => {
                warn!(
                    "ignoring stored layout of {table_kind}: expected an object, found {}",
                    kind_of(other)
                );
                None
            }
        }
    }

    pub fn set_table(&mut self, table_kind: &str, preferences: &LayoutPreferences) {
        let tables = self
            .root
            .entry(TABLES_KEY)
            .or_insert_with(|| Value::Object(Map::new()));
        if !tables.is_object() {
            warn!("replacing non-object `tables` in layout file");
            *tables = Value::Object(Map::new());
        }
        if let Value::Object(tables) = tables {
            tables.insert(table_kind.to_string(), encode_preferences(preferences));
        }
    }

    pub fn to_string_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.root)
    }

    fn tables(&self) -> Option<&Map<String, Value>> {
        self.root.get(TABLES_KEY)?.as_object()
    }
}

fn encode_preferences(preferences: &LayoutPreferences) -> Value {
    let fractions: Map<String, Value> = preferences
        .fractions
        .iter()
        .map(|(id, share)| (id.clone(), Value::from(*share)))
        .collect();
    let mut fields = Map::new();
    fields.insert(
        "visibleColumns".to_string(),
        Value::from(preferences.visible_columns.clone()),
    );
    fields.insert("fractions".to_string(), Value::Object(fractions));
    fields.insert(
        "fontSize".to_string(),
        Value::from(preferences.font_size.clone()),
    );
    Value::Object(fields)
}

/// Keeps every well-typed value and drops the rest with a warning, so one bad
/// entry never costs the rest of the table.
fn decode_preferences(table_kind: &str, fields: &Map<String, Value>) -> LayoutPreferences {
    let mut preferences = LayoutPreferences::default();

    match fields.get("visibleColumns") {
        None => {}
        Some(Value::Array(ids)) => {
            for id in ids {
                match id.as_str() {
                    Some(id) => preferences.visible_columns.push(id.to_string()),
                    None => warn!(
                        "{table_kind}: dropping non-string visible column {}",
                        kind_of(id)
                    ),
                }
            }
        }
        Some(other) => warn!(
            "{table_kind}: ignoring visibleColumns, expected an array, found {}",
            kind_of(other)
        ),
    }

    match fields.get("fractions") {
        None => {}
        Some(Value::Object(shares)) => {
            let mut fractions = BTreeMap::new();
            for (id, share) in shares {
                match share.as_f64() {
                    Some(share) => {
                        fractions.insert(id.clone(), share);
                    }
                    None => warn!(
                        "{table_kind}: dropping fraction of {id}, expected a number, found {}",
                        kind_of(share)
                    ),
                }
            }
            preferences.fractions = fractions;
        }
        Some(other) => warn!(
            "{table_kind}: ignoring fractions, expected an object, found {}",
            kind_of(other)
        ),
    }

    match fields.get("fontSize") {
        None => {}
        Some(Value::String(size)) => preferences.font_size = size.clone(),
        Some(other) => warn!(
            "{table_kind}: ignoring fontSize, expected a string, found {}",
            kind_of(other)
        ),
    }

    preferences
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
