use ledgerview_domain::LayoutPreferences;

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutEffect {
    /// Write the table's preferences under its table kind.
    Persist {
        table_kind: &'static str,
        preferences: LayoutPreferences,
    },
}
