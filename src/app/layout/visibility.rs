use ledgerview_domain::{ColumnCatalog, ColumnId};

/// Visible columns in catalog order.
///
/// Invariant: non-empty, contains every required column, and only catalog
/// columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilitySet<C: ColumnId> {
    columns: Vec<C>,
}

impl<C: ColumnId> VisibilitySet<C> {
    pub fn defaults(catalog: &ColumnCatalog<C>) -> Self {
        Self {
            columns: catalog.default_visible().collect(),
        }
    }

    /// Keeps catalog columns only and adds missing required ones. `None` when
    /// nothing usable remains.
    pub fn from_columns(catalog: &ColumnCatalog<C>, columns: impl IntoIterator<Item = C>) -> Option<Self> {
        let requested: Vec<C> = columns.into_iter().collect();
        let columns: Vec<C> = catalog
            .order()
            .filter(|id| requested.contains(id) || catalog.is_required(*id))
            .collect();
        if columns.is_empty() {
            None
        } else {
            Some(Self { columns })
        }
    }

    pub fn as_slice(&self) -> &[C] {
        &self.columns
    }

    pub fn contains(&self, column: C) -> bool {
        self.columns.contains(&column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Hiding is allowed only for optional columns while another stays visible.
    pub fn can_hide(&self, catalog: &ColumnCatalog<C>, column: C) -> bool {
        self.contains(column) && self.columns.len() > 1 && !catalog.is_required(column)
    }

    /// Flips `column`; returns whether the set changed. Refused hides and
    /// unknown columns are silent no-ops.
    pub fn toggle(&mut self, catalog: &ColumnCatalog<C>, column: C) -> bool {
        if self.contains(column) {
            if !self.can_hide(catalog, column) {
                return false;
            }
            self.columns.retain(|id| *id != column);
            return true;
        }
        if !catalog.contains(column) {
            return false;
        }
        let requested = self.columns.iter().copied().chain([column]).collect::<Vec<_>>();
        self.columns = catalog
            .order()
            .filter(|id| requested.contains(id))
            .collect();
        true
    }

    /// Next visible column after `column` in catalog order.
    pub fn next_after(&self, column: C) -> Option<C> {
        let index = self.columns.iter().position(|id| *id == column)?;
        self.columns.get(index + 1).copied()
    }

    pub fn previous_before(&self, column: C) -> Option<C> {
        let index = self.columns.iter().position(|id| *id == column)?;
        index.checked_sub(1).and_then(|i| self.columns.get(i).copied())
    }
}
