use std::fmt::Debug;
use std::hash::Hash;

use crate::sort::SortDirection;

/// Width in layout units (terminal cells in the TUI host).
pub type Width = f64;

/// Identifier of a column within one table kind.
///
/// Implemented by a fieldless enum per table. `key()` is written to the
/// preference store, so it must never change once released.
pub trait ColumnId: Copy + Eq + Ord + Hash + Debug + 'static {
    /// Every column of the table, in canonical display order.
    const ALL: &'static [Self];

    fn key(self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|column| column.key() == key)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec<C: ColumnId> {
    pub id: C,
    pub title: &'static str,
    pub default_width: Width,
    pub min_width: Width,
    pub required: bool,
    pub default_visible: bool,
    /// `None` marks the column as not sortable.
    pub default_sort: Option<SortDirection>,
}

impl<C: ColumnId> ColumnSpec<C> {
    pub const fn new(id: C, title: &'static str, default_width: Width, min_width: Width) -> Self {
        Self {
            id,
            title,
            default_width,
            min_width,
            required: false,
            default_visible: true,
            default_sort: Some(SortDirection::Ascending),
        }
    }

    /// Required columns are always visible.
    pub const fn required(mut self) -> Self {
        self.required = true;
        self.default_visible = true;
        self
    }

    pub const fn hidden_by_default(mut self) -> Self {
        self.default_visible = false;
        self
    }

    /// Recency columns (dates, last-updated) sort newest first on first click.
    pub const fn recency(mut self) -> Self {
        self.default_sort = Some(SortDirection::Descending);
        self
    }

    pub const fn unsortable(mut self) -> Self {
        self.default_sort = None;
        self
    }

    pub fn is_sortable(&self) -> bool {
        self.default_sort.is_some()
    }
}
