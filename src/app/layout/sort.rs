use ledgerview_domain::sort::compare_optional;
use ledgerview_domain::{ColumnCatalog, ColumnId, SortDirection, SortValue};

/// Row data as seen by the sort controller.
pub trait SortableRow<C> {
    /// `None` for absent values, which always sort last.
    fn sort_value(&self, column: C) -> Option<SortValue>;

    /// Unique, stable id used to break ties.
    fn row_id(&self) -> u64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<C> {
    pub column: Option<C>,
    pub direction: SortDirection,
}

impl<C> Default for SortState<C> {
    fn default() -> Self {
        Self {
            column: None,
            direction: SortDirection::Ascending,
        }
    }
}

impl<C: ColumnId> SortState<C> {
    /// Header click. Returns `false` for columns without a sort key.
    pub fn click(&mut self, catalog: &ColumnCatalog<C>, column: C) -> bool {
        let Some(default_direction) = catalog.spec(column).and_then(|spec| spec.default_sort)
        else {
            return false;
        };
        if self.column == Some(column) {
            self.direction = self.direction.toggled();
        } else {
            self.column = Some(column);
            self.direction = default_direction;
        }
        true
    }

    pub fn direction_for(&self, column: C) -> Option<SortDirection> {
        (self.column == Some(column)).then_some(self.direction)
    }

    /// Ties on the sort key fall back to the row id, ascending in both
    /// directions, so repeated sorts give the same order.
    pub fn sort_rows<R: SortableRow<C>>(&self, rows: &mut [R]) {
        let Some(column) = self.column else {
            rows.sort_by_key(|row| row.row_id());
            return;
        };
        let direction = self.direction;
        rows.sort_by(|a, b| {
            compare_optional(
                a.sort_value(column).as_ref(),
                b.sort_value(column).as_ref(),
                direction,
            )
            .then_with(|| a.row_id().cmp(&b.row_id()))
        });
    }
}
