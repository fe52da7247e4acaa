use std::collections::HashSet;

use thiserror::Error;

use crate::column::{ColumnId, ColumnSpec, Width};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog for `{0}` has no columns")]
    Empty(&'static str),
    #[error("column `{0}` is declared more than once")]
    DuplicateColumn(&'static str),
    #[error("column `{0}` must have 0 < min_width <= default_width")]
    InvalidWidth(&'static str),
    #[error("catalog for `{0}` has no column visible by default")]
    NothingVisible(&'static str),
}

/// Static per-table column declaration.
///
/// The order of `specs` is the canonical column order and never changes at
/// runtime. `table_kind` namespaces the table's persisted preferences.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnCatalog<C: ColumnId> {
    table_kind: &'static str,
    specs: Vec<ColumnSpec<C>>,
}

impl<C: ColumnId> ColumnCatalog<C> {
    pub fn new(table_kind: &'static str, specs: Vec<ColumnSpec<C>>) -> Result<Self, CatalogError> {
        if specs.is_empty() {
            return Err(CatalogError::Empty(table_kind));
        }

        let mut seen = HashSet::with_capacity(specs.len());
        for spec in &specs {
            if !seen.insert(spec.id) {
                return Err(CatalogError::DuplicateColumn(spec.id.key()));
            }
            let widths_ok = spec.min_width.is_finite()
                && spec.default_width.is_finite()
                && spec.min_width > 0.0
                && spec.min_width <= spec.default_width;
            if !widths_ok {
                return Err(CatalogError::InvalidWidth(spec.id.key()));
            }
        }

        if !specs.iter().any(|spec| spec.default_visible) {
            return Err(CatalogError::NothingVisible(table_kind));
        }

        Ok(Self { table_kind, specs })
    }

    pub fn table_kind(&self) -> &'static str {
        self.table_kind
    }

    pub fn specs(&self) -> &[ColumnSpec<C>] {
        &self.specs
    }

    pub fn spec(&self, id: C) -> Option<&ColumnSpec<C>> {
        self.specs.iter().find(|spec| spec.id == id)
    }

    pub fn order(&self) -> impl Iterator<Item = C> + '_ {
        self.specs.iter().map(|spec| spec.id)
    }

    pub fn position(&self, id: C) -> Option<usize> {
        self.specs.iter().position(|spec| spec.id == id)
    }

    pub fn contains(&self, id: C) -> bool {
        self.spec(id).is_some()
    }

    /// Columns not in the catalog have no minimum.
    pub fn min_width(&self, id: C) -> Width {
        self.spec(id).map_or(0.0, |spec| spec.min_width)
    }

    pub fn is_required(&self, id: C) -> bool {
        self.spec(id).is_some_and(|spec| spec.required)
    }

    pub fn default_visible(&self) -> impl Iterator<Item = C> + '_ {
        self.specs
            .iter()
            .filter(|spec| spec.default_visible || spec.required)
            .map(|spec| spec.id)
    }

    pub fn required(&self) -> impl Iterator<Item = C> + '_ {
        self.specs
            .iter()
            .filter(|spec| spec.required)
            .map(|spec| spec.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::test_columns::Abc;

    fn spec(id: Abc) -> ColumnSpec<Abc> {
        ColumnSpec::new(id, "col", 200.0, 100.0)
    }

    #[test]
    fn accepts_valid_catalog() {
        let catalog =
            ColumnCatalog::new("abc", vec![spec(Abc::A).required(), spec(Abc::B), spec(Abc::C)])
                .unwrap();

        assert_eq!(catalog.table_kind(), "abc");
        assert_eq!(catalog.order().collect::<Vec<_>>(), vec![Abc::A, Abc::B, Abc::C]);
        assert_eq!(catalog.required().collect::<Vec<_>>(), vec![Abc::A]);
        assert_eq!(catalog.min_width(Abc::B), 100.0);
    }

    #[test]
    fn rejects_empty_catalog() {
        assert_eq!(
            ColumnCatalog::<Abc>::new("abc", vec![]),
            Err(CatalogError::Empty("abc"))
        );
    }

    #[test]
    fn rejects_duplicate_columns() {
        let result = ColumnCatalog::new("abc", vec![spec(Abc::A), spec(Abc::A)]);

        assert_eq!(result, Err(CatalogError::DuplicateColumn("a")));
    }

    #[test]
    fn rejects_min_above_default() {
        let result = ColumnCatalog::new("abc", vec![ColumnSpec::new(Abc::A, "A", 50.0, 60.0)]);

        assert_eq!(result, Err(CatalogError::InvalidWidth("a")));
    }

    #[test]
    fn rejects_zero_min_width() {
        let result = ColumnCatalog::new("abc", vec![ColumnSpec::new(Abc::A, "A", 50.0, 0.0)]);

        assert_eq!(result, Err(CatalogError::InvalidWidth("a")));
    }

    #[test]
    fn rejects_catalog_with_nothing_visible() {
        let result = ColumnCatalog::new(
            "abc",
            vec![spec(Abc::A).hidden_by_default(), spec(Abc::B).hidden_by_default()],
        );

        assert_eq!(result, Err(CatalogError::NothingVisible("abc")));
    }

    #[test]
    fn unknown_column_has_zero_min_width() {
        let catalog = ColumnCatalog::new("abc", vec![spec(Abc::A)]).unwrap();

        assert!(!catalog.contains(Abc::B));
        assert_eq!(catalog.min_width(Abc::B), 0.0);
    }
}
