//! Small four-column table used by layout tests.

use std::sync::Arc;

use ledgerview_domain::{ColumnCatalog, ColumnId, ColumnSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Col {
    A,
    B,
    C,
    D,
}

impl ColumnId for Col {
    const ALL: &'static [Self] = &[Self::A, Self::B, Self::C, Self::D];

    fn key(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
        }
    }
}

/// A, B, C: default 200, min 100, visible (A required). D: default 100,
/// min 50, hidden, recency-sorted.
pub fn catalog() -> ColumnCatalog<Col> {
    ColumnCatalog::new(
        "test",
        vec![
            ColumnSpec::new(Col::A, "A", 200.0, 100.0).required(),
            ColumnSpec::new(Col::B, "B", 200.0, 100.0),
            ColumnSpec::new(Col::C, "C", 200.0, 100.0).unsortable(),
            ColumnSpec::new(Col::D, "D", 100.0, 50.0)
                .hidden_by_default()
                .recency(),
        ],
    )
    .expect("test catalog is valid")
}

pub fn shared_catalog() -> Arc<ColumnCatalog<Col>> {
    Arc::new(catalog())
}
