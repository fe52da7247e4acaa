//! Adaptive column layout engine, generic over a table's column enum.

pub mod action;
pub mod drag;
pub mod effect;
pub mod fraction;
pub mod reducer;
pub mod resolver;
pub mod sort;
pub mod table_layout;
pub mod visibility;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use action::LayoutAction;
pub use drag::DragContext;
pub use effect::LayoutEffect;
pub use fraction::FractionModel;
pub use reducer::reduce_layout;
pub use resolver::{ColumnInput, ResolvedWidths, quantize, resolve};
pub use sort::{SortState, SortableRow};
pub use table_layout::{ColumnMenuEntry, TableLayout};
pub use visibility::VisibilitySet;
