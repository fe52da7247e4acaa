pub mod catalog;
pub mod column;
pub mod font_size;
pub mod ledger;
pub mod preferences;
pub mod sort;

pub use catalog::{CatalogError, ColumnCatalog};
pub use column::{ColumnId, ColumnSpec, Width};
pub use font_size::FontSize;
pub use ledger::{Position, Trade, TradeSide};
pub use preferences::LayoutPreferences;
pub use sort::{SortDirection, SortValue};
