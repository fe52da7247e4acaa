use ledgerview_domain::{CatalogError, ColumnCatalog, ColumnId, ColumnSpec, Position, SortValue};

use super::{CellAlign, LedgerColumn, LedgerRow, format_amount, format_quantity};
use crate::layout::SortableRow;

pub const TABLE_KIND: &str = "positions";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PositionColumn {
    Account,
    Instrument,
    AssetClass,
    Quantity,
    Price,
    MarketValue,
    UpdatedAt,
}

impl ColumnId for PositionColumn {
    const ALL: &'static [Self] = &[
        Self::Account,
        Self::Instrument,
        Self::AssetClass,
        Self::Quantity,
        Self::Price,
        Self::MarketValue,
        Self::UpdatedAt,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Instrument => "instrument",
            Self::AssetClass => "assetClass",
            Self::Quantity => "quantity",
            Self::Price => "price",
            Self::MarketValue => "marketValue",
            Self::UpdatedAt => "updatedAt",
        }
    }
}

impl LedgerColumn for PositionColumn {
    fn align(self) -> CellAlign {
        match self {
            Self::Quantity | Self::Price | Self::MarketValue => CellAlign::Right,
            _ => CellAlign::Left,
        }
    }
}

pub fn catalog() -> Result<ColumnCatalog<PositionColumn>, CatalogError> {
    ColumnCatalog::new(
        TABLE_KIND,
        vec![
            ColumnSpec::new(PositionColumn::Account, "Account", 18.0, 10.0),
            ColumnSpec::new(PositionColumn::Instrument, "Instrument", 16.0, 8.0).required(),
            ColumnSpec::new(PositionColumn::AssetClass, "Class", 12.0, 6.0),
            ColumnSpec::new(PositionColumn::Quantity, "Quantity", 12.0, 8.0),
            ColumnSpec::new(PositionColumn::Price, "Price", 12.0, 8.0),
            ColumnSpec::new(PositionColumn::MarketValue, "Market Value", 16.0, 12.0),
            ColumnSpec::new(PositionColumn::UpdatedAt, "Updated", 12.0, 10.0)
                .hidden_by_default()
                .recency(),
        ],
    )
}

impl SortableRow<PositionColumn> for Position {
    fn sort_value(&self, column: PositionColumn) -> Option<SortValue> {
        match column {
            PositionColumn::Account => Some(SortValue::text(&self.account)),
            PositionColumn::Instrument => Some(SortValue::text(&self.instrument)),
            PositionColumn::AssetClass => Some(SortValue::text(&self.asset_class)),
            PositionColumn::Quantity => Some(SortValue::Number(self.quantity)),
            PositionColumn::Price => self.price.map(SortValue::Number),
            PositionColumn::MarketValue => self.market_value().map(SortValue::Number),
            PositionColumn::UpdatedAt => self.updated_at.clone().map(SortValue::Date),
        }
    }

    fn row_id(&self) -> u64 {
        self.id
    }
}

impl LedgerRow<PositionColumn> for Position {
    fn cell(&self, column: PositionColumn) -> String {
        match column {
            PositionColumn::Account => self.account.clone(),
            PositionColumn::Instrument => self.instrument.clone(),
            PositionColumn::AssetClass => self.asset_class.clone(),
            PositionColumn::Quantity => format_quantity(self.quantity),
            PositionColumn::Price => self.price.map(format_amount).unwrap_or_default(),
            PositionColumn::MarketValue => self.market_value().map(format_amount).unwrap_or_default(),
            PositionColumn::UpdatedAt => self.updated_at.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SortState;

    fn position(id: u64, account: &str, price: Option<f64>) -> Position {
        Position {
            id,
            account: account.into(),
            instrument: "VTI".into(),
            asset_class: "Equity".into(),
            quantity: 10.0,
            price,
            updated_at: None,
        }
    }

    #[test]
    fn catalog_is_valid_and_keys_are_unique() {
        let catalog = catalog().unwrap();

        assert_eq!(catalog.specs().len(), PositionColumn::ALL.len());
        for column in PositionColumn::ALL {
            assert_eq!(PositionColumn::from_key(column.key()), Some(*column));
        }
    }

    #[test]
    fn instrument_is_required_and_updated_hidden() {
        let catalog = catalog().unwrap();

        assert!(catalog.is_required(PositionColumn::Instrument));
        assert!(!catalog.default_visible().any(|c| c == PositionColumn::UpdatedAt));
    }

    #[test]
    fn missing_price_renders_blank_and_sorts_last() {
        let catalog = catalog().unwrap();
        let mut rows = vec![
            position(1, "A", None),
            position(2, "B", Some(5.0)),
            position(3, "C", Some(9.0)),
        ];
        let mut sort = SortState::default();
        sort.click(&catalog, PositionColumn::MarketValue);
        sort.click(&catalog, PositionColumn::MarketValue);

        sort.sort_rows(&mut rows);

        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(rows[2].cell(PositionColumn::MarketValue), "");
        assert_eq!(rows[0].cell(PositionColumn::MarketValue), "90.00");
    }
}
