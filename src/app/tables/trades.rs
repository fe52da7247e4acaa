use ledgerview_domain::{CatalogError, ColumnCatalog, ColumnId, ColumnSpec, SortValue, Trade};

use super::{CellAlign, LedgerColumn, LedgerRow, format_amount, format_quantity};
use crate::layout::SortableRow;

pub const TABLE_KIND: &str = "trades";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TradeColumn {
    Date,
    Account,
    Instrument,
    Side,
    Quantity,
    Price,
    Amount,
    Fees,
    Note,
}

impl ColumnId for TradeColumn {
    const ALL: &'static [Self] = &[
        Self::Date,
        Self::Account,
        Self::Instrument,
        Self::Side,
        Self::Quantity,
        Self::Price,
        Self::Amount,
        Self::Fees,
        Self::Note,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Account => "account",
            Self::Instrument => "instrument",
            Self::Side => "side",
            Self::Quantity => "quantity",
            Self::Price => "price",
            Self::Amount => "amount",
            Self::Fees => "fees",
            Self::Note => "note",
        }
    }
}

impl LedgerColumn for TradeColumn {
    fn align(self) -> CellAlign {
        match self {
            Self::Quantity | Self::Price | Self::Amount | Self::Fees => CellAlign::Right,
            _ => CellAlign::Left,
        }
    }
}

pub fn catalog() -> Result<ColumnCatalog<TradeColumn>, CatalogError> {
    ColumnCatalog::new(
        TABLE_KIND,
        vec![
            ColumnSpec::new(TradeColumn::Date, "Date", 12.0, 10.0)
                .required()
                .recency(),
            ColumnSpec::new(TradeColumn::Account, "Account", 16.0, 8.0),
            ColumnSpec::new(TradeColumn::Instrument, "Instrument", 14.0, 8.0).required(),
            ColumnSpec::new(TradeColumn::Side, "Side", 6.0, 4.0),
            ColumnSpec::new(TradeColumn::Quantity, "Quantity", 10.0, 8.0),
            ColumnSpec::new(TradeColumn::Price, "Price", 10.0, 8.0),
            ColumnSpec::new(TradeColumn::Amount, "Amount", 14.0, 10.0),
            ColumnSpec::new(TradeColumn::Fees, "Fees", 8.0, 6.0).hidden_by_default(),
            ColumnSpec::new(TradeColumn::Note, "Note", 24.0, 8.0)
                .hidden_by_default()
                .unsortable(),
        ],
    )
}

impl SortableRow<TradeColumn> for Trade {
    fn sort_value(&self, column: TradeColumn) -> Option<SortValue> {
        match column {
            TradeColumn::Date => Some(SortValue::Date(self.trade_date.clone())),
            TradeColumn::Account => Some(SortValue::text(&self.account)),
            TradeColumn::Instrument => Some(SortValue::text(&self.instrument)),
            TradeColumn::Side => Some(SortValue::text(self.side.to_string())),
            TradeColumn::Quantity => Some(SortValue::Number(self.quantity)),
            TradeColumn::Price => Some(SortValue::Number(self.price)),
            TradeColumn::Amount => Some(SortValue::Number(self.amount())),
            TradeColumn::Fees => self.fees.map(SortValue::Number),
            TradeColumn::Note => None,
        }
    }

    fn row_id(&self) -> u64 {
        self.id
    }
}

impl LedgerRow<TradeColumn> for Trade {
    fn cell(&self, column: TradeColumn) -> String {
        match column {
            TradeColumn::Date => self.trade_date.clone(),
            TradeColumn::Account => self.account.clone(),
            TradeColumn::Instrument => self.instrument.clone(),
            TradeColumn::Side => self.side.to_string(),
            TradeColumn::Quantity => format_quantity(self.quantity),
            TradeColumn::Price => format_amount(self.price),
            TradeColumn::Amount => format_amount(self.amount()),
            TradeColumn::Fees => self.fees.map(format_amount).unwrap_or_default(),
            TradeColumn::Note => self.note.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SortState;
    use ledgerview_domain::{SortDirection, TradeSide};

    fn trade(id: u64, date: &str, side: TradeSide) -> Trade {
        Trade {
            id,
            trade_date: date.into(),
            account: "Brokerage".into(),
            instrument: "VTI".into(),
            side,
            quantity: 2.0,
            price: 100.0,
            fees: None,
            note: None,
        }
    }

    #[test]
    fn date_sorts_newest_first_on_first_click() {
        let catalog = catalog().unwrap();
        let mut rows = vec![
            trade(1, "2024-01-05", TradeSide::Buy),
            trade(2, "2024-03-01", TradeSide::Sell),
            trade(3, "2024-01-05", TradeSide::Sell),
        ];
        let mut sort = SortState::default();

        sort.click(&catalog, TradeColumn::Date);
        sort.sort_rows(&mut rows);

        assert_eq!(sort.direction, SortDirection::Descending);
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 1, 3]);
    }

    #[test]
    fn note_is_not_sortable() {
        let catalog = catalog().unwrap();
        let mut sort = SortState::default();

        assert!(!sort.click(&catalog, TradeColumn::Note));
    }

    #[test]
    fn cells_format_signed_amounts() {
        let buy = trade(1, "2024-01-05", TradeSide::Buy);

        assert_eq!(buy.cell(TradeColumn::Amount), "-200.00");
        assert_eq!(buy.cell(TradeColumn::Side), "Buy");
        assert_eq!(buy.cell(TradeColumn::Fees), "");
    }
}
