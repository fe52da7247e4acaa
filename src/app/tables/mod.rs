//! The two ledger tables shown by the viewer and how their rows map onto
//! columns.

pub mod positions;
pub mod trades;

use ledgerview_domain::ColumnId;

use crate::layout::SortableRow;

pub use positions::PositionColumn;
pub use trades::TradeColumn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableKind {
    #[default]
    Positions,
    Trades,
}

impl TableKind {
    pub const ALL: [Self; 2] = [Self::Positions, Self::Trades];

    pub fn title(self) -> &'static str {
        match self {
            Self::Positions => "Positions",
            Self::Trades => "Trades",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Positions => Self::Trades,
            Self::Trades => Self::Positions,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellAlign {
    Left,
    Right,
}

pub trait LedgerColumn: ColumnId {
    fn align(self) -> CellAlign {
        CellAlign::Left
    }
}

pub trait LedgerRow<C>: SortableRow<C> {
    /// Display text of one cell; empty for missing values.
    fn cell(&self, column: C) -> String;
}

/// Two decimals with thousands separators: `-12,345.60`.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let formatted = format!("{:.2}", value.abs());
    let (whole, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

/// Quantities drop trailing zeros: `12`, `0.5`, `1,000.25`.
pub fn format_quantity(value: f64) -> String {
    let amount = format_amount(value);
    amount
        .strip_suffix(".00")
        .map(str::to_string)
        .or_else(|| amount.strip_suffix('0').map(str::to_string))
        .unwrap_or(amount)
}
