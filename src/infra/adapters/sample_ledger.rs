use ledgerview_app::ports::ledger_source::{LedgerSource, LedgerSourceError};
use ledgerview_domain::{Position, Trade, TradeSide};

/// Built-in ledger shown when no data directory is configured.
#[derive(Debug, Default)]
pub struct SampleLedger;

fn position(
    id: u64,
    account: &str,
    instrument: &str,
    asset_class: &str,
    quantity: f64,
    price: Option<f64>,
    updated_at: Option<&str>,
) -> Position {
    Position {
        id,
        account: account.to_string(),
        instrument: instrument.to_string(),
        asset_class: asset_class.to_string(),
        quantity,
        price,
        updated_at: updated_at.map(str::to_string),
    }
}

#[allow(clippy::too_many_arguments, reason = "one row of sample data")]
fn trade(
    id: u64,
    trade_date: &str,
    account: &str,
    instrument: &str,
    side: TradeSide,
    quantity: f64,
    price: f64,
    fees: Option<f64>,
    note: Option<&str>,
) -> Trade {
    Trade {
        id,
        trade_date: trade_date.to_string(),
        account: account.to_string(),
        instrument: instrument.to_string(),
        side,
        quantity,
        price,
        fees,
        note: note.map(str::to_string),
    }
}

impl LedgerSource for SampleLedger {
    fn positions(&self) -> Result<Vec<Position>, LedgerSourceError> {
        Ok(vec![
            position(1, "Brokerage", "VTI", "Equity", 120.0, Some(262.41), Some("2024-06-28")),
            position(2, "Brokerage", "VXUS", "Equity", 310.0, Some(59.87), Some("2024-06-28")),
            position(3, "Brokerage", "BND", "Bond", 95.0, Some(72.11), Some("2024-06-27")),
            position(4, "Roth IRA", "VTI", "Equity", 42.5, Some(262.41), Some("2024-06-28")),
            position(5, "Roth IRA", "VNQ", "Real Estate", 60.0, Some(82.05), Some("2024-06-21")),
            position(6, "401(k)", "Target 2055", "Fund", 1_204.332, Some(48.9), Some("2024-06-30")),
            position(7, "401(k)", "Stable Value", "Cash", 3_500.0, None, None),
            position(8, "Savings", "USD", "Cash", 18_250.0, Some(1.0), Some("2024-07-01")),
            position(9, "Brokerage", "Private Note", "Other", 1.0, None, Some("2023-11-15")),
        ])
    }

    fn trades(&self) -> Result<Vec<Trade>, LedgerSourceError> {
        Ok(vec![
            trade(1, "2024-01-03", "Brokerage", "VTI", TradeSide::Buy, 20.0, 236.1, Some(0.0), None),
            trade(2, "2024-01-03", "Brokerage", "VXUS", TradeSide::Buy, 50.0, 57.3, Some(0.0), None),
            trade(3, "2024-02-14", "Roth IRA", "VTI", TradeSide::Buy, 10.0, 245.8, None, Some("annual contribution")),
            trade(4, "2024-03-01", "Brokerage", "BND", TradeSide::Buy, 30.0, 72.4, Some(1.0), None),
            trade(5, "2024-03-28", "Brokerage", "VXUS", TradeSide::Sell, 15.0, 59.1, Some(1.0), Some("rebalance")),
            trade(6, "2024-04-15", "Roth IRA", "VNQ", TradeSide::Buy, 20.0, 79.6, None, None),
            trade(7, "2024-05-02", "Brokerage", "VTI", TradeSide::Sell, 5.0, 251.0, Some(1.0), Some("tax-loss harvest pair")),
            trade(8, "2024-05-02", "Brokerage", "ITOT", TradeSide::Buy, 10.0, 112.9, Some(1.0), Some("tax-loss harvest pair")),
            trade(9, "2024-06-20", "401(k)", "Target 2055", TradeSide::Buy, 40.667, 48.2, None, Some("payroll")),
            trade(10, "2024-06-28", "Brokerage", "BND", TradeSide::Sell, 5.0, 72.0, Some(1.0), None),
        ])
    }
}
