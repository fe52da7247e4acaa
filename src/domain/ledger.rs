use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: u64,
    pub account: String,
    pub instrument: String,
    pub asset_class: String,
    pub quantity: f64,
    #[serde(default)]
    pub price: Option<f64>,
    /// ISO date of the last price or quantity change.
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Position {
    pub fn market_value(&self) -> Option<f64> {
        self.price.map(|price| price * self.quantity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => f.write_str("Buy"),
            Self::Sell => f.write_str("Sell"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: u64,
    pub trade_date: String,
    pub account: String,
    pub instrument: String,
    pub side: TradeSide,
    pub quantity: f64,
    pub price: f64,
    #[serde(default)]
    pub fees: Option<f64>,
    #[serde(default)]
    pub note: Option<String>,
}

impl Trade {
    /// Signed cash effect: buys are negative.
    pub fn amount(&self) -> f64 {
        let gross = self.quantity * self.price;
        let fees = self.fees.unwrap_or_default();
        match self.side {
            TradeSide::Buy => -(gross + fees),
            TradeSide::Sell => gross - fees,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trade(side: TradeSide, fees: Option<f64>) -> Trade {
        Trade {
            id: 1,
            trade_date: "2024-03-01".into(),
            account: "Brokerage".into(),
            instrument: "VTI".into(),
            side,
            quantity: 10.0,
            price: 20.0,
            fees,
            note: None,
        }
    }

    #[test]
    fn buy_amount_includes_fees_as_outflow() {
        assert_eq!(trade(TradeSide::Buy, Some(1.5)).amount(), -201.5);
    }

    #[test]
    fn sell_amount_subtracts_fees() {
        assert_eq!(trade(TradeSide::Sell, Some(1.5)).amount(), 198.5);
    }

    #[test]
    fn market_value_requires_price() {
        let mut position = Position {
            id: 1,
            account: "IRA".into(),
            instrument: "BND".into(),
            asset_class: "Bonds".into(),
            quantity: 4.0,
            price: None,
            updated_at: None,
        };
        assert_eq!(position.market_value(), None);

        position.price = Some(2.5);
        assert_eq!(position.market_value(), Some(10.0));
    }
}
