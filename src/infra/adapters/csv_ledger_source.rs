use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use ledgerview_app::ports::ledger_source::{LedgerSource, LedgerSourceError};
use ledgerview_domain::{Position, Trade};
use log::debug;
use serde::de::DeserializeOwned;

pub const POSITIONS_FILE: &str = "positions.csv";
pub const TRADES_FILE: &str = "trades.csv";

/// Reads `positions.csv` and `trades.csv` (with headers) from one directory.
/// A missing file is an empty table.
pub struct CsvLedgerSource {
    data_dir: PathBuf,
}

impl CsvLedgerSource {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LedgerSourceError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("{} not found, table left empty", path.display());
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(LedgerSourceError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);
    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| LedgerSourceError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

impl LedgerSource for CsvLedgerSource {
    fn positions(&self) -> Result<Vec<Position>, LedgerSourceError> {
        read_records(&self.data_dir.join(POSITIONS_FILE))
    }

    fn trades(&self) -> Result<Vec<Trade>, LedgerSourceError> {
        read_records(&self.data_dir.join(TRADES_FILE))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use ledgerview_domain::TradeSide;
    use tempfile::TempDir;

    #[test]
    fn reads_positions_with_optional_fields() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(POSITIONS_FILE),
            "id,account,instrument,asset_class,quantity,price,updated_at\n\
             1,Brokerage,VTI,Equity,10,250.5,2024-03-01\n\
             2,IRA,BND,Bond,5,,\n",
        )
        .unwrap();
        let source = CsvLedgerSource::new(temp_dir.path().to_path_buf());

        let positions = source.positions().unwrap();

        assert_eq!(positions.len(), 2);
        assert_eq!(positions[0].price, Some(250.5));
        assert_eq!(positions[0].updated_at.as_deref(), Some("2024-03-01"));
        assert_eq!(positions[1].price, None);
        assert_eq!(positions[1].updated_at, None);
    }

    #[test]
    fn reads_trades() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(TRADES_FILE),
            "id,trade_date,account,instrument,side,quantity,price,fees,note\n\
             7,2024-02-10,IRA,VXUS,sell,3,60,1.5,rebalance\n",
        )
        .unwrap();
        let source = CsvLedgerSource::new(temp_dir.path().to_path_buf());

        let trades = source.trades().unwrap();

        assert_eq!(trades[0].side, TradeSide::Sell);
        assert_eq!(trades[0].fees, Some(1.5));
        assert_eq!(trades[0].note.as_deref(), Some("rebalance"));
    }

    #[test]
    fn missing_file_is_an_empty_table() {
        let temp_dir = TempDir::new().unwrap();
        let source = CsvLedgerSource::new(temp_dir.path().to_path_buf());

        assert!(source.trades().unwrap().is_empty());
    }

    #[test]
    fn malformed_row_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(TRADES_FILE),
            "id,trade_date,account,instrument,side,quantity,price,fees,note\n\
             1,2024-02-10,IRA,VXUS,hold,3,60,,\n",
        )
        .unwrap();
        let source = CsvLedgerSource::new(temp_dir.path().to_path_buf());

        assert!(matches!(
            source.trades(),
            Err(LedgerSourceError::Parse { .. })
        ));
    }
}
