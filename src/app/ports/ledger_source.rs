use std::path::PathBuf;

use ledgerview_domain::{Position, Trade};

#[derive(Debug, thiserror::Error)]
pub enum LedgerSourceError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed record in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

pub trait LedgerSource {
    fn positions(&self) -> Result<Vec<Position>, LedgerSourceError>;

    fn trades(&self) -> Result<Vec<Trade>, LedgerSourceError>;
}
