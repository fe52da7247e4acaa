pub mod csv_ledger_source;
pub mod json_preference_store;
pub mod memory_preference_store;
pub mod sample_ledger;

pub use csv_ledger_source::CsvLedgerSource;
pub use json_preference_store::JsonPreferenceStore;
pub use memory_preference_store::MemoryPreferenceStore;
pub use sample_ledger::SampleLedger;
