pub mod ledger_source;
pub mod preference_store;
pub mod renderer;

pub use ledger_source::{LedgerSource, LedgerSourceError};
pub use preference_store::{PreferenceStore, PreferenceStoreError};
pub use renderer::Renderer;
