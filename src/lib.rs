pub use ledgerview_app as app;
pub use ledgerview_domain as domain;
pub use ledgerview_infra as infra;
pub use ledgerview_ui as ui;

pub mod error;
pub mod logging;
