pub mod config;
pub mod error;
pub mod logging;

pub use config::CasebookConfig;
pub use error::CasebookError;
pub use logging::init_logging;
