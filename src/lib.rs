pub mod config;
pub mod core;
pub mod utils;

pub use config::CliConfig;
pub use crate::core::record::LogRecord;
pub use crate::core::scanner::{find_most_active, find_most_active_in_file};
pub use utils::error::{CookieError, Result};
