pub mod record;
pub mod scanner;

pub use self::record::LogRecord;
pub use self::scanner::{find_most_active, find_most_active_in_file};
