use thiserror::Error;

#[derive(Error, Debug)]
pub enum CookieError {
    #[error("Configuration error for {field}: {reason}")]
    ConfigError { field: String, reason: String },

    #[error("Malformed log record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CookieError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            CookieError::ConfigError { field, reason } => {
                format!("Invalid value for {}: {}", field, reason)
            }
            CookieError::MalformedRecord { line, reason } => {
                format!("Cookie log is malformed at line {}: {}", line, reason)
            }
            CookieError::CsvError(e) => format!("Failed to read the cookie log: {}", e),
            CookieError::IoError(e) => format!("Unexpected I/O failure: {}", e),
        }
    }

    /// Exit code per error category, so callers can tell "your input is bad"
    /// apart from "the tool itself broke".
    pub fn exit_code(&self) -> i32 {
        match self {
            CookieError::ConfigError { .. } => 2,
            CookieError::MalformedRecord { .. } => 3,
            CookieError::CsvError(_) | CookieError::IoError(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CookieError>;
