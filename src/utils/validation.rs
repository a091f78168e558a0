use std::path::Path;

use crate::utils::error::{CookieError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_regular_file(field_name: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(CookieError::ConfigError {
            field: field_name.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if !path.exists() {
        return Err(CookieError::ConfigError {
            field: field_name.to_string(),
            reason: format!("File does not exist: {}", path.display()),
        });
    }

    if !path.is_file() {
        return Err(CookieError::ConfigError {
            field: field_name.to_string(),
            reason: format!("Not a regular file: {}", path.display()),
        });
    }

    Ok(())
}
