use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::utils::error::Result;
use crate::utils::validation::{validate_regular_file, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "most-active-cookie")]
#[command(about = "Finds the most active cookie(s) in a log for a given UTC day")]
pub struct CliConfig {
    /// Path to the cookie log CSV
    #[arg(short = 'f', long)]
    pub file: PathBuf,

    /// Target day as a UTC calendar date (yyyy-MM-dd)
    #[arg(short = 'd', long)]
    pub date: NaiveDate,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_regular_file("file", &self.file)
    }
}
