use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};

use crate::core::record::LogRecord;
use crate::utils::error::Result;

/// Scans a cookie log and returns the cookie(s) seen most often on the target
/// UTC date, sorted lexicographically. Empty when no record matches the date.
///
/// The first row is a header and is discarded regardless of content. The scan
/// is a single forward pass; counting is order-independent, but when the log
/// is sorted newest-first the scan stops as soon as it has moved past the
/// target date's section.
pub fn find_most_active<R: Read>(input: R, target_date: NaiveDate) -> Result<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);

    let mut counts: HashMap<String, u32> = HashMap::new();
    let mut seen_target_date = false;

    for row in reader.records() {
        let row = row?;
        if is_blank(&row) {
            continue;
        }

        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let record = LogRecord::from_row(&row, line)?;

        match record.utc_date().cmp(&target_date) {
            // Newer than the target: stray future-dated rows are tolerated.
            Ordering::Greater => continue,
            Ordering::Equal => {
                *counts.entry(record.cookie).or_insert(0) += 1;
                seen_target_date = true;
            }
            Ordering::Less => {
                if seen_target_date {
                    // Newest-first input: the target date's section is behind us.
                    tracing::debug!(line, "past target date section, stopping scan early");
                    break;
                }
            }
        }
    }

    Ok(extract_max_cookies(counts))
}

/// Opens the log file and runs [`find_most_active`] over it. The file handle
/// is released on every exit path, early stop and errors included.
pub fn find_most_active_in_file(path: &Path, target_date: NaiveDate) -> Result<Vec<String>> {
    tracing::debug!(path = %path.display(), %target_date, "scanning cookie log");
    let file = File::open(path)?;
    find_most_active(file, target_date)
}

fn is_blank(row: &StringRecord) -> bool {
    row.len() == 1 && row[0].is_empty()
}

fn extract_max_cookies(counts: HashMap<String, u32>) -> Vec<String> {
    let max = counts.values().copied().max().unwrap_or(0);
    if max == 0 {
        return Vec::new();
    }

    let mut winners: Vec<String> = counts
        .into_iter()
        .filter(|(_, count)| *count == max)
        .map(|(cookie, _)| cookie)
        .collect();
    winners.sort_unstable();
    winners
}
