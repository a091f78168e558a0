use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use csv::StringRecord;

use crate::utils::error::{CookieError, Result};

/// One row of the cookie log: a cookie identifier and the instant it was seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub cookie: String,
    pub timestamp: DateTime<FixedOffset>,
}

impl LogRecord {
    /// Parses one CSV data row into a validated record.
    ///
    /// Rejects rows that do not have exactly two columns, rows with a blank
    /// cookie or timestamp, and timestamps that are not RFC 3339 with an
    /// explicit UTC offset. Invalid fields are never defaulted.
    pub fn from_row(row: &StringRecord, line: u64) -> Result<Self> {
        if row.len() != 2 {
            return Err(CookieError::MalformedRecord {
                line,
                reason: format!("expected 2 columns, found {}", row.len()),
            });
        }

        let cookie = row[0].trim();
        let ts = row[1].trim();

        if cookie.is_empty() || ts.is_empty() {
            return Err(CookieError::MalformedRecord {
                line,
                reason: "blank cookie or timestamp".to_string(),
            });
        }

        let timestamp =
            DateTime::parse_from_rfc3339(ts).map_err(|e| CookieError::MalformedRecord {
                line,
                reason: format!("invalid timestamp '{}': {}", ts, e),
            })?;

        Ok(Self {
            cookie: cookie.to_string(),
            timestamp,
        })
    }

    /// The record's calendar date once its instant is converted to UTC.
    pub fn utc_date(&self) -> NaiveDate {
        self.timestamp.with_timezone(&Utc).date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_parses_valid_row() {
        let record = LogRecord::from_row(&row(&["AtY0laUfhglK3lC7", "2018-12-09T14:19:00+00:00"]), 2)
            .unwrap();
        assert_eq!(record.cookie, "AtY0laUfhglK3lC7");
        assert_eq!(record.utc_date(), NaiveDate::from_ymd_opt(2018, 12, 9).unwrap());
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let record =
            LogRecord::from_row(&row(&["  cookieA ", " 2018-12-09T14:19:00+00:00 "]), 2).unwrap();
        assert_eq!(record.cookie, "cookieA");
    }

    #[test]
    fn test_rejects_wrong_column_count() {
        assert!(LogRecord::from_row(&row(&["cookieA"]), 2).is_err());
        assert!(LogRecord::from_row(&row(&["cookieA", "2018-12-09T14:19:00+00:00", "extra"]), 2)
            .is_err());
    }

    #[test]
    fn test_rejects_blank_fields() {
        assert!(LogRecord::from_row(&row(&["", "2018-12-09T14:19:00+00:00"]), 2).is_err());
        assert!(LogRecord::from_row(&row(&["cookieA", "   "]), 2).is_err());
    }

    #[test]
    fn test_rejects_timestamp_without_offset() {
        assert!(LogRecord::from_row(&row(&["cookieA", "2018-12-09T14:19:00"]), 2).is_err());
        assert!(LogRecord::from_row(&row(&["cookieA", "not-a-timestamp"]), 2).is_err());
    }

    #[test]
    fn test_error_carries_line_number() {
        let err = LogRecord::from_row(&row(&["cookieA", "bad"]), 42).unwrap_err();
        assert!(err.to_string().contains("line 42"));
    }

    #[test]
    fn test_utc_date_normalizes_offsets() {
        // 23:30 at -05:00 is 04:30 the next day in UTC.
        let record =
            LogRecord::from_row(&row(&["cookieA", "2018-12-09T23:30:00-05:00"]), 2).unwrap();
        assert_eq!(record.utc_date(), NaiveDate::from_ymd_opt(2018, 12, 10).unwrap());

        // 01:00 at +05:00 is 20:00 the previous day in UTC.
        let record =
            LogRecord::from_row(&row(&["cookieA", "2018-12-09T01:00:00+05:00"]), 2).unwrap();
        assert_eq!(record.utc_date(), NaiveDate::from_ymd_opt(2018, 12, 8).unwrap());
    }
}
