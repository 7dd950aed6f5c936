//! Tagged date extraction
//!
//! Issue records carry a list of `{type, date}` entries. The service sometimes
//! emits placeholder values such as `-0001-11-30T00:00:00-0500`; those, and any
//! other value that does not parse, become `None` instead of failing the call.

use chrono::{DateTime, Datelike, NaiveDate};

use super::wire::MarvelDate;

/// Wire tag for the on-sale (store) date
pub const ON_SALE_DATE: &str = "onsaleDate";

/// Wire tag for the final-order-cutoff date, used as the cover date
pub const FOC_DATE: &str = "focDate";

const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Find the first entry tagged `tag` and parse its date
pub fn extract_date(tag: &str, dates: &[MarvelDate]) -> Option<NaiveDate> {
    let entry = dates.iter().find(|entry| entry.date_type == tag)?;
    parse_date(&entry.date)
}

/// Cover date (final-order-cutoff)
pub fn cover_date(dates: &[MarvelDate]) -> Option<NaiveDate> {
    extract_date(FOC_DATE, dates)
}

/// Store date (on-sale)
pub fn store_date(dates: &[MarvelDate]) -> Option<NaiveDate> {
    extract_date(ON_SALE_DATE, dates)
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    match DateTime::parse_from_str(value, DATE_FORMAT) {
        Ok(parsed) if parsed.year() >= 1 => Some(parsed.date_naive()),
        Ok(_) => {
            log::warn!("Ignoring placeholder date: {}", value);
            None
        }
        Err(err) => {
            log::warn!("Failed to parse date {}: {}", value, err);
            None
        }
    }
}
