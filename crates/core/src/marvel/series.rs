//! Series title parsing
//!
//! Marvel encodes the run years into the series title, e.g.
//! `"Spider-Woman (2009 - 2014)"`. This module splits such a title into a
//! display name and a start year.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Name and start year extracted from a series title
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct SeriesDetail {
    pub name: String,
    /// Four-digit year, or empty when the title carries none
    pub start_year: String,
}

fn series_pattern() -> &'static Regex {
    static RE_SERIES: OnceLock<Regex> = OnceLock::new();
    RE_SERIES.get_or_init(|| Regex::new(r"^(.+) \(([0-9]{4}).*\)").unwrap())
}

/// Split a series title into its name and start year
///
/// Titles that do not follow the `<name> (<yyyy>...)` shape are returned
/// unchanged with an empty start year, so callers always get a usable name.
pub fn parse_series_title(title: &str) -> SeriesDetail {
    log::debug!("Extracting details from series: {}", title);

    if let Some(caps) = series_pattern().captures(title) {
        let name = caps[1].trim().to_string();
        let start_year = caps[2].to_string();
        log::debug!("Found values: name={} volume={}", name, start_year);
        return SeriesDetail { name, start_year };
    }

    log::debug!("No series detail extracted: returning full name");
    SeriesDetail {
        name: title.to_string(),
        start_year: String::new(),
    }
}
