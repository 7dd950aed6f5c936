//! Transformation functions for Marvel API records

use super::dates::{cover_date, extract_date, store_date, ON_SALE_DATE};
use super::records::{CreditRecord, IssueDetailsRecord, IssueRecord, VolumeRecord};
use super::series::parse_series_title;
use super::wire::{MarvelComicRecord, MarvelSeriesRecord, MarvelUrl};
use super::PUBLISHER_NAME;

/// Url type of the public issue page
const DETAIL_URL_TYPE: &str = "detail";

/// Transform a series search result into a volume record
///
/// The name and start year come from the title; when the title carries no
/// year the wire `startYear` counter is used instead.
pub fn transform_volume(record: MarvelSeriesRecord) -> VolumeRecord {
    log::trace!(
        "Processing volume record: {} name={}",
        record.id,
        record.title
    );
    let detail = parse_series_title(&record.title);
    let start_year = if detail.start_year.is_empty() {
        record
            .start_year
            .filter(|year| *year > 0)
            .map(|year| year.to_string())
            .unwrap_or_default()
    } else {
        detail.start_year
    };

    VolumeRecord {
        id: record.id,
        name: detail.name,
        start_year,
        publisher: PUBLISHER_NAME.to_string(),
        issue_count: record.comics.available,
        image_url: record.thumbnail.map(|t| t.to_url()),
    }
}

/// Transform a comic from a single-issue search into an issue record
///
/// Both dates come from the on-sale entry; the final-order-cutoff date is not
/// consulted for this query.
pub fn transform_issue(series_id: &str, record: MarvelComicRecord) -> IssueRecord {
    let on_sale = extract_date(ON_SALE_DATE, &record.dates);

    IssueRecord {
        id: record.id,
        volume_id: series_id.to_string(),
        name: record.series.name.clone(),
        volume_name: record.series.name,
        description: non_empty(record.description),
        cover_date: on_sale,
        store_date: on_sale,
        cover_url: record.thumbnail.map(|t| t.to_url()),
    }
}

/// Transform a comic from a series listing into an issue details record
pub fn transform_series_issue(record: MarvelComicRecord) -> IssueDetailsRecord {
    build_details(record, None)
}

/// Transform a comic from the details endpoint, including its web address
pub fn transform_issue_details(record: MarvelComicRecord) -> IssueDetailsRecord {
    let web_address = find_detail_url(&record.urls);
    build_details(record, web_address)
}

fn build_details(record: MarvelComicRecord, web_address: Option<String>) -> IssueDetailsRecord {
    log::trace!(
        "Processing issue record: {} name={}",
        record.id,
        record.title
    );
    let detail = parse_series_title(&record.series.name);

    IssueDetailsRecord {
        source_id: record.id,
        publisher: PUBLISHER_NAME.to_string(),
        series: detail.name,
        volume: detail.start_year,
        issue_number: record.issue_number.unwrap_or_default(),
        title: record.title,
        cover_date: cover_date(&record.dates),
        store_date: store_date(&record.dates),
        description: non_empty(record.description),
        web_address,
        credits: record
            .creators
            .items
            .into_iter()
            .map(|c| CreditRecord {
                name: c.name,
                role: c.role,
            })
            .collect(),
    }
}

fn find_detail_url(urls: &[MarvelUrl]) -> Option<String> {
    urls.iter()
        .find(|u| u.url_type == DETAIL_URL_TYPE)
        .map(|u| u.url.clone())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
