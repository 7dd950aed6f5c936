//! Paginated fetch driver and the Marvel query kinds
//!
//! Each query kind supplies its endpoint path, query parameters, required
//! field checks, per-record mapping and an optional cap. [`fetch_all_pages`]
//! runs the shared loop: sign, fetch, decode, map, and stop once the page
//! counters say the result set is exhausted.

use comicmeta_core::error::require_field;
use comicmeta_core::marvel::auth::{check_credentials, Credentials};
use comicmeta_core::marvel::records::{IssueDetailsRecord, IssueRecord, VolumeRecord};
use comicmeta_core::marvel::transform::{
    transform_issue, transform_issue_details, transform_series_issue, transform_volume,
};
use comicmeta_core::marvel::wire::{MarvelComicRecord, MarvelSeriesRecord};
use comicmeta_core::pagination::{PageAccumulator, PageStatus};
use indicatif::ProgressBar;
use serde::de::DeserializeOwned;

use super::client::{create_url, fetch_page, Transport};
use crate::prelude::MetadataError;

/// One kind of paginated Marvel query
pub trait MarvelQuery {
    /// Wire record carried in `data.results`
    type Wire: DeserializeOwned;
    /// Canonical record handed back to callers
    type Output;

    /// Check required parameters before any request is made
    fn validate(&self) -> Result<(), MetadataError>;

    /// Endpoint path below `/v1/public/`
    fn path(&self) -> String;

    /// Pre-encoded query parameters, without auth parameters
    fn params(&self) -> String;

    fn map(&self, record: Self::Wire) -> Self::Output;

    /// Client-side cap on the number of records returned
    fn max_records(&self) -> Option<usize> {
        None
    }
}

/// Helper to set spinner message if spinner is present
fn set_spinner_msg(spinner: Option<&ProgressBar>, msg: impl Into<String>) {
    if let Some(s) = spinner {
        s.set_message(msg.into());
    }
}

/// Append the paging offset for every page after the first
fn page_params(params: &str, offset: u32) -> String {
    match (offset, params.is_empty()) {
        (0, _) => params.to_string(),
        (_, true) => format!("offset={}", offset),
        (_, false) => format!("{}&offset={}", params, offset),
    }
}

/// Fetch every page of a query and return the mapped records
///
/// Parameter and credential checks run before the first request. Any transport
/// or decoding failure aborts the whole call; records from earlier pages are
/// discarded rather than returned partially.
pub async fn fetch_all_pages<T, Q>(
    transport: &T,
    base_url: &str,
    credentials: &Credentials,
    query: &Q,
    spinner: Option<&ProgressBar>,
) -> Result<Vec<Q::Output>, MetadataError>
where
    T: Transport,
    Q: MarvelQuery,
{
    query.validate()?;
    check_credentials(credentials)?;

    let path = query.path();
    let params = query.params();
    let mut accumulator = match query.max_records() {
        Some(max) => PageAccumulator::with_max_records(max),
        None => PageAccumulator::default(),
    };

    let mut offset = 0;
    let mut page = 1;
    loop {
        if page > 1 {
            set_spinner_msg(
                spinner,
                format!(
                    "Fetching {} (page {}, {} found)...",
                    path,
                    page,
                    accumulator.len()
                ),
            );
        }
        log::trace!("Generating request URL: path={} offset={}", path, offset);
        let url = create_url(base_url, &path, &page_params(&params, offset), credentials);

        let response = fetch_page::<T, Q::Wire>(transport, &url).await?;
        let data = response
            .data
            .ok_or_else(|| MetadataError::Response("Failed to receive response".to_string()))?;

        log::debug!("Received: {} record(s)", data.results.len());
        let window = data.window;
        let status = accumulator.absorb(
            data.results.into_iter().map(|record| query.map(record)),
            &window,
        );

        if status == PageStatus::Done {
            break;
        }
        offset = window.next_offset();
        page += 1;
    }

    if accumulator.is_empty() {
        log::debug!("No records found: path={}", path);
    }
    log::debug!("Returning {} record(s)", accumulator.len());
    Ok(accumulator.into_records())
}

// =============================================================================
// Query kinds
// =============================================================================

/// Volume search by series name prefix
#[derive(Debug, Clone)]
pub struct VolumesQuery {
    pub series_name: String,
    /// Zero means no cap
    pub max_records: usize,
}

impl MarvelQuery for VolumesQuery {
    type Wire = MarvelSeriesRecord;
    type Output = VolumeRecord;

    fn validate(&self) -> Result<(), MetadataError> {
        require_field(&self.series_name, "series")
    }

    fn path(&self) -> String {
        "series".to_string()
    }

    fn params(&self) -> String {
        format!("titleStartsWith={}", urlencoding::encode(&self.series_name))
    }

    fn map(&self, record: MarvelSeriesRecord) -> VolumeRecord {
        transform_volume(record)
    }

    fn max_records(&self) -> Option<usize> {
        (self.max_records > 0).then_some(self.max_records)
    }
}

/// Single issue of a series, by issue number
#[derive(Debug, Clone)]
pub struct IssueQuery {
    pub series_id: String,
    pub issue_number: String,
}

impl MarvelQuery for IssueQuery {
    type Wire = MarvelComicRecord;
    type Output = IssueRecord;

    fn validate(&self) -> Result<(), MetadataError> {
        require_field(&self.series_id, "series")?;
        require_field(&self.issue_number, "issue number")
    }

    fn path(&self) -> String {
        format!("series/{}/comics", urlencoding::encode(&self.series_id))
    }

    fn params(&self) -> String {
        format!(
            "noVariants=true&formatType=comic&issueNumber={}",
            urlencoding::encode(&self.issue_number)
        )
    }

    fn map(&self, record: MarvelComicRecord) -> IssueRecord {
        transform_issue(&self.series_id, record)
    }
}

/// Every issue of a series
#[derive(Debug, Clone)]
pub struct AllIssuesQuery {
    pub series_id: String,
}

impl MarvelQuery for AllIssuesQuery {
    type Wire = MarvelComicRecord;
    type Output = IssueDetailsRecord;

    fn validate(&self) -> Result<(), MetadataError> {
        require_field(&self.series_id, "series id")
    }

    fn path(&self) -> String {
        format!("series/{}/comics", urlencoding::encode(&self.series_id))
    }

    fn params(&self) -> String {
        "noVariants=true".to_string()
    }

    fn map(&self, record: MarvelComicRecord) -> IssueDetailsRecord {
        transform_series_issue(record)
    }
}

/// Details of one comic by id
#[derive(Debug, Clone)]
pub struct IssueDetailsQuery {
    pub comic_id: String,
}

impl MarvelQuery for IssueDetailsQuery {
    type Wire = MarvelComicRecord;
    type Output = IssueDetailsRecord;

    fn validate(&self) -> Result<(), MetadataError> {
        require_field(&self.comic_id, "comic id")
    }

    fn path(&self) -> String {
        format!("comics/{}", urlencoding::encode(&self.comic_id))
    }

    fn params(&self) -> String {
        String::new()
    }

    fn map(&self, record: MarvelComicRecord) -> IssueDetailsRecord {
        transform_issue_details(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marvel::testing::{comic_result, page, series_result, FakeTransport};

    const BASE_URL: &str = "https://gateway.marvel.com";

    fn credentials() -> Credentials {
        Credentials::new("the.public.key", "the.private.key")
    }

    fn volumes(name: &str, max_records: usize) -> VolumesQuery {
        VolumesQuery {
            series_name: name.to_string(),
            max_records,
        }
    }

    #[test]
    fn test_page_params() {
        assert_eq!(page_params("noVariants=true", 0), "noVariants=true");
        assert_eq!(
            page_params("noVariants=true", 20),
            "noVariants=true&offset=20"
        );
        assert_eq!(page_params("", 0), "");
        assert_eq!(page_params("", 5), "offset=5");
    }

    #[test]
    fn test_query_paths_and_params() {
        let query = volumes("Spider Woman", 10);
        assert_eq!(query.path(), "series");
        assert_eq!(query.params(), "titleStartsWith=Spider%20Woman");

        let query = IssueQuery {
            series_id: "2069".to_string(),
            issue_number: "17".to_string(),
        };
        assert_eq!(query.path(), "series/2069/comics");
        assert_eq!(
            query.params(),
            "noVariants=true&formatType=comic&issueNumber=17"
        );

        let query = AllIssuesQuery {
            series_id: "2069".to_string(),
        };
        assert_eq!(query.path(), "series/2069/comics");
        assert_eq!(query.params(), "noVariants=true");

        let query = IssueDetailsQuery {
            comic_id: "10766".to_string(),
        };
        assert_eq!(query.path(), "comics/10766");
        assert_eq!(query.params(), "");
    }

    #[test]
    fn test_path_ids_are_percent_encoded() {
        let query = AllIssuesQuery {
            series_id: "2069/../x".to_string(),
        };
        assert_eq!(query.path(), "series/2069%2F..%2Fx/comics");

        let query = IssueQuery {
            series_id: "20 69".to_string(),
            issue_number: "1".to_string(),
        };
        assert_eq!(query.path(), "series/20%2069/comics");

        let query = IssueDetailsQuery {
            comic_id: "10766?x=1".to_string(),
        };
        assert_eq!(query.path(), "comics/10766%3Fx%3D1");
    }

    #[tokio::test]
    async fn test_two_page_volume_search() {
        let transport = FakeTransport::with_pages(vec![
            page(
                0,
                1,
                2,
                vec![series_result(1, "Spider-Woman (2009 - 2010)")],
            ),
            page(
                1,
                1,
                2,
                vec![series_result(2, "Spider-Woman (2014 - 2015)")],
            ),
        ]);

        let records = fetch_all_pages(
            &transport,
            BASE_URL,
            &credentials(),
            &volumes("Spider-Woman", 0),
            None,
        )
        .await
        .unwrap();

        assert_eq!(transport.request_count(), 2);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "1");
        assert_eq!(records[0].start_year, "2009");
        assert_eq!(records[1].id, "2");
        assert_eq!(records[1].start_year, "2014");

        let requests = transport.requests();
        assert!(requests[0].starts_with(
            "https://gateway.marvel.com/v1/public/series?titleStartsWith=Spider-Woman&ts="
        ));
        assert!(!requests[0].contains("offset="));
        assert!(requests[1].contains("titleStartsWith=Spider-Woman&offset=1&ts="));
        assert!(requests[1].contains("&apikey=the.public.key&hash="));
    }

    #[tokio::test]
    async fn test_volume_search_cap_stops_paging() {
        let transport = FakeTransport::with_pages(vec![
            page(
                0,
                2,
                6,
                vec![series_result(1, "A (2001)"), series_result(2, "B (2002)")],
            ),
            page(
                2,
                2,
                6,
                vec![series_result(3, "C (2003)"), series_result(4, "D (2004)")],
            ),
            page(
                4,
                2,
                6,
                vec![series_result(5, "E (2005)"), series_result(6, "F (2006)")],
            ),
        ]);

        let records = fetch_all_pages(&transport, BASE_URL, &credentials(), &volumes("A", 3), None)
            .await
            .unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(transport.request_count(), 2);
        assert_eq!(
            records.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
            vec!["A", "B", "C"]
        );
    }

    #[tokio::test]
    async fn test_cap_reached_on_first_page_makes_one_request() {
        let transport = FakeTransport::with_pages(vec![page(
            0,
            2,
            10,
            vec![series_result(1, "A (2001)"), series_result(2, "B (2002)")],
        )]);

        let records = fetch_all_pages(&transport, BASE_URL, &credentials(), &volumes("A", 2), None)
            .await
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_blank_credentials_make_no_requests() {
        let transport = FakeTransport::with_pages(vec![]);

        for creds in [
            Credentials::new("", "private"),
            Credentials::new("public", "   "),
        ] {
            let result =
                fetch_all_pages(&transport, BASE_URL, &creds, &volumes("X", 0), None).await;
            assert!(matches!(result, Err(MetadataError::Configuration(_))));

            let result = fetch_all_pages(
                &transport,
                BASE_URL,
                &creds,
                &AllIssuesQuery {
                    series_id: "2069".to_string(),
                },
                None,
            )
            .await;
            assert!(matches!(result, Err(MetadataError::Configuration(_))));
        }

        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_parameters_make_no_requests() {
        let transport = FakeTransport::with_pages(vec![]);

        let result = fetch_all_pages(
            &transport,
            BASE_URL,
            &credentials(),
            &IssueQuery {
                series_id: "2069".to_string(),
                issue_number: "".to_string(),
            },
            None,
        )
        .await;
        assert!(matches!(result, Err(MetadataError::Validation(_))));

        let result = fetch_all_pages(
            &transport,
            BASE_URL,
            &credentials(),
            &IssueDetailsQuery {
                comic_id: " ".to_string(),
            },
            None,
        )
        .await;
        assert!(matches!(result, Err(MetadataError::Validation(_))));

        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_failure_on_second_page_discards_first() {
        let transport = FakeTransport::new(vec![
            Ok(page(0, 1, 2, vec![comic_result(1, 1)]).to_string()),
            Err(MetadataError::transport_status("HTTP 500")),
        ]);

        let result = fetch_all_pages(
            &transport,
            BASE_URL,
            &credentials(),
            &AllIssuesQuery {
                series_id: "2069".to_string(),
            },
            None,
        )
        .await;

        assert!(matches!(result, Err(MetadataError::Transport { .. })));
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn test_missing_data_block_is_response_error() {
        let transport = FakeTransport::new(vec![Ok(
            r#"{"code": 409, "status": "You must provide a user key."}"#.to_string(),
        )]);

        let result = fetch_all_pages(&transport, BASE_URL, &credentials(), &volumes("X", 0), None)
            .await;

        assert!(matches!(result, Err(MetadataError::Response(_))));
    }

    #[tokio::test]
    async fn test_all_issues_maps_every_page() {
        let transport = FakeTransport::with_pages(vec![
            page(0, 2, 3, vec![comic_result(11, 1), comic_result(12, 2)]),
            page(2, 2, 3, vec![comic_result(13, 3)]),
        ]);

        let records = fetch_all_pages(
            &transport,
            BASE_URL,
            &credentials(),
            &AllIssuesQuery {
                series_id: "2069".to_string(),
            },
            None,
        )
        .await
        .unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(
            records
                .iter()
                .map(|r| r.issue_number.as_str())
                .collect::<Vec<_>>(),
            vec!["1", "2", "3"]
        );
        assert_eq!(records[0].series, "Spider-Woman");
        assert_eq!(records[0].volume, "2009");
        assert_eq!(records[0].web_address, None);
        assert!(transport.requests()[1].contains("noVariants=true&offset=2&ts="));
    }

    #[tokio::test]
    async fn test_empty_result_set() {
        let transport = FakeTransport::with_pages(vec![page(0, 20, 0, vec![])]);

        let records = fetch_all_pages(
            &transport,
            BASE_URL,
            &credentials(),
            &IssueQuery {
                series_id: "2069".to_string(),
                issue_number: "999".to_string(),
            },
            None,
        )
        .await
        .unwrap();

        assert!(records.is_empty());
        assert_eq!(transport.request_count(), 1);
    }
}
