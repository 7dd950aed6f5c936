//! Metadata adaptor for the Marvel catalog
//!
//! The adaptor holds no per-request state: each call builds its own query and
//! borrows the caller's credentials, so one value can serve concurrent calls.

use comicmeta_core::marvel::auth::Credentials;
use comicmeta_core::marvel::records::{IssueDetailsRecord, IssueRecord, VolumeRecord};
use comicmeta_core::marvel::reference::extract_reference_id;
use indicatif::ProgressBar;

use super::client::{HttpTransport, Transport};
use super::fetch::{
    fetch_all_pages, AllIssuesQuery, IssueDetailsQuery, IssueQuery, MarvelQuery, VolumesQuery,
};
use crate::prelude::MetadataError;

#[derive(Debug, Clone)]
pub struct MarvelMetadataAdaptor<T: Transport = HttpTransport> {
    transport: T,
    base_url: String,
    progress: Option<ProgressBar>,
}

impl<T: Transport> MarvelMetadataAdaptor<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            base_url: comicmeta_core::marvel::DEFAULT_BASE_URL.to_string(),
            progress: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Report page progress on a spinner
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch<Q: MarvelQuery>(
        &self,
        credentials: &Credentials,
        query: &Q,
    ) -> Result<Vec<Q::Output>, MetadataError> {
        fetch_all_pages(
            &self.transport,
            &self.base_url,
            credentials,
            query,
            self.progress.as_ref(),
        )
        .await
    }

    /// Search volumes whose title starts with `series_name`
    ///
    /// A `max_records` of zero returns every match.
    pub async fn get_volumes(
        &self,
        series_name: &str,
        max_records: usize,
        credentials: &Credentials,
    ) -> Result<Vec<VolumeRecord>, MetadataError> {
        log::debug!("Fetching volumes: name={} max={}", series_name, max_records);
        let query = VolumesQuery {
            series_name: series_name.to_string(),
            max_records,
        };
        self.fetch(credentials, &query).await
    }

    /// Find one issue of a series by issue number
    ///
    /// When the catalog returns several matches the first one wins.
    pub async fn get_issue(
        &self,
        series_id: &str,
        issue_number: &str,
        credentials: &Credentials,
    ) -> Result<Option<IssueRecord>, MetadataError> {
        log::debug!(
            "Fetching issue: series={} issue={}",
            series_id,
            issue_number
        );
        let query = IssueQuery {
            series_id: series_id.to_string(),
            issue_number: issue_number.to_string(),
        };
        let records = self.fetch(credentials, &query).await?;
        Ok(records.into_iter().next())
    }

    pub async fn get_all_issues(
        &self,
        series_id: &str,
        credentials: &Credentials,
    ) -> Result<Vec<IssueDetailsRecord>, MetadataError> {
        log::debug!("Fetching all issues: series={}", series_id);
        let query = AllIssuesQuery {
            series_id: series_id.to_string(),
        };
        self.fetch(credentials, &query).await
    }

    /// Read the details of one comic, `None` when the id is unknown
    pub async fn get_issue_details(
        &self,
        comic_id: &str,
        credentials: &Credentials,
    ) -> Result<Option<IssueDetailsRecord>, MetadataError> {
        log::debug!("Fetching issue details: comic={}", comic_id);
        let query = IssueDetailsQuery {
            comic_id: comic_id.to_string(),
        };
        let records = self.fetch(credentials, &query).await?;
        Ok(records.into_iter().next())
    }

    /// Comic id embedded in a marvel.com issue address
    pub fn get_reference_id(&self, web_address: &str) -> Option<String> {
        extract_reference_id(web_address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marvel::testing::{comic_result, page, series_result, FakeTransport};
    use chrono::NaiveDate;

    fn credentials() -> Credentials {
        Credentials::new("public", "private")
    }

    fn adaptor(pages: Vec<serde_json::Value>) -> MarvelMetadataAdaptor<FakeTransport> {
        MarvelMetadataAdaptor::new(FakeTransport::with_pages(pages))
            .with_base_url("http://localhost:8080")
    }

    #[tokio::test]
    async fn test_get_volumes() {
        let adaptor = adaptor(vec![page(
            0,
            20,
            1,
            vec![series_result(2069, "Spider-Woman (2009 - 2010)")],
        )]);

        let volumes = adaptor
            .get_volumes("Spider-Woman", 0, &credentials())
            .await
            .unwrap();

        assert_eq!(volumes.len(), 1);
        assert_eq!(volumes[0].id, "2069");
        assert_eq!(volumes[0].name, "Spider-Woman");
        assert_eq!(volumes[0].start_year, "2009");
        assert_eq!(volumes[0].publisher, "Marvel");
        assert_eq!(volumes[0].issue_count, 12);
        assert_eq!(
            volumes[0].image_url.as_deref(),
            Some("http://i.annihil.us/2069.jpg")
        );
        let expected = "http://localhost:8080/v1/public/series?titleStartsWith=Spider-Woman&ts=";
        assert!(adaptor.transport.requests()[0].starts_with(expected));
    }

    #[tokio::test]
    async fn test_get_issue_takes_first_match() {
        let adaptor = adaptor(vec![page(
            0,
            20,
            2,
            vec![comic_result(24571, 17), comic_result(24572, 17)],
        )]);

        let issue = adaptor
            .get_issue("2069", "17", &credentials())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(issue.id, "24571");
        assert_eq!(issue.volume_id, "2069");
        assert_eq!(issue.volume_name, "Spider-Woman (2009 - 2010)");
        assert_eq!(issue.cover_date, NaiveDate::from_ymd_opt(2009, 9, 30));
        assert_eq!(issue.store_date, issue.cover_date);
        let expected =
            "/v1/public/series/2069/comics?noVariants=true&formatType=comic&issueNumber=17&ts=";
        assert!(adaptor.transport.requests()[0].contains(expected));
    }

    #[tokio::test]
    async fn test_get_issue_not_found() {
        let adaptor = adaptor(vec![page(0, 20, 0, vec![])]);

        let issue = adaptor.get_issue("2069", "99", &credentials()).await.unwrap();
        assert!(issue.is_none());
    }

    #[tokio::test]
    async fn test_get_all_issues() {
        let adaptor = adaptor(vec![
            page(0, 1, 2, vec![comic_result(1, 1)]),
            page(1, 1, 2, vec![comic_result(2, 2)]),
        ]);

        let issues = adaptor.get_all_issues("2069", &credentials()).await.unwrap();

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[1].source_id, "2");
        assert_eq!(issues[1].cover_date, NaiveDate::from_ymd_opt(2009, 9, 3));
        assert_eq!(issues[1].store_date, NaiveDate::from_ymd_opt(2009, 9, 30));
    }

    #[tokio::test]
    async fn test_get_issue_details() {
        let adaptor = adaptor(vec![page(0, 20, 1, vec![comic_result(10766, 1)])]);

        let details = adaptor
            .get_issue_details("10766", &credentials())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(details.source_id, "10766");
        assert_eq!(details.series, "Spider-Woman");
        assert_eq!(details.volume, "2009");
        assert_eq!(
            details.web_address.as_deref(),
            Some("http://marvel.com/comics/issue/10766/spider-woman")
        );
        assert_eq!(details.credits.len(), 1);
        let expected = "http://localhost:8080/v1/public/comics/10766?&ts=";
        assert!(adaptor.transport.requests()[0].starts_with(expected));
    }

    #[tokio::test]
    async fn test_blank_keys_fail_every_query_without_requests() {
        let adaptor = adaptor(vec![]);
        let blank = Credentials::new("", "");

        assert!(matches!(
            adaptor.get_volumes("X", 0, &blank).await,
            Err(MetadataError::Configuration(_))
        ));
        assert!(matches!(
            adaptor.get_issue("1", "1", &blank).await,
            Err(MetadataError::Configuration(_))
        ));
        assert!(matches!(
            adaptor.get_all_issues("1", &blank).await,
            Err(MetadataError::Configuration(_))
        ));
        assert!(matches!(
            adaptor.get_issue_details("1", &blank).await,
            Err(MetadataError::Configuration(_))
        ));
        assert_eq!(adaptor.transport.request_count(), 0);
    }

    #[test]
    fn test_get_reference_id() {
        let adaptor = adaptor(vec![]);

        assert_eq!(
            adaptor.get_reference_id("https://www.marvel.com/comics/issue/10766/spider-man"),
            Some("10766".to_string())
        );
        assert_eq!(adaptor.get_reference_id("https://example.com/other"), None);
    }
}
