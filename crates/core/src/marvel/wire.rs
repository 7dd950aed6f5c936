//! Wire types for Marvel API responses
//!
//! Every endpoint wraps its results in the same envelope. Fields the mappers do
//! not need are left out; fields that are sometimes absent default.

use serde::{Deserialize, Deserializer};

use crate::pagination::PageWindow;

// =============================================================================
// Envelope
// =============================================================================

/// Top-level response envelope shared by every endpoint
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MarvelResponse<T> {
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub code: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
    #[serde(default)]
    pub attribution_text: Option<String>,
    #[serde(default)]
    pub etag: Option<String>,
    pub data: Option<MarvelDataPayload<T>>,
}

/// Page of results plus the counters that describe it
#[derive(Debug, Deserialize, Clone)]
pub struct MarvelDataPayload<T> {
    #[serde(flatten)]
    pub window: PageWindow,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

// =============================================================================
// Shared fragments
// =============================================================================

/// Tagged date entry, e.g. `{"type": "onsaleDate", "date": "..."}`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MarvelDate {
    #[serde(rename = "type")]
    pub date_type: String,
    pub date: String,
}

/// Tagged web address, e.g. `{"type": "detail", "url": "..."}`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MarvelUrl {
    #[serde(rename = "type")]
    pub url_type: String,
    pub url: String,
}

/// Image reference split into path and extension
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MarvelThumbnail {
    pub path: String,
    pub extension: String,
}

impl MarvelThumbnail {
    /// `{path}.{extension}`
    pub fn to_url(&self) -> String {
        format!("{}.{}", self.path, self.extension)
    }
}

/// Series summary embedded in comic records
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarvelSeriesSummary {
    #[serde(default, rename = "resourceURI")]
    pub resource_uri: Option<String>,
    pub name: String,
}

/// Counter of related resources, e.g. the comics in a series
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct MarvelResourceCount {
    #[serde(default)]
    pub available: u32,
}

/// Creator list embedded in comic records
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct MarvelCreators {
    #[serde(default)]
    pub available: u32,
    #[serde(default)]
    pub items: Vec<MarvelCreditEntry>,
}

/// A single creator credit
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarvelCreditEntry {
    #[serde(default, rename = "resourceURI")]
    pub resource_uri: Option<String>,
    pub name: String,
    #[serde(default)]
    pub role: String,
}

// =============================================================================
// Endpoint records
// =============================================================================

/// One result from `/v1/public/series`
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MarvelSeriesRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub start_year: Option<i32>,
    #[serde(default)]
    pub urls: Vec<MarvelUrl>,
    #[serde(default)]
    pub comics: MarvelResourceCount,
    #[serde(default)]
    pub thumbnail: Option<MarvelThumbnail>,
}

/// One result from `/v1/public/series/{id}/comics` or `/v1/public/comics/{id}`
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MarvelComicRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub issue_number: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub series: MarvelSeriesSummary,
    #[serde(default)]
    pub dates: Vec<MarvelDate>,
    #[serde(default)]
    pub urls: Vec<MarvelUrl>,
    #[serde(default)]
    pub thumbnail: Option<MarvelThumbnail>,
    #[serde(default)]
    pub creators: MarvelCreators,
}

pub type MarvelSeriesResponse = MarvelResponse<MarvelSeriesRecord>;
pub type MarvelComicsResponse = MarvelResponse<MarvelComicRecord>;

// =============================================================================
// Helpers
// =============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }
    }
}

/// Ids, issue numbers and status codes arrive as JSON numbers but are opaque strings to callers
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(String::from)
}

fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<StringOrNumber>::deserialize(deserializer).map(|v| v.map(String::from))
}
