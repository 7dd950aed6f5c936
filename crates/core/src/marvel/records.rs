//! Publisher-agnostic metadata records
//!
//! These are the shapes handed back to callers, whichever endpoint produced
//! them. They are built fresh for every fetch and never mutated afterwards.

use chrono::NaiveDate;
use serde::Serialize;

/// A candidate volume (series) returned by a volume search
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct VolumeRecord {
    pub id: String,
    pub name: String,
    pub start_year: String,
    pub publisher: String,
    pub issue_count: u32,
    pub image_url: Option<String>,
}

/// A single issue returned by an issue search
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct IssueRecord {
    pub id: String,
    pub volume_id: String,
    pub name: String,
    pub volume_name: String,
    pub description: Option<String>,
    pub cover_date: Option<NaiveDate>,
    pub store_date: Option<NaiveDate>,
    pub cover_url: Option<String>,
}

/// Full details for one issue
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct IssueDetailsRecord {
    pub source_id: String,
    pub publisher: String,
    pub series: String,
    pub volume: String,
    pub issue_number: String,
    pub title: String,
    pub cover_date: Option<NaiveDate>,
    pub store_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub web_address: Option<String>,
    pub credits: Vec<CreditRecord>,
}

/// A creator and the role they played on an issue
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct CreditRecord {
    pub name: String,
    pub role: String,
}
