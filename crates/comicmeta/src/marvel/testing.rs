//! In-memory transport and page fixtures for tests

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::{json, Value};

use super::client::Transport;
use crate::prelude::MetadataError;

/// Serves canned responses in order and records every requested URL
pub struct FakeTransport {
    responses: Mutex<VecDeque<Result<String, MetadataError>>>,
    requests: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn new(responses: Vec<Result<String, MetadataError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_pages(pages: Vec<Value>) -> Self {
        Self::new(pages.into_iter().map(|p| Ok(p.to_string())).collect())
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Transport for FakeTransport {
    async fn get(&self, url: &str) -> Result<String, MetadataError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(MetadataError::transport_status("No more canned responses")))
    }
}

/// Envelope around one page of results
pub fn page(offset: u32, limit: u32, total: u32, results: Vec<Value>) -> Value {
    json!({
        "code": 200,
        "status": "Ok",
        "copyright": "© 2024 MARVEL",
        "attributionText": "Data provided by Marvel. © 2024 MARVEL",
        "etag": "etag",
        "data": {
            "offset": offset,
            "limit": limit,
            "total": total,
            "count": results.len(),
            "results": results,
        }
    })
}

pub fn series_result(id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "startYear": 2009,
        "comics": {"available": 12},
        "thumbnail": {"path": format!("http://i.annihil.us/{}", id), "extension": "jpg"},
    })
}

pub fn comic_result(id: u64, issue_number: u32) -> Value {
    json!({
        "id": id,
        "title": format!("Spider-Woman (2009) #{}", issue_number),
        "issueNumber": issue_number,
        "description": "Jessica Drew is back.",
        "series": {"name": "Spider-Woman (2009 - 2010)"},
        "dates": [
            {"type": "onsaleDate", "date": "2009-09-30T00:00:00-0400"},
            {"type": "focDate", "date": "2009-09-03T00:00:00-0400"}
        ],
        "urls": [
            {"type": "detail", "url": format!("http://marvel.com/comics/issue/{}/spider-woman", id)}
        ],
        "thumbnail": {"path": format!("http://i.annihil.us/c/{}", id), "extension": "jpg"},
        "creators": {"available": 1, "items": [{"name": "Brian Michael Bendis", "role": "writer"}]}
    })
}
