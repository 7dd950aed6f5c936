//! Page window arithmetic and result accumulation
//!
//! Pure functions for deciding when a paginated fetch is finished. The shell
//! drives the network loop; this module owns the accumulated records, the
//! optional client-side cap, and the termination rule derived from the
//! counters the service reports on every page.

use serde::Deserialize;

/// Server-reported counters describing one page of a result set
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageWindow {
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub count: u32,
}

impl PageWindow {
    /// Returns true when this page reaches the end of the result set
    ///
    /// The page is last once `offset + count >= total`. An empty page also ends
    /// the loop so a service that stops returning records cannot spin it forever.
    pub fn is_last_page(&self) -> bool {
        let current = u64::from(self.offset) + u64::from(self.count);
        let result = self.count == 0 || current >= u64::from(self.total);
        log::trace!("current={} total={} result={}", current, self.total, result);
        result
    }

    /// Offset to request for the page following this one
    pub fn next_offset(&self) -> u32 {
        self.offset.saturating_add(self.count)
    }
}

/// Whether the fetch loop should request another page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    More,
    Done,
}

/// Accumulates mapped records across pages, honoring an optional cap
#[derive(Debug)]
pub struct PageAccumulator<R> {
    records: Vec<R>,
    max_records: Option<usize>,
}

impl<R> Default for PageAccumulator<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> PageAccumulator<R> {
    /// Accumulator with no client-side cap
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            max_records: None,
        }
    }

    /// Accumulator that stops at `max_records`; zero means no cap
    pub fn with_max_records(max_records: usize) -> Self {
        Self {
            records: Vec::new(),
            max_records: (max_records > 0).then_some(max_records),
        }
    }

    /// True once the cap, if any, has been reached
    pub fn is_full(&self) -> bool {
        self.max_records.is_some_and(|max| self.records.len() >= max)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append one page of records and decide whether to continue
    ///
    /// Items are pulled lazily, so records past the cap are never produced.
    pub fn absorb<I>(&mut self, items: I, window: &PageWindow) -> PageStatus
    where
        I: IntoIterator<Item = R>,
    {
        let mut items = items.into_iter();
        while !self.is_full() {
            match items.next() {
                Some(item) => self.records.push(item),
                None => break,
            }
        }

        if self.is_full() || window.is_last_page() {
            PageStatus::Done
        } else {
            PageStatus::More
        }
    }

    pub fn into_records(self) -> Vec<R> {
        self.records
    }
}
