//! Pagination types and traits

/// Result of the next page computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPage {
    /// More pages available after this index
    Continue {
        /// Index to resume after
        after_index: u64,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Tracks progress through a paginated result set
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Index to request results after
    pub after_index: u64,
    /// Pages fetched so far
    pub page: u32,
    /// Records fetched so far
    pub total_fetched: u64,
    /// Whether pagination is complete
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Record a fetched page
    pub fn add_page(&mut self, records: u64) {
        self.page += 1;
        self.total_fetched += records;
    }

    /// Set the resume index
    pub fn set_after_index(&mut self, index: u64) {
        self.after_index = index;
    }
}

/// Core trait for pagination strategies
pub trait Paginator: Send + Sync {
    /// Number of records to request per page
    fn page_size(&self) -> u32;

    /// Process a page and determine whether another should be fetched
    fn process_page(
        &self,
        last_index: u64,
        records_count: usize,
        state: &mut PaginationState,
    ) -> NextPage;
}
