//! Pagination strategy implementations

use super::types::{NextPage, PaginationState, Paginator};

/// Default number of records per search page
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Index-based pagination (the storage search API)
///
/// Each page reports the index of its last result; the next request asks
/// for results after that index. An empty page ends the result set.
#[derive(Debug, Clone)]
pub struct IndexPaginator {
    /// Records requested per page
    pub page_size: u32,
}

impl IndexPaginator {
    /// Create a new index paginator
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }
}

impl Default for IndexPaginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator for IndexPaginator {
    fn page_size(&self) -> u32 {
        self.page_size
    }

    fn process_page(
        &self,
        last_index: u64,
        records_count: usize,
        state: &mut PaginationState,
    ) -> NextPage {
        state.add_page(records_count as u64);

        // An index that does not advance would refetch the same page forever
        if records_count == 0 || (state.page > 1 && last_index <= state.after_index) {
            state.mark_done();
            return NextPage::Done;
        }

        state.set_after_index(last_index);
        NextPage::Continue {
            after_index: last_index,
        }
    }
}
