//! Lazy query cursor over the storage search endpoint

use crate::error::Result;
use crate::http::HttpClient;
use crate::pagination::{PaginationState, Paginator};
use crate::types::{Meta, QueryFilter, Record, RecordStream, StringMap};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

/// Path of the search endpoint, relative to the API URL
pub const SEARCH_PATH: &str = "v1/storage/search";

/// Search request body
#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    count: u32,
    include_data: bool,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    writer_ids: &'a [String],
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    user_ids: &'a [String],
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    record_ids: &'a [String],
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    content_types: &'a [String],
    after_index: u64,
}

impl<'a> SearchRequest<'a> {
    fn new(filter: &'a QueryFilter, count: u32, after_index: u64) -> Self {
        Self {
            count,
            include_data: filter.include_data,
            writer_ids: &filter.writer_ids,
            user_ids: &filter.user_ids,
            record_ids: &filter.record_ids,
            content_types: &filter.content_types,
            after_index,
        }
    }
}

/// One page of search results
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
    #[serde(default)]
    last_index: u64,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    meta: Meta,
    #[serde(default)]
    record_data: Option<StringMap>,
}

impl From<SearchResult> for Record {
    fn from(result: SearchResult) -> Self {
        Self {
            meta: result.meta,
            data: result.record_data.unwrap_or_default(),
        }
    }
}

/// Pull-based cursor holding at most one page of results
struct Cursor<'a> {
    http: &'a HttpClient,
    paginator: &'a dyn Paginator,
    filter: QueryFilter,
    state: PaginationState,
    buffered: VecDeque<Record>,
}

impl Cursor<'_> {
    async fn next_record(&mut self) -> Result<Option<Record>> {
        loop {
            if let Some(record) = self.buffered.pop_front() {
                return Ok(Some(record));
            }
            if self.state.done {
                return Ok(None);
            }
            self.fetch_page().await?;
        }
    }

    async fn fetch_page(&mut self) -> Result<()> {
        let request = SearchRequest::new(
            &self.filter,
            self.paginator.page_size(),
            self.state.after_index,
        );
        let response: SearchResponse = self.http.post_json(SEARCH_PATH, &request).await?;
        let count = response.results.len();
        let next = self
            .paginator
            .process_page(response.last_index, count, &mut self.state);

        debug!(
            "Search page {} returned {count} records, {} so far (last_index={}, done={})",
            self.state.page,
            self.state.total_fetched,
            response.last_index,
            next.is_done()
        );

        self.buffered
            .extend(response.results.into_iter().map(Record::from));
        Ok(())
    }
}

/// Start a lazy query; nothing is requested until the stream is polled
///
/// The stream ends after yielding its first error.
pub(crate) fn query_stream<'a>(
    http: &'a HttpClient,
    paginator: &'a dyn Paginator,
    filter: QueryFilter,
) -> RecordStream<'a> {
    let cursor = Cursor {
        http,
        paginator,
        filter,
        state: PaginationState::new(),
        buffered: VecDeque::new(),
    };

    Box::pin(futures::stream::unfold(cursor, |mut cursor| async move {
        match cursor.next_record().await {
            Ok(Some(record)) => Some((Ok(record), cursor)),
            Ok(None) => None,
            Err(e) => {
                cursor.state.mark_done();
                cursor.buffered.clear();
                Some((Err(e), cursor))
            }
        }
    }))
}
