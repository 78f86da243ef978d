//! Pagination module
//!
//! The search endpoint pages by index: each response carries the
//! `last_index` to resume after, and pagination ends on an empty page.
//! Strategies decide the next request from each page; the query cursor in
//! `client::search` drives them lazily.

mod strategies;
mod types;

pub use strategies::IndexPaginator;
pub use types::{NextPage, PaginationState, Paginator};
