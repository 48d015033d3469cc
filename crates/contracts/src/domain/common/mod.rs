//! Common types shared by all catalog aggregates

pub mod api_response;
pub mod list_query;
pub mod paged_collection;
pub mod sort_state;

// Re-exports
pub use api_response::{ApiResponse, DeletedRef, ErrorMessage, OK_MESSAGE};
pub use list_query::ListQuery;
pub use paged_collection::PagedCollection;
pub use sort_state::{SortDirection, SortParams, SortState};
