//! Derives what the user sees from the registry: record status, filtering and ordering.

mod filter;
mod sort;
mod status;
mod view;

pub use filter::FilterOptions;
pub use sort::{SortOrder, sort_records};
pub use status::{Classification, StatusFilter, UPCOMING_WINDOW_DAYS, classify};
pub use view::{RecordView, derive_view};
