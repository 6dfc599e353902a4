//! `shopporium-core`: storefront building blocks.
//!
//! This crate contains **pure** primitives (no I/O, no UI framework):
//! - the listing query state and its URL codec
//! - the query synchronizer that orders fetches against state changes
//! - carousel and pagination arithmetic shared by the views

pub mod carousel;
pub mod error;
pub mod pagination;
pub mod query;
pub mod sync;

pub use carousel::Carousel;
pub use error::{DomainError, DomainResult};
pub use pagination::Pager;
pub use query::{MAX_PAGE, PAGE_SIZE, QueryChange, QueryState, SortField, SortOption, SortOrder};
pub use sync::{Completion, FetchTicket, QuerySync, Transition};
