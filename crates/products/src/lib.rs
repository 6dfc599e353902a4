//! Catalog read models.
//!
//! Products and reviews are sourced entirely from the remote catalog API and
//! never mutated locally. This crate holds their shape and the pure
//! client-side review ordering (no IO, no HTTP).

pub mod product;
pub mod review;

pub use product::{Product, ProductId};
pub use review::{REVIEW_SORT_PARAM, Review, ReviewSort, sort_reviews};
