//! `shopporium-catalog`
//!
//! **Responsibility:** HTTP client for the remote catalog API.
//!
//! The storefront owns no data; every product, review and category comes
//! from three read-only endpoints:
//! - `GET /products?limit&skip&q&category&sort&order`
//! - `GET /products/{id}`
//! - `GET /categories`
//!
//! Non-success statuses surface as [`CatalogError`] immediately (no retry).

pub mod client;
pub mod config;
pub mod error;
pub mod request;

pub use client::CatalogClient;
pub use config::CatalogConfig;
pub use error::{CatalogError, Operation};
