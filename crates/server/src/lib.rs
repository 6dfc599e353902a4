//! Static host for the built storefront bundle.
//!
//! Serves the compiled frontend from a dist directory and falls back to
//! `index.html` for every unknown path so client-side routes survive a
//! reload or a pasted link.

pub mod app;
pub mod config;
