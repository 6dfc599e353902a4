//! `shopporium-web`
//!
//! **Responsibility:** the storefront UI.
//!
//! - `display`: text formatting and links shared by the views (native, testable)
//! - `frontend`: Leptos client-side app (wasm32 only)
//!
//! Views stay thin: query state, fetch ordering, carousel and pagination
//! rules all live in `shopporium-core`.

pub mod display;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
