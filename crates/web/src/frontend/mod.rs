//! Leptos storefront, client-side rendered.

pub mod app;
pub mod detail;
pub mod listing;
pub mod shell;

use leptos::*;
use wasm_bindgen::prelude::*;

use shopporium_catalog::{CatalogClient, CatalogConfig};

use app::App;
use shell::StartupError;

/// WASM entry point, run when the module loads.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    match CatalogClient::new(&CatalogConfig::from_env()) {
        Ok(catalog) => mount_to_body(move || view! { <App catalog=catalog/> }),
        Err(err) => {
            let message = err.to_string();
            mount_to_body(move || view! { <StartupError message=message/> })
        }
    }
}
