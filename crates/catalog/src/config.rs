//! Catalog client configuration.

use shopporium_core::PAGE_SIZE;

/// Catalog used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://next-ecommerce-api.vercel.app";

/// Environment variable overriding the catalog base URL.
///
/// Read at runtime on native targets and at compile time for the wasm bundle.
pub const BASE_URL_ENV: &str = "SHOPPORIUM_CATALOG_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub base_url: String,
    pub page_size: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: PAGE_SIZE,
        }
    }
}

impl CatalogConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Default config with the base URL taken from `SHOPPORIUM_CATALOG_URL`
    /// when set and non-blank.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let configured = std::env::var(BASE_URL_ENV).ok();
        #[cfg(target_arch = "wasm32")]
        let configured = option_env!("SHOPPORIUM_CATALOG_URL").map(str::to_string);

        match configured.filter(|url| !url.trim().is_empty()) {
            Some(url) => Self::with_base_url(url),
            None => {
                tracing::debug!("{BASE_URL_ENV} not set; using {DEFAULT_BASE_URL}");
                Self::default()
            }
        }
    }
}
