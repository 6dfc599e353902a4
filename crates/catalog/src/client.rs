//! Catalog HTTP client.

use reqwest::Url;
use serde::de::DeserializeOwned;

use shopporium_core::QueryState;
use shopporium_products::{Product, ProductId};

use crate::config::CatalogConfig;
use crate::error::{CatalogError, Operation};
use crate::request::list_params;

/// Client for the remote catalog API.
///
/// Cheap to clone: clones share one connection pool.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
    page_size: u32,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let base_url = Url::parse(config.base_url.trim())
            .map_err(|e| CatalogError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::InvalidBaseUrl(config.base_url.clone()));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            page_size: config.page_size,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Fetch one page of products for `query`.
    pub async fn list_products(&self, query: &QueryState) -> Result<Vec<Product>, CatalogError> {
        let mut url = self.endpoint(&["products"])?;
        url.query_pairs_mut()
            .extend_pairs(list_params(query, self.page_size));
        self.get_json(Operation::Products, url).await
    }

    /// Fetch one product by id.
    pub async fn get_product(&self, id: &ProductId) -> Result<Product, CatalogError> {
        let url = self.endpoint(&["products", id.as_str()])?;
        self.get_json(Operation::Product, url).await
    }

    /// Fetch all category names.
    pub async fn list_categories(&self) -> Result<Vec<String>, CatalogError> {
        let url = self.endpoint(&["categories"])?;
        self.get_json(Operation::Categories, url).await
    }

    /// Base URL with `segments` appended as percent-encoded path segments.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, CatalogError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CatalogError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: Operation,
        url: Url,
    ) -> Result<T, CatalogError> {
        tracing::debug!(%operation, %url, "catalog request");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(%operation, error = %e, "catalog unreachable");
                CatalogError::Network {
                    operation,
                    message: e.to_string(),
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%operation, status = status.as_u16(), "catalog request failed");
            return Err(CatalogError::Status {
                operation,
                status: status.as_u16(),
            });
        }

        resp.json::<T>().await.map_err(|e| CatalogError::Decode {
            operation,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> CatalogClient {
        CatalogClient::new(&CatalogConfig::with_base_url(base)).unwrap()
    }

    #[test]
    fn endpoint_appends_segments_to_root() {
        let url = client("https://catalog.example").endpoint(&["products"]).unwrap();
        assert_eq!(url.as_str(), "https://catalog.example/products");
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let url = client("https://catalog.example/api/").endpoint(&["categories"]).unwrap();
        assert_eq!(url.as_str(), "https://catalog.example/api/categories");
    }

    #[test]
    fn endpoint_encodes_product_id_as_one_segment() {
        let url = client("https://catalog.example")
            .endpoint(&["products", "a/b c"])
            .unwrap();
        assert_eq!(url.as_str(), "https://catalog.example/products/a%2Fb%20c");
    }

    #[test]
    fn rejects_invalid_base_url() {
        for bad in ["not a url", "mailto:shop@example.com"] {
            match CatalogClient::new(&CatalogConfig::with_base_url(bad)) {
                Err(CatalogError::InvalidBaseUrl(_)) => {}
                other => panic!("expected InvalidBaseUrl for {bad:?}, got {other:?}"),
            }
        }
    }
}
