//! Catalog product record and its identifier.

use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use shopporium_core::{DomainError, DomainResult};

use crate::review::Review;

/// Product identifier as issued by the catalog.
///
/// The catalog has served ids both as JSON strings and as numbers; both
/// decode to the same textual id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::invalid_id("product id cannot be empty"));
        }
        Ok(Self(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self(s),
            Raw::Number(n) => Self(n.to_string()),
        })
    }
}

/// Full product record (matches the catalog response shape).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Price in the display currency unit (not cents).
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Average rating, 0 to 5.
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Product {
    /// Image shown before any carousel interaction: first image, else thumbnail.
    pub fn cover_image(&self) -> Option<&str> {
        self.images
            .first()
            .or(self.thumbnail.as_ref())
            .map(String::as_str)
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Detail page path for this product.
    pub fn href(&self) -> String {
        format!("/product/{}", self.id)
    }
}
