use core::fmt;

/// Catalog endpoint a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Products,
    Product,
    Categories,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Products => "products",
            Operation::Product => "product",
            Operation::Categories => "categories",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure talking to the catalog. Display text is shown to shoppers as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid catalog base url: {0}")]
    InvalidBaseUrl(String),
    #[error("failed to fetch {operation}: {message}")]
    Network { operation: Operation, message: String },
    #[error("failed to fetch {operation} (HTTP {status})")]
    Status { operation: Operation, status: u16 },
    #[error("failed to read {operation}: {message}")]
    Decode { operation: Operation, message: String },
}

impl CatalogError {
    /// HTTP status for `Status` failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
