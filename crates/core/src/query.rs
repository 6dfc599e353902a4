//! Listing query state and its URL query-string codec.
//!
//! The listing page is fully described by four fields (page, search,
//! category, sort). `encode` writes only the non-default ones; `decode` is
//! lenient and never fails, so any address-bar content maps to a state.

use core::fmt;
use core::str::FromStr;

use url::form_urlencoded;

use crate::error::{DomainError, DomainResult};

/// Products requested per listing page.
pub const PAGE_SIZE: u32 = 20;

/// Highest page the listing will address. Keeps `skip` exact for any
/// realistic page size.
pub const MAX_PAGE: u32 = 1_000_000;

const PAGE_PARAM: &str = "page";
const SEARCH_PARAM: &str = "search";
const CATEGORY_PARAM: &str = "category";
const SORT_PARAM: &str = "sort";

/// Field the catalog sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Price,
    Title,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Price => "price",
            SortField::Title => "title",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Sort key plus direction.
///
/// Canonical text form is `<field>_<order>` (e.g. `price_asc`). Parsing also
/// accepts a `-` separator so older links keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortOption {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortOption {
    /// Every option offered by the sort dropdown, in display order.
    pub const ALL: [SortOption; 4] = [
        SortOption::new(SortField::Price, SortOrder::Asc),
        SortOption::new(SortField::Price, SortOrder::Desc),
        SortOption::new(SortField::Title, SortOrder::Asc),
        SortOption::new(SortField::Title, SortOrder::Desc),
    ];

    pub const fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Human-readable label for dropdowns.
    pub fn label(&self) -> &'static str {
        match (self.field, self.order) {
            (SortField::Price, SortOrder::Asc) => "Price: Low to High",
            (SortField::Price, SortOrder::Desc) => "Price: High to Low",
            (SortField::Title, SortOrder::Asc) => "Title: A-Z",
            (SortField::Title, SortOrder::Desc) => "Title: Z-A",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.field.as_str(), self.order.as_str())
    }
}

impl FromStr for SortOption {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let (field, order) = s
            .split_once(['_', '-'])
            .ok_or_else(|| DomainError::validation(format!("sort option `{s}` has no direction")))?;

        let field = match field {
            "price" => SortField::Price,
            "title" => SortField::Title,
            other => {
                return Err(DomainError::validation(format!("unknown sort field `{other}`")));
            }
        };
        let order = match order {
            "asc" => SortOrder::Asc,
            "desc" => SortOrder::Desc,
            other => {
                return Err(DomainError::validation(format!("unknown sort order `{other}`")));
            }
        };

        Ok(Self { field, order })
    }
}

/// Everything that determines what the listing page fetches and shows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryState {
    /// 1-based page number. Never zero.
    pub page: u32,
    pub search: String,
    pub category: String,
    pub sort: Option<SortOption>,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
            category: String::new(),
            sort: None,
        }
    }
}

/// A single user-initiated edit of the query state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryChange {
    Search(String),
    Category(String),
    Sort(Option<SortOption>),
    Page(u32),
    /// Clear search, category and sort; back to page 1.
    Reset,
}

impl QueryState {
    /// State for a plain free-text search (header search box).
    pub fn searching(term: impl Into<String>) -> Self {
        Self {
            search: term.into(),
            ..Self::default()
        }
    }

    /// Parse a URL query string. Accepts an optional leading `?`.
    ///
    /// Unknown keys are ignored; the first occurrence of a repeated key wins.
    /// `page` falls back to 1 when absent, non-numeric or zero and is capped
    /// at [`MAX_PAGE`]; an unrecognized `sort` value is dropped.
    pub fn decode(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut page = None;
        let mut search = None;
        let mut category = None;
        let mut sort = None;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                PAGE_PARAM if page.is_none() => page = Some(value.into_owned()),
                SEARCH_PARAM if search.is_none() => search = Some(value.into_owned()),
                CATEGORY_PARAM if category.is_none() => category = Some(value.into_owned()),
                SORT_PARAM if sort.is_none() => sort = Some(value.into_owned()),
                _ => {}
            }
        }

        Self {
            page: page
                .and_then(|p| p.trim().parse::<u32>().ok())
                .filter(|p| *p >= 1)
                .map_or(1, |p| p.min(MAX_PAGE)),
            search: search.unwrap_or_default(),
            category: category.unwrap_or_default(),
            sort: sort.and_then(|s| s.parse().ok()),
        }
    }

    /// Render as a query string (no leading `?`) with only non-default fields.
    pub fn encode(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        if self.page != 1 {
            out.append_pair(PAGE_PARAM, &self.page.to_string());
        }
        if !self.search.is_empty() {
            out.append_pair(SEARCH_PARAM, &self.search);
        }
        if !self.category.is_empty() {
            out.append_pair(CATEGORY_PARAM, &self.category);
        }
        if let Some(sort) = self.sort {
            out.append_pair(SORT_PARAM, &sort.to_string());
        }
        out.finish()
    }

    /// Listing URL (path + query) for this state.
    pub fn href(&self) -> String {
        let query = self.encode();
        if query.is_empty() {
            "/".to_string()
        } else {
            format!("/?{query}")
        }
    }

    /// Whether every field holds its default value.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Number of items preceding this page for a given page size.
    pub fn skip(&self, limit: u32) -> u32 {
        self.page.saturating_sub(1).saturating_mul(limit)
    }

    /// Same filters, different page, clamped to `1..=MAX_PAGE`.
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.clamp(1, MAX_PAGE),
            ..self.clone()
        }
    }

    /// Apply one edit. Every edit except `Page` lands back on page 1.
    pub fn apply(&self, change: QueryChange) -> Self {
        match change {
            QueryChange::Search(search) => Self {
                search,
                page: 1,
                ..self.clone()
            },
            QueryChange::Category(category) => Self {
                category,
                page: 1,
                ..self.clone()
            },
            QueryChange::Sort(sort) => Self {
                sort,
                page: 1,
                ..self.clone()
            },
            QueryChange::Page(page) => self.with_page(page),
            QueryChange::Reset => Self::default(),
        }
    }
}
