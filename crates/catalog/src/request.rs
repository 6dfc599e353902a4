//! Query parameters for `GET /products`.

use shopporium_core::QueryState;

/// Build the listing request parameters in wire order:
/// `limit, skip, q, category, sort, order`.
///
/// Empty search and category are left out; sort contributes `sort` and
/// `order` only when set.
pub fn list_params(query: &QueryState, limit: u32) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("limit", limit.to_string()),
        ("skip", query.skip(limit).to_string()),
    ];
    if !query.search.is_empty() {
        params.push(("q", query.search.clone()));
    }
    if !query.category.is_empty() {
        params.push(("category", query.category.clone()));
    }
    if let Some(sort) = query.sort {
        params.push(("sort", sort.field.as_str().to_string()));
        params.push(("order", sort.order.as_str().to_string()));
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopporium_core::{PAGE_SIZE, SortField, SortOption, SortOrder};

    fn render(params: &[(&str, String)]) -> String {
        params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    #[test]
    fn phone_search_sorted_by_price() {
        let query = QueryState {
            page: 1,
            search: "phone".into(),
            category: String::new(),
            sort: Some(SortOption::new(SortField::Price, SortOrder::Asc)),
        };
        assert_eq!(
            render(&list_params(&query, PAGE_SIZE)),
            "limit=20&skip=0&q=phone&sort=price&order=asc"
        );
    }

    #[test]
    fn category_and_page_offset() {
        let query = QueryState {
            page: 3,
            category: "beauty".into(),
            sort: Some(SortOption::new(SortField::Title, SortOrder::Desc)),
            ..QueryState::default()
        };
        assert_eq!(
            render(&list_params(&query, PAGE_SIZE)),
            "limit=20&skip=40&category=beauty&sort=title&order=desc"
        );
    }

    #[test]
    fn default_query_only_pages() {
        assert_eq!(
            render(&list_params(&QueryState::default(), PAGE_SIZE)),
            "limit=20&skip=0"
        );
    }
}
