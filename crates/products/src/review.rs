//! Product reviews and their client-side ordering.

use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopporium_core::{DomainError, DomainResult};

/// URL query parameter carrying the review order on the detail route.
pub const REVIEW_SORT_PARAM: &str = "reviewSort";

/// Customer review embedded in a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub reviewer_name: String,
    pub date: DateTime<Utc>,
    /// 1 to 5.
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
}

/// Client-side review ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewSort {
    /// Most recent first.
    Date,
    /// Highest rating first.
    Rating,
}

impl ReviewSort {
    pub const ALL: [ReviewSort; 2] = [ReviewSort::Date, ReviewSort::Rating];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewSort::Date => "date",
            ReviewSort::Rating => "rating",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReviewSort::Date => "Most Recent",
            ReviewSort::Rating => "Rating",
        }
    }
}

impl FromStr for ReviewSort {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "date" => Ok(ReviewSort::Date),
            "rating" => Ok(ReviewSort::Rating),
            other => Err(DomainError::validation(format!("unknown review sort `{other}`"))),
        }
    }
}

/// Reorder already-fetched reviews. `None` keeps catalog order.
///
/// Both orders are descending and stable, so ties keep their catalog order.
pub fn sort_reviews(reviews: &[Review], sort: Option<ReviewSort>) -> Vec<Review> {
    let mut sorted = reviews.to_vec();
    match sort {
        Some(ReviewSort::Date) => sorted.sort_by(|a, b| b.date.cmp(&a.date)),
        Some(ReviewSort::Rating) => sorted.sort_by(|a, b| b.rating.cmp(&a.rating)),
        None => {}
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn review(name: &str, day: u32, rating: u8) -> Review {
        Review {
            reviewer_name: name.to_string(),
            date: Utc.with_ymd_and_hms(2024, 5, day, 8, 0, 0).unwrap(),
            rating,
            comment: String::new(),
        }
    }

    fn names(reviews: &[Review]) -> Vec<&str> {
        reviews.iter().map(|r| r.reviewer_name.as_str()).collect()
    }

    #[test]
    fn parses_known_values_only() {
        assert_eq!("date".parse::<ReviewSort>().unwrap(), ReviewSort::Date);
        assert_eq!("rating".parse::<ReviewSort>().unwrap(), ReviewSort::Rating);
        assert!("stars".parse::<ReviewSort>().is_err());
        assert!("".parse::<ReviewSort>().is_err());
    }

    #[test]
    fn date_sort_puts_most_recent_first() {
        let reviews = vec![review("a", 1, 5), review("b", 20, 3), review("c", 10, 4)];
        assert_eq!(names(&sort_reviews(&reviews, Some(ReviewSort::Date))), ["b", "c", "a"]);
    }

    #[test]
    fn rating_sort_is_stable_for_ties() {
        let reviews = vec![
            review("a", 1, 4),
            review("b", 2, 5),
            review("c", 3, 4),
            review("d", 4, 5),
        ];
        assert_eq!(
            names(&sort_reviews(&reviews, Some(ReviewSort::Rating))),
            ["b", "d", "a", "c"]
        );
    }

    #[test]
    fn no_sort_keeps_catalog_order() {
        let reviews = vec![review("a", 1, 1), review("b", 2, 5)];
        assert_eq!(sort_reviews(&reviews, None), reviews);
    }

    fn arb_reviews() -> impl Strategy<Value = Vec<Review>> {
        prop::collection::vec((1u32..=28, 1u8..=5), 0..30).prop_map(|raw| {
            raw.into_iter()
                .enumerate()
                .map(|(i, (day, rating))| review(&i.to_string(), day, rating))
                .collect()
        })
    }

    fn original_index(r: &Review) -> usize {
        r.reviewer_name.parse().unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: date order is non-increasing and stable for ties.
        #[test]
        fn date_sort_non_increasing_and_stable(reviews in arb_reviews()) {
            let sorted = sort_reviews(&reviews, Some(ReviewSort::Date));
            prop_assert_eq!(sorted.len(), reviews.len());
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].date >= pair[1].date);
                if pair[0].date == pair[1].date {
                    prop_assert!(original_index(&pair[0]) < original_index(&pair[1]));
                }
            }
        }

        /// Property: rating order is non-increasing and stable for ties.
        #[test]
        fn rating_sort_non_increasing_and_stable(reviews in arb_reviews()) {
            let sorted = sort_reviews(&reviews, Some(ReviewSort::Rating));
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].rating >= pair[1].rating);
                if pair[0].rating == pair[1].rating {
                    prop_assert!(original_index(&pair[0]) < original_index(&pair[1]));
                }
            }
        }
    }
}
