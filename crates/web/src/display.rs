//! Display formatting for product and review fields.

use chrono::{DateTime, Utc};

use shopporium_products::{REVIEW_SORT_PARAM, ReviewSort};

const MAX_STARS: u8 = 5;

/// Price in rand with two decimals, e.g. `R12.50`.
pub fn price(amount: f64) -> String {
    format!("R{amount:.2}")
}

/// Card rating line, e.g. `Rating: 4.5/5`.
pub fn rating(value: f64) -> String {
    format!("Rating: {value}/5")
}

/// Detail-page rating line, e.g. `Rating: 4.5 / 5`.
pub fn detail_rating(value: f64) -> String {
    format!("Rating: {value} / 5")
}

/// Filled stars for `rating`, padded with empty stars up to five.
pub fn stars(rating: u8) -> String {
    let filled = rating.min(MAX_STARS) as usize;
    let empty = MAX_STARS as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

/// Review date as `dd/mm/yyyy`.
pub fn review_date(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn stock_label(stock: i64) -> &'static str {
    if stock > 0 { "(In Stock)" } else { "(Out of Stock)" }
}

/// Detail route URL carrying the chosen review order.
pub fn review_sort_href(path: &str, sort: Option<ReviewSort>) -> String {
    match sort {
        Some(sort) => format!("{path}?{REVIEW_SORT_PARAM}={}", sort.as_str()),
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn price_has_two_decimals() {
        assert_eq!(price(12.5), "R12.50");
        assert_eq!(price(9.999), "R10.00");
        assert_eq!(price(0.0), "R0.00");
    }

    #[test]
    fn rating_keeps_natural_precision() {
        assert_eq!(rating(4.94), "Rating: 4.94/5");
        assert_eq!(rating(5.0), "Rating: 5/5");
        assert_eq!(detail_rating(3.5), "Rating: 3.5 / 5");
    }

    #[test]
    fn stars_pad_to_five_and_clamp() {
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(9), "★★★★★");
    }

    #[test]
    fn review_date_is_day_first() {
        let date = Utc.with_ymd_and_hms(2024, 5, 3, 8, 56, 21).unwrap();
        assert_eq!(review_date(&date), "03/05/2024");
    }

    #[test]
    fn stock_label_reflects_availability() {
        assert_eq!(stock_label(4), "(In Stock)");
        assert_eq!(stock_label(0), "(Out of Stock)");
    }

    #[test]
    fn review_sort_href_sets_or_clears_param() {
        assert_eq!(
            review_sort_href("/product/7", Some(ReviewSort::Rating)),
            "/product/7?reviewSort=rating"
        );
        assert_eq!(review_sort_href("/product/7", None), "/product/7");
    }
}
