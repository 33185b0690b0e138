/// Format a star rating for display, e.g. "4.5★" or "4★".
pub fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{}★", rating as i32)
    } else {
        format!("{rating}★")
    }
}

/// Format a price in reais with two decimals, e.g. "R$ 29.90".
pub fn format_price(price: f64) -> String {
    format!("R$ {price:.2}")
}

/// Format how long a book has been on the list.
pub fn format_weeks(weeks: u32) -> String {
    if weeks == 1 {
        "1 week".to_string()
    } else {
        format!("{weeks} weeks")
    }
}

/// Format a list ranking as "#1".
pub fn format_ranking(ranking: u32) -> String {
    format!("#{ranking}")
}
