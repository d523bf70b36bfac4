/// Abbreviates a dollar amount: `$1.23T`, `$4.56B`, `$7.89M`, `$1.00K` or
/// plain `$12.34`. Negative amounts keep their sign in front of the `$`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    let (scaled, suffix) = if magnitude >= 1e12 {
        (magnitude / 1e12, "T")
    } else if magnitude >= 1e9 {
        (magnitude / 1e9, "B")
    } else if magnitude >= 1e6 {
        (magnitude / 1e6, "M")
    } else if magnitude >= 1e3 {
        (magnitude / 1e3, "K")
    } else {
        (magnitude, "")
    };
    format!("{sign}${scaled:.2}{suffix}")
}

/// Formats a unit price: thousands grouped with two decimals from 1000 up,
/// two decimals from 1 up, four decimals below 1.
#[must_use]
pub fn format_price(price: f64) -> String {
    if price >= 1000.0 {
        let fixed = format!("{price:.2}");
        let (int, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        format!("${}.{frac}", group_thousands(int))
    } else if price >= 1.0 {
        format!("${price:.2}")
    } else {
        format!("${price:.4}")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
