//! Salary range detection

use once_cell::sync::Lazy;
use regex::Regex;
use skillmatrix_domain::{Currency, Salary};

/// `<currency> <min>[k] -|– [<currency>] <max>[k]`
static SALARY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(\$|€|£|PLN)\s*((?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d{2})?)\s*([kK]\b)?\s*[-–]\s*(?:\$|€|£|PLN)?\s*((?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d{2})?)\s*([kK]\b)?",
    )
    .unwrap()
});

pub(crate) fn extract_salary(text: &str) -> Option<Salary> {
    let caps = SALARY_PATTERN.captures(text)?;

    let currency = match &caps[1] {
        "€" => Currency::EUR,
        "£" => Currency::GBP,
        "PLN" => Currency::PLN,
        _ => Currency::USD,
    };

    let min_in_thousands = caps.get(3).is_some();
    let max_in_thousands = caps.get(5).is_some();

    // A trailing "k" applies to the whole range ("$50-70k").
    let min = scale(parse_amount(&caps[2])?, min_in_thousands || max_in_thousands);
    let max = scale(parse_amount(&caps[4])?, max_in_thousands);

    if min <= 0.0 || max <= 0.0 || !min.is_finite() || !max.is_finite() {
        return None;
    }

    Some(Salary::range(currency, min, max))
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.replace(',', "").parse().ok()
}

fn scale(amount: f64, thousands: bool) -> f64 {
    if thousands {
        amount * 1000.0
    } else {
        amount
    }
}
