//! Salary ranges

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported salary currencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// US dollar
    USD,
    /// Euro
    EUR,
    /// Polish złoty
    PLN,
    /// Pound sterling
    GBP,
}

impl Currency {
    /// Every currency, in wire order
    pub const ALL: [Currency; 4] = [Currency::USD, Currency::EUR, Currency::PLN, Currency::GBP];

    /// ISO code as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::PLN => "PLN",
            Currency::GBP => "GBP",
        }
    }

    /// Parse an ISO code (exact, uppercase)
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Salary range attached to a posting.
///
/// `min <= max` is not enforced; postings sometimes list ranges backwards and
/// the record keeps what was written.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Salary {
    /// Currency of both bounds
    pub currency: Currency,

    /// Lower bound, if stated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Upper bound, if stated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl Salary {
    /// Create a salary with both bounds
    pub fn range(currency: Currency, min: f64, max: f64) -> Self {
        Self {
            currency,
            min: Some(min),
            max: Some(max),
        }
    }

    /// Human-readable range such as `USD 80000-120000`
    pub fn describe(&self) -> String {
        let bound = |v: Option<f64>| v.map(|n| n.to_string()).unwrap_or_else(|| "?".to_string());
        format!("{} {}-{}", self.currency, bound(self.min), bound(self.max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_formats_whole_numbers_without_fraction() {
        let salary = Salary::range(Currency::USD, 80000.0, 120000.0);
        assert_eq!(salary.describe(), "USD 80000-120000");
    }

    #[test]
    fn test_describe_marks_missing_bounds() {
        let salary = Salary {
            currency: Currency::GBP,
            min: None,
            max: Some(60000.0),
        };
        assert_eq!(salary.describe(), "GBP ?-60000");
    }

    #[test]
    fn test_missing_bounds_are_omitted_on_the_wire() {
        let salary = Salary {
            currency: Currency::EUR,
            min: None,
            max: None,
        };
        assert_eq!(serde_json::to_string(&salary).unwrap(), r#"{"currency":"EUR"}"#);
    }

    #[test]
    fn test_currency_parse() {
        assert_eq!(Currency::parse("PLN"), Some(Currency::PLN));
        assert_eq!(Currency::parse("usd"), None);
        assert_eq!(Currency::parse("JPY"), None);
    }
}
