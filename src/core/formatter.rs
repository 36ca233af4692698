use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// How monetary amounts are written out. The default is the Chilean peso
/// style: `$` prefix, `.` between thousands and no decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub thousands_separator: String,
    pub decimal_separator: String,
    pub decimals: u32,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            thousands_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            decimals: 0,
        }
    }
}

impl CurrencyFormat {
    /// `$1,234,567.00` style.
    pub fn en_us() -> Self {
        Self {
            symbol: "$".to_string(),
            thousands_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            decimals: 2,
        }
    }

    /// Rounds half to even at `decimals` places and groups the integer part.
    /// Negative amounts get a leading `-` before the symbol.
    pub fn format(&self, amount: Decimal) -> String {
        let mut rounded = amount
            .abs()
            .round_dp_with_strategy(self.decimals, RoundingStrategy::MidpointNearestEven);
        rounded.rescale(self.decimals);

        let text = rounded.to_string();
        let (integer, fraction) = match text.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (text.as_str(), None),
        };

        let mut out = String::new();
        if amount.is_sign_negative() && !rounded.is_zero() {
            out.push('-');
        }
        out.push_str(&self.symbol);
        out.push_str(&group_thousands(integer, &self.thousands_separator));
        if let Some(fraction) = fraction {
            out.push_str(&self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }
}

/// Formats with the default [`CurrencyFormat`].
pub fn format_currency(amount: Decimal) -> String {
    CurrencyFormat::default().format(amount)
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format() {
        assert_eq!(format_currency(Decimal::from(1_234_567)), "$1.234.567");
        assert_eq!(format_currency(Decimal::from(1_500_000)), "$1.500.000");
        assert_eq!(format_currency(Decimal::from(999)), "$999");
        assert_eq!(format_currency(Decimal::from(1000)), "$1.000");
        assert_eq!(format_currency(Decimal::ZERO), "$0");
    }

    #[test]
    fn test_rounds_half_to_even() {
        assert_eq!(format_currency(Decimal::new(25, 1)), "$2");
        assert_eq!(format_currency(Decimal::new(35, 1)), "$4");
        assert_eq!(format_currency(Decimal::new(12344, 1)), "$1.234");
        assert_eq!(format_currency(Decimal::new(135_802_467, 2)), "$1.358.025");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_currency(Decimal::from(-1500)), "-$1.500");
        assert_eq!(format_currency(Decimal::new(-4, 1)), "$0");
    }

    #[test]
    fn test_configurable_locale() {
        let format = CurrencyFormat::en_us();
        assert_eq!(format.format(Decimal::from(1_234_567)), "$1,234,567.00");

        let format = CurrencyFormat {
            decimals: 2,
            ..CurrencyFormat::default()
        };
        assert_eq!(format.format(Decimal::new(12345, 1)), "$1.234,50");
        assert_eq!(format.format(Decimal::new(1234567, 2)), "$12.345,67");

        let format = CurrencyFormat {
            symbol: "CLP ".to_string(),
            ..CurrencyFormat::default()
        };
        assert_eq!(format.format(Decimal::from(15000)), "CLP 15.000");
    }
}
