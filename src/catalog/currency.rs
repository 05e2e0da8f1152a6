//! Currency rendering for product prices.

/// Literal rendered when an amount cannot be formatted.
const FALLBACK: &str = "$0.00";

/// Amounts at or above this cannot be represented exactly in cents.
const MAX_FORMATTABLE: f64 = 1e15;

/// Formats an amount as a currency string with two fraction digits and
/// thousands grouping, e.g. `1234.5` becomes `"$1,234.50"`.
///
/// Non-finite or out-of-range amounts fall back to `"$0.00"`.
pub fn currency_formatted(amount: f64) -> String {
    if !amount.is_finite() || amount.abs() >= MAX_FORMATTABLE {
        return FALLBACK.to_string();
    }

    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${}.{:02}", grouped(cents / 100), cents % 100)
}

/// Inserts a comma between every group of three digits.
fn grouped(units: u64) -> String {
    let digits = units.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_two_fraction_digits() {
        assert_eq!(currency_formatted(99.95), "$99.95");
        assert_eq!(currency_formatted(49.99), "$49.99");
        assert_eq!(currency_formatted(10.0), "$10.00");
        assert_eq!(currency_formatted(0.0), "$0.00");
    }

    #[test]
    fn rounds_to_the_nearest_cent() {
        assert_eq!(currency_formatted(0.005), "$0.01");
        assert_eq!(currency_formatted(1.999), "$2.00");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(currency_formatted(1234.5), "$1,234.50");
        assert_eq!(currency_formatted(1_234_567.89), "$1,234,567.89");
    }

    #[test]
    fn negative_amounts_keep_their_sign() {
        assert_eq!(currency_formatted(-49.99), "-$49.99");
    }

    #[test]
    fn unformattable_amounts_fall_back() {
        assert_eq!(currency_formatted(f64::NAN), "$0.00");
        assert_eq!(currency_formatted(f64::INFINITY), "$0.00");
        assert_eq!(currency_formatted(1e18), "$0.00");
    }
}
