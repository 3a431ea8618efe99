/// Markup applied to the scraped selling price to estimate the list price.
pub const MRP_MARKUP: f64 = 1.2;

/// First code point of every run of ten Unicode decimal digits (category Nd).
const DECIMAL_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Value of a decimal digit in any script, so `'४'` reads as `4`.
fn decimal_value(c: char) -> Option<u32> {
    let cp = c as u32;
    DECIMAL_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&cp))
        .map(|zero| cp - zero)
}

/// Digits that are not decimal, such as superscripts. They count as digits
/// but do not form a number.
fn is_non_decimal_digit(c: char) -> bool {
    matches!(c, '\u{00B2}' | '\u{00B3}' | '\u{00B9}' | '\u{2070}' | '\u{2074}'..='\u{2079}' | '\u{2080}'..='\u{2089}')
}

/// Estimates the MRP from a raw price string.
///
/// Every non-digit character is dropped and the remaining digits are read
/// as one integer, so `"₹1,234"` becomes `1234` and a decimal point is lost
/// along with the separators (`"1,234.50"` reads as `123450`). Digits from
/// other scripts count by value; a superscript digit spoils the number.
pub fn calculate_mrp(price: &str) -> Option<f64> {
    let mut digits = String::new();
    for c in price.chars() {
        if is_non_decimal_digit(c) {
            return None;
        }
        if let Some(d) = decimal_value(c) {
            digits.push(char::from_digit(d, 10)?);
        }
    }
    if digits.is_empty() {
        return None;
    }

    // Long enough runs overflow to infinity, which is kept.
    let value: f64 = digits.parse().ok()?;
    Some(round2(value * MRP_MARKUP))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_currency_and_separators() {
        assert_eq!(calculate_mrp("₹1,234"), Some(1480.8));
        assert_eq!(calculate_mrp("1,29,999"), Some(155998.8));
        assert_eq!(calculate_mrp("999"), Some(1198.8));
    }

    #[test]
    fn decimal_point_is_concatenated_away() {
        assert_eq!(calculate_mrp("1,234.50"), Some(148140.0));
    }

    #[test]
    fn no_digits_is_none() {
        assert_eq!(calculate_mrp("N/A"), None);
        assert_eq!(calculate_mrp(""), None);
        assert_eq!(calculate_mrp("₹,."), None);
    }

    #[test]
    fn other_scripts_read_by_digit_value() {
        assert_eq!(calculate_mrp("₹१,२३४"), Some(1480.8));
        assert_eq!(calculate_mrp("١٢٣٤"), Some(1480.8));
        assert_eq!(calculate_mrp("１,２３４"), Some(1480.8));
    }

    #[test]
    fn vulgar_fractions_are_dropped() {
        assert_eq!(calculate_mrp("₹1,234½"), Some(1480.8));
        assert_eq!(calculate_mrp("½"), None);
    }

    #[test]
    fn superscript_digit_is_none() {
        assert_eq!(calculate_mrp("1,234²"), None);
    }

    #[test]
    fn overflow_is_infinite() {
        assert_eq!(calculate_mrp(&"9".repeat(400)), Some(f64::INFINITY));
    }

    #[test]
    fn zero_price() {
        assert_eq!(calculate_mrp("0"), Some(0.0));
    }
}
