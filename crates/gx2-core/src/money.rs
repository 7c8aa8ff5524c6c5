//! # Money Module
//!
//! Ruble display formatting and parsing of the calculator's amount field.
//!
//! ## Display Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ru-RU, RUB, zero fraction digits                                       │
//! │                                                                         │
//! │    15000        →  "15 000 ₽"                                           │
//! │    1234567.5    →  "1 234 568 ₽"   (half rounds away from zero)         │
//! │    -2500        →  "-2 500 ₽"                                           │
//! │                                                                         │
//! │  Group separator and the space before ₽ are U+00A0 NO-BREAK SPACE.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tests should compare the digits recovered from the output rather than
//! exact bytes; the separator glyph is a locale-data detail.

use crate::validation::strip_non_digits;

/// Separator between digit groups and before the currency sign.
pub const GROUP_SEPARATOR: char = '\u{a0}';

/// Russian ruble sign.
pub const RUBLE_SIGN: char = '₽';

/// Groups an ASCII digit string in threes from the right.
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3 * GROUP_SEPARATOR.len_utf8());

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }

    grouped
}

/// Formats a whole number with ru-RU digit grouping.
///
/// ## Example
/// ```rust
/// use gx2_core::money::group_thousands;
///
/// assert_eq!(group_thousands(1_000_000), "1\u{a0}000\u{a0}000");
/// assert_eq!(group_thousands(999), "999");
/// ```
pub fn group_thousands(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Formats a value as whole rubles, e.g. `15 000 ₽`.
///
/// ## Rules
/// - Rounded to the nearest ruble, halves away from zero
/// - Grouped with [`GROUP_SEPARATOR`], suffixed with `" ₽"`
/// - No upper bound: `1e20` renders all 21 digits
/// - Infinities render as `∞ ₽` / `-∞ ₽`; never panics
///
/// ## Outside the non-negative domain
/// - NaN renders as `0 ₽` (the browser formatter prints a localized "не число")
/// - Values in `(-0.5, 0)` render as `0 ₽`, without the browser's `-0 ₽`
///
/// ## Example
/// ```rust
/// use gx2_core::money::format_currency;
///
/// let shown = format_currency(15_000.0);
/// let digits: String = shown.chars().filter(|c| c.is_ascii_digit()).collect();
/// assert_eq!(digits, "15000");
/// assert!(shown.ends_with('₽'));
/// ```
pub fn format_currency(value: f64) -> String {
    let amount = if value.is_nan() {
        "0".to_string()
    } else if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        format!("{}∞", sign)
    } else {
        let rounded = value.round();
        let sign = if rounded < 0.0 { "-" } else { "" };
        format!("{}{}", sign, group_digits(&format!("{:.0}", rounded.abs())))
    };

    format!("{}{}{}", amount, GROUP_SEPARATOR, RUBLE_SIGN)
}

/// Reads the calculator's amount field as a number.
///
/// Non-digits (including group separators the field itself displays) are
/// stripped; an empty result reads as `0`.
///
/// ## Example
/// ```rust
/// use gx2_core::money::parse_amount_input;
///
/// assert_eq!(parse_amount_input("1 000 000"), 1_000_000.0);
/// assert_eq!(parse_amount_input(""), 0.0);
/// ```
pub fn parse_amount_input(raw: &str) -> f64 {
    let digits = strip_non_digits(raw);
    if digits.is_empty() {
        return 0.0;
    }
    digits.parse::<f64>().unwrap_or(0.0)
}

/// Re-renders the amount field text with ru-RU grouping as the user types.
///
/// ## Example
/// ```rust
/// use gx2_core::money::format_amount_input;
///
/// assert_eq!(format_amount_input("1000000"), "1\u{a0}000\u{a0}000");
/// assert_eq!(format_amount_input("abc"), "");
/// ```
pub fn format_amount_input(raw: &str) -> String {
    let digits = strip_non_digits(raw);
    if digits.is_empty() {
        return String::new();
    }

    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        "0".to_string()
    } else {
        group_digits(significant)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
