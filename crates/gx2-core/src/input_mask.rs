//! # Input Masks
//!
//! Keystroke-time transforms for the contact form's phone and INN fields.
//!
//! Both masks are pure functions of the *current* raw field text. The
//! caller feeds every change event through the mask and stores the result
//! as the new field value; no previous value is consulted.
//!
//! ## Phone Mask Progression
//! ```text
//! digits typed      displayed
//! ──────────────    ──────────────────────
//! ""                ""
//! "7"               "+7"
//! "79"              "+7 (9"
//! "7912"            "+7 (912"
//! "79122"           "+7 (912) 2"
//! "79122434"        "+7 (912) 243-4"
//! "7912243443"      "+7 (912) 243-44-3"
//! "79122434435"     "+7 (912) 243-44-35"
//! ```
//!
//! The first typed digit occupies the country-code slot and is never shown:
//! typing `8 912 ...` displays `+7 (912) ...`.

use crate::validation::strip_non_digits;

/// Maximum digits kept in the INN field (12-digit individual INN).
pub const INN_MAX_DIGITS: usize = 12;

/// Placeholder shown in the empty phone field.
pub const PHONE_PLACEHOLDER: &str = "+7 (___) ___-__-__";

/// `digits[start..end]` clamped to the string length.
///
/// Only ever called with ASCII digit strings, so byte offsets are char offsets.
fn clamped(digits: &str, start: usize, end: usize) -> &str {
    let end = end.min(digits.len());
    let start = start.min(end);
    &digits[start..end]
}

/// Masks a raw phone buffer as `+7 (XXX) XXX-XX-XX`.
///
/// ## Rules
/// - Non-digits are stripped; no digits gives an empty string
/// - Output always starts with `+7`, whatever the first digit was
/// - Digits past the eleventh are dropped
///
/// ## Example
/// ```rust
/// use gx2_core::input_mask::format_phone_input;
///
/// assert_eq!(format_phone_input("79101234567"), "+7 (910) 123-45-67");
/// assert_eq!(format_phone_input("8 (910) 123"), "+7 (910) 123");
/// assert_eq!(format_phone_input(""), "");
/// ```
pub fn format_phone_input(raw: &str) -> String {
    let digits = strip_non_digits(raw);
    let len = digits.len();

    if len == 0 {
        return String::new();
    }

    let mut formatted = String::from("+7");
    if len > 1 {
        formatted.push_str(" (");
        formatted.push_str(clamped(&digits, 1, 4));
    }
    if len >= 5 {
        formatted.push_str(") ");
        formatted.push_str(clamped(&digits, 4, 7));
    }
    if len >= 8 {
        formatted.push('-');
        formatted.push_str(clamped(&digits, 7, 9));
    }
    if len >= 10 {
        formatted.push('-');
        formatted.push_str(clamped(&digits, 9, 11));
    }

    formatted
}

/// Keeps only the first [`INN_MAX_DIGITS`] digits of a raw INN buffer.
///
/// ## Example
/// ```rust
/// use gx2_core::input_mask::format_inn_input;
///
/// assert_eq!(format_inn_input("77-07/0838 93 extra"), "7707083893");
/// assert_eq!(format_inn_input("1234567890123456"), "123456789012");
/// ```
pub fn format_inn_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(INN_MAX_DIGITS)
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
