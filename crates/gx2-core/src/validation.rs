//! # Validation Module
//!
//! Submit-time predicates for the contact form fields.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Keystroke masks (input_mask.rs)                               │
//! │  ├── Digits only, capped length                                         │
//! │  └── Progressive "+7 (XXX) XXX-XX-XX" display                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Submit-time checks (THIS MODULE)                              │
//! │  ├── INN weighted checksums                                             │
//! │  ├── Phone: 11 digits, leading 7                                        │
//! │  └── Email: permissive shape check                                      │
//! │                                                                         │
//! │  Every predicate is total: malformed input is `false`, never a panic    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gx2_core::validation::{validate_email, validate_inn, validate_phone};
//!
//! assert!(validate_inn("77-07-083893"));
//! assert!(validate_phone("+7 (912) 243-44-35"));
//! assert!(validate_email("sales@gx2invest.ru"));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// INN Checksum Weights
// =============================================================================

/// Weights for the single check digit of a 10-digit (legal entity) INN.
pub const INN10_WEIGHTS: [u32; 9] = [2, 4, 10, 3, 5, 9, 4, 6, 8];

/// Weights for the first check digit (index 10) of a 12-digit INN.
pub const INN12_FIRST_WEIGHTS: [u32; 10] = [7, 2, 4, 10, 3, 5, 9, 4, 6, 8];

/// Weights for the second check digit (index 11) of a 12-digit INN.
pub const INN12_SECOND_WEIGHTS: [u32; 11] = [3, 7, 2, 4, 10, 3, 5, 9, 4, 6, 8];

/// Number of digits in a valid phone number, country code included.
pub const PHONE_DIGITS: usize = 11;

/// `local@domain.tld`, where no part contains whitespace or `@`.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

// =============================================================================
// Helpers
// =============================================================================

/// Removes every character that is not an ASCII digit.
///
/// ## Example
/// ```rust
/// use gx2_core::validation::strip_non_digits;
///
/// assert_eq!(strip_non_digits("+7 (912) 243-44-35"), "79122434435");
/// assert_eq!(strip_non_digits("no digits"), "");
/// ```
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn digit_values(raw: &str) -> Vec<u32> {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .filter_map(|c| c.to_digit(10))
        .collect()
}

/// `(Σ digit × weight) mod 11 mod 10` over the leading digits.
fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    (sum % 11) % 10
}

// =============================================================================
// INN
// =============================================================================

/// Which kind of taxpayer an INN identifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InnKind {
    /// 10 digits, one check digit.
    LegalEntity,
    /// 12 digits, two check digits (individuals and sole proprietors).
    Individual,
}

impl InnKind {
    /// Number of digits an INN of this kind has.
    pub const fn digit_count(&self) -> usize {
        match self {
            InnKind::LegalEntity => 10,
            InnKind::Individual => 12,
        }
    }
}

/// Classifies an INN, returning `None` unless it passes its checksum(s).
///
/// Non-digit characters are ignored, so `"7707-083-893"` and `"7707083893"`
/// classify the same.
///
/// ## Example
/// ```rust
/// use gx2_core::validation::{inn_kind, InnKind};
///
/// assert_eq!(inn_kind("7707083893"), Some(InnKind::LegalEntity));
/// assert_eq!(inn_kind("500100732259"), Some(InnKind::Individual));
/// assert_eq!(inn_kind("7707083892"), None);
/// ```
pub fn inn_kind(raw: &str) -> Option<InnKind> {
    let digits = digit_values(raw);

    match digits.len() {
        10 => {
            let valid = check_digit(&digits[..9], &INN10_WEIGHTS) == digits[9];
            valid.then_some(InnKind::LegalEntity)
        }
        12 => {
            let first = check_digit(&digits[..10], &INN12_FIRST_WEIGHTS) == digits[10];
            let second = check_digit(&digits[..11], &INN12_SECOND_WEIGHTS) == digits[11];
            (first && second).then_some(InnKind::Individual)
        }
        _ => None,
    }
}

/// Validates a Russian taxpayer number (INN).
///
/// ## Rules
/// - Non-digits are stripped first
/// - 10 digits: check digit at index 9 over weights [`INN10_WEIGHTS`]
/// - 12 digits: check digits at index 10 and 11, both must match
/// - Any other length is invalid
///
/// ## Example
/// ```rust
/// use gx2_core::validation::validate_inn;
///
/// assert!(validate_inn("7707083893"));
/// assert!(!validate_inn("7707083892"));
/// assert!(!validate_inn(""));
/// ```
pub fn validate_inn(raw: &str) -> bool {
    inn_kind(raw).is_some()
}

// =============================================================================
// Phone
// =============================================================================

/// Validates a Russian phone number.
///
/// ## Rules
/// - Exactly 11 digits after stripping punctuation
/// - First digit must be `7`; the domestic `8` prefix is rejected
///
/// ## Example
/// ```rust
/// use gx2_core::validation::validate_phone;
///
/// assert!(validate_phone("+7 (912) 243-44-35"));
/// assert!(!validate_phone("8 (912) 243-44-35"));
/// assert!(!validate_phone("123"));
/// ```
pub fn validate_phone(raw: &str) -> bool {
    let digits = strip_non_digits(raw);
    digits.len() == PHONE_DIGITS && digits.starts_with('7')
}

// =============================================================================
// Email
// =============================================================================

/// Permissive "looks like an email" check.
///
/// Accepts `x@y.z` where no part contains whitespace or `@`. This is not
/// RFC 5322 validation and must stay this permissive.
///
/// ## Example
/// ```rust
/// use gx2_core::validation::validate_email;
///
/// assert!(validate_email("a@b.c"));
/// assert!(!validate_email("a@b"));
/// ```
pub fn validate_email(raw: &str) -> bool {
    EMAIL_REGEX.is_match(raw)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    /// Appends the check digit(s) that make `prefix` a valid INN.
    fn complete_inn(prefix: &[u32]) -> String {
        let mut digits = prefix.to_vec();
        match prefix.len() {
            9 => digits.push(check_digit(&digits, &INN10_WEIGHTS)),
            10 => {
                digits.push(check_digit(&digits, &INN12_FIRST_WEIGHTS));
                digits.push(check_digit(&digits, &INN12_SECOND_WEIGHTS));
            }
            n => panic!("no INN completes a {n}-digit prefix"),
        }
        digits.iter().map(|d| char::from(b'0' + *d as u8)).collect()
    }

    #[test]
    fn test_validate_inn_known_vectors() {
        assert!(validate_inn("7707083893"));
        assert!(validate_inn("7830002293"));
        assert!(!validate_inn("7707083892"));

        assert!(validate_inn("500100732259"));
        assert!(validate_inn("773370857141"));
        assert!(!validate_inn("500100732258"));
        // Both check digits wrong.
        assert!(!validate_inn("500100732269"));
        // Index 10 wrong, index 11 still matches the altered prefix.
        assert!(!validate_inn("500100732202"));
        assert_eq!(check_digit(&digit_values("50010073220"), &INN12_SECOND_WEIGHTS), 2);
    }

    #[test]
    fn test_validate_inn_lengths() {
        assert!(!validate_inn(""));
        assert!(!validate_inn("abc"));
        assert!(!validate_inn("770708389"));
        assert!(!validate_inn("77070838931"));
        assert!(!validate_inn("5001007322591"));
    }

    #[test]
    fn test_validate_inn_ignores_punctuation() {
        assert!(validate_inn(" 7707 083 893 "));
        assert!(validate_inn("ИНН: 7707-083-893"));
        assert!(validate_inn("5001-0073-2259"));
    }

    #[test]
    fn test_inn_kind() {
        assert_eq!(inn_kind("7707083893"), Some(InnKind::LegalEntity));
        assert_eq!(inn_kind("500100732259"), Some(InnKind::Individual));
        assert_eq!(inn_kind("7707083892"), None);
        assert_eq!(InnKind::LegalEntity.digit_count(), 10);
        assert_eq!(InnKind::Individual.digit_count(), 12);
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+7 (912) 243-44-35"));
        assert!(validate_phone("79122434435"));

        // Domestic prefix is not normalised to 7.
        assert!(!validate_phone("8 (912) 243-44-35"));
        assert!(!validate_phone("123"));
        assert!(!validate_phone(""));
        assert!(!validate_phone("+7 (912) 243-44-355"));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("sales@gx2invest.ru"));
        assert!(validate_email("a@b.c"));
        assert!(validate_email("first.last@mail.example.com"));

        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("@b.c"));
        assert!(!validate_email("a@.c"));
        assert!(!validate_email("a@b.c "));
        assert!(!validate_email("a b@c.d"));
        assert!(!validate_email("a@@b.c"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_strip_non_digits() {
        assert_eq!(strip_non_digits("+7 (912) 243-44-35"), "79122434435");
        assert_eq!(strip_non_digits(""), "");
        // Only ASCII digits survive.
        assert_eq!(strip_non_digits("١٢٣4"), "4");
    }

    proptest! {
        #[test]
        fn inn_ignores_non_digits(raw in "[0-9 ()+./a-zА-я-]{0,24}") {
            prop_assert_eq!(validate_inn(&raw), validate_inn(&strip_non_digits(&raw)));
        }

        #[test]
        fn inn10_matches_checksum(digits in prop::collection::vec(0u32..10, 10)) {
            let raw: String = digits.iter().map(|d| char::from(b'0' + *d as u8)).collect();
            let weighted: u32 = digits[..9].iter().zip(INN10_WEIGHTS).map(|(d, w)| d * w).sum();
            prop_assert_eq!(validate_inn(&raw), weighted % 11 % 10 == digits[9]);
        }

        #[test]
        fn completed_inns_validate(prefix in prop::collection::vec(0u32..10, 9..=10)) {
            let inn = complete_inn(&prefix);
            prop_assert!(validate_inn(&inn));

            // Bumping the last check digit always breaks it.
            let mut bumped: Vec<u32> = digit_values(&inn);
            let last = bumped.len() - 1;
            bumped[last] = (bumped[last] + 1) % 10;
            let bumped: String = bumped.iter().map(|d| char::from(b'0' + *d as u8)).collect();
            prop_assert!(!validate_inn(&bumped));
        }

        #[test]
        fn inn12_first_check_digit_is_enforced(
            prefix in prop::collection::vec(0u32..10, 10),
            shift in 1u32..10,
        ) {
            let mut digits = digit_values(&complete_inn(&prefix));

            // Wrong first check digit, second recomputed so it alone still passes.
            digits[10] = (digits[10] + shift) % 10;
            digits[11] = check_digit(&digits[..11], &INN12_SECOND_WEIGHTS);
            let raw: String = digits.iter().map(|d| char::from(b'0' + *d as u8)).collect();
            prop_assert!(!validate_inn(&raw));
        }

        #[test]
        fn phone_requires_eleven_digits(digits in "[0-9]{0,14}") {
            let expected = digits.len() == 11 && digits.starts_with('7');
            prop_assert_eq!(validate_phone(&digits), expected);
        }
    }
}
