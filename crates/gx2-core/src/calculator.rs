//! # Income Calculator
//!
//! Projects monthly and annual income from a principal at a fixed rate.
//!
//! ## Calculator Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Amount field "1 000 000"  ◄──── Slider [100 000 .. 50 000 000]          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse_amount_input → 1000000.0                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  IncomeProjection::from_principal ← THIS MODULE                         │
//! │       ├── monthly = principal × 0.18 / 12   → "15 000 ₽"                │
//! │       └── annual  = monthly × 12            → "180 000 ₽"               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The calculation itself accepts any value. Range limits belong to the
//! slider and are only applied when the caller asks via [`AmountSlider::snap`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{format_currency, parse_amount_input};

/// Annual rate advertised on the page (18%).
pub const ANNUAL_RATE: f64 = 0.18;

/// Months the annual rate is spread over.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Monthly income for a principal at [`ANNUAL_RATE`].
///
/// No clamping: negative or out-of-slider values are computed as given.
///
/// ## Example
/// ```rust
/// use gx2_core::calculator::calculate_monthly_income;
///
/// assert_eq!(calculate_monthly_income(1_000_000.0), 15_000.0);
/// assert_eq!(calculate_monthly_income(0.0), 0.0);
/// ```
pub fn calculate_monthly_income(principal: f64) -> f64 {
    principal * ANNUAL_RATE / f64::from(MONTHS_PER_YEAR)
}

// =============================================================================
// Income Projection
// =============================================================================

/// Monthly and annual income derived from one principal.
///
/// Built fresh for every principal; there is no setter, so the derived
/// fields cannot drift from the principal that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct IncomeProjection {
    /// Amount placed, in rubles.
    pub principal: f64,

    /// `principal × ANNUAL_RATE / 12`.
    pub monthly_income: f64,

    /// `monthly_income × 12`.
    pub annual_income: f64,
}

impl IncomeProjection {
    /// Projects income for `principal`.
    ///
    /// ## Example
    /// ```rust
    /// use gx2_core::calculator::IncomeProjection;
    ///
    /// let p = IncomeProjection::from_principal(1_000_000.0);
    /// assert_eq!(p.monthly_income, 15_000.0);
    /// assert_eq!(p.annual_income, 180_000.0);
    /// ```
    pub fn from_principal(principal: f64) -> Self {
        let monthly_income = calculate_monthly_income(principal);
        IncomeProjection {
            principal,
            monthly_income,
            annual_income: monthly_income * f64::from(MONTHS_PER_YEAR),
        }
    }

    /// Projects income straight from the amount field text.
    pub fn from_amount_input(raw: &str) -> Self {
        Self::from_principal(parse_amount_input(raw))
    }

    /// Monthly income as whole rubles, e.g. `15 000 ₽`.
    pub fn monthly_display(&self) -> String {
        format_currency(self.monthly_income)
    }

    /// Annual income as whole rubles, e.g. `180 000 ₽`.
    pub fn annual_display(&self) -> String {
        format_currency(self.annual_income)
    }
}

impl Default for IncomeProjection {
    /// Projection for the amount the field starts with.
    fn default() -> Self {
        IncomeProjection::from_principal(AmountSlider::DEFAULT)
    }
}

// =============================================================================
// Amount Slider
// =============================================================================

/// Bounds of the amount slider next to the calculator.
#[derive(Debug, Clone, Copy)]
pub struct AmountSlider;

impl AmountSlider {
    /// Lowest selectable amount (100 thousand rubles).
    pub const MIN: f64 = 100_000.0;

    /// Highest selectable amount (50 million rubles).
    pub const MAX: f64 = 50_000_000.0;

    /// Slider step.
    pub const STEP: f64 = 100_000.0;

    /// Amount the field shows on first render.
    pub const DEFAULT: f64 = 1_000_000.0;

    /// Clamps `value` into the slider range and snaps it to the nearest step.
    ///
    /// NaN snaps to [`AmountSlider::MIN`].
    ///
    /// ## Example
    /// ```rust
    /// use gx2_core::calculator::AmountSlider;
    ///
    /// assert_eq!(AmountSlider::snap(1_234_567.0), 1_200_000.0);
    /// assert_eq!(AmountSlider::snap(5.0), AmountSlider::MIN);
    /// assert_eq!(AmountSlider::snap(1e12), AmountSlider::MAX);
    /// ```
    pub fn snap(value: f64) -> f64 {
        if value.is_nan() {
            return Self::MIN;
        }
        let clamped = value.clamp(Self::MIN, Self::MAX);
        let steps = ((clamped - Self::MIN) / Self::STEP).round();
        (Self::MIN + steps * Self::STEP).min(Self::MAX)
    }

    /// Whether `value` is inside the slider range.
    pub fn contains(value: f64) -> bool {
        (Self::MIN..=Self::MAX).contains(&value)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
