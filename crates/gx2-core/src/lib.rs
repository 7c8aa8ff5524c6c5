//! # gx2-core: Pure Form & Calculator Logic for Gx2 Invest
//!
//! This crate holds the only non-presentational logic of the Gx2 Invest
//! landing page: the contact form's validators and input masks, and the
//! hero section's income calculator. Everything here is a pure function.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Gx2 Invest Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Landing page / CLI                           │   │
//! │  │    Hero calculator ──► Contact form ──► Toasts                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ snapshot string in, value out          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ gx2-core (THIS CRATE) ★                         │   │
//! │  │                                                                 │   │
//! │  │  ┌────────────┐ ┌────────────┐ ┌────────────┐ ┌────────────┐   │   │
//! │  │  │ validation │ │ input_mask │ │ calculator │ │    form    │   │   │
//! │  │  │ INN, phone │ │ +7 (...)   │ │ 18% / 12   │ │ ContactForm│   │   │
//! │  │  │ email      │ │ 12-digit   │ │ projection │ │ FormError  │   │   │
//! │  │  └────────────┘ └────────────┘ └─────┬──────┘ └────────────┘   │   │
//! │  │                                  ┌───▼────┐                     │   │
//! │  │                                  │ money  │ ru-RU rubles        │   │
//! │  │                                  └────────┘                     │   │
//! │  │   NO I/O • NO NETWORK • NO SHARED STATE • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`validation`] - INN checksum, phone and email predicates
//! - [`input_mask`] - Keystroke masks for the phone and INN fields
//! - [`money`] - Ruble formatting and amount-field parsing
//! - [`calculator`] - Income projection at the fixed annual rate
//! - [`form`] - The contact form record and its submit-time checks
//! - [`error`] - Form error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output, safe from any thread
//! 2. **Total**: validators return `false`, masks return a string, nothing panics
//! 3. **No caching**: derived income is always recomputed from the principal
//!
//! ## Example Usage
//!
//! ```rust
//! use gx2_core::{calculate_monthly_income, format_phone_input, validate_inn};
//!
//! assert!(validate_inn("7707083893"));
//! assert_eq!(format_phone_input("79101234567"), "+7 (910) 123-45-67");
//! assert_eq!(calculate_monthly_income(1_000_000.0), 15_000.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod form;
pub mod input_mask;
pub mod money;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::{calculate_monthly_income, AmountSlider, IncomeProjection, ANNUAL_RATE};
pub use error::FormError;
pub use form::{ContactForm, ContactRequest, FormField};
pub use input_mask::{format_inn_input, format_phone_input};
pub use money::format_currency;
pub use validation::{inn_kind, strip_non_digits, validate_email, validate_inn, validate_phone, InnKind};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Toll-free number shown on the page and in the chat widget.
///
/// ## Note
/// This is a display string in the domestic `8-800` form. It does NOT pass
/// [`validate_phone`], which only accepts numbers starting with `7`.
pub const TOLL_FREE_PHONE: &str = "8 800 775 13 76";

/// Address contact requests are delivered to.
pub const SALES_EMAIL: &str = "sales@gx2invest.ru";
