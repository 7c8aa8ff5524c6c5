//! # Error Types
//!
//! Error types for the contact form.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  gx2-core (this file)                                                   │
//! │  └── FormError   - Submit-time contact form failures                    │
//! │                                                                         │
//! │  Validators and masks never fail: they return bool / String.            │
//! │                                                                         │
//! │  gx2-cli                                                                │
//! │  ├── ConfigError - Bad environment values                               │
//! │  └── CliError    - What the command line reports                        │
//! │                                                                         │
//! │  Flow: FormError → CliError → stderr + exit code                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. `Display` is for logs, [`FormError::user_message`] is for the page
//! 3. Wrong length and bad checksum are NOT distinguished to the caller

use thiserror::Error;

use crate::form::FormField;

/// Title shown above every form validation message.
pub const USER_ERROR_TITLE: &str = "Ошибка валидации";

// =============================================================================
// Form Error
// =============================================================================

/// Contact form submission failures.
///
/// Checks run in a fixed order (INN, phone, email) and the first failure
/// is reported, so at most one of these surfaces per submit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// INN has the wrong length or fails its checksum.
    #[error("INN must contain 10 or 12 digits and pass the checksum")]
    InvalidInn,

    /// Phone is not an 11-digit number starting with 7.
    #[error("Phone must be in the format +7 (XXX) XXX-XX-XX")]
    InvalidPhone,

    /// Email does not look like `local@domain.tld`.
    #[error("Email address is not valid")]
    InvalidEmail,

    /// A required field is empty after trimming.
    #[error("{field} is required")]
    Required { field: FormField },
}

impl FormError {
    /// Returns the Russian message shown to the visitor.
    ///
    /// ## Example
    /// ```rust
    /// use gx2_core::FormError;
    ///
    /// assert_eq!(
    ///     FormError::InvalidEmail.user_message(),
    ///     "Введите корректный email адрес."
    /// );
    /// ```
    pub fn user_message(&self) -> String {
        match self {
            FormError::InvalidInn => {
                "ИНН должен содержать 10 или 12 цифр и быть корректным.".to_string()
            }
            FormError::InvalidPhone => {
                "Введите корректный номер телефона в формате +7 (XXX) XXX-XX-XX.".to_string()
            }
            FormError::InvalidEmail => "Введите корректный email адрес.".to_string(),
            FormError::Required { field } => {
                format!("Поле «{}» обязательно для заполнения.", field.label())
            }
        }
    }

    /// The field the error points at.
    pub fn field(&self) -> FormField {
        match self {
            FormError::InvalidInn => FormField::Inn,
            FormError::InvalidPhone => FormField::Phone,
            FormError::InvalidEmail => FormField::Email,
            FormError::Required { field } => *field,
        }
    }
}

/// Convenience type alias for Results with FormError.
pub type FormResult<T> = Result<T, FormError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FormError::InvalidPhone.to_string(),
            "Phone must be in the format +7 (XXX) XXX-XX-XX"
        );
        let err = FormError::Required {
            field: FormField::Name,
        };
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            FormError::InvalidInn.user_message(),
            "ИНН должен содержать 10 или 12 цифр и быть корректным."
        );
        let err = FormError::Required {
            field: FormField::Email,
        };
        assert_eq!(err.user_message(), "Поле «Email» обязательно для заполнения.");
    }

    #[test]
    fn test_error_field() {
        assert_eq!(FormError::InvalidInn.field(), FormField::Inn);
        assert_eq!(FormError::InvalidPhone.field(), FormField::Phone);
        assert_eq!(FormError::InvalidEmail.field(), FormField::Email);
        assert_eq!(
            FormError::Required {
                field: FormField::Message
            }
            .field(),
            FormField::Message
        );
    }
}
