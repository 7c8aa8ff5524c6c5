//! # Contact Form
//!
//! The contact form as a plain record: one independent string per field.
//!
//! ## Form Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Contact Form Lifecycle                               │
//! │                                                                         │
//! │  ┌──────────┐  set_*   ┌──────────┐  into_request  ┌────────────────┐   │
//! │  │  Empty   │────────►│ Filling  │──────────────►│ ContactRequest │   │
//! │  │  Form    │◄────────│          │               └────────────────┘   │
//! │  └──────────┘  reset   └────┬─────┘                                    │
//! │                             │ Err(FormError)                           │
//! │                             ▼                                          │
//! │                     toast: title + user_message()                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Delivering a [`ContactRequest`] anywhere is the caller's business.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use ts_rs::TS;

use crate::error::{FormError, FormResult};
use crate::input_mask::{format_inn_input, format_phone_input};
use crate::validation::{validate_email, validate_inn, validate_phone};

// =============================================================================
// Form Field
// =============================================================================

/// The fields of the contact form, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum FormField {
    Name,
    Inn,
    Phone,
    Email,
    Message,
}

impl FormField {
    /// Fields that must be non-empty on submit.
    pub const REQUIRED: [FormField; 4] = [
        FormField::Name,
        FormField::Inn,
        FormField::Phone,
        FormField::Email,
    ];

    /// Label the field carries on the page.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Ваше имя",
            FormField::Inn => "ИНН",
            FormField::Phone => "Телефон",
            FormField::Email => "Email",
            FormField::Message => "Сообщение",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormField::Name => "name",
            FormField::Inn => "inn",
            FormField::Phone => "phone",
            FormField::Email => "email",
            FormField::Message => "message",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Contact Form
// =============================================================================

/// Current contents of the contact form.
///
/// `inn` and `phone` only ever hold masked values when written through
/// [`ContactForm::set_inn`] and [`ContactForm::set_phone`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ContactForm {
    pub name: String,

    /// Company INN; `company` on the wire.
    #[serde(rename = "company")]
    pub inn: String,

    pub phone: String,

    pub email: String,

    pub message: String,
}

impl ContactForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, raw: &str) {
        self.name = raw.to_string();
    }

    /// Stores the INN field through the 12-digit mask.
    pub fn set_inn(&mut self, raw: &str) {
        self.inn = format_inn_input(raw);
        trace!(inn = %self.inn, "inn field updated");
    }

    /// Stores the phone field through the `+7 (XXX) XXX-XX-XX` mask.
    pub fn set_phone(&mut self, raw: &str) {
        self.phone = format_phone_input(raw);
        trace!(phone = %self.phone, "phone field updated");
    }

    pub fn set_email(&mut self, raw: &str) {
        self.email = raw.to_string();
    }

    pub fn set_message(&mut self, raw: &str) {
        self.message = raw.to_string();
    }

    /// Current value of a field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Inn => &self.inn,
            FormField::Phone => &self.phone,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    /// Runs the submit-time checks: INN, then phone, then email.
    ///
    /// ## User Workflow
    /// ```text
    /// Submit clicked
    ///      │
    ///      ├── INN fails checksum?   → InvalidInn
    ///      ├── phone not 7XXXXXXXXXX? → InvalidPhone
    ///      ├── email shape wrong?    → InvalidEmail
    ///      │
    ///      └── Ok → "Заявка отправлена!"
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use gx2_core::{ContactForm, FormError};
    ///
    /// let mut form = ContactForm::new();
    /// form.set_inn("7707083893");
    /// form.set_phone("79122434435");
    /// form.set_email("not-an-email");
    /// assert_eq!(form.validate(), Err(FormError::InvalidEmail));
    /// ```
    pub fn validate(&self) -> FormResult<()> {
        let result = if !validate_inn(&self.inn) {
            Err(FormError::InvalidInn)
        } else if !validate_phone(&self.phone) {
            Err(FormError::InvalidPhone)
        } else if !validate_email(&self.email) {
            Err(FormError::InvalidEmail)
        } else {
            Ok(())
        };

        if let Err(ref err) = result {
            debug!(field = %err.field(), error = %err, "contact form rejected");
        }
        result
    }

    /// Checks the form and turns it into a trimmed request payload.
    ///
    /// Required fields are checked first, in page order, then [`validate`].
    /// A blank message becomes `None`.
    ///
    /// [`validate`]: ContactForm::validate
    pub fn into_request(self) -> FormResult<ContactRequest> {
        if let Some(field) = FormField::REQUIRED
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
        {
            debug!(%field, "contact form missing required field");
            return Err(FormError::Required { field });
        }

        self.validate()?;

        let message = self.message.trim();
        let request = ContactRequest {
            name: self.name.trim().to_string(),
            company: self.inn.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            message: (!message.is_empty()).then(|| message.to_string()),
        };
        debug!(company = %request.company, "contact form accepted");

        Ok(request)
    }

    /// Clears every field, as after a successful submit.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// Contact Request
// =============================================================================

/// A validated contact request, shaped like the form's JSON payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ContactRequest {
    pub name: String,

    /// Company INN.
    pub company: String,

    pub phone: String,

    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub message: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_name("Анна");
        form.set_inn("7707083893");
        form.set_phone("79122434435");
        form.set_email("sales@gx2invest.ru");
        form
    }

    #[test]
    fn test_setters_apply_masks() {
        let mut form = ContactForm::new();
        form.set_inn("77-07/0838 93 extra 99");
        form.set_phone("8 912 243 44 35");
        assert_eq!(form.inn, "770708389399");
        assert_eq!(form.phone, "+7 (912) 243-44-35");
    }

    #[test]
    fn test_fields_are_independent() {
        let mut form = filled_form();
        let before = form.clone();
        form.set_phone("7");
        assert_eq!(form.inn, before.inn);
        assert_eq!(form.email, before.email);
        assert_eq!(form.phone, "+7");
    }

    #[test]
    fn test_validate_ok() {
        assert_eq!(filled_form().validate(), Ok(()));
    }

    #[test]
    fn test_validate_order() {
        let mut form = ContactForm::new();
        form.set_inn("7707083892");
        form.set_phone("123");
        form.set_email("nope");
        assert_eq!(form.validate(), Err(FormError::InvalidInn));

        form.set_inn("500100732259");
        assert_eq!(form.validate(), Err(FormError::InvalidPhone));

        form.set_phone("+7 (912) 243-44-35");
        assert_eq!(form.validate(), Err(FormError::InvalidEmail));

        form.set_email("a@b.c");
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_masked_domestic_phone_passes() {
        // The mask rewrites a leading 8 to +7, so the stored value validates.
        let mut form = filled_form();
        form.set_phone("89122434435");
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_into_request() {
        let mut form = filled_form();
        form.set_name("  Анна  ");
        form.set_message("   ");
        let request = form.into_request().expect("form is valid");
        assert_eq!(request.name, "Анна");
        assert_eq!(request.company, "7707083893");
        assert_eq!(request.phone, "+7 (912) 243-44-35");
        assert_eq!(request.message, None);
    }

    #[test]
    fn test_into_request_keeps_message() {
        let mut form = filled_form();
        form.set_message(" Хотим разместить 10 млн ");
        let request = form.into_request().expect("form is valid");
        assert_eq!(request.message.as_deref(), Some("Хотим разместить 10 млн"));
    }

    #[test]
    fn test_into_request_required_first() {
        let mut form = ContactForm::new();
        form.set_inn("bad");
        assert_eq!(
            form.clone().into_request(),
            Err(FormError::Required {
                field: FormField::Name
            })
        );

        form.set_name("Анна");
        assert_eq!(
            form.into_request(),
            Err(FormError::Required {
                field: FormField::Inn
            })
        );
    }

    #[test]
    fn test_into_request_runs_validators() {
        let mut form = filled_form();
        form.set_email("a@b");
        assert_eq!(form.into_request(), Err(FormError::InvalidEmail));
    }

    #[test]
    fn test_reset() {
        let mut form = filled_form();
        form.set_message("hello");
        form.reset();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_value(filled_form()).expect("form serializes");
        assert_eq!(json["company"], "7707083893");
        assert!(json.get("inn").is_none());

        let request = filled_form().into_request().expect("form is valid");
        let json = serde_json::to_value(request).expect("request serializes");
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_field_names() {
        assert_eq!(FormField::Inn.to_string(), "inn");
        assert_eq!(FormField::Inn.label(), "ИНН");
        assert_eq!(FormField::REQUIRED.len(), 4);
    }
}
