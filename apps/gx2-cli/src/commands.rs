//! # Command Dispatch
//!
//! Maps each subcommand onto `gx2-core` and renders the outcome.
//!
//! ```text
//! Commands ──► run() ──► Report ──┬──► render_text() ──► stdout
//!                                 └──► serde_json    ──► stdout (--json)
//! ```

use serde::Serialize;
use tracing::{debug, info};

use gx2_core::calculator::AmountSlider;
use gx2_core::money::parse_amount_input;
use gx2_core::{
    format_inn_input, format_phone_input, inn_kind, strip_non_digits, validate_email,
    validate_phone, ContactForm, ContactRequest, IncomeProjection, InnKind,
};

use crate::cli::Commands;
use crate::config::OutputFormat;
use crate::error::CliError;

/// Outcome of one command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Report {
    Inn {
        input: String,
        digits: String,
        valid: bool,
        kind: Option<InnKind>,
    },
    Phone {
        input: String,
        formatted: String,
        valid: bool,
    },
    Email {
        input: String,
        valid: bool,
    },
    MaskInn {
        input: String,
        masked: String,
    },
    Income {
        #[serde(flatten)]
        projection: IncomeProjection,
        monthly_display: String,
        annual_display: String,
    },
    Contact {
        request: ContactRequest,
    },
}

impl Report {
    /// Whether the command's check passed (drives the exit code).
    pub fn passed(&self) -> bool {
        match self {
            Report::Inn { valid, .. } | Report::Phone { valid, .. } | Report::Email { valid, .. } => {
                *valid
            }
            Report::MaskInn { .. } | Report::Income { .. } | Report::Contact { .. } => true,
        }
    }

    /// Human-readable rendering.
    pub fn render_text(&self) -> String {
        match self {
            Report::Inn { digits, valid, kind, .. } => {
                let kind = match kind {
                    Some(InnKind::LegalEntity) => " (legal entity)",
                    Some(InnKind::Individual) => " (individual)",
                    None => "",
                };
                format!("INN {}: {}{}", digits, verdict(*valid), kind)
            }
            Report::Phone { formatted, valid, .. } => {
                format!("Phone {}: {}", formatted, verdict(*valid))
            }
            Report::Email { input, valid } => format!("Email {}: {}", input, verdict(*valid)),
            Report::MaskInn { masked, .. } => masked.clone(),
            Report::Income {
                projection,
                monthly_display,
                annual_display,
            } => format!(
                "Principal: {}\nMonthly income: {}\nAnnual income: {}",
                gx2_core::format_currency(projection.principal),
                monthly_display,
                annual_display
            ),
            Report::Contact { request } => {
                let mut lines = vec![
                    format!("Name: {}", request.name),
                    format!("INN: {}", request.company),
                    format!("Phone: {}", request.phone),
                    format!("Email: {}", request.email),
                ];
                if let Some(message) = &request.message {
                    lines.push(format!("Message: {}", message));
                }
                lines.join("\n")
            }
        }
    }

    /// Renders in the requested output format.
    pub fn render(&self, format: OutputFormat) -> Result<String, CliError> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

fn verdict(valid: bool) -> &'static str {
    if valid {
        "valid"
    } else {
        "invalid"
    }
}

/// Runs a command against the core.
pub fn run(command: &Commands) -> Result<Report, CliError> {
    debug!(?command, "running command");

    let report = match command {
        Commands::Inn { value } => {
            let kind = inn_kind(value);
            Report::Inn {
                input: value.clone(),
                digits: strip_non_digits(value),
                valid: kind.is_some(),
                kind,
            }
        }
        Commands::Phone { value } => Report::Phone {
            input: value.clone(),
            formatted: format_phone_input(value),
            valid: validate_phone(value),
        },
        Commands::Email { value } => Report::Email {
            input: value.clone(),
            valid: validate_email(value),
        },
        Commands::MaskInn { value } => Report::MaskInn {
            input: value.clone(),
            masked: format_inn_input(value),
        },
        Commands::Income { amount, snap } => {
            let mut principal = parse_amount_input(amount);
            if *snap {
                principal = AmountSlider::snap(principal);
            }
            let projection = IncomeProjection::from_principal(principal);
            Report::Income {
                monthly_display: projection.monthly_display(),
                annual_display: projection.annual_display(),
                projection,
            }
        }
        Commands::Contact {
            name,
            inn,
            phone,
            email,
            message,
        } => {
            let mut form = ContactForm::new();
            form.set_name(name);
            form.set_inn(inn);
            form.set_phone(phone);
            form.set_email(email);
            if let Some(message) = message {
                form.set_message(message);
            }
            let request = form.into_request()?;
            info!(company = %request.company, "contact request accepted");
            Report::Contact { request }
        }
    };

    Ok(report)
}
