use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "gx2",
    version,
    about = "Gx2 Invest form validators and income calculator"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Check an INN (10 or 12 digits, punctuation ignored)
    Inn { value: String },
    /// Mask a phone number and check it
    Phone { value: String },
    /// Check the shape of an email address
    Email { value: String },
    /// Apply the INN field mask (digits only, at most 12)
    MaskInn { value: String },
    /// Project monthly and annual income for an amount in rubles
    Income {
        amount: String,
        #[arg(long, help = "Clamp and snap the amount to the slider range first")]
        snap: bool,
    },
    /// Validate a full contact form and print the request payload
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        inn: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: Option<String>,
    },
}
