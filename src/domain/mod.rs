//! src/domain/mod.rs

mod client;
mod client_email;
mod new_client;

pub use client::Client;
pub use client_email::ClientEmail;
pub use new_client::{ClientFormData, NewClient};

/// Validation error for incoming client data
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields: name, email, business_name")]
    MissingFields,
    // the rejected address is kept for the logs, not for the response
    #[error("Invalid email format")]
    InvalidEmail(String),
}
