//! src/routes/clients/welcome_email.rs

use askama::Template;

use crate::domain::NewClient;
use crate::email_client::{EmailClient, SendEmailOutcome};

const FALLBACK_ERROR: &str = "Failed to send email";
const UNEXPECTED_RESPONSE: &str = "Unexpected response from provider";

#[derive(Template)]
#[template(path = "welcome_email.html")]
struct WelcomeEmailTemplate<'a> {
    name: &'a str,
    business_name: &'a str,
}

/// Result of the welcome email attempt, reported next to the created client.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EmailDeliveryOutcome {
    pub sent: bool,
    pub to: String,
    pub error: Option<String>,
}

impl EmailDeliveryOutcome {
    fn sent(to: &str) -> Self {
        Self {
            sent: true,
            to: to.to_owned(),
            error: None,
        }
    }

    fn failed(to: &str, error: impl Into<String>) -> Self {
        let error: String = error.into();
        Self {
            sent: false,
            to: to.to_owned(),
            error: Some(if error.is_empty() {
                FALLBACK_ERROR.to_owned()
            } else {
                error
            }),
        }
    }

    /// Fold the answer of the email provider into an outcome. Never fails.
    pub fn from_send_result<E>(to: &str, result: Result<SendEmailOutcome, E>) -> Self
    where
        E: std::fmt::Display + std::fmt::Debug,
    {
        match result {
            Ok(SendEmailOutcome::Sent { id }) => {
                tracing::info!(email_id = %id, "Welcome email accepted by the provider");
                Self::sent(to)
            }
            Ok(SendEmailOutcome::Rejected { message }) => {
                let message = message.unwrap_or_default();
                tracing::error!(error.message = %message, "Email provider rejected the welcome email");
                Self::failed(to, message)
            }
            Ok(SendEmailOutcome::Unrecognized) => {
                tracing::error!("Email provider answered with neither an id nor an error");
                Self::failed(to, UNEXPECTED_RESPONSE)
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Error sending welcome email"
                );
                Self::failed(to, e.to_string())
            }
        }
    }
}

pub fn welcome_email_subject(name: &str) -> String {
    format!("Welcome to Our Accounting Services, {}!", name)
}

#[tracing::instrument(
    name = "Send a welcome email to a new client",
    skip_all,
    fields(client_email = %new_client.email)
)]
pub async fn send_welcome_email(
    email_client: &EmailClient,
    new_client: &NewClient,
) -> EmailDeliveryOutcome {
    let to = new_client.email.as_ref();
    let html_body = WelcomeEmailTemplate {
        name: &new_client.name,
        business_name: &new_client.business_name,
    }
    .render();
    let html_body = match html_body {
        Ok(html_body) => html_body,
        Err(e) => return EmailDeliveryOutcome::from_send_result(to, Err(e)),
    };
    let result = email_client
        .send_email(
            &new_client.email,
            &welcome_email_subject(&new_client.name),
            &html_body,
        )
        .await;
    EmailDeliveryOutcome::from_send_result(to, result)
}
