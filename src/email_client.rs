//! src/email_client.rs

use crate::domain::ClientEmail;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

/// What the email provider answered to a send request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendEmailOutcome {
    /// The provider accepted the email and assigned it an id.
    Sent { id: String },
    /// The provider answered with an error object.
    Rejected { message: Option<String> },
    /// The provider answered with neither an id nor an error.
    Unrecognized,
}

pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: String,
    authorization_token: Secret<String>,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: String,
        authorization_token: Secret<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url,
            sender,
            authorization_token,
        })
    }

    /// Send an HTML email through the provider's `/emails` endpoint.
    ///
    /// Transport failures (connection refused, timeout) are returned as `Err`,
    /// everything the provider actually answered is mapped to a `SendEmailOutcome`.
    #[tracing::instrument(
        name = "Sending email through the provider",
        skip_all,
        fields(recipient = %recipient)
    )]
    pub async fn send_email(
        &self,
        recipient: &ClientEmail,
        subject: &str,
        html_content: &str,
    ) -> Result<SendEmailOutcome, reqwest::Error> {
        let url = format!("{}/emails", self.base_url);
        let request_body = SendEmailRequest {
            from: &self.sender,
            to: recipient.as_ref(),
            subject,
            html: html_content,
        };
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.authorization_token.expose_secret())
            .json(&request_body)
            .send()
            .await?;
        let status = response.status();
        let body = match response.json::<SendEmailResponse>().await {
            Ok(body) => body,
            // a body that is not JSON carries neither an id nor an error
            Err(e) if e.is_decode() => {
                tracing::warn!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    %status,
                    "Email provider answered with a body that is not JSON"
                );
                SendEmailResponse::default()
            }
            Err(e) => return Err(e),
        };
        Ok(body.into_outcome(status.is_success()))
    }
}

#[derive(serde::Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

#[derive(serde::Deserialize, Default, Debug)]
struct SendEmailResponse {
    id: Option<String>,
    data: Option<SendEmailData>,
    message: Option<String>,
    name: Option<String>,
    error: Option<ProviderError>,
}

#[derive(serde::Deserialize, Debug)]
struct SendEmailData {
    id: Option<String>,
}

#[derive(serde::Deserialize, Debug)]
struct ProviderError {
    message: Option<String>,
}

impl SendEmailResponse {
    fn into_outcome(self, is_success: bool) -> SendEmailOutcome {
        if let Some(error) = self.error {
            return SendEmailOutcome::Rejected {
                message: error.message,
            };
        }
        if !is_success {
            // error payloads carry at least a `name` or a `message`
            return SendEmailOutcome::Rejected {
                message: self.message.or(self.name),
            };
        }
        match self.id.or(self.data.and_then(|d| d.id)) {
            Some(id) => SendEmailOutcome::Sent { id },
            None => SendEmailOutcome::Unrecognized,
        }
    }
}
