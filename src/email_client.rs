use std::time::Duration;

use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;

use crate::domain::RegistrantEmail;

/// SendGrid v3 `mail/send` payload.
#[derive(Serialize)]
struct SendEmailRequest {
    personalizations: Vec<Personalization>,
    from: EmailAddress,
    subject: String,
    content: Vec<Content>,
}

#[derive(Serialize)]
struct Personalization {
    to: Vec<EmailAddress>,
}

#[derive(Serialize)]
struct EmailAddress {
    email: String,
}

#[derive(Serialize)]
struct Content {
    #[serde(rename = "type")]
    content_type: String,
    value: String,
}

#[derive(thiserror::Error, Debug)]
pub enum DeliveryError {
    #[error("failed to reach the email provider")]
    Transport(#[from] reqwest::Error),
    #[error("the email provider rejected the message with status {0}")]
    Rejected(StatusCode),
}

pub struct EmailClient {
    client: Client,
    base_url: reqwest::Url,
    sender: RegistrantEmail,
    api_key: Secret<String>,
}

impl EmailClient {
    pub fn new(
        base_url: &str,
        sender: RegistrantEmail,
        api_key: Secret<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("unable to build the http client"),
            base_url: reqwest::Url::parse(base_url).expect("unable to parse given url"),
            sender,
            api_key,
        }
    }

    /// Dispatches one message. A non-success provider status is surfaced as
    /// `DeliveryError::Rejected` rather than a successful send.
    pub async fn send_email(
        &self,
        recipient: &RegistrantEmail,
        subject: &str,
        html_content: &str,
    ) -> Result<StatusCode, DeliveryError> {
        let url = self
            .base_url
            .join("v3/mail/send")
            .expect("Unable to `join` url");
        let request_body = SendEmailRequest {
            personalizations: vec![Personalization {
                to: vec![EmailAddress {
                    email: recipient.as_ref().to_owned(),
                }],
            }],
            from: EmailAddress {
                email: self.sender.as_ref().to_owned(),
            },
            subject: subject.to_owned(),
            content: vec![Content {
                content_type: "text/html".to_owned(),
                value: html_content.to_owned(),
            }],
        };
        let response = self
            .client
            .post(url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request_body)
            .send()
            .await?;
        if response.status().is_success() {
            Ok(response.status())
        } else {
            Err(DeliveryError::Rejected(response.status()))
        }
    }
}
