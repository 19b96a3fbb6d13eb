use actix_web::http::header::ContentType;
use actix_web::web::Form;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::domain::{RegistrantEmail, Registration};
use crate::email_client::EmailClient;

#[derive(Deserialize)]
pub struct FormData {
    email: Option<String>,
    #[serde(rename = "first-name")]
    first_name: Option<String>,
    #[serde(rename = "last-name")]
    last_name: Option<String>,
}

impl TryFrom<FormData> for Registration {
    type Error = String;

    fn try_from(form: FormData) -> Result<Self, Self::Error> {
        let email = RegistrantEmail::parse(form.email.as_deref().unwrap_or(""))?;
        // absent names are treated as blank, never as a rejection
        Ok(Self {
            email,
            first_name: form.first_name.unwrap_or_default(),
            last_name: form.last_name.unwrap_or_default(),
        })
    }
}

#[tracing::instrument(name = "Handling a new registration", skip(form, email_client))]
pub async fn register(form: Form<FormData>, email_client: web::Data<EmailClient>) -> HttpResponse {
    let registration: Registration = match form.0.try_into() {
        Ok(registration) => registration,
        Err(_) => return plain_text("Invalid email."),
    };
    match email_client
        .send_email(
            &registration.email,
            "Subscription Confirmed",
            &registration.confirmation_html(),
        )
        .await
    {
        Ok(status) => {
            tracing::info!("confirmation email dispatched, provider status {}", status);
            plain_text("Thank you for registering. Confirmation email sent!")
        }
        Err(e) => {
            tracing::error!("failed to send confirmation email: {:?}", e);
            plain_text("Failed to send email.")
        }
    }
}

fn plain_text(body: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(body)
}
