//! src/configuration.rs

use std::time::Duration;

use secrecy::Secret;
use serde::Deserialize;

use crate::domain::RegistrantEmail;

#[derive(Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

#[derive(Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_email: String,
    pub api_key: Secret<String>,
    pub timeout_milliseconds: u64,
}

impl EmailClientSettings {
    pub fn sender(&self) -> Result<RegistrantEmail, String> {
        RegistrantEmail::parse(&self.sender_email)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let mut builder = config::Config::builder()
        .add_source(config::File::with_name("configuration"))
        .add_source(config::Environment::with_prefix("APP").separator("__"));
    // The original deployment configured the provider through these two
    // variables, so keep recognizing them on top of the APP overlay.
    if let Ok(api_key) = std::env::var("SENDGRID_API_KEY") {
        builder = builder.set_override("email_client.api_key", api_key)?;
    }
    if let Ok(sender) = std::env::var("FROM_EMAIL") {
        builder = builder.set_override("email_client.sender_email", sender)?;
    }
    builder.build()?.try_deserialize()
}
