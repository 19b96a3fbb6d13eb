use std::net::TcpListener;

use anyhow::Context;

use enroll::configuration::get_configuration;
use enroll::email_client::EmailClient;
use enroll::{startup, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_subscriber(telemetry::get_subscriber("enroll".into(), "info".into()));

    let configuration = get_configuration().context("Failed to read configuration")?;
    let addr = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(addr).context("unable to bind the address")?;
    let sender = configuration
        .email_client
        .sender()
        .map_err(|e| anyhow::anyhow!("Invalid sender email address: {}", e))?;
    let timeout = configuration.email_client.timeout();
    let email_client = EmailClient::new(
        &configuration.email_client.base_url,
        sender,
        configuration.email_client.api_key,
        timeout,
    );
    tracing::info!(
        "server listening on port: {:?}",
        listener.local_addr().context("no local address")?
    );
    startup::run(listener, email_client)?.await?;
    Ok(())
}
