use std::net::TcpListener;

use once_cell::sync::Lazy;
use secrecy::Secret;
use wiremock::MockServer;

use enroll::configuration::get_configuration;
use enroll::email_client::EmailClient;
use enroll::telemetry;

// Set TEST_LOG to get the tracing output of the app under test.
static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = telemetry::get_subscriber("test".into(), "debug".into());
        telemetry::init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub addr: String,
    /// Stands in for the email provider; every delivery attempt lands here.
    pub email_server: MockServer,
    pub sender_email: String,
}

impl TestApp {
    pub async fn post_registration(&self, body: &'static str) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/register", self.addr))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect("failed to execute the request")
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let addr = format!("http://127.0.0.1:{}", port);
    let mut configuration = get_configuration().expect("Failed to read configuration");
    configuration.email_client.base_url = email_server.uri();
    configuration.email_client.api_key = Secret::new("test-api-key".to_string());
    let sender_email = configuration.email_client.sender_email.clone();
    let timeout = configuration.email_client.timeout();
    let email_client = EmailClient::new(
        &configuration.email_client.base_url,
        configuration
            .email_client
            .sender()
            .expect("Invalid sender email address"),
        configuration.email_client.api_key,
        timeout,
    );
    let server = enroll::startup::run(listener, email_client).expect("failed to bind address");
    let _ = tokio::spawn(server);
    TestApp {
        addr,
        email_server,
        sender_email,
    }
}
