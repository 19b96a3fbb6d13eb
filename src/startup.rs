use crate::email_client::EmailClient;
use crate::routes::{health_check, register};
use actix_web::dev::Server;

use actix_web::{web, App, HttpServer};

use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub fn run(listener: TcpListener, email_client: EmailClient) -> Result<Server, std::io::Error> {
    // one client instance shared across workers
    let email_client = web::Data::new(email_client);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/register", web::post().to(register))
            .app_data(email_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
