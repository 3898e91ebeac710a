//! src/startup.rs

use crate::configuration::{DatabaseSettings, Settings};
use crate::email_client::EmailClient;
use crate::error::Error;
use crate::routes::{add_client, health_check, list_clients};
use actix_web::{dev::Server, web, web::Data, App, HttpServer};
use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

/// A new type to hold the newly built server and its port
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let connection_pool = get_connection_pool(&configuration.database);
        let email_client = configuration
            .email_client
            .client()
            .context("Failed to build the email client.")?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, connection_pool, email_client)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    // A more expressive name that makes it clear that
    // this function only returns when the application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn get_connection_pool(configuration: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_secs(2))
        .connect_lazy_with(configuration.with_db())
}

/// Bodies are read as JSON whatever their `Content-Type`.
/// Malformed JSON is not the caller's validation problem, it ends up as 500.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            let e = Error::UnexpectedError(anyhow::anyhow!("Failed to read JSON body: {}", err));
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Unexpected error"
            );
            e.into()
        })
}

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    email_client: EmailClient,
) -> Result<Server, std::io::Error> {
    // Wrap the database pool and the email client in a smart pointer
    let db_pool = Data::new(db_pool);
    let email_client = Data::new(email_client);
    // Capture the collaborators from the surrounding environment
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(json_config())
            .route("/health_check", web::get().to(health_check))
            .route("/clients", web::get().to(list_clients))
            .route("/clients", web::post().to(add_client))
            .app_data(db_pool.clone())
            .app_data(email_client.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
