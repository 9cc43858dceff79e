use crate::configuration::Settings;
use crate::database::Database;
use crate::extensions::{ExtensionContext, ExtensionRegistry};
use crate::routes;
use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::Key;
use actix_web::{dev::Server, web, App, HttpServer};
use anyhow::Context;
use secrecy::{ExposeSecret, Secret};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

// A struct to hold the newly built server, and its port
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Load the configured extensions, bind the listener and build the server.
    ///
    /// # Errors
    ///
    /// Fails if an extension can't be loaded or mounted, if the address
    /// can't be bound, or if the session key is too short.
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        // lazy: extensions that never query it never open a connection
        let context = ExtensionContext {
            database: Database::connect_lazy(&configuration.database),
        };
        let registry = ExtensionRegistry::from_settings(&configuration.extensions, &context)
            .context("Failed to load the configured extensions.")?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        // port 0 asks the OS for a random free port, so read back what we got
        let listener =
            TcpListener::bind(&address).with_context(|| format!("Failed to bind {}", address))?;
        let port = listener.local_addr()?.port();
        tracing::info!(%address, port, extensions = ?registry, "Starting server");

        let server = run(listener, registry, configuration.application.hmac_secret)?;

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

/// Builds the server: request tracing, sessions, `/health_check`, and every
/// mounted extension.
///
/// # Errors
///
/// Fails if `hmac_secret` is shorter than 64 bytes or the listener can't be used.
pub fn run(
    listener: TcpListener,
    registry: ExtensionRegistry,
    hmac_secret: Secret<String>,
) -> Result<Server, anyhow::Error> {
    // signs the session cookie
    let secret_key = Key::try_from(hmac_secret.expose_secret().as_bytes())
        .map_err(|e| anyhow::anyhow!("Invalid session key: {:?}", e))?;

    // the closure runs once per worker thread, so everything it captures is cloned in
    let server = HttpServer::new(move || {
        App::new()
            .wrap(SessionMiddleware::new(
                CookieSessionStore::default(),
                secret_key.clone(),
            ))
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(routes::health_check))
            // host routes first: an extension mounted at the root would
            // otherwise shadow them
            .configure(|cfg| registry.configure(cfg))
    })
    .listen(listener)?
    .run();

    //.await // Don't call await here - return the server so the caller decides how to run it.
    Ok(server)
}
