use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware, App, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{LoggingSettings, Settings};
use crate::error::ServiceError;
use crate::routes;

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level. Calling this twice is harmless.
pub fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    let _ = match logging.format.as_str() {
        "pretty" => subscriber.pretty().try_init(),
        "json" => subscriber.json().try_init(),
        _ => subscriber.try_init(),
    };
}

/// The application served by every worker
pub fn app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(middleware::Logger::default())
        .wrap(middleware::Compress::default())
        .configure(routes::configure_routes)
}

/// Bind the HTTP listener and serve until shutdown
pub async fn run(settings: Settings) -> Result<(), ServiceError> {
    let addr = settings.server.address();

    info!("AI Service starting on {}...", addr);

    let mut server = HttpServer::new(app);

    if let Some(workers) = settings.server.workers {
        server = server.workers(workers);
    }

    server
        .bind((settings.server.host.as_str(), settings.server.port))
        .map_err(|source| ServiceError::Bind { addr, source })?
        .run()
        .await?;

    info!("AI Service stopped");
    Ok(())
}
