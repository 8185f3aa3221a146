use pulseapi_ai_service::config::{LoggingSettings, Settings};
use pulseapi_ai_service::server;
use tracing::{error, info};

#[actix_web::main]
async fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            server::init_tracing(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    server::init_tracing(&settings.logging);
    info!("Configuration loaded successfully");

    if let Err(e) = server::run(settings).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
