use actix_web::{web, App, HttpServer};
use khipu_relay::config::Config;
use khipu_relay::middleware::{ErrorHandler, RequestId};
use khipu_relay::modules;
use khipu_relay::payments::PaymentService;
use khipu_relay::webhooks::WebhookVerifier;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing (LOG_FORMAT=json for structured output)
    let json_logs = std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json");
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "khipu_relay=debug,actix_web=info".into()),
        )
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json_logs).then(tracing_subscriber::fmt::layer))
        .init();

    // Load configuration
    let config = Config::from_env()
        .and_then(|config| config.validate().map(|_| config))
        .map_err(|e| {
            tracing::error!("{}", e);
            std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
        })?;

    tracing::info!("Starting Khipu payment relay");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Provider endpoint: {}", config.khipu.payments_url());
    tracing::info!(
        "Callbacks: {}",
        if config.khipu.callbacks_enabled() {
            "enabled"
        } else {
            "disabled (PUBLIC_URL must be https)"
        }
    );

    let payments = PaymentService::from_config(&config.khipu);
    let verifier = WebhookVerifier::new(config.khipu.api_key.clone());

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        let payments = payments.clone();
        let verifier = verifier.clone();

        App::new()
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .configure(move |cfg: &mut web::ServiceConfig| {
                modules::configure(cfg, payments, verifier)
            })
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server listening on http://{}", bind_address);

    server.await
}
