mod model;
mod server;

use tokio::{net::TcpListener, signal};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    router,
    scheduler::registration_completion,
    service::{admin::code::AdminCodeService, payment::gateway::PaymentGateway},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    let admin_code_service = AdminCodeService::new();

    // Log a one-time admin login link if no admin exists yet
    startup::check_for_admin(&db, &config, &admin_code_service).await?;

    let payment_gateway = PaymentGateway::new(
        config.payment_key_id.clone(),
        config.payment_key_secret.clone(),
        config.payment_api_url.clone(),
    );

    registration_completion::start_scheduler(db.clone(), config.access_token_ttl_days).await?;

    let app = router::router(&config.app_url)?
        .with_state(AppState {
            db,
            http_client,
            oauth_client,
            oauth_userinfo_url: config.oauth_userinfo_url.clone(),
            admin_code_service,
            payment_gateway,
            access_token_ttl_days: config.access_token_ttl_days,
        })
        .layer(session);

    let listener = TcpListener::bind(&config.bind_address).await?;

    tracing::info!("Server listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
