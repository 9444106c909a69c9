use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{config::ConfigError, AppError},
    service::admin::code::AdminCodeService,
    state::OAuth2Client,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the cookie session layer backed by the application database.
///
/// Sessions only carry OAuth flow state (CSRF token, admin flag) between the login
/// redirect and the callback, so they expire after a week of inactivity.
///
/// # Arguments
/// - `db` - Connected database whose pool the session store shares
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the router
/// - `Err(AppError::SqlxErr)` - Session table migration failed
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool().clone();
    let session_store = SqliteStore::new(pool);

    session_store.migrate().await?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session_layer)
}

/// Builds the outbound HTTP client.
///
/// Redirects are disabled so a compromised endpoint cannot bounce requests elsewhere.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client for the configured identity provider.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with auth, token and redirect endpoints set
/// - `Err(AppError::ConfigErr)` - One of the configured URLs is malformed
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let invalid_url = |name: &str, err: url::ParseError| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: err.to_string(),
    };

    let client = BasicClient::new(ClientId::new(config.oauth_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.oauth_client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(config.oauth_auth_url.clone())
                .map_err(|e| invalid_url("OAUTH_AUTH_URL", e))?,
        )
        .set_token_uri(
            TokenUrl::new(config.oauth_token_url.clone())
                .map_err(|e| invalid_url("OAUTH_TOKEN_URL", e))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(config.oauth_redirect_url.clone())
                .map_err(|e| invalid_url("OAUTH_REDIRECT_URL", e))?,
        );

    Ok(client)
}

/// Logs a one-time admin login link when no admin user exists yet.
///
/// The link carries a code valid for 60 seconds; the first user to sign in through it
/// is granted admin privileges.
///
/// # Arguments
/// - `db` - Database connection
/// - `config` - Configuration providing the application URL
/// - `admin_code_service` - Service storing the generated code
pub async fn check_for_admin(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
    admin_code_service: &AdminCodeService,
) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.admin_exists().await? {
        return Ok(());
    }

    let code = admin_code_service.generate().await;
    let login_url = format!("{}/api/auth/login?admin_code={}", config.app_url, code);

    tracing::info!(
        "No admin user found. Sign in within 60 seconds to become admin: {}",
        login_url
    );

    Ok(())
}
