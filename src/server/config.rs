use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

const DEFAULT_PAYMENT_API_URL: &str = "https://api.razorpay.com";
const DEFAULT_ACCESS_TOKEN_TTL_DAYS: i64 = 7;

pub struct Config {
    pub database_url: String,
    pub app_url: String,
    pub bind_address: String,

    pub oauth_client_id: String,
    pub oauth_client_secret: String,
    pub oauth_redirect_url: String,

    pub oauth_auth_url: String,
    pub oauth_token_url: String,
    pub oauth_userinfo_url: String,

    pub payment_key_id: String,
    pub payment_key_secret: String,
    pub payment_api_url: String,

    pub access_token_ttl_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            app_url: required("APP_URL")?,
            bind_address: optional("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            oauth_client_id: required("OAUTH_CLIENT_ID")?,
            oauth_client_secret: required("OAUTH_CLIENT_SECRET")?,
            oauth_redirect_url: required("OAUTH_REDIRECT_URL")?,
            oauth_auth_url: optional("OAUTH_AUTH_URL", GOOGLE_AUTH_URL),
            oauth_token_url: optional("OAUTH_TOKEN_URL", GOOGLE_TOKEN_URL),
            oauth_userinfo_url: optional("OAUTH_USERINFO_URL", GOOGLE_USERINFO_URL),
            payment_key_id: required("PAYMENT_KEY_ID")?,
            payment_key_secret: required("PAYMENT_KEY_SECRET")?,
            payment_api_url: optional("PAYMENT_API_URL", DEFAULT_PAYMENT_API_URL),
            access_token_ttl_days: match std::env::var("ACCESS_TOKEN_TTL_DAYS") {
                Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                    name: "ACCESS_TOKEN_TTL_DAYS".to_string(),
                    reason: format!("'{}' is not a whole number of days", value),
                })?,
                Err(_) => DEFAULT_ACCESS_TOKEN_TTL_DAYS,
            },
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
