//! One-time admin codes for bootstrapping the first administrator.
//!
//! When the server starts without any admin user it generates a code, logs a login link
//! containing it and keeps the code in memory. The first login presenting the code before
//! it expires is granted admin privileges; the code is consumed on use.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Lifetime of a generated admin code.
const ADMIN_CODE_TTL: Duration = Duration::from_secs(60);

const ADMIN_CODE_LENGTH: usize = 32;

#[derive(Clone)]
struct AdminCode {
    code: String,
    expires_at: Instant,
}

impl AdminCode {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-memory store for the current admin code, shared through `AppState`.
#[derive(Clone)]
pub struct AdminCodeService {
    code: Arc<RwLock<Option<AdminCode>>>,
    ttl: Duration,
}

impl AdminCodeService {
    pub fn new() -> Self {
        Self::with_ttl(ADMIN_CODE_TTL)
    }

    /// Creates a service whose codes live for `ttl` instead of the default 60 seconds.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
            ttl,
        }
    }

    /// Generates a random alphanumeric code, replacing any previous one.
    ///
    /// # Returns
    /// - `String` - The generated code
    pub async fn generate(&self) -> String {
        let code = Self::random_code();

        *self.code.write().await = Some(AdminCode {
            code: code.clone(),
            expires_at: Instant::now() + self.ttl,
        });

        code
    }

    /// Checks `input` against the stored code and consumes it on success.
    ///
    /// An expired code is dropped and never validates. A wrong guess leaves a valid code
    /// in place.
    ///
    /// # Returns
    /// - `true` - Code matched and had not expired
    /// - `false` - No code, expired code, or mismatch
    pub async fn validate_and_consume(&self, input: &str) -> bool {
        let mut code = self.code.write().await;

        let Some(stored) = code.as_ref() else {
            return false;
        };

        if stored.is_expired() {
            *code = None;
            return false;
        }

        if constant_time_eq::constant_time_eq(stored.code.as_bytes(), input.as_bytes()) {
            *code = None;
            return true;
        }

        false
    }

    fn random_code() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";

        let mut rng = rand::rng();

        (0..ADMIN_CODE_LENGTH)
            .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
            .collect()
    }

    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        let code = self.code.read().await;
        code.as_ref().is_some_and(|stored| !stored.is_expired())
    }
}

impl Default for AdminCodeService {
    fn default() -> Self {
        Self::new()
    }
}
