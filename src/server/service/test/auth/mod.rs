use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, BearerToken},
    model::user::User,
    service::auth::token::AccessTokenService,
};

mod issue;
mod revoke;
