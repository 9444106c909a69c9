use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::access_token::AccessTokenRepository, util::token::hash_token};

mod delete_expired;
