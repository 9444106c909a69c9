use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

/// Returned by the OAuth callback once the user has been signed in.
///
/// `token` is only ever shown here; the server keeps a hash of it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AccessTokenDto {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserDto,
}
