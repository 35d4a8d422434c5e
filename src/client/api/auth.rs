use crate::{client::model::error::ApiError, model::user::UserDto};

use super::helper::{get, parse_response, send_request};

/// Get the logged in user, `None` for anonymous visitors
pub async fn get_user() -> Result<Option<UserDto>, ApiError> {
    let response = send_request(get("/api/auth/user")).await?;
    parse_response(response).await
}
