use crate::{client::model::error::ApiError, model::quiz::QuizDto};

use super::helper::{get, parse_response, send_request};

/// Get quizzes written by the logged in user
pub async fn get_user_quizzes() -> Result<Vec<QuizDto>, ApiError> {
    let response = send_request(get("/api/user/quizzes")).await?;
    parse_response(response).await
}
