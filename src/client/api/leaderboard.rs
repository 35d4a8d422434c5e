use crate::{client::model::error::ApiError, model::leaderboard::LeaderboardDto};

use super::helper::{get, parse_response, send_request};

/// Get the ranked players of a quiz for one difficulty
pub async fn get_leaderboard(quiz_id: i32, difficulty: i32) -> Result<LeaderboardDto, ApiError> {
    let url = format!("/api/quizzes/{}/leaderboard/{}", quiz_id, difficulty);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
