use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        leaderboard::{LeaderboardDto, LeaderboardEntryDto},
    },
    server::{error::AppError, service::leaderboard::LeaderboardService, state::AppState},
};

/// Tag for grouping leaderboard endpoints in OpenAPI documentation
pub static LEADERBOARD_TAG: &str = "leaderboard";

/// Get the leaderboard of a quiz for one difficulty.
///
/// Lists players who reached the finish line, fastest first.
#[utoipa::path(
    get,
    path = "/api/quizzes/{quiz_id}/leaderboard/{difficulty}",
    tag = LEADERBOARD_TAG,
    params(
        ("quiz_id" = i32, Path, description = "Quiz ID"),
        ("difficulty" = i32, Path, description = "0 easy, 1 medium, 2 hard")
    ),
    responses(
        (status = 200, description = "Ranked players", body = LeaderboardDto),
        (status = 400, description = "Invalid difficulty", body = ErrorDto),
        (status = 404, description = "Quiz not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Path((quiz_id, difficulty)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let board = LeaderboardService::new(&state.db)
        .get(quiz_id, difficulty)
        .await?;

    let entries = board
        .players
        .into_iter()
        .enumerate()
        .map(|(index, player)| LeaderboardEntryDto {
            rank: index + 1,
            player_id: player.id,
            name: player.name,
            time_spent: player.time_spent,
            correct_answer: player.correct_answer,
            wrong_answer: player.wrong_answer,
        })
        .collect();

    Ok((
        StatusCode::OK,
        Json(LeaderboardDto {
            quiz: board.quiz.into_dto(),
            difficulty: board.difficulty,
            difficulty_label: board.difficulty.label().to_string(),
            entries,
        }),
    ))
}
