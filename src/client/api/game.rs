use crate::{
    client::model::error::ApiError,
    model::{
        game::{
            AnswerDto, AnswerResultDto, Difficulty, GameResultDto, GameStateDto, PlayerDto,
            StartGameDto, VoteDto,
        },
        quiz::QuizDto,
    },
};

use super::helper::{
    delete, get, parse_empty_response, parse_response, post, send_request, serialize_json,
};

/// Start a game and remember the player in the session
pub async fn start_game(
    player_name: String,
    quiz_id: i32,
    difficulty: Difficulty,
) -> Result<PlayerDto, ApiError> {
    let payload = StartGameDto {
        player_name,
        quiz_id,
        difficulty,
    };
    let body = serialize_json(&payload)?;

    let response = send_request(post("/api/games").body(body)).await?;
    parse_response(response).await
}

/// Get the current question and player state
pub async fn get_game_state(quiz_id: i32, player_id: i32) -> Result<GameStateDto, ApiError> {
    let url = format!("/api/quizzes/{}/players/{}", quiz_id, player_id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn answer(
    quiz_id: i32,
    player_id: i32,
    choice_id: i32,
) -> Result<AnswerResultDto, ApiError> {
    let url = format!("/api/quizzes/{}/players/{}/answer", quiz_id, player_id);
    let body = serialize_json(&AnswerDto { choice_id })?;

    let response = send_request(post(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn quit_game(quiz_id: i32, player_id: i32) -> Result<(), ApiError> {
    let url = format!("/api/quizzes/{}/players/{}", quiz_id, player_id);

    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}

pub async fn vote(quiz_id: i32, player_id: i32, upvote: bool) -> Result<QuizDto, ApiError> {
    let url = format!("/api/quizzes/{}/players/{}/vote", quiz_id, player_id);
    let body = serialize_json(&VoteDto { upvote })?;

    let response = send_request(post(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn get_result(quiz_id: i32, player_id: i32) -> Result<GameResultDto, ApiError> {
    let url = format!("/api/quizzes/{}/players/{}/result", quiz_id, player_id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
