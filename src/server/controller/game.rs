use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        game::{
            AnswerDto, AnswerResultDto, GameResultDto, GameStateDto, PlayerDto, StartGameDto,
            VoteDto,
        },
        quiz::QuizDto,
    },
    server::{
        error::AppError,
        middleware::session::PlayerSession,
        model::quiz::QuestionWithChoices,
        service::game::GameService,
        state::AppState,
    },
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

/// Start a game.
///
/// Creates (or resets, for reserved test players) a player positioned on the first
/// question and remembers it in the visitor's session.
#[utoipa::path(
    post,
    path = "/api/games",
    tag = GAME_TAG,
    request_body = StartGameDto,
    responses(
        (status = 201, description = "Game started", body = PlayerDto),
        (status = 400, description = "Missing player name or quiz without questions", body = ErrorDto),
        (status = 404, description = "Quiz not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_game(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<StartGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let player = GameService::new(&state.db)
        .start(&payload.player_name, payload.quiz_id, payload.difficulty)
        .await?;

    PlayerSession::new(&session).add_player(player.id).await?;

    Ok((StatusCode::CREATED, Json(player.into_dto())))
}

/// Get the current turn of a game.
///
/// Choices do not reveal which one is correct.
#[utoipa::path(
    get,
    path = "/api/quizzes/{quiz_id}/players/{player_id}",
    tag = GAME_TAG,
    params(
        ("quiz_id" = i32, Path, description = "Quiz ID"),
        ("player_id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Current game state", body = GameStateDto),
        (status = 404, description = "Player not found in quiz", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game_state(
    State(state): State<AppState>,
    Path((quiz_id, player_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let game = GameService::new(&state.db).state(quiz_id, player_id).await?;

    let (time_limit, started_at) = match game.timer {
        Some(timer) => (timer.time_limit, timer.start_point),
        None => (None, None),
    };

    Ok((
        StatusCode::OK,
        Json(GameStateDto {
            quiz: game.quiz.into_dto(),
            player: game.player.into_dto(),
            question: game.question.map(QuestionWithChoices::into_play_dto),
            time_limit,
            started_at,
        }),
    ))
}

/// Answer the current question.
///
/// # Access Control
/// - Only the visitor who started the player
#[utoipa::path(
    post,
    path = "/api/quizzes/{quiz_id}/players/{player_id}/answer",
    tag = GAME_TAG,
    params(
        ("quiz_id" = i32, Path, description = "Quiz ID"),
        ("player_id" = i32, Path, description = "Player ID")
    ),
    request_body = AnswerDto,
    responses(
        (status = 200, description = "Answer recorded", body = AnswerResultDto),
        (status = 400, description = "Game over or choice not in current question", body = ErrorDto),
        (status = 403, description = "Player belongs to another visitor", body = ErrorDto),
        (status = 404, description = "Player not found in quiz", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn answer(
    State(state): State<AppState>,
    session: Session,
    Path((quiz_id, player_id)): Path<(i32, i32)>,
    Json(payload): Json<AnswerDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);

    let player = service.find_player(quiz_id, player_id).await?;
    PlayerSession::new(&session).require(player.id).await?;

    let outcome = service.answer(player, payload.choice_id).await?;

    Ok((
        StatusCode::OK,
        Json(AnswerResultDto {
            status: outcome.status,
            correct: outcome.correct,
            player: outcome.player.into_dto(),
        }),
    ))
}

/// Quit a game.
///
/// Deletes the player unless it is a reserved test player.
///
/// # Access Control
/// - Only the visitor who started the player
#[utoipa::path(
    delete,
    path = "/api/quizzes/{quiz_id}/players/{player_id}",
    tag = GAME_TAG,
    params(
        ("quiz_id" = i32, Path, description = "Quiz ID"),
        ("player_id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 204, description = "Game quit"),
        (status = 403, description = "Player belongs to another visitor", body = ErrorDto),
        (status = 404, description = "Player not found in quiz", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn quit_game(
    State(state): State<AppState>,
    session: Session,
    Path((quiz_id, player_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);

    let player = service.find_player(quiz_id, player_id).await?;
    PlayerSession::new(&session).require(player.id).await?;

    service.quit(&player).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Vote for a quiz, once per player.
///
/// # Access Control
/// - Only the visitor who started the player
#[utoipa::path(
    post,
    path = "/api/quizzes/{quiz_id}/players/{player_id}/vote",
    tag = GAME_TAG,
    params(
        ("quiz_id" = i32, Path, description = "Quiz ID"),
        ("player_id" = i32, Path, description = "Player ID")
    ),
    request_body = VoteDto,
    responses(
        (status = 200, description = "Quiz with current vote counters", body = QuizDto),
        (status = 403, description = "Player belongs to another visitor", body = ErrorDto),
        (status = 404, description = "Player not found in quiz", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn vote(
    State(state): State<AppState>,
    session: Session,
    Path((quiz_id, player_id)): Path<(i32, i32)>,
    Json(payload): Json<VoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);

    let player = service.find_player(quiz_id, player_id).await?;
    PlayerSession::new(&session).require(player.id).await?;

    let quiz = service.vote(&player, payload.upvote).await?;

    Ok((StatusCode::OK, Json(quiz.into_dto())))
}

/// Get the final state of a game.
#[utoipa::path(
    get,
    path = "/api/quizzes/{quiz_id}/players/{player_id}/result",
    tag = GAME_TAG,
    params(
        ("quiz_id" = i32, Path, description = "Quiz ID"),
        ("player_id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Quiz and player", body = GameResultDto),
        (status = 404, description = "Player not found in quiz", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_result(
    State(state): State<AppState>,
    Path((quiz_id, player_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let (quiz, player) = GameService::new(&state.db)
        .result(quiz_id, player_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(GameResultDto {
            quiz: quiz.into_dto(),
            player: player.into_dto(),
        }),
    ))
}
