use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        quiz::{QuizDetailsDto, QuizDto, QuizOverviewDto, SaveQuizDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            client_ip::ClientIp,
        },
        model::quiz::{Quiz, SaveQuizParams},
        service::quiz::QuizService,
        state::AppState,
    },
};

/// Tag for grouping quiz endpoints in OpenAPI documentation
pub static QUIZ_TAG: &str = "quiz";

/// List every quiz.
#[utoipa::path(
    get,
    path = "/api/quizzes",
    tag = QUIZ_TAG,
    responses(
        (status = 200, description = "All quizzes", body = Vec<QuizDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_quizzes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let quizzes = QuizService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(quizzes.into_iter().map(Quiz::into_dto).collect::<Vec<_>>()),
    ))
}

/// List every quiz together with the 5 most upvoted ones.
#[utoipa::path(
    get,
    path = "/api/quizzes/overview",
    tag = QUIZ_TAG,
    responses(
        (status = 200, description = "All quizzes and top quizzes", body = QuizOverviewDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_quiz_overview(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let (quizzes, top_quizzes) = QuizService::new(&state.db).get_overview().await?;

    Ok((
        StatusCode::OK,
        Json(QuizOverviewDto {
            quizzes: quizzes.into_iter().map(Quiz::into_dto).collect(),
            top_quizzes: top_quizzes.into_iter().map(Quiz::into_dto).collect(),
        }),
    ))
}

/// Create a new quiz.
///
/// The quiz must have 20 non-empty questions with 4 non-empty choices each.
///
/// # Access Control
/// - Logged in users only
#[utoipa::path(
    post,
    path = "/api/quizzes",
    tag = QUIZ_TAG,
    request_body = SaveQuizDto,
    responses(
        (status = 201, description = "Quiz created", body = QuizDetailsDto),
        (status = 400, description = "Incomplete quiz", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_quiz(
    State(state): State<AppState>,
    session: Session,
    client_ip: ClientIp,
    Json(payload): Json<SaveQuizDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = SaveQuizParams::from_dto(payload)?;
    let details = QuizService::new(&state.db).create(user.id, params).await?;

    tracing::info!("{} {} successfully created quiz", client_ip, user.name);

    Ok((StatusCode::CREATED, Json(details.into_dto())))
}

/// Get a quiz with its questions and correct choices for editing.
///
/// # Access Control
/// - Author of the quiz only
#[utoipa::path(
    get,
    path = "/api/quizzes/{quiz_id}",
    tag = QUIZ_TAG,
    params(
        ("quiz_id" = i32, Path, description = "Quiz ID")
    ),
    responses(
        (status = 200, description = "Quiz details", body = QuizDetailsDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Quiz not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_quiz_details(
    State(state): State<AppState>,
    session: Session,
    Path(quiz_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::QuizAuthor(quiz_id)])
        .await?;

    let details = QuizService::new(&state.db).get_details(quiz_id).await?;

    Ok((StatusCode::OK, Json(details.into_dto())))
}

/// Rewrite a quiz.
///
/// # Access Control
/// - Author of the quiz only
#[utoipa::path(
    put,
    path = "/api/quizzes/{quiz_id}",
    tag = QUIZ_TAG,
    params(
        ("quiz_id" = i32, Path, description = "Quiz ID")
    ),
    request_body = SaveQuizDto,
    responses(
        (status = 200, description = "Quiz updated", body = QuizDetailsDto),
        (status = 400, description = "Incomplete quiz", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Quiz not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_quiz(
    State(state): State<AppState>,
    session: Session,
    client_ip: ClientIp,
    Path(quiz_id): Path<i32>,
    Json(payload): Json<SaveQuizDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::QuizAuthor(quiz_id)])
        .await?;

    let params = SaveQuizParams::from_dto(payload)?;
    let details = QuizService::new(&state.db).update(quiz_id, params).await?;

    tracing::info!("{} {} successfully edited quiz", client_ip, user.name);

    Ok((StatusCode::OK, Json(details.into_dto())))
}

/// Delete a quiz with its questions and players.
///
/// # Access Control
/// - Author of the quiz only
#[utoipa::path(
    delete,
    path = "/api/quizzes/{quiz_id}",
    tag = QUIZ_TAG,
    params(
        ("quiz_id" = i32, Path, description = "Quiz ID")
    ),
    responses(
        (status = 204, description = "Quiz deleted"),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Quiz not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_quiz(
    State(state): State<AppState>,
    session: Session,
    client_ip: ClientIp,
    Path(quiz_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::QuizAuthor(quiz_id)])
        .await?;

    QuizService::new(&state.db).delete(quiz_id).await?;

    tracing::info!("{} {} successfully deleted quiz", client_ip, user.name);

    Ok(StatusCode::NO_CONTENT)
}
