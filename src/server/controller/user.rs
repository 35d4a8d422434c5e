use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, quiz::QuizDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, model::quiz::Quiz,
        service::quiz::QuizService, state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the quizzes written by the logged in user.
///
/// # Access Control
/// - Logged in users only
#[utoipa::path(
    get,
    path = "/api/user/quizzes",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Quizzes of the logged in user", body = Vec<QuizDto>),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_quizzes(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let quizzes = QuizService::new(&state.db).get_by_author(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(quizzes.into_iter().map(Quiz::into_dto).collect::<Vec<_>>()),
    ))
}
