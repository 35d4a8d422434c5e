use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, game, leaderboard, quiz, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Quizer", description = "Quiz authoring and trivia game API"),
    tags(
        (name = "auth", description = "Google login and session"),
        (name = "quiz", description = "Quiz catalogue and authoring"),
        (name = "user", description = "Logged in user"),
        (name = "game", description = "Playing a quiz"),
        (name = "leaderboard", description = "Fastest players per quiz and difficulty")
    )
)]
struct ApiDoc;

/// Builds the API router with OpenAPI documentation served at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(quiz::get_quizzes, quiz::create_quiz))
        .routes(routes!(quiz::get_quiz_overview))
        .routes(routes!(
            quiz::get_quiz_details,
            quiz::update_quiz,
            quiz::delete_quiz
        ))
        .routes(routes!(user::get_user_quizzes))
        .routes(routes!(game::start_game))
        .routes(routes!(game::get_game_state, game::quit_game))
        .routes(routes!(game::answer))
        .routes(routes!(game::vote))
        .routes(routes!(game::get_result))
        .routes(routes!(leaderboard::get_leaderboard))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
