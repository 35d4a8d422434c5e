use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        data::user::UserRepository,
        error::AppError,
        middleware::{
            client_ip::ClientIp,
            session::{AuthSession, CsrfSession},
        },
        model::user::User,
        service::auth::GoogleAuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Query parameters for the OAuth callback endpoint.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Google for token exchange.
    pub code: String,
}

/// Redirect to the Google consent screen.
///
/// Stores a CSRF token in the session which the callback must echo back.
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to Google login"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = GoogleAuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.userinfo_url,
    );

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Complete a Google login.
///
/// Validates the CSRF state, exchanges the code, stores the user in the session and
/// redirects to the home page.
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state returned by Google"),
        ("code" = String, Query, description = "Authorization code")
    ),
    responses(
        (status = 307, description = "Logged in, redirect to home page"),
        (status = 400, description = "CSRF mismatch or rejected code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    client_ip: ClientIp,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let result = login_user(&state, &session, params.0).await;

    match result {
        Ok(user) => {
            tracing::info!("{} {} logged in", client_ip, user.name);
            Ok(Redirect::temporary("/"))
        }
        Err(err) => {
            tracing::warn!("{} failed login", client_ip);
            Err(err)
        }
    }
}

async fn login_user(
    state: &AppState,
    session: &Session,
    params: CallbackParams,
) -> Result<User, AppError> {
    let auth_service = GoogleAuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.userinfo_url,
    );

    CsrfSession::new(session).validate(&params.state).await?;

    let user = auth_service.callback(params.code).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    Ok(user)
}

/// Log out the current user.
///
/// Removes the user from the session and redirects to the home page. Games
/// started in this session keep running.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged out, redirect to home page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
    client_ip: ClientIp,
) -> Result<impl IntoResponse, AppError> {
    let auth_session = AuthSession::new(&session);

    if let Some(user_id) = auth_session.get_user_id().await? {
        if let Some(user) = UserRepository::new(&state.db).find_by_id(user_id).await? {
            tracing::info!("{} {} logged out", client_ip, user.name);
        }
    }

    auth_session.remove_user().await?;

    Ok(Redirect::temporary("/"))
}

/// Get the logged in user.
///
/// Returns `null` for anonymous visitors.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged in user or null", body = Option<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = match AuthSession::new(&session).get_user_id().await? {
        Some(user_id) => UserRepository::new(&state.db).find_by_id(user_id).await?,
        None => None,
    };

    Ok((StatusCode::OK, Json(user.map(User::into_dto))))
}
