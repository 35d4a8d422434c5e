//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the methods
//! relevant to its concern:
//! - `AuthSession` - Logged in quiz author (user ID)
//! - `CsrfSession` - CSRF token management for the OAuth flow
//! - `PlayerSession` - Players started by this visitor

use tower_sessions::Session;

use crate::server::error::{auth::AuthError, AppError};

const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";
const SESSION_GAME_PLAYERS: &str = "game:players";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's ID in the session after a successful login.
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the logged in user's ID.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Removes the logged in user from the session.
    ///
    /// Players started in this session stay so running games survive a logout.
    pub async fn remove_user(&self) -> Result<(), AppError> {
        self.session.remove::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(())
    }
}

/// CSRF protection session management.
///
/// Tokens are stored when the login redirect is issued and consumed during the
/// OAuth callback.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token so it can only be used once.
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }

    /// Consumes the stored token and compares it with the callback state.
    ///
    /// # Returns
    /// - `Ok(())` - Stored token matches `state`
    /// - `Err(AuthError::CsrfValidationFailed)` - Token missing or different
    pub async fn validate(&self, state: &str) -> Result<(), AppError> {
        match self.take_token().await? {
            Some(token) if token == state => Ok(()),
            _ => Err(AuthError::CsrfValidationFailed.into()),
        }
    }
}

/// Players started by the current visitor.
///
/// Anonymous visitors can only answer, vote for or quit games they started
/// themselves.
pub struct PlayerSession<'a> {
    session: &'a Session,
}

impl<'a> PlayerSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Remembers a started player.
    pub async fn add_player(&self, player_id: i32) -> Result<(), AppError> {
        let mut players = self.players().await?;
        if !players.contains(&player_id) {
            players.push(player_id);
            self.session.insert(SESSION_GAME_PLAYERS, players).await?;
        }
        Ok(())
    }

    pub async fn has_player(&self, player_id: i32) -> Result<bool, AppError> {
        Ok(self.players().await?.contains(&player_id))
    }

    /// Fails unless the player was started in this session.
    ///
    /// # Returns
    /// - `Ok(())` - Player belongs to this visitor
    /// - `Err(AuthError::PlayerNotInSession)` - Player was started elsewhere
    pub async fn require(&self, player_id: i32) -> Result<(), AppError> {
        if self.has_player(player_id).await? {
            Ok(())
        } else {
            Err(AuthError::PlayerNotInSession(player_id).into())
        }
    }

    async fn players(&self) -> Result<Vec<i32>, AppError> {
        Ok(self
            .session
            .get::<Vec<i32>>(SESSION_GAME_PLAYERS)
            .await?
            .unwrap_or_default())
    }
}
