use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{quiz::QuizRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

pub enum Permission {
    /// User wrote the quiz with this ID.
    QuizAuthor(i32),
}

/// Guards endpoints that need a logged in user.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the logged in user and checks every permission.
    ///
    /// # Arguments
    /// - `permissions` - Permissions the user must hold, empty for login only
    ///
    /// # Returns
    /// - `Ok(User)` - Logged in user holding all permissions
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to a deleted user
    /// - `Err(AppError::NotFound)` - A permission refers to a missing quiz
    /// - `Err(AuthError::AccessDenied)` - User lacks a permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::QuizAuthor(quiz_id) => {
                    let quiz = QuizRepository::new(self.db)
                        .find_by_id(*quiz_id)
                        .await?
                        .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

                    if quiz.author_id != user.id {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("User is not the author of quiz {}", quiz_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
