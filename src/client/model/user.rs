use crate::model::user::UserDto;

/// Logged in user shared through context.
///
/// `fetched` stays false until the first `/api/auth/user` request completes so
/// protected pages can wait instead of redirecting to login.
#[derive(Clone, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    pub fetched: bool,
}

impl UserState {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn user_id(&self) -> Option<i32> {
        self.user.as_ref().map(|u| u.id)
    }
}
