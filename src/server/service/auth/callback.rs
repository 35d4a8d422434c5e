use oauth2::{
    basic::BasicTokenType, AuthorizationCode, EmptyExtraTokenFields, StandardTokenResponse,
    TokenResponse,
};
use serde::Deserialize;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpsertUserParam, User},
    service::auth::GoogleAuthService,
};

/// Profile returned by the Google user info endpoint.
#[derive(Deserialize, Debug)]
pub struct GoogleUserInfo {
    pub sub: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl GoogleUserInfo {
    /// Converts the profile into upsert parameters.
    ///
    /// Accounts without a display name use the local part of their email.
    pub fn into_param(self) -> UpsertUserParam {
        let email = self.email.unwrap_or_default();
        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| email.split('@').next().unwrap_or_default().to_string());

        UpsertUserParam {
            google_id: self.sub,
            name,
            email,
        }
    }
}

impl<'a> GoogleAuthService<'a> {
    /// Completes the login after Google redirects back.
    ///
    /// Exchanges the authorization code, fetches the account profile and upserts the user.
    ///
    /// # Returns
    /// - `Ok(User)` - The logged in user
    /// - `Err(AuthError::TokenExchange)` - Google rejected the code
    /// - `Err(AppError::ReqwestErr)` - Fetching the profile failed
    /// - `Err(AppError::DbErr)` - Storing the user failed
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let user_info = self.fetch_google_user(&token).await?;
        let user = user_repo.upsert(user_info.into_param()).await?;

        Ok(user)
    }

    /// Retrieves the Google profile using the provided access token.
    async fn fetch_google_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<GoogleUserInfo, AppError> {
        let access_token = token.access_token().secret();

        let user_info = self
            .http_client
            .get(self.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<GoogleUserInfo>()
            .await?;

        Ok(user_info)
    }
}
