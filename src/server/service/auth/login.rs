use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::server::service::auth::GoogleAuthService;

const SCOPES: [&str; 3] = ["openid", "email", "profile"];

impl<'a> GoogleAuthService<'a> {
    /// Builds the Google consent screen URL and a fresh CSRF state.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scopes(SCOPES.iter().map(|scope| Scope::new(scope.to_string())))
            .url();

        (authorize_url, csrf_state)
    }
}
