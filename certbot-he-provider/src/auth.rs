//! Console login

use crate::error::{ProviderError, Result};
use crate::markup;
use crate::session::{HeClient, Session, get_page, post_form};
use crate::types::{Credentials, LoginForm};
use crate::utils::log_sanitizer::mask_account;

impl HeClient {
    /// Log in and hand back the authenticated [`Session`].
    ///
    /// 1. GET the landing page. The console only accepts the login form from a
    ///    client that already holds its session cookie.
    /// 2. POST `email`/`pass` to the same page with that cookie.
    /// 3. A `dns_err` block in the answer means the credentials were rejected.
    ///
    /// Success is never confirmed beyond the missing error block. There is no
    /// captcha, 2FA or rate-limit handling.
    pub async fn login(self, credentials: &Credentials) -> Result<Session> {
        let landing = &self.endpoints.landing;
        log::info!(
            "[he] Logging in as {} at {landing}",
            mask_account(&credentials.username)
        );

        get_page(&self.client, landing).await?;

        let html = post_form(&self.client, landing, &LoginForm::new(credentials)).await?;
        if markup::has_login_error(&html)? {
            log::warn!("[he] Login rejected for {}", mask_account(&credentials.username));
            return Err(ProviderError::InvalidCredentials);
        }

        log::debug!("[he] Login accepted");
        Ok(Session::new(self.client, self.endpoints))
    }
}
