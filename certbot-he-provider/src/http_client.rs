//! HTTP transport for the web console
//!
//! Sending, logging and status checking are shared by every page request.
//! Interpreting the returned HTML is left to [`crate::markup`].
//!
//! Each request is sent exactly once. A failure here is terminal for the run.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Build the cookie-keeping client a session runs on.
///
/// The console refuses the login form unless the session cookie from the
/// landing page is sent back, so the cookie store is mandatory.
pub fn create_http_client() -> Result<Client, ProviderError> {
    Client::builder()
        .cookie_store(true)
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| ProviderError::NetworkError {
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response body
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, form body, etc.)
    /// * `method_name` - request method name, for logging
    /// * `url` - request URL, for logging and error reporting
    ///
    /// # Returns
    /// * `Ok(body)` - response body of a 2xx response
    /// * `Err(ProviderError::Timeout | NetworkError)` - transport failure
    /// * `Err(ProviderError::HttpStatus)` - any non-2xx status
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<String, ProviderError> {
        log::debug!("[he] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        log::debug!("[he] Response Status: {status}");

        if !status.is_success() {
            log::warn!("[he] {method_name} {url} answered HTTP {}", status.as_u16());
            return Err(ProviderError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("[he] Response Body: {}", truncate_for_log(&body));

        Ok(body)
    }
}
