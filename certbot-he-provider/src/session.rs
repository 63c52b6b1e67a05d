//! Console client and authenticated session

use reqwest::{Client, Url};
use serde::Serialize;

use crate::error::{ProviderError, Result};
use crate::http_client::{HttpUtils, create_http_client};

/// Production console.
pub const DEFAULT_BASE_URL: &str = "https://dns.he.net";

/// Script that serves both the zone editor and record mutations.
const INDEX_SCRIPT: &str = "index.cgi";

/// Console endpoints, derived once from the base URL.
#[derive(Debug, Clone)]
pub(crate) struct Endpoints {
    /// Landing page; also the login target and the zone list.
    pub landing: Url,
    /// `index.cgi`, selected by its `menu` form field.
    pub index: Url,
}

impl Endpoints {
    fn new(base_url: Url) -> Result<Self> {
        let index = base_url
            .join(INDEX_SCRIPT)
            .map_err(|e| ProviderError::ParseError {
                detail: format!("Cannot derive {INDEX_SCRIPT} from {base_url}: {e}"),
            })?;
        Ok(Self {
            landing: base_url,
            index,
        })
    }
}

/// Unauthenticated console client.
///
/// Turned into a [`Session`] by [`HeClient::login`].
#[derive(Debug, Clone)]
pub struct HeClient {
    pub(crate) client: Client,
    pub(crate) endpoints: Endpoints,
}

impl HeClient {
    /// Client for the production console at [`DEFAULT_BASE_URL`].
    pub fn new() -> Result<Self> {
        let base_url = Url::parse(DEFAULT_BASE_URL).map_err(|e| ProviderError::ParseError {
            detail: e.to_string(),
        })?;
        Self::with_base_url(base_url)
    }

    /// Client for a console served from `base_url`.
    ///
    /// `index.cgi` is resolved relative to it, so a base with a path needs a
    /// trailing slash.
    pub fn with_base_url(base_url: Url) -> Result<Self> {
        Ok(Self {
            client: create_http_client()?,
            endpoints: Endpoints::new(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.endpoints.landing
    }
}

/// Authenticated console session: the cookie jar plus the endpoints.
///
/// Owned by the caller for one run and passed by reference to every
/// resolution and mutation. Never persisted.
#[derive(Debug)]
pub struct Session {
    client: Client,
    endpoints: Endpoints,
}

impl Session {
    pub(crate) fn new(client: Client, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    pub fn base_url(&self) -> &Url {
        &self.endpoints.landing
    }

    pub(crate) fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// 执行 GET 请求，返回页面 HTML
    pub(crate) async fn get_page(&self, url: &Url) -> Result<String> {
        get_page(&self.client, url).await
    }

    /// 执行表单 POST 请求，返回页面 HTML
    pub(crate) async fn post_form<F: Serialize>(&self, url: &Url, form: &F) -> Result<String> {
        post_form(&self.client, url, form).await
    }
}

pub(crate) async fn get_page(client: &Client, url: &Url) -> Result<String> {
    HttpUtils::execute_request(client.get(url.clone()), "GET", url.as_str()).await
}

/// Form bodies are never logged, they carry the password or the token.
pub(crate) async fn post_form<F: Serialize>(client: &Client, url: &Url, form: &F) -> Result<String> {
    HttpUtils::execute_request(client.post(url.clone()).form(form), "POST", url.as_str()).await
}
