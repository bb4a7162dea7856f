//! REST API client for the token and upload endpoints.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning [`ApiError::Unavailable`], since these
//! endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx responses keep the
//! server's `detail` message so forms can show it verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
#[cfg(feature = "csr")]
use serde::Serialize;
#[cfg(feature = "csr")]
use serde::de::DeserializeOwned;

#[cfg(feature = "csr")]
use super::types::{ErrorBody, RefreshRequest, UploadReceipt};
use super::types::{Credentials, RefreshedToken, TokenPair};
use crate::config::ClientConfig;
use crate::util::storage::CredentialStore;

pub const LOGIN_PATH: &str = "/api/token/";
pub const REFRESH_PATH: &str = "/api/token/refresh/";
pub const REGISTER_PATH: &str = "/api/user/register/";
pub const UPLOAD_PATH: &str = "/api/upload/";

/// Fallback shown when a failed request carries no server message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// Error returned by API calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request rejected ({status})")]
    Rejected { status: u16, detail: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("request timed out")]
    Timeout,
    #[error("no access token stored")]
    NoSession,
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Server-provided message, if the server sent one.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => detail.as_deref().filter(|d| !d.trim().is_empty()),
            _ => None,
        }
    }

    /// Message suitable for an inline form error.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.detail().unwrap_or(GENERIC_FAILURE_MESSAGE).to_owned()
    }
}

/// `Authorization` header value for `access_token`.
#[must_use]
pub fn bearer_header(access_token: &str) -> String {
    format!("Bearer {access_token}")
}

/// `Authorization` header value for the stored access token.
///
/// # Errors
///
/// Returns [`ApiError::NoSession`] when no access token is stored.
pub fn stored_bearer(store: &CredentialStore) -> Result<String, ApiError> {
    store.get().access.map(|access| bearer_header(&access)).ok_or(ApiError::NoSession)
}

/// Resolve `request`, or fail with [`ApiError::Timeout`] once `deadline` fires.
#[cfg(any(test, feature = "csr"))]
async fn with_deadline<T, R, D>(request: R, deadline: D) -> Result<T, ApiError>
where
    R: Future<Output = Result<T, ApiError>>,
    D: Future<Output = ()>,
{
    use futures::future::{Either, select};

    match select(Box::pin(request), Box::pin(deadline)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout),
    }
}

/// Auth endpoints consulted by session logic and auth flows.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Exchange credentials for a token pair.
    async fn login(&self, credentials: &Credentials) -> Result<TokenPair, ApiError>;

    /// Create an account. Does not authenticate.
    async fn register(&self, credentials: &Credentials) -> Result<(), ApiError>;

    /// Exchange a refresh token for a new access token.
    async fn refresh(&self, refresh_token: &str) -> Result<RefreshedToken, ApiError>;
}

/// `gloo-net` implementation of [`AuthApi`] plus the bearer-authorized upload.
#[derive(Clone, Debug, Default)]
pub struct HttpApi {
    config: ClientConfig,
}

impl HttpApi {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[cfg(feature = "csr")]
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = gloo_net::http::Request::post(&self.config.endpoint(path))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_response(resp).await
    }

    /// Upload one file as multipart field `file` to the upload endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NoSession`] without a stored access token, or the
    /// request/response error otherwise.
    #[cfg(feature = "csr")]
    pub async fn upload(&self, store: &CredentialStore, file: &web_sys::File) -> Result<UploadReceipt, ApiError> {
        let authorization = stored_bearer(store)?;
        let form = web_sys::FormData::new().map_err(|_| ApiError::Network("form data unavailable".to_owned()))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|_| ApiError::Network("could not attach file".to_owned()))?;
        let resp = gloo_net::http::Request::post(&self.config.endpoint(UPLOAD_PATH))
            .header("Authorization", &authorization)
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_response(resp).await
    }
}

#[cfg(feature = "csr")]
async fn read_response<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let detail = resp.json::<ErrorBody>().await.ok().and_then(|b| b.detail);
        return Err(ApiError::Rejected { status, detail });
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl AuthApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> Result<TokenPair, ApiError> {
        #[cfg(feature = "csr")]
        {
            self.post_json(LOGIN_PATH, credentials).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            self.post_json::<_, serde_json::Value>(REGISTER_PATH, credentials)
                .await
                .map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    async fn refresh(&self, refresh_token: &str) -> Result<RefreshedToken, ApiError> {
        #[cfg(feature = "csr")]
        {
            let body = RefreshRequest { refresh: refresh_token.to_owned() };
            with_deadline(
                self.post_json::<_, RefreshedToken>(REFRESH_PATH, &body),
                gloo_timers::future::TimeoutFuture::new(self.config.refresh_timeout_ms),
            )
            .await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = refresh_token;
            Err(ApiError::Unavailable)
        }
    }
}
