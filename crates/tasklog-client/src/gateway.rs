//! The authenticated request gateway.
//!
//! Every call to the backend goes through [`TasklogClient::send`]: the
//! current session token is attached as a bearer credential, and a 401
//! answer clears the session and routes the client back to login before the
//! error is handed to the caller.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tasklog_auth::{Route, SessionContext};
use tasklog_config::ApiConfig;

use crate::error::ClientError;
use crate::http::{check_response, decode_json};

/// HTTP client for the task-tracking backend.
///
/// Cheap to clone; clones share the connection pool and the session.
#[derive(Clone)]
pub struct TasklogClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionContext>,
}

impl TasklogClient {
    /// Build a client for `config.base_url` that reads tokens from `session`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Network`] if the underlying `reqwest::Client`
    /// cannot be built (e.g. TLS backend initialization fails).
    pub fn new(config: &ApiConfig, session: Arc<SessionContext>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url_trimmed().to_string(),
            session,
        })
    }

    #[must_use]
    pub const fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Start a request, attaching the bearer token if a session exists.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Start a request that never carries a token (login).
    pub(crate) fn public_request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }

    /// Send through the gateway.
    ///
    /// On 401 the session is cleared and the route set to [`Route::Login`];
    /// the error is still returned. Other failures pass through unchanged.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, ClientError> {
        let result = self.execute(request).await;
        if let Err(ClientError::Unauthorized { detail }) = &result {
            tracing::warn!(
                detail = detail.as_deref().unwrap_or("-"),
                "server rejected session token; clearing session"
            );
            self.session.clear_session();
            self.session.navigate(Route::Login);
        }
        result
    }

    /// Send without the authentication-failure hook.
    pub(crate) async fn send_public(
        &self,
        request: RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        self.execute(request).await
    }

    async fn execute(&self, request: RequestBuilder) -> Result<reqwest::Response, ClientError> {
        let request = request.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_string();
        tracing::debug!(%method, %path, "sending request");

        let response = self.http.execute(request).await.inspect_err(|error| {
            tracing::warn!(%method, %path, %error, "request failed before a response arrived");
        })?;
        tracing::debug!(%method, %path, status = response.status().as_u16(), "response received");
        check_response(response).await
    }

    // ── JSON helpers ─────────────────────────────────────────────────

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let resp = self.send(self.request(Method::GET, path).query(query)).await?;
        decode_json(resp).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .send(self.request(Method::POST, path).query(query).json(body))
            .await?;
        decode_json(resp).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T, ClientError> {
        let mut request = self.request(Method::PUT, path).query(query);
        if let Some(body) = body {
            request = request.json(body);
        }
        decode_json(self.send(request).await?).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ClientError> {
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }

    /// POST a JSON body and return the raw response bytes.
    pub(crate) async fn post_bytes<B: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> Result<Vec<u8>, ClientError> {
        let resp = self
            .send(self.request(Method::POST, path).query(query).json(body))
            .await?;
        Ok(resp.bytes().await?.to_vec())
    }
}
