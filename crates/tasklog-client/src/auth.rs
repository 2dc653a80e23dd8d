//! Login and logout.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use tasklog_auth::Route;
use tasklog_core::{Session, UserProfile};

use crate::TasklogClient;
use crate::error::ClientError;
use crate::http::decode_json;

const LOGIN_FALLBACK: &str = "Login failed";

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    user: UserProfile,
}

impl TasklogClient {
    /// Exchange credentials for a token and start a session.
    ///
    /// On success the session is persisted and the route moves to
    /// [`Route::Tasks`]. On failure the session is left exactly as it was and
    /// [`ClientError::LoginFailed`] carries the server's detail message, or a
    /// generic one when the server sent none.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::LoginFailed`] for rejected credentials or
    /// transport failures, and [`ClientError::Session`] if the new session
    /// cannot be persisted.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ClientError> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(ClientError::LoginFailed {
                message: "Username and password are required".into(),
            });
        }

        let request = self
            .public_request(Method::POST, "/auth/login")
            .json(&LoginRequest { username, password });

        let response = match self.send_public(request).await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(%error, username, "login request failed");
                let message = error
                    .server_detail()
                    .map_or_else(|| LOGIN_FALLBACK.to_string(), str::to_string);
                return Err(ClientError::LoginFailed { message });
            }
        };

        let body: LoginResponse = decode_json(response).await.map_err(|error| {
            tracing::warn!(%error, "login response could not be decoded");
            ClientError::LoginFailed {
                message: LOGIN_FALLBACK.into(),
            }
        })?;
        if let Some(kind) = body.token_type.as_deref()
            && !kind.eq_ignore_ascii_case("bearer")
        {
            tracing::debug!(token_type = kind, "unexpected token type; using as bearer");
        }

        let session = Session {
            token: body.access_token,
            user: body.user,
        };
        self.session().set_session(session.clone())?;
        self.session().navigate(Route::Tasks);
        tracing::debug!(user_id = session.user.id, role = %session.user.role, "logged in");
        Ok(session)
    }

    /// End the session and return to the login route. Cannot fail.
    pub fn logout(&self) {
        self.session().clear_session();
        self.session().navigate(Route::Login);
    }
}
