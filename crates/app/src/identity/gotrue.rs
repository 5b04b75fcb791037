//! HTTP client for a GoTrue-compatible authentication API.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use tracing::warn;

use crate::identity::{
    Credentials, IdentityError, IdentityProvider, IdentityUser, Session,
};

/// Configuration for connecting to the authentication service.
#[derive(Debug, Clone)]
pub struct GoTrueConfig {
    /// Backend base URL, e.g. `"https://project.example.co"`.
    pub url: String,

    /// Public API key sent with every request.
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct GoTrueClient {
    config: GoTrueConfig,
    http: Client,
}

impl GoTrueClient {
    #[must_use]
    pub fn new(config: GoTrueConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.config.url.trim_end_matches('/'))
    }

    fn request(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header("apikey", &self.config.api_key)
    }
}

#[async_trait]
impl IdentityProvider for GoTrueClient {
    async fn sign_up(&self, credentials: Credentials) -> Result<IdentityUser, IdentityError> {
        let response = self
            .request(self.http.post(self.endpoint("signup")))
            .json(&credentials)
            .send()
            .await?;

        let body: SignUpBody = ensure_success(response, "sign up").await?.json().await?;

        Ok(match body {
            SignUpBody::WithSession { user } => user,
            SignUpBody::User(user) => user,
        })
    }

    async fn sign_in_with_password(
        &self,
        credentials: Credentials,
    ) -> Result<Session, IdentityError> {
        let response = self
            .request(self.http.post(self.endpoint("token?grant_type=password")))
            .json(&credentials)
            .send()
            .await?;

        let body: TokenBody = ensure_success(response, "sign in").await?.json().await?;

        Ok(Session {
            access_token: body.access_token,
            user: body.user,
        })
    }

    async fn sign_out(&self, access_token: String) -> Result<(), IdentityError> {
        let response = self
            .request(self.http.post(self.endpoint("logout")))
            .bearer_auth(access_token)
            .send()
            .await?;

        ensure_success(response, "sign out").await?;

        Ok(())
    }

    async fn current_session(
        &self,
        access_token: String,
    ) -> Result<Option<Session>, IdentityError> {
        let response = self
            .request(self.http.get(self.endpoint("user")))
            .bearer_auth(&access_token)
            .send()
            .await?;

        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            return Ok(None);
        }

        let user: IdentityUser = ensure_success(response, "session lookup")
            .await?
            .json()
            .await?;

        Ok(Some(Session { access_token, user }))
    }
}

#[derive(Debug, Deserialize)]
struct TokenBody {
    access_token: String,
    user: IdentityUser,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpBody {
    WithSession { user: IdentityUser },
    User(IdentityUser),
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
            .filter(|message| !message.trim().is_empty())
    }
}

async fn ensure_success(response: Response, operation: &str) -> Result<Response, IdentityError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();

    if status.is_client_error() {
        let message = rejection_message(&text)
            .unwrap_or_else(|| format!("{operation} was rejected ({status})"));

        return Err(IdentityError::Rejected(message));
    }

    warn!(%status, operation, "identity service returned an error");

    Err(IdentityError::UnexpectedResponse(format!(
        "{operation} request failed with status {status}: {text}"
    )))
}

fn rejection_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
}
