use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::Serialize;

use super::api::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};

/// Auth service of the production job board.
pub const DEFAULT_BASE_URL: &str = "https://newjobjunction.onrender.com";

#[derive(Debug, Clone)]
pub struct AuthError {
    pub http_status: Option<u16>,
    pub error: String,
}

impl AuthError {
    fn from_status(status: StatusCode, text: String) -> Self {
        Self {
            http_status: Some(status.as_u16()),
            error: text,
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if let Some(status) = self.http_status {
            write!(f, "{}: {}", status, self.error)
        } else {
            write!(f, "{}", self.error)
        }
    }
}

impl std::error::Error for AuthError {}

impl From<reqwest::Error> for AuthError {
    fn from(error: reqwest::Error) -> Self {
        Self {
            http_status: error.status().map(|s| s.as_u16()),
            error: error.to_string(),
        }
    }
}

/// The service signals a rejection through the status code, with the reason
/// in the body. Only a 2xx response is worth parsing.
async fn check_success(response: Response) -> Result<Response, AuthError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read response text".to_string());
    Err(AuthError::from_status(status, text))
}

/// Remote side of the submission dispatcher. The GUI talks to the auth
/// service only through this trait so tests can substitute a fake service.
#[async_trait]
pub trait AuthBackend: std::fmt::Debug + Send + Sync {
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AuthError>;
    async fn signup(&self, request: SignupRequest) -> Result<SignupResponse, AuthError>;
}

#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    async fn post_json<T: Serialize>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Response, AuthError> {
        let url = format!("{}/auth/{}", self.base_url, endpoint);

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        check_success(response).await
    }
}

#[async_trait]
impl AuthBackend for AuthClient {
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AuthError> {
        let response = self.post_json("login", &request).await?;

        let login_response: LoginResponse = response.json().await?;
        Ok(login_response)
    }

    async fn signup(&self, request: SignupRequest) -> Result<SignupResponse, AuthError> {
        let response = self.post_json("signup", &request).await?;

        let signup_response: SignupResponse = response.json().await?;
        Ok(signup_response)
    }
}
