//! Account service client
//!
//! HTTP client for the external account/restaurant service. Failures
//! surface as a message to the caller; there is no retry policy.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Client errors
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Server error: {0}")]
    Server(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Login/register response
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub role: String,
}

/// Restaurant record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Create restaurant payload
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantCreate {
    pub name: String,
    pub address: Option<String>,
}

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

/// HTTP client for the account service, bearer-authenticated after login
#[derive(Debug, Clone)]
pub struct AccountClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl AccountClient {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Server(text)),
            };
        }
        response.json().await.map_err(Into::into)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(&url);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        Self::handle_response(request.send().await?).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.post(&url).json(body);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        Self::handle_response(request.send().await?).await
    }

    // ========== Auth API ==========

    /// POST /login - authenticate and keep the bearer token
    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<AuthResponse> {
        let auth: AuthResponse = self.post("/login", &Credentials { username, password }).await?;
        self.token = Some(auth.token.clone());
        Ok(auth)
    }

    /// POST /register - create an account
    pub async fn register(&self, username: &str, password: &str) -> ClientResult<AuthResponse> {
        self.post("/register", &Credentials { username, password }).await
    }

    // ========== Restaurant API ==========

    /// POST /restaurants
    pub async fn create_restaurant(&self, payload: &RestaurantCreate) -> ClientResult<Restaurant> {
        self.post("/restaurants", payload).await
    }

    /// GET /restaurants
    pub async fn list_restaurants(&self) -> ClientResult<Vec<Restaurant>> {
        self.get("/restaurants").await
    }
}
