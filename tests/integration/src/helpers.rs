//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests
//! from independent cookie sessions.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use merlin_api::{create_app, create_app_state};
use merlin_common::{AppConfig, RateLimitConfig};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::Credentials;

/// Seeded admin account
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;
        let app = create_app(state);

        // Ephemeral port so tests can run in parallel
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// A fresh client with its own cookie jar, i.e. its own session
    pub fn client(&self) -> Result<ApiClient> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(ApiClient {
            base_url: self.base_url(),
            client,
        })
    }

    /// A client already logged in as the seeded admin
    pub async fn admin_client(&self) -> Result<ApiClient> {
        let client = self.client()?;
        client.login(ADMIN_USERNAME, ADMIN_PASSWORD).await?;
        Ok(client)
    }

    /// A client logged in as a freshly registered non-admin user
    pub async fn user_client(&self) -> Result<ApiClient> {
        let client = self.client()?;
        let credentials = Credentials::unique();
        assert_status(client.post("/api/register", &credentials).await?, StatusCode::CREATED).await?;
        client.login(&credentials.username, &credentials.password).await?;
        Ok(client)
    }
}

/// HTTP client bound to one test server and one session
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a POST request without a body
    pub async fn post_empty(&self, path: &str) -> Result<Response> {
        Ok(self.client.post(self.url(path)).send().await?)
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.patch(self.url(path)).json(body).send().await?)
    }

    /// Log in and keep the session cookie
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        let credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        assert_status(self.post("/api/login", &credentials).await?, StatusCode::OK).await
    }
}

/// Create a test configuration
///
/// Built in code so tests never depend on the developer's environment.
pub fn test_config() -> AppConfig {
    AppConfig {
        rate_limit: RateLimitConfig {
            requests_per_second: 1000,
            burst: 1000,
        },
        ..AppConfig::default()
    }
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}

/// Assert an error response and return its `error.code`
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let body: serde_json::Value = assert_json(response, expected_status).await?;
    body["error"]["code"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("Error body without code: {body}"))
}
