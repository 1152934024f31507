/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! `reqwest` backed request executor
//!
//! Handles one GET per call:
//! - Bearer authentication from the configured access token
//! - Query strings built from [`QueryParams`], skipping unset values
//! - Mapping of non-success statuses onto [`AppError`]
//!
//! # Example
//! ```ignore
//! use schwab_accounts::prelude::*;
//! use std::sync::Arc;
//!
//! let client = Arc::new(HttpClient::new(Config::new())?);
//! let accounts = AccountResource::new(client);
//! ```

use crate::application::config::Config;
use crate::application::interfaces::executor::RequestExecutor;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::requests::QueryParams;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client as HttpInternalClient, Response, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// HTTP client for the account endpoints
///
/// Token refresh and retries are left to the caller. A failed request is
/// returned as an error, never retried.
pub struct HttpClient {
    http_client: HttpInternalClient,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates a new client from configuration
    ///
    /// # Arguments
    /// * `config` - Configuration containing the token and REST settings
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Client ready to use
    /// * `Err(AppError)` - If the underlying HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            http_client,
            config: Arc::new(config),
        })
    }

    /// Gets the current configuration
    pub fn config(&self) -> Arc<Config> {
        self.config.clone()
    }

    /// Converts query parameters into the pairs sent on the wire
    fn query_pairs(params: &QueryParams) -> Vec<(&str, &str)> {
        params
            .iter()
            .filter_map(|(key, value)| value.as_deref().map(|v| (key.as_str(), v)))
            .collect()
    }

    /// Maps the response status onto the crate error type
    async fn check_status(response: Response) -> Result<Response, AppError> {
        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        debug!("Request failed with status {}: {}", status, body);

        Err(match status {
            StatusCode::UNAUTHORIZED => AppError::Unauthorized,
            StatusCode::NOT_FOUND => AppError::NotFound,
            StatusCode::TOO_MANY_REQUESTS => AppError::RateLimitExceeded,
            other => AppError::Unexpected(other),
        })
    }
}

#[async_trait]
impl RequestExecutor for HttpClient {
    fn accounts_base_url(&self) -> &str {
        &self.config.rest_api.accounts_base_url
    }

    async fn make_request(&self, url: &str, params: &QueryParams) -> Result<Value, AppError> {
        let query = Self::query_pairs(params);
        debug!("GET {} {:?}", url, query);

        let mut request = self
            .http_client
            .get(url)
            .header(ACCEPT, "application/json")
            .query(&query);

        if let Some(token) = &self.config.credentials.access_token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = Self::check_status(request.send().await?).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
