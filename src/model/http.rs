/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use reqwest::Client as HttpInternalClient;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Thin read-only client for the market-data REST API
///
/// Builds absolute URLs from the configured base URL, attaches query
/// parameters, maps non-success statuses to `AppError` and decodes JSON bodies.
/// There is no retry and no caching: every call is a single request.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http_client: HttpInternalClient,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates a new client from configuration
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Client ready to use
    /// * `Err(AppError)` - If the underlying reqwest client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolves a path against the configured base URL
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http") {
            return path.to_string();
        }
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.config.rest_api.base_url, path)
    }

    /// Makes a GET request and decodes the JSON body
    pub async fn get<Q: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&Q>,
    ) -> Result<T, AppError> {
        let url = self.url_for(path);
        let response = make_http_request(&self.http_client, Method::GET, &url, query).await?;
        self.parse_response(response).await
    }

    /// Parses response
    async fn parse_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, AppError> {
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Makes a single HTTP request and maps the status to an `AppError`
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `query` - Optional query parameters, serialized as a URL query string
///
/// # Returns
///
/// * `Ok(Response)` - Successful HTTP response
/// * `Err(AppError)` - Transport failure or non-success status
pub async fn make_http_request<Q: Serialize>(
    client: &Client,
    method: Method,
    url: &str,
    query: Option<&Q>,
) -> Result<Response, AppError> {
    debug!("{} {}", method, url);

    let mut request = client
        .request(method, url)
        .header("Accept", "application/json");
    if let Some(q) = query {
        request = request.query(q);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    match status {
        StatusCode::NOT_FOUND => {
            warn!("Not found: {}", url);
            Err(AppError::NotFound)
        }
        StatusCode::TOO_MANY_REQUESTS => {
            warn!("Rate limit exceeded: {}", body);
            Err(AppError::RateLimitExceeded)
        }
        _ => {
            error!("Request failed with status {}: {}", status, body);
            Err(AppError::Unexpected(status))
        }
    }
}
