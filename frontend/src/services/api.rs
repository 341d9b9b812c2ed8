use gloo::net::http::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{Domain, NewDomain, NewDomainMembership, User};
use web_sys::RequestCredentials;

use crate::services::logging::Logger;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] gloo::net::Error),
    #[error("server responded with {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// API client for communicating with the Manifold backend.
///
/// Every request carries the session cookie (`credentials: include`) and
/// talks JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/api/domains`
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Create a domain owned by the signed-in user
    pub async fn create_domain(&self, request: &NewDomain) -> Result<Domain, ApiError> {
        let response = self.send(Method::POST, "/api/domains", Some(request)).await?;
        Self::decode(response).await
    }

    /// Add a membership for a user in an existing domain
    pub async fn join_domain(&self, request: &NewDomainMembership) -> Result<(), ApiError> {
        self.send(Method::POST, "/api/domains/memberships", Some(request)).await?;
        Ok(())
    }

    pub async fn get_user(&self, user_id: &str) -> Result<User, ApiError> {
        let path = format!("/api/users/{}", user_id);
        let response = self.send::<()>(Method::GET, &path, None).await?;
        Self::decode(response).await
    }

    /// End the session; the backend clears the session cookie
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send::<()>(Method::POST, "/api/logout", None).await?;
        Ok(())
    }

    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ApiError> {
        let url = self.url(path);
        Logger::debug_with_component("api", &format!("{:?} {}", method, url));

        let builder = RequestBuilder::new(&url)
            .method(method)
            .header("Content-Type", "application/json")
            .credentials(RequestCredentials::Include);

        let request = match body {
            Some(body) => builder.json(body)?,
            None => builder.build()?,
        };

        let response = request.send().await?;
        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Logger::warn_with_component("api", &format!("{} returned {}: {}", url, status, body));
            return Err(ApiError::Status { status, body });
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
