use reqwest::{header, Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::auth::TokenStore;
use crate::models::ApiResponse;
use crate::{ClientConfig, ClientError, ClientResult};

/// Shared HTTP plumbing for the service functions.
///
/// Every call issues exactly one request and hands back the parsed envelope,
/// whatever the HTTP status was.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }

    /// Attach the stored token as a bearer credential.
    /// A missing token sends no header; rejecting the call is the server's job.
    pub(crate) async fn authorized(
        &self,
        method: Method,
        path: &str,
        store: &dyn TokenStore,
    ) -> ClientResult<RequestBuilder> {
        let request = self.request(method, path);
        Ok(match store.get().await? {
            Some(token) => request.header(header::AUTHORIZATION, format!("Bearer {}", token)),
            None => {
                tracing::debug!(path, "No stored token, sending request unauthenticated");
                request
            }
        })
    }

    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> ClientResult<ApiResponse<T>> {
        let request = request.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_string();

        tracing::debug!(%method, path = %path, "Calling RMS API");

        let response = self.http.execute(request).await.map_err(|e| {
            tracing::error!(error = %e, %method, path = %path, "Failed to call RMS API");
            ClientError::Http(e)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!(error = %e, %method, path = %path, "Failed to read RMS API response");
            ClientError::Http(e)
        })?;

        if !status.is_success() {
            tracing::warn!(status = %status, %method, path = %path, "RMS API returned error status");
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, status = %status, %method, path = %path, "Failed to parse RMS API response");
            ClientError::Decode {
                status: status.as_u16(),
                source: e,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::new(ClientConfig::new("http://localhost:8080/")).unwrap();

        assert_eq!(client.url("/api/v1/shift"), "http://localhost:8080/api/v1/shift");
        assert_eq!(client.url("api/v1/shift"), "http://localhost:8080/api/v1/shift");
    }
}
