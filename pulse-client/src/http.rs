//! HTTP transport for the Pulse backend API
//!
//! The backend does not use bearer tokens; authorization is decided
//! server-side from requester-id path segments.

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// Thin wrapper around `reqwest::Client` that maps response statuses
/// into typed outcomes.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request, deserializing the JSON body
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_json(response).await
    }

    /// Make a POST request with JSON body, deserializing the JSON response
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_json(response).await
    }

    /// Make a POST request with JSON body, discarding the response body
    /// (201/204 endpoints)
    pub async fn post_unit<B: serde::Serialize>(&self, path: &str, body: &B) -> ClientResult<()> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_unit(response).await
    }

    /// Make a POST request without body, discarding the response body
    pub async fn post_empty(&self, path: &str) -> ClientResult<()> {
        let response = self.client.post(self.url(path)).send().await?;
        Self::handle_unit(response).await
    }

    /// Make a PUT request with JSON body. Safe to retry: same id and
    /// payload produce the same resulting state.
    pub async fn put<B: serde::Serialize>(&self, path: &str, body: &B) -> ClientResult<()> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_unit(response).await
    }

    /// Make a DELETE request (204 on success). Safe to retry.
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::handle_unit(response).await
    }

    /// Handle a JSON-returning response
    async fn handle_json<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            return Err(Self::classify(status, response.text().await?));
        }

        response.json().await.map_err(Into::into)
    }

    /// Handle a response whose body is irrelevant (201 Created, 204 No Content)
    async fn handle_unit(response: reqwest::Response) -> ClientResult<()> {
        let status = response.status();

        if !status.is_success() {
            return Err(Self::classify(status, response.text().await?));
        }

        Ok(())
    }

    fn classify(status: StatusCode, text: String) -> ClientError {
        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(text),
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::BAD_REQUEST => ClientError::Validation(text),
            _ => ClientError::Status {
                status: status.as_u16(),
                message: text,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_and_leading_slashes_collapse() {
        let http = HttpClient::new(&ClientConfig::new("http://localhost:8080/")).unwrap();
        assert_eq!(http.url("/funcionarios"), "http://localhost:8080/funcionarios");
        assert_eq!(http.url("equipes"), "http://localhost:8080/equipes");
    }

    #[test]
    fn statuses_classify_into_typed_errors() {
        assert!(matches!(
            HttpClient::classify(StatusCode::UNAUTHORIZED, String::new()),
            ClientError::Unauthorized
        ));
        assert!(matches!(
            HttpClient::classify(StatusCode::FORBIDDEN, "no".into()),
            ClientError::Forbidden(msg) if msg == "no"
        ));
        assert!(matches!(
            HttpClient::classify(StatusCode::BAD_REQUEST, "dup".into()),
            ClientError::Validation(msg) if msg == "dup"
        ));
        assert!(matches!(
            HttpClient::classify(StatusCode::INTERNAL_SERVER_ERROR, String::new()),
            ClientError::Status { status: 500, .. }
        ));
    }
}
