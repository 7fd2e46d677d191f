//! HTTP client for the Monolite HR backend.

use monolite_shared::ApiError;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// HTTP client for the backend's auth, REST, and function endpoints.
///
/// Every request carries the project `apikey` header; the `Authorization`
/// bearer is the user's access token when one is set, otherwise the project
/// key itself (needed for anonymous flows like invitation acceptance).
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
    anon_key: String,
    access_token: Option<String>,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
            access_token: None,
        }
    }

    /// Attach the signed-in user's access token.
    pub fn with_access_token(mut self, token: Option<String>) -> Self {
        self.access_token = token;
        self
    }

    fn bearer(&self) -> &str {
        self.access_token.as_deref().unwrap_or(&self.anon_key)
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    async fn send(&self, rb: reqwest::RequestBuilder) -> Result<String, ApiError> {
        let resp = rb
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.bearer()))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let is_success = resp.status().is_success();

        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

        if !is_success {
            return Err(ApiError::Http { status, body: text });
        }

        Ok(text)
    }

    fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
        // Mutations with a minimal Prefer come back with an empty body
        let text = if text.is_empty() { "null" } else { text };
        serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn encode<T: Serialize>(body: &T) -> Result<Vec<u8>, ApiError> {
        serde_json::to_vec(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Make a GET request decoding the JSON response
    pub async fn get_json<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        let text = self.send(self.http.get(self.url(path))).await?;
        Self::decode(&text)
    }

    /// Make a POST request with a JSON body
    pub async fn post_json<TReq: Serialize, TRes: DeserializeOwned>(
        &self,
        path: &str,
        body: &TReq,
    ) -> Result<TRes, ApiError> {
        let rb = self
            .http
            .post(self.url(path))
            .header("Content-Type", "application/json")
            .body(Self::encode(body)?);
        let text = self.send(rb).await?;
        Self::decode(&text)
    }

    /// POST to a table endpoint asking the backend to return the created rows
    pub async fn post_returning<TReq: Serialize, TRes: DeserializeOwned>(
        &self,
        path: &str,
        body: &TReq,
    ) -> Result<TRes, ApiError> {
        let rb = self
            .http
            .post(self.url(path))
            .header("Content-Type", "application/json")
            .header("Prefer", "return=representation")
            .body(Self::encode(body)?);
        let text = self.send(rb).await?;
        Self::decode(&text)
    }

    /// Make a PATCH request with a JSON body
    pub async fn patch_json<TReq: Serialize, TRes: DeserializeOwned>(
        &self,
        path: &str,
        body: &TReq,
    ) -> Result<TRes, ApiError> {
        let rb = self
            .http
            .patch(self.url(path))
            .header("Content-Type", "application/json")
            .body(Self::encode(body)?);
        let text = self.send(rb).await?;
        Self::decode(&text)
    }

    /// PATCH a table endpoint asking the backend to return the updated rows
    pub async fn patch_returning<TReq: Serialize, TRes: DeserializeOwned>(
        &self,
        path: &str,
        body: &TReq,
    ) -> Result<TRes, ApiError> {
        let rb = self
            .http
            .patch(self.url(path))
            .header("Content-Type", "application/json")
            .header("Prefer", "return=representation")
            .body(Self::encode(body)?);
        let text = self.send(rb).await?;
        Self::decode(&text)
    }

    /// Make a PUT request with a JSON body
    pub async fn put_json<TReq: Serialize, TRes: DeserializeOwned>(
        &self,
        path: &str,
        body: &TReq,
    ) -> Result<TRes, ApiError> {
        let rb = self
            .http
            .put(self.url(path))
            .header("Content-Type", "application/json")
            .body(Self::encode(body)?);
        let text = self.send(rb).await?;
        Self::decode(&text)
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.http.delete(self.url(path))).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slashes() {
        let client = BackendClient::new("https://api.example.test/", "key");
        assert_eq!(
            client.url("/rest/v1/notifications"),
            "https://api.example.test/rest/v1/notifications"
        );
        assert_eq!(
            client.url("auth/v1/user"),
            "https://api.example.test/auth/v1/user"
        );
    }

    #[test]
    fn url_passes_absolute_urls_through() {
        let client = BackendClient::new("https://api.example.test", "key");
        assert_eq!(
            client.url("https://other.example.test/x"),
            "https://other.example.test/x"
        );
    }

    #[test]
    fn bearer_prefers_access_token() {
        let client = BackendClient::new("https://api.example.test", "anon");
        assert_eq!(client.bearer(), "anon");
        let signed_in = client.with_access_token(Some("user-jwt".to_string()));
        assert_eq!(signed_in.bearer(), "user-jwt");
    }

    #[test]
    fn decode_treats_empty_body_as_null() {
        let unit: () = BackendClient::decode("").unwrap();
        let _ = unit;
        let value: Option<u32> = BackendClient::decode("").unwrap();
        assert_eq!(value, None);
    }
}
