//! The single configured HTTP client behind every service call.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::{ClientConfig, ClientError, ClientResult, Payload, SessionStore};

/// HTTP gateway to the back-office API.
///
/// - Attaches `Authorization: Bearer <token>` when the session holds a token
/// - On 401 clears the stored token; redirecting is the caller's business
/// - Normalizes every successful body into a [`Payload`]
#[derive(Debug, Clone)]
pub struct Gateway {
    client: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl Gateway {
    pub fn new(config: &ClientConfig, session: Arc<dyn SessionStore>) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Issue a request and normalize the response.
    pub async fn request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: &[(&str, String)],
    ) -> ClientResult<Payload>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        tracing::debug!(%method, %url, "api request");

        let mut request = self.client.request(method.clone(), &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(token) = self.session.token().filter(|t| !t.is_empty()) {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.inspect_err(|err| {
            tracing::warn!(%method, %url, error = %err, "api request failed without a response");
        })?;

        self.handle_response(response).await
    }

    pub async fn get(&self, path: &str) -> ClientResult<Payload> {
        self.request::<()>(Method::GET, path, None, &[]).await
    }

    pub async fn get_with_query(&self, path: &str, query: &[(&str, String)]) -> ClientResult<Payload> {
        self.request::<()>(Method::GET, path, None, query).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<Payload> {
        self.request(Method::POST, path, Some(body), &[]).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<Payload> {
        self.request(Method::PUT, path, Some(body), &[]).await
    }

    pub async fn delete(&self, path: &str) -> ClientResult<Payload> {
        self.request::<()>(Method::DELETE, path, None, &[]).await
    }

    async fn handle_response(&self, response: reqwest::Response) -> ClientResult<Payload> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("api answered 401; clearing stored token");
            if let Err(err) = self.session.clear_token() {
                tracing::error!(error = %err, "failed to clear stored token");
            }
            let message = response
                .text()
                .await
                .ok()
                .and_then(|text| error_message(&text));
            return Err(ClientError::Unauthorized { message });
        }

        let text = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        if text.trim().is_empty() {
            return Ok(Payload::default());
        }

        Ok(match serde_json::from_str::<Value>(&text) {
            Ok(body) => Payload::from_body(body),
            Err(_) => Payload::from_text(&text),
        })
    }
}

/// `message` from an error body, if it is JSON carrying one.
fn error_message(text: &str) -> Option<String> {
    let body: Value = serde_json::from_str(text).ok()?;
    body.get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_reads_json_message_only() {
        assert_eq!(
            error_message(r#"{"message": "Invalid role", "status": "FAILED"}"#).as_deref(),
            Some("Invalid role")
        );
        assert_eq!(error_message("<html>502</html>"), None);
        assert_eq!(error_message(r#"{"message": ""}"#), None);
    }

    #[test]
    fn url_joins_without_double_slashes() {
        let gateway = Gateway::new(
            &ClientConfig::new("http://erp.local/"),
            Arc::new(crate::MemorySessionStore::new()),
        )
        .unwrap();
        assert_eq!(gateway.url("/org/role/all"), "http://erp.local/org/role/all");
        assert_eq!(gateway.url("api/stock"), "http://erp.local/api/stock");
    }
}
