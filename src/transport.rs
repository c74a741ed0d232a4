//! HTTP transport: form-encoded POSTs to the Voice API.
//!
//! The [`Transport`] trait is the seam between the API operations and the
//! network. [`HttpTransport`] is the `reqwest` implementation; tests plug in
//! their own.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::time::timeout;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::VoiceConfig;
use crate::constants::*;
use crate::error::{VoiceError, VoiceResult};

/// Ordered form fields for one request. `username` is always first.
///
/// Serializes as a flat map, which is what reqwest form-encodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RequestPayload {
    fields: IndexMap<String, String>,
}

impl RequestPayload {
    pub fn new(username: impl Into<String>) -> Self {
        let mut fields = IndexMap::new();
        fields.insert("username".to_string(), username.into());
        Self { fields }
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields
            .insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields
            .is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.fields
            .iter()
    }
}

/// Successful API reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    status: u16,
    body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn into_body(self) -> String {
        self.body
    }

    /// Deserialize the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> VoiceResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Sends one form-encoded POST and reports the outcome.
///
/// Implementations return `Ok` only for 2xx replies. No retries are expected.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, path: &str, payload: &RequestPayload) -> VoiceResult<ApiResponse>;
}

/// `reqwest`-backed transport that authenticates with the `apikey` header
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
    timeout_ms: u64,
}

impl HttpTransport {
    pub fn new(config: &VoiceConfig) -> VoiceResult<Self> {
        config.validate()?;
        let base_url = config.resolved_base_url()?;
        let client = reqwest::Client::builder().build()?;

        info!(
            "Voice API transport for {} at {}",
            config.username, base_url
        );
        Ok(Self {
            client,
            base_url,
            api_key: config
                .api_key
                .clone(),
            timeout_ms: config.timeout_ms,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .field("timeout_ms", &self.timeout_ms)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, path: &str, payload: &RequestPayload) -> VoiceResult<ApiResponse> {
        let url = self
            .base_url
            .join(path)?;
        debug!("[HTTP] POST {} ({} fields)", url, payload.len());

        let request = self
            .client
            .post(url)
            .header(HEADER_API_KEY, &self.api_key)
            .header(HEADER_ACCEPT, CONTENT_TYPE_JSON)
            .form(payload);

        let response = match timeout(Duration::from_millis(self.timeout_ms), request.send()).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                warn!("[HTTP] POST {} failed: {}", path, e);
                return Err(VoiceError::Transport(e));
            }
            Err(_) => {
                warn!("[HTTP] POST {} timed out after {}ms", path, self.timeout_ms);
                return Err(VoiceError::Timeout {
                    timeout_ms: self.timeout_ms,
                });
            }
        };

        let status = response
            .status()
            .as_u16();
        let body = response
            .text()
            .await?;
        debug!("[HTTP] {} replied {}", path, status);

        if !(200..300).contains(&status) {
            warn!("[HTTP] {} rejected with {}: {}", path, status, body);
            return Err(VoiceError::Http { status, body });
        }
        Ok(ApiResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_starts_with_username() {
        let payload = RequestPayload::new("sandbox")
            .field("to", "+254700000000")
            .field("from", "+254711111111");
        let keys: Vec<&str> = payload
            .iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(keys, ["username", "to", "from"]);
    }

    #[test]
    fn payload_serializes_as_flat_map() {
        let payload = RequestPayload::new("my app").field("to", "+254700000000");
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"username":"my app","to":"+254700000000"}"#
        );
    }

    #[test]
    fn api_response_json() {
        let response = ApiResponse::new(201, r#"{"errorMessage":"None"}"#);
        let value: serde_json::Value = response
            .json()
            .unwrap();
        assert_eq!(value["errorMessage"], "None");
        assert_eq!(response.status(), 201);
    }

    #[tokio::test]
    async fn http_transport_rejects_empty_key() {
        let config = VoiceConfig::new("myapp", "");
        assert!(HttpTransport::new(&config).is_err());
    }

    #[tokio::test]
    async fn http_transport_uses_configured_base() {
        let config = VoiceConfig::new("myapp", "key").base_url("http://127.0.0.1:9/");
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.base_url().as_str(), "http://127.0.0.1:9/");
        assert!(!format!("{:?}", transport).contains("key"));
    }
}
