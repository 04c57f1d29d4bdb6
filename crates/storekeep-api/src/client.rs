// REST API HTTP client
//
// Wraps `reqwest::Client` with base-URL path joining, bearer-token
// injection, and error-body parsing. All endpoint modules (products,
// customers, etc.) are implemented as inherent methods via separate
// files to keep this module focused on transport mechanics.

use std::sync::RwLock;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Server error bodies carry the message under `message` or `error`.
#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the storekeep REST API.
///
/// Holds the base URL and the last stored bearer token. The token is
/// interior-mutable so a login performed through this client takes
/// effect on every subsequent request without rebuilding the client.
/// No retries, no caching: every call maps to exactly one request.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    /// Bearer token injected as `Authorization` on every request.
    /// Absent until `set_token` is called (unauthenticated calls such
    /// as login simply omit the header).
    token: RwLock<Option<SecretString>>,
}

impl ApiClient {
    /// Create a client from the server root URL (e.g. `https://shop.example.com`).
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            token: RwLock::new(None),
        })
    }

    /// Wrap a pre-built `reqwest::Client` (used by tests and by callers
    /// that manage transport settings themselves).
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            token: RwLock::new(None),
        }
    }

    /// The server base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Token management ─────────────────────────────────────────────

    /// Store the bearer token used for all subsequent requests.
    pub fn set_token(&self, token: SecretString) {
        debug!("storing bearer token");
        *self.token.write().expect("token lock poisoned") = Some(token);
    }

    /// Drop the stored token (subsequent calls go out unauthenticated).
    pub fn clear_token(&self) {
        *self.token.write().expect("token lock poisoned") = None;
    }

    /// Whether a token is currently stored.
    pub fn has_token(&self) -> bool {
        self.token.read().expect("token lock poisoned").is_some()
    }

    /// Apply the stored token to a request builder.
    fn apply_auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let guard = self.token.read().expect("token lock poisoned");
        match guard.as_ref() {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build a full URL for an API path: `{base}/api/{path}`.
    pub(crate) fn api_url(&self, path: &str) -> Url {
        let base = self.base_url.as_str().trim_end_matches('/');
        let full = format!("{base}/api/{path}");
        Url::parse(&full).expect("invalid API URL")
    }

    // ── Request helpers ──────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.api_url(path);
        debug!("GET {url}");

        let resp = self.apply_auth(self.http.get(url)).send().await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.api_url(path);
        debug!("GET {url} params={params:?}");

        let resp = self
            .apply_auth(self.http.get(url).query(params))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.api_url(path);
        debug!("POST {url}");

        let resp = self
            .apply_auth(self.http.post(url).json(body))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.api_url(path);
        debug!("PUT {url}");

        let resp = self
            .apply_auth(self.http.put(url).json(body))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.api_url(path);
        debug!("DELETE {url}");

        let resp = self.apply_auth(self.http.delete(url)).send().await?;
        self.handle_empty(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview = &body[..body.len().min(200)];
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    /// Normalize a non-2xx response into [`Error`].
    ///
    /// Fallback chain for the message: JSON `message`/`error` field →
    /// raw body text → HTTP status line.
    async fn parse_error(&self, status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Error::Unauthorized;
        }

        let raw = resp.text().await.unwrap_or_default();

        if let Ok(body) = serde_json::from_str::<ErrorBody>(&raw) {
            if let Some(message) = body.message.or(body.error) {
                return Error::Api {
                    status: status.as_u16(),
                    message,
                };
            }
        }

        Error::Api {
            status: status.as_u16(),
            message: if raw.trim().is_empty() {
                status.to_string()
            } else {
                raw
            },
        }
    }
}

// ── Query-parameter helpers shared by the service modules ────────────

/// Append `(key, value)` when the value is present.
pub(crate) fn push_param<V: ToString>(
    params: &mut Vec<(&'static str, String)>,
    key: &'static str,
    value: Option<V>,
) {
    if let Some(v) = value {
        params.push((key, v.to_string()));
    }
}

/// Append a string parameter only when non-empty — absent filter fields
/// are omitted from the query string, never sent as empty strings.
pub(crate) fn push_str_param(
    params: &mut Vec<(&'static str, String)>,
    key: &'static str,
    value: Option<&str>,
) {
    if let Some(v) = value {
        if !v.is_empty() {
            params.push((key, v.to_owned()));
        }
    }
}
