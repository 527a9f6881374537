//! HTTP client for the Bridge API.

use std::fmt;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde_json::Value;
use url::Url;

use crate::{
    errors::ApiError,
    params::{Params, ACCESS_TOKEN, ACCESS_TOKEN_QUERY},
    resources::{Accounts, Banks, Items, Transactions, Users},
    Error,
};

/// Request timeout applied when a call does not pick its own.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Production API root.
pub const DEFAULT_API_ROOT: &str = "https://sync.bankin.com";

/// Value sent in the `Bankin-Version` header unless overridden.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

const VERSION_HEADER: &str = "Bankin-Version";

/// HTTP client for the Bridge API.
///
/// Holds the application credentials and signs every request with them.
/// Nothing else is stored between calls, so a single client can be shared
/// freely across tasks.
pub struct Client {
    http: reqwest::Client,
    api_root: Url,
    client_id: String,
    client_secret: String,
    api_version: String,
}

/// Outgoing query parameters and bearer token for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub query: Vec<(String, String)>,
    pub bearer: Option<String>,
}

impl PreparedRequest {
    /// Appends the query parameters to the given URL, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }
        url
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl Client {
    /// Creates a client pointing at the production API.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_API_ROOT, client_id, client_secret)
    }

    /// Creates a client with a custom API root. Used for the sandbox and for
    /// testing with wiremock.
    pub fn with_base_url(
        base_url: &str,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self, Error> {
        let api_root = Url::parse(base_url).map_err(|e| {
            tracing::error!("Invalid API root {}: {}", base_url, e);
            Error::InvalidUrl(e)
        })?;
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            api_root,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            api_version: CLIENT_VERSION.to_string(),
        })
    }

    /// Overrides the `Bankin-Version` header value.
    pub fn with_api_version(mut self, version: &str) -> Self {
        self.api_version = version.to_string();
        self
    }

    pub fn api_root(&self) -> &Url {
        &self.api_root
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Turns caller parameters into the outgoing query and bearer token.
    ///
    /// The credentials always come first. A non-empty `access_token` entry
    /// moves to the bearer header; a non-empty `access_token_query` entry is
    /// re-keyed to `access_token` and stays in the query. Everything else
    /// follows in insertion order.
    pub fn prepare(&self, mut params: Params) -> PreparedRequest {
        let bearer = params.take_token(ACCESS_TOKEN);

        let mut query = Params::new()
            .with("client_id", &self.client_id)
            .with("client_secret", &self.client_secret);
        if let Some(token) = params.take_token(ACCESS_TOKEN_QUERY) {
            query.insert(ACCESS_TOKEN, token);
        }
        for (key, value) in params {
            query.insert(&key, value);
        }

        PreparedRequest {
            query: query.into_iter().collect(),
            bearer,
        }
    }

    /// Sends one request with the default timeout.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        params: Params,
    ) -> Result<Option<Value>, Error> {
        self.request_with_timeout(method, path, params, DEFAULT_TIMEOUT)
            .await
    }

    /// Sends one request and decodes its body.
    ///
    /// `path` is joined onto the API root, so an absolute path replaces any
    /// path the root carries. Returns `Ok(None)` for an empty body. The HTTP
    /// status is not consulted: the API reports failures through a `type`
    /// field in the body.
    pub async fn request_with_timeout(
        &self,
        method: Method,
        path: &str,
        params: Params,
        timeout: Duration,
    ) -> Result<Option<Value>, Error> {
        let url = self.api_root.join(path)?;
        self.send(method, url, params, timeout).await
    }

    /// Builds an endpoint URL from path segments, percent-encoding each one.
    ///
    /// The root's own path is replaced, as with an absolute path. A segment
    /// holding `/` or `?` stays a single segment, and `.`/`..` segments are
    /// dropped.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.api_root.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .clear()
            .extend(segments);
        Ok(url)
    }

    /// Sends one request to an endpoint built with [`Client::endpoint`].
    pub(crate) async fn request_endpoint(
        &self,
        method: Method,
        segments: &[&str],
        params: Params,
    ) -> Result<Option<Value>, Error> {
        let url = self.endpoint(segments)?;
        self.send(method, url, params, DEFAULT_TIMEOUT).await
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        params: Params,
        timeout: Duration,
    ) -> Result<Option<Value>, Error> {
        let path = url.path().to_string();
        let prepared = self.prepare(params);
        let url = prepared.add_to_url(&url);

        tracing::debug!(%method, path = %path, "Sending request");
        let mut builder = self
            .http
            .request(method.clone(), url)
            .header(VERSION_HEADER, &self.api_version)
            .header(CONTENT_TYPE, "application/json")
            .json(&serde_json::json!({}))
            .timeout(timeout);
        if let Some(token) = &prepared.bearer {
            builder = builder.bearer_auth(token);
        }

        // The URL carries the client secret, so it is stripped from transport errors.
        let resp = builder.send().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to send {} {}: {}", method, path, e);
            Error::Network(e)
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to read response body: {}", e);
            Error::Network(e)
        })?;

        if !status.is_success() {
            tracing::warn!(
                "{} {} answered with status {}: {}",
                method,
                path,
                status,
                truncate_body(&body)
            );
        }

        decode_body(&body)
    }

    pub async fn get(&self, path: &str, params: Params) -> Result<Option<Value>, Error> {
        self.request(Method::GET, path, params).await
    }

    pub async fn post(&self, path: &str, params: Params) -> Result<Option<Value>, Error> {
        self.request(Method::POST, path, params).await
    }

    pub async fn put(&self, path: &str, params: Params) -> Result<Option<Value>, Error> {
        self.request(Method::PUT, path, params).await
    }

    pub async fn delete(&self, path: &str, params: Params) -> Result<Option<Value>, Error> {
        self.request(Method::DELETE, path, params).await
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    pub fn banks(&self) -> Banks<'_> {
        Banks::new(self)
    }

    pub fn items(&self) -> Items<'_> {
        Items::new(self)
    }

    pub fn accounts(&self) -> Accounts<'_> {
        Accounts::new(self)
    }

    pub fn transactions(&self) -> Transactions<'_> {
        Transactions::new(self)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_root", &self.api_root.as_str())
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("api_version", &self.api_version)
            .finish()
    }
}

/// Decodes a response body.
///
/// An empty body yields `Ok(None)`. A body that is not JSON becomes
/// [`Error::Request`]; a JSON object with a truthy `type` field becomes
/// [`Error::Api`]. Any other JSON value is returned unchanged.
pub fn decode_body(text: &str) -> Result<Option<Value>, Error> {
    if text.is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(text).map_err(|e| {
        tracing::error!("Failed to parse response: {} | body: {}", e, truncate_body(text));
        Error::undecodable(text)
    })?;

    if value.get("type").is_some_and(is_truthy) {
        return Err(Error::Api(ApiError::new(value)));
    }
    Ok(Some(value))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
