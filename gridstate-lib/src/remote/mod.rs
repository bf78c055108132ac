//! Remote collaborator seam for CRUD reconciliation.
//!
//! The controller never builds requests itself: the caller hands it a
//! [`RemoteCall`] already bound to a method, URL, and body, and the
//! controller invokes it exactly once per CRUD operation. [`HttpCall`] is
//! the bundled implementation for JSON-over-HTTP backends.

use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use serde::Serialize;
use url::Url;

use crate::error::RemoteError;
use crate::model::Record;

/// The response envelope every backend CRUD endpoint returns.
///
/// `message` is user-facing pass-through text; the controller surfaces it
/// but never branches on its content. `data`, when present on success, is
/// the canonical server-side record and overrides whatever the caller
/// submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the backend accepted the operation.
    pub success: bool,
    /// The canonical record after the operation, if the backend returns one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Record>,
    /// User-facing message for notification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiResponse {
    /// Creates a success envelope without a record.
    pub fn ok() -> Self {
        Self {
            success: true,
            data: None,
            message: None,
        }
    }

    /// Creates a success envelope carrying the canonical record.
    pub fn ok_with(data: Record) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Creates a failure envelope with a user-facing message.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// A single remote CRUD call, ready to be issued.
///
/// Implementations are built per operation by the caller (URL, method,
/// and body are caller concerns). The controller invokes a call at most
/// once; retries belong to the caller or the backend.
#[async_trait]
pub trait RemoteCall: Send + Sync {
    /// Issues the call and decodes the response envelope.
    async fn invoke(&self) -> Result<ApiResponse, RemoteError>;
}

/// A JSON-over-HTTP [`RemoteCall`] backed by `reqwest`.
///
/// # Example
///
/// ```no_run
/// use gridstate_lib::remote::HttpCall;
/// use gridstate_lib::model::Record;
///
/// # fn demo() -> Result<(), url::ParseError> {
/// let record = Record::new().set("professor", "Lin");
/// let call = HttpCall::post("https://example.test/admin/course_open/add".parse()?)
///     .json(&record);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpCall {
    client: reqwest::Client,
    method: Method,
    url: Url,
    body: Option<serde_json::Value>,
    encode_error: Option<String>,
}

impl HttpCall {
    /// Creates a call with an explicit method.
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            method,
            url,
            body: None,
            encode_error: None,
        }
    }

    /// Creates a POST call, the shape the source's endpoints use.
    pub fn post(url: Url) -> Self {
        Self::new(Method::POST, url)
    }

    /// Creates a DELETE call.
    pub fn delete(url: Url) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// Uses a shared HTTP client instead of a private one.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Sets the JSON request body.
    ///
    /// Serialization failures surface on `invoke`, not here, so builder
    /// chains stay infallible.
    pub fn json<T: Serialize>(mut self, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => self.body = Some(value),
            Err(e) => self.encode_error = Some(e.to_string()),
        }
        self
    }
}

#[async_trait]
impl RemoteCall for HttpCall {
    async fn invoke(&self) -> Result<ApiResponse, RemoteError> {
        if let Some(e) = &self.encode_error {
            return Err(RemoteError::parse(format!("request body: {e}")));
        }

        let mut request = self.client.request(self.method.clone(), self.url.clone());
        if let Some(body) = &self.body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::http(status.as_u16(), body));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| RemoteError::parse_with_body(e.to_string(), body))
    }
}
