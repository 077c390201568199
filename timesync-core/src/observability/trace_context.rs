//! Request correlation for calls made to the backend.
//!
//! Every outgoing request gets a fresh `x-request-id` so the server logs can
//! be matched with the client-side `tracing` events.

use reqwest::header::HeaderMap;
use reqwest::Method;
use uuid::Uuid;

/// Header name for request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Generate a new request ID.
pub fn new_request_id() -> String {
    Uuid::new_v4().to_string()
}

/// Insert the request ID into `headers` if it is a valid header value.
pub fn inject_request_id(headers: &mut HeaderMap, request_id: &str) {
    if let Ok(value) = request_id.parse() {
        headers.insert(REQUEST_ID_HEADER, value);
    }
}

/// Extract request ID from headers.
pub fn extract_request_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}

/// A request builder that stamps a request ID before sending.
pub struct TracedRequest {
    request: reqwest::RequestBuilder,
    method: Method,
    url: String,
}

impl TracedRequest {
    pub fn new(request: reqwest::RequestBuilder, method: Method, url: &str) -> Self {
        Self {
            request,
            method,
            url: url.to_string(),
        }
    }

    /// Add a header to the request.
    pub fn header(self, key: &str, value: &str) -> Self {
        Self {
            request: self.request.header(key, value),
            ..self
        }
    }

    /// Add query parameters.
    pub fn query<T: serde::Serialize + ?Sized>(self, query: &T) -> Self {
        Self {
            request: self.request.query(query),
            ..self
        }
    }

    /// Add JSON body to the request.
    pub fn json<T: serde::Serialize + ?Sized>(self, json: &T) -> Self {
        Self {
            request: self.request.json(json),
            ..self
        }
    }

    /// Send the request with a freshly generated request ID.
    pub async fn send(self) -> Result<reqwest::Response, reqwest::Error> {
        let request_id = new_request_id();
        self.send_with_request_id(&request_id).await
    }

    /// Send the request with a caller-supplied request ID.
    pub async fn send_with_request_id(
        self,
        request_id: &str,
    ) -> Result<reqwest::Response, reqwest::Error> {
        let mut headers = HeaderMap::new();
        inject_request_id(&mut headers, request_id);

        tracing::debug!(
            method = %self.method,
            url = %self.url,
            request_id = %request_id,
            "Sending request"
        );

        self.request.headers(headers).send().await
    }
}

/// Extension trait for reqwest::Client to create traced requests.
pub trait TracedClientExt {
    fn traced_get(&self, url: &str) -> TracedRequest;
    fn traced_post(&self, url: &str) -> TracedRequest;
    fn traced_patch(&self, url: &str) -> TracedRequest;
    fn traced_delete(&self, url: &str) -> TracedRequest;
}

impl TracedClientExt for reqwest::Client {
    fn traced_get(&self, url: &str) -> TracedRequest {
        TracedRequest::new(self.get(url), Method::GET, url)
    }

    fn traced_post(&self, url: &str) -> TracedRequest {
        TracedRequest::new(self.post(url), Method::POST, url)
    }

    fn traced_patch(&self, url: &str) -> TracedRequest {
        TracedRequest::new(self.patch(url), Method::PATCH, url)
    }

    fn traced_delete(&self, url: &str) -> TracedRequest {
        TracedRequest::new(self.delete(url), Method::DELETE, url)
    }
}
