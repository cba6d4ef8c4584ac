//! HTTP delivery for the Spark landing page waitlist form.
//!
//! Provides a small client for posting urlencoded form payloads from the
//! browser. On wasm32 the request goes through the page's `fetch`; on
//! native targets the client is a stub so controllers can be exercised
//! against scripted transports.
//!
//! # Example
//!
//! ```rust,ignore
//! use spark_client::FormClient;
//!
//! let client = FormClient::new();
//! let response = client
//!     .post_form("/", "form-name=waitlist&email=user%40example.com")
//!     .await?;
//! if response.is_success() {
//!     // submission accepted
//! }
//! ```

mod error;
mod request;
mod response;

pub use error::FetchError;
pub use request::FormRequest;
pub use response::Response;

/// Client for posting urlencoded payloads to the form backend.
///
/// The landing page posts to its own origin (the form backend intercepts
/// the path), so requests are usually relative. A base URL can be set for
/// deployments that post cross-origin.
#[derive(Debug, Clone, Default)]
pub struct FormClient {
    base_url: Option<String>,
}

impl FormClient {
    /// Create a new client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client with a base URL prepended to relative paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// POST an urlencoded `body` to `path` and return the backend's answer.
    pub async fn post_form(&self, path: &str, body: &str) -> Result<Response, FetchError> {
        let request = FormRequest::post(self.resolve(path), body);
        send(request).await
    }

    fn resolve(&self, path: &str) -> String {
        match &self.base_url {
            Some(base) => {
                if path.starts_with("http://") || path.starts_with("https://") {
                    path.to_string()
                } else {
                    format!("{}{}", base.trim_end_matches('/'), path)
                }
            }
            None => path.to_string(),
        }
    }
}

/// Send the request through the browser's `fetch`.
#[cfg(target_arch = "wasm32")]
async fn send(request: FormRequest) -> Result<Response, FetchError> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    let opts = web_sys::RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(request.body()));

    let js_request = web_sys::Request::new_with_str_and_init(request.url(), &opts)
        .map_err(|e| FetchError::RequestError(js_value_string(&e)))?;
    for (key, value) in request.headers() {
        js_request
            .headers()
            .set(key, value)
            .map_err(|e| FetchError::RequestError(js_value_string(&e)))?;
    }

    let window =
        web_sys::window().ok_or_else(|| FetchError::RequestError("no window".to_string()))?;
    let fetched = JsFuture::from(window.fetch_with_request(&js_request))
        .await
        .map_err(|e| FetchError::RequestError(js_value_string(&e)))?;
    let js_response: web_sys::Response = fetched
        .dyn_into()
        .map_err(|_| FetchError::ParseError("fetch did not return a response".to_string()))?;

    let status = js_response.status();
    let text_promise = js_response
        .text()
        .map_err(|e| FetchError::ParseError(js_value_string(&e)))?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(|e| FetchError::ParseError(js_value_string(&e)))?
        .as_string()
        .unwrap_or_default();

    Ok(Response::new(status, body.into_bytes()))
}

/// Send the request (non-WASM stub).
#[cfg(not(target_arch = "wasm32"))]
async fn send(_request: FormRequest) -> Result<Response, FetchError> {
    // Return empty response for non-WASM builds (testing/development)
    Ok(Response::new(200, Vec::new()))
}

#[cfg(target_arch = "wasm32")]
fn js_value_string(value: &wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchError, FormClient, FormRequest, Response};
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_resolve_without_base() {
        let client = FormClient::new();
        assert_eq!(client.resolve("/"), "/");
        assert_eq!(client.resolve("/subscribe"), "/subscribe");
    }

    #[test]
    fn test_resolve_joins_base() {
        let client = FormClient::new().with_base_url("https://example.com/");
        assert_eq!(client.resolve("/"), "https://example.com/");
        assert_eq!(client.resolve("/subscribe"), "https://example.com/subscribe");
    }

    #[test]
    fn test_resolve_keeps_absolute_urls() {
        let client = FormClient::new().with_base_url("https://example.com");
        assert_eq!(
            client.resolve("https://other.example/submit"),
            "https://other.example/submit"
        );
    }

    #[test]
    fn test_post_form_stub_succeeds() {
        let client = FormClient::new();
        let response = block_on(client.post_form("/", "email=user%40example.com")).unwrap();
        assert_eq!(response.status, 200);
        assert!(response.is_success());
        assert!(response.bytes().is_empty());
    }
}
