//! Form submission request.

/// A POST carrying an urlencoded form body.
///
/// The form flow only ever posts urlencoded payloads, so the content type
/// is preset and the method is fixed. Header order is preserved.
#[derive(Debug, Clone)]
pub struct FormRequest {
    pub(crate) url: String,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: String,
}

impl FormRequest {
    /// Create a POST for `url` with an urlencoded `body`.
    pub fn post(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: vec![(
                "Content-Type".to_string(),
                "application/x-www-form-urlencoded".to_string(),
            )],
            body: body.into(),
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// The target URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The request headers in insertion order.
    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The urlencoded body.
    pub fn body(&self) -> &str {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_presets_content_type() {
        let request = FormRequest::post("/", "email=user%40example.com");
        assert_eq!(request.url(), "/");
        assert_eq!(request.body(), "email=user%40example.com");
        let headers: Vec<_> = request.headers().collect();
        assert_eq!(
            headers,
            vec![("Content-Type", "application/x-www-form-urlencoded")]
        );
    }

    #[test]
    fn test_header_appends() {
        let request = FormRequest::post("/", "").header("Accept", "text/html");
        let headers: Vec<_> = request.headers().collect();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[1], ("Accept", "text/html"));
    }
}
