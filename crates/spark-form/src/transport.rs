//! Network seam for the submission call.

use async_trait::async_trait;
use spark_client::{FetchError, FormClient, Response};
use spark_core::FormFields;

/// The single network operation the waitlist controller performs.
///
/// Futures are not required to be `Send`; the controllers run on the
/// browser's single-threaded executor.
#[async_trait(?Send)]
pub trait Submitter {
    /// POST the field set to the form backend.
    async fn submit(&self, endpoint: &str, fields: &FormFields) -> Result<Response, FetchError>;
}

/// [`Submitter`] backed by the HTTP form client.
#[derive(Debug, Clone, Default)]
pub struct HttpSubmitter {
    client: FormClient,
}

impl HttpSubmitter {
    /// Create a submitter with a default client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a submitter around an existing client.
    pub fn with_client(client: FormClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl Submitter for HttpSubmitter {
    async fn submit(&self, endpoint: &str, fields: &FormFields) -> Result<Response, FetchError> {
        self.client
            .post_form(endpoint, &fields.to_urlencoded())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_http_submitter_encodes_fields() {
        // The native client is a stub, so this exercises the encoding path
        // end to end without a network.
        let submitter = HttpSubmitter::new();
        let fields = FormFields::new().with_field("email", "user@example.com");
        let response = block_on(submitter.submit("/", &fields)).unwrap();
        assert!(response.is_success());
    }
}
