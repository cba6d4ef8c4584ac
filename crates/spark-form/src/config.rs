//! Waitlist form configuration.

use spark_core::Messages;

/// Configuration for the waitlist form controller.
///
/// Defaults mirror the landing page deployment: the field set is posted
/// back to the site's own root path, where the form backend intercepts it.
/// Requests run without a client-enforced deadline; the runtime's own
/// limits apply, and the in-flight guard keeps duplicate submissions out
/// while a slow request is outstanding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Path the urlencoded field set is posted to.
    pub endpoint: String,
    /// User-facing text catalog.
    pub messages: Messages,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: "/".to_string(),
            messages: Messages::default(),
        }
    }
}

impl FormConfig {
    /// Create a configuration with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the submission endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the message catalog.
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_posts_to_root() {
        let config = FormConfig::default();
        assert_eq!(config.endpoint, "/");
        assert_eq!(config.messages, Messages::default());
    }

    #[test]
    fn test_builder_chain() {
        let config = FormConfig::new()
            .with_endpoint("/subscribe")
            .with_messages(Messages::new().with_success("Done."));
        assert_eq!(config.endpoint, "/subscribe");
        assert_eq!(config.messages.success, "Done.");
    }
}
