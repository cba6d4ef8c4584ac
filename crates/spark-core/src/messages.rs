//! User-facing text catalog for the waitlist form.

use serde::{Deserialize, Serialize};

use crate::feedback::Feedback;

/// The texts rendered for each feedback state.
///
/// Defaults carry the landing page copy. Page owners can override any
/// entry without touching the submission flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    /// Shown when the backend accepts the submission.
    pub success: String,
    /// Shown when the submission fails for any reason other than
    /// connectivity.
    pub error: String,
    /// Shown when validation rejects the input.
    pub invalid_email: String,
    /// Shown when the request fails and the runtime reports offline.
    pub network_error: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            success: "You're on the list! We'll be in touch soon.".to_string(),
            error: "Something went wrong. Please try again.".to_string(),
            invalid_email: "Please enter a valid email address.".to_string(),
            network_error: "Network error. Please check your connection.".to_string(),
        }
    }
}

impl Messages {
    /// Create the catalog with the default copy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the success text.
    pub fn with_success(mut self, text: impl Into<String>) -> Self {
        self.success = text.into();
        self
    }

    /// Override the generic error text.
    pub fn with_error(mut self, text: impl Into<String>) -> Self {
        self.error = text.into();
        self
    }

    /// Override the validation error text.
    pub fn with_invalid_email(mut self, text: impl Into<String>) -> Self {
        self.invalid_email = text.into();
        self
    }

    /// Override the connectivity error text.
    pub fn with_network_error(mut self, text: impl Into<String>) -> Self {
        self.network_error = text.into();
        self
    }

    /// Text for a feedback state (empty for [`Feedback::Idle`]).
    pub fn for_feedback(&self, feedback: Feedback) -> &str {
        match feedback {
            Feedback::Idle => "",
            Feedback::Success => &self.success,
            Feedback::InvalidEmail => &self.invalid_email,
            Feedback::NetworkError => &self.network_error,
            Feedback::GenericError => &self.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_copy() {
        let messages = Messages::default();
        assert_eq!(messages.success, "You're on the list! We'll be in touch soon.");
        assert_eq!(messages.error, "Something went wrong. Please try again.");
        assert_eq!(messages.invalid_email, "Please enter a valid email address.");
        assert_eq!(messages.network_error, "Network error. Please check your connection.");
    }

    #[test]
    fn test_builder_overrides() {
        let messages = Messages::new()
            .with_success("Welcome aboard.")
            .with_network_error("You appear to be offline.");
        assert_eq!(messages.success, "Welcome aboard.");
        assert_eq!(messages.network_error, "You appear to be offline.");
        // Untouched entries keep the defaults.
        assert_eq!(messages.error, "Something went wrong. Please try again.");
    }

    #[test]
    fn test_for_feedback_mapping() {
        let messages = Messages::default();
        assert_eq!(messages.for_feedback(Feedback::Idle), "");
        assert_eq!(messages.for_feedback(Feedback::Success), messages.success);
        assert_eq!(messages.for_feedback(Feedback::InvalidEmail), messages.invalid_email);
        assert_eq!(messages.for_feedback(Feedback::NetworkError), messages.network_error);
        assert_eq!(messages.for_feedback(Feedback::GenericError), messages.error);
    }
}
