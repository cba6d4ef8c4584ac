//! Feedback states for the waitlist form's message area.

use serde::{Deserialize, Serialize};

/// State of the form's feedback area.
///
/// The form is always in exactly one of these states. Each non-idle state
/// maps to a message from the [`Messages`](crate::Messages) catalog and a
/// style class on the message element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    /// No feedback shown (initial state, or cleared by editing the input).
    #[default]
    Idle,
    /// The backend accepted the submission.
    Success,
    /// Validation rejected the input before anything was sent.
    InvalidEmail,
    /// The request failed and the runtime reports no connectivity.
    NetworkError,
    /// The backend rejected the submission, or it failed for any other reason.
    GenericError,
}

impl Feedback {
    /// Stable identifier used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Feedback::Idle => "idle",
            Feedback::Success => "success",
            Feedback::InvalidEmail => "invalid_email",
            Feedback::NetworkError => "network_error",
            Feedback::GenericError => "generic_error",
        }
    }

    /// Style modifier applied to the message element (empty when idle).
    pub fn css_class(&self) -> &'static str {
        match self {
            Feedback::Idle => "",
            Feedback::Success => "success",
            Feedback::InvalidEmail | Feedback::NetworkError | Feedback::GenericError => "error",
        }
    }

    /// Whether this state reports a failed attempt.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Feedback::InvalidEmail | Feedback::NetworkError | Feedback::GenericError
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(Feedback::default(), Feedback::Idle);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(Feedback::Idle.as_str(), "idle");
        assert_eq!(Feedback::Success.as_str(), "success");
        assert_eq!(Feedback::InvalidEmail.as_str(), "invalid_email");
        assert_eq!(Feedback::NetworkError.as_str(), "network_error");
        assert_eq!(Feedback::GenericError.as_str(), "generic_error");
    }

    #[test]
    fn test_css_class_maps_failures_to_error() {
        assert_eq!(Feedback::Idle.css_class(), "");
        assert_eq!(Feedback::Success.css_class(), "success");
        assert_eq!(Feedback::InvalidEmail.css_class(), "error");
        assert_eq!(Feedback::NetworkError.css_class(), "error");
        assert_eq!(Feedback::GenericError.css_class(), "error");
    }

    #[test]
    fn test_is_error() {
        assert!(!Feedback::Idle.is_error());
        assert!(!Feedback::Success.is_error());
        assert!(Feedback::InvalidEmail.is_error());
        assert!(Feedback::NetworkError.is_error());
        assert!(Feedback::GenericError.is_error());
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Feedback::NetworkError).unwrap();
        assert_eq!(json, "\"network_error\"");
        let back: Feedback = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Feedback::NetworkError);
    }
}
