//! Submission failure taxonomy.

use thiserror::Error;

use crate::feedback::Feedback;

/// Errors raised while validating or delivering a waitlist submission.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The email input failed validation. Nothing was sent.
    #[error("Invalid email address")]
    InvalidEmail,

    /// The backend answered outside the success range.
    #[error("Form backend returned HTTP {status}")]
    Http { status: u16 },

    /// The attempt failed while the runtime reports no connectivity.
    #[error("Network unavailable")]
    Offline,

    /// The request never completed for any other reason.
    #[error("Submission failed: {0}")]
    Failed(String),
}

impl SubmitError {
    /// The feedback state this failure renders as.
    pub fn feedback(&self) -> Feedback {
        match self {
            SubmitError::InvalidEmail => Feedback::InvalidEmail,
            SubmitError::Http { .. } => Feedback::GenericError,
            SubmitError::Offline => Feedback::NetworkError,
            SubmitError::Failed(_) => Feedback::GenericError,
        }
    }

    /// Whether the field set was actually put on the wire.
    pub fn was_sent(&self) -> bool {
        !matches!(self, SubmitError::InvalidEmail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_mapping() {
        assert_eq!(SubmitError::InvalidEmail.feedback(), Feedback::InvalidEmail);
        assert_eq!(
            SubmitError::Http { status: 500 }.feedback(),
            Feedback::GenericError
        );
        assert_eq!(SubmitError::Offline.feedback(), Feedback::NetworkError);
        assert_eq!(
            SubmitError::Failed("connection reset".to_string()).feedback(),
            Feedback::GenericError
        );
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            SubmitError::Http { status: 422 }.to_string(),
            "Form backend returned HTTP 422"
        );
        assert_eq!(
            SubmitError::Failed("connection reset".to_string()).to_string(),
            "Submission failed: connection reset"
        );
        assert_eq!(SubmitError::Offline.to_string(), "Network unavailable");
    }

    #[test]
    fn test_was_sent() {
        assert!(!SubmitError::InvalidEmail.was_sent());
        assert!(SubmitError::Http { status: 404 }.was_sent());
        assert!(SubmitError::Offline.was_sent());
    }
}
