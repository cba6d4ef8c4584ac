//! Domain types for the Spark landing page waitlist flow.
//!
//! Everything in this crate is UI-independent:
//!
//! - **Feedback**: the enumerated state driving the message area
//! - **EmailAddress**: validated, trimmed submission input
//! - **FormFields**: the submitted field set and its urlencoded wire format
//! - **Messages**: the user-facing text catalog
//! - **SubmitError**: the submission failure taxonomy

pub mod email;
pub mod error;
pub mod feedback;
pub mod fields;
pub mod messages;

pub use email::EmailAddress;
pub use error::SubmitError;
pub use feedback::Feedback;
pub use fields::FormFields;
pub use messages::Messages;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::email::EmailAddress;
    pub use crate::error::SubmitError;
    pub use crate::feedback::Feedback;
    pub use crate::fields::FormFields;
    pub use crate::messages::Messages;
}
