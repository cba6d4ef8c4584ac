//! Controllers for the Spark landing page's client-side behavior.
//!
//! The landing page has three interactive pieces, each driven by a
//! UI-independent controller:
//!
//! - [`WaitlistForm`]: the signup form's submit lifecycle (validate,
//!   deliver, render feedback, always revert the submitting state)
//! - [`TabController`]: mutually exclusive tab panels
//! - [`Diagnostics`]: structured failure logging
//!
//! Element handles, the network call, and the connectivity signal are
//! injected through [`FormSurface`], [`Submitter`], and [`Connectivity`],
//! so the same controllers run against the browser document and against
//! recording doubles in tests.

mod config;
mod connectivity;
mod controller;
mod diag;
mod surface;
mod tabs;
mod transport;

pub use config::FormConfig;
pub use connectivity::{AlwaysOnline, Connectivity};
pub use controller::{SubmitOutcome, WaitlistForm, EMAIL_FIELD};
pub use diag::{Diagnostics, LogBuilder, LogEntry, LogFormat, LogLevel, LogSink, StderrSink};
pub use surface::FormSurface;
pub use tabs::{TabController, TabStrip, TabSurface};
pub use transport::{HttpSubmitter, Submitter};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::FormConfig;
    pub use crate::connectivity::{AlwaysOnline, Connectivity};
    pub use crate::controller::{SubmitOutcome, WaitlistForm};
    pub use crate::diag::{Diagnostics, LogFormat, LogLevel};
    pub use crate::surface::FormSurface;
    pub use crate::tabs::{TabController, TabStrip, TabSurface};
    pub use crate::transport::{HttpSubmitter, Submitter};
}
