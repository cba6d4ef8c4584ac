//! Waitlist form submission lifecycle.

use std::cell::{Cell, RefCell};

use spark_core::{EmailAddress, Feedback, FormFields, SubmitError};

use crate::config::FormConfig;
use crate::connectivity::Connectivity;
use crate::diag::Diagnostics;
use crate::surface::FormSurface;
use crate::transport::Submitter;

/// Wire name of the email field.
pub const EMAIL_FIELD: &str = "email";

/// What a call to [`WaitlistForm::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The attempt ran to completion; the feedback state says how it went.
    Completed(Feedback),
    /// Validation rejected the input. Nothing was sent.
    Rejected,
    /// A submission was already in flight. Nothing happened.
    InFlight,
}

/// Controller for one waitlist form.
///
/// Owns the submit lifecycle end to end: read input, validate, enter the
/// submitting state, deliver the field set, interpret the result, render
/// feedback, and leave the submitting state on every path out.
///
/// The controller is single-threaded. Element handles live behind a
/// `RefCell` and no borrow is held across the network await, so submit and
/// input events may safely arrive while a request is outstanding.
pub struct WaitlistForm<S, T, C> {
    surface: RefCell<S>,
    submitter: T,
    connectivity: C,
    config: FormConfig,
    diagnostics: Diagnostics,
    feedback: Cell<Feedback>,
    in_flight: Cell<bool>,
}

impl<S, T, C> WaitlistForm<S, T, C>
where
    S: FormSurface,
    T: Submitter,
    C: Connectivity,
{
    /// Create a controller over injected element handles, transport, and
    /// connectivity signal.
    pub fn new(surface: S, submitter: T, connectivity: C, config: FormConfig) -> Self {
        Self {
            surface: RefCell::new(surface),
            submitter,
            connectivity,
            config,
            diagnostics: Diagnostics::new().with_component("waitlist"),
            feedback: Cell::new(Feedback::Idle),
            in_flight: Cell::new(false),
        }
    }

    /// Replace the diagnostics logger.
    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Current feedback state.
    pub fn feedback(&self) -> Feedback {
        self.feedback.get()
    }

    /// Whether a submission is currently outstanding.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// The active configuration.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Handle one submit event.
    ///
    /// While a previous submission is outstanding this is a complete no-op
    /// and reports [`SubmitOutcome::InFlight`].
    pub async fn submit(&self) -> SubmitOutcome {
        if self.in_flight.get() {
            return SubmitOutcome::InFlight;
        }

        self.reset_feedback();

        let raw = self.surface.borrow().email_value();
        let email = match EmailAddress::parse(&raw) {
            Ok(email) => email,
            Err(error) => {
                self.render_feedback(error.feedback());
                self.surface.borrow_mut().focus_email();
                return SubmitOutcome::Rejected;
            }
        };

        self.in_flight.set(true);
        self.surface.borrow_mut().set_submitting(true);

        let result = self.deliver(&email).await;

        let outcome = match result {
            Ok(()) => {
                self.render_feedback(Feedback::Success);
                self.surface.borrow_mut().clear_email();
                SubmitOutcome::Completed(Feedback::Success)
            }
            Err(error) => {
                self.log_failure(&error);
                let feedback = error.feedback();
                self.render_feedback(feedback);
                SubmitOutcome::Completed(feedback)
            }
        };

        self.surface.borrow_mut().set_submitting(false);
        self.in_flight.set(false);

        outcome
    }

    /// Any edit to the email field clears the current feedback.
    pub fn input_changed(&self) {
        self.reset_feedback();
    }

    /// One delivery attempt: serialize the current field set, POST it, and
    /// interpret the answer.
    async fn deliver(&self, email: &EmailAddress) -> Result<(), SubmitError> {
        let extra = self.surface.borrow().extra_fields();
        let mut fields = FormFields::new();
        for (name, value) in extra {
            fields.set(name, value);
        }
        fields.set(EMAIL_FIELD, email.as_str());

        match self.submitter.submit(&self.config.endpoint, &fields).await {
            Ok(response) if response.is_success() => Ok(()),
            // Offline classification covers every failed attempt, whether
            // or not the backend answered.
            _ if !self.connectivity.is_online() => Err(SubmitError::Offline),
            Ok(response) => Err(SubmitError::Http {
                status: response.status,
            }),
            Err(error) => Err(SubmitError::Failed(error.to_string())),
        }
    }

    fn reset_feedback(&self) {
        self.feedback.set(Feedback::Idle);
        self.surface.borrow_mut().clear_message();
    }

    fn render_feedback(&self, feedback: Feedback) {
        self.feedback.set(feedback);
        let text = self.config.messages.for_feedback(feedback);
        self.surface
            .borrow_mut()
            .show_message(text, feedback.css_class());
    }

    fn log_failure(&self, error: &SubmitError) {
        let builder = self
            .diagnostics
            .error_builder("Waitlist submission failed")
            .field("error", error.to_string())
            .field("feedback", error.feedback().as_str());
        let builder = match error {
            SubmitError::Http { status } => builder.field_u64("status", u64::from(*status)),
            _ => builder,
        };
        builder.emit();
    }
}
