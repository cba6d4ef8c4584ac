//! Injected element handles for the waitlist form.

/// The controller's view of the form's elements.
///
/// The controller never touches a document directly. Reads and writes go
/// through this trait, so the same lifecycle runs against real DOM handles
/// in the browser and against recording doubles in tests.
pub trait FormSurface {
    /// Current raw value of the email field.
    fn email_value(&self) -> String;

    /// Hidden fields the form declares alongside the email input, as
    /// `(name, value)` pairs in document order.
    fn extra_fields(&self) -> Vec<(String, String)>;

    /// Clear the email field.
    fn clear_email(&mut self);

    /// Move input focus to the email field.
    fn focus_email(&mut self);

    /// Enter or leave the submitting state (control disabled, loading
    /// indicator shown).
    fn set_submitting(&mut self, submitting: bool);

    /// Render feedback text with its style modifier (`success` or `error`).
    fn show_message(&mut self, text: &str, css_class: &str);

    /// Reset the message area to its neutral state.
    fn clear_message(&mut self);
}
