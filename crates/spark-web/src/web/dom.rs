//! DOM-backed implementations of the controller seams.

use spark_form::{Connectivity, FormSurface, LogLevel, LogSink, TabSurface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement};

/// Base class kept on the message element; feedback adds a modifier.
const MESSAGE_CLASS: &str = "form-message";
/// Class toggled on the submit button while a request is outstanding.
const LOADING_CLASS: &str = "loading";
/// Class marking the selected trigger and visible panel.
const ACTIVE_CLASS: &str = "active";

/// [`FormSurface`] over the live signup form elements.
pub struct DomFormSurface {
    form: HtmlFormElement,
    email: HtmlInputElement,
    submit: HtmlButtonElement,
    message: Element,
}

impl DomFormSurface {
    /// Bind the surface to resolved elements.
    pub fn new(
        form: HtmlFormElement,
        email: HtmlInputElement,
        submit: HtmlButtonElement,
        message: Element,
    ) -> Self {
        Self {
            form,
            email,
            submit,
            message,
        }
    }
}

impl FormSurface for DomFormSurface {
    fn email_value(&self) -> String {
        self.email.value()
    }

    fn extra_fields(&self) -> Vec<(String, String)> {
        let mut fields = Vec::new();
        let inputs = match self.form.query_selector_all("input[type='hidden']") {
            Ok(inputs) => inputs,
            Err(_) => return fields,
        };
        for index in 0..inputs.length() {
            let node = match inputs.item(index) {
                Some(node) => node,
                None => continue,
            };
            if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
                let name = input.name();
                if !name.is_empty() {
                    fields.push((name, input.value()));
                }
            }
        }
        fields
    }

    fn clear_email(&mut self) {
        self.email.set_value("");
    }

    fn focus_email(&mut self) {
        let _ = self.email.focus();
    }

    fn set_submitting(&mut self, submitting: bool) {
        self.submit.set_disabled(submitting);
        let _ = self
            .submit
            .class_list()
            .toggle_with_force(LOADING_CLASS, submitting);
    }

    fn show_message(&mut self, text: &str, css_class: &str) {
        self.message.set_text_content(Some(text));
        if css_class.is_empty() {
            self.message.set_class_name(MESSAGE_CLASS);
        } else {
            self.message
                .set_class_name(&format!("{} {}", MESSAGE_CLASS, css_class));
        }
    }

    fn clear_message(&mut self) {
        self.message.set_text_content(Some(""));
        self.message.set_class_name(MESSAGE_CLASS);
    }
}

/// One resolved trigger/panel pair.
pub struct TabBinding {
    pub id: String,
    pub trigger: HtmlElement,
    pub panel: HtmlElement,
}

/// [`TabSurface`] over the live tab elements.
pub struct DomTabSurface {
    bindings: Vec<TabBinding>,
}

impl DomTabSurface {
    /// Bind the surface to resolved trigger/panel pairs.
    pub fn new(bindings: Vec<TabBinding>) -> Self {
        Self { bindings }
    }

    fn binding(&self, id: &str) -> Option<&TabBinding> {
        self.bindings.iter().find(|binding| binding.id == id)
    }
}

impl TabSurface for DomTabSurface {
    fn set_trigger_selected(&mut self, id: &str, selected: bool) {
        if let Some(binding) = self.binding(id) {
            let _ = binding
                .trigger
                .class_list()
                .toggle_with_force(ACTIVE_CLASS, selected);
            let _ = binding
                .trigger
                .set_attribute("aria-selected", if selected { "true" } else { "false" });
        }
    }

    fn set_panel_visible(&mut self, id: &str, visible: bool) {
        if let Some(binding) = self.binding(id) {
            let _ = binding
                .panel
                .class_list()
                .toggle_with_force(ACTIVE_CLASS, visible);
            binding.panel.set_hidden(!visible);
        }
    }
}

/// [`Connectivity`] backed by `navigator.onLine`.
///
/// A missing window reports online, which keeps failures on the generic
/// path.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigatorConnectivity;

impl Connectivity for NavigatorConnectivity {
    fn is_online(&self) -> bool {
        web_sys::window()
            .map(|window| window.navigator().on_line())
            .unwrap_or(true)
    }
}

/// [`LogSink`] that writes to the browser console.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn emit(&self, level: LogLevel, line: &str) {
        let value = JsValue::from_str(line);
        match level {
            LogLevel::Error => web_sys::console::error_1(&value),
            LogLevel::Warn => web_sys::console::warn_1(&value),
            _ => web_sys::console::log_1(&value),
        }
    }
}
