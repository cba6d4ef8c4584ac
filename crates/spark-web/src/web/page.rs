//! Page wiring: find elements, build controllers, attach listeners.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{anyhow, Context};
use spark_form::{
    Diagnostics, FormConfig, HttpSubmitter, LogFormat, TabController, TabStrip, WaitlistForm,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlElement, HtmlInputElement};

use super::dom::{ConsoleSink, DomFormSurface, DomTabSurface, NavigatorConnectivity, TabBinding};

const FORM_ID: &str = "waitlist-form";
const EMAIL_ID: &str = "email";
const MESSAGE_ID: &str = "form-message";
const YEAR_ID: &str = "year";
const SUBMIT_SELECTOR: &str = ".btn-submit";
const TAB_TRIGGER_SELECTOR: &str = ".tab-btn";
const TAB_PANEL_PREFIX: &str = "tab-";

/// The controller the page runs, fixed to the live DOM adapters.
type PageForm = WaitlistForm<DomFormSurface, HttpSubmitter, NavigatorConnectivity>;

/// Wire every page behavior.
///
/// Optional sections (tabs, footer year, the form itself) are skipped when
/// their markup is absent. A form that is present but malformed is an
/// error.
pub fn mount(document: &Document) -> anyhow::Result<()> {
    let diagnostics = Diagnostics::new()
        .with_format(LogFormat::Human)
        .with_sink(Rc::new(ConsoleSink));

    set_year(document);
    wire_tabs(document, diagnostics.clone().with_component("tabs"))?;
    wire_waitlist(document, diagnostics.with_component("waitlist"))?;

    Ok(())
}

/// Write the current year into the footer.
fn set_year(document: &Document) {
    if let Some(element) = document.get_element_by_id(YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        element.set_text_content(Some(&year.to_string()));
    }
}

/// Resolve the tab strip and attach click handlers.
fn wire_tabs(document: &Document, diagnostics: Diagnostics) -> anyhow::Result<()> {
    let triggers = document
        .query_selector_all(TAB_TRIGGER_SELECTOR)
        .map_err(|_| anyhow!("invalid tab trigger selector"))?;

    let mut bindings = Vec::new();
    let mut initial = None;
    for index in 0..triggers.length() {
        let trigger: HtmlElement = match triggers
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        {
            Some(trigger) => trigger,
            None => continue,
        };
        let id = match trigger.dataset().get("tab") {
            Some(id) if !id.is_empty() => id,
            _ => continue,
        };
        let panel = match document
            .get_element_by_id(&format!("{}{}", TAB_PANEL_PREFIX, id))
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        {
            Some(panel) => panel,
            None => {
                diagnostics.warn(&format!("No panel for tab '{}'; trigger skipped", id));
                continue;
            }
        };
        if initial.is_none() && trigger.class_list().contains("active") {
            initial = Some(id.clone());
        }
        bindings.push(TabBinding { id, trigger, panel });
    }

    let ids: Vec<String> = bindings.iter().map(|binding| binding.id.clone()).collect();
    let strip = match TabStrip::new(ids) {
        Some(strip) => strip,
        None => return Ok(()),
    };
    let strip = match &initial {
        Some(id) => strip.with_active(id),
        None => strip,
    };

    let handles: Vec<(String, HtmlElement)> = bindings
        .iter()
        .map(|binding| (binding.id.clone(), binding.trigger.clone()))
        .collect();
    let controller = Rc::new(RefCell::new(TabController::new(
        strip,
        DomTabSurface::new(bindings),
    )));
    controller.borrow_mut().apply();

    for (id, trigger) in handles {
        let controller = Rc::clone(&controller);
        let on_click = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            controller.borrow_mut().activate(&id);
        }) as Box<dyn FnMut(web_sys::Event)>);
        trigger
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(|_| anyhow!("failed to attach tab listener"))?;
        on_click.forget();
    }

    Ok(())
}

/// Resolve the signup form elements and attach submit/input handlers.
fn wire_waitlist(document: &Document, diagnostics: Diagnostics) -> anyhow::Result<()> {
    let form = match document.get_element_by_id(FORM_ID) {
        Some(element) => element
            .dyn_into::<web_sys::HtmlFormElement>()
            .map_err(|_| anyhow!("#{} is not a form", FORM_ID))?,
        None => {
            diagnostics.info("Waitlist form not present; skipping");
            return Ok(());
        }
    };

    let email = document
        .get_element_by_id(EMAIL_ID)
        .with_context(|| format!("missing #{}", EMAIL_ID))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| anyhow!("#{} is not an input", EMAIL_ID))?;

    let submit = form
        .query_selector(SUBMIT_SELECTOR)
        .map_err(|_| anyhow!("invalid submit selector"))?
        .with_context(|| format!("missing {} in form", SUBMIT_SELECTOR))?
        .dyn_into::<HtmlButtonElement>()
        .map_err(|_| anyhow!("submit control is not a button"))?;

    let message = document
        .get_element_by_id(MESSAGE_ID)
        .with_context(|| format!("missing #{}", MESSAGE_ID))?;

    let email_handle = email.clone();
    let surface = DomFormSurface::new(form.clone(), email, submit, message);
    let controller: Rc<PageForm> = Rc::new(
        WaitlistForm::new(
            surface,
            HttpSubmitter::new(),
            NavigatorConnectivity,
            FormConfig::default(),
        )
        .with_diagnostics(diagnostics),
    );

    let on_submit = {
        let controller = Rc::clone(&controller);
        Closure::wrap(Box::new(move |event: web_sys::Event| {
            event.prevent_default();
            let controller = Rc::clone(&controller);
            wasm_bindgen_futures::spawn_local(async move {
                let _ = controller.submit().await;
            });
        }) as Box<dyn FnMut(web_sys::Event)>)
    };
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .map_err(|_| anyhow!("failed to attach submit listener"))?;
    on_submit.forget();

    let on_input = {
        let controller = Rc::clone(&controller);
        Closure::wrap(Box::new(move |_event: web_sys::Event| {
            controller.input_changed();
        }) as Box<dyn FnMut(web_sys::Event)>)
    };
    email_handle
        .add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())
        .map_err(|_| anyhow!("failed to attach input listener"))?;
    on_input.forget();

    Ok(())
}
