//! `web-sys` implementations of the controller's element handles, and the lookup that finds them.

use sudoku_form::{require, FormHandles, RadioInput, SubmitButton, VisualControl};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlButtonElement, HtmlInputElement};

use crate::{Error, Result, WebConfig};

#[derive(Debug, Clone)]
pub struct WebSubmitButton(HtmlButtonElement);

impl WebSubmitButton {
    pub fn element(&self) -> &HtmlButtonElement {
        &self.0
    }
}

impl SubmitButton for WebSubmitButton {
    fn label(&self) -> String {
        self.0.inner_text()
    }

    fn set_label(&self, label: &str) {
        self.0.set_inner_text(label);
    }

    fn is_disabled(&self) -> bool {
        self.0.disabled()
    }

    fn set_disabled(&self, disabled: bool) {
        self.0.set_disabled(disabled);
    }
}

#[derive(Debug, Clone)]
pub struct WebRadio(HtmlInputElement);

impl WebRadio {
    pub fn element(&self) -> &HtmlInputElement {
        &self.0
    }
}

impl RadioInput for WebRadio {
    fn is_checked(&self) -> bool {
        self.0.checked()
    }

    fn value(&self) -> String {
        self.0.value()
    }
}

#[derive(Debug, Clone)]
pub struct WebControl(Element);

impl WebControl {
    pub fn element(&self) -> &Element {
        &self.0
    }
}

impl VisualControl for WebControl {
    fn add_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().add_1(class) {
            tracing::warn!("failed to add class {class:?}: {err:?}");
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().remove_1(class) {
            tracing::warn!("failed to remove class {class:?}: {err:?}");
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }
}

pub type WebHandles = FormHandles<WebSubmitButton, WebRadio, WebControl>;

/// The form element plus every handle the controller takes over.
#[derive(Debug)]
pub struct LocatedForm {
    pub form: Element,
    pub handles: WebHandles,
}

impl LocatedForm {
    /// Event targets of the radios, in document order.
    pub(crate) fn radio_targets(&self) -> Vec<EventTarget> {
        self.handles
            .options
            .iter()
            .map(|option| option.radio.element().clone().unchecked_into())
            .collect()
    }
}

/// Find the form, its submit button, and every option of the radio group.
///
/// Any element the page is expected to carry but doesn't is a startup fault.
pub fn locate(document: &Document, cfg: &WebConfig) -> Result<LocatedForm> {
    let form = query(document.query_selector(&cfg.form_selector), &cfg.form_selector)?;

    let submit = query(form.query_selector(&cfg.submit_selector), &cfg.submit_selector)?
        .dyn_into::<HtmlButtonElement>()
        .map_err(|_| Error::UnexpectedElement {
            selector: cfg.submit_selector.clone(),
            expected: "a <button>",
        })?;

    let mut handles = FormHandles::new(WebSubmitButton(submit));

    let radio_selector = cfg.radio_selector();
    let radios = document
        .query_selector_all(&radio_selector)
        .map_err(Error::js)?;

    for idx in 0..radios.length() {
        let Some(node) = radios.get(idx) else {
            continue;
        };

        let radio = node
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| Error::UnexpectedElement {
                selector: radio_selector.clone(),
                expected: "an <input>",
            })?;

        let container = require(
            radio.parent_element(),
            format!("parent of {radio_selector} #{idx}"),
        )?;
        let control = query(
            container.query_selector(&cfg.control_selector),
            &cfg.control_selector,
        )?;

        handles = handles.with_option(WebRadio(radio), WebControl(control));
    }

    tracing::debug!(
        options = handles.options.len(),
        "located generator form"
    );

    Ok(LocatedForm { form, handles })
}

fn query(
    found: std::result::Result<Option<Element>, wasm_bindgen::JsValue>,
    selector: &str,
) -> Result<Element> {
    Ok(require(found.map_err(Error::js)?, selector)?)
}
