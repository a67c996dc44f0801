#![warn(missing_debug_implementations)]
//! Sudoku form, web binding
//!
//! ## Overview
//! ------------
//! Binds [`sudoku_form::FormController`] to the server-rendered generator page using `web-sys`:
//! - the form, its submit button and the difficulty radios are looked up once, when the document is ready
//! - `submit`, `change` and `pageshow` listeners feed the controller
//! - the deferred restore runs on `setTimeout` through [`GlooScheduler`]
//!
//! The page does all of the actual submitting. Nothing here prevents the default action of an event.
//!
//! ```rust, ignore
//! // from a wasm entry point
//! sudoku_form_web::launch()?;
//! ```
//!
//! A missing element is a startup fault. It is logged and, when launched through [`start`], thrown back to
//! the page as a JS error rather than leaving the form silently without feedback.

use std::{rc::Rc, sync::Once};

use sudoku_form::FormController;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Document, Event, EventTarget, PageTransitionEvent};

mod cfg;
mod dom;
mod error;
mod timer;

pub use crate::cfg::WebConfig;
pub use crate::dom::{locate, LocatedForm, WebControl, WebHandles, WebRadio, WebSubmitButton};
pub use crate::error::{Error, Result};
pub use crate::timer::{GlooScheduler, GlooTask};

/// The controller as wired to a real page.
pub type WebFormController = FormController<WebSubmitButton, WebRadio, WebControl, GlooScheduler>;

/// Launch with the default configuration.
pub fn launch() -> Result<()> {
    launch_cfg(WebConfig::default())
}

/// Launch the controller, waiting for `DOMContentLoaded` if the document is still loading.
///
/// The listeners keep the controller alive for the rest of the page's life.
pub fn launch_cfg(cfg: WebConfig) -> Result<()> {
    if let Some(level) = cfg.log_level {
        init_logging(level);
    }

    let document = document()?;
    // `readyState` is a plain string: "loading", "interactive" or "complete"
    if document.ready_state() != "loading" {
        return attach(&document, &cfg).map(drop);
    }

    tracing::debug!("document still loading, deferring until DOMContentLoaded");
    let ready = Closure::once(move || {
        if let Err(err) = self::document().and_then(|document| attach(&document, &cfg)) {
            tracing::error!("failed to start the form controller: {err}");
            wasm_bindgen::throw_str(&err.to_string());
        }
    });

    document
        .add_event_listener_with_callback("DOMContentLoaded", ready.as_ref().unchecked_ref())
        .map_err(Error::js)?;
    ready.forget();

    Ok(())
}

/// Locate the elements, build the controller, register the listeners, and sync the selection display.
///
/// The document must already be parsed.
pub fn attach(document: &Document, cfg: &WebConfig) -> Result<Rc<WebFormController>> {
    let located = locate(document, cfg)?;
    let radios = located.radio_targets();
    let LocatedForm { form, handles } = located;

    let controller = Rc::new(FormController::new(
        handles,
        cfg.form.clone(),
        GlooScheduler,
    )?);

    let on_submit = controller.clone();
    listen(&form, "submit", move |_| on_submit.handle_submit())?;

    for (idx, radio) in radios.iter().enumerate() {
        let on_change = controller.clone();
        listen(radio, "change", move |_| on_change.handle_selection_change(idx))?;
    }

    let window = web_sys::window().ok_or(Error::NoWindow)?;
    let on_show = controller.clone();
    listen(&window, "pageshow", move |event| {
        let restored = event
            .dyn_ref::<PageTransitionEvent>()
            .is_some_and(PageTransitionEvent::persisted);
        if restored {
            tracing::debug!("page restored from the back/forward cache");
            on_show.handle_page_restored();
        }
    })?;

    controller.initialize_selection_display();
    tracing::info!(options = radios.len(), "form controller attached");

    Ok(controller)
}

/// The `#[wasm_bindgen(start)]` entry: launch with the default configuration, throwing on a startup fault.
#[cfg(feature = "entry")]
#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    launch().map_err(|err| {
        tracing::error!("failed to start the form controller: {err}");
        err.into()
    })
}

/// Route `tracing` output to the browser console. Only the first call installs a subscriber.
pub fn init_logging(level: tracing::Level) {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_wasm::set_as_global_default_with_config(
            tracing_wasm::WASMLayerConfigBuilder::default()
                .set_max_level(level)
                .build(),
        );
    });
}

fn document() -> Result<Document> {
    web_sys::window()
        .ok_or(Error::NoWindow)?
        .document()
        .ok_or(Error::NoDocument)
}

/// Register `handler` for `event` on `target` for the rest of the page's life.
fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<()> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(Error::js)?;
    closure.forget();
    Ok(())
}
