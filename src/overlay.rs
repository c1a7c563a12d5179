//! Bridge to the page's modal primitive (`bootstrap.Modal`).

use gloo::events::EventListener;
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, Window};

pub(crate) const DISMISS_EVENT: &str = "hidden.bs.modal";
const FALLBACK_SHOW_CLASS: &str = "show";

fn modal_constructor(window: &Window) -> Option<Function> {
    let bootstrap = Reflect::get(window, &JsValue::from_str("bootstrap")).ok()?;
    if bootstrap.is_null() || bootstrap.is_undefined() {
        return None;
    }
    Reflect::get(&bootstrap, &JsValue::from_str("Modal"))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn modal_instance(ctor: &Function, element: &Element) -> Result<JsValue, JsValue> {
    let get_or_create = Reflect::get(ctor, &JsValue::from_str("getOrCreateInstance"))?;
    if let Some(get_or_create) = get_or_create.dyn_ref::<Function>() {
        return get_or_create.call1(ctor, element);
    }
    let args = js_sys::Array::of1(element);
    Reflect::construct(ctor, &args)
}

fn call_method(target: &JsValue, method: &str) -> Result<(), JsValue> {
    let func = Reflect::get(target, &JsValue::from_str(method))?.dyn_into::<Function>()?;
    func.call0(target).map(|_| ())
}

/// Shows `element` as a modal. Without bootstrap on the page the element
/// only gets its `show` class and is made visible.
pub(crate) fn show(window: &Window, element: &Element) {
    if let Some(ctor) = modal_constructor(window) {
        let shown = modal_instance(&ctor, element).and_then(|modal| call_method(&modal, "show"));
        match shown {
            Ok(()) => return,
            Err(err) => gloo::console::warn!("overlay: bootstrap modal failed", err),
        }
    }
    let _ = element.class_list().add_1(FALLBACK_SHOW_CLASS);
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property("display", "block");
    }
}

pub(crate) fn on_dismiss<F>(element: &Element, callback: F) -> EventListener
where
    F: Fn() + 'static,
{
    EventListener::new(element, DISMISS_EVENT, move |_event| callback())
}
