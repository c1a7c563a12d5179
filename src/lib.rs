mod config;
mod cursor;
mod dom;
mod hover_preview;
mod overlay;
mod page;
mod reveal;
mod smooth_scroll;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::page::PageController;

thread_local! {
    static PAGE: RefCell<Option<Rc<PageController>>> = RefCell::new(None);
}

fn with_page<F: FnOnce(&PageController)>(action: F) {
    let Some(page) = PAGE.with(|slot| slot.borrow().clone()) else {
        return;
    };
    action(&page);
}

#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    mount()
}

/// Wires every page behavior to the current document, once. Mounting waits
/// for the document to be parsed so every element list is complete.
fn mount() -> Result<(), JsValue> {
    if PAGE.with(|slot| slot.borrow().is_some()) {
        return Ok(());
    }
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let loading = dom::is_loading(&document);
    let target = document.clone();
    let pending = dom::when_parsed(&target, loading, move || {
        if PAGE.with(|slot| slot.borrow().is_some()) {
            return;
        }
        let page = PageController::mount(window, document);
        PAGE.with(|slot| {
            *slot.borrow_mut() = Some(page);
        });
    });
    if let Some(listener) = pending {
        gloo::console::log!("page: waiting for DOMContentLoaded");
        listener.forget();
    }
    Ok(())
}

#[wasm_bindgen(js_name = toggleSidebar)]
pub fn toggle_sidebar() {
    with_page(|page| page.toggle_sidebar());
}

#[wasm_bindgen(js_name = closeMobileMenu)]
pub fn close_mobile_menu() {
    with_page(|page| page.close_mobile_menu());
}

#[wasm_bindgen(js_name = filterPortfolio)]
pub fn filter_portfolio(category: &str) {
    with_page(|page| page.filter_portfolio(category));
}

#[wasm_bindgen(js_name = openLightbox)]
pub fn open_lightbox(element: Element) {
    with_page(|page| page.open_lightbox(&element));
}

#[wasm_bindgen(js_name = openVimeo)]
pub fn open_vimeo(url: &str) {
    with_page(|page| {
        page.open_vimeo(url);
    });
}

#[wasm_bindgen(js_name = scrollToTop)]
pub fn scroll_to_top() {
    with_page(|page| page.scroll_to_top());
}
