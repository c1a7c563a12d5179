use std::cell::RefCell;

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, ScrollBehavior, ScrollToOptions, Window};

use folio_core::{InertiaScroll, PageConfig};

use crate::dom;

/// `WheelEvent.DOM_DELTA_LINE`
const DELTA_LINE: u32 = 1;
const LINE_HEIGHT_PX: f64 = 16.0;

/// A page-global `Lenis` instance created from the constructor the page
/// loaded.
pub(crate) struct LenisBridge {
    instance: JsValue,
    raf: Function,
    scroll_to: Function,
}

impl LenisBridge {
    fn detect(window: &Window) -> Option<Result<Self, JsValue>> {
        let ctor = Reflect::get(window, &JsValue::from_str("Lenis")).ok()?;
        let ctor = ctor.dyn_into::<Function>().ok()?;
        Some(Self::construct(&ctor))
    }

    fn construct(ctor: &Function) -> Result<Self, JsValue> {
        let instance = Reflect::construct(ctor, &js_sys::Array::new())?;
        let raf = Reflect::get(&instance, &JsValue::from_str("raf"))?.dyn_into::<Function>()?;
        let scroll_to =
            Reflect::get(&instance, &JsValue::from_str("scrollTo"))?.dyn_into::<Function>()?;
        Ok(Self {
            instance,
            raf,
            scroll_to,
        })
    }
}

pub(crate) enum ScrollDriver {
    Lenis(LenisBridge),
    Inertia(RefCell<InertiaScroll>),
}

impl ScrollDriver {
    /// Prefers a `Lenis` constructor on the page and falls back to the
    /// built-in inertia model. `None` when smooth scrolling is disabled.
    pub(crate) fn detect(window: &Window, config: &PageConfig) -> Option<Self> {
        if !config.smooth_scroll {
            return None;
        }
        match LenisBridge::detect(window) {
            Some(Ok(lenis)) => return Some(Self::Lenis(lenis)),
            Some(Err(err)) => gloo::console::warn!("smooth scroll: lenis init failed", err),
            None => {}
        }
        Some(Self::Inertia(RefCell::new(InertiaScroll::new(
            config.inertia_lerp,
        ))))
    }

    pub(crate) fn wants_wheel(&self) -> bool {
        matches!(self, Self::Inertia(_))
    }

    pub(crate) fn raf(&self, window: &Window, time: f64) {
        match self {
            Self::Lenis(lenis) => {
                let _ = lenis.raf.call1(&lenis.instance, &JsValue::from_f64(time));
            }
            Self::Inertia(scroll) => {
                let next = scroll.borrow_mut().raf();
                if let Some(offset) = next {
                    jump_to(window, offset);
                }
            }
        }
    }

    pub(crate) fn scroll_to(&self, window: &Window, document: &Document, offset: f64) {
        match self {
            Self::Lenis(lenis) => {
                let _ = lenis
                    .scroll_to
                    .call1(&lenis.instance, &JsValue::from_f64(offset));
            }
            Self::Inertia(scroll) => {
                let mut scroll = scroll.borrow_mut();
                scroll.sync_native(dom::scroll_y(window));
                scroll.set_limit(dom::scroll_limit(window, document));
                scroll.scroll_to(offset);
            }
        }
    }

    pub(crate) fn on_wheel(&self, window: &Window, document: &Document, delta_y: f64, mode: u32) {
        let Self::Inertia(scroll) = self else {
            return;
        };
        let delta = if mode == DELTA_LINE {
            delta_y * LINE_HEIGHT_PX
        } else {
            delta_y
        };
        let mut scroll = scroll.borrow_mut();
        scroll.sync_native(dom::scroll_y(window));
        scroll.set_limit(dom::scroll_limit(window, document));
        scroll.on_wheel(delta);
    }

    /// Keeps the inertia model aligned with scrolls it did not drive.
    pub(crate) fn on_native_scroll(&self, offset: f64) {
        if let Self::Inertia(scroll) = self {
            scroll.borrow_mut().sync_native(offset);
        }
    }
}

fn jump_to(window: &Window, offset: f64) {
    let options = ScrollToOptions::new();
    options.set_top(offset);
    options.set_behavior(ScrollBehavior::Instant);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Animated scroll to the top through the driver when there is one,
/// otherwise through the browser's native smooth scrolling.
pub(crate) fn scroll_to_top(window: &Window, document: &Document, driver: Option<&ScrollDriver>) {
    if let Some(driver) = driver {
        driver.scroll_to(window, document, 0.0);
        return;
    }
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
