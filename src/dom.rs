use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlIFrameElement, Node, WheelEvent, Window};

use folio_core::{scrolls_vertically, DomMutation, PageConfig, Target, WheelContext};

pub(crate) const SIDEBAR_ID: &str = "sidebar";
pub(crate) const BACK_TO_TOP_ID: &str = "backToTop";
pub(crate) const LIGHTBOX_INNER_ID: &str = "lightboxInner";
pub(crate) const LIGHTBOX_MODAL_ID: &str = "lightboxModal";
pub(crate) const VIDEO_MODAL_ID: &str = "videoModal";
pub(crate) const VIDEO_FRAME_ID: &str = "videoFrame";
pub(crate) const CURSOR_ID: &str = "cursor";

pub(crate) const SECTION_SELECTOR: &str = "section";
pub(crate) const NAV_LINK_SELECTOR: &str = "#sidebar .nav-link";
pub(crate) const FILTER_BUTTON_SELECTOR: &str = ".filter-btn";
pub(crate) const PORTFOLIO_ITEM_SELECTOR: &str = ".portfolio-item";
pub(crate) const PORTFOLIO_BOX_SELECTOR: &str = ".portfolio-box";
pub(crate) const PREVIEW_BOX_SELECTOR: &str = ".portfolio-box[data-preview]";
pub(crate) const REVEAL_SELECTOR: &str = ".animate-on-scroll";
pub(crate) const SIDEBAR_TOGGLE_SELECTOR: &str = "[data-sidebar-toggle]";

pub(crate) const MODAL_OPEN_CLASS: &str = "modal-open";
pub(crate) const SCROLL_PREVENT_ATTR: &str = "data-lenis-prevent";

/// Elements the page behaviors read and write, collected once at mount.
pub(crate) struct PageElements {
    pub(crate) sidebar: Option<Element>,
    pub(crate) sidebar_toggles: Vec<Element>,
    pub(crate) sections: Vec<HtmlElement>,
    pub(crate) nav_links: Vec<Element>,
    pub(crate) filter_buttons: Vec<Element>,
    pub(crate) portfolio_items: Vec<Element>,
    pub(crate) portfolio_boxes: Vec<Element>,
    pub(crate) reveal: Vec<Element>,
    pub(crate) back_to_top: Option<Element>,
    pub(crate) back_to_top_anchor: Option<HtmlElement>,
    pub(crate) lightbox_inner: Option<Element>,
    pub(crate) lightbox_modal: Option<Element>,
    pub(crate) video_modal: Option<Element>,
    pub(crate) video_frame: Option<HtmlIFrameElement>,
    pub(crate) cursor: Option<HtmlElement>,
}

impl PageElements {
    pub(crate) fn query(document: &Document, config: &PageConfig) -> Self {
        Self {
            sidebar: document.get_element_by_id(SIDEBAR_ID),
            sidebar_toggles: query_all(document, SIDEBAR_TOGGLE_SELECTOR),
            sections: query_all(document, SECTION_SELECTOR),
            nav_links: query_all(document, NAV_LINK_SELECTOR),
            filter_buttons: query_all(document, FILTER_BUTTON_SELECTOR),
            portfolio_items: query_all(document, PORTFOLIO_ITEM_SELECTOR),
            portfolio_boxes: query_all(document, PORTFOLIO_BOX_SELECTOR),
            reveal: query_all(document, REVEAL_SELECTOR),
            back_to_top: document.get_element_by_id(BACK_TO_TOP_ID),
            back_to_top_anchor: by_id(document, &config.back_to_top_anchor),
            lightbox_inner: document.get_element_by_id(LIGHTBOX_INNER_ID),
            lightbox_modal: document.get_element_by_id(LIGHTBOX_MODAL_ID),
            video_modal: document.get_element_by_id(VIDEO_MODAL_ID),
            video_frame: by_id(document, VIDEO_FRAME_ID),
            cursor: by_id(document, CURSOR_ID),
        }
    }

    pub(crate) fn resolve(&self, target: Target) -> Option<&Element> {
        match target {
            Target::NavLink(index) => self.nav_links.get(index),
            Target::FilterButton(index) => self.filter_buttons.get(index),
            Target::PortfolioItem(index) => self.portfolio_items.get(index),
            Target::Revealed(index) => self.reveal.get(index),
            Target::BackToTop => self.back_to_top.as_ref(),
            Target::Sidebar => self.sidebar.as_ref(),
        }
    }

    /// Applies a batch in order. Deferred class additions are scheduled only
    /// after every synchronous write has been made, and their timers are
    /// returned so a later batch can cancel them by dropping.
    pub(crate) fn apply(&self, mutations: &[DomMutation]) -> Vec<Timeout> {
        let mut timers = Vec::new();
        for mutation in mutations.iter().filter(|mutation| !mutation.is_deferred()) {
            let Some(element) = self.resolve(mutation.target()) else {
                continue;
            };
            if let Err(err) = apply_one(element, mutation) {
                gloo::console::warn!("dom: mutation failed", err);
            }
        }
        for mutation in mutations.iter().filter(|mutation| mutation.is_deferred()) {
            let DomMutation::AddClassAfter {
                target,
                class,
                delay_ms,
            } = mutation
            else {
                continue;
            };
            let Some(element) = self.resolve(*target).cloned() else {
                continue;
            };
            let class = *class;
            timers.push(Timeout::new(*delay_ms, move || {
                let _ = element.class_list().add_1(class);
            }));
        }
        timers
    }
}

fn apply_one(element: &Element, mutation: &DomMutation) -> Result<(), JsValue> {
    match mutation {
        DomMutation::AddClass { class, .. } => element.class_list().add_1(class),
        DomMutation::RemoveClass { class, .. } => element.class_list().remove_1(class),
        DomMutation::ToggleClass { class, .. } => element.class_list().toggle(class).map(|_| ()),
        DomMutation::SetDisplay { display, .. } => {
            let Some(element) = element.dyn_ref::<HtmlElement>() else {
                return Ok(());
            };
            element.style().set_property("display", display.as_css())
        }
        DomMutation::AddClassAfter { .. } => Ok(()),
    }
}

pub(crate) fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub(crate) fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
}

pub(crate) fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

pub(crate) fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

pub(crate) fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Largest scroll offset the document allows.
pub(crate) fn scroll_limit(window: &Window, document: &Document) -> f64 {
    let height = document
        .document_element()
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0);
    (height - viewport_height(window)).max(0.0)
}

/// Inline `onclick` handlers call the exported functions themselves; a
/// listener on top of them would run the behavior twice.
pub(crate) fn has_inline_handler(element: &Element) -> bool {
    element.has_attribute("onclick")
}

/// Runs `ready` once the document has been parsed. While it is still
/// loading, the returned listener must be kept alive until it fires.
pub(crate) fn when_parsed<F>(document: &Document, loading: bool, ready: F) -> Option<EventListener>
where
    F: FnOnce() + 'static,
{
    if !loading {
        ready();
        return None;
    }
    Some(EventListener::once(document, "DOMContentLoaded", move |_event| {
        ready();
    }))
}

pub(crate) fn is_loading(document: &Document) -> bool {
    document.ready_state() == "loading"
}

/// Collects what the inertia driver needs to know about a wheel event: the
/// zoom modifier, an open modal, and whether the target or any ancestor up
/// to `body` opts out or scrolls on its own.
pub(crate) fn wheel_context(window: &Window, document: &Document, event: &WheelEvent) -> WheelContext {
    let mut context = WheelContext {
        ctrl_key: event.ctrl_key(),
        modal_open: document
            .body()
            .is_some_and(|body| body.class_list().contains(MODAL_OPEN_CLASS)),
        ..WheelContext::default()
    };
    let body = document.body();
    let root = document.document_element();
    let mut current = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok());
    while let Some(element) = current {
        let node: &Node = &element;
        if body.as_ref().is_some_and(|body| body.is_same_node(Some(node)))
            || root.as_ref().is_some_and(|root| root.is_same_node(Some(node)))
        {
            break;
        }
        if element.has_attribute(SCROLL_PREVENT_ATTR) {
            context.opted_out = true;
            break;
        }
        if element_scrolls_vertically(window, &element) {
            context.inside_scrollable = true;
            break;
        }
        current = element.parent_element();
    }
    context
}

fn element_scrolls_vertically(window: &Window, element: &Element) -> bool {
    let scroll_height = element.scroll_height() as f64;
    let client_height = element.client_height() as f64;
    if scroll_height <= client_height {
        return false;
    }
    let Ok(Some(style)) = window.get_computed_style(element) else {
        return false;
    };
    let overflow_y = style.get_property_value("overflow-y").unwrap_or_default();
    scrolls_vertically(&overflow_y, scroll_height, client_height)
}
