use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlImageElement, MouseEvent, ScrollRestoration, WheelEvent, Window,
};

use folio_core::{
    active_category, build_slides, filter_portfolio, render_slides, sidebar, DomMutation,
    FilterControl, LightboxSource, PageConfig, PortfolioItemSnapshot, ScrollSnapshot,
    ScrollStateSynchronizer, SectionGeometry, VimeoId,
};

use crate::config;
use crate::cursor::CursorView;
use crate::dom::{self, PageElements};
use crate::hover_preview::HoverPreview;
use crate::overlay;
use crate::reveal::RevealObserver;
use crate::smooth_scroll::{self, ScrollDriver};

pub(crate) const VIMEO_ATTR: &str = "data-vimeo";
pub(crate) const FULL_IMAGE_ATTR: &str = "data-full";
pub(crate) const FILTER_ATTR: &str = "data-filter";

/// Owns every piece of page state and every handle keeping a listener,
/// timer, frame or observer alive. Created once per page.
pub(crate) struct PageController {
    config: PageConfig,
    window: Window,
    document: Document,
    elements: PageElements,
    sync: RefCell<ScrollStateSynchronizer>,
    driver: Option<ScrollDriver>,
    cursor: Option<CursorView>,
    previews: RefCell<Vec<Rc<HoverPreview>>>,
    reveal: RefCell<Option<RevealObserver>>,
    fade_timers: RefCell<Vec<Timeout>>,
    frame: RefCell<Option<AnimationFrame>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl PageController {
    pub(crate) fn mount(window: Window, document: Document) -> Rc<Self> {
        let config = config::load_page_config(&document);
        Self::mount_with(window, document, config)
    }

    /// Expects a parsed document: the element lists are captured here and
    /// never refreshed.
    pub(crate) fn mount_with(window: Window, document: Document, config: PageConfig) -> Rc<Self> {
        let elements = PageElements::query(&document, &config);
        let driver = ScrollDriver::detect(&window, &config);
        let cursor = elements
            .cursor
            .clone()
            .map(|element| CursorView::new(element, config.cursor_ease));
        let page = Rc::new(Self {
            config,
            window,
            document,
            elements,
            sync: RefCell::new(ScrollStateSynchronizer::new()),
            driver,
            cursor,
            previews: RefCell::new(Vec::new()),
            reveal: RefCell::new(None),
            fade_timers: RefCell::new(Vec::new()),
            frame: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });
        page.disable_scroll_restoration();
        page.install_listeners();
        page.on_content_loaded();
        page.on_scroll();
        if page.driver.is_some() || page.cursor.is_some() {
            page.request_frame();
        }
        gloo::console::log!(
            "page: mounted",
            page.elements.sections.len() as u32,
            page.elements.portfolio_items.len() as u32,
            JsValue::from_bool(page.driver.is_some())
        );
        page
    }

    #[cfg(test)]
    pub(crate) fn config(&self) -> &PageConfig {
        &self.config
    }

    fn disable_scroll_restoration(&self) {
        if let Ok(history) = self.window.history() {
            let _ = history.set_scroll_restoration(ScrollRestoration::Manual);
        }
    }

    fn on_content_loaded(self: &Rc<Self>) {
        if self.config.fetch_vimeo_thumbnails {
            self.apply_vimeo_thumbnails();
        }
        let category = self.config.default_category.clone();
        self.filter_portfolio(&category);
        self.install_previews();
        self.install_reveal();
    }

    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::new();

        let page = Rc::clone(self);
        listeners.push(EventListener::new(&self.window, "scroll", move |_event| {
            page.on_scroll();
        }));

        let page = Rc::clone(self);
        listeners.push(EventListener::new(&self.window, "load", move |_event| {
            page.window.scroll_to_with_x_and_y(0.0, 0.0);
        }));

        if self.driver.as_ref().is_some_and(ScrollDriver::wants_wheel) {
            let page = Rc::clone(self);
            listeners.push(EventListener::new_with_options(
                &self.window,
                "wheel",
                EventListenerOptions {
                    phase: EventListenerPhase::Bubble,
                    passive: false,
                },
                move |event: &Event| {
                    let Some(event) = event.dyn_ref::<WheelEvent>() else {
                        return;
                    };
                    if !dom::wheel_context(&page.window, &page.document, event).should_intercept() {
                        return;
                    }
                    let Some(driver) = page.driver.as_ref() else {
                        return;
                    };
                    event.prevent_default();
                    driver.on_wheel(&page.window, &page.document, event.delta_y(), event.delta_mode());
                },
            ));
        }

        if self.cursor.is_some() {
            let page = Rc::clone(self);
            listeners.push(EventListener::new(&self.window, "mousemove", move |event: &Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                if let Some(cursor) = page.cursor.as_ref() {
                    cursor.on_pointer_move(event.client_x() as f64, event.client_y() as f64);
                }
            }));
        }

        for toggle in &self.elements.sidebar_toggles {
            if dom::has_inline_handler(toggle) {
                continue;
            }
            let page = Rc::clone(self);
            listeners.push(EventListener::new(toggle, "click", move |_event| {
                page.toggle_sidebar();
            }));
        }

        for link in &self.elements.nav_links {
            if dom::has_inline_handler(link) {
                continue;
            }
            let page = Rc::clone(self);
            listeners.push(EventListener::new(link, "click", move |_event| {
                page.close_mobile_menu();
            }));
        }

        for button in &self.elements.filter_buttons {
            if dom::has_inline_handler(button) {
                continue;
            }
            let Some(category) = button.get_attribute(FILTER_ATTR) else {
                continue;
            };
            let page = Rc::clone(self);
            listeners.push(EventListener::new(button, "click", move |_event| {
                page.filter_portfolio(&category);
            }));
        }

        for portfolio_box in &self.elements.portfolio_boxes {
            if dom::has_inline_handler(portfolio_box) {
                continue;
            }
            let page = Rc::clone(self);
            let clicked = portfolio_box.clone();
            listeners.push(EventListener::new(portfolio_box, "click", move |_event| {
                match clicked.get_attribute(VIMEO_ATTR) {
                    Some(url) => {
                        page.open_vimeo(&url);
                    }
                    None => page.open_lightbox(&clicked),
                }
            }));
        }

        if let Some(back_to_top) = self.elements.back_to_top.as_ref() {
            if !dom::has_inline_handler(back_to_top) {
                let page = Rc::clone(self);
                listeners.push(EventListener::new(back_to_top, "click", move |_event| {
                    page.scroll_to_top();
                }));
            }
        }

        if let (Some(modal), Some(frame)) = (
            self.elements.video_modal.as_ref(),
            self.elements.video_frame.clone(),
        ) {
            listeners.push(overlay::on_dismiss(modal, move || {
                frame.set_src("");
            }));
        }

        self.listeners.borrow_mut().extend(listeners);
    }

    fn install_previews(&self) {
        let boxes: Vec<Element> = dom::query_all(&self.document, dom::PREVIEW_BOX_SELECTOR);
        let mut previews = self.previews.borrow_mut();
        let mut listeners = self.listeners.borrow_mut();
        for container in boxes {
            let Some(preview) = HoverPreview::new(self.document.clone(), container) else {
                continue;
            };
            listeners.extend(preview.install());
            previews.push(preview);
        }
    }

    fn install_reveal(&self) {
        let elements = self.elements.reveal.clone();
        if elements.is_empty() {
            return;
        }
        match RevealObserver::install(elements, self.config.reveal_threshold) {
            Ok(observer) => *self.reveal.borrow_mut() = Some(observer),
            Err(err) => {
                gloo::console::warn!("reveal: observer unavailable, showing all", err);
                RevealObserver::reveal_all(&self.elements.reveal);
            }
        }
    }

    fn apply(&self, mutations: &[DomMutation]) -> Vec<Timeout> {
        self.elements.apply(mutations)
    }

    pub(crate) fn scroll_snapshot(&self) -> ScrollSnapshot {
        let sections = self
            .elements
            .sections
            .iter()
            .map(|section| {
                SectionGeometry::new(
                    section.id(),
                    section.offset_top() as f64,
                    section.client_height() as f64,
                )
            })
            .collect();
        let nav_hrefs = self
            .elements
            .nav_links
            .iter()
            .map(|link| link.get_attribute("href").unwrap_or_default())
            .collect();
        let back_to_top_anchor = match (
            self.elements.back_to_top.as_ref(),
            self.elements.back_to_top_anchor.as_ref(),
        ) {
            (Some(_), Some(anchor)) => Some(anchor.offset_top() as f64),
            _ => None,
        };
        ScrollSnapshot {
            scroll_y: dom::scroll_y(&self.window),
            viewport_height: dom::viewport_height(&self.window),
            sections,
            nav_hrefs,
            back_to_top_anchor,
        }
    }

    pub(crate) fn apply_scroll_snapshot(&self, snapshot: &ScrollSnapshot) {
        let mutations = self.sync.borrow_mut().on_scroll(snapshot);
        self.apply(&mutations);
    }

    fn on_scroll(&self) {
        let snapshot = self.scroll_snapshot();
        if let Some(driver) = self.driver.as_ref() {
            driver.on_native_scroll(snapshot.scroll_y);
        }
        self.apply_scroll_snapshot(&snapshot);
    }

    #[cfg(test)]
    pub(crate) fn current_section(&self) -> Option<String> {
        self.sync.borrow().current().map(str::to_string)
    }

    pub(crate) fn toggle_sidebar(&self) {
        self.apply(&[sidebar::toggle_sidebar()]);
    }

    pub(crate) fn close_mobile_menu(&self) {
        let width = dom::viewport_width(&self.window);
        if let Some(mutation) = sidebar::close_mobile_menu(width, self.config.mobile_breakpoint_px) {
            self.apply(&[mutation]);
        }
    }

    fn filter_controls(&self) -> Vec<FilterControl> {
        self.elements
            .filter_buttons
            .iter()
            .map(|button| {
                FilterControl::from_attributes(
                    button.get_attribute(FILTER_ATTR).as_deref(),
                    button.get_attribute("onclick").as_deref(),
                    button.class_list().contains(folio_core::filter::ACTIVE_CLASS),
                )
            })
            .collect()
    }

    fn portfolio_snapshot(&self) -> Vec<PortfolioItemSnapshot> {
        self.elements
            .portfolio_items
            .iter()
            .map(|item| PortfolioItemSnapshot::from_class_list(&item.class_name()))
            .collect()
    }

    pub(crate) fn filter_portfolio(&self, category: &str) {
        let mutations = filter_portfolio(
            category,
            &self.filter_controls(),
            &self.portfolio_snapshot(),
            self.config.fade_in_delay_ms,
        );
        // Dropping the previous batch's timers cancels fades for items the
        // new category hides.
        let timers = self.apply(&mutations);
        *self.fade_timers.borrow_mut() = timers;
    }

    pub(crate) fn open_lightbox(&self, clicked: &Element) {
        let Some(inner) = self.elements.lightbox_inner.as_ref() else {
            return;
        };
        let controls = self.filter_controls();
        let category = active_category(&controls, &self.config.default_category);
        let sources: Vec<LightboxSource> = self
            .elements
            .portfolio_items
            .iter()
            .zip(self.portfolio_snapshot())
            .filter(|(_, snapshot)| snapshot.has_category(category))
            .filter_map(|(item, _)| item.query_selector(dom::PORTFOLIO_BOX_SELECTOR).ok().flatten())
            .map(|portfolio_box| lightbox_source(&portfolio_box, clicked))
            .collect();
        inner.set_inner_html(&render_slides(&build_slides(&sources)));
        if let Some(modal) = self.elements.lightbox_modal.as_ref() {
            overlay::show(&self.window, modal);
        }
    }

    /// Unparseable links and a missing player frame are silent no-ops.
    pub(crate) fn open_vimeo(&self, url: &str) -> Option<String> {
        let embed = VimeoId::from_player_link(url).ok()?.embed_url();
        let frame = self.elements.video_frame.as_ref()?;
        frame.set_src(&embed);
        if let Some(modal) = self.elements.video_modal.as_ref() {
            overlay::show(&self.window, modal);
        }
        Some(embed)
    }

    fn apply_vimeo_thumbnails(&self) {
        for portfolio_box in &self.elements.portfolio_boxes {
            let reference = portfolio_box
                .get_attribute(VIMEO_ATTR)
                .or_else(|| portfolio_box.get_attribute("onclick"));
            let Some(id) = reference.and_then(|raw| VimeoId::from_reference(&raw).ok()) else {
                continue;
            };
            let image = portfolio_box
                .query_selector("img")
                .ok()
                .flatten()
                .and_then(|image| image.dyn_into::<HtmlImageElement>().ok());
            if let Some(image) = image {
                image.set_src(&id.thumbnail_url());
            }
        }
    }

    pub(crate) fn scroll_to_top(&self) {
        smooth_scroll::scroll_to_top(&self.window, &self.document, self.driver.as_ref());
    }

    fn request_frame(self: &Rc<Self>) {
        let page = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| {
            page.on_frame(timestamp);
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn on_frame(self: &Rc<Self>, timestamp: f64) {
        self.frame.borrow_mut().take();
        if let Some(driver) = self.driver.as_ref() {
            driver.raf(&self.window, timestamp);
        }
        if let Some(cursor) = self.cursor.as_ref() {
            cursor.frame();
        }
        self.request_frame();
    }

    #[cfg(test)]
    pub(crate) fn pointer(&self) -> Option<(f64, f64)> {
        self.cursor.as_ref().and_then(CursorView::pointer)
    }
}

fn lightbox_source(portfolio_box: &Element, clicked: &Element) -> LightboxSource {
    let thumbnail = portfolio_box
        .query_selector("img")
        .ok()
        .flatten()
        .and_then(|image| image.dyn_into::<HtmlImageElement>().ok())
        .map(|image| image.src());
    LightboxSource {
        full: portfolio_box.get_attribute(FULL_IMAGE_ATTR),
        thumbnail,
        is_clicked: portfolio_box == clicked,
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    const FIXTURE: &str = r##"
        <nav id="sidebar" class="active">
            <a class="nav-link" href="#home">Home</a>
            <a class="nav-link" href="#skills">Skills</a>
            <a class="nav-link" href="#portfolio">Portfolio</a>
        </nav>
        <section id="home" style="height: 600px"></section>
        <section id="skills" style="height: 600px"></section>
        <section id="portfolio" style="height: 900px">
            <button class="filter-btn" data-filter="animation">Animation</button>
            <button class="filter-btn" onclick="filterPortfolio('design')">Design</button>
            <div class="portfolio-item animation">
                <div class="portfolio-box" data-full="full-0.jpg"><img src="thumb-0.jpg"></div>
            </div>
            <div class="portfolio-item design">
                <div class="portfolio-box"><img src="thumb-1.jpg"></div>
            </div>
            <div class="portfolio-item animation">
                <div class="portfolio-box" data-preview="preview.mp4"><img src="thumb-2.jpg"></div>
            </div>
            <div class="portfolio-item animation">
                <div class="portfolio-box" onclick="openVimeo('https://vimeo.com/42')"><img src="thumb-3.jpg"></div>
            </div>
        </section>
        <button id="backToTop"></button>
        <div id="lightboxModal"><div id="lightboxInner"></div></div>
        <div id="videoModal"><iframe id="videoFrame"></iframe></div>
        <div class="animate-on-scroll" style="position: fixed; top: 0; left: 0; width: 40px; height: 40px"></div>
    "##;

    struct Fixture {
        root: Element,
        page: Rc<PageController>,
    }

    impl Fixture {
        fn mount() -> Self {
            Self::mount_with(quiet_config())
        }

        fn mount_with(config: PageConfig) -> Self {
            Self::mount_markup(FIXTURE, config)
        }

        fn mount_markup(markup: &str, config: PageConfig) -> Self {
            let window = web_sys::window().expect("window");
            let document = window.document().expect("document");
            let root = attach(&document, markup);
            let page = PageController::mount_with(window, document, config);
            Self { root, page }
        }

        fn items(&self) -> &[Element] {
            &self.page.elements.portfolio_items
        }
    }

    impl Drop for Fixture {
        fn drop(&mut self) {
            self.root.remove();
        }
    }

    fn attach(document: &Document, markup: &str) -> Element {
        let root = document.create_element("div").expect("root");
        root.set_inner_html(markup);
        document.body().expect("body").append_child(&root).expect("append");
        root
    }

    fn quiet_config() -> PageConfig {
        PageConfig {
            smooth_scroll: false,
            reveal_threshold: 0.0,
            ..PageConfig::default()
        }
    }

    fn display(element: &Element) -> String {
        element
            .dyn_ref::<HtmlElement>()
            .and_then(|element| element.style().get_property_value("display").ok())
            .unwrap_or_default()
    }

    fn has_class(element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn dispatch(element: &Element, kind: &str) {
        let event = Event::new(kind).expect("event");
        element.dispatch_event(&event).expect("dispatch");
    }

    /// Dispatches a cancelable wheel event and reports whether a listener
    /// cancelled it.
    fn wheel_prevented(target: &Element) -> bool {
        let init = web_sys::WheelEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        init.set_delta_y(0.0);
        let event = WheelEvent::new_with_event_init_dict("wheel", &init).expect("wheel event");
        let delivered = target.dispatch_event(&event).expect("dispatch");
        assert_eq!(delivered, !event.default_prevented());
        event.default_prevented()
    }

    #[wasm_bindgen_test]
    async fn default_category_fades_in_after_display() {
        let fixture = Fixture::mount();
        assert_eq!(fixture.page.config().default_category, "animation");
        let displays: Vec<String> = fixture.items().iter().map(display).collect();
        assert_eq!(displays, vec!["block", "none", "block", "block"]);
        assert!(!has_class(&fixture.items()[0], "visible-item"));

        TimeoutFuture::new(40).await;
        assert!(has_class(&fixture.items()[0], "visible-item"));
        assert!(!has_class(&fixture.items()[1], "visible-item"));

        fixture.page.filter_portfolio("design");
        assert!(!has_class(&fixture.items()[0], "visible-item"));
        assert_eq!(display(&fixture.items()[0]), "none");
        assert_eq!(display(&fixture.items()[1]), "block");
        let buttons = &fixture.page.elements.filter_buttons;
        assert!(!has_class(&buttons[0], "active"));
        assert!(has_class(&buttons[1], "active"));
    }

    #[wasm_bindgen_test]
    async fn quick_refilter_cancels_pending_fades() {
        let fixture = Fixture::mount();
        fixture.page.filter_portfolio("design");
        TimeoutFuture::new(40).await;
        assert!(!has_class(&fixture.items()[0], "visible-item"));
        assert!(has_class(&fixture.items()[1], "visible-item"));
    }

    #[wasm_bindgen_test]
    fn nav_highlight_follows_scroll_snapshot() {
        let fixture = Fixture::mount();
        let mut snapshot = fixture.page.scroll_snapshot();
        assert_eq!(snapshot.sections.len(), 3);
        snapshot.scroll_y = snapshot.sections[1].trigger_offset();
        fixture.page.apply_scroll_snapshot(&snapshot);
        assert_eq!(fixture.page.current_section().as_deref(), Some("skills"));
        let links = &fixture.page.elements.nav_links;
        let active: Vec<bool> = links.iter().map(|link| has_class(link, "active")).collect();
        assert_eq!(active, vec![false, true, false]);
    }

    #[wasm_bindgen_test]
    fn back_to_top_shows_at_boundary() {
        let fixture = Fixture::mount();
        let mut snapshot = fixture.page.scroll_snapshot();
        let anchor = snapshot.back_to_top_anchor.expect("anchor present");
        snapshot.scroll_y = anchor - snapshot.viewport_height / 2.0;
        fixture.page.apply_scroll_snapshot(&snapshot);
        let button = fixture.page.elements.back_to_top.clone().expect("button");
        assert!(has_class(&button, "show"));
        snapshot.scroll_y -= 1.0;
        fixture.page.apply_scroll_snapshot(&snapshot);
        assert!(!has_class(&button, "show"));
    }

    #[wasm_bindgen_test]
    fn lightbox_rebuilds_slides_for_active_category() {
        let fixture = Fixture::mount();
        let boxes = &fixture.page.elements.portfolio_boxes;
        fixture.page.open_lightbox(&boxes[2]);
        fixture.page.open_lightbox(&boxes[0]);
        let inner = fixture.page.elements.lightbox_inner.clone().expect("inner");
        let slides = inner.query_selector_all(".carousel-item").expect("slides");
        assert_eq!(slides.length(), 3);
        let active = inner
            .query_selector(".carousel-item.active img")
            .expect("query")
            .expect("active slide");
        assert_eq!(active.get_attribute("src").as_deref(), Some("full-0.jpg"));
        let modal = fixture.page.elements.lightbox_modal.clone().expect("modal");
        assert!(has_class(&modal, "show"));
    }

    #[wasm_bindgen_test]
    fn vimeo_modal_launches_and_clears_on_dismiss() {
        let fixture = Fixture::mount();
        assert_eq!(fixture.page.open_vimeo("not-a-url"), None);
        let frame = fixture.page.elements.video_frame.clone().expect("frame");
        assert_eq!(frame.get_attribute("src"), None);

        let embed = fixture.page.open_vimeo("https://vimeo.com/123456789");
        assert_eq!(
            embed.as_deref(),
            Some("https://player.vimeo.com/video/123456789?autoplay=1")
        );
        assert_eq!(frame.get_attribute("src"), embed);

        let modal = fixture.page.elements.video_modal.clone().expect("modal");
        dispatch(&modal, overlay::DISMISS_EVENT);
        assert_eq!(frame.get_attribute("src").as_deref(), Some(""));
    }

    #[wasm_bindgen_test]
    fn vimeo_boxes_get_remote_thumbnails() {
        let fixture = Fixture::mount();
        let image = fixture.page.elements.portfolio_boxes[3]
            .query_selector("img")
            .expect("query")
            .expect("img");
        assert_eq!(
            image.get_attribute("src").as_deref(),
            Some("https://vumbnail.com/42_large.jpg")
        );
    }

    #[wasm_bindgen_test]
    fn sidebar_toggles_and_stays_open_on_desktop() {
        let fixture = Fixture::mount_with(PageConfig {
            smooth_scroll: false,
            mobile_breakpoint_px: 0.0,
            ..PageConfig::default()
        });
        let sidebar = fixture.page.elements.sidebar.clone().expect("sidebar");
        fixture.page.close_mobile_menu();
        assert!(has_class(&sidebar, "active"));
        fixture.page.toggle_sidebar();
        assert!(!has_class(&sidebar, "active"));
        fixture.page.toggle_sidebar();
        assert!(has_class(&sidebar, "active"));
    }

    #[wasm_bindgen_test]
    fn mobile_menu_closes_below_breakpoint() {
        let fixture = Fixture::mount_with(PageConfig {
            smooth_scroll: false,
            mobile_breakpoint_px: 1.0e6,
            ..PageConfig::default()
        });
        let sidebar = fixture.page.elements.sidebar.clone().expect("sidebar");
        fixture.page.close_mobile_menu();
        assert!(!has_class(&sidebar, "active"));
    }

    #[wasm_bindgen_test]
    fn hover_preview_is_created_once_and_paused() {
        let fixture = Fixture::mount();
        let container = fixture.page.elements.portfolio_boxes[2].clone();
        dispatch(&container, "mouseenter");
        let preview = fixture.page.previews.borrow()[0].clone();
        let video = preview.video().expect("video created");
        assert!(video.muted());
        assert!(video.loop_());
        assert!(video.has_attribute("playsinline"));
        assert!(has_class(&video, "hover-video"));

        dispatch(&container, "mouseleave");
        assert!(video.paused());
        dispatch(&container, "mouseenter");
        let videos = container.query_selector_all("video").expect("videos");
        assert_eq!(videos.length(), 1);
    }

    #[wasm_bindgen_test]
    async fn reveal_triggers_once_for_visible_element() {
        let fixture = Fixture::mount();
        TimeoutFuture::new(100).await;
        let element = fixture.page.elements.reveal[0].clone();
        assert!(has_class(&element, "is-visible"));
        let count = fixture
            .page
            .reveal
            .borrow()
            .as_ref()
            .map(|observer| observer.triggered_count());
        assert_eq!(count, Some(1));
    }

    #[wasm_bindgen_test]
    fn mount_waits_until_document_is_parsed() {
        let window = web_sys::window().expect("window");
        let document = window.document().expect("document");
        let mounted: Rc<RefCell<Option<Rc<PageController>>>> = Rc::default();

        let slot = Rc::clone(&mounted);
        let (ready_window, ready_document) = (window.clone(), document.clone());
        let pending = dom::when_parsed(&document, true, move || {
            let page = PageController::mount_with(ready_window, ready_document, quiet_config());
            *slot.borrow_mut() = Some(page);
        })
        .expect("deferred while loading");
        assert!(mounted.borrow().is_none());

        // The rest of the document arrives before parsing finishes.
        let root = attach(&document, FIXTURE);
        let event = Event::new("DOMContentLoaded").expect("event");
        document.dispatch_event(&event).expect("dispatch");
        let page = mounted.borrow().clone().expect("mounted once parsed");
        assert_eq!(page.elements.sections.len(), 3);
        assert_eq!(page.elements.portfolio_items.len(), 4);
        let displays: Vec<String> = page.elements.portfolio_items.iter().map(display).collect();
        assert_eq!(displays, vec!["block", "none", "block", "block"]);
        drop(pending);
        root.remove();

        let ran = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&ran);
        let pending = dom::when_parsed(&document, false, move || {
            *flag.borrow_mut() = true;
        });
        assert!(pending.is_none());
        assert!(*ran.borrow());
    }

    #[wasm_bindgen_test]
    fn inertia_leaves_wheel_to_elements_that_scroll_themselves() {
        let markup = r#"
            <div id="scroller" style="height: 50px; overflow-y: auto">
                <div id="scrollerContent" style="height: 500px"></div>
            </div>
            <div data-lenis-prevent><p id="optedOut">text</p></div>
            <div id="plain" style="height: 20px"></div>
        "#;
        let fixture = Fixture::mount_markup(
            markup,
            PageConfig {
                smooth_scroll: true,
                ..PageConfig::default()
            },
        );
        assert!(fixture
            .page
            .driver
            .as_ref()
            .is_some_and(ScrollDriver::wants_wheel));
        let document = fixture.page.document.clone();
        let find = |id: &str| document.get_element_by_id(id).expect(id);

        assert!(!wheel_prevented(&find("scrollerContent")));
        assert!(!wheel_prevented(&find("optedOut")));
        assert!(wheel_prevented(&find("plain")));

        let body = document.body().expect("body");
        body.class_list().add_1(dom::MODAL_OPEN_CLASS).expect("add");
        let inside_modal = wheel_prevented(&find("plain"));
        body.class_list().remove_1(dom::MODAL_OPEN_CLASS).expect("remove");
        assert!(!inside_modal);
    }

    #[wasm_bindgen_test]
    async fn cursor_follows_pointer_each_frame() {
        let markup = format!(r#"{FIXTURE}<div id="cursor"></div>"#);
        let fixture = Fixture::mount_markup(
            &markup,
            PageConfig {
                cursor_ease: 1.0,
                ..quiet_config()
            },
        );
        assert_eq!(fixture.page.pointer(), None);

        let init = web_sys::MouseEventInit::new();
        init.set_client_x(120);
        init.set_client_y(80);
        let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).expect("event");
        fixture.page.window.dispatch_event(&event).expect("dispatch");
        assert_eq!(fixture.page.pointer(), Some((120.0, 80.0)));

        TimeoutFuture::new(100).await;
        let cursor = fixture.page.elements.cursor.clone().expect("cursor");
        let transform = cursor.style().get_property_value("transform").expect("style");
        assert!(transform.starts_with("translate3d("), "{transform}");
        assert!(transform.contains("120px"), "{transform}");
        assert!(transform.contains("80px"), "{transform}");
    }
}
