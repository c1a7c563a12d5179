use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Element, HtmlVideoElement};

pub(crate) const PREVIEW_ATTR: &str = "data-preview";
pub(crate) const HOVER_VIDEO_CLASS: &str = "hover-video";

/// Lazily creates one muted looping video per box on first hover and keeps
/// it around; leaving the box only pauses it.
pub(crate) struct HoverPreview {
    document: Document,
    container: Element,
    src: String,
    video: RefCell<Option<HtmlVideoElement>>,
}

impl HoverPreview {
    pub(crate) fn new(document: Document, container: Element) -> Option<Rc<Self>> {
        let src = container.get_attribute(PREVIEW_ATTR)?;
        Some(Rc::new(Self {
            document,
            container,
            src,
            video: RefCell::new(None),
        }))
    }

    pub(crate) fn install(self: &Rc<Self>) -> Vec<EventListener> {
        let preview = Rc::clone(self);
        let enter = EventListener::new(&self.container, "mouseenter", move |_event| {
            preview.on_enter();
        });
        let preview = Rc::clone(self);
        let leave = EventListener::new(&self.container, "mouseleave", move |_event| {
            preview.on_leave();
        });
        vec![enter, leave]
    }

    #[cfg(test)]
    pub(crate) fn video(&self) -> Option<HtmlVideoElement> {
        self.video.borrow().clone()
    }

    fn ensure_video(&self) -> Result<HtmlVideoElement, JsValue> {
        if let Some(video) = self.video.borrow().as_ref() {
            return Ok(video.clone());
        }
        let video: HtmlVideoElement = self.document.create_element("video")?.dyn_into()?;
        video.set_src(&self.src);
        video.set_muted(true);
        video.set_loop(true);
        video.set_attribute("playsinline", "")?;
        video.class_list().add_1(HOVER_VIDEO_CLASS)?;
        self.container.append_child(&video)?;
        *self.video.borrow_mut() = Some(video.clone());
        Ok(video)
    }

    pub(crate) fn on_enter(&self) {
        let video = match self.ensure_video() {
            Ok(video) => video,
            Err(err) => {
                gloo::console::warn!("hover preview: could not create video", err);
                return;
            }
        };
        let promise = match video.play() {
            Ok(promise) => promise,
            Err(_) => {
                gloo::console::log!("hover preview: autoplay prevented");
                return;
            }
        };
        spawn_local(async move {
            if JsFuture::from(promise).await.is_err() {
                gloo::console::log!("hover preview: autoplay prevented");
            }
        });
    }

    pub(crate) fn on_leave(&self) {
        if let Some(video) = self.video.borrow().as_ref() {
            let _ = video.pause();
        }
    }
}
