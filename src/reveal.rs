use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use folio_core::{reveal::VISIBLE_CLASS, RevealLatch, RevealOutcome};

/// Flags each `.animate-on-scroll` element once, the first time enough of it
/// enters the viewport, then stops observing it.
pub(crate) struct RevealObserver {
    observer: IntersectionObserver,
    latch: Rc<RefCell<RevealLatch>>,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub(crate) fn install(elements: Vec<Element>, threshold: f64) -> Result<Self, JsValue> {
        let latch = Rc::new(RefCell::new(RevealLatch::new(threshold, elements.len())));
        let tracked = elements.clone();
        let callback_latch = Rc::clone(&latch);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(index) = tracked.iter().position(|element| *element == target)
                    else {
                        continue;
                    };
                    let outcome = callback_latch.borrow_mut().on_intersection(
                        index,
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                    );
                    if outcome == RevealOutcome::Trigger {
                        let _ = target.class_list().add_1(VISIBLE_CLASS);
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        {
            let mut latch = latch.borrow_mut();
            for (index, element) in elements.iter().enumerate() {
                if latch.observe(index) {
                    observer.observe(element);
                }
            }
        }
        Ok(Self {
            observer,
            latch,
            _callback: callback,
        })
    }

    /// Without IntersectionObserver support nothing would ever be revealed,
    /// so everything is shown up front.
    pub(crate) fn reveal_all(elements: &[Element]) {
        for element in elements {
            let _ = element.class_list().add_1(VISIBLE_CLASS);
        }
    }

    #[cfg(test)]
    pub(crate) fn triggered_count(&self) -> usize {
        self.latch.borrow().triggered_count()
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
