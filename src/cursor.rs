use std::cell::RefCell;

use web_sys::HtmlElement;

use folio_core::CursorFollower;

pub(crate) struct CursorView {
    element: HtmlElement,
    follower: RefCell<CursorFollower>,
}

impl CursorView {
    pub(crate) fn new(element: HtmlElement, ease: f64) -> Self {
        Self {
            element,
            follower: RefCell::new(CursorFollower::new(ease)),
        }
    }

    pub(crate) fn on_pointer_move(&self, x: f64, y: f64) {
        self.follower.borrow_mut().on_pointer_move(x, y);
    }

    #[cfg(test)]
    pub(crate) fn pointer(&self) -> Option<(f64, f64)> {
        self.follower.borrow().pointer()
    }

    pub(crate) fn frame(&self) {
        let transform = {
            let mut follower = self.follower.borrow_mut();
            if follower.step().is_none() {
                return;
            }
            follower.transform()
        };
        let _ = self.element.style().set_property("transform", &transform);
    }
}
