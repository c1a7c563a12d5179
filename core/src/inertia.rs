/// Wheel-driven inertia scrolling: the target moves with input, the rendered
/// position eases toward it by `lerp` each frame.
#[derive(Clone, Debug)]
pub struct InertiaScroll {
    position: f64,
    target: f64,
    limit: f64,
    lerp: f64,
    animating: bool,
}

const SETTLE_DISTANCE: f64 = 0.5;

impl InertiaScroll {
    pub fn new(lerp: f64) -> Self {
        Self {
            position: 0.0,
            target: 0.0,
            limit: 0.0,
            lerp: lerp.clamp(0.01, 1.0),
            animating: false,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Largest reachable offset (document height minus viewport height).
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
    }

    /// Resynchronises with a scroll that happened outside the driver
    /// (keyboard, scrollbar drag, anchor jump).
    pub fn sync_native(&mut self, offset: f64) {
        if self.animating {
            return;
        }
        self.position = offset;
        self.target = offset;
    }

    pub fn on_wheel(&mut self, delta_y: f64) {
        self.scroll_to(self.target + delta_y);
    }

    pub fn scroll_to(&mut self, offset: f64) {
        self.target = offset.clamp(0.0, self.limit);
        self.animating = (self.target - self.position).abs() > SETTLE_DISTANCE;
    }

    /// Advances one animation frame. Returns the new offset while moving,
    /// `None` once settled.
    pub fn raf(&mut self) -> Option<f64> {
        if !self.animating {
            return None;
        }
        self.position += (self.target - self.position) * self.lerp;
        if (self.target - self.position).abs() <= SETTLE_DISTANCE {
            self.position = self.target;
            self.animating = false;
        }
        Some(self.position)
    }
}

/// What the wheel handler found out about the event before deciding whether
/// the inertia driver should take it over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WheelContext {
    /// Browser zoom gesture.
    pub ctrl_key: bool,
    /// A modal dialog is open over the page.
    pub modal_open: bool,
    /// The target or an ancestor carries the opt-out attribute.
    pub opted_out: bool,
    /// The target or an ancestor scrolls along Y on its own.
    pub inside_scrollable: bool,
}

impl WheelContext {
    /// Whether the driver should cancel the native wheel and scroll the page
    /// itself. Anything that owns its own scrolling keeps the native wheel.
    pub fn should_intercept(&self) -> bool {
        !(self.ctrl_key || self.modal_open || self.opted_out || self.inside_scrollable)
    }
}

/// Whether an element with this computed `overflow-y` and these heights
/// scrolls vertically by itself.
pub fn scrolls_vertically(overflow_y: &str, scroll_height: f64, client_height: f64) -> bool {
    matches!(overflow_y.trim(), "auto" | "scroll" | "overlay") && scroll_height > client_height
}
