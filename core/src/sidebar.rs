use crate::mutation::{DomMutation, Target};

pub const SIDEBAR_OPEN_CLASS: &str = "active";

pub fn toggle_sidebar() -> DomMutation {
    DomMutation::ToggleClass {
        target: Target::Sidebar,
        class: SIDEBAR_OPEN_CLASS,
    }
}

/// Collapses the sidebar after navigation, but only on narrow viewports
/// where it overlays the content.
pub fn close_mobile_menu(viewport_width: f64, breakpoint_px: f64) -> Option<DomMutation> {
    if viewport_width < breakpoint_px {
        Some(DomMutation::RemoveClass {
            target: Target::Sidebar,
            class: SIDEBAR_OPEN_CLASS,
        })
    } else {
        None
    }
}
