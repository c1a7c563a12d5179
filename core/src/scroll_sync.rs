//! Scroll-driven page state: which section is current, which nav link is
//! highlighted, and whether the back-to-top button shows.

use crate::mutation::{DomMutation, Target};

pub const ACTIVE_CLASS: &str = "active";
pub const SHOW_CLASS: &str = "show";

#[derive(Clone, Debug, PartialEq)]
pub struct SectionGeometry {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionGeometry {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Top of the trigger band: a third of the section height above it.
    pub fn trigger_offset(&self) -> f64 {
        self.top - self.height / 3.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub sections: Vec<SectionGeometry>,
    pub nav_hrefs: Vec<String>,
    /// Offset of the section gating back-to-top, `None` when the section or
    /// the button itself is missing.
    pub back_to_top_anchor: Option<f64>,
}

/// The last section in document order whose trigger band the offset has
/// reached.
pub fn current_section(sections: &[SectionGeometry], scroll_y: f64) -> Option<&str> {
    let mut current = None;
    for section in sections {
        if scroll_y >= section.trigger_offset() {
            current = Some(section.id.as_str());
        }
    }
    current
}

pub fn link_targets(href: &str, section_id: &str) -> bool {
    if section_id.is_empty() {
        return false;
    }
    match href.split_once('#') {
        Some((_, fragment)) => fragment == section_id,
        None => href.contains(section_id),
    }
}

pub fn nav_highlight(nav_hrefs: &[String], current: Option<&str>) -> Vec<DomMutation> {
    let mut mutations = Vec::with_capacity(nav_hrefs.len() + 1);
    for (index, href) in nav_hrefs.iter().enumerate() {
        let target = Target::NavLink(index);
        mutations.push(DomMutation::RemoveClass {
            target,
            class: ACTIVE_CLASS,
        });
        if current.is_some_and(|id| link_targets(href, id)) {
            mutations.push(DomMutation::AddClass {
                target,
                class: ACTIVE_CLASS,
            });
        }
    }
    mutations
}

/// `None` means the rule does not apply to this page.
pub fn back_to_top_visible(
    scroll_y: f64,
    anchor_top: Option<f64>,
    viewport_height: f64,
) -> Option<bool> {
    let anchor_top = anchor_top?;
    Some(scroll_y >= anchor_top - viewport_height / 2.0)
}

/// Recomputes on every scroll event; there is no throttling and no
/// hysteresis, so oscillating around a threshold flips state each time.
#[derive(Clone, Debug, Default)]
pub struct ScrollStateSynchronizer {
    current: Option<String>,
    back_to_top: Option<bool>,
}

impl ScrollStateSynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn back_to_top_shown(&self) -> Option<bool> {
        self.back_to_top
    }

    pub fn on_scroll(&mut self, snapshot: &ScrollSnapshot) -> Vec<DomMutation> {
        let current = current_section(&snapshot.sections, snapshot.scroll_y);
        let mut mutations = nav_highlight(&snapshot.nav_hrefs, current);
        self.current = current.map(str::to_string);

        self.back_to_top = back_to_top_visible(
            snapshot.scroll_y,
            snapshot.back_to_top_anchor,
            snapshot.viewport_height,
        );
        match self.back_to_top {
            Some(true) => mutations.push(DomMutation::AddClass {
                target: Target::BackToTop,
                class: SHOW_CLASS,
            }),
            Some(false) => mutations.push(DomMutation::RemoveClass {
                target: Target::BackToTop,
                class: SHOW_CLASS,
            }),
            None => {}
        }
        mutations
    }
}
