//! Portfolio category filter.

use crate::mutation::{Display, DomMutation, Target};

pub const ACTIVE_CLASS: &str = "active";
pub const VISIBLE_ITEM_CLASS: &str = "visible-item";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterControl {
    pub category: Option<String>,
    pub active: bool,
}

impl FilterControl {
    /// Reads the category from a `data-filter` attribute, falling back to
    /// the first single-quoted token of an inline handler such as
    /// `filterPortfolio('animation')`.
    pub fn from_attributes(data_filter: Option<&str>, onclick: Option<&str>, active: bool) -> Self {
        let category = data_filter
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .or_else(|| onclick.and_then(quoted_token).map(str::to_string));
        Self { category, active }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PortfolioItemSnapshot {
    pub classes: Vec<String>,
}

impl PortfolioItemSnapshot {
    pub fn from_class_list(class_name: &str) -> Self {
        Self {
            classes: class_name.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.classes.iter().any(|class| class == category)
    }
}

pub fn quoted_token(raw: &str) -> Option<&str> {
    let start = raw.find('\'')? + 1;
    let len = raw[start..].find('\'')?;
    Some(&raw[start..start + len])
}

/// Category of the control flagged active, or `default` when none is.
pub fn active_category<'a>(controls: &'a [FilterControl], default: &'a str) -> &'a str {
    controls
        .iter()
        .find(|control| control.active)
        .and_then(|control| control.category.as_deref())
        .unwrap_or(default)
}

/// Shown items get `display: block` immediately and the visible class after
/// `fade_in_delay_ms`; the display change has to commit first or the fade
/// transition never runs. Unknown categories hide everything.
pub fn filter_portfolio(
    category: &str,
    controls: &[FilterControl],
    items: &[PortfolioItemSnapshot],
    fade_in_delay_ms: u32,
) -> Vec<DomMutation> {
    let mut mutations = Vec::with_capacity(controls.len() * 2 + items.len() * 2);
    for (index, control) in controls.iter().enumerate() {
        let target = Target::FilterButton(index);
        mutations.push(DomMutation::RemoveClass {
            target,
            class: ACTIVE_CLASS,
        });
        if control.category.as_deref() == Some(category) {
            mutations.push(DomMutation::AddClass {
                target,
                class: ACTIVE_CLASS,
            });
        }
    }
    for (index, item) in items.iter().enumerate() {
        let target = Target::PortfolioItem(index);
        if item.has_category(category) {
            mutations.push(DomMutation::SetDisplay {
                target,
                display: Display::Block,
            });
            mutations.push(DomMutation::AddClassAfter {
                target,
                class: VISIBLE_ITEM_CLASS,
                delay_ms: fade_in_delay_ms,
            });
        } else {
            mutations.push(DomMutation::RemoveClass {
                target,
                class: VISIBLE_ITEM_CLASS,
            });
            mutations.push(DomMutation::SetDisplay {
                target,
                display: Display::None,
            });
        }
    }
    mutations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_token_reads_first_argument() {
        assert_eq!(quoted_token("filterPortfolio('animation')"), Some("animation"));
        assert_eq!(quoted_token("filterPortfolio('')"), Some(""));
        assert_eq!(quoted_token("filterPortfolio(animation)"), None);
        assert_eq!(quoted_token("x('unterminated"), None);
    }

    #[test]
    fn data_attribute_wins_over_handler() {
        let control = FilterControl::from_attributes(
            Some("design"),
            Some("filterPortfolio('animation')"),
            false,
        );
        assert_eq!(control.category.as_deref(), Some("design"));
        let control = FilterControl::from_attributes(
            Some("  "),
            Some("filterPortfolio('animation')"),
            false,
        );
        assert_eq!(control.category.as_deref(), Some("animation"));
    }
}
