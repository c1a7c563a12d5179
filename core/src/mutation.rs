/// An element addressed by its role on the page and, for collections, its
/// index in the snapshot the mutation was computed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    NavLink(usize),
    FilterButton(usize),
    PortfolioItem(usize),
    Revealed(usize),
    BackToTop,
    Sidebar,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    Block,
    None,
}

impl Display {
    pub fn as_css(self) -> &'static str {
        match self {
            Display::Block => "block",
            Display::None => "none",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DomMutation {
    AddClass { target: Target, class: &'static str },
    RemoveClass { target: Target, class: &'static str },
    ToggleClass { target: Target, class: &'static str },
    SetDisplay { target: Target, display: Display },
    /// Applied after `delay_ms`, once every synchronous write of the same
    /// batch has committed.
    AddClassAfter {
        target: Target,
        class: &'static str,
        delay_ms: u32,
    },
}

impl DomMutation {
    pub fn target(&self) -> Target {
        match self {
            DomMutation::AddClass { target, .. }
            | DomMutation::RemoveClass { target, .. }
            | DomMutation::ToggleClass { target, .. }
            | DomMutation::SetDisplay { target, .. }
            | DomMutation::AddClassAfter { target, .. } => *target,
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, DomMutation::AddClassAfter { .. })
    }
}

/// Replays a batch against a set of class flags. Deferred additions are
/// applied last, mirroring how the front end schedules them.
pub fn classes_after<'a>(
    mutations: &[DomMutation],
    target: Target,
    initial: &[&'a str],
) -> Vec<&'a str> {
    let mut classes: Vec<&'a str> = initial.to_vec();
    let (deferred, immediate): (Vec<_>, Vec<_>) =
        mutations.iter().partition(|mutation| mutation.is_deferred());
    for mutation in immediate.into_iter().chain(deferred) {
        if mutation.target() != target {
            continue;
        }
        match mutation {
            DomMutation::AddClass { class, .. } | DomMutation::AddClassAfter { class, .. } => {
                if !classes.contains(class) {
                    classes.push(*class);
                }
            }
            DomMutation::RemoveClass { class, .. } => {
                classes.retain(|existing| existing != class);
            }
            DomMutation::ToggleClass { class, .. } => {
                if classes.contains(class) {
                    classes.retain(|existing| existing != class);
                } else {
                    classes.push(*class);
                }
            }
            DomMutation::SetDisplay { .. } => {}
        }
    }
    classes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deferred_add_survives_earlier_remove() {
        let target = Target::PortfolioItem(0);
        let mutations = vec![
            DomMutation::AddClassAfter {
                target,
                class: "visible-item",
                delay_ms: 10,
            },
            DomMutation::RemoveClass {
                target,
                class: "visible-item",
            },
        ];
        assert_eq!(classes_after(&mutations, target, &[]), vec!["visible-item"]);
    }

    #[test]
    fn toggle_flips_membership() {
        let mutations = vec![DomMutation::ToggleClass {
            target: Target::Sidebar,
            class: "active",
        }];
        assert!(classes_after(&mutations, Target::Sidebar, &["active"]).is_empty());
        assert_eq!(
            classes_after(&mutations, Target::Sidebar, &[]),
            vec!["active"]
        );
    }
}
