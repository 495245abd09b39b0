use crate::views::descriptor::{Content, SubView, ViewDescriptor};
use crate::views::registry::ViewRegistry;

/// What the content area should show for the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    /// Generic rendering: the descriptor's label as heading, its text as body.
    Text {
        heading: &'static str,
        body: &'static str,
    },
    /// Render the sub-view in place of the generic heading/body.
    SubView(SubView),
    /// The selected id did not resolve. Nothing is rendered.
    Empty,
}

/// Owns the single piece of mutable UI state: which view is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSelector {
    registry: ViewRegistry,
    current: String,
}

impl ViewSelector {
    /// Starts on `preferred` if it names a registry entry, otherwise on the
    /// first-listed entry.
    pub fn new(registry: ViewRegistry, preferred: Option<&str>) -> Self {
        let start = match preferred {
            Some(id) => match registry.find_by_id(id) {
                Some(descriptor) => descriptor,
                None => {
                    tracing::warn!(
                        "Default view '{}' is not in the menu, starting on '{}'",
                        id,
                        registry.first().id
                    );
                    registry.first()
                }
            },
            None => registry.first(),
        };

        Self {
            registry,
            current: start.id.to_string(),
        }
    }

    pub fn registry(&self) -> ViewRegistry {
        self.registry
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.current == id
    }

    /// Callers pass ids taken from the registry's own entries; the id is not
    /// checked here. An unknown id leaves the content area empty.
    pub fn select(&mut self, id: &str) {
        if self.current == id {
            return;
        }
        tracing::debug!("Selecting view '{}' (was '{}')", id, self.current);
        self.current.clear();
        self.current.push_str(id);
    }

    pub fn active(&self) -> Option<&'static ViewDescriptor> {
        self.registry.find_by_id(&self.current)
    }

    pub fn pane(&self) -> Pane {
        let Some(descriptor) = self.active() else {
            return Pane::Empty;
        };

        match descriptor.content {
            Content::SubView(sub_view) => Pane::SubView(sub_view),
            Content::StaticText(body) => Pane::Text {
                heading: descriptor.label,
                body,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::registry::STANDARD_MENU;

    fn standard_selector() -> ViewSelector {
        ViewSelector::new(ViewRegistry::standard().unwrap(), None)
    }

    #[test]
    fn test_starts_on_home() {
        let selector = standard_selector();
        assert_eq!(selector.current(), "home");
        assert_eq!(
            selector.pane(),
            Pane::Text {
                heading: "Home",
                body: "Welcome to the Home page. This is the main landing area of your application.",
            }
        );
    }

    #[test]
    fn test_preferred_default() {
        let registry = ViewRegistry::standard().unwrap();
        let selector = ViewSelector::new(registry, Some("contact"));
        assert_eq!(selector.current(), "contact");
    }

    #[test]
    fn test_unknown_preferred_default_falls_back_to_first() {
        let registry = ViewRegistry::standard().unwrap();
        let selector = ViewSelector::new(registry, Some("dashboard"));
        assert_eq!(selector.current(), "home");
        assert!(selector.active().is_some());
    }

    #[test]
    fn test_select_every_entry_renders_its_content() {
        let mut selector = standard_selector();

        for descriptor in STANDARD_MENU {
            selector.select(descriptor.id);
            let expected = match descriptor.content {
                Content::StaticText(body) => Pane::Text {
                    heading: descriptor.label,
                    body,
                },
                Content::SubView(sub_view) => Pane::SubView(sub_view),
            };
            assert_eq!(selector.pane(), expected, "pane for '{}'", descriptor.id);
        }
    }

    #[test]
    fn test_exactly_one_entry_selected() {
        let mut selector = standard_selector();

        for target in ["about", "report", "settings", "home"] {
            selector.select(target);
            let selected: Vec<&str> = selector
                .registry()
                .iter()
                .filter(|d| selector.is_selected(d.id))
                .map(|d| d.id)
                .collect();
            assert_eq!(selected, vec![target]);
            assert_eq!(selector.current(), target);
        }
    }

    #[test]
    fn test_report_uses_sub_view() {
        let mut selector = standard_selector();
        selector.select("report");
        assert_eq!(selector.pane(), Pane::SubView(SubView::Report));
    }

    #[test]
    fn test_select_twice_is_idempotent() {
        let mut selector = standard_selector();

        selector.select("about");
        let first = selector.pane();
        let snapshot = selector.clone();

        selector.select("about");
        assert_eq!(selector.pane(), first);
        assert_eq!(selector, snapshot);
    }

    #[test]
    fn test_unknown_selection_renders_nothing() {
        let mut selector = standard_selector();
        selector.select("removed");

        assert_eq!(selector.current(), "removed");
        assert!(selector.active().is_none());
        assert_eq!(selector.pane(), Pane::Empty);
        assert!(!selector.registry().iter().any(|d| selector.is_selected(d.id)));
    }
}
