use std::collections::HashSet;

use crate::error::ShellError;
use crate::views::descriptor::{Content, Icon, SubView, ViewDescriptor};

/// The menu shown in the sidebar, top to bottom.
pub static STANDARD_MENU: &[ViewDescriptor] = &[
    ViewDescriptor {
        id: "home",
        label: "Home",
        icon: Icon::Home,
        content: Content::StaticText(
            "Welcome to the Home page. This is the main landing area of your application.",
        ),
    },
    ViewDescriptor {
        id: "about",
        label: "About",
        icon: Icon::Info,
        content: Content::StaticText(
            "About page content. Learn more about this application and its features.",
        ),
    },
    ViewDescriptor {
        id: "contact",
        label: "Contact",
        icon: Icon::ContactMail,
        content: Content::StaticText(
            "Contact page content. Reach out to us for any questions or support.",
        ),
    },
    ViewDescriptor {
        id: "report",
        label: "Report",
        icon: Icon::Assessment,
        content: Content::SubView(SubView::Report),
    },
    ViewDescriptor {
        id: "settings",
        label: "Settings",
        icon: Icon::Settings,
        content: Content::StaticText(
            "Settings page content. Configure your application preferences here.",
        ),
    },
];

/// Ordered, read-only set of view descriptors.
///
/// Construction checks that the set is non-empty and that every id is
/// distinct, so a successfully built registry always has a first entry and
/// `find_by_id` can match at most one descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRegistry {
    entries: &'static [ViewDescriptor],
    first: &'static ViewDescriptor,
}

impl ViewRegistry {
    pub fn new(entries: &'static [ViewDescriptor]) -> Result<Self, ShellError> {
        let Some(first) = entries.first() else {
            return Err(ShellError::EmptyRegistry);
        };

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in entries {
            if !seen.insert(entry.id) {
                return Err(ShellError::DuplicateViewId(entry.id.to_string()));
            }
        }

        Ok(Self { entries, first })
    }

    pub fn standard() -> Result<Self, ShellError> {
        Self::new(STANDARD_MENU)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&'static ViewDescriptor> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static ViewDescriptor> {
        self.entries.iter()
    }

    /// The first-listed entry, resolved once in `new`.
    pub fn first(&self) -> &'static ViewDescriptor {
        self.first
    }
}
