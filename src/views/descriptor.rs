/// Presentational handle for a menu entry's icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Home,
    Info,
    ContactMail,
    Assessment,
    Settings,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Home => "\u{2302}",
            Icon::Info => "\u{2139}",
            Icon::ContactMail => "\u{2709}",
            Icon::Assessment => "\u{1F4CA}",
            Icon::Settings => "\u{2699}",
        }
    }
}

/// Self-contained views that replace the generic heading/body rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubView {
    Report,
}

/// What a descriptor shows when it is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content {
    StaticText(&'static str),
    SubView(SubView),
}

/// A static record describing one selectable view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Icon,
    pub content: Content,
}
