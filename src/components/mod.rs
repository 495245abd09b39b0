pub mod content_pane;
pub mod sidebar;
