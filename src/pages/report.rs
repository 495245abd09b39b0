use leptos::prelude::*;

pub const REPORT_HEADING: &str = "Report";
pub const REPORT_BODY: &str = "Report page content. View and generate reports for your data.";

/// Placeholder report view. Takes no inputs and produces nothing the shell reads back.
#[component]
pub fn ReportPage() -> impl IntoView {
    view! {
        <div class="page report-page">
            <h2>{REPORT_HEADING}</h2>
            <p class="page-description">{REPORT_BODY}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::{Pane, SubView, ViewRegistry, ViewSelector};

    #[test]
    fn test_report_selection_dispatches_to_sub_view() {
        let mut selector = ViewSelector::new(ViewRegistry::standard().unwrap(), None);
        selector.select("report");

        // The pane must dispatch to the sub-view, not the generic label/body path.
        assert_eq!(selector.pane(), Pane::SubView(SubView::Report));
        assert_ne!(
            selector.pane(),
            Pane::Text {
                heading: "Report",
                body: REPORT_BODY,
            }
        );
    }
}
