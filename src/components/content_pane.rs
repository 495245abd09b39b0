use leptos::prelude::*;

use crate::app::ShellContext;
use crate::pages::report::ReportPage;
use crate::views::{Pane, SubView};

fn render_sub_view(sub_view: SubView) -> AnyView {
    match sub_view {
        SubView::Report => view! { <ReportPage /> }.into_any(),
    }
}

#[component]
pub fn ContentPane() -> impl IntoView {
    let selector = expect_context::<ShellContext>().selector;
    let pane = Memo::new(move |_| selector.with(|s| s.pane()));

    view! {
        <main class="content">
            {move || match pane.get() {
                Pane::Text { heading, body } => view! {
                    <div class="page">
                        <h2>{heading}</h2>
                        <p class="page-description">{body}</p>
                    </div>
                }.into_any(),
                Pane::SubView(sub_view) => render_sub_view(sub_view),
                // Unresolved selection: leave the pane blank.
                Pane::Empty => view! { <div class="page page-empty"></div> }.into_any(),
            }}
        </main>
    }
}
