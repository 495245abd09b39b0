use leptos::prelude::*;

use crate::app::ShellContext;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ShellContext { selector, config } = expect_context::<ShellContext>();
    let menu_title = config.menu_title;

    let registry = selector.with_untracked(|s| s.registry());
    let entries = registry
        .iter()
        .map(|descriptor| {
            let id = descriptor.id;
            let is_selected = move || selector.with(|s| s.is_selected(id));
            view! {
                <li class="nav-item">
                    <button
                        type="button"
                        class="nav-link"
                        class:selected=is_selected
                        aria-current=move || is_selected().then_some("page")
                        on:click=move |_| selector.update(|s| s.select(id))
                    >
                        <span class="nav-icon" aria-hidden="true">{descriptor.icon.glyph()}</span>
                        <span class="nav-label">{descriptor.label}</span>
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">{menu_title}</h1>
            </div>
            <ul class="nav-list">{entries}</ul>
        </nav>
    }
}
