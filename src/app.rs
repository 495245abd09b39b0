use leptos::prelude::*;

use crate::components::content_pane::ContentPane;
use crate::components::sidebar::Sidebar;
use crate::config::ShellConfig;
use crate::views::{ViewRegistry, ViewSelector};

/// Shared with the sidebar and content pane. `selector` is the only mutable
/// UI state in the application.
#[derive(Clone)]
pub struct ShellContext {
    pub selector: RwSignal<ViewSelector>,
    pub config: ShellConfig,
}

impl ShellContext {
    /// Starts the selector on the configured default view.
    pub fn new(registry: ViewRegistry, config: ShellConfig) -> Self {
        let selector = RwSignal::new(ViewSelector::new(
            registry,
            config.default_view.as_deref(),
        ));
        Self { selector, config }
    }
}

#[component]
pub fn App(config: ShellConfig) -> impl IntoView {
    let registry = match ViewRegistry::standard() {
        Ok(registry) => registry,
        Err(e) => {
            tracing::error!("Failed to build view registry: {}", e);
            return view! {
                <div class="shell-error">
                    <span class="status-text status-error">{e.to_string()}</span>
                </div>
            }
            .into_any();
        }
    };

    provide_context(ShellContext::new(registry, config));

    view! {
        <div class="app-layout">
            <Sidebar />
            <ContentPane />
        </div>
    }
    .into_any()
}
