//! Fallback page for paths with no route

use demo_routes::NavigationTarget;
use leptos::prelude::*;

use crate::router::{go_back, go_forward, navigate, use_dispatcher};

#[component]
pub fn NotFound(path: String) -> impl IntoView {
    let dispatcher = use_dispatcher();

    view! {
        <div class="card">
            <h2>"404 - Page not found"</h2>
            <p style="color: var(--text-secondary); margin-bottom: 1rem; font-size: 0.875rem;">
                "Nothing is registered at "<code>{path}</code>"."
            </p>
            <div class="input-group">
                <button on:click=move |_| go_back(dispatcher)>"← Back"</button>
                <button on:click=move |_| navigate(dispatcher, NavigationTarget::name("common"))>
                    "Back to the start"
                </button>
                <button on:click=move |_| go_forward(dispatcher)>"Forward →"</button>
            </div>
        </div>
    }
}
