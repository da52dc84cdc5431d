//! A request that is supposed to fail

use leptos::prelude::*;

use crate::api::{self, ApiError};
use crate::components::{ErrorResult, Spinner};

#[component]
pub fn LetsOccurAnError() -> impl IntoView {
    let (result, set_result) = signal::<Option<Result<serde_json::Value, ApiError>>>(None);
    let (loading, set_loading) = signal(false);

    let send = move |_| {
        set_loading.set(true);
        set_result.set(None);

        leptos::task::spawn_local(async move {
            let res = api::fetch_missing().await;
            set_result.set(Some(res));
            set_loading.set(false);
        });
    };

    view! {
        <div class="card">
            <h2>"Let's Occur an Error"</h2>
            <p style="color: var(--text-secondary); margin-bottom: 1rem; font-size: 0.875rem;">
                "Request a resource that does not exist and handle the failure."
            </p>

            <button on:click=send disabled=move || loading.get()>
                {move || if loading.get() {
                    view! { <Spinner label="Requesting..." /> }.into_any()
                } else {
                    view! { {format!("GET {}", api::MISSING_RESOURCE)} }.into_any()
                }}
            </button>

            {move || result.get().map(|r| match r {
                // the api should never answer this one
                Ok(value) => view! {
                    <div class="result success">
                        <div class="result-label">"Unexpected success"</div>
                        <div class="result-value">{value.to_string()}</div>
                    </div>
                }.into_any(),
                Err(e) => view! { <ErrorResult error=e /> }.into_any(),
            })}
        </div>
    }
}
