//! Most common use case: a single GET

use leptos::prelude::*;

use crate::api::{self, ApiError, Todo};
use crate::components::{ErrorResult, Spinner};

const TODO_ID: u32 = 1;

#[component]
pub fn MostCommonUseCase() -> impl IntoView {
    let (result, set_result) = signal::<Option<Result<Todo, ApiError>>>(None);
    let (loading, set_loading) = signal(false);

    let send = move |_| {
        set_loading.set(true);
        set_result.set(None);

        leptos::task::spawn_local(async move {
            let res = api::fetch_todo(TODO_ID).await;
            set_result.set(Some(res));
            set_loading.set(false);
        });
    };

    view! {
        <div class="card">
            <h2>"Most Common Use Case"</h2>
            <p style="color: var(--text-secondary); margin-bottom: 1rem; font-size: 0.875rem;">
                "One GET request, decoded straight into a typed struct."
            </p>

            <button on:click=send disabled=move || loading.get()>
                {move || if loading.get() {
                    view! { <Spinner label="Loading..." /> }.into_any()
                } else {
                    view! { {format!("GET /todos/{}", TODO_ID)} }.into_any()
                }}
            </button>

            {move || result.get().map(|r| match r {
                Ok(todo) => view! {
                    <div class="result success">
                        <div class="result-label">{format!("Todo #{}", todo.id)}</div>
                        <div class="result-value">{todo.title}</div>
                        <div class="stats-row" style="margin-top: 1rem;">
                            <div class="stat">
                                <div class="stat-value">{todo.user_id}</div>
                                <div class="stat-label">"User"</div>
                            </div>
                            <div class="stat">
                                <div class="stat-value">
                                    {if todo.completed { "✅" } else { "◯" }}
                                </div>
                                <div class="stat-label">"Completed"</div>
                            </div>
                        </div>
                    </div>
                }.into_any(),
                Err(e) => view! { <ErrorResult error=e /> }.into_any(),
            })}
        </div>
    }
}
