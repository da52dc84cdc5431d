//! Nested requests: the second request needs data from the first

use leptos::prelude::*;

use crate::api::{self, ApiError, AuthoredPost};
use crate::components::{ErrorResult, Spinner};

const POST_ID: u32 = 1;

#[component]
pub fn NestedRequests() -> impl IntoView {
    let (result, set_result) = signal::<Option<Result<AuthoredPost, ApiError>>>(None);
    let (loading, set_loading) = signal(false);

    let send = move |_| {
        set_loading.set(true);
        set_result.set(None);

        leptos::task::spawn_local(async move {
            let res = api::fetch_post_with_author(POST_ID).await;
            set_result.set(Some(res));
            set_loading.set(false);
        });
    };

    view! {
        <div class="card">
            <h2>"Nested Requests"</h2>
            <p style="color: var(--text-secondary); margin-bottom: 1rem; font-size: 0.875rem;">
                "Fetch a post, then use its userId to fetch the author."
            </p>

            <button on:click=send disabled=move || loading.get()>
                {move || if loading.get() {
                    view! { <Spinner label="Loading..." /> }.into_any()
                } else {
                    view! { "GET /posts/1 → /users/:userId" }.into_any()
                }}
            </button>

            {move || result.get().map(|r| match r {
                Ok(AuthoredPost { post, author }) => view! {
                    <div class="result success">
                        <div class="result-label">{format!("Post #{}", post.id)}</div>
                        <div class="result-value"><strong>{post.title}</strong></div>
                        <div class="result-value" style="color: var(--text-secondary);">
                            {post.body}
                        </div>
                        <div class="stats-row" style="margin-top: 1rem;">
                            <div class="stat">
                                <div class="stat-value">{author.name}</div>
                                <div class="stat-label">"Author"</div>
                            </div>
                            <div class="stat">
                                <div class="stat-value">{author.email}</div>
                                <div class="stat-label">"Email"</div>
                            </div>
                        </div>
                    </div>
                }.into_any(),
                Err(e) => view! { <ErrorResult error=e /> }.into_any(),
            })}
        </div>
    }
}
