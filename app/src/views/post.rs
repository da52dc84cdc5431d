//! Let's POST: send a json body and show what comes back

use leptos::prelude::*;

use crate::api::{self, ApiError, NewPost, Post};
use crate::components::{ErrorResult, Spinner};

const AUTHOR_ID: u32 = 1;

#[component]
pub fn LetsPost() -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (body, set_body) = signal(String::new());
    let (result, set_result) = signal::<Option<Result<Post, ApiError>>>(None);
    let (loading, set_loading) = signal(false);

    let submit = move |_| {
        let new_post = NewPost {
            title: title.get(),
            body: body.get(),
            user_id: AUTHOR_ID,
        };
        if new_post.title.is_empty() {
            return;
        }

        set_loading.set(true);
        set_result.set(None);

        leptos::task::spawn_local(async move {
            let res = api::create_post(&new_post).await;
            set_result.set(Some(res));
            set_loading.set(false);
        });
    };

    view! {
        <div class="card">
            <h2>"Let's POST"</h2>
            <p style="color: var(--text-secondary); margin-bottom: 1rem; font-size: 0.875rem;">
                "Create a post. The api fakes persistence and echoes it back with an id."
            </p>

            <div class="input-group">
                <input
                    type="text"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </div>
            <div class="input-group">
                <textarea
                    placeholder="Body"
                    prop:value=move || body.get()
                    on:input=move |ev| set_body.set(event_target_value(&ev))
                ></textarea>
            </div>
            <button
                on:click=submit
                disabled=move || loading.get() || title.get().is_empty()
            >
                {move || if loading.get() {
                    view! { <Spinner label="Posting..." /> }.into_any()
                } else {
                    view! { "POST /posts" }.into_any()
                }}
            </button>

            {move || result.get().map(|r| match r {
                Ok(post) => view! {
                    <div class="result success">
                        <div class="result-label">{format!("Created post #{}", post.id)}</div>
                        <div class="result-value"><strong>{post.title}</strong></div>
                        <div class="result-value" style="color: var(--text-secondary);">
                            {post.body}
                        </div>
                    </div>
                }.into_any(),
                Err(e) => view! { <ErrorResult error=e /> }.into_any(),
            })}
        </div>
    }
}
