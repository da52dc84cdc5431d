//! Multi URL example: two independent GETs in flight at once

use leptos::prelude::*;

use crate::api::{self, ApiError, Post, User};
use crate::components::{ErrorResult, Spinner};

const USER_ID: u32 = 1;
const POST_ID: u32 = 1;

#[component]
pub fn MultiUrlExample() -> impl IntoView {
    let (user, set_user) = signal::<Option<Result<User, ApiError>>>(None);
    let (post, set_post) = signal::<Option<Result<Post, ApiError>>>(None);
    let (loading, set_loading) = signal(false);

    let send = move |_| {
        set_loading.set(true);
        set_user.set(None);
        set_post.set(None);

        leptos::task::spawn_local(async move {
            let (user_res, post_res) = api::fetch_user_and_post(USER_ID, POST_ID).await;
            set_user.set(Some(user_res));
            set_post.set(Some(post_res));
            set_loading.set(false);
        });
    };

    view! {
        <div class="card">
            <h2>"Multi URL Example"</h2>
            <p style="color: var(--text-secondary); margin-bottom: 1rem; font-size: 0.875rem;">
                "Two requests to different urls, sent together and awaited together."
            </p>

            <button on:click=send disabled=move || loading.get()>
                {move || if loading.get() {
                    view! { <Spinner label="Loading..." /> }.into_any()
                } else {
                    view! { "GET /users/1 + /posts/1" }.into_any()
                }}
            </button>

            {move || user.get().map(|r| match r {
                Ok(user) => view! {
                    <div class="result success">
                        <div class="result-label">{format!("User #{}", user.id)}</div>
                        <div class="result-value">{user.name}" (@"{user.username}")"</div>
                        <div class="result-value" style="color: var(--text-secondary);">
                            {user.email}
                        </div>
                    </div>
                }.into_any(),
                Err(e) => view! { <ErrorResult error=e /> }.into_any(),
            })}

            {move || post.get().map(|r| match r {
                Ok(post) => view! {
                    <div class="result success">
                        <div class="result-label">{format!("Post #{}", post.id)}</div>
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
