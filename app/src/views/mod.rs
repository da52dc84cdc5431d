//! ==============================================================================
//! views/mod.rs - example pages, bound to route ViewIds
//! ==============================================================================

use demo_routes::ViewId;
use leptos::prelude::*;

mod common;
mod error;
mod multi_url;
mod nested;
mod post;

pub use common::MostCommonUseCase;
pub use error::LetsOccurAnError;
pub use multi_url::MultiUrlExample;
pub use nested::NestedRequests;
pub use post::LetsPost;

/// the page a route's view id stands for
pub fn render(view: ViewId) -> AnyView {
    match view {
        ViewId::MostCommonUseCase => view! { <MostCommonUseCase /> }.into_any(),
        ViewId::MultiUrlExample => view! { <MultiUrlExample /> }.into_any(),
        ViewId::NestedRequests => view! { <NestedRequests /> }.into_any(),
        ViewId::LetsPost => view! { <LetsPost /> }.into_any(),
        ViewId::LetsOccurAnError => view! { <LetsOccurAnError /> }.into_any(),
    }
}
