//! Route navigation component

use demo_routes::{NavigationTarget, RouteDefinition};
use leptos::prelude::*;

use crate::router::use_dispatcher;

/// one link per route, in table order, with the active route highlighted
#[component]
pub fn RouteNav(active: Memo<Option<RouteDefinition>>) -> impl IntoView {
    let dispatcher = use_dispatcher();

    let links = dispatcher.with_value(|d| {
        d.table()
            .iter()
            .filter_map(|route| {
                let href = d.href(&NavigationTarget::name(route.name)).ok()?;
                Some((route.name, route.view.title(), href))
            })
            .collect::<Vec<_>>()
    });

    view! {
        <nav class="tabs">
            {links.into_iter().map(|(name, title, href)| {
                let is_active = move || active.get().is_some_and(|route| route.name == name);
                view! {
                    <a
                        href=href
                        class=move || if is_active() { "tab active" } else { "tab" }
                    >
                        {title}
                    </a>
                }
            }).collect::<Vec<_>>()}
        </nav>
    }
}
