//! ==============================================================================
//! lib.rs - Request Examples Demo
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm app showing common http request patterns, one page per
//!     pattern: a plain GET, concurrent GETs, dependent GETs, a POST, and a
//!     request that fails on purpose.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - route table from demo-routes, built once at startup
//!     - hash-mode navigation (index.html#/lets-post)
//!     - pages call the json placeholder api via fetch
//!
//! ==============================================================================

use std::sync::Arc;

use demo_routes::{History, NavigationDispatcher, RouteTable};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use tracing::{error, info};
use wasm_bindgen::prelude::*;

mod api;
mod components;
mod router;
mod views;

use components::{page_title, Header, NotFound, RouteNav};
use router::{Dispatcher, HashHistory};

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let table = RouteTable::demo();
    if let Err(err) = table.validate() {
        error!(%err, "route table failed its integrity check");
    }
    info!(routes = table.len(), api = api::api_base(), "starting request examples demo");

    let table = Arc::new(table);
    mount_to_body(move || view! { <App table=table /> });
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App(table: Arc<RouteTable>) -> impl IntoView {
    provide_meta_context();

    let dispatcher: Dispatcher =
        StoredValue::new(NavigationDispatcher::new(table, HashHistory));
    provide_context(dispatcher);

    // track the hash; navigation writes it and the browser tells us back
    let (path, set_path) = signal(HashHistory.current_path());
    let listener = window_event_listener(leptos::ev::hashchange, move |_| {
        set_path.set(HashHistory.current_path());
    });
    on_cleanup(move || listener.remove());

    let active = Memo::new(move |_| {
        let path = path.get();
        dispatcher.with_value(|d| d.table().resolve(&path).route().cloned())
    });

    let title = move || {
        let page = active.with(|route| page_title(route.as_ref()));
        format!("{} | Request Examples", page)
    };

    view! {
        <Title text=title />
        <Header active=active />
        <div class="container">
            <RouteNav active=active />

            {move || match active.get() {
                Some(route) => views::render(route.view),
                None => view! { <NotFound path=path.get() /> }.into_any(),
            }}
        </div>
    }
}
