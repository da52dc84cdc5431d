//! ==============================================================================
//! router.rs - hash-mode history and the dispatcher handle shared via context
//! ==============================================================================
//!
//! the browser location hash is the source of truth (`index.html#/lets-post`).
//! navigation writes the hash; the `hashchange` listener in App feeds the new
//! path back into the reactive graph. back/forward are asynchronous in the
//! browser, so the page they land on arrives through that listener too, never
//! through the dispatcher's return value.
//!
//! ==============================================================================

use demo_routes::{path_from_hash, History, NavigationDispatcher, NavigationTarget};
use leptos::prelude::*;
use tracing::warn;

/// history backed by `window.location.hash`
#[derive(Debug, Clone, Copy, Default)]
pub struct HashHistory;

impl History for HashHistory {
    fn current_path(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().hash().ok())
            .map(|hash| path_from_hash(&hash))
            .unwrap_or_else(|| "/".to_string())
    }

    fn push(&mut self, path: String) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_hash(&path) {
            warn!(?err, %path, "could not set location hash");
        }
    }

    fn replace(&mut self, path: String) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().replace(&self.href(&path)) {
            warn!(?err, %path, "could not replace location");
        }
    }

    // the browser exposes neither stack; back()/forward() with nothing to move
    // to are no-ops there
    fn can_go_back(&self) -> bool {
        true
    }

    fn can_go_forward(&self) -> bool {
        true
    }

    fn go_back(&mut self) {
        if let Some(Err(err)) = web_sys::window()
            .and_then(|window| window.history().ok())
            .map(|history| history.back())
        {
            warn!(?err, "history.back() failed");
        }
    }

    fn go_forward(&mut self) {
        if let Some(Err(err)) = web_sys::window()
            .and_then(|window| window.history().ok())
            .map(|history| history.forward())
        {
            warn!(?err, "history.forward() failed");
        }
    }

    fn href(&self, path: &str) -> String {
        format!("#{}", path)
    }
}

pub type Dispatcher = StoredValue<NavigationDispatcher<HashHistory>>;

pub fn use_dispatcher() -> Dispatcher {
    expect_context::<Dispatcher>()
}

/// navigate through the shared dispatcher, logging targets that do not exist
///
/// takes the handle explicitly since event handlers run outside the owner that
/// holds the context.
pub fn navigate(dispatcher: Dispatcher, target: NavigationTarget) {
    dispatcher.update_value(|dispatcher| {
        if let Err(err) = dispatcher.navigate(target) {
            warn!(%err, "navigation rejected");
        }
    });
}

pub fn go_back(dispatcher: Dispatcher) {
    dispatcher.update_value(|dispatcher| {
        dispatcher.back();
    });
}

pub fn go_forward(dispatcher: Dispatcher) {
    dispatcher.update_value(|dispatcher| {
        dispatcher.forward();
    });
}
