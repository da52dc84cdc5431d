//! ==============================================================================
//! dispatcher.rs - maps the current location to a route
//! ==============================================================================
//!
//! the dispatcher owns a shared handle to the route table and a history
//! provider. navigation pushes onto history and hands back the resolution for
//! the new location; rendering is left to whoever holds the dispatcher.
//!
//! ==============================================================================

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::NavigationError;
use crate::history::History;
use crate::table::{Resolution, RouteTable};

/// where to navigate to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    /// a literal path, which may or may not be registered
    Path(String),
    /// the route registered under this name
    Name(&'static str),
}

impl NavigationTarget {
    pub fn path(path: impl Into<String>) -> Self {
        Self::Path(path.into())
    }

    pub fn name(name: &'static str) -> Self {
        Self::Name(name)
    }
}

pub struct NavigationDispatcher<H> {
    table: Arc<RouteTable>,
    history: H,
}

impl<H: History> NavigationDispatcher<H> {
    pub fn new(table: Arc<RouteTable>, history: H) -> Self {
        Self { table, history }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// resolve whatever location history currently points at
    pub fn current(&self) -> Resolution<'_> {
        self.table.resolve(&self.history.current_path())
    }

    /// push a new location and resolve it
    ///
    /// unknown names and `//` paths are rejected before history is touched.
    /// other unknown paths are still pushed; they resolve to `NotFound`.
    pub fn navigate(&mut self, target: NavigationTarget) -> Result<Resolution<'_>, NavigationError> {
        let path = self.target_path(&target)?;
        debug!(?target, %path, "navigate");

        self.history.push(path);
        Ok(self.current())
    }

    /// like `navigate`, but overwrite the current history entry
    pub fn replace(&mut self, target: NavigationTarget) -> Result<Resolution<'_>, NavigationError> {
        let path = self.target_path(&target)?;
        debug!(?target, %path, "replace");

        self.history.replace(path);
        Ok(self.current())
    }

    /// step back through history and resolve where it now points
    ///
    /// providers that move asynchronously (the browser) have not applied the
    /// move yet when this returns; their hosts observe it through the
    /// provider's own change notification instead.
    pub fn back(&mut self) -> Resolution<'_> {
        if self.history.can_go_back() {
            self.history.go_back();
        }
        self.current()
    }

    pub fn forward(&mut self) -> Resolution<'_> {
        if self.history.can_go_forward() {
            self.history.go_forward();
        }
        self.current()
    }

    /// link target for a navigation target, formatted by the history provider
    pub fn href(&self, target: &NavigationTarget) -> Result<String, NavigationError> {
        let path = self.target_path(target)?;
        Ok(self.history.href(&path))
    }

    fn target_path(&self, target: &NavigationTarget) -> Result<String, NavigationError> {
        match target {
            NavigationTarget::Path(path) if path.starts_with("//") => {
                info!(%path, "navigation to protocol-relative path");
                Err(NavigationError::InvalidPath(path.clone()))
            }
            NavigationTarget::Path(path) => Ok(path.clone()),
            NavigationTarget::Name(name) => match self.table.by_name(name) {
                Some(route) => Ok(route.path.to_string()),
                None => {
                    info!(name, "navigation to unknown route name");
                    Err(NavigationError::UnknownRoute(name.to_string()))
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistory;
    use crate::table::ViewId;
    use rstest::{fixture, rstest};

    #[fixture]
    fn dispatcher() -> NavigationDispatcher<MemoryHistory> {
        NavigationDispatcher::new(Arc::new(RouteTable::demo()), MemoryHistory::new())
    }

    fn view_of(resolution: Resolution<'_>) -> Option<ViewId> {
        resolution.route().map(|route| route.view)
    }

    #[rstest]
    fn test_starts_on_common(dispatcher: NavigationDispatcher<MemoryHistory>) {
        assert_eq!(view_of(dispatcher.current()), Some(ViewId::MostCommonUseCase));
    }

    #[rstest]
    fn test_navigate_by_name(mut dispatcher: NavigationDispatcher<MemoryHistory>) {
        let resolution = dispatcher.navigate(NavigationTarget::name("post")).unwrap();

        assert_eq!(view_of(resolution), Some(ViewId::LetsPost));
        assert_eq!(dispatcher.history().current_path(), "/lets-post");
    }

    #[rstest]
    fn test_navigate_by_path(mut dispatcher: NavigationDispatcher<MemoryHistory>) {
        let resolution = dispatcher
            .navigate(NavigationTarget::path("/nested-requests"))
            .unwrap();

        assert_eq!(view_of(resolution), Some(ViewId::NestedRequests));
    }

    #[rstest]
    fn test_navigate_to_unknown_path_is_not_found(
        mut dispatcher: NavigationDispatcher<MemoryHistory>,
    ) {
        let resolution = dispatcher
            .navigate(NavigationTarget::path("/does-not-exist"))
            .unwrap();

        assert!(!resolution.is_matched());
        assert!(dispatcher.history().can_go_back());
    }

    #[rstest]
    fn test_unknown_name_leaves_history_untouched(
        mut dispatcher: NavigationDispatcher<MemoryHistory>,
    ) {
        let result = dispatcher.navigate(NavigationTarget::name("nope"));

        assert_eq!(result, Err(NavigationError::UnknownRoute("nope".to_string())));
        assert_eq!(dispatcher.history().current_path(), "/");
        assert!(!dispatcher.history().can_go_back());
    }

    #[rstest]
    #[case("//x")]
    #[case("//lets-post")]
    fn test_protocol_relative_path_is_rejected(
        mut dispatcher: NavigationDispatcher<MemoryHistory>,
        #[case] path: &str,
    ) {
        let rejected = Err(NavigationError::InvalidPath(path.to_string()));

        assert_eq!(dispatcher.navigate(NavigationTarget::path(path)), rejected);
        assert_eq!(dispatcher.replace(NavigationTarget::path(path)), rejected);
        assert!(dispatcher.href(&NavigationTarget::path(path)).is_err());
        assert_eq!(dispatcher.history().current_path(), "/");
        assert!(!dispatcher.history().can_go_back());
    }

    /// applies back/forward only when `settle` is called, like the browser
    #[derive(Default)]
    struct DeferredHistory {
        inner: MemoryHistory,
        pending: Vec<bool>,
    }

    impl DeferredHistory {
        fn settle(&mut self) {
            for back in std::mem::take(&mut self.pending) {
                if back {
                    self.inner.go_back();
                } else {
                    self.inner.go_forward();
                }
            }
        }
    }

    impl History for DeferredHistory {
        fn current_path(&self) -> String {
            self.inner.current_path()
        }
        fn push(&mut self, path: String) {
            self.inner.push(path);
        }
        fn replace(&mut self, path: String) {
            self.inner.replace(path);
        }
        fn can_go_back(&self) -> bool {
            true
        }
        fn can_go_forward(&self) -> bool {
            true
        }
        fn go_back(&mut self) {
            self.pending.push(true);
        }
        fn go_forward(&mut self) {
            self.pending.push(false);
        }
    }

    #[rstest]
    fn test_deferred_back_is_observed_after_it_settles() {
        let mut dispatcher =
            NavigationDispatcher::new(Arc::new(RouteTable::demo()), DeferredHistory::default());
        dispatcher.navigate(NavigationTarget::name("post")).unwrap();

        // the move is requested but not applied yet
        assert_eq!(view_of(dispatcher.back()), Some(ViewId::LetsPost));

        dispatcher.history.settle();
        assert_eq!(view_of(dispatcher.current()), Some(ViewId::MostCommonUseCase));

        dispatcher.forward();
        dispatcher.history.settle();
        assert_eq!(view_of(dispatcher.current()), Some(ViewId::LetsPost));
    }

    #[rstest]
    fn test_back_and_forward(mut dispatcher: NavigationDispatcher<MemoryHistory>) {
        dispatcher.navigate(NavigationTarget::name("multi-urls")).unwrap();
        dispatcher.navigate(NavigationTarget::name("error")).unwrap();

        assert_eq!(view_of(dispatcher.back()), Some(ViewId::MultiUrlExample));
        assert_eq!(view_of(dispatcher.back()), Some(ViewId::MostCommonUseCase));
        // nothing further back
        assert_eq!(view_of(dispatcher.back()), Some(ViewId::MostCommonUseCase));
        assert_eq!(view_of(dispatcher.forward()), Some(ViewId::MultiUrlExample));
    }

    #[rstest]
    fn test_replace_does_not_grow_history(mut dispatcher: NavigationDispatcher<MemoryHistory>) {
        let resolution = dispatcher.replace(NavigationTarget::name("error")).unwrap();

        assert_eq!(view_of(resolution), Some(ViewId::LetsOccurAnError));
        assert!(!dispatcher.history().can_go_back());
    }

    #[rstest]
    fn test_resolving_twice_is_stable(dispatcher: NavigationDispatcher<MemoryHistory>) {
        assert_eq!(dispatcher.current(), dispatcher.current());
    }

    #[rstest]
    fn test_href(dispatcher: NavigationDispatcher<MemoryHistory>) {
        assert_eq!(
            dispatcher.href(&NavigationTarget::name("nested")),
            Ok("/nested-requests".to_string())
        );
        assert!(dispatcher.href(&NavigationTarget::name("nope")).is_err());
    }
}
