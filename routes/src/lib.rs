//! ==============================================================================
//! lib.rs - route table and navigation core for the request examples demo
//! ==============================================================================
//!
//! purpose:
//!     the fixed table mapping url paths to example pages, plus the dispatcher
//!     that resolves the current location against it. nothing in here knows
//!     about leptos or the browser, so it builds and tests natively.
//!
//! relationships:
//!     - used by: app (builds the table at startup, renders ViewId -> page)
//!     - app provides HashHistory; MemoryHistory lives here for tests
//!
//! ==============================================================================

mod dispatcher;
mod error;
mod history;
mod location;
mod table;

pub use dispatcher::{NavigationDispatcher, NavigationTarget};
pub use error::{NavigationError, TableError};
pub use history::{History, MemoryHistory};
pub use location::{path_from_hash, strip_query};
pub use table::{Resolution, RouteDefinition, RouteTable, ViewId};
