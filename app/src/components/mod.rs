//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod header;
mod nav;
mod not_found;
mod result;

pub use header::{page_title, Header};
pub use nav::RouteNav;
pub use not_found::NotFound;
pub use result::{ErrorResult, Spinner};
