//! Error types for table construction and navigation

use thiserror::Error;

/// integrity violations found while checking a route table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("route name `{0}` is registered more than once")]
    DuplicateName(String),

    #[error("route path `{0}` is registered more than once")]
    DuplicatePath(String),

    #[error("no route is registered for the landing path `/`")]
    MissingRoot,

    #[error("route path `{path}` is invalid: {reason}")]
    InvalidPath { path: String, reason: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("no route named `{0}`")]
    UnknownRoute(String),

    #[error("cannot navigate to `{0}`: paths starting with `//` leave the app")]
    InvalidPath(String),
}
