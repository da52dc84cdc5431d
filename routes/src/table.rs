//! ==============================================================================
//! table.rs - the static route table
//! ==============================================================================
//!
//! the table is built once at startup and never mutated afterwards. views are
//! referenced by an opaque ViewId; the host application decides what each id
//! renders.
//!
//! matching is exact: no wildcards, parameters or nested paths.
//!
//! ==============================================================================

use std::collections::HashSet;
use std::fmt;

use crate::error::TableError;
use crate::location::strip_query;

// ==============================================================================
// types
// ==============================================================================

/// identifies the page a route renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    /// single GET, the most common use case
    MostCommonUseCase,
    /// several urls fetched concurrently
    MultiUrlExample,
    /// a request that depends on the result of another
    NestedRequests,
    /// POST with a json body
    LetsPost,
    /// request that is expected to fail
    LetsOccurAnError,
}

impl ViewId {
    /// human readable page title
    pub fn title(self) -> &'static str {
        match self {
            ViewId::MostCommonUseCase => "Most Common Use Case",
            ViewId::MultiUrlExample => "Multi URL Example",
            ViewId::NestedRequests => "Nested Requests",
            ViewId::LetsPost => "Let's POST",
            ViewId::LetsOccurAnError => "Let's Occur an Error",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// binding from a url path to a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDefinition {
    /// symbolic name used for programmatic navigation
    pub name: &'static str,
    /// exact path this route answers to
    pub path: &'static str,
    /// what to render when the path matches
    pub view: ViewId,
}

impl RouteDefinition {
    pub const fn new(name: &'static str, path: &'static str, view: ViewId) -> Self {
        Self { name, path, view }
    }
}

/// outcome of looking a path up in the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    Matched(&'a RouteDefinition),
    NotFound { path: String },
}

impl<'a> Resolution<'a> {
    pub fn route(&self) -> Option<&'a RouteDefinition> {
        match self {
            Resolution::Matched(route) => Some(*route),
            Resolution::NotFound { .. } => None,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Resolution::Matched(_))
    }
}

/// ordered, immutable list of route definitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteDefinition>,
}

// ==============================================================================
// construction
// ==============================================================================

const DEMO_ROUTES: [RouteDefinition; 5] = [
    RouteDefinition::new("common", "/", ViewId::MostCommonUseCase),
    RouteDefinition::new("multi-urls", "/multi-url-example", ViewId::MultiUrlExample),
    RouteDefinition::new("nested", "/nested-requests", ViewId::NestedRequests),
    RouteDefinition::new("post", "/lets-post", ViewId::LetsPost),
    RouteDefinition::new("error", "/lets-occur-an-error", ViewId::LetsOccurAnError),
];

impl RouteTable {
    /// build a table from arbitrary definitions, rejecting any integrity violation
    pub fn new(routes: Vec<RouteDefinition>) -> Result<Self, TableError> {
        let table = Self { routes };
        table.validate()?;
        Ok(table)
    }

    /// the five example routes of the demo app, in navigation order
    ///
    /// the list is a literal, so a broken entry is an authoring bug caught by
    /// `validate()` in tests and at startup rather than something to recover from.
    pub fn demo() -> Self {
        Self {
            routes: DEMO_ROUTES.to_vec(),
        }
    }

    /// table-integrity check; reports the first violation found
    pub fn validate(&self) -> Result<(), TableError> {
        let mut names = HashSet::new();
        let mut paths = HashSet::new();

        for route in &self.routes {
            check_path(route.path)?;

            if !names.insert(route.name) {
                return Err(TableError::DuplicateName(route.name.to_string()));
            }
            if !paths.insert(route.path) {
                return Err(TableError::DuplicatePath(route.path.to_string()));
            }
        }

        if !paths.contains("/") {
            return Err(TableError::MissingRoot);
        }

        Ok(())
    }

    // ==========================================================================
    // lookup
    // ==========================================================================

    /// select the route whose path matches exactly, ignoring any query or fragment
    pub fn resolve(&self, path: &str) -> Resolution<'_> {
        let path = strip_query(path);
        match self.routes.iter().find(|route| route.path == path) {
            Some(route) => Resolution::Matched(route),
            None => Resolution::NotFound {
                path: path.to_string(),
            },
        }
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteDefinition> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// the landing route
    pub fn root(&self) -> Option<&RouteDefinition> {
        self.routes.iter().find(|route| route.path == "/")
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDefinition> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a RouteDefinition;
    type IntoIter = std::slice::Iter<'a, RouteDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

/// syntactic check for a static path pattern
fn check_path(path: &str) -> Result<(), TableError> {
    let invalid = |reason| TableError::InvalidPath {
        path: path.to_string(),
        reason,
    };

    if !path.starts_with('/') {
        return Err(invalid("must start with `/`"));
    }
    if path.contains("//") {
        return Err(invalid("contains an empty segment"));
    }
    if path.contains(['?', '#']) {
        return Err(invalid("must not carry a query or fragment"));
    }
    if path.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain whitespace"));
    }

    Ok(())
}

// ==============================================================================
// tests
// ==============================================================================
