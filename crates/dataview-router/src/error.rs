// File: src/error.rs
// Purpose: Error types for route table construction and navigation

use thiserror::Error;

/// Errors raised while building a route table or generating URLs from it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Two routes declare the same name
    #[error("route name `{name}` is declared by both `{first}` and `{second}`")]
    DuplicateName {
        name: String,
        first: String,
        second: String,
    },

    /// A route name is empty or whitespace
    #[error("route `{pattern}` has an empty name")]
    EmptyName { pattern: String },

    /// A parameter name appears twice along one parent/child chain
    #[error("parameter `{param}` appears more than once in `{pattern}`")]
    DuplicateParam { pattern: String, param: String },

    /// A segment that looks dynamic but cannot be parsed
    #[error("invalid segment `{segment}` in `{pattern}`")]
    InvalidSegment { pattern: String, segment: String },

    /// Top-level routes must be absolute
    #[error("top-level route `{path}` must start with `/`")]
    RelativeTopLevel { path: String },

    /// Child routes are relative to their parent
    #[error("child route `{path}` of `{parent}` must not start with `/`")]
    AbsoluteChild { parent: String, path: String },

    /// No route carries the requested name
    #[error("no route named `{0}`")]
    UnknownName(String),

    /// URL generation was asked for a route without one of its required params
    #[error("route `{name}` requires parameter `{param}`")]
    MissingParam { name: String, param: String },
}

/// Errors reported by the navigator; history is left unchanged when one occurs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The requested location matches no declared route
    #[error("no route matches `{0}`")]
    NotFound(String),

    /// The requested location is already the current one
    #[error("already at `{0}`")]
    Duplicated(String),

    /// back/forward/go moved past either end of the history
    #[error("history has no entry at offset {0}")]
    OutOfRange(isize),

    #[error(transparent)]
    Route(#[from] RouteError),
}
