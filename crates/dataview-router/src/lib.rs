//! # Dataview Router
//!
//! Client-side route table for the Dataview single-page application:
//! - Static routes (`/login`)
//! - Dynamic parameters (`/files/:id`)
//! - Optional parameters (`/mainpage/DataAnalysis/Clean/:id?`)
//! - Nested routes rendered inside a parent layout's child slot
//! - Named routes for programmatic navigation and URL generation
//! - An in-memory history that reports which views mount and unmount
//!
//! ## Matching
//!
//! Routes are tried most specific first (static before optional before
//! required params), keeping declaration order among equals. Children are
//! tried before their parent, so a layout only matches on its own when no
//! child claims the path. An optional parameter takes zero or one segment and
//! is left out of [`Params`] when absent. Unmatched paths resolve to `None`;
//! the table declares no fallback.
//!
//! ## Path Normalization
//!
//! - Trailing slashes: `/path/` → `/path`
//! - Double slashes: `/path//to` → `/path/to`
//! - Backslashes: `\path\to` → `/path/to`
//! - `?query` and `#hash` are split off before matching
//!
//! ## Example
//!
//! ```
//! use dataview_router::{app_routes, Page};
//!
//! let table = app_routes().unwrap();
//!
//! let m = table.resolve("/mainpage/DataAnalysis/Clean").unwrap();
//! assert_eq!(m.leaf().unwrap().component, Page::Clean);
//! assert_eq!(m.param("id"), None);
//!
//! let m = table.resolve("/mainpage/DataAnalysis/Clean/42").unwrap();
//! assert_eq!(m.param("id"), Some("42"));
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod app;
pub mod config;
mod error;
mod navigator;
mod params;
pub mod path;
pub mod route;
mod table;

pub use app::{app_route_tree, app_routes, Page};
pub use config::{Config, LoggingConfig, RouteFile, RoutingConfig};
pub use error::{NavigationError, RouteError};
pub use navigator::{NavigationType, Navigator, Transition};
pub use params::Params;
pub use path::{is_valid_path, normalize_path, Location};
pub use route::{classify_segment, Route, Segment};
pub use table::{MatchedRoute, RouteEntry, RouteMatch, RouteTable};
