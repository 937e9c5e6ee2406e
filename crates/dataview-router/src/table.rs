// File: src/table.rs
// Purpose: Immutable route table: validation, indexing, resolution and URL generation

use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::config::RoutingConfig;
use crate::path::{normalize_path, segments, strip_base, Location};
use crate::route::matcher::match_segments;
use crate::route::{parse_child_pattern, parse_pattern, ParsedPattern, Route, Segment};
use crate::{Params, RouteError};

/// One flattened declaration, independent of the view type
#[derive(Debug, Clone)]
struct Entry {
    parsed: ParsedPattern,
    name: Option<String>,
    /// Index path into the declaration tree, outermost first
    tree_path: Vec<usize>,
    /// Entry indices from the outermost ancestor down to this entry
    lineage: Vec<usize>,
    is_layout: bool,
}

/// A read-only view of one declared route with its full pattern
#[derive(Debug)]
pub struct RouteEntry<'a, V> {
    /// Full pattern including ancestors, e.g. `/mainpage/upload`
    pub pattern: &'a str,
    pub name: Option<&'a str>,
    /// Nesting depth: 0 for top-level routes
    pub depth: usize,
    pub component: &'a V,
    pub is_layout: bool,
    pub params: &'a [String],
    pub optional_params: &'a [String],
}

/// One level of an active route chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedRoute<V> {
    pub pattern: String,
    pub name: Option<String>,
    pub component: V,
    pub is_layout: bool,
}

/// Result of resolving a location against the table
///
/// `matched` holds one route per nesting depth, outermost layout first, so
/// each layout has exactly one active child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch<V> {
    /// Normalized path relative to the base path
    pub path: String,
    pub params: Params,
    pub query: Params,
    pub hash: Option<String>,
    pub matched: Vec<MatchedRoute<V>>,
}

impl<V> RouteMatch<V> {
    /// The innermost active route
    pub fn leaf(&self) -> Option<&MatchedRoute<V>> {
        self.matched.last()
    }

    /// Name of the innermost active route
    pub fn name(&self) -> Option<&str> {
        self.leaf().and_then(|route| route.name.as_deref())
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// Layouts wrapping the leaf, outermost first
    pub fn layouts(&self) -> &[MatchedRoute<V>] {
        match self.matched.split_last() {
            Some((_, layouts)) => layouts,
            None => &[],
        }
    }

    /// True when a layout matched on its own and no child is active
    pub fn is_layout_only(&self) -> bool {
        self.leaf().map(|route| route.is_layout).unwrap_or(false)
    }

    /// True when both matches land on the same routes with the same params,
    /// query and hash, however the path was spelled
    pub fn is_same_location(&self, other: &RouteMatch<V>) -> bool {
        self.params == other.params
            && self.query == other.query
            && self.hash == other.hash
            && self.matched.len() == other.matched.len()
            && self.matched.iter().zip(&other.matched).all(|(a, b)| a.pattern == b.pattern)
    }

    /// Full location string: path, query and hash
    pub fn full_path(&self) -> String {
        let mut full = self.path.clone();
        if !self.query.is_empty() {
            let pairs: Vec<String> = self
                .query
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect();
            full.push('?');
            full.push_str(&pairs.join("&"));
        }
        if let Some(hash) = &self.hash {
            full.push('#');
            full.push_str(hash);
        }
        full
    }
}

/// The application's route table
///
/// Built once from a declaration tree and consulted read-only afterwards.
/// Construction validates the tree: unique names, absolute top-level paths,
/// relative child paths, well-formed segments and unique parameter names
/// along every parent/child chain.
///
/// # Examples
///
/// ```
/// use dataview_router::{Route, RouteTable};
///
/// let table = RouteTable::new(vec![
///     Route::new("/login", "LoginPage").with_name("Login"),
///     Route::new("/mainpage", "MainPage").with_children([
///         Route::new("DataAnalysis/Clean/:id?", "Clean").with_name("Clean"),
///     ]),
/// ])
/// .unwrap();
///
/// let m = table.resolve("/mainpage/DataAnalysis/Clean/42").unwrap();
/// assert_eq!(m.name(), Some("Clean"));
/// assert_eq!(m.param("id"), Some("42"));
/// assert_eq!(m.matched.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
    /// Declaration (pre-)order
    entries: Vec<Entry>,
    /// Entry indices in matching order
    match_order: Vec<usize>,
    names: HashMap<String, usize>,
    case_insensitive: bool,
    base_path: Option<String>,
}

impl<V> RouteTable<V> {
    /// Validates and indexes a declaration tree (case-sensitive, no base path)
    pub fn new(routes: Vec<Route<V>>) -> Result<Self, RouteError> {
        let mut entries = Vec::new();
        for (idx, route) in routes.iter().enumerate() {
            flatten(route, None, vec![idx], &[], &mut entries)?;
        }

        let names = index_names(&entries)?;
        let match_order = match_order(&entries);

        let table = Self {
            routes,
            entries,
            match_order,
            names,
            case_insensitive: false,
            base_path: None,
        };
        table.warn_shadowed();

        debug!(
            "Route table built: {} routes, {} named",
            table.entries.len(),
            table.names.len()
        );
        Ok(table)
    }

    // ========================================================================
    // Functional Builder Methods
    // ========================================================================

    pub fn with_case_sensitivity(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Serves the table under a base path like `/app`; `/` or empty means none
    pub fn with_base_path(mut self, base: impl Into<String>) -> Self {
        let base = base.into();
        let normalized = normalize_path(&base).into_owned();
        self.base_path = (normalized != "/").then_some(normalized);
        self
    }

    pub fn with_config(self, config: &RoutingConfig) -> Self {
        let table = self.with_case_sensitivity(config.case_insensitive);
        match &config.base_path {
            Some(base) => table.with_base_path(base.as_str()),
            None => table,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The declaration tree as given
    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn base_path(&self) -> Option<&str> {
        self.base_path.as_deref()
    }

    /// Every declared route in declaration order, parents before children
    pub fn entries(&self) -> impl Iterator<Item = RouteEntry<'_, V>> {
        (0..self.entries.len()).map(move |idx| self.entry(idx))
    }

    /// Looks up a route by its unique name
    pub fn by_name(&self, name: &str) -> Option<RouteEntry<'_, V>> {
        self.names.get(name).map(|&idx| self.entry(idx))
    }

    /// Names of all named routes in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|entry| entry.name.as_deref())
    }

    fn entry(&self, idx: usize) -> RouteEntry<'_, V> {
        let entry = &self.entries[idx];
        RouteEntry {
            pattern: &entry.parsed.pattern,
            name: entry.name.as_deref(),
            depth: entry.lineage.len() - 1,
            component: &self.route_at(&entry.tree_path).component,
            is_layout: entry.is_layout,
            params: &entry.parsed.params,
            optional_params: &entry.parsed.optional_params,
        }
    }

    fn route_at(&self, tree_path: &[usize]) -> &Route<V> {
        let root = &self.routes[tree_path[0]];
        tree_path[1..]
            .iter()
            .fold(root, |route, &child| &route.children[child])
    }

    /// Same table with every view reference mapped
    pub fn map_components<U, F>(&self, f: F) -> RouteTable<U>
    where
        F: Fn(&V) -> U,
    {
        RouteTable {
            routes: self.routes.iter().map(|route| route.map_component(&f)).collect(),
            entries: self.entries.clone(),
            match_order: self.match_order.clone(),
            names: self.names.clone(),
            case_insensitive: self.case_insensitive,
            base_path: self.base_path.clone(),
        }
    }

    // ========================================================================
    // URL Generation
    // ========================================================================

    /// Builds the location of a named route
    ///
    /// Absent optional parameters drop their segment; values are percent-encoded.
    ///
    /// ```
    /// use dataview_router::{Params, Route, RouteTable};
    ///
    /// let table = RouteTable::new(vec![
    ///     Route::new("/visualize/:id?", ()).with_name("Visualize"),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(table.url_for("Visualize", &Params::new()).unwrap(), "/visualize");
    /// assert_eq!(
    ///     table.url_for("Visualize", &Params::new().with("id", "a b")).unwrap(),
    ///     "/visualize/a%20b"
    /// );
    /// ```
    pub fn url_for(&self, name: &str, params: &Params) -> Result<String, RouteError> {
        let idx = self.name_index(name)?;
        let path = generate_path(name, &self.entries[idx].parsed.segments, params)?;

        Ok(match &self.base_path {
            Some(base) if path == "/" => base.clone(),
            Some(base) => format!("{}{}", base, path),
            None => path,
        })
    }

    fn name_index(&self, name: &str) -> Result<usize, RouteError> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| RouteError::UnknownName(name.to_string()))
    }
}

impl<V: Clone> RouteTable<V> {
    /// Resolves a location (path with optional `?query` and `#hash`)
    ///
    /// Returns `None` when nothing matches; no fallback route is assumed.
    pub fn resolve(&self, location: &str) -> Option<RouteMatch<V>> {
        let loc = Location::parse(location);
        let normalized = normalize_path(loc.path);

        let relative: Cow<'_, str> = match &self.base_path {
            Some(base) => match strip_base(&normalized, base, self.case_insensitive) {
                Some(stripped) => stripped,
                None => {
                    debug!("Path {} is outside base path {}", normalized, base);
                    return None;
                }
            },
            None => Cow::Borrowed(normalized.as_ref()),
        };

        let path_segments = segments(&relative);
        let found = self.match_order.iter().find_map(|&idx| {
            match_segments(&self.entries[idx].parsed.segments, &path_segments, self.case_insensitive)
                .map(|params| (idx, params))
        });

        match found {
            Some((idx, params)) => {
                debug!("Matched {} -> {}", relative, self.entries[idx].parsed.pattern);
                Some(self.build_match(idx, relative.into_owned(), params, &loc))
            }
            None => {
                debug!("No route matches {}", relative);
                None
            }
        }
    }

    /// Resolves a named route directly, without re-matching its URL
    pub fn resolve_named(&self, name: &str, params: &Params) -> Result<RouteMatch<V>, RouteError> {
        let idx = self.name_index(name)?;
        let entry = &self.entries[idx];
        let path = generate_path(name, &entry.parsed.segments, params)?;

        // Same params a resolve of the generated path would capture
        let params: Params = params
            .iter()
            .filter(|(key, _)| entry.parsed.params.iter().any(|p| p.as_str() == *key))
            .filter(|(key, value)| {
                !value.is_empty() || !entry.parsed.optional_params.iter().any(|p| p.as_str() == *key)
            })
            .collect();

        Ok(self.build_match(idx, path, params, &Location::parse("")))
    }

    fn build_match(&self, idx: usize, path: String, params: Params, loc: &Location<'_>) -> RouteMatch<V> {
        let matched = self.entries[idx]
            .lineage
            .iter()
            .map(|&ancestor| {
                let entry = &self.entries[ancestor];
                MatchedRoute {
                    pattern: entry.parsed.pattern.clone(),
                    name: entry.name.clone(),
                    component: self.route_at(&entry.tree_path).component.clone(),
                    is_layout: entry.is_layout,
                }
            })
            .collect();

        RouteMatch {
            path,
            params,
            query: loc.query_params(),
            hash: loc.hash.map(str::to_string),
            matched,
        }
    }
}

impl<V> RouteTable<V> {
    /// Logs routes that can never match because an identical pattern precedes them
    fn warn_shadowed(&self) {
        for (pos, &idx) in self.match_order.iter().enumerate() {
            let entry = &self.entries[idx];
            let shadowed_by = self.match_order[..pos].iter().find(|&&earlier| {
                let other = &self.entries[earlier];
                same_segments(&other.parsed.segments, &entry.parsed.segments, self.case_insensitive)
                    && !entry.lineage.contains(&earlier)
                    && !other.lineage.contains(&idx)
            });

            if let Some(&earlier) = shadowed_by {
                warn!(
                    "Route {} is shadowed by an earlier declaration of {}",
                    entry.parsed.pattern, self.entries[earlier].parsed.pattern
                );
            }
        }
    }
}

/// Depth-first flattening into declaration (pre-)order
fn flatten<V>(
    route: &Route<V>,
    parent: Option<&Entry>,
    tree_path: Vec<usize>,
    parent_lineage: &[usize],
    entries: &mut Vec<Entry>,
) -> Result<(), RouteError> {
    let parsed = match parent {
        None if !route.path.starts_with('/') => {
            return Err(RouteError::RelativeTopLevel {
                path: route.path.clone(),
            })
        }
        None => parse_pattern(&route.path)?,
        Some(parent) if route.path.starts_with('/') => {
            return Err(RouteError::AbsoluteChild {
                parent: parent.parsed.pattern.clone(),
                path: route.path.clone(),
            })
        }
        Some(parent) => parse_child_pattern(&parent.parsed, &route.path)?,
    };

    let idx = entries.len();
    let mut lineage = parent_lineage.to_vec();
    lineage.push(idx);

    entries.push(Entry {
        parsed,
        name: route.name.clone(),
        tree_path: tree_path.clone(),
        lineage: lineage.clone(),
        is_layout: route.is_layout(),
    });

    for (child_idx, child) in route.children.iter().enumerate() {
        let mut child_path = tree_path.clone();
        child_path.push(child_idx);
        let parent_entry = entries[idx].clone();
        flatten(child, Some(&parent_entry), child_path, &lineage, entries)?;
    }

    Ok(())
}

/// Orders entries for matching
///
/// Each entry goes after every placed entry of equal or better priority, but
/// never after one of its own ancestors: a layout is only tried once all of
/// its descendants have failed, whatever their priority.
fn match_order(entries: &[Entry]) -> Vec<usize> {
    entries.iter().enumerate().fold(Vec::with_capacity(entries.len()), |mut order, (idx, entry)| {
        let priority = entry.parsed.priority();
        let ancestors = &entry.lineage[..entry.lineage.len() - 1];

        let by_priority = order
            .iter()
            .position(|&placed| entries[placed].parsed.priority() > priority)
            .unwrap_or(order.len());
        let before_ancestor = order
            .iter()
            .position(|placed| ancestors.contains(placed))
            .unwrap_or(order.len());

        order.insert(by_priority.min(before_ancestor), idx);
        order
    })
}

/// Indexes names, rejecting empty and duplicate ones
fn index_names(entries: &[Entry]) -> Result<HashMap<String, usize>, RouteError> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(idx, entry)| entry.name.as_ref().map(|name| (idx, name)))
        .try_fold(HashMap::new(), |mut names, (idx, name)| {
            if name.trim().is_empty() {
                return Err(RouteError::EmptyName {
                    pattern: entries[idx].parsed.pattern.clone(),
                });
            }

            if let Some(&first) = names.get(name) {
                let first_entry: &Entry = &entries[first];
                return Err(RouteError::DuplicateName {
                    name: name.clone(),
                    first: first_entry.parsed.pattern.clone(),
                    second: entries[idx].parsed.pattern.clone(),
                });
            }

            names.insert(name.clone(), idx);
            Ok(names)
        })
}

/// Substitutes params into a pattern's segments
fn generate_path(name: &str, pattern: &[Segment], params: &Params) -> Result<String, RouteError> {
    let parts = pattern
        .iter()
        .filter_map(|segment| match segment {
            Segment::Static(text) => Some(Ok(text.clone())),
            Segment::Param(param) => Some(
                params
                    .get(param)
                    .map(|value| urlencoding::encode(value).into_owned())
                    .ok_or_else(|| RouteError::MissingParam {
                        name: name.to_string(),
                        param: param.clone(),
                    }),
            ),
            Segment::OptionalParam(param) => params
                .get(param)
                .filter(|value| !value.is_empty())
                .map(|value| Ok(urlencoding::encode(value).into_owned())),
        })
        .collect::<Result<Vec<String>, RouteError>>()?;

    Ok(format!("/{}", parts.join("/")))
}

fn same_segments(a: &[Segment], b: &[Segment], case_insensitive: bool) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|pair| match pair {
            (Segment::Static(x), Segment::Static(y)) if case_insensitive => x.eq_ignore_ascii_case(y),
            (x, y) => x == y,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn shell() -> Vec<Route<&'static str>> {
        vec![
            Route::new("/login", "LoginPage").with_name("Login"),
            Route::new("/mainpage", "MainPage").with_children([
                Route::new("upload", "FileUploadPage").with_name("FileUpload"),
                Route::new("DataAnalysis/Clean/:id?", "Clean").with_name("Clean"),
            ]),
        ]
    }

    #[test]
    fn test_entries_in_declaration_order() {
        let table = RouteTable::new(shell()).unwrap();
        let patterns: Vec<(&str, usize)> = table.entries().map(|e| (e.pattern, e.depth)).collect();
        assert_eq!(
            patterns,
            vec![
                ("/login", 0),
                ("/mainpage", 0),
                ("/mainpage/upload", 1),
                ("/mainpage/DataAnalysis/Clean/:id?", 1),
            ]
        );
    }

    #[test]
    fn test_match_order_children_before_parent() {
        let table = RouteTable::new(vec![Route::new("/mainpage", "MainPage")
            .with_child(Route::new("", "Overview").with_name("Overview"))])
        .unwrap();

        let m = table.resolve("/mainpage").unwrap();
        assert_eq!(m.name(), Some("Overview"));
        assert_eq!(m.matched.len(), 2);
        assert!(!m.is_layout_only());
    }

    #[test]
    fn test_optional_child_claims_static_parent_path() {
        let table = RouteTable::new(vec![Route::new("/mainpage", "MainPage")
            .with_child(Route::new(":tab?", "Tab").with_name("Tab"))])
        .unwrap();

        let m = table.resolve("/mainpage").unwrap();
        assert_eq!(m.name(), Some("Tab"));
        assert_eq!(m.param("tab"), None);
        assert!(!m.is_layout_only());

        let m = table.resolve("/mainpage/eda").unwrap();
        assert_eq!(m.param("tab"), Some("eda"));
    }

    #[test]
    fn test_match_order_keeps_priority_among_siblings() {
        let table = RouteTable::new(vec![Route::new("/files", "Files").with_children([
            Route::new(":id", "FileDetail").with_name("FileDetail"),
            Route::new("new", "NewFile").with_name("NewFile"),
        ])])
        .unwrap();

        assert_eq!(table.resolve("/files/new").unwrap().name(), Some("NewFile"));
        assert_eq!(table.resolve("/files/12").unwrap().name(), Some("FileDetail"));
        assert!(table.resolve("/files").unwrap().is_layout_only());

        let order: Vec<&str> = table
            .match_order
            .iter()
            .map(|&idx| table.entries[idx].parsed.pattern.as_str())
            .collect();
        assert_eq!(order, vec!["/files/new", "/files/:id", "/files"]);
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = RouteTable::new(vec![Route::new("/login", ()).with_name("  ")]).unwrap_err();
        assert_eq!(
            err,
            RouteError::EmptyName {
                pattern: "/login".to_string()
            }
        );
    }

    #[test]
    fn test_generate_path_missing_param() {
        let parsed = parse_pattern("/files/:id").unwrap();
        let err = generate_path("File", &parsed.segments, &Params::new()).unwrap_err();
        assert_eq!(
            err,
            RouteError::MissingParam {
                name: "File".to_string(),
                param: "id".to_string()
            }
        );
    }

    #[test]
    fn test_base_path_round_trip() {
        let table = RouteTable::new(shell()).unwrap().with_base_path("/app/");
        assert_eq!(table.base_path(), Some("/app"));

        let url = table.url_for("FileUpload", &Params::new()).unwrap();
        assert_eq!(url, "/app/mainpage/upload");

        let m = table.resolve(&url).unwrap();
        assert_eq!(m.path, "/mainpage/upload");
        assert!(table.resolve("/mainpage/upload").is_none());
    }

    #[test]
    fn test_root_base_path_is_ignored() {
        let table = RouteTable::new(shell()).unwrap().with_base_path("/");
        assert_eq!(table.base_path(), None);
    }

    #[test]
    fn test_full_path() {
        let table = RouteTable::new(shell()).unwrap();
        let m = table.resolve("/mainpage/DataAnalysis/Clean/9?step=dedupe#log").unwrap();
        assert_eq!(m.full_path(), "/mainpage/DataAnalysis/Clean/9?step=dedupe#log");
    }

    #[test]
    fn test_same_segments() {
        let a = parse_pattern("/Login").unwrap();
        let b = parse_pattern("/login").unwrap();
        assert!(same_segments(&a.segments, &b.segments, true));
        assert!(!same_segments(&a.segments, &b.segments, false));
    }
}
