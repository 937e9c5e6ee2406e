//! Location paths as the table sees them
//!
//! A canonical path starts with `/`, has no empty segments and no trailing
//! slash (the root `/` excepted). Everything the table matches against is
//! first brought into that form, then stripped of the configured base path
//! and split into segments.

use std::borrow::Cow;

pub mod location;
pub use location::Location;

/// True when `path` is already canonical and can be matched as-is
///
/// ```
/// use dataview_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/mainpage/DataAnalysis/EDA"));
/// assert!(!is_valid_path("mainpage"));
/// assert!(!is_valid_path("/mainpage/"));
/// assert!(!is_valid_path("/mainpage//upload"));
/// assert!(!is_valid_path("\\login"));
/// ```
pub fn is_valid_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.contains('\\')
        && (path == "/" || path[1..].split('/').all(|segment| !segment.is_empty()))
}

/// Brings a browser-supplied path into canonical form
///
/// Backslashes count as separators and empty segments are dropped, so
/// `\mainpage//upload/` becomes `/mainpage/upload`. Canonical input is
/// returned borrowed.
///
/// ```
/// use dataview_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_path("/login"), Cow::Borrowed("/login")));
/// assert_eq!(normalize_path("\\mainpage\\upload\\"), "/mainpage/upload");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let joined = path
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty())
        .fold(String::with_capacity(path.len() + 1), |mut out, segment| {
            out.push('/');
            out.push_str(segment);
            out
        });

    if joined.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(joined)
    }
}

/// Removes a base path prefix from a normalized path
///
/// The base must match whole segments: base `/app` strips `/app/login` but
/// not `/application`. Returns `None` when the path lies outside the base.
///
/// ```
/// use dataview_router::path::strip_base;
///
/// assert_eq!(strip_base("/app/login", "/app", false).as_deref(), Some("/login"));
/// assert_eq!(strip_base("/app", "/app", false).as_deref(), Some("/"));
/// assert_eq!(strip_base("/application", "/app", false), None);
/// ```
pub fn strip_base<'a>(path: &'a str, base: &str, case_insensitive: bool) -> Option<Cow<'a, str>> {
    let base = normalize_path(base);
    if base == "/" {
        return Some(Cow::Borrowed(path));
    }

    if path.len() < base.len() || !path.is_char_boundary(base.len()) {
        return None;
    }

    let (head, rest) = path.split_at(base.len());
    let head_matches = if case_insensitive {
        head.eq_ignore_ascii_case(&base)
    } else {
        head == base
    };

    match (head_matches, rest) {
        (false, _) => None,
        (true, "") => Some(Cow::Borrowed("/")),
        (true, rest) if rest.starts_with('/') => Some(Cow::Borrowed(rest)),
        _ => None,
    }
}

/// Splits a normalized path into its non-empty segments
pub fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
