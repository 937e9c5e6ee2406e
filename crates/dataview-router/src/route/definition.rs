/// The declarative route entity
///
/// A `Route` binds a path pattern to a view reference and an optional unique
/// name. Routes with children act as layouts: the active child renders inside
/// the parent's single child slot.

use serde::{Deserialize, Serialize};

/// A declared route
///
/// `V` is the view reference. It is opaque to the router: the built-in
/// table uses [`crate::Page`], route files loaded from TOML use the
/// component name as a `String`.
///
/// # Examples
///
/// ```
/// use dataview_router::Route;
///
/// let shell = Route::new("/mainpage", "MainPage")
///     .with_child(Route::new("upload", "FileUploadPage").with_name("FileUpload"));
///
/// assert!(shell.is_layout());
/// assert_eq!(shell.children[0].name.as_deref(), Some("FileUpload"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route<V> {
    /// Absolute for top-level routes, relative for children
    pub path: String,

    /// Symbolic name for programmatic navigation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub component: V,

    /// Nested routes rendered inside this route's child slot
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Route<V>>,
}

impl<V> Route<V> {
    pub fn new(path: impl Into<String>, component: V) -> Self {
        Self {
            path: path.into(),
            name: None,
            component,
            children: Vec::new(),
        }
    }

    // ========================================================================
    // Functional Builder Methods
    // ========================================================================

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_child(mut self, child: Route<V>) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Route<V>>,
    {
        self.children.extend(children);
        self
    }

    /// Whether this route renders a layout with a child slot
    pub fn is_layout(&self) -> bool {
        !self.children.is_empty()
    }

    /// Maps the view reference of this route and all its descendants
    pub fn map_component<U, F>(&self, f: &F) -> Route<U>
    where
        F: Fn(&V) -> U,
    {
        Route {
            path: self.path.clone(),
            name: self.name.clone(),
            component: f(&self.component),
            children: self.children.iter().map(|child| child.map_component(f)).collect(),
        }
    }

    /// Counts this route and all its descendants
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Route::count).sum::<usize>()
    }
}
