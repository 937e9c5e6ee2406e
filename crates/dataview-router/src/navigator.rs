// File: src/navigator.rs
// Purpose: In-memory navigation history that reports view mount/teardown per navigation

use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::table::{MatchedRoute, RouteMatch, RouteTable};
use crate::{NavigationError, Params};

/// How a navigation moved through the history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationType {
    /// New entry appended, forward entries discarded
    Push,
    /// Current entry overwritten
    Replace,
    /// Moved to an earlier entry
    Back,
    /// Moved to a later entry
    Forward,
}

impl fmt::Display for NavigationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationType::Push => write!(f, "push"),
            NavigationType::Replace => write!(f, "replace"),
            NavigationType::Back => write!(f, "back"),
            NavigationType::Forward => write!(f, "forward"),
        }
    }
}

/// The effect of one navigation on the mounted view chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<V> {
    pub kind: NavigationType,
    pub from: Option<RouteMatch<V>>,
    pub to: RouteMatch<V>,
    /// Views torn down, innermost first
    pub unmounted: Vec<MatchedRoute<V>>,
    /// Views mounted, outermost first
    pub mounted: Vec<MatchedRoute<V>>,
    /// Views that stay mounted but see new params or query
    pub updated: Vec<MatchedRoute<V>>,
}

impl<V: Clone> Transition<V> {
    /// Diffs two matches depth by depth
    ///
    /// The first depth whose route differs, and every depth below it, is
    /// remounted. Routes above it stay mounted.
    fn between(kind: NavigationType, from: Option<RouteMatch<V>>, to: RouteMatch<V>) -> Self {
        let previous: &[MatchedRoute<V>] = from.as_ref().map(|m| m.matched.as_slice()).unwrap_or(&[]);

        let kept = previous
            .iter()
            .zip(&to.matched)
            .take_while(|(old, new)| old.pattern == new.pattern)
            .count();

        let unmounted = previous[kept..].iter().rev().cloned().collect();
        let mounted = to.matched[kept..].to_vec();

        let inputs_changed = from
            .as_ref()
            .map(|old| old.params != to.params || old.query != to.query || old.hash != to.hash)
            .unwrap_or(false);
        let updated = if inputs_changed {
            to.matched[..kept].to_vec()
        } else {
            Vec::new()
        };

        Self {
            kind,
            from,
            to,
            unmounted,
            mounted,
            updated,
        }
    }
}

/// Single-threaded history engine over a shared route table
///
/// # Examples
///
/// ```
/// use dataview_router::{app_routes, Navigator, Page};
///
/// let mut nav = Navigator::new(app_routes().unwrap());
/// nav.push("/mainpage/DataAnalysis/Clean/1").unwrap();
///
/// let t = nav.push("/login").unwrap();
/// let torn_down: Vec<Page> = t.unmounted.iter().map(|r| r.component).collect();
/// assert_eq!(torn_down, vec![Page::Clean, Page::MainPage]);
/// assert_eq!(t.mounted[0].component, Page::Login);
///
/// nav.back().unwrap();
/// assert_eq!(nav.current().unwrap().param("id"), Some("1"));
/// ```
#[derive(Debug, Clone)]
pub struct Navigator<V> {
    table: Arc<RouteTable<V>>,
    history: Vec<RouteMatch<V>>,
    position: Option<usize>,
}

impl<V: Clone> Navigator<V> {
    pub fn new(table: Arc<RouteTable<V>>) -> Self {
        Self {
            table,
            history: Vec::new(),
            position: None,
        }
    }

    pub fn table(&self) -> &RouteTable<V> {
        &self.table
    }

    /// The active match, if any navigation has happened
    pub fn current(&self) -> Option<&RouteMatch<V>> {
        self.position.map(|pos| &self.history[pos])
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.position, Some(pos) if pos > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        matches!(self.position, Some(pos) if pos + 1 < self.history.len())
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Appends a new entry, discarding any forward entries
    pub fn push(&mut self, location: &str) -> Result<Transition<V>, NavigationError> {
        let to = self.resolve(location)?;
        self.commit(NavigationType::Push, to)
    }

    /// Overwrites the current entry (appends when history is empty)
    pub fn replace(&mut self, location: &str) -> Result<Transition<V>, NavigationError> {
        let to = self.resolve(location)?;
        self.commit(NavigationType::Replace, to)
    }

    /// Pushes a named route
    pub fn push_named(&mut self, name: &str, params: &Params) -> Result<Transition<V>, NavigationError> {
        let to = self.table.resolve_named(name, params)?;
        self.commit(NavigationType::Push, to)
    }

    pub fn back(&mut self) -> Result<Transition<V>, NavigationError> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Result<Transition<V>, NavigationError> {
        self.go(1)
    }

    /// Moves `delta` entries through the history
    ///
    /// `go(0)` is a navigation to the current location and fails as duplicated.
    pub fn go(&mut self, delta: isize) -> Result<Transition<V>, NavigationError> {
        let pos = self.position.ok_or(NavigationError::OutOfRange(delta))?;

        if delta == 0 {
            return Err(NavigationError::Duplicated(self.history[pos].full_path()));
        }

        let target = pos
            .checked_add_signed(delta)
            .filter(|&target| target < self.history.len())
            .ok_or(NavigationError::OutOfRange(delta))?;

        let kind = if delta < 0 {
            NavigationType::Back
        } else {
            NavigationType::Forward
        };

        let from = self.history[pos].clone();
        let to = self.history[target].clone();
        self.position = Some(target);

        debug!("Navigation {} {} -> {}", kind, from.full_path(), to.full_path());
        Ok(Transition::between(kind, Some(from), to))
    }

    fn resolve(&self, location: &str) -> Result<RouteMatch<V>, NavigationError> {
        self.table
            .resolve(location)
            .ok_or_else(|| NavigationError::NotFound(location.to_string()))
    }

    fn commit(&mut self, kind: NavigationType, to: RouteMatch<V>) -> Result<Transition<V>, NavigationError> {
        let from = self.current().cloned();

        if let Some(current) = &from {
            if current.is_same_location(&to) {
                trace!("Ignoring duplicated navigation to {}", current.full_path());
                return Err(NavigationError::Duplicated(current.full_path()));
            }
        }

        match (kind, self.position) {
            (NavigationType::Replace, Some(pos)) => {
                self.history[pos] = to.clone();
            }
            (_, position) => {
                let keep = position.map(|pos| pos + 1).unwrap_or(0);
                self.history.truncate(keep);
                self.history.push(to.clone());
                self.position = Some(self.history.len() - 1);
            }
        }

        debug!(
            "Navigation {} {} -> {}",
            kind,
            from.as_ref().map(|m| m.full_path()).unwrap_or_default(),
            to.full_path()
        );
        Ok(Transition::between(kind, from, to))
    }
}
