//! Route match computation and first-match route selection.

use pathmatch_core::PathMatchResult;

use crate::matching::{MatchResult, Matcher};
use crate::options::{MatchInput, PathOptions};

/// A single route declaration.
///
/// A route either carries a match computed for it by an enclosing
/// [`Switch`], or computes its own from its options and the parent match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    /// The route's pattern and flags.
    pub options: PathOptions,
    /// A match already computed by a [`Switch`].
    pub computed_match: Option<MatchResult>,
    /// A pathname to match instead of the current one.
    pub location: Option<String>,
}

impl Route {
    /// Creates a route from a pattern or option record.
    pub fn new(input: impl Into<MatchInput>) -> Self {
        Self {
            options: input.into().into(),
            ..Self::default()
        }
    }

    /// Attaches a match computed elsewhere.
    #[must_use]
    pub fn with_computed_match(mut self, computed: MatchResult) -> Self {
        self.computed_match = Some(computed);
        self
    }

    /// Matches against `pathname` instead of the router's current pathname.
    #[must_use]
    pub fn with_location(mut self, pathname: impl Into<String>) -> Self {
        self.location = Some(pathname.into());
        self
    }

    /// Returns the route's match for `pathname`.
    ///
    /// A precomputed match wins; otherwise the route's own options are matched
    /// against its location (or `pathname`) with `parent` as the fallback for a
    /// pathless route.
    pub fn compute_match(
        &self,
        matcher: &Matcher<'_>,
        pathname: &str,
        parent: Option<&MatchResult>,
    ) -> PathMatchResult<Option<MatchResult>> {
        if let Some(computed) = &self.computed_match {
            return Ok(Some(computed.clone()));
        }
        let pathname = self.location.as_deref().unwrap_or(pathname);
        matcher.match_path(pathname, &self.options, parent)
    }
}

/// An ordered list of routes of which at most one is selected.
///
/// Each entry pairs match options with a caller-defined value (a handler, a
/// view name, a [`Redirect`](crate::Redirect)). Entries are tried in order and
/// the first that matches wins.
///
/// # Examples
///
/// ```
/// use pathmatch_router::{Matcher, PathOptions, Switch};
///
/// let switch = Switch::new()
///     .route(PathOptions::new("/").exact(true), "home")
///     .route("/users/:id", "user")
///     .route(PathOptions::pathless(), "not found");
///
/// let matcher = Matcher::default();
/// let (name, m) = switch.first_match(&matcher, "/users/3", None).unwrap().unwrap();
/// assert_eq!(*name, "user");
/// assert_eq!(m.params.get("id"), Some("3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Switch<T> {
    entries: Vec<(PathOptions, T)>,
}

impl<T> Switch<T> {
    /// Creates an empty switch.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry and returns the switch.
    #[must_use]
    pub fn route(mut self, input: impl Into<MatchInput>, value: T) -> Self {
        self.push(input, value);
        self
    }

    /// Appends an entry.
    pub fn push(&mut self, input: impl Into<MatchInput>, value: T) {
        self.entries.push((input.into().into(), value));
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &(PathOptions, T)> {
        self.entries.iter()
    }

    /// Returns the first entry that matches `pathname`, with its match.
    ///
    /// A pathless entry inherits `parent`, so it matches whenever a parent
    /// match exists. Returns `Ok(None)` if no entry matches.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first pattern compilation error.
    pub fn first_match(
        &self,
        matcher: &Matcher<'_>,
        pathname: &str,
        parent: Option<&MatchResult>,
    ) -> PathMatchResult<Option<(&T, MatchResult)>> {
        for (options, value) in &self.entries {
            if let Some(found) = matcher.match_path(pathname, options, parent)? {
                tracing::debug!(pathname, path = ?options.path, "switch selected route");
                return Ok(Some((value, found)));
            }
        }
        Ok(None)
    }
}

impl<T> Default for Switch<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(PathOptions, T)> for Switch<T> {
    fn from_iter<I: IntoIterator<Item = (PathOptions, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
