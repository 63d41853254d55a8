//! Redirect destinations computed from a match.
//!
//! A [`Redirect`] declared inside a [`Switch`](crate::Switch) receives the match
//! of its `from` pattern and can forward those parameters into its target:
//! `from = "/users/:id"` with `to = "/profile/:id"` sends `/users/7` to
//! `/profile/7`.

use serde::{Deserialize, Serialize};
use tracing::warn;

use pathmatch_core::PathMatchResult;

use crate::generate::Generator;
use crate::matching::MatchResult;
use crate::options::{MatchOptions, PathOptions};

/// A structured navigation target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    /// The path, possibly a pattern before generation.
    pub pathname: String,
    /// The query string including its leading `?`, or empty.
    pub search: String,
    /// The fragment including its leading `#`, or empty.
    pub hash: String,
    /// Opaque state carried with the navigation.
    pub state: Option<serde_json::Value>,
}

impl Location {
    /// Creates a location with only a pathname. The string is taken as is;
    /// `?` and `#` are not split out.
    pub fn from_pathname(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            ..Self::default()
        }
    }

    /// Returns `true` if both locations point at the same place with the same state.
    pub fn same_as(&self, other: &Self) -> bool {
        self == other
    }
}

/// Where a redirect sends the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Destination {
    /// A path string, possibly a pattern.
    Path(String),
    /// A structured location whose `pathname` may be a pattern.
    Location(Location),
}

impl Destination {
    /// Returns the destination as a [`Location`]. A path becomes the pathname
    /// of an otherwise empty location.
    pub fn to_location(&self) -> Location {
        match self {
            Self::Path(path) => Location::from_pathname(path.as_str()),
            Self::Location(location) => location.clone(),
        }
    }

    /// Returns `true` if both destinations name the same location.
    ///
    /// The comparison is structural: a path equals a location only when the
    /// location has no search, hash or state and the same pathname.
    pub fn same_location(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Path(a), Self::Path(b)) => a == b,
            (Self::Location(a), Self::Location(b)) => a.same_as(b),
            (Self::Path(path), Self::Location(location))
            | (Self::Location(location), Self::Path(path)) => {
                location.same_as(&Location::from_pathname(path.as_str()))
            }
        }
    }
}

impl From<&str> for Destination {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<String> for Destination {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl From<Location> for Destination {
    fn from(location: Location) -> Self {
        Self::Location(location)
    }
}

/// How a redirect updates history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Navigation {
    /// Add a new history entry.
    Push,
    /// Replace the current history entry.
    Replace,
}

/// A declarative redirect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    /// The pattern this redirect applies to inside a switch.
    #[serde(default)]
    pub from: Option<String>,
    /// The target, whose patterns are filled from the match of `from`.
    pub to: Destination,
    /// Push a new history entry instead of replacing the current one.
    #[serde(default)]
    pub push: bool,
    /// Flags used when matching `from`.
    #[serde(flatten)]
    pub options: MatchOptions,
}

impl Redirect {
    /// Creates a replacing redirect to `to` with no `from` pattern.
    pub fn new(to: impl Into<Destination>) -> Self {
        Self {
            from: None,
            to: to.into(),
            push: false,
            options: MatchOptions::default(),
        }
    }

    /// Sets the `from` pattern.
    #[must_use]
    pub fn from_path(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Sets whether the redirect pushes.
    #[must_use]
    pub const fn push(mut self, push: bool) -> Self {
        self.push = push;
        self
    }

    /// Sets the match flags for `from`.
    #[must_use]
    pub const fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the history operation this redirect performs.
    pub const fn navigation(&self) -> Navigation {
        if self.push {
            Navigation::Push
        } else {
            Navigation::Replace
        }
    }

    /// Returns the options a switch matches this redirect with, using `from`
    /// as the path.
    pub fn as_path_options(&self) -> PathOptions {
        PathOptions {
            path: self.from.clone(),
            ..PathOptions::default()
        }
        .with_options(self.options)
    }

    /// Computes the destination using the process-wide template cache.
    ///
    /// See [`Redirect::compute_to_with`].
    pub fn compute_to(&self, computed_match: Option<&MatchResult>) -> PathMatchResult<Destination> {
        self.compute_to_with(&Generator::default(), computed_match)
    }

    /// Computes the destination for a match.
    ///
    /// Without a match, `to` is returned unchanged. With one, a path target is
    /// generated from the match params; for a location only the pathname is
    /// generated and the other fields are kept.
    ///
    /// # Errors
    ///
    /// Returns the generator's error if the target needs a parameter the match
    /// does not provide or cannot be compiled.
    pub fn compute_to_with(
        &self,
        generator: &Generator<'_>,
        computed_match: Option<&MatchResult>,
    ) -> PathMatchResult<Destination> {
        let Some(found) = computed_match else {
            return Ok(self.to.clone());
        };

        match &self.to {
            Destination::Path(path) => generator
                .generate_path(path, &found.params)
                .map(Destination::Path),
            Destination::Location(location) => {
                let pathname = generator.generate_path(&location.pathname, &found.params)?;
                Ok(Destination::Location(Location {
                    pathname,
                    ..location.clone()
                }))
            }
        }
    }

    /// Returns `true` if this redirect should run after `previous` ran.
    ///
    /// Redirecting to the location the previous redirect already targeted is
    /// skipped and logged.
    pub fn should_perform_after(&self, previous: &Self) -> bool {
        if previous.to.same_location(&self.to) {
            let next = self.to.to_location();
            warn!(
                pathname = %next.pathname,
                search = %next.search,
                "redirect to the route already being visited was skipped"
            );
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::TemplateCache;
    use pathmatch_core::Params;

    fn matched(params: &[(&str, &str)]) -> MatchResult {
        MatchResult {
            path: "/users/:id".into(),
            url: "/users/7".into(),
            is_exact: true,
            params: params.iter().copied().collect::<Params>(),
        }
    }

    #[test]
    fn test_compute_to_without_match_is_unchanged() {
        let redirect = Redirect::new("/profile/:id");
        assert_eq!(
            redirect.compute_to(None).unwrap(),
            Destination::Path("/profile/:id".into())
        );
    }

    #[test]
    fn test_compute_to_generates_path() {
        let cache = TemplateCache::new(10);
        let generator = Generator::new(&cache);
        let redirect = Redirect::new("/profile/:id").from_path("/users/:id");
        let to = redirect
            .compute_to_with(&generator, Some(&matched(&[("id", "7")])))
            .unwrap();
        assert_eq!(to, Destination::Path("/profile/7".into()));
    }

    #[test]
    fn test_compute_to_location_keeps_other_fields() {
        let to = Location {
            pathname: "/profile/:id".into(),
            search: "?tab=posts".into(),
            hash: "#top".into(),
            state: Some(serde_json::json!({"from": "users"})),
        };
        let redirect = Redirect::new(to.clone());
        let got = redirect.compute_to(Some(&matched(&[("id", "7")]))).unwrap();
        assert_eq!(
            got,
            Destination::Location(Location {
                pathname: "/profile/7".into(),
                ..to
            })
        );
    }

    #[test]
    fn test_compute_to_missing_param() {
        let redirect = Redirect::new("/teams/:team");
        let err = redirect.compute_to(Some(&matched(&[("id", "7")]))).unwrap_err();
        assert_eq!(err.code(), "parameter_missing");
    }

    #[test]
    fn test_as_path_options() {
        let flags = MatchOptions {
            exact: true,
            ..MatchOptions::default()
        };
        let redirect = Redirect::new("/b").from_path("/a").with_options(flags);
        assert_eq!(redirect.as_path_options(), PathOptions::new("/a").exact(true));
        assert_eq!(Redirect::new("/b").as_path_options().path, None);
    }

    #[test]
    fn test_navigation() {
        assert_eq!(Redirect::new("/").navigation(), Navigation::Replace);
        assert_eq!(Redirect::new("/").push(true).navigation(), Navigation::Push);
    }

    #[test]
    fn test_from_pathname_does_not_split() {
        let location = Location::from_pathname("/a?x=1#top");
        assert_eq!(location.pathname, "/a?x=1#top");
        assert!(location.search.is_empty());
        assert!(location.hash.is_empty());
        assert_eq!(Destination::from("/a?x=1#top").to_location(), location);
    }

    #[test]
    fn test_same_location_across_forms() {
        let path = Destination::from("/a");
        let bare = Destination::from(Location::from_pathname("/a"));
        let with_search = Destination::from(Location {
            pathname: "/a".into(),
            search: "?x=1".into(),
            ..Location::default()
        });
        assert!(path.same_location(&bare));
        assert!(bare.same_location(&path));
        assert!(!path.same_location(&with_search));
        assert!(!Destination::from("/a?x=1").same_location(&with_search));
        assert!(!path.same_location(&Destination::from("/b")));
    }

    #[test]
    fn test_should_perform_after() {
        let previous = Redirect::new("/login");
        assert!(!Redirect::new("/login").should_perform_after(&previous));
        assert!(Redirect::new("/home").should_perform_after(&previous));
    }

    #[test]
    fn test_redirect_deserialize() {
        let redirect: Redirect = serde_json::from_str(
            r#"{"from": "/old/:id", "to": "/new/:id", "exact": true}"#,
        )
        .unwrap();
        assert_eq!(redirect.from.as_deref(), Some("/old/:id"));
        assert_eq!(redirect.to, Destination::Path("/new/:id".into()));
        assert!(redirect.options.exact);
        assert!(!redirect.push);
    }
}
