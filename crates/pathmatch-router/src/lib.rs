//! # pathmatch-router
//!
//! Matching and generation on top of the pattern compiler, as a client-side
//! router uses them on every render.
//!
//! ## Modules
//!
//! - [`options`] - Match options and the `MatchInput` accepted by the match API
//! - [`cache`] - Bounded pattern and template caches
//! - [`matching`] - The match engine and [`MatchResult`]
//! - [`generate`] - Path generation from a pattern and parameters
//! - [`switch`] - Route match computation and first-match route selection
//! - [`redirect`] - Redirect destinations computed from a match
//!
//! ## Example
//!
//! ```
//! use pathmatch_router::{generate_path, match_path, PathOptions};
//! use std::collections::HashMap;
//!
//! let m = match_path("/users/42", "/users/:id", None).unwrap().unwrap();
//! assert_eq!(m.url, "/users/42");
//! assert_eq!(m.params.get("id"), Some("42"));
//!
//! let exact = PathOptions::new("/users/:id").exact(true);
//! assert!(match_path("/users/42/edit", exact, None).unwrap().is_none());
//!
//! let mut params = HashMap::new();
//! params.insert("id", "7");
//! assert_eq!(generate_path("/users/:id", &params).unwrap(), "/users/7");
//! ```

pub mod cache;
pub mod generate;
pub mod matching;
pub mod options;
pub mod redirect;
pub mod switch;

pub use cache::{
    default_cache, default_template_cache, CompiledPattern, PatternCache, TemplateCache,
};
pub use generate::{generate_path, Generator};
pub use matching::{match_path, MatchResult, Matcher};
pub use options::{MatchInput, MatchOptions, PathOptions};
pub use redirect::{Destination, Location, Navigation, Redirect};
pub use switch::{Route, Switch};
