//! # pathmatch
//!
//! Path-pattern matching and path generation for client-side routers.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient access.
//! You can depend on `pathmatch` to get everything, or depend on individual
//! crates for finer-grained control.
//!
//! ```
//! use pathmatch::prelude::*;
//!
//! let m = match_path("/users/42", "/users/:id", None).unwrap().unwrap();
//! assert_eq!(m.params.get("id"), Some("42"));
//! assert_eq!(generate_path("/users/:id", &m.params).unwrap(), "/users/42");
//! ```

/// Error type, settings, logging, and the ordered `Params` map.
pub use pathmatch_core as core;

/// The pattern compiler: tokenizer, recognizers, and generator templates.
pub use pathmatch_pattern as pattern;

/// Pattern cache, match engine, path generator, switches, and redirects.
#[cfg(feature = "router")]
pub use pathmatch_router as router;

/// The command framework behind the `pathmatch` binary.
#[cfg(feature = "cli")]
pub use pathmatch_cli as cli;

/// Third-party re-exports.
pub use serde_json;
pub use tracing;
pub use tracing_subscriber;

/// Commonly used types and functions.
pub mod prelude {
    pub use pathmatch_core::{Params, PathMatchError, PathMatchResult, Settings};
    pub use pathmatch_pattern::{CompileOptions, ParamSource};

    #[cfg(feature = "router")]
    pub use pathmatch_router::{
        generate_path, match_path, Destination, Generator, Location, MatchOptions, MatchResult,
        Matcher, PathOptions, PatternCache, Redirect, Route, Switch, TemplateCache,
    };
}
