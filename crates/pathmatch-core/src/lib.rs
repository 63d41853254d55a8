//! # pathmatch-core
//!
//! Core types shared by every pathmatch crate. Nothing in here knows about
//! patterns or matching; it provides the foundation the other crates build on.
//!
//! ## Modules
//!
//! - [`error`] - Error type and result alias
//! - [`utils`] - Utility types ([`Params`])
//! - [`settings`] - Engine settings (cache limits, logging)
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;
pub mod utils;

// Re-export the most commonly used types at the crate root.
pub use error::{PathMatchError, PathMatchResult};
pub use settings::Settings;
pub use utils::Params;
