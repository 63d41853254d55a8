//! # pathmatch-cli
//!
//! The `pathmatch` command-line tool.
//!
//! - **Command framework** - The [`ManagementCommand`] trait and the
//!   [`CommandRegistry`] that builds the clap interface and dispatches to it
//! - **Built-in commands** - `match` and `generate`
//!
//! ## Quick Start
//!
//! ```rust
//! use pathmatch_cli::command::CommandRegistry;
//! use pathmatch_core::Settings;
//!
//! let registry = CommandRegistry::with_builtin_commands();
//! assert_eq!(registry.list_commands(), vec!["generate", "match"]);
//!
//! let matches = registry
//!     .build_cli()
//!     .get_matches_from(["pathmatch", "generate", "/users/:id", "id=7"]);
//! let mut out = Vec::new();
//! registry.execute(&matches, &Settings::default(), &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "/users/7\n");
//! ```

pub mod command;
pub mod commands;

pub use command::{load_settings, settings_path, CommandRegistry, ManagementCommand};
