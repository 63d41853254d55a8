//! Built-in commands.
//!
//! Each command implements the [`ManagementCommand`](crate::command::ManagementCommand)
//! trait and keeps its logic in a plain function so it can be used without clap.

pub mod generate;
pub mod match_path;

pub use generate::GenerateCommand;
pub use match_path::MatchCommand;

use crate::command::CommandRegistry;

/// Registers all built-in commands into the given registry.
pub fn register_builtin_commands(registry: &mut CommandRegistry) {
    registry.register(Box::new(MatchCommand));
    registry.register(Box::new(GenerateCommand));
}
