use std::io;
use std::process::ExitCode;

use pathmatch_cli::{load_settings, settings_path, CommandRegistry};
use pathmatch_core::logging::setup_logging;

fn main() -> ExitCode {
    let registry = CommandRegistry::with_builtin_commands();
    let matches = registry.build_cli().get_matches();

    let settings = match load_settings(settings_path(&matches)) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("pathmatch: {e}");
            return ExitCode::FAILURE;
        }
    };
    setup_logging(&settings);

    let mut stdout = io::stdout().lock();
    match registry.execute(&matches, &settings, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(code = e.code(), "command failed");
            eprintln!("pathmatch: {e}");
            ExitCode::FAILURE
        }
    }
}
