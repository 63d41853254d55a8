//! The `match` command.
//!
//! Matches a pathname against a pattern and prints the match as JSON, or
//! `null` when the pathname does not match.

use std::io::Write;

use pathmatch_core::{PathMatchError, PathMatchResult, Settings};
use pathmatch_router::{Matcher, PathOptions, PatternCache};

use crate::command::ManagementCommand;

/// Matches a pathname against a route pattern.
pub struct MatchCommand;

/// Runs a match and renders the result as pretty JSON (`null` for no match).
pub fn run_match(
    cache: &PatternCache,
    pathname: &str,
    options: PathOptions,
) -> PathMatchResult<String> {
    let found = Matcher::new(cache).match_path(pathname, options, None)?;
    serde_json::to_string_pretty(&found)
        .map_err(|e| PathMatchError::ConfigurationError(format!("Failed to render match: {e}")))
}

impl ManagementCommand for MatchCommand {
    fn name(&self) -> &'static str {
        "match"
    }

    fn help(&self) -> &'static str {
        "Match a pathname against a pattern and print the result as JSON"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("pathname")
                .required(true)
                .help("The pathname to test, e.g. /users/42"),
        )
        .arg(
            clap::Arg::new("pattern")
                .required(true)
                .help("The route pattern, e.g. /users/:id"),
        )
        .arg(
            clap::Arg::new("exact")
                .long("exact")
                .action(clap::ArgAction::SetTrue)
                .help("Only accept a match covering the whole pathname"),
        )
        .arg(
            clap::Arg::new("strict")
                .long("strict")
                .action(clap::ArgAction::SetTrue)
                .help("Make a trailing slash significant"),
        )
        .arg(
            clap::Arg::new("sensitive")
                .long("sensitive")
                .action(clap::ArgAction::SetTrue)
                .help("Match case-sensitively"),
        )
    }

    fn handle(
        &self,
        matches: &clap::ArgMatches,
        settings: &Settings,
        out: &mut dyn Write,
    ) -> PathMatchResult<()> {
        let pathname = matches
            .get_one::<String>("pathname")
            .ok_or_else(|| PathMatchError::ConfigurationError("Missing pathname".to_string()))?;
        let pattern = matches
            .get_one::<String>("pattern")
            .ok_or_else(|| PathMatchError::ConfigurationError("Missing pattern".to_string()))?;

        let options = PathOptions::new(pattern.as_str())
            .exact(matches.get_flag("exact"))
            .strict(matches.get_flag("strict"))
            .sensitive(matches.get_flag("sensitive"));

        let cache = PatternCache::from_settings(settings);
        let rendered = run_match(&cache, pathname, options)?;
        writeln!(out, "{rendered}")?;
        Ok(())
    }
}
