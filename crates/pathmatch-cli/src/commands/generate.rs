//! The `generate` command.
//!
//! Builds a path from a pattern and `name=value` arguments. Giving the same
//! name more than once supplies a list for a repeating parameter.

use std::io::Write;

use pathmatch_core::{PathMatchError, PathMatchResult, Settings};
use pathmatch_pattern::{ParamSource, ParamValue};
use pathmatch_router::{Generator, TemplateCache};

use crate::command::ManagementCommand;

/// Generates a path from a pattern and parameters.
pub struct GenerateCommand;

/// Parameters collected from `name=value` arguments, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliParams {
    entries: Vec<(String, Vec<String>)>,
}

impl CliParams {
    /// Parses `name=value` arguments. The value may be empty; the name may not.
    pub fn parse<I, S>(args: I) -> PathMatchResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut params = Self::default();
        for arg in args {
            let arg = arg.as_ref();
            let (name, value) = arg
                .split_once('=')
                .filter(|(name, _)| !name.is_empty())
                .ok_or_else(|| {
                    PathMatchError::ConfigurationError(format!(
                        "Expected a parameter of the form name=value, got '{arg}'"
                    ))
                })?;
            params.push(name, value);
        }
        Ok(params)
    }

    fn push(&mut self, name: &str, value: &str) {
        match self.entries.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, values)) => values.push(value.to_string()),
            None => self
                .entries
                .push((name.to_string(), vec![value.to_string()])),
        }
    }
}

impl ParamSource for CliParams {
    fn param(&self, name: &str) -> Option<ParamValue<'_>> {
        let (_, values) = self.entries.iter().find(|(existing, _)| existing == name)?;
        match values.as_slice() {
            [single] => Some(ParamValue::One(single)),
            many => Some(ParamValue::Many(many.iter().map(String::as_str).collect())),
        }
    }
}

/// Generates a path through `cache`.
pub fn run_generate(
    cache: &TemplateCache,
    pattern: &str,
    params: &CliParams,
) -> PathMatchResult<String> {
    Generator::new(cache).generate_path(pattern, params)
}

impl ManagementCommand for GenerateCommand {
    fn name(&self) -> &'static str {
        "generate"
    }

    fn help(&self) -> &'static str {
        "Generate a path from a pattern and name=value parameters"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("pattern")
                .required(true)
                .help("The route pattern, e.g. /users/:id"),
        )
        .arg(
            clap::Arg::new("params")
                .num_args(0..)
                .value_name("NAME=VALUE")
                .help("Parameter values; repeat a name to build a list"),
        )
    }

    fn handle(
        &self,
        matches: &clap::ArgMatches,
        settings: &Settings,
        out: &mut dyn Write,
    ) -> PathMatchResult<()> {
        let pattern = matches
            .get_one::<String>("pattern")
            .ok_or_else(|| PathMatchError::ConfigurationError("Missing pattern".to_string()))?;
        let params = CliParams::parse(
            matches
                .get_many::<String>("params")
                .into_iter()
                .flatten(),
        )?;

        let cache = TemplateCache::from_settings(settings);
        let path = run_generate(&cache, pattern, &params)?;
        writeln!(out, "{path}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_params() {
        let params = CliParams::parse(["id=7", "tab="]).unwrap();
        assert_eq!(params.param("id"), Some(ParamValue::One("7")));
        assert_eq!(params.param("tab"), Some(ParamValue::One("")));
        assert_eq!(params.param("missing"), None);
    }

    #[test]
    fn test_parse_repeated_builds_list() {
        let params = CliParams::parse(["path=a", "path=b"]).unwrap();
        assert_eq!(params.param("path"), Some(ParamValue::Many(vec!["a", "b"])));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(CliParams::parse(["novalue"]).is_err());
        assert!(CliParams::parse(["=x"]).is_err());
    }

    #[test]
    fn test_value_may_contain_equals() {
        let params = CliParams::parse(["q=a=b"]).unwrap();
        assert_eq!(params.param("q"), Some(ParamValue::One("a=b")));
    }

    #[test]
    fn test_run_generate() {
        let cache = TemplateCache::new(10);
        let params = CliParams::parse(["id=7"]).unwrap();
        assert_eq!(run_generate(&cache, "/users/:id", &params).unwrap(), "/users/7");

        let params = CliParams::parse(["rest=a", "rest=b"]).unwrap();
        assert_eq!(run_generate(&cache, "/files/:rest+", &params).unwrap(), "/files/a/b");

        let err = run_generate(&cache, "/users/:id", &CliParams::default()).unwrap_err();
        assert_eq!(err.code(), "parameter_missing");
    }
}
