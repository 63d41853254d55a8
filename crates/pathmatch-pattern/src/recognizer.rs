//! Recognizers: compiled matchers for a pattern.
//!
//! A [`Recognizer`] tests a pathname against a pattern and reports the matched
//! prefix plus one captured value per parameter key. It is built from the
//! token stream of [`parse`](crate::token::parse) under [`CompileOptions`].
//!
//! The `regex` crate has no look-around, so the "followed by a delimiter or end
//! of input" conditions are expressed by wrapping the matched prefix in its own
//! group and consuming the following delimiter outside of it.

use std::fmt;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use pathmatch_core::{PathMatchError, PathMatchResult};

use crate::token::{self, Key, Token, DEFAULT_DELIMITER};

/// Options controlling how a pattern is compiled into a recognizer.
///
/// The default is a prefix match (`end = false`) that ignores a trailing
/// delimiter and case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompileOptions {
    /// Require the recognizer to consume the entire input.
    pub end: bool,
    /// Make a trailing delimiter on the pattern significant.
    pub strict: bool,
    /// Match case-sensitively.
    pub sensitive: bool,
}

impl CompileOptions {
    /// Creates options from the three flags.
    pub const fn new(end: bool, strict: bool, sensitive: bool) -> Self {
        Self {
            end,
            strict,
            sensitive,
        }
    }

    /// Returns the fixed-order discriminator for these options, e.g.
    /// `"truefalsefalse"` for `end` only.
    pub const fn discriminator(&self) -> &'static str {
        match (self.end, self.strict, self.sensitive) {
            (false, false, false) => "falsefalsefalse",
            (false, false, true) => "falsefalsetrue",
            (false, true, false) => "falsetruefalse",
            (false, true, true) => "falsetruetrue",
            (true, false, false) => "truefalsefalse",
            (true, false, true) => "truefalsetrue",
            (true, true, false) => "truetruefalse",
            (true, true, true) => "truetruetrue",
        }
    }
}

impl fmt::Display for CompileOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.discriminator())
    }
}

/// The result of running a [`Recognizer`] on an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizerMatch<'t> {
    matched: &'t str,
    values: Vec<Option<&'t str>>,
}

impl<'t> RecognizerMatch<'t> {
    /// Returns the recognized prefix of the input.
    pub const fn matched(&self) -> &'t str {
        self.matched
    }

    /// Returns the value captured for the key at `index`, if it participated.
    pub fn value(&self, index: usize) -> Option<&'t str> {
        self.values.get(index).copied().flatten()
    }

    /// Returns all captured values, one per key, in declaration order.
    pub fn values(&self) -> &[Option<&'t str>] {
        &self.values
    }
}

/// A compiled, executable matcher for one pattern under one set of options.
#[derive(Debug, Clone)]
pub struct Recognizer {
    regex: Regex,
    key_count: usize,
    options: CompileOptions,
}

impl Recognizer {
    /// Runs the recognizer against `input`.
    ///
    /// Returns `None` when the input does not match.
    pub fn exec<'t>(&self, input: &'t str) -> Option<RecognizerMatch<'t>> {
        let caps = self.regex.captures(input)?;
        let matched = caps.get(1)?.as_str();
        let values = (0..self.key_count)
            .map(|index| caps.get(index + 2).map(|m| m.as_str()))
            .collect();
        Some(RecognizerMatch { matched, values })
    }

    /// Returns `true` if `input` matches.
    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    /// Returns the regex source the recognizer runs.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns the number of parameter keys the recognizer captures.
    pub const fn key_count(&self) -> usize {
        self.key_count
    }

    /// Returns the options the recognizer was compiled with.
    pub const fn options(&self) -> CompileOptions {
        self.options
    }
}

/// Builds the regex source for a token stream.
fn regex_source(tokens: &[Token], options: CompileOptions) -> String {
    let mut route = String::new();

    for token in tokens {
        match token {
            Token::Literal(text) => route.push_str(&regex::escape(text)),
            Token::Key(key) => {
                let prefix = regex::escape(&key.prefix);
                let single = format!("(?:{})", key.pattern);
                let capture = if key.repeat {
                    format!("{single}(?:{prefix}{single})*")
                } else {
                    single
                };
                let capture = match (key.optional, key.partial) {
                    (true, false) => format!("(?:{prefix}({capture}))?"),
                    (true, true) => format!("{prefix}({capture})?"),
                    (false, _) => format!("{prefix}({capture})"),
                };
                route.push_str(&capture);
            }
        }
    }

    let delimiter = regex::escape(&DEFAULT_DELIMITER.to_string());
    let ends_with_delimiter = route.ends_with(&delimiter);

    if !options.strict {
        if ends_with_delimiter {
            route.truncate(route.len() - delimiter.len());
        }
        route.push_str(&format!("(?:{delimiter}$)?"));
    }

    let tail = if options.end {
        "$".to_string()
    } else if options.strict && ends_with_delimiter {
        String::new()
    } else {
        format!("(?:{delimiter}|$)")
    };

    format!("^({route}){tail}")
}

/// Compiles a token stream into a [`Recognizer`].
///
/// # Errors
///
/// Returns [`PathMatchError::InvalidPattern`] if a custom group pattern is not
/// a valid regex.
pub fn tokens_to_recognizer(
    tokens: &[Token],
    options: CompileOptions,
) -> PathMatchResult<Recognizer> {
    let source = regex_source(tokens, options);
    let key_count = tokens.iter().filter(|t| t.as_key().is_some()).count();

    let regex = RegexBuilder::new(&source)
        .case_insensitive(!options.sensitive)
        .build()
        .map_err(|e| PathMatchError::InvalidPattern(format!("Invalid pattern regex: {e}")))?;

    // Custom groups must not introduce capture groups of their own.
    if regex.captures_len() != key_count + 2 {
        return Err(PathMatchError::InvalidPattern(format!(
            "Pattern regex '{source}' declares {} groups for {key_count} parameters",
            regex.captures_len().saturating_sub(2)
        )));
    }

    Ok(Recognizer {
        regex,
        key_count,
        options,
    })
}

/// Compiles a pattern into a recognizer and its ordered parameter keys.
///
/// # Examples
///
/// ```
/// use pathmatch_pattern::{compile_pattern, CompileOptions};
///
/// let options = CompileOptions::new(true, false, false);
/// let (recognizer, keys) = compile_pattern("/posts/:year/:slug", options).unwrap();
/// assert_eq!(keys.len(), 2);
/// assert!(recognizer.is_match("/posts/2024/hello"));
/// assert!(!recognizer.is_match("/posts/2024/hello/comments"));
/// ```
///
/// # Errors
///
/// Returns [`PathMatchError::InvalidPattern`] if the pattern cannot be compiled.
pub fn compile_pattern(
    pattern: &str,
    options: CompileOptions,
) -> PathMatchResult<(Recognizer, Vec<Key>)> {
    let tokens = token::parse(pattern);
    let recognizer = tokens_to_recognizer(&tokens, options)?;
    tracing::trace!(pattern, regex = recognizer.as_str(), %options, "compiled recognizer");
    Ok((recognizer, token::keys(&tokens)))
}
