//! Pattern syntax and tokenizer.
//!
//! [`parse`] splits a pattern into a sequence of [`Token`]s: literal text and
//! parameter [`Key`]s. Both the recognizer and the template builders consume
//! the same token stream, so a pattern means the same thing in both directions.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Matches escapes, parameters (`:name`, `:name(re)`, `(re)`, with modifiers),
/// and bare asterisks.
///
/// Capture groups:
/// 1. escaped character (`\x`)
/// 2. prefix (`/` or `.`)
/// 3. parameter name
/// 4. custom pattern after a name
/// 5. custom pattern of an unnamed group
/// 6. modifier (`+`, `*`, `?`)
/// 7. bare asterisk
static PATH_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(\\.)",
        r"|([/.])?(?:(?::([A-Za-z0-9_]+)(?:\(((?:\\.|[^\\()])+)\))?|\(((?:\\.|[^\\()])+)\))([+*?])?|(\*))",
    ))
    .expect("path token regex is valid")
});

/// The delimiter used when a parameter has no prefix.
pub const DEFAULT_DELIMITER: char = '/';

/// One parameter declared by a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Key {
    /// The parameter name. Unnamed groups are named by their zero-based index.
    pub name: String,
    /// Whether the name is a positional index rather than a declared name.
    pub unnamed: bool,
    /// The prefix that precedes the value (`"/"`, `"."`, or empty).
    pub prefix: String,
    /// The delimiter between repeated values.
    pub delimiter: char,
    /// Whether the parameter may be absent.
    pub optional: bool,
    /// Whether the parameter may repeat.
    pub repeat: bool,
    /// Whether the parameter shares its segment with following literal text.
    pub partial: bool,
    /// Whether the parameter came from a bare `*`.
    pub asterisk: bool,
    /// The regex fragment a single value must match.
    pub pattern: String,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.asterisk {
            return write!(f, "{}*", self.prefix);
        }
        write!(f, "{}", self.prefix)?;
        if !self.unnamed {
            write!(f, ":{}", self.name)?;
        }
        write!(f, "({})", self.pattern)?;
        match (self.optional, self.repeat) {
            (true, true) => f.write_str("*"),
            (true, false) => f.write_str("?"),
            (false, true) => f.write_str("+"),
            (false, false) => Ok(()),
        }
    }
}

/// A piece of a parsed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Literal text, with escapes already resolved.
    Literal(String),
    /// A parameter.
    Key(Key),
}

impl Token {
    /// Returns the key if this token is a parameter.
    pub const fn as_key(&self) -> Option<&Key> {
        match self {
            Self::Key(key) => Some(key),
            Self::Literal(_) => None,
        }
    }
}

/// Escapes the characters of a custom group that would otherwise change its
/// structure (anchors and groups).
fn escape_group(group: &str) -> String {
    let mut escaped = String::with_capacity(group.len());
    for c in group.chars() {
        if matches!(c, '$' | '(' | ')') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Parses a pattern into tokens.
///
/// Parsing never fails: text that does not form a parameter is literal. Errors
/// in custom group patterns surface when the pattern is compiled.
///
/// # Examples
///
/// ```
/// use pathmatch_pattern::token::{parse, Token};
///
/// let tokens = parse("/users/:id");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0], Token::Literal("/users".to_string()));
/// let key = tokens[1].as_key().unwrap();
/// assert_eq!(key.name, "id");
/// assert_eq!(key.prefix, "/");
/// ```
pub fn parse(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut next_index = 0usize;
    let mut index = 0usize;
    let mut path = String::new();

    for caps in PATH_TOKEN.captures_iter(pattern) {
        let Some(whole) = caps.get(0) else { continue };
        path.push_str(&pattern[index..whole.start()]);
        index = whole.end();

        if let Some(escaped) = caps.get(1) {
            path.extend(escaped.as_str().chars().skip(1));
            continue;
        }

        let next = pattern[index..].chars().next();
        let prefix = caps.get(2).map(|m| m.as_str());
        let name = caps.get(3).map(|m| m.as_str());
        let capture = caps.get(4).or_else(|| caps.get(5)).map(|m| m.as_str());
        let modifier = caps.get(6).map(|m| m.as_str());
        let asterisk = caps.get(7).is_some();

        if !path.is_empty() {
            tokens.push(Token::Literal(std::mem::take(&mut path)));
        }

        let delimiter = prefix
            .and_then(|p| p.chars().next())
            .unwrap_or(DEFAULT_DELIMITER);
        let partial = match (prefix, next) {
            (Some(p), Some(n)) => !p.starts_with(n),
            _ => false,
        };
        let value_pattern = capture.map_or_else(
            || {
                if asterisk {
                    ".*".to_string()
                } else {
                    format!("[^{}]+?", regex::escape(&delimiter.to_string()))
                }
            },
            escape_group,
        );
        let (name, unnamed) = match name {
            Some(name) => (name.to_string(), false),
            None => {
                let n = next_index;
                next_index += 1;
                (n.to_string(), true)
            }
        };

        tokens.push(Token::Key(Key {
            name,
            unnamed,
            prefix: prefix.unwrap_or_default().to_string(),
            delimiter,
            optional: matches!(modifier, Some("?" | "*")),
            repeat: matches!(modifier, Some("+" | "*")),
            partial,
            asterisk,
            pattern: value_pattern,
        }));
    }

    if index < pattern.len() {
        path.push_str(&pattern[index..]);
    }
    if !path.is_empty() {
        tokens.push(Token::Literal(path));
    }

    tokens
}

/// Returns only the parameter keys of a token stream, in declaration order.
pub fn keys(tokens: &[Token]) -> Vec<Key> {
    tokens.iter().filter_map(Token::as_key).cloned().collect()
}
