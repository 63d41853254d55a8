//! Generator templates: patterns compiled for path generation.
//!
//! A [`Template`] substitutes parameter values into a pattern. Every value is
//! validated against its key's pattern before it is written, so a template
//! never produces a path its own pattern would refuse to match. Values are
//! inserted verbatim; pathmatch does not percent-encode.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use regex::{Regex, RegexBuilder};

use pathmatch_core::{Params, PathMatchError, PathMatchResult};

use crate::token::{self, Key, Token};

/// A parameter value as seen by a [`Template`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue<'a> {
    /// A single value.
    One(&'a str),
    /// A list of values for a repeating parameter.
    Many(Vec<&'a str>),
}

/// Converts a map value into a [`ParamValue`].
pub trait IntoParamValue {
    /// Borrows `self` as a parameter value.
    fn as_param_value(&self) -> ParamValue<'_>;
}

impl IntoParamValue for String {
    fn as_param_value(&self) -> ParamValue<'_> {
        ParamValue::One(self)
    }
}

impl IntoParamValue for &str {
    fn as_param_value(&self) -> ParamValue<'_> {
        ParamValue::One(self)
    }
}

impl IntoParamValue for Vec<String> {
    fn as_param_value(&self) -> ParamValue<'_> {
        ParamValue::Many(self.iter().map(String::as_str).collect())
    }
}

impl IntoParamValue for Vec<&str> {
    fn as_param_value(&self) -> ParamValue<'_> {
        ParamValue::Many(self.clone())
    }
}

/// Anything that can supply values for a template by parameter name.
pub trait ParamSource {
    /// Returns the value for `name`, or `None` if there is none.
    fn param(&self, name: &str) -> Option<ParamValue<'_>>;
}

impl ParamSource for Params {
    fn param(&self, name: &str) -> Option<ParamValue<'_>> {
        self.get(name).map(ParamValue::One)
    }
}

impl<K, V, S> ParamSource for HashMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash,
    V: IntoParamValue,
    S: BuildHasher,
{
    fn param(&self, name: &str) -> Option<ParamValue<'_>> {
        self.get(name).map(IntoParamValue::as_param_value)
    }
}

impl<K, V> ParamSource for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: IntoParamValue,
{
    fn param(&self, name: &str) -> Option<ParamValue<'_>> {
        self.get(name).map(IntoParamValue::as_param_value)
    }
}

impl<P: ParamSource + ?Sized> ParamSource for &P {
    fn param(&self, name: &str) -> Option<ParamValue<'_>> {
        (**self).param(name)
    }
}

/// One compiled template segment.
#[derive(Debug, Clone)]
enum Segment {
    Literal(String),
    Key { key: Key, validator: Regex },
}

/// A pattern compiled for path generation.
#[derive(Debug, Clone)]
pub struct Template {
    pattern: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Returns the pattern this template was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the parameter keys, in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Key { key, .. } => Some(key),
            Segment::Literal(_) => None,
        })
    }

    /// Renders the template with values from `params`.
    ///
    /// - An absent optional parameter is skipped; a partial one still writes
    ///   its prefix.
    /// - A repeating parameter accepts a list; its values are joined with the
    ///   key's delimiter after the prefix.
    ///
    /// # Errors
    ///
    /// - [`PathMatchError::ParameterMissing`] if a required parameter is absent
    ///   or a required repeating parameter is given an empty list.
    /// - [`PathMatchError::ParameterInvalid`] if a value does not match the
    ///   parameter's pattern, or a list is given to a non-repeating parameter.
    pub fn render<P: ParamSource + ?Sized>(&self, params: &P) -> PathMatchResult<String> {
        let mut path = String::new();

        for segment in &self.segments {
            let (key, validator) = match segment {
                Segment::Literal(text) => {
                    path.push_str(text);
                    continue;
                }
                Segment::Key { key, validator } => (key, validator),
            };

            match params.param(&key.name) {
                None => {
                    if !key.optional {
                        return Err(PathMatchError::missing(&key.name));
                    }
                    if key.partial {
                        path.push_str(&key.prefix);
                    }
                }
                Some(ParamValue::One(value)) => {
                    check_value(key, validator, value)?;
                    path.push_str(&key.prefix);
                    path.push_str(value);
                }
                Some(ParamValue::Many(values)) => {
                    if !key.repeat {
                        return Err(PathMatchError::invalid(
                            &key.name,
                            format!("expected a single value, but received {values:?}"),
                        ));
                    }
                    if values.is_empty() {
                        if key.optional {
                            continue;
                        }
                        return Err(PathMatchError::missing(&key.name));
                    }
                    for (index, value) in values.iter().enumerate() {
                        check_value(key, validator, value)?;
                        if index == 0 {
                            path.push_str(&key.prefix);
                        } else {
                            path.push(key.delimiter);
                        }
                        path.push_str(value);
                    }
                }
            }
        }

        Ok(path)
    }
}

fn check_value(key: &Key, validator: &Regex, value: &str) -> PathMatchResult<()> {
    if validator.is_match(value) {
        Ok(())
    } else {
        Err(PathMatchError::invalid(
            &key.name,
            format!("expected to match \"{}\", but received \"{value}\"", key.pattern),
        ))
    }
}

/// Compiles a token stream into a [`Template`].
///
/// # Errors
///
/// Returns [`PathMatchError::InvalidPattern`] if a key's pattern is not a valid regex.
pub fn tokens_to_template(pattern: &str, tokens: Vec<Token>) -> PathMatchResult<Template> {
    let segments = tokens
        .into_iter()
        .map(|token| match token {
            Token::Literal(text) => Ok(Segment::Literal(text)),
            Token::Key(key) => {
                let validator = RegexBuilder::new(&format!("^(?:{})$", key.pattern))
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| {
                        PathMatchError::InvalidPattern(format!(
                            "Invalid pattern for parameter \"{}\": {e}",
                            key.name
                        ))
                    })?;
                Ok(Segment::Key { key, validator })
            }
        })
        .collect::<PathMatchResult<Vec<_>>>()?;

    Ok(Template {
        pattern: pattern.to_string(),
        segments,
    })
}

/// Compiles a pattern into a generator [`Template`].
///
/// # Examples
///
/// ```
/// use pathmatch_pattern::compile_template;
/// use std::collections::HashMap;
///
/// let template = compile_template("/files/:path+").unwrap();
/// let mut params = HashMap::new();
/// params.insert("path", vec!["docs", "intro.md"]);
/// assert_eq!(template.render(&params).unwrap(), "/files/docs/intro.md");
/// ```
///
/// # Errors
///
/// Returns [`PathMatchError::InvalidPattern`] if the pattern cannot be compiled.
pub fn compile_template(pattern: &str) -> PathMatchResult<Template> {
    let template = tokens_to_template(pattern, token::parse(pattern))?;
    tracing::trace!(pattern, "compiled template");
    Ok(template)
}
