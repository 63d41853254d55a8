//! Path generation: the inverse of matching.

use pathmatch_core::logging::match_span;
use pathmatch_core::PathMatchResult;
use pathmatch_pattern::ParamSource;

use crate::cache::{default_template_cache, TemplateCache};

/// Generates paths through a [`TemplateCache`].
#[derive(Debug, Clone, Copy)]
pub struct Generator<'c> {
    cache: &'c TemplateCache,
}

impl<'c> Generator<'c> {
    /// Creates a generator backed by `cache`.
    pub const fn new(cache: &'c TemplateCache) -> Self {
        Self { cache }
    }

    /// Returns the cache this generator compiles through.
    pub const fn cache(&self) -> &'c TemplateCache {
        self.cache
    }

    /// Builds a path by substituting `params` into `pattern`.
    ///
    /// The pattern `"/"` is returned unchanged. Values are validated against
    /// their parameter's pattern but are not percent-encoded.
    ///
    /// # Errors
    ///
    /// - [`PathMatchError::InvalidPattern`] if the pattern cannot be compiled.
    /// - [`PathMatchError::ParameterMissing`] if a required parameter has no value.
    /// - [`PathMatchError::ParameterInvalid`] if a value violates its constraint.
    ///
    /// [`PathMatchError::InvalidPattern`]: pathmatch_core::PathMatchError::InvalidPattern
    /// [`PathMatchError::ParameterMissing`]: pathmatch_core::PathMatchError::ParameterMissing
    /// [`PathMatchError::ParameterInvalid`]: pathmatch_core::PathMatchError::ParameterInvalid
    pub fn generate_path(
        &self,
        pattern: &str,
        params: impl ParamSource,
    ) -> PathMatchResult<String> {
        if pattern == "/" {
            return Ok(pattern.to_string());
        }

        let span = match_span(pattern);
        let _guard = span.enter();

        let template = self.cache.compile(pattern)?;
        let path = template.render(&params)?;
        tracing::trace!(%path, "generated");
        Ok(path)
    }
}

impl Default for Generator<'static> {
    fn default() -> Self {
        Self::new(default_template_cache())
    }
}

/// Generates a path using the process-wide template cache.
///
/// # Examples
///
/// ```
/// use pathmatch_core::Params;
/// use pathmatch_router::generate_path;
///
/// let mut params = Params::new();
/// params.insert("id", "7");
/// assert_eq!(generate_path("/users/:id", &params).unwrap(), "/users/7");
/// assert!(generate_path("/users/:id", &Params::new()).is_err());
/// ```
pub fn generate_path(pattern: &str, params: impl ParamSource) -> PathMatchResult<String> {
    Generator::default().generate_path(pattern, params)
}
