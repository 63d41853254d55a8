//! Bounded caches for compiled patterns and generator templates.
//!
//! Both caches share one policy: entries are stored until a total entry limit
//! is reached, after which new patterns are still compiled on demand but are
//! no longer stored. Nothing is ever evicted, so a returned
//! `Arc` for a cached pattern stays the same for the life of the cache.
//!
//! Lookups take a read lock. A miss compiles outside any lock and then takes
//! the write lock to re-check and insert, so two threads racing on the same
//! key end up sharing the entry that was stored first.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::Lazy;
use tracing::{debug, warn};

use pathmatch_core::{settings_loader, PathMatchResult, Settings};
use pathmatch_pattern::{
    compile_pattern, compile_template, CompileOptions, Key, Recognizer, Template,
};

/// A pattern compiled under one set of options: its recognizer plus its
/// ordered parameter keys.
#[derive(Debug)]
pub struct CompiledPattern {
    pattern: String,
    recognizer: Recognizer,
    keys: Vec<Key>,
}

impl CompiledPattern {
    /// Compiles `pattern` under `options` without touching any cache.
    pub fn compile(pattern: &str, options: CompileOptions) -> PathMatchResult<Self> {
        let (recognizer, keys) = compile_pattern(pattern, options)?;
        Ok(Self {
            pattern: pattern.to_string(),
            recognizer,
            keys,
        })
    }

    /// Returns the source pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the recognizer.
    pub const fn recognizer(&self) -> &Recognizer {
        &self.recognizer
    }

    /// Returns the parameter keys, in declaration order.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Returns the parameter names, in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|key| key.name.as_str())
    }

    /// Returns the options the pattern was compiled with.
    pub const fn options(&self) -> CompileOptions {
        self.recognizer.options()
    }
}

#[derive(Debug)]
struct Buckets<K, V> {
    buckets: HashMap<K, HashMap<String, Arc<V>>>,
    count: usize,
}

/// Two-level store, bucket key then pattern, with a total bound.
#[derive(Debug)]
struct BoundedStore<K, V> {
    name: &'static str,
    limit: usize,
    inner: RwLock<Buckets<K, V>>,
    saturation_reported: AtomicBool,
}

impl<K: Hash + Eq + Copy + Debug, V> BoundedStore<K, V> {
    fn new(name: &'static str, limit: usize) -> Self {
        Self {
            name,
            limit,
            inner: RwLock::new(Buckets {
                buckets: HashMap::new(),
                count: 0,
            }),
            saturation_reported: AtomicBool::new(false),
        }
    }

    // A panic while holding the lock cannot leave the maps half-updated, so a
    // poisoned lock is safe to keep using.
    fn read(&self) -> RwLockReadGuard<'_, Buckets<K, V>> {
        self.inner
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Buckets<K, V>> {
        self.inner
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn get_or_compile(
        &self,
        bucket: K,
        pattern: &str,
        compile: impl FnOnce() -> PathMatchResult<V>,
    ) -> PathMatchResult<Arc<V>> {
        if let Some(hit) = self
            .read()
            .buckets
            .get(&bucket)
            .and_then(|entries| entries.get(pattern))
        {
            return Ok(Arc::clone(hit));
        }

        debug!(cache = self.name, ?bucket, pattern, "cache miss");
        let compiled = Arc::new(compile()?);

        let mut inner = self.write();
        if let Some(existing) = inner
            .buckets
            .get(&bucket)
            .and_then(|entries| entries.get(pattern))
        {
            return Ok(Arc::clone(existing));
        }

        if inner.count < self.limit {
            inner
                .buckets
                .entry(bucket)
                .or_default()
                .insert(pattern.to_string(), Arc::clone(&compiled));
            inner.count += 1;
            debug!(
                cache = self.name,
                ?bucket,
                pattern,
                entries = inner.count,
                "stored"
            );
        } else if !self.saturation_reported.swap(true, Ordering::Relaxed) {
            warn!(
                cache = self.name,
                limit = self.limit,
                "cache is full; new patterns will be compiled on every use"
            );
        }

        Ok(compiled)
    }

    fn len(&self) -> usize {
        self.read().count
    }

    fn clear(&self) {
        let mut inner = self.write();
        inner.buckets.clear();
        inner.count = 0;
        self.saturation_reported.store(false, Ordering::Relaxed);
    }
}

/// Cache of compiled patterns keyed by compile options and pattern string.
///
/// # Examples
///
/// ```
/// use pathmatch_pattern::CompileOptions;
/// use pathmatch_router::PatternCache;
/// use std::sync::Arc;
///
/// let cache = PatternCache::new(100);
/// let a = cache.compile("/users/:id", CompileOptions::default()).unwrap();
/// let b = cache.compile("/users/:id", CompileOptions::default()).unwrap();
/// assert!(Arc::ptr_eq(&a, &b));
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug)]
pub struct PatternCache {
    store: BoundedStore<CompileOptions, CompiledPattern>,
}

impl PatternCache {
    /// Creates a cache that stores at most `limit` compiled patterns.
    pub fn new(limit: usize) -> Self {
        Self {
            store: BoundedStore::new("pattern", limit),
        }
    }

    /// Creates a cache sized by `settings.pattern_cache_limit`.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.pattern_cache_limit)
    }

    /// Returns the compiled pattern for `(pattern, options)`, compiling it on a miss.
    ///
    /// # Errors
    ///
    /// Returns [`PathMatchError::InvalidPattern`](pathmatch_core::PathMatchError::InvalidPattern)
    /// if the pattern cannot be compiled. Failed compilations are not cached.
    pub fn compile(
        &self,
        pattern: &str,
        options: CompileOptions,
    ) -> PathMatchResult<Arc<CompiledPattern>> {
        self.store.get_or_compile(options, pattern, || {
            CompiledPattern::compile(pattern, options)
        })
    }

    /// Returns the number of stored patterns across all option combinations.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of stored patterns.
    pub const fn limit(&self) -> usize {
        self.store.limit
    }

    /// Returns `true` once the cache has stopped storing new patterns.
    pub fn is_saturated(&self) -> bool {
        self.len() >= self.limit()
    }

    /// Drops every stored pattern.
    pub fn clear(&self) {
        self.store.clear();
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Cache of generator templates keyed by pattern string.
#[derive(Debug)]
pub struct TemplateCache {
    store: BoundedStore<(), Template>,
}

impl TemplateCache {
    /// Creates a cache that stores at most `limit` templates.
    pub fn new(limit: usize) -> Self {
        Self {
            store: BoundedStore::new("template", limit),
        }
    }

    /// Creates a cache sized by `settings.template_cache_limit`.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.template_cache_limit)
    }

    /// Returns the template for `pattern`, compiling it on a miss.
    pub fn compile(&self, pattern: &str) -> PathMatchResult<Arc<Template>> {
        self.store
            .get_or_compile((), pattern, || compile_template(pattern))
    }

    /// Returns the number of stored templates.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of stored templates.
    pub const fn limit(&self) -> usize {
        self.store.limit
    }

    /// Returns `true` once the cache has stopped storing new templates.
    pub fn is_saturated(&self) -> bool {
        self.len() >= self.limit()
    }

    /// Drops every stored template.
    pub fn clear(&self) {
        self.store.clear();
    }
}

impl Default for TemplateCache {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

static DEFAULT_SETTINGS: Lazy<Settings> = Lazy::new(settings_loader::from_env);

static DEFAULT_PATTERN_CACHE: Lazy<PatternCache> =
    Lazy::new(|| PatternCache::from_settings(&DEFAULT_SETTINGS));

static DEFAULT_TEMPLATE_CACHE: Lazy<TemplateCache> =
    Lazy::new(|| TemplateCache::from_settings(&DEFAULT_SETTINGS));

/// The process-wide pattern cache used by [`match_path`](crate::match_path).
///
/// Its limit is read once from the environment (`PATHMATCH_PATTERN_CACHE_LIMIT`).
pub fn default_cache() -> &'static PatternCache {
    &DEFAULT_PATTERN_CACHE
}

/// The process-wide template cache used by [`generate_path`](crate::generate_path).
///
/// Its limit is read once from the environment (`PATHMATCH_TEMPLATE_CACHE_LIMIT`).
pub fn default_template_cache() -> &'static TemplateCache {
    &DEFAULT_TEMPLATE_CACHE
}
