//! An insertion-ordered map of route parameters.
//!
//! [`Params`] holds the values captured by a match, keyed by parameter name, in
//! the order the pattern declares them. It is also accepted as input when
//! generating a path, which makes a match result's params directly reusable
//! as generator input.

use std::fmt;
use std::slice;
use std::vec;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A map from parameter name to value that preserves insertion order.
///
/// Inserting an existing key replaces the value in place, keeping the key's
/// original position. Parameter lists are short, so lookups scan linearly.
///
/// # Examples
///
/// ```
/// use pathmatch_core::Params;
///
/// let mut params = Params::new();
/// params.insert("user", "alice");
/// params.insert("id", "42");
///
/// assert_eq!(params.get("id"), Some("42"));
/// assert_eq!(params.keys().collect::<Vec<_>>(), vec!["user", "id"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, String)>,
}

impl Params {
    /// Creates an empty `Params`.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an empty `Params` with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the value for `name`, or `None` if it is not present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Sets the value for `name`, returning the previous value if there was one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(key, _)| *key == name) {
            return Some(std::mem::replace(existing, value));
        }
        self.entries.push((name, value));
        None
    }

    /// Removes `name`, returning its value if it was present.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Returns `true` if `name` is present.
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the names, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, value)| value.as_str())
    }

    /// Returns an iterator over `(name, value)` pairs, in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

/// Borrowing iterator over [`Params`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, (String, String)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        params.extend(iter);
        params
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Params {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, (key, value)) in self.entries.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value:?}")?;
        }
        f.write_str("}")
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let p = Params::new();
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
    }

    #[test]
    fn test_with_capacity_is_empty() {
        let mut params = Params::with_capacity(2);
        assert!(params.is_empty());
        params.insert("a", "1");
        assert_eq!(params.get("a"), Some("1"));
    }

    #[test]
    fn test_insert_and_get() {
        let mut p = Params::new();
        assert_eq!(p.insert("id", "42"), None);
        assert_eq!(p.get("id"), Some("42"));
        assert_eq!(p.get("missing"), None);
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut p = Params::new();
        p.insert("year", "2024");
        p.insert("month", "06");
        p.insert("slug", "hello");
        assert_eq!(p.keys().collect::<Vec<_>>(), vec!["year", "month", "slug"]);
        assert_eq!(p.values().collect::<Vec<_>>(), vec!["2024", "06", "hello"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut p = Params::new();
        p.insert("a", "1");
        p.insert("b", "2");
        assert_eq!(p.insert("a", "3"), Some("1".to_string()));
        assert_eq!(p.iter().collect::<Vec<_>>(), vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_remove() {
        let mut p: Params = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(p.remove("a"), Some("1".to_string()));
        assert_eq!(p.remove("a"), None);
        assert!(!p.contains_key("a"));
        assert!(p.contains_key("b"));
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let a: Params = [("x", "1"), ("y", "2")].into_iter().collect();
        let b: Params = [("y", "2"), ("x", "1")].into_iter().collect();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_display() {
        let p: Params = [("id", "7")].into_iter().collect();
        assert_eq!(p.to_string(), "{id: \"7\"}");
        assert_eq!(Params::new().to_string(), "{}");
    }

    #[test]
    fn test_serialize_keeps_order() {
        let p: Params = [("z", "1"), ("a", "2")].into_iter().collect();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"z":"1","a":"2"}"#);
    }

    #[test]
    fn test_into_iter_owned() {
        let p: Params = [("k", "v")].into_iter().collect();
        let pairs: Vec<(String, String)> = p.into_iter().collect();
        assert_eq!(pairs, vec![("k".to_string(), "v".to_string())]);
    }
}
