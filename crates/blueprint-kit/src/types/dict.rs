use indexmap::IndexMap;

use super::types::Value;

/// A mapping from names to values, with unique keys.
///
/// Insertion order is kept for display purposes only: two dicts holding the
/// same entries compare equal whatever order they were built in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dict {
    items: IndexMap<String, Value>,
}

impl Dict {
    pub fn new() -> Self {
        Dict { items: IndexMap::new() }
    }

    /// Insert or replace an entry. Returns `self` so that calls can be chained.
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> &mut Self {
        self.items.insert(key.into(), value);
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.items.get(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Dict {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        Dict { items: iter.into_iter().map(|(k, v)| (k.into(), v)).collect() }
    }
}
