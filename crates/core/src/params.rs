//! Query Parameter Maps
//!
//! Two ways of holding a decoded query string: one value per name, or an
//! ordered list of values per name. Both fold repeated keys as they arrive,
//! so they can be fed directly from a form-urlencoded deserializer.

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

/// Query parameters decoded one value per key.
///
/// When a key is repeated the last value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingleValueMap {
    inner: HashMap<String, String>,
}

impl SingleValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map from name/value pairs in request order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Sets `name` to `value`, replacing any earlier value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.inner
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SingleValueMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

/// Query parameters decoded as ordered lists per key.
///
/// Every entry holds at least one value. Values keep the order in which the
/// repeated key appeared in the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiValueMap {
    inner: HashMap<String, Vec<String>>,
}

impl MultiValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map from name/value pairs in request order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Appends `value` to the values of `name`.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inner
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    pub fn get_all(&self, name: &str) -> Option<&[String]> {
        self.inner.get(name).map(Vec::as_slice)
    }

    pub fn get_first(&self, name: &str) -> Option<&str> {
        self.inner
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Collapses every entry to its last value, the same result as binding
    /// the query string single-valued.
    pub fn to_single_value_map(&self) -> SingleValueMap {
        self.inner
            .iter()
            .filter_map(|(name, values)| values.last().map(|v| (name.clone(), v.clone())))
            .collect()
    }

    pub fn into_inner(self) -> HashMap<String, Vec<String>> {
        self.inner
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MultiValueMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.append(name, value);
        }
        map
    }
}

// Deserialization visits entries one at a time instead of going through a
// `HashMap`, so duplicate keys reach the fold above.
struct PairsVisitor<M> {
    expecting: &'static str,
    marker: PhantomData<M>,
}

impl<'de, M> Visitor<'de> for PairsVisitor<M>
where
    M: FromIterator<(String, String)>,
{
    type Value = M;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.expecting)
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(pair) = access.next_entry::<String, String>()? {
            pairs.push(pair);
        }
        Ok(pairs.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for SingleValueMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(PairsVisitor {
            expecting: "a map of string parameters",
            marker: PhantomData,
        })
    }
}

impl<'de> Deserialize<'de> for MultiValueMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(PairsVisitor {
            expecting: "a map of repeatable string parameters",
            marker: PhantomData,
        })
    }
}

impl Serialize for SingleValueMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.inner.serialize(serializer)
    }
}

impl Serialize for MultiValueMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.inner.serialize(serializer)
    }
}
