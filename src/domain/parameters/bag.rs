//! Case-insensitive parameter bag.

use serde::de::{self, Deserializer, MapAccess};
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use super::ParameterValue;

/// Normalizes a parameter name to its stored form.
pub fn normalize_key(key: &str) -> String {
    key.to_uppercase()
}

/// Flat mapping from parameter name to scalar value.
///
/// Names are case-insensitive: every key is stored upper-cased, so `amount`,
/// `Amount` and `AMOUNT` address the same entry and the last write wins.
/// When deserializing, "last" means last in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(into = "BTreeMap<String, ParameterValue>")]
pub struct ParameterBag {
    entries: BTreeMap<String, ParameterValue>,
}

impl ParameterBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, returning the previous value stored under the same
    /// case-insensitive name.
    pub fn insert(
        &mut self,
        key: impl AsRef<str>,
        value: impl Into<ParameterValue>,
    ) -> Option<ParameterValue> {
        self.entries
            .insert(normalize_key(key.as_ref()), value.into())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl AsRef<str>, value: impl Into<ParameterValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Looks up a value by case-insensitive name.
    pub fn get(&self, key: &str) -> Option<&ParameterValue> {
        self.entries.get(&normalize_key(key))
    }

    /// Returns the canonical string form of a value, if present.
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.get(key).map(|value| value.canonical().into_owned())
    }

    /// Returns the canonical form if the value is present and non-empty.
    pub fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get_str(key).filter(|value| !value.is_empty())
    }

    /// Returns true if the name is present, even with a null value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&normalize_key(key))
    }

    /// Returns true if the name is absent or explicitly null.
    pub fn is_unset(&self, key: &str) -> bool {
        self.get(key).map_or(true, ParameterValue::is_null)
    }

    /// Removes a value by case-insensitive name.
    pub fn remove(&mut self, key: &str) -> Option<ParameterValue> {
        self.entries.remove(&normalize_key(key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ParameterValue> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Fills in every default whose name is not already present.
    ///
    /// Values already in the bag win over defaults.
    pub fn merge_defaults(&mut self, defaults: &ParameterBag) {
        for (key, value) in defaults.iter() {
            self.entries
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
    }

    /// Drops every entry whose canonical form is empty.
    pub fn retain_non_empty(&mut self) {
        self.entries.retain(|_, value| !value.is_empty());
    }

    /// Overwrites entries with the values from `other`, keeping the rest.
    pub fn replace_with(&mut self, other: &ParameterBag) {
        for (key, value) in other.iter() {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    /// Returns a new bag holding only the named entries that are present.
    pub fn subset<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> ParameterBag {
        names
            .into_iter()
            .filter_map(|name| {
                let key = normalize_key(name);
                self.entries.get(&key).map(|value| (key, value.clone()))
            })
            .collect()
    }

    /// Converts the bag into form fields for a POST redirect.
    pub fn to_form_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.clone(), value.canonical().into_owned()))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterBag
where
    K: AsRef<str>,
    V: Into<ParameterValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = ParameterBag::new();
        bag.extend(iter);
        bag
    }
}

impl<K, V> Extend<(K, V)> for ParameterBag
where
    K: AsRef<str>,
    V: Into<ParameterValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for ParameterBag {
    type Item = (String, ParameterValue);
    type IntoIter = btree_map::IntoIter<String, ParameterValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParameterBag {
    type Item = (&'a String, &'a ParameterValue);
    type IntoIter = btree_map::Iter<'a, String, ParameterValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'de> Deserialize<'de> for ParameterBag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BagVisitor;

        impl<'de> de::Visitor<'de> for BagVisitor {
            type Value = ParameterBag;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of parameter names to scalar values")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut bag = ParameterBag::new();
                while let Some((key, value)) = map.next_entry::<String, ParameterValue>()? {
                    bag.insert(key, value);
                }
                Ok(bag)
            }
        }

        deserializer.deserialize_map(BagVisitor)
    }
}

impl From<ParameterBag> for BTreeMap<String, ParameterValue> {
    fn from(bag: ParameterBag) -> Self {
        bag.entries
    }
}
