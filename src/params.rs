//! Request Parameters
//!
//! Query parameters and the canonical cache key derived from them.

use std::collections::BTreeMap;
use std::fmt::Display;

/// Separator between the endpoint and its canonical parameters in a cache key.
pub const KEY_SEPARATOR: &str = "::";

/// Separator between `name=value` pairs in the canonical parameter string.
pub const PAIR_DELIMITER: &str = "&";

// == Params ==
/// A set of scalar query parameters.
///
/// Names are kept sorted, so two sets built in different orders compare and
/// render identically. Setting a name twice keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: BTreeMap<String, String>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, rendering the value with its `Display` impl.
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds a parameter only when `value` is `Some`.
    pub fn with_opt<T: Display>(self, name: impl Into<String>, value: Option<T>) -> Self {
        match value {
            Some(value) => self.with(name, value),
            None => self,
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Display) {
        self.values.insert(name.into(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Iterates `(name, value)` pairs sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sorted pairs as owned tuples, ready to hand to a transport.
    pub fn to_query(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// `name=value` pairs sorted by name and joined with [`PAIR_DELIMITER`].
    /// Names and values are form-urlencoded, so a `&` or `=` inside a value
    /// cannot collide with a different parameter set. Empty when there are
    /// no parameters.
    pub fn canonical(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{}={}", encode(name), encode(value)))
            .collect::<Vec<_>>()
            .join(PAIR_DELIMITER)
    }
}

fn encode(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

// == Cache Key ==
/// Derives the cache key for a request.
///
/// `endpoint` alone when there are no parameters, otherwise
/// `endpoint::name=value&name=value` with names in sorted order.
pub fn cache_key(endpoint: &str, params: &Params) -> String {
    if params.is_empty() {
        endpoint.to_string()
    } else {
        format!("{}{}{}", endpoint, KEY_SEPARATOR, params.canonical())
    }
}
