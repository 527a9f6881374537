//! Flat request parameters: the [`Params`] builder and date rendering.

use chrono::{NaiveDateTime, Timelike};

/// Page size sent by every listing operation.
pub const DEFAULT_LIMIT: u32 = 100;

/// Key whose value is sent as `Authorization: Bearer <token>`.
pub(crate) const ACCESS_TOKEN: &str = "access_token";

/// Key whose value is sent as the `access_token` query parameter.
pub(crate) const ACCESS_TOKEN_QUERY: &str = "access_token_query";

/// Ordered mapping of parameter names to their rendered values.
///
/// Inserting a key that is already present replaces its value in place, so
/// the first insertion order is what ends up on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to the string rendering of `value`.
    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.insert(key, value.to_string());
        self
    }

    /// Sets `key` only when a value is given.
    pub fn with_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    /// Sets the page size.
    pub fn with_limit(self, limit: u32) -> Self {
        self.with("limit", limit)
    }

    /// Attaches a user token to be sent as a bearer header.
    pub fn with_access_token(self, token: &str) -> Self {
        self.with(ACCESS_TOKEN, token)
    }

    /// Attaches a user token to be sent in the query string as `access_token`.
    pub fn with_access_token_query(self, token: &str) -> Self {
        self.with(ACCESS_TOKEN_QUERY, token)
    }

    pub fn insert(&mut self, key: &str, value: String) {
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.pairs.iter().position(|(k, _)| k == key)?;
        Some(self.pairs.remove(index).1)
    }

    /// Removes and returns a token entry, but only when it is non-empty.
    /// An empty token stays in place as an ordinary parameter.
    pub(crate) fn take_token(&mut self, key: &str) -> Option<String> {
        if self.get(key).is_some_and(|token| !token.is_empty()) {
            self.remove(key)
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

/// Renders a date-time as ISO-8601 (`2024-01-15T00:00:00`).
///
/// Sub-second precision is microseconds: when non-zero they are written
/// with exactly six digits, and anything finer is truncated.
pub fn iso_datetime(datetime: &NaiveDateTime) -> String {
    if datetime.nanosecond() / 1_000 == 0 {
        datetime.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        datetime.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}
