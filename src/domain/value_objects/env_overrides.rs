//! Environment override value object.

use std::collections::BTreeMap;

use serde::Serialize;

/// Ordered `KEY=VALUE` pairs passed through to the platform.
///
/// Keys are checked for shape only; values are never inspected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EnvOverrides {
    vars: BTreeMap<String, String>,
}

impl EnvOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a single `KEY=VALUE` argument. The value may itself contain `=`.
    pub fn parse_pair(raw: &str) -> Option<(String, String)> {
        let (key, value) = raw.split_once('=')?;
        let key = key.trim();
        if !is_valid_key(key) {
            return None;
        }
        Some((key.to_string(), value.to_string()))
    }

    /// Insert or replace a variable. Returns false when the key is malformed.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if !is_valid_key(&key) {
            return false;
        }
        self.vars.insert(key, value.into());
        true
    }

    /// Layer `other` on top of `self`; later values win.
    pub fn merge(mut self, other: &EnvOverrides) -> Self {
        for (k, v) in &other.vars {
            self.vars.insert(k.clone(), v.clone());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> Vec<String> {
        self.vars.keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvOverrides {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut overrides = Self::new();
        for (k, v) in iter {
            overrides.set(k, v);
        }
        overrides
    }
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.contains('=')
        && !key.contains('\0')
        && !key.contains(char::is_whitespace)
}
