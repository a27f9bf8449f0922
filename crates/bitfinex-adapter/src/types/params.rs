/*
[INPUT]:  Endpoint arguments (symbols, amounts, flags, id lists)
[OUTPUT]: Ordered parameter sets for query strings and signed payloads
[POS]:    Data layer - request parameter container
[UPDATE]: When payload encoding or query flattening rules change
*/

use serde::Serialize;
use serde_json::{Map, Value};

use crate::http::Result;

/// Ordered mapping of request parameters.
///
/// Insertion order is kept, and overwriting a key keeps its original slot.
/// The signed payload depends on that order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParameterSet(Map<String, Value>);

impl ParameterSet {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Insert or overwrite a parameter
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Insert only when a value is present
    pub fn insert_opt<V: Into<Value>>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Append every entry of `other`, overwriting keys already present
    pub fn extend(&mut self, other: ParameterSet) {
        for (key, value) in other.0 {
            self.0.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Compact JSON bytes in insertion order
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.0)?)
    }

    /// Flatten into `key=value` pairs the way PHP `http_build_query` does:
    /// lists become `key[0]`, maps become `key[sub]`, booleans `1`/`0`,
    /// and nulls are dropped.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.0.len());
        for (key, value) in &self.0 {
            flatten_into(key.clone(), value, &mut pairs);
        }
        pairs
    }
}

fn flatten_into(key: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(flag) => pairs.push((key, if *flag { "1" } else { "0" }.to_string())),
        Value::Number(number) => pairs.push((key, number.to_string())),
        Value::String(text) => pairs.push((key, text.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_into(format!("{key}[{index}]"), item, pairs);
            }
        }
        Value::Object(entries) => {
            for (sub, item) in entries {
                flatten_into(format!("{key}[{sub}]"), item, pairs);
            }
        }
    }
}

impl From<Map<String, Value>> for ParameterSet {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<ParameterSet> for Value {
    fn from(params: ParameterSet) -> Self {
        Value::Object(params.0)
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterSet
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = ParameterSet::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}
