//! Selector-scoped variable blocks
//!
//! The text format consumers select from:
//!
//! ```text
//! SELECTOR {
//!   --key: value;
//! }
//! ```

use indexmap::IndexMap;
use serde::Serialize;

/// Ordered map of variable name to value
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FlatTokenMap(IndexMap<String, String>);

impl FlatTokenMap {
    /// Insert or replace a variable; a replaced entry keeps its position
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Render variables as one selector-scoped block
pub fn stringify(map: &FlatTokenMap, selector: &str) -> String {
    let mut out = format!("{selector} {{\n");
    for (key, value) in map.iter() {
        out.push_str(&format!("  {key}: {value};\n"));
    }
    out.push('}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stringify_block_shape() {
        let mut map = FlatTokenMap::default();
        map.insert("--a", "1");
        map.insert("--b-c", "#ffffff");
        assert_eq!(stringify(&map, ":root"), ":root {\n  --a: 1;\n  --b-c: #ffffff;\n}");
    }

    #[test]
    fn serializes_as_ordered_json_object() {
        let mut map = FlatTokenMap::default();
        map.insert("--z", "1");
        map.insert("--a", "2");
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"--z":"1","--a":"2"}"#
        );
    }
}
