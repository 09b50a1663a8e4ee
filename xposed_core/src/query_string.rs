//! Ordered query-string parsing and serialization
//!
//! Parsing follows form-urlencoding rules with bracket grouping: `tid[]=1&tid[]=2`
//! becomes one array parameter `tid`, and `field_geo[distance]=5` becomes an array
//! parameter keyed by `distance`. Parameter order is the order of first appearance.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The value of a single query parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// A plain `name=value` pair
    Scalar(String),
    /// Bracketed pairs `name[key]=value`, in order of appearance
    Array(Vec<(String, String)>),
}

impl ParamValue {
    /// Iterate over every value, ignoring array keys
    pub fn values(&self) -> impl Iterator<Item = &str> {
        let (scalar, array): (Option<&str>, &[(String, String)]) = match self {
            ParamValue::Scalar(value) => (Some(value.as_str()), &[]),
            ParamValue::Array(pairs) => (None, pairs.as_slice()),
        };
        scalar
            .into_iter()
            .chain(array.iter().map(|(_, value)| value.as_str()))
    }

    /// Look up an array entry by key
    pub fn get(&self, key: &str) -> Option<&str> {
        match self {
            ParamValue::Scalar(_) => None,
            ParamValue::Array(pairs) => pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
        }
    }

    /// The scalar value, if this is not an array
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            ParamValue::Scalar(value) => Some(value),
            ParamValue::Array(_) => None,
        }
    }

    /// An empty string or an array without entries
    pub fn is_empty(&self) -> bool {
        match self {
            ParamValue::Scalar(value) => value.is_empty(),
            ParamValue::Array(pairs) => pairs.is_empty(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Scalar(value)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        ParamValue::Array(
            values
                .into_iter()
                .enumerate()
                .map(|(index, value)| (index.to_string(), value.to_string()))
                .collect(),
        )
    }
}

/// An ordered mapping of query parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryParams {
    entries: Vec<(String, ParamValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string (without the leading `?`)
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = Self::new();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match split_bracket_key(&key) {
                Some((base, sub_key)) => params.push_array_entry(base, sub_key, &value),
                None => params.insert(&key, ParamValue::Scalar(value.into_owned())),
            }
        }

        params
    }

    /// Builder-style insert, mostly useful in tests
    pub fn with(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value.into());
        self
    }

    /// Insert or overwrite a parameter. An overwritten parameter keeps its position.
    pub fn insert(&mut self, name: &str, value: ParamValue) {
        if name.is_empty() {
            return;
        }

        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    /// Remove a parameter with all of its values
    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Keep only the parameters matching the predicate
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &ParamValue) -> bool) {
        self.entries.retain(|(key, value)| keep(key.as_str(), value));
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Serialize back to a form-encoded query string (without the leading `?`)
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.entries {
            match value {
                ParamValue::Scalar(value) => {
                    serializer.append_pair(name, value);
                }
                ParamValue::Array(pairs) => {
                    for (sub_key, value) in pairs {
                        serializer.append_pair(&format!("{}[{}]", name, sub_key), value);
                    }
                }
            }
        }
        serializer.finish()
    }

    fn push_array_entry(&mut self, base: &str, sub_key: Option<&str>, value: &str) {
        if base.is_empty() {
            return;
        }

        // A scalar followed by bracketed pairs of the same name is replaced
        let position = match self.entries.iter().position(|(key, _)| key == base) {
            Some(position) => {
                if !matches!(self.entries[position].1, ParamValue::Array(_)) {
                    self.entries[position].1 = ParamValue::Array(Vec::new());
                }
                position
            }
            None => {
                self.entries
                    .push((base.to_string(), ParamValue::Array(Vec::new())));
                self.entries.len() - 1
            }
        };

        let ParamValue::Array(pairs) = &mut self.entries[position].1 else {
            return;
        };

        match sub_key {
            Some(sub_key) => match pairs.iter_mut().find(|(key, _)| key == sub_key) {
                Some(pair) => pair.1 = value.to_string(),
                None => pairs.push((sub_key.to_string(), value.to_string())),
            },
            None => {
                let next_index = next_array_index(pairs);
                pairs.push((next_index.to_string(), value.to_string()));
            }
        }
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_query_string())
    }
}

/// Split `name[key]` into `("name", Some("key"))` and `name[]` into `("name", None)`.
/// Returns `None` for keys without a well-formed bracket suffix.
fn split_bracket_key(key: &str) -> Option<(&str, Option<&str>)> {
    let open = key.find('[')?;
    if !key.ends_with(']') {
        return None;
    }

    let base = &key[..open];
    let inner = &key[open + 1..key.len() - 1];
    if inner.is_empty() {
        Some((base, None))
    } else {
        Some((base, Some(inner)))
    }
}

/// Auto-index for `name[]`: one past the largest numeric key so far
fn next_array_index(pairs: &[(String, String)]) -> usize {
    pairs
        .iter()
        .filter_map(|(key, _)| key.parse::<usize>().ok())
        .max()
        .map(|max| max + 1)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_order() {
        let params = QueryParams::parse("b=2&a=1&c=3");
        let names: Vec<&str> = params.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_parse_strips_leading_question_mark() {
        let params = QueryParams::parse("?a=1");
        assert_eq!(params.get("a"), Some(&ParamValue::Scalar("1".to_string())));
    }

    #[test]
    fn test_parse_decodes_plus_and_percent() {
        let params = QueryParams::parse("title=red+car&city=S%C3%A3o%20Paulo");
        assert_eq!(params.get("title").and_then(|v| v.as_scalar()), Some("red car"));
        assert_eq!(params.get("city").and_then(|v| v.as_scalar()), Some("São Paulo"));
    }

    #[test]
    fn test_parse_key_without_value() {
        let params = QueryParams::parse("flag&a=1");
        assert_eq!(params.get("flag"), Some(&ParamValue::Scalar(String::new())));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_repeated_scalar_keeps_first_position_and_last_value() {
        let params = QueryParams::parse("a=1&b=2&a=3");
        let entries: Vec<(&str, Option<&str>)> =
            params.iter().map(|(k, v)| (k, v.as_scalar())).collect();
        assert_eq!(entries, vec![("a", Some("3")), ("b", Some("2"))]);
    }

    #[test]
    fn test_parse_auto_indexed_array() {
        let params = QueryParams::parse("tid%5B%5D=4&tid[]=9");
        assert_eq!(
            params.get("tid"),
            Some(&ParamValue::Array(vec![
                ("0".to_string(), "4".to_string()),
                ("1".to_string(), "9".to_string()),
            ]))
        );
    }

    #[test]
    fn test_parse_keyed_array() {
        let params = QueryParams::parse("geo[distance]=5&geo[unit]=km");
        let geo = params.get("geo").unwrap();
        assert_eq!(geo.get("distance"), Some("5"));
        assert_eq!(geo.get("unit"), Some("km"));
    }

    #[test]
    fn test_parse_drops_empty_base_name() {
        let params = QueryParams::parse("=1&[x]=2&a=3");
        assert_eq!(params.len(), 1);
        assert!(params.contains("a"));
    }

    #[test]
    fn test_unclosed_bracket_is_a_plain_key() {
        let params = QueryParams::parse("a[b=1");
        assert_eq!(params.get("a[b").and_then(|v| v.as_scalar()), Some("1"));
    }

    #[test]
    fn test_serialize_encodes_brackets_and_spaces() {
        let params = QueryParams::new()
            .with("q", "red car")
            .with("tid", vec!["4", "9"]);
        assert_eq!(
            params.to_query_string(),
            "q=red+car&tid%5B0%5D=4&tid%5B1%5D=9"
        );
    }

    #[test]
    fn test_remove_drops_all_array_values() {
        let mut params = QueryParams::parse("tid[]=1&tid[]=2&page=3");
        let removed = params.remove("tid");
        assert!(matches!(removed, Some(ParamValue::Array(ref pairs)) if pairs.len() == 2));
        assert_eq!(params.to_query_string(), "page=3");
    }

    #[test]
    fn test_remove_missing_is_none() {
        let mut params = QueryParams::parse("a=1");
        assert_eq!(params.remove("b"), None);
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_values_iterates_scalar_and_array() {
        let scalar = ParamValue::from("x");
        assert_eq!(scalar.values().collect::<Vec<_>>(), vec!["x"]);

        let array = ParamValue::from(vec!["a", "b"]);
        assert_eq!(array.values().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_values() {
        assert!(ParamValue::from("").is_empty());
        assert!(ParamValue::Array(Vec::new()).is_empty());
        assert!(!ParamValue::from("0").is_empty());
    }
}
