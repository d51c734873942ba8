use std::collections::HashMap;

/// Decoded query string parameters of a request target.
///
/// Built by [`parse_path`](crate::codec::parse_path); names and values are already
/// percent-decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    data: HashMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Single(String),
    Multi(Vec<String>),
}

impl Value {
    /// The first value received for the name.
    pub fn first(&self) -> &str {
        match self {
            Value::Single(v) => v,
            // Multi is only created from an existing Single, so it is never empty
            Value::Multi(vec) => vec.first().map_or("", String::as_str),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let values: &[String] = match self {
            Value::Single(v) => std::slice::from_ref(v),
            Value::Multi(vec) => vec,
        };
        values.iter().map(String::as_str)
    }
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Shorthand for the first value of `key`.
    pub fn get_first(&self, key: &str) -> Option<&str> {
        self.get(key).map(Value::first)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.data.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Adds a pair; a repeated name turns its entry into [`Value::Multi`].
    pub fn insert(&mut self, key: String, value: String) {
        match self.data.get_mut(&key) {
            Some(old_value) => match old_value {
                Value::Single(v) => {
                    let first = std::mem::take(v);
                    *old_value = Value::Multi(vec![first, value]);
                }
                Value::Multi(vec) => vec.push(value),
            },
            None => {
                self.data.insert(key, Value::Single(value));
            }
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Query {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut query = Query::new();
        for (key, value) in iter {
            query.insert(key.into(), value.into());
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_empty() {
        let query = Query::new();
        assert!(query.is_empty());
        assert_eq!(query.get("a"), None);
    }

    #[test]
    fn test_query_insert() {
        let query: Query = [("a", ""), ("b", "2"), ("c", ""), ("a", "42"), ("a", "7")].into_iter().collect();

        assert_eq!(query.len(), 3);
        assert_eq!(query.get("a"), Some(&Value::Multi(vec!["".into(), "42".into(), "7".into()])));
        assert_eq!(query.get("b"), Some(&Value::Single("2".into())));
        assert_eq!(query.get_first("a"), Some(""));
        assert_eq!(query.get_first("c"), Some(""));
        assert_eq!(query.get("a").unwrap().iter().collect::<Vec<_>>(), vec!["", "42", "7"]);
        assert_eq!(query.get("b").unwrap().iter().collect::<Vec<_>>(), vec!["2"]);
    }
}
