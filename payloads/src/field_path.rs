//! Dotted field paths (`property.price.amount`, `pictures[0].name`) over a
//! JSON candidate record.

use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Key(String),
    Index(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Vec<Segment>);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldPathError {
    #[error("Field path is empty")]
    Empty,
    #[error("Empty segment in field path {0:?}")]
    EmptySegment(String),
    #[error("Invalid index in field path {0:?}")]
    InvalidIndex(String),
}

impl FieldPath {
    pub fn parse(path: &str) -> Result<Self, FieldPathError> {
        if path.is_empty() {
            return Err(FieldPathError::Empty);
        }

        let mut segments = Vec::new();
        for part in path.split('.') {
            let (key, mut rest) = match part.find('[') {
                Some(pos) => part.split_at(pos),
                None => (part, ""),
            };
            if key.is_empty() {
                return Err(FieldPathError::EmptySegment(path.to_string()));
            }
            segments.push(Segment::Key(key.to_string()));

            while !rest.is_empty() {
                let close = rest
                    .find(']')
                    .ok_or_else(|| FieldPathError::InvalidIndex(path.to_string()))?;
                let index = rest[1..close]
                    .parse::<usize>()
                    .map_err(|_| FieldPathError::InvalidIndex(path.to_string()))?;
                segments.push(Segment::Index(index));
                rest = &rest[close + 1..];
                if !rest.is_empty() && !rest.starts_with('[') {
                    return Err(FieldPathError::InvalidIndex(path.to_string()));
                }
            }
        }

        Ok(Self(segments))
    }

    /// Builds a path from plain object keys.
    pub fn from_keys(keys: &[&str]) -> Self {
        Self(keys.iter().map(|key| Segment::Key(key.to_string())).collect())
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// True when `self` equals `prefix` or lies underneath it.
    pub fn starts_with(&self, prefix: &FieldPath) -> bool {
        self.0.starts_with(&prefix.0)
    }

    pub fn get<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        self.0.iter().try_fold(root, |node, segment| match segment {
            Segment::Key(key) => node.as_object()?.get(key),
            Segment::Index(index) => node.as_array()?.get(*index),
        })
    }

    /// Writes `value` at this path, creating missing objects and arrays on
    /// the way. Existing nodes of the wrong shape are replaced; siblings are
    /// left untouched.
    pub fn set(&self, root: &mut Value, value: Value) {
        let mut node = root;
        for segment in &self.0 {
            node = match segment {
                Segment::Key(key) => {
                    if !node.is_object() {
                        *node = Value::Object(Map::new());
                    }
                    let Value::Object(map) = node else {
                        unreachable!("node was just made an object")
                    };
                    map.entry(key.clone()).or_insert(Value::Null)
                }
                Segment::Index(index) => {
                    if !node.is_array() {
                        *node = Value::Array(Vec::new());
                    }
                    let Value::Array(items) = node else {
                        unreachable!("node was just made an array")
                    };
                    if items.len() <= *index {
                        items.resize(*index + 1, Value::Null);
                    }
                    &mut items[*index]
                }
            };
        }
        *node = value;
    }
}

impl FromStr for FieldPath {
    type Err = FieldPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                Segment::Key(key) if i == 0 => write!(f, "{key}")?,
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_keys_and_indices() {
        let path = FieldPath::parse("pictures[2].name").unwrap();
        assert_eq!(
            path.segments(),
            &[
                Segment::Key("pictures".into()),
                Segment::Index(2),
                Segment::Key("name".into()),
            ]
        );
        assert_eq!(path.to_string(), "pictures[2].name");
    }

    #[test]
    fn rejects_malformed_paths() {
        assert_eq!(FieldPath::parse(""), Err(FieldPathError::Empty));
        assert!(matches!(
            FieldPath::parse("a..b"),
            Err(FieldPathError::EmptySegment(_))
        ));
        assert!(matches!(
            FieldPath::parse("a[x]"),
            Err(FieldPathError::InvalidIndex(_))
        ));
        assert!(matches!(
            FieldPath::parse("a[1"),
            Err(FieldPathError::InvalidIndex(_))
        ));
    }

    #[test]
    fn set_creates_branches_and_keeps_siblings() {
        let mut root = json!({"property": {"price": {"unit": "night"}}});
        FieldPath::parse("property.price.amount")
            .unwrap()
            .set(&mut root, json!(120));
        FieldPath::parse("property.address.city")
            .unwrap()
            .set(&mut root, json!("Lyon"));

        assert_eq!(
            root,
            json!({
                "property": {
                    "price": {"unit": "night", "amount": 120},
                    "address": {"city": "Lyon"}
                }
            })
        );
    }

    #[test]
    fn set_replaces_scalars_in_the_way() {
        let mut root = json!({"property": "oops"});
        let path = FieldPath::parse("property.capacity.rooms").unwrap();
        path.set(&mut root, json!(3));
        assert_eq!(path.get(&root), Some(&json!(3)));
    }

    #[test]
    fn set_pads_arrays() {
        let mut root = json!({});
        let path = FieldPath::parse("pictures[1]").unwrap();
        path.set(&mut root, json!("b.png"));
        assert_eq!(root, json!({"pictures": [null, "b.png"]}));
    }
}
