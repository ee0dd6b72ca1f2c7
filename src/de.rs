//! Serde deserialization into a [`Node`] tree.
//!
//! `Node` implements [`Deserialize`], so any self-describing serde format can build a
//! tree directly. Unlike [`JsonBuilder`](crate::JsonBuilder), which keeps JSON
//! literals verbatim, this path stores the decoded value: strings lose their quotes,
//! numbers and booleans use their canonical scalar text, and unit or `None` becomes
//! a null node.
//!
//! ## Examples
//!
//! ```rust
//! use conftree::Node;
//!
//! let tree: Node = serde_json::from_str(r#"{"name": "conf", "retries": 3}"#).unwrap();
//! assert_eq!(tree["name"], "conf");
//! assert_eq!(tree["retries"].value_as::<u8>().unwrap(), 3);
//! ```

use crate::{Node, NodeMap};
use serde::de::{self, Deserialize, Deserializer, Visitor};
use std::fmt;

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NodeVisitor;

        impl<'de> Visitor<'de> for NodeVisitor {
            type Value = Node;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any tree value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Node, E> {
                Ok(Node::from(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Node, E> {
                Ok(Node::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Node, E> {
                Ok(Node::from(value))
            }

            fn visit_i128<E>(self, value: i128) -> Result<Node, E> {
                Ok(Node::from(value))
            }

            fn visit_u128<E>(self, value: u128) -> Result<Node, E> {
                Ok(Node::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Node, E> {
                Ok(Node::from(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Node, E> {
                Ok(Node::value(value))
            }

            fn visit_string<E>(self, value: String) -> Result<Node, E> {
                Ok(Node::value(value))
            }

            fn visit_unit<E>(self) -> Result<Node, E> {
                Ok(Node::new())
            }

            fn visit_none<E>(self) -> Result<Node, E> {
                Ok(Node::new())
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Node, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Node, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element::<Node>()? {
                    items.push(item);
                }
                Ok(Node::from(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Node, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut entries = NodeMap::new();
                while let Some((key, value)) = map.next_entry::<String, Node>()? {
                    entries.insert(key, value);
                }
                Ok(Node::from(entries))
            }
        }

        deserializer.deserialize_any(NodeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_nested() {
        let tree: Node = serde_json::from_str(r#"{"a": [1, "two", null, false]}"#).unwrap();
        let list = &tree["a"];
        assert!(list.is_array());
        assert_eq!(list[0], "1");
        assert_eq!(list[1], "two");
        assert!(list[2].is_null());
        assert_eq!(list[3], "false");
        assert_eq!(list[0].parent(), Some(list.id()));
        assert_eq!(list.parent(), Some(tree.id()));
    }

    #[test]
    fn test_deserialize_float() {
        let tree: Node = serde_json::from_str("[0.25]").unwrap();
        assert_eq!(tree[0].value_as::<f64>().unwrap(), 0.25);
    }
}
