/// Builds a [`Node`](crate::Node) tree from a JSON-like literal.
///
/// Scalars go through `Node::from`, so any type with a scalar form works.
///
/// # Examples
///
/// ```rust
/// use conftree::node;
///
/// let config = node!({
///     "host": "localhost",
///     "port": 8080,
///     "features": ["auth", "logging"],
///     "proxy": null
/// });
///
/// assert_eq!(config["port"], "8080");
/// assert_eq!(config["features"].len(), 2);
/// assert!(config["proxy"].is_null());
/// ```
#[macro_export]
macro_rules! node {
    (null) => {
        $crate::Node::new()
    };

    ([]) => {
        $crate::Node::array()
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Node::from(::std::vec![$($crate::node!($elem)),*])
    };

    ({}) => {
        $crate::Node::object()
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut entries = $crate::NodeMap::new();
        $(
            entries.insert(::std::string::String::from($key), $crate::node!($value));
        )*
        $crate::Node::from(entries)
    }};

    // Any other expression, e.g. a string, number or an existing node
    ($other:expr) => {
        $crate::Node::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Node, NodeMap};

    #[test]
    fn test_node_macro_primitives() {
        assert!(node!(null).is_null());
        assert_eq!(node!(true), Node::from("true"));
        assert_eq!(node!(42), Node::from("42"));
        assert_eq!(node!(3.5), Node::from("3.5"));
        assert_eq!(node!("hello"), Node::from("hello"));
    }

    #[test]
    fn test_node_macro_containers() {
        assert_eq!(node!([]), Node::array());
        assert_eq!(node!({}), Node::from(NodeMap::new()));

        let list = node!([1, "two", null]);
        assert_eq!(list.len(), 3);
        assert_eq!(list[1], "two");
        assert!(list[2].is_null());
        assert_eq!(list[0].parent(), Some(list.id()));
    }
}
