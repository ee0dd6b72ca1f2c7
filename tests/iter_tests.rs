use conftree::{node, Error, Node};

fn texts<'a>(iter: impl Iterator<Item = &'a Node>) -> Vec<String> {
    iter.map(ToString::to_string).collect()
}

#[test]
fn test_array_iterates_in_order() {
    let list = node!(["a", "b", "c"]);
    assert_eq!(texts(list.iter()), vec!["a", "b", "c"]);
    assert_eq!(texts(list.iter().rev()), vec!["c", "b", "a"]);
}

#[test]
fn test_object_iterates_in_key_order() {
    let mut object = Node::new();
    for key in ["delta", "alpha", "charlie", "bravo"] {
        object.insert(key, key.len()).unwrap();
    }
    let keys: Vec<&str> = object.keys().collect();
    assert_eq!(keys, vec!["alpha", "bravo", "charlie", "delta"]);
    assert_eq!(texts(object.iter()), vec!["5", "5", "7", "5"]);

    let entries: Vec<(&str, String)> = object
        .entries()
        .map(|(key, value)| (key, value.to_string()))
        .collect();
    assert_eq!(entries[2], ("charlie", "7".to_string()));
}

#[test]
fn test_value_iterates_once() {
    let scalar = Node::from("only");
    let items: Vec<&Node> = scalar.iter().collect();
    assert_eq!(items.len(), 1);
    assert!(std::ptr::eq(items[0], &scalar));
    assert_eq!(scalar.iter().rev().count(), 1);
}

#[test]
fn test_null_iterates_nothing() {
    let null = Node::new();
    assert_eq!(null.iter().count(), 0);
    assert_eq!(null.begin(), null.end());
    assert!(null.begin().is_end());
    assert_eq!(null.entries().count(), 0);
}

#[test]
fn test_empty_containers_iterate_nothing() {
    for empty in [Node::array(), Node::object()] {
        assert_eq!(empty.iter().count(), 0);
        assert_eq!(empty.begin(), empty.end());
    }
}

#[test]
fn test_cursor_walks_both_directions() {
    let list = node!([10, 20, 30]);
    let mut cursor = list.begin();

    assert_eq!(cursor.get().unwrap(), "10");
    cursor.move_next().unwrap();
    cursor.move_next().unwrap();
    assert_eq!(cursor.get().unwrap(), "30");
    cursor.move_next().unwrap();
    assert!(cursor.is_end());
    assert_eq!(cursor, list.end());

    cursor.move_prev().unwrap();
    assert_eq!(cursor.get().unwrap(), "30");
}

#[test]
fn test_cursor_past_either_end_is_out_of_range() {
    let list = node!([1]);

    let mut end = list.end();
    assert!(matches!(end.get(), Err(Error::OutOfRange { index: 1, len: 1 })));
    assert!(matches!(end.move_next(), Err(Error::OutOfRange { .. })));
    assert_eq!(end, list.end());

    let mut begin = list.begin();
    assert!(matches!(begin.move_prev(), Err(Error::OutOfRange { .. })));
    assert_eq!(begin, list.begin());
}

#[test]
fn test_cursor_on_value_node() {
    let scalar = Node::from(5);
    let mut cursor = scalar.begin();
    assert!(std::ptr::eq(cursor.get().unwrap(), &scalar));
    cursor.move_next().unwrap();
    assert_eq!(cursor, scalar.end());
    assert!(cursor.get().is_err());
}

#[test]
fn test_cursor_key_over_object() {
    let object = node!({ "b": 2, "a": 1 });
    let mut cursor = object.begin();
    assert_eq!(cursor.key(), Some("a"));
    cursor.move_next().unwrap();
    assert_eq!(cursor.key(), Some("b"));
    cursor.move_next().unwrap();
    assert_eq!(cursor.key(), None);

    assert_eq!(node!([1]).begin().key(), None);
}

#[test]
fn test_cursor_ordering_and_distance() {
    let list = node!([1, 2, 3, 4]);
    let begin = list.begin();
    let mut middle = list.begin();
    middle.move_next().unwrap();
    middle.move_next().unwrap();

    assert!(begin < middle);
    assert!(middle < list.end());
    assert_eq!(middle.offset_from(&begin), Some(2));
    assert_eq!(begin.offset_from(&middle), Some(-2));
    assert_eq!(list.end().offset_from(&list.begin()), Some(4));
}

#[test]
fn test_cursors_from_equal_but_distinct_nodes_differ() {
    let left = node!([1, 2]);
    let right = node!([1, 2]);
    assert_eq!(left, right);
    assert_ne!(left.begin(), right.begin());
    assert!(left.begin().partial_cmp(&right.begin()).is_none());
    assert!(left.end().offset_from(&right.begin()).is_none());
}

#[test]
fn test_iter_is_exact_size() {
    let list = node!([1, 2, 3]);
    let mut iter = list.iter();
    assert_eq!(iter.len(), 3);
    iter.next();
    assert_eq!(iter.len(), 2);
    iter.next_back();
    assert_eq!(iter.len(), 1);
    assert_eq!(iter.next().unwrap(), "2");
    assert!(iter.next().is_none());
    assert!(iter.next_back().is_none());
}

#[test]
fn test_for_loop_over_reference() {
    let list = node!(["x", "y"]);
    let mut seen = Vec::new();
    for item in &list {
        seen.push(item.to_string());
    }
    assert_eq!(seen, vec!["x", "y"]);
}

#[test]
fn test_iter_mut_rewrites_children() {
    let mut list = node!([1, 2, 3]);
    for mut item in &mut list {
        let doubled = item.value_as::<i32>().unwrap() * 2;
        item.set(doubled);
    }
    assert_eq!(list, node!([2, 4, 6]));
    for item in list.iter() {
        assert_eq!(item.parent(), Some(list.id()));
    }
}

#[test]
fn test_iter_mut_over_object_values() {
    let mut object = node!({ "a": "x", "b": "y" });
    for mut value in object.iter_mut() {
        *value = node!([true]);
    }
    assert_eq!(object["a"], node!([true]));
    assert_eq!(object["b"][0], "true");
    assert_eq!(object["b"].parent(), Some(object.id()));
}

#[test]
fn test_iter_mut_on_null_and_value() {
    let mut null = Node::new();
    assert_eq!(null.iter_mut().count(), 0);

    let mut scalar = Node::from("a");
    for mut item in scalar.iter_mut() {
        item.set("b");
    }
    assert_eq!(scalar, "b");
}
