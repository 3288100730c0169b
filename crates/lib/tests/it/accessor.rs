//! Reader, writer and editor integration tests over Value trees

use propedit::{
    PropertyPath, build_editor, build_reader, build_writer, get_property_editor, get_property_reader,
    get_property_writer,
    container::MAX_PADDING,
    path::PathBuilder,
    value::{Doc, List, Value},
};

use crate::helpers::{empty_root, read_at, root_from_json, write_at};

// ===== READS =====

#[test]
fn test_read_non_nested_property() {
    let root = root_from_json(r#"{"test": 16}"#);
    let reader = get_property_reader(&root, "test").unwrap();
    assert_eq!(reader.read_as::<i64>(), Some(16));
}

#[test]
fn test_read_nested_property() {
    let root = root_from_json(r#"{"test": {"nested": 16}}"#);
    assert_eq!(read_at(&root, "test.nested"), Some(&Value::Int(16)));
}

#[test]
fn test_read_non_nested_array() {
    let root = root_from_json(r#"{"test": [16, 1, 1992]}"#);
    assert_eq!(read_at(&root, "test[1]"), Some(&Value::Int(1)));
}

#[test]
fn test_read_nested_array() {
    let root = root_from_json(r#"{"test": {"nested": [16, 1, 1992]}}"#);
    assert_eq!(read_at(&root, "test.nested[2]"), Some(&Value::Int(1992)));
}

#[test]
fn test_read_nested_object_in_nested_array() {
    let root = root_from_json(r#"{"test": {"nested": [{"test": 16}, {"test": 1}]}}"#);
    assert_eq!(read_at(&root, "test.nested[1].test"), Some(&Value::Int(1)));
}

#[test]
fn test_read_nested_array_in_nested_array() {
    let root = root_from_json(r#"{"test": [[16], [1], [1992]]}"#);
    assert_eq!(read_at(&root, "test[1][0]"), Some(&Value::Int(1)));
}

#[test]
fn test_read_missing_intermediate_is_none() {
    let root = root_from_json(r#"{"test": {"nested": [16]}}"#);
    for path in [
        "missing",
        "missing.deeper.still",
        "test.other[3].x",
        "test.nested[5]",
        "test.nested[0].x",
        "test.nested.x",
        "test[0]",
    ] {
        assert_eq!(read_at(&root, path), None, "'{path}' should read as None");
    }
}

#[test]
fn test_read_explicit_null_is_none() {
    let root = root_from_json(r#"{"a": null, "b": {"c": null}}"#);
    assert_eq!(read_at(&root, "a"), None);
    assert_eq!(read_at(&root, "a.x"), None);
    assert_eq!(read_at(&root, "b.c"), None);
}

#[test]
fn test_editor_reads_see_its_own_writes() {
    let mut root = empty_root();
    let path: PropertyPath = "a.b".parse().unwrap();
    let mut editor = build_editor(&mut root, path).unwrap();
    assert_eq!(editor.read(), None);

    editor.write("now here").unwrap();
    assert_eq!(editor.read_as::<&str>(), Some("now here"));
    assert_eq!(editor.read_cloned(), Some(Value::from("now here")));
}

#[test]
fn test_read_as_wrong_type_is_none() {
    let root = root_from_json(r#"{"n": 5}"#);
    let reader = get_property_reader(&root, "n").unwrap();
    assert_eq!(reader.read_as::<String>(), None);
    assert_eq!(reader.read_as::<i64>(), Some(5));
}

// ===== WRITES =====

#[test]
fn test_write_non_nested_property() {
    let mut root = empty_root();
    write_at(&mut root, "test", 1);
    assert_eq!(root.to_json_string(), r#"{"test":1}"#);
}

#[test]
fn test_write_nested_property() {
    let mut root = empty_root();
    write_at(&mut root, "test.nested", 1);
    assert_eq!(root.to_json_string(), r#"{"test":{"nested":1}}"#);
}

#[test]
fn test_write_non_nested_array() {
    let mut root = empty_root();
    write_at(&mut root, "test[1]", 1);
    assert_eq!(root.to_json_string(), r#"{"test":[null,1]}"#);
}

#[test]
fn test_write_nested_array() {
    let mut root = empty_root();
    write_at(&mut root, "test.nested[1]", 1);
    assert_eq!(root.to_json_string(), r#"{"test":{"nested":[null,1]}}"#);
}

#[test]
fn test_write_nested_object_in_nested_array() {
    let mut root = empty_root();
    write_at(&mut root, "test.nested[1].test", 1);
    assert_eq!(
        root.to_json_string(),
        r#"{"test":{"nested":[null,{"test":1}]}}"#
    );
}

#[test]
fn test_write_nested_array_in_nested_array() {
    let mut root = empty_root();
    write_at(&mut root, "test[1][0]", 1);
    assert_eq!(root.to_json_string(), r#"{"test":[null,[1]]}"#);
}

#[test]
fn test_write_into_existing_structure_keeps_siblings() {
    let mut root = root_from_json(r#"{"a": {"keep": true, "list": [1, 2]}}"#);
    write_at(&mut root, "a.list[1]", 20);
    write_at(&mut root, "a.new", "x");
    assert_eq!(
        root.to_json_string(),
        r#"{"a":{"keep":true,"list":[1,20],"new":"x"}}"#
    );
}

#[test]
fn test_write_then_read_round_trip_on_empty_container() {
    let paths = [
        "a",
        "a.b.c",
        "a[2]",
        "a[1][2][0]",
        "a.b[3].c",
        "a[0].b[1].c",
        "x.y.z[4][1].w",
    ];
    for path in paths {
        let mut root = empty_root();
        let mut editor = get_property_editor(&mut root, path).unwrap();
        editor.write("value").unwrap();
        assert_eq!(
            editor.read_as::<&str>(),
            Some("value"),
            "round trip through '{path}'"
        );
    }
}

#[test]
fn test_write_of_read_is_noop() {
    let original = root_from_json(r#"{"a": {"b": [1, {"c": "deep"}], "d": false}}"#);
    for path in ["a.b[0]", "a.b[1].c", "a.d", "a.b", "a"] {
        let mut root = original.clone();
        let mut editor = get_property_editor(&mut root, path).unwrap();
        let current = editor.read_cloned();
        // `a.d` holds false, which still reads as a present value
        assert!(current.is_some(), "'{path}' should be readable");
        editor.write(current).unwrap();
        assert_eq!(root, original, "'{path}' write(read()) should not change anything");
    }
}

#[test]
fn test_writer_is_reusable() {
    let mut root = empty_root();
    let mut writer = get_property_writer(&mut root, "counter.value").unwrap();
    for i in 0..3 {
        writer.write(i).unwrap();
    }
    assert_eq!(read_at(&root, "counter.value"), Some(&Value::Int(2)));
}

#[test]
fn test_writer_recreates_nodes_removed_between_writes() {
    let mut root = empty_root();
    write_at(&mut root, "a.b[0]", 1);

    root.as_doc_mut().unwrap().remove("a");
    assert_eq!(read_at(&root, "a.b[0]"), None);

    write_at(&mut root, "a.b[0]", 2);
    assert_eq!(root.to_json_string(), r#"{"a":{"b":[2]}}"#);
}

#[test]
fn test_write_replaces_falsy_intermediates() {
    let mut root = root_from_json(r#"{"zero": 0, "off": false, "blank": "", "nothing": null}"#);
    for key in ["zero", "off", "blank", "nothing"] {
        write_at(&mut root, &format!("{key}[0]"), key);
    }
    assert_eq!(
        root.to_json_string(),
        r#"{"blank":["blank"],"nothing":["nothing"],"off":["off"],"zero":["zero"]}"#
    );
}

#[test]
fn test_write_through_scalar_is_shape_mismatch() {
    let mut root = root_from_json(r#"{"name": "Alice"}"#);
    let mut writer = get_property_writer(&mut root, "name.first").unwrap();
    let err = writer.write("A").unwrap_err();
    assert!(err.is_shape_mismatch());
    assert_eq!(
        err.to_string(),
        "Cannot write 'name.first' at 'name': expected record, found text"
    );
}

#[test]
fn test_write_index_into_record_is_shape_mismatch() {
    let mut root = root_from_json(r#"{"a": {"b": 1}}"#);
    let err = get_property_writer(&mut root, "a[0]")
        .unwrap()
        .write(1)
        .unwrap_err();
    assert!(err.is_shape_mismatch());

    let err = get_property_writer(&mut root, "a.b.c")
        .unwrap()
        .write(1)
        .unwrap_err();
    assert!(err.is_shape_mismatch());
}

#[test]
fn test_failed_write_leaves_container_unchanged() {
    let original = root_from_json(r#"{"a": {"b": 7, "list": [1]}}"#);
    for path in ["a.b.c", "a.list.x.y", "a[0].z"] {
        let mut root = original.clone();
        let err = get_property_writer(&mut root, path)
            .unwrap()
            .write(1)
            .unwrap_err();
        assert!(err.is_shape_mismatch(), "'{path}' should not be writable");
        assert_eq!(root, original);
    }
}

// ===== CONSTRUCTION ERRORS =====

#[test]
fn test_scalar_container_is_rejected() {
    for mut root in [Value::Null, Value::Int(1), Value::from("text"), Value::Bool(true)] {
        let err = get_property_reader(&root, "a").unwrap_err();
        assert!(err.is_invalid_container());
        let err = get_property_writer(&mut root, "a").unwrap_err();
        assert!(err.is_invalid_container());
        let err = get_property_editor(&mut root, "a").unwrap_err();
        assert!(err.is_invalid_container());
    }
}

#[test]
fn test_empty_segment_list_is_missing_path() {
    let mut root = empty_root();
    let empty = PathBuilder::new().build();
    assert!(build_reader(&root, empty.clone()).unwrap_err().is_missing_path());
    assert!(build_writer(&mut root, empty).unwrap_err().is_missing_path());
}

#[test]
fn test_empty_string_is_invalid_path_not_missing() {
    let root = empty_root();
    let err = get_property_reader(&root, "").unwrap_err();
    assert!(err.is_invalid_path());
    assert!(!err.is_missing_path());
}

// ===== EDITOR =====

#[test]
fn test_editor_read_write() {
    let mut root = Value::Doc(Doc::new().with_list("scores", List::from_iter([10, 20])));
    let mut editor = get_property_editor(&mut root, "scores[1]").unwrap();

    assert_eq!(editor.read_as::<i64>(), Some(20));
    editor.write(25).unwrap();
    assert_eq!(editor.read_as::<i64>(), Some(25));
    assert_eq!(editor.path().to_string(), "scores[1]");
}

#[test]
fn test_editor_modify() {
    let mut root = root_from_json(r#"{"user": {"name": "ali"}}"#);
    let mut editor = get_property_editor(&mut root, "user.name").unwrap();
    let modified = editor
        .modify::<String, _>(|name| name.push_str("ce"))
        .unwrap();
    assert!(modified);
    assert_eq!(read_at(&root, "user.name"), Some(&Value::from("alice")));
}

#[test]
fn test_editor_modify_wrong_type_does_not_write() {
    let mut root = root_from_json(r#"{"count": "five"}"#);
    let mut editor = get_property_editor(&mut root, "count").unwrap();
    assert!(!editor.modify::<i64, _>(|n| *n += 1).unwrap());
    assert_eq!(editor.read_as::<&str>(), Some("five"));
}

// ===== VALUE CONVENIENCES =====

#[test]
fn test_value_get_and_set_path() {
    let mut root = empty_root();
    root.set_path("settings.theme.colors[2]", "blue").unwrap();
    assert_eq!(
        root.get_path("settings.theme.colors[2]").unwrap(),
        Some(&Value::from("blue"))
    );
    assert_eq!(root.get_path("settings.theme.colors[0]").unwrap(), None);
    assert!(root.get_path("settings..theme").unwrap_err().is_invalid_path());
}

// ===== INDEX LIMITS =====

#[test]
fn test_write_at_max_index_fails_cleanly() {
    let path = format!("a[{}]", usize::MAX);
    assert!(propedit::parse(&path).is_ok());

    for original in [empty_root(), root_from_json(r#"{"a": [1, 2]}"#)] {
        let mut root = original.clone();
        let err = get_property_writer(&mut root, &path)
            .unwrap()
            .write(1)
            .unwrap_err();
        assert!(err.is_index_out_of_range());
        assert_eq!(root, original);
    }
}

#[test]
fn test_write_at_huge_index_fails_cleanly() {
    let original = root_from_json(r#"{"a": [1], "b": {"c": 0}}"#);
    for path in ["a[100000000000]", "b.c[100000000000].d", "x.y[100000000000]"] {
        let mut root = original.clone();
        let err = get_property_writer(&mut root, path)
            .unwrap()
            .write(1)
            .unwrap_err();
        assert!(err.is_index_out_of_range(), "'{path}' should be out of range");
        assert_eq!(err.path(), Some(path));
        assert_eq!(root, original);
    }
}

#[test]
fn test_out_of_range_surfaces_through_crate_error() {
    let mut root = empty_root();
    let err = root
        .set_path(&format!("list[{}]", MAX_PADDING + 1), true)
        .unwrap_err();
    assert!(err.is_index_out_of_range());
    assert_eq!(err.module(), "accessor");
    assert_eq!(root, empty_root());

    root.set_path(&format!("list[{MAX_PADDING}]"), true).unwrap();
    let list = root.get_path("list").unwrap().and_then(Value::as_list).unwrap();
    assert_eq!(list.len(), MAX_PADDING + 1);
}
