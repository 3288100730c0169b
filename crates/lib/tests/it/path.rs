//! Path parsing integration tests

use propedit::{
    Error, PropertyPath, Segment, parse,
    path::{PathBuilder, PathError},
};

#[test]
fn test_parse_chained_indices_outer_to_inner() {
    let path = parse("a[1][0]").unwrap();
    assert_eq!(
        path.segments(),
        &[Segment::field("a"), Segment::Index(1), Segment::Index(0)]
    );
}

#[test]
fn test_parse_three_dimensional() {
    let path = parse("cube[2][0][5].value").unwrap();
    let indices: Vec<usize> = path.iter().filter_map(Segment::as_index).collect();
    assert_eq!(indices, vec![2, 0, 5]);
    assert_eq!(path.last(), Some(&Segment::field("value")));
}

#[test]
fn test_invalid_paths_are_rejected() {
    for input in ["", "a. b", "a..b", "a.b."] {
        let err = parse(input).unwrap_err();
        assert!(err.is_invalid_path(), "'{input}' should be invalid");
    }
}

#[test]
fn test_invalid_path_surfaces_through_crate_error() {
    let mut root = propedit::Value::Doc(Default::default());
    let err = propedit::get_property_writer(&mut root, "a..b").unwrap_err();
    assert!(err.is_invalid_path());
    assert_eq!(err.module(), "path");
    assert!(matches!(err, Error::Path(PathError::EmptyToken { position: 1, .. })));
}

#[test]
fn test_error_messages_name_the_path() {
    let err = parse("a. b").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid property path 'a. b': token ' b' contains whitespace"
    );
    assert_eq!(err.path(), Some("a. b"));
}

#[test]
fn test_from_str_and_try_from() {
    let from_str: PropertyPath = "x.y[3]".parse().unwrap();
    let try_from = PropertyPath::try_from("x.y[3]").unwrap();
    assert_eq!(from_str, try_from);
    assert!(PropertyPath::try_from(String::from("x..y")).is_err());
}

#[test]
fn test_serde_uses_canonical_string() {
    let path = parse("items[04].name").unwrap();
    let json = serde_json::to_string(&path).unwrap();
    assert_eq!(json, r#""items[4].name""#);

    let back: PropertyPath = serde_json::from_str(&json).unwrap();
    assert_eq!(back, path);

    let bad = serde_json::from_str::<PropertyPath>(r#""items[x]""#);
    assert!(bad.is_err());
}

#[test]
fn test_builder_matches_parser() {
    let built = PathBuilder::new()
        .field("test")
        .unwrap()
        .field("nested")
        .unwrap()
        .index(1)
        .field("test")
        .unwrap()
        .build();
    assert_eq!(built, parse("test.nested[1].test").unwrap());
}
