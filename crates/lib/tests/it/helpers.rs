use propedit::{
    get_property_reader, get_property_writer,
    value::{Doc, Value},
};

/// Creates an empty record to use as a container root
pub fn empty_root() -> Value {
    Value::Doc(Doc::new())
}

/// Parses a JSON literal into a Value container
pub fn root_from_json(json: &str) -> Value {
    Value::from_json_str(json).expect("test JSON should parse")
}

/// Writes `value` at `path` through a freshly built writer
pub fn write_at(root: &mut Value, path: &str, value: impl Into<Value>) {
    get_property_writer(root, path)
        .expect("Failed to build writer")
        .write(value)
        .expect("Failed to write value");
}

/// Reads the value at `path` through a freshly built reader
pub fn read_at<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    get_property_reader(root, path)
        .expect("Failed to build reader")
        .read()
}
