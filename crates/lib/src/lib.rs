//!
//! propedit: read and write values nested inside dynamic data trees through
//! property paths such as `user.addresses[0].city`.
//!
//! ## Core Concepts
//!
//! * **Paths (`path::PropertyPath`)**: A parsed, immutable sequence of field and index segments.
//! * **Containers (`container::Container`)**: Any dynamically-shaped tree of records and sequences.
//!   The crate's own `value::Value` implements it, and so does `serde_json::Value` with the `json` feature.
//! * **Accessors (`accessor`)**: Readers, writers and editors that bind a parsed path to a container.
//!   Readers report missing data as `None`. Writers create missing intermediate records and sequences,
//!   choosing the kind from the segment that follows.
//!
//! ## Example
//!
//! ```
//! use propedit::{get_property_editor, value::{Doc, Value}};
//!
//! let mut root = Value::Doc(Doc::new());
//! let mut editor = get_property_editor(&mut root, "test[1][0]")?;
//! editor.write(1)?;
//! assert_eq!(editor.read_as::<i64>(), Some(1));
//!
//! assert_eq!(root.to_json_string(), r#"{"test":[null,[1]]}"#);
//! # Ok::<(), propedit::Error>(())
//! ```

pub mod accessor;
pub mod container;
#[cfg(feature = "json")]
pub mod json;
pub mod path;
pub mod value;

pub use accessor::{
    PropertyEditor, PropertyReader, PropertyWriter, build_editor, build_reader, build_writer,
    get_property_editor, get_property_reader, get_property_writer,
};
pub use container::{Container, NodeKind};
pub use path::{PropertyPath, Segment, parse};
pub use value::Value;

/// Result type used throughout the propedit library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the propedit library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[cfg(feature = "json")]
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured path parsing errors from the path module
    #[error(transparent)]
    Path(path::PathError),

    /// Structured accessor errors from the accessor module
    #[error(transparent)]
    Access(accessor::AccessError),

    /// Structured value conversion errors from the value module
    #[error(transparent)]
    Value(value::ValueError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            #[cfg(feature = "json")]
            Error::Serialize(_) => "serialize",
            Error::Path(_) => "path",
            Error::Access(_) => "accessor",
            Error::Value(_) => "value",
        }
    }

    /// Check if this error indicates a malformed path string.
    pub fn is_invalid_path(&self) -> bool {
        match self {
            Error::Path(path_err) => path_err.is_invalid_path(),
            _ => false,
        }
    }

    /// Check if this error indicates a path with no segments.
    pub fn is_missing_path(&self) -> bool {
        match self {
            Error::Access(access_err) => access_err.is_missing_path(),
            _ => false,
        }
    }

    /// Check if this error indicates a root that is not a record or sequence.
    pub fn is_invalid_container(&self) -> bool {
        match self {
            Error::Access(access_err) => access_err.is_invalid_container(),
            _ => false,
        }
    }

    /// Check if this error indicates a write through an incompatible node.
    pub fn is_shape_mismatch(&self) -> bool {
        match self {
            Error::Access(access_err) => access_err.is_shape_mismatch(),
            _ => false,
        }
    }

    /// Check if this error indicates a write past the reachable end of a sequence.
    pub fn is_index_out_of_range(&self) -> bool {
        match self {
            Error::Access(access_err) => access_err.is_index_out_of_range(),
            _ => false,
        }
    }

    /// Check if this error is type-related.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Value(value_err) => value_err.is_type_error(),
            _ => false,
        }
    }
}
