//! Property accessors bound to a container.
//!
//! An accessor pairs a container borrow with a compiled step chain built
//! from a [`PropertyPath`]. Three flavours exist:
//!
//! - [`PropertyReader`] - borrows the container shared, returns the value
//!   at the path or `None`
//! - [`PropertyWriter`] - borrows the container mutably, stores values at
//!   the path and creates missing intermediate nodes on the way
//! - [`PropertyEditor`] - both of the above over one mutable borrow
//!
//! Every failure that depends only on the path or the root container is
//! reported when the accessor is built. After that, reads never fail and
//! writes only fail if the container was reshaped so the path can no longer
//! be written through.
//!
//! # Usage
//!
//! ```
//! use propedit::{get_property_editor, get_property_reader, value::Doc};
//! use propedit::value::Value;
//!
//! let mut root = Value::Doc(Doc::new());
//!
//! let mut editor = get_property_editor(&mut root, "user.scores[1]")?;
//! assert_eq!(editor.read(), None);
//! editor.write(42)?;
//! assert_eq!(editor.read_as::<i64>(), Some(42));
//!
//! let reader = get_property_reader(&root, "user.scores[0]")?;
//! assert_eq!(reader.read(), None); // holes read as absent
//! # Ok::<(), propedit::Error>(())
//! ```

use tracing::trace;

use crate::{
    container::Container,
    path::{self, PropertyPath},
};

mod chain;
pub mod errors;

pub use chain::{ReadChain, WriteChain};
pub use errors::AccessError;

/// A read accessor bound to a container.
#[derive(Debug)]
pub struct PropertyReader<'a, C> {
    container: &'a C,
    chain: ReadChain,
}

impl<'a, C: Container> PropertyReader<'a, C> {
    /// Returns the value at the path, or `None` if it is absent or null.
    ///
    /// The path is walked again on every call.
    pub fn read(&self) -> Option<&'a C> {
        self.chain.apply(self.container)
    }

    /// Returns the value at the path converted to `T`.
    ///
    /// Returns `None` if the value is absent or cannot be converted.
    pub fn read_as<T>(&self) -> Option<T>
    where
        T: TryFrom<&'a C>,
    {
        self.read().and_then(|value| T::try_from(value).ok())
    }

    /// Returns an owned copy of the value at the path.
    pub fn read_cloned(&self) -> Option<C>
    where
        C: Clone,
    {
        self.read().cloned()
    }

    /// Returns the path this reader is bound to.
    pub fn path(&self) -> &PropertyPath {
        self.chain.path()
    }
}

/// A write accessor bound to a container.
#[derive(Debug)]
pub struct PropertyWriter<'a, C> {
    container: &'a mut C,
    chain: WriteChain,
}

impl<C: Container> PropertyWriter<'_, C> {
    /// Stores `value` at the path, creating missing intermediate nodes.
    ///
    /// See [`WriteChain::apply`] for the autovivification rules.
    pub fn write(&mut self, value: impl Into<C>) -> Result<(), AccessError> {
        self.chain.apply(self.container, value.into())
    }

    /// Returns the path this writer is bound to.
    pub fn path(&self) -> &PropertyPath {
        self.chain.path()
    }
}

/// A read and a write accessor over the same path and container.
///
/// The reader and the writer are compiled independently from their own copy
/// of the parsed path.
#[derive(Debug)]
pub struct PropertyEditor<'a, C> {
    container: &'a mut C,
    reader: ReadChain,
    writer: WriteChain,
}

impl<C: Container> PropertyEditor<'_, C> {
    /// Returns the value at the path, or `None` if it is absent or null.
    pub fn read(&self) -> Option<&C> {
        self.reader.apply(self.container)
    }

    /// Returns the value at the path converted to `T`.
    pub fn read_as<'s, T>(&'s self) -> Option<T>
    where
        T: TryFrom<&'s C>,
    {
        self.read().and_then(|value| T::try_from(value).ok())
    }

    /// Returns an owned copy of the value at the path.
    pub fn read_cloned(&self) -> Option<C>
    where
        C: Clone,
    {
        self.read().cloned()
    }

    /// Stores `value` at the path, creating missing intermediate nodes.
    pub fn write(&mut self, value: impl Into<C>) -> Result<(), AccessError> {
        self.writer.apply(self.container, value.into())
    }

    /// Modifies the value at the path in place using a closure.
    ///
    /// The current value is converted to `T`, handed to `f`, and written
    /// back. Returns `Ok(false)` without writing if the value is absent or
    /// cannot be converted to `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use propedit::{get_property_editor, value::Value};
    /// let mut root: Value = Value::from_iter([("count".to_string(), Value::Int(5))]);
    /// let mut editor = get_property_editor(&mut root, "count")?;
    ///
    /// assert!(editor.modify::<i64, _>(|count| *count += 10)?);
    /// assert_eq!(editor.read_as::<i64>(), Some(15));
    /// # Ok::<(), propedit::Error>(())
    /// ```
    pub fn modify<T, F>(&mut self, f: F) -> Result<bool, AccessError>
    where
        T: for<'v> TryFrom<&'v C> + Into<C>,
        F: FnOnce(&mut T),
    {
        let Some(mut value) = self.read_as::<T>() else {
            return Ok(false);
        };
        f(&mut value);
        self.write(value)?;
        Ok(true)
    }

    /// Returns the path this editor is bound to.
    pub fn path(&self) -> &PropertyPath {
        self.writer.path()
    }
}

fn check_container<C: Container>(container: &C) -> Result<(), AccessError> {
    if container.is_container() {
        Ok(())
    } else {
        Err(AccessError::InvalidContainer {
            found: container.type_name().to_string(),
        })
    }
}

/// Builds a [`PropertyReader`] over an already parsed path.
///
/// # Errors
///
/// - [`AccessError::InvalidContainer`] if `container` is not a record or sequence
/// - [`AccessError::MissingPath`] if `path` has no segments
pub fn build_reader<C: Container>(
    container: &C,
    path: PropertyPath,
) -> Result<PropertyReader<'_, C>, AccessError> {
    check_container(container)?;
    let chain = ReadChain::new(path)?;
    trace!(path = %chain.path(), "Built property reader");
    Ok(PropertyReader { container, chain })
}

/// Builds a [`PropertyWriter`] over an already parsed path.
///
/// # Errors
///
/// - [`AccessError::InvalidContainer`] if `container` is not a record or sequence
/// - [`AccessError::MissingPath`] if `path` has no segments
pub fn build_writer<C: Container>(
    container: &mut C,
    path: PropertyPath,
) -> Result<PropertyWriter<'_, C>, AccessError> {
    check_container(container)?;
    let chain = WriteChain::new(path)?;
    trace!(path = %chain.path(), "Built property writer");
    Ok(PropertyWriter { container, chain })
}

/// Builds a [`PropertyEditor`] over an already parsed path.
///
/// # Errors
///
/// Same as [`build_reader`] and [`build_writer`].
pub fn build_editor<C: Container>(
    container: &mut C,
    path: PropertyPath,
) -> Result<PropertyEditor<'_, C>, AccessError> {
    check_container(container)?;
    let reader = ReadChain::new(path.clone())?;
    let writer = WriteChain::new(path)?;
    trace!(path = %writer.path(), "Built property editor");
    Ok(PropertyEditor {
        container,
        reader,
        writer,
    })
}

/// Parses `path` and builds a [`PropertyReader`] over `container`.
pub fn get_property_reader<'a, C: Container>(
    container: &'a C,
    path: &str,
) -> crate::Result<PropertyReader<'a, C>> {
    let path = path::parse(path)?;
    Ok(build_reader(container, path)?)
}

/// Parses `path` and builds a [`PropertyWriter`] over `container`.
pub fn get_property_writer<'a, C: Container>(
    container: &'a mut C,
    path: &str,
) -> crate::Result<PropertyWriter<'a, C>> {
    let path = path::parse(path)?;
    Ok(build_writer(container, path)?)
}

/// Parses `path` once and builds a [`PropertyEditor`] over `container`.
pub fn get_property_editor<'a, C: Container>(
    container: &'a mut C,
    path: &str,
) -> crate::Result<PropertyEditor<'a, C>> {
    let path = path::parse(path)?;
    Ok(build_editor(container, path)?)
}
