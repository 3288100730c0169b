//! The container abstraction navigated by property accessors.
//!
//! Accessors never own the data they address. They walk any tree whose node
//! type implements [`Container`], so the same parsed path works against the
//! crate's own [`Value`](crate::value::Value) and, with the `json` feature,
//! against `serde_json::Value`.

use std::fmt;

use crate::path::Segment;

/// The two kinds of interior node a container tree can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A record of named members, addressed by field segments
    Record,
    /// An ordered sequence, addressed by index segments
    Sequence,
}

impl NodeKind {
    /// Returns the kind of node a segment navigates into.
    pub fn addressed_by(segment: &Segment) -> Self {
        match segment {
            Segment::Field(_) => NodeKind::Record,
            Segment::Index(_) => NodeKind::Sequence,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Record => write!(f, "record"),
            NodeKind::Sequence => write!(f, "sequence"),
        }
    }
}

/// Maximum number of null slots a single write may pad a sequence with.
///
/// Writing at `index` on a sequence of length `len` pads `index - len`
/// slots. Indices further out are rejected instead of allocated.
pub const MAX_PADDING: usize = 1 << 20;

/// Why a node cannot provide a slot for a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotError {
    /// The node is not of the kind the segment addresses
    WrongKind,
    /// Reaching `index` would pad a sequence of length `len` by more than
    /// [`MAX_PADDING`] slots, or the padding could not be allocated
    OutOfRange { index: usize, len: usize },
}

/// Checks that `index` is reachable in a sequence of length `len`.
pub fn check_padding(len: usize, index: usize) -> Result<(), SlotError> {
    if index < len || index - len <= MAX_PADDING {
        Ok(())
    } else {
        Err(SlotError::OutOfRange { index, len })
    }
}

/// Returns the slot at `index`, padding `items` with `fill` up to it.
///
/// Never panics and never shrinks `items`. On error `items` is untouched.
pub fn padded_slot<T: Clone>(
    items: &mut Vec<T>,
    index: usize,
    fill: T,
) -> Result<&mut T, SlotError> {
    let len = items.len();
    if index >= len {
        check_padding(len, index)?;
        // index - len <= MAX_PADDING, so this cannot overflow
        let additional = index - len + 1;
        items
            .try_reserve(additional)
            .map_err(|_| SlotError::OutOfRange { index, len })?;
        items.resize(len + additional, fill);
    }
    items.get_mut(index).ok_or(SlotError::OutOfRange { index, len })
}

/// A node of a dynamically-shaped data tree.
///
/// Implementations describe how a node exposes its children. Accessors only
/// ever call these methods; all autovivification and null handling is done
/// on top of them.
pub trait Container: Sized {
    /// Returns the node kind, or `None` for null and scalar nodes.
    fn kind(&self) -> Option<NodeKind>;

    /// Returns a short name of the node's type, used in error messages.
    fn type_name(&self) -> &'static str;

    /// Returns true for null nodes. Reads treat these as absent.
    fn is_nullish(&self) -> bool;

    /// Returns true for nodes a write may replace with a fresh interior
    /// node: null, `false`, numeric zero and empty text.
    fn is_falsy(&self) -> bool;

    /// Creates an empty interior node of the given kind.
    fn empty(kind: NodeKind) -> Self;

    /// Returns the child addressed by `segment`.
    ///
    /// Returns `None` if the child is absent or if this node's kind does not
    /// match the segment (a record addressed by index, a scalar, ...).
    fn child(&self, segment: &Segment) -> Option<&Self>;

    /// Checks that [`slot_mut`](Container::slot_mut) would succeed, without
    /// mutating anything.
    fn check_slot(&self, segment: &Segment) -> Result<(), SlotError>;

    /// Returns a mutable slot for the child addressed by `segment`, creating
    /// it if absent.
    ///
    /// A record inserts a null member. A sequence pads itself with null up
    /// to and including the index, see [`padded_slot`].
    ///
    /// # Errors
    ///
    /// [`SlotError::WrongKind`] if this node's kind does not match the
    /// segment, [`SlotError::OutOfRange`] if the index cannot be padded to.
    /// The node is left unchanged on error.
    fn slot_mut(&mut self, segment: &Segment) -> Result<&mut Self, SlotError>;

    /// Returns true if this node is a record or a sequence.
    fn is_container(&self) -> bool {
        self.kind().is_some()
    }
}
