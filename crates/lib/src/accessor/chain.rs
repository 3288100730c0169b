//! Step chains: the container-independent half of an accessor.
//!
//! A chain is built once from a [`PropertyPath`] and can then be applied to
//! any number of containers. Steps run left to right; a read step yields
//! `None` as soon as a node is missing, a write step creates the node.

use tracing::debug;

use super::AccessError;
use crate::{
    container::{Container, NodeKind, SlotError},
    path::{PropertyPath, Segment},
};

/// A compiled read path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadChain {
    path: PropertyPath,
}

impl ReadChain {
    /// Compiles a read chain with one step per segment.
    pub fn new(path: PropertyPath) -> Result<Self, AccessError> {
        if path.is_empty() {
            return Err(AccessError::MissingPath);
        }
        Ok(Self { path })
    }

    /// Returns the path this chain reads.
    pub fn path(&self) -> &PropertyPath {
        &self.path
    }

    /// Walks the chain from `root`.
    ///
    /// Returns `None` if any node along the way is absent, null, or of the
    /// wrong kind for its segment. Never fails.
    pub fn apply<'c, C: Container>(&self, root: &'c C) -> Option<&'c C> {
        self.path
            .iter()
            .try_fold(root, |node, segment| read_step(node, segment))
    }
}

fn read_step<'c, C: Container>(node: &'c C, segment: &Segment) -> Option<&'c C> {
    node.child(segment).filter(|child| !child.is_nullish())
}

/// One navigation step of a write: the segment to follow and the kind of
/// node to create there when it is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
struct WriteStep {
    segment: Segment,
    create: NodeKind,
}

/// A compiled write path.
///
/// Every segment but the last is a navigation step. The kind of node a step
/// creates is fixed at compile time from the segment that follows it: a
/// sequence before an index, a record before a field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteChain {
    path: PropertyPath,
    steps: Vec<WriteStep>,
    terminal: Segment,
}

impl WriteChain {
    /// Compiles a write chain.
    pub fn new(path: PropertyPath) -> Result<Self, AccessError> {
        let (terminal, navigation) = path.split_terminal().ok_or(AccessError::MissingPath)?;

        let steps = navigation
            .iter()
            .enumerate()
            .map(|(i, segment)| {
                let next = navigation.get(i + 1).unwrap_or(terminal);
                WriteStep {
                    segment: segment.clone(),
                    create: NodeKind::addressed_by(next),
                }
            })
            .collect();
        let terminal = terminal.clone();

        Ok(Self {
            path,
            steps,
            terminal,
        })
    }

    /// Returns the path this chain writes.
    pub fn path(&self) -> &PropertyPath {
        &self.path
    }

    /// Navigates from `root` to the terminal segment's parent, creating
    /// missing or falsy intermediate nodes, and stores `value` there.
    ///
    /// Intermediate nodes are re-checked on every call, so a node removed
    /// between two writes is created again.
    ///
    /// # Errors
    ///
    /// - [`AccessError::ShapeMismatch`] if a node on the way has the wrong
    ///   kind for its segment, or is a non-falsy scalar
    /// - [`AccessError::IndexOutOfRange`] if an index lies more than
    ///   [`MAX_PADDING`](crate::container::MAX_PADDING) slots past the end
    ///   of its sequence
    ///
    /// The whole walk is checked before anything is created, so a failed
    /// write leaves the container unchanged.
    pub fn apply<C: Container>(&self, root: &mut C, value: C) -> Result<(), AccessError> {
        self.check(root)?;

        let mut node = root;
        for step in &self.steps {
            node = self.navigate(node, step)?;
        }

        let found = node.type_name();
        let slot = node
            .slot_mut(&self.terminal)
            .map_err(|err| self.slot_error(&self.terminal, err, found))?;
        *slot = value;
        Ok(())
    }

    /// Walks the chain without mutating and reports the error `apply`
    /// would hit.
    fn check<C: Container>(&self, root: &C) -> Result<(), AccessError> {
        let mut node = root;
        for (i, step) in self.steps.iter().enumerate() {
            node.check_slot(&step.segment)
                .map_err(|err| self.slot_error(&step.segment, err, node.type_name()))?;
            match node.child(&step.segment) {
                Some(child) if !child.is_falsy() => {
                    if !child.is_container() {
                        return Err(self.mismatch(&step.segment, step.create, child.type_name()));
                    }
                    node = child;
                }
                // Everything from here on is created fresh
                _ => return self.check_fresh::<C>(i),
            }
        }
        node.check_slot(&self.terminal)
            .map_err(|err| self.slot_error(&self.terminal, err, node.type_name()))
    }

    /// Checks the steps from `from` onwards against freshly created nodes.
    fn check_fresh<C: Container>(&self, from: usize) -> Result<(), AccessError> {
        let next_segments = self.steps[from + 1..]
            .iter()
            .map(|step| &step.segment)
            .chain(std::iter::once(&self.terminal));
        for (step, segment) in self.steps[from..].iter().zip(next_segments) {
            let node = C::empty(step.create);
            node.check_slot(segment)
                .map_err(|err| self.slot_error(segment, err, node.type_name()))?;
        }
        Ok(())
    }

    fn navigate<'c, C: Container>(
        &self,
        node: &'c mut C,
        step: &WriteStep,
    ) -> Result<&'c mut C, AccessError> {
        let found = node.type_name();
        let child = node
            .slot_mut(&step.segment)
            .map_err(|err| self.slot_error(&step.segment, err, found))?;

        if child.is_falsy() {
            debug!(
                path = %self.path,
                segment = %step.segment,
                kind = %step.create,
                "Creating intermediate node"
            );
            *child = C::empty(step.create);
        } else if !child.is_container() {
            return Err(self.mismatch(&step.segment, step.create, child.type_name()));
        }
        Ok(child)
    }

    fn slot_error(&self, segment: &Segment, err: SlotError, found: &str) -> AccessError {
        match err {
            SlotError::WrongKind => self.mismatch(segment, NodeKind::addressed_by(segment), found),
            SlotError::OutOfRange { index, len } => {
                debug!(path = %self.path, index, len, "Write index out of range");
                AccessError::IndexOutOfRange {
                    path: self.path.to_string(),
                    index,
                    len,
                }
            }
        }
    }

    fn mismatch(&self, segment: &Segment, expected: NodeKind, found: &str) -> AccessError {
        debug!(path = %self.path, %segment, %expected, found, "Write hit an incompatible node");
        AccessError::ShapeMismatch {
            path: self.path.to_string(),
            segment: segment.to_string(),
            expected,
            found: found.to_string(),
        }
    }
}
