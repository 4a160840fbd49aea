//! Materializing result rows into collections.
//!
//! A [`Sink`] is any container that accepts one decoded value per row
//! through its own append operation: `push` for sequences, `insert` for
//! sets and maps (maps decode `(key, value)` composites). The drain drivers
//! on [`Statement`] step the cursor and feed the sink until the statement
//! is exhausted or a row quota runs out.
//!
//! Running out of rows before the quota is filled is a normal boundary
//! condition, not an error: the sink simply ends up with fewer elements.

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, VecDeque};
use std::hash::Hash;

use crate::decode::Decode;
use crate::statement::{Statement, Step};

/// A container rows can be drained into, one decoded element per row.
pub trait Sink {
    type Item: Decode;

    /// Append one decoded element using the container's natural operation.
    fn accept(&mut self, item: Self::Item);
}

impl<T: Decode> Sink for Vec<T> {
    type Item = T;

    fn accept(&mut self, item: T) {
        self.push(item);
    }
}

impl<T: Decode> Sink for VecDeque<T> {
    type Item = T;

    fn accept(&mut self, item: T) {
        self.push_back(item);
    }
}

impl<T: Decode + Ord> Sink for BinaryHeap<T> {
    type Item = T;

    fn accept(&mut self, item: T) {
        self.push(item);
    }
}

impl<T: Decode + Ord> Sink for BTreeSet<T> {
    type Item = T;

    fn accept(&mut self, item: T) {
        self.insert(item);
    }
}

impl<T: Decode + Eq + Hash> Sink for HashSet<T> {
    type Item = T;

    fn accept(&mut self, item: T) {
        self.insert(item);
    }
}

/// Maps decode `(key, value)` pairs; the key spans the leading columns.
impl<K: Decode + Ord, V: Decode> Sink for BTreeMap<K, V> {
    type Item = (K, V);

    fn accept(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }
}

impl<K: Decode + Eq + Hash, V: Decode> Sink for HashMap<K, V> {
    type Item = (K, V);

    fn accept(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }
}

impl<'conn> Statement<'conn> {
    /// Drain every remaining row into the sink, decoding at column 0.
    ///
    /// Returns [`Step::Done`] once the statement is exhausted.
    ///
    /// # Panics
    ///
    /// Panics if the engine reports an error mid-iteration.
    pub fn drain_into<S: Sink>(&mut self, sink: &mut S) -> Step {
        self.drain_into_at(0, sink)
    }

    /// Like [`drain_into`](Self::drain_into), decoding from the given
    /// column offset.
    pub fn drain_into_at<S: Sink>(&mut self, offset: usize, sink: &mut S) -> Step {
        loop {
            match self.step() {
                Ok(Step::Row) => sink.accept(S::Item::decode(&self.row(), offset)),
                Ok(Step::Done) => return Step::Done,
                Err(err) => panic!("row iteration aborted: {err}"),
            }
        }
    }

    /// Drain at most `limit` rows into the sink, decoding at column 0.
    ///
    /// Appends one element per available row, so fewer rows than the limit
    /// fills the sink with what there was and reports [`Step::Done`]. When
    /// the limit is reached first, the cursor is left on the last consumed
    /// row and the status is [`Step::Row`]; a limit of zero steps nothing
    /// and reports [`Step::Done`].
    ///
    /// # Panics
    ///
    /// Panics if the engine reports an error mid-iteration.
    pub fn drain_n_into<S: Sink>(&mut self, limit: usize, sink: &mut S) -> Step {
        self.drain_n_into_at(0, limit, sink)
    }

    /// Like [`drain_n_into`](Self::drain_n_into), decoding from the given
    /// column offset.
    pub fn drain_n_into_at<S: Sink>(&mut self, offset: usize, limit: usize, sink: &mut S) -> Step {
        let mut status = Step::Done;
        for _ in 0..limit {
            match self.step() {
                Ok(Step::Row) => {
                    sink.accept(S::Item::decode(&self.row(), offset));
                    status = Step::Row;
                }
                Ok(Step::Done) => return Step::Done,
                Err(err) => panic!("row iteration aborted: {err}"),
            }
        }
        status
    }
}
