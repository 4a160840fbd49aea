//! Row iteration with caller-supplied visitors.
//!
//! [`Statement::for_each_row`] steps the cursor, decodes each row into the
//! argument types of the visitor closure and invokes it, until the visitor
//! stops the loop or the statement is exhausted. The closure's signature
//! picks the decoded types and the loop behavior once, at compile time:
//!
//! - `FnMut(A, B, ...) -> bool`: the return value answers "keep going?".
//!   `true` continues, `false` stops with the cursor left on the current
//!   row.
//! - `FnMut(A, B, ...)`: no stop signal, every row is visited.
//!
//! Each closure argument is decoded at the running column offset and
//! advances it by its [`Decode::WIDTH`], so arguments may themselves be
//! tuples spanning several columns. Closure arguments usually need explicit
//! type annotations, since nothing else constrains them.
//!
//! [`Statement::for_each_row_counted`] is the variant whose closure takes a
//! leading `u64` row counter (starting at 0) before the decoded values. It
//! is a separate entry point so that an integer first argument on the plain
//! variant still means "decode column 0 as an integer".
//!
//! Statements that produce no interesting columns can be driven with
//! [`Statement::for_each_step`], whose visitor takes no arguments at all.
//!
//! The loops return the final cursor status: [`Step::Done`] when the
//! statement was exhausted, [`Step::Row`] when the visitor stopped early.

use crate::decode::Decode;
use crate::statement::{Statement, Step};

/// A row visitor, its shape resolved from the closure signature.
///
/// The marker parameter `M` carries the argument tuple and return type of
/// the closure so that boolean-returning and void closures get distinct,
/// non-overlapping impls.
pub trait Visit<M> {
    type Values: Decode;

    /// Visit one decoded row; `true` keeps the loop going.
    fn visit(&mut self, values: Self::Values) -> bool;
}

/// A row visitor that also receives the zero-based row counter.
pub trait VisitCounted<M> {
    type Values: Decode;

    /// Visit one decoded row with its index; `true` keeps the loop going.
    fn visit(&mut self, index: u64, values: Self::Values) -> bool;
}

macro_rules! impl_visit {
    ($(($t:ident, $v:ident)),+) => {
        impl<Fun, $($t),+> Visit<(($($t,)+), bool)> for Fun
        where
            Fun: FnMut($($t),+) -> bool,
            $($t: Decode,)+
        {
            type Values = ($($t,)+);

            fn visit(&mut self, values: Self::Values) -> bool {
                let ($($v,)+) = values;
                self($($v),+)
            }
        }

        impl<Fun, $($t),+> Visit<(($($t,)+), ())> for Fun
        where
            Fun: FnMut($($t),+),
            $($t: Decode,)+
        {
            type Values = ($($t,)+);

            fn visit(&mut self, values: Self::Values) -> bool {
                let ($($v,)+) = values;
                self($($v),+);
                true
            }
        }

        impl<Fun, $($t),+> VisitCounted<(($($t,)+), bool)> for Fun
        where
            Fun: FnMut(u64, $($t),+) -> bool,
            $($t: Decode,)+
        {
            type Values = ($($t,)+);

            fn visit(&mut self, index: u64, values: Self::Values) -> bool {
                let ($($v,)+) = values;
                self(index, $($v),+)
            }
        }

        impl<Fun, $($t),+> VisitCounted<(($($t,)+), ())> for Fun
        where
            Fun: FnMut(u64, $($t),+),
            $($t: Decode,)+
        {
            type Values = ($($t,)+);

            fn visit(&mut self, index: u64, values: Self::Values) -> bool {
                let ($($v,)+) = values;
                self(index, $($v),+);
                true
            }
        }
    };
}

impl_visit!((A, a));
impl_visit!((A, a), (B, b));
impl_visit!((A, a), (B, b), (C, c));
impl_visit!((A, a), (B, b), (C, c), (D, d));
impl_visit!((A, a), (B, b), (C, c), (D, d), (E, e));
impl_visit!((A, a), (B, b), (C, c), (D, d), (E, e), (F, f));
impl_visit!((A, a), (B, b), (C, c), (D, d), (E, e), (F, f), (G, g));
impl_visit!((A, a), (B, b), (C, c), (D, d), (E, e), (F, f), (G, g), (H, h));

impl<'conn> Statement<'conn> {
    /// Step, decode and visit every remaining row, starting at column 0.
    ///
    /// Returns [`Step::Done`] when the statement ran out of rows, or
    /// [`Step::Row`] when the visitor stopped the loop.
    ///
    /// # Panics
    ///
    /// Panics if the engine reports an error mid-iteration; an error inside
    /// the row loop is a broken execution contract, not a recoverable
    /// outcome.
    pub fn for_each_row<M, V: Visit<M>>(&mut self, visitor: V) -> Step {
        self.for_each_row_at(0, visitor)
    }

    /// Like [`for_each_row`](Self::for_each_row), decoding from the given
    /// column offset.
    pub fn for_each_row_at<M, V: Visit<M>>(&mut self, offset: usize, mut visitor: V) -> Step {
        loop {
            match self.step() {
                Ok(Step::Row) => {
                    let values = V::Values::decode(&self.row(), offset);
                    if !visitor.visit(values) {
                        return Step::Row;
                    }
                }
                Ok(Step::Done) => return Step::Done,
                Err(err) => panic!("row iteration aborted: {err}"),
            }
        }
    }

    /// Visit every remaining row along with its zero-based index.
    ///
    /// The counter counts delivered rows and is independent of the column
    /// offset.
    ///
    /// # Panics
    ///
    /// Panics if the engine reports an error mid-iteration.
    pub fn for_each_row_counted<M, V: VisitCounted<M>>(&mut self, visitor: V) -> Step {
        self.for_each_row_counted_at(0, visitor)
    }

    /// Like [`for_each_row_counted`](Self::for_each_row_counted), decoding
    /// from the given column offset.
    pub fn for_each_row_counted_at<M, V: VisitCounted<M>>(
        &mut self,
        offset: usize,
        mut visitor: V,
    ) -> Step {
        let mut index: u64 = 0;
        loop {
            match self.step() {
                Ok(Step::Row) => {
                    let values = V::Values::decode(&self.row(), offset);
                    if !visitor.visit(index, values) {
                        return Step::Row;
                    }
                    index += 1;
                }
                Ok(Step::Done) => return Step::Done,
                Err(err) => panic!("row iteration aborted: {err}"),
            }
        }
    }

    /// Step through every remaining row without decoding anything.
    ///
    /// The visitor is invoked once per row and returns whether to keep
    /// going; columns can be read through other means if needed.
    ///
    /// # Panics
    ///
    /// Panics if the engine reports an error mid-iteration.
    pub fn for_each_step<V: FnMut() -> bool>(&mut self, mut visitor: V) -> Step {
        loop {
            match self.step() {
                Ok(Step::Row) => {
                    if !visitor() {
                        return Step::Row;
                    }
                }
                Ok(Step::Done) => return Step::Done,
                Err(err) => panic!("row iteration aborted: {err}"),
            }
        }
    }
}
