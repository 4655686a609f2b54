//! A lazily traversed integer range with a fixed nonzero step.

use std::iter::FusedIterator;

use crate::error::Error;
use crate::result::Result;
use crate::verify_arg;

/// A bounded integer sequence traversed by a fixed nonzero step.
///
/// A `SteppedRange` produces the values `start, start + step,
/// start + 2 * step, ...` while they remain within the exclusive `stop`
/// bound (`< stop` for ascending ranges, `> stop` for descending ones).
/// Construction is validated eagerly: a successfully constructed range
/// always produces at least one value.
///
/// The range is its own iterator and is single-pass: iterating a partially
/// consumed range continues from the current cursor, it does not restart.
///
/// ```
/// use stepped_range::SteppedRange;
///
/// let values: Vec<i64> = SteppedRange::new(0, 1001, 100)?.collect();
/// assert_eq!(values.first(), Some(&0));
/// assert_eq!(values.last(), Some(&1000));
/// assert_eq!(values.len(), 11);
/// # Ok::<(), stepped_range::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteppedRange {
    /// Inclusive lower bound, fixed at construction.
    start: i64,
    /// Exclusive upper bound, fixed at construction.
    stop: i64,
    /// Cursor advance per produced value; nonzero, sign selects direction.
    step: i64,
    /// The next value to produce.
    cursor: i64,
    /// Set when advancing the cursor would overflow `i64`.
    done: bool,
}

impl SteppedRange {
    /// Creates an ascending range from `0` (inclusive) to `stop` (exclusive)
    /// with a step of `1`.
    ///
    /// Fails with `InvalidArgument` if `stop` is nonpositive.
    pub fn up_to(stop: i64) -> Result<SteppedRange> {
        SteppedRange::new(0, stop, 1)
    }

    /// Creates an ascending range from `start` (inclusive) to `stop`
    /// (exclusive) with a step of `1`.
    ///
    /// Fails with `InvalidArgument` if `stop <= start`.
    pub fn between(start: i64, stop: i64) -> Result<SteppedRange> {
        SteppedRange::new(start, stop, 1)
    }

    /// Creates a range from `start` (inclusive) to `stop` (exclusive),
    /// advancing by `step` per produced value.
    ///
    /// The sign of `step` selects the traversal direction. Fails with
    /// `InvalidArgument` if `step` is zero, if `start` and `stop` are
    /// ordered against the step direction, or if the distance between the
    /// bounds is shorter than a single step (an empty sequence).
    pub fn new(start: i64, stop: i64, step: i64) -> Result<SteppedRange> {
        verify_arg!(step, step != 0);
        if step > 0 {
            verify_arg!(stop, stop >= start);
            verify_arg!(step, span(start, stop) >= step.unsigned_abs());
        } else {
            verify_arg!(stop, start >= stop);
            verify_arg!(step, span(stop, start) >= step.unsigned_abs());
        }
        Ok(SteppedRange {
            start,
            stop,
            step,
            cursor: start,
            done: false,
        })
    }

    /// Returns the inclusive lower bound of this range.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Returns the exclusive upper bound of this range.
    pub fn stop(&self) -> i64 {
        self.stop
    }

    /// Returns the per-value cursor advance.
    pub fn step(&self) -> i64 {
        self.step
    }

    /// Returns `true` if the range has more values. (In other words,
    /// returns `true` if [`next_value`](SteppedRange::next_value) would
    /// return a value rather than fail with `Exhausted`.)
    ///
    /// This is a pure predicate: calling it any number of times does not
    /// advance the range.
    #[inline]
    pub fn has_more(&self) -> bool {
        if self.done {
            return false;
        }
        if self.step > 0 {
            self.cursor < self.stop
        } else {
            self.cursor > self.stop
        }
    }

    /// Returns the next value of the range and advances the cursor.
    ///
    /// Fails with `Exhausted` if the range has no more values, leaving the
    /// range unchanged. Callers driving the range manually are expected to
    /// check [`has_more`](SteppedRange::has_more) first; `for` loops over
    /// the range never observe this error.
    pub fn next_value(&mut self) -> Result<i64> {
        self.advance().ok_or_else(Error::exhausted)
    }

    /// Returns the exact number of values not yet produced.
    pub fn remaining(&self) -> u64 {
        if !self.has_more() {
            return 0;
        }
        let span = if self.step > 0 {
            span(self.cursor, self.stop)
        } else {
            span(self.stop, self.cursor)
        };
        span.div_ceil(self.step.unsigned_abs())
    }

    fn advance(&mut self) -> Option<i64> {
        if !self.has_more() {
            return None;
        }
        let value = self.cursor;
        match value.checked_add(self.step) {
            Some(next) => self.cursor = next,
            // A cursor past the i64 limit is necessarily past `stop`.
            None => self.done = true,
        }
        Some(value)
    }
}

impl Iterator for SteppedRange {
    type Item = i64;

    /// Returns the next value, or `None` once the range is exhausted.
    #[inline]
    fn next(&mut self) -> Option<i64> {
        self.advance()
    }

    /// Provides an exact size hint, derived from
    /// [`remaining`](SteppedRange::remaining).
    ///
    /// The upper bound is unknown only when the remaining count does not
    /// fit in `usize` (possible on 32-bit targets).
    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for SteppedRange {}

/// Unsigned distance from `lo` to `hi`. Requires `hi >= lo`; exact even
/// when the distance exceeds `i64::MAX`.
#[inline]
fn span(lo: i64, hi: i64) -> u64 {
    hi.wrapping_sub(lo) as u64
}
