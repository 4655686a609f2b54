//! Lazy, validated stepped integer ranges.
//!
//! This crate provides [`SteppedRange`], a bounded integer sequence defined
//! by a start, an exclusive stop, and a nonzero step. It offers:
//!
//! - **Eager validation**: every constructor rejects argument combinations
//!   that would yield an empty, infinite, or wrongly ordered sequence
//! - **Lazy production**: values are produced one at a time, in order,
//!   without materializing the sequence
//! - **Native iteration**: a range is its own [`Iterator`], so it drops
//!   straight into a `for` loop
//!
//! # Key Types
//!
//! - [`SteppedRange`] - A single-pass, direction-aware integer range
//! - [`Error`] / [`ErrorKind`] - Construction and exhaustion failures

pub mod error;
pub mod range;
pub mod result;

pub use error::{Error, ErrorKind};
pub use range::SteppedRange;
pub use result::Result;
