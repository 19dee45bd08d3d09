// model = "claude-opus-4-5"
// created = "2026-02-02"
// modified = "2026-02-02"
// driver = "Isaac Clayton"

//! Error taxonomy for view operations.
//!
//! Every error here is synchronous, detected before any slot is written,
//! and non-retryable: the triggering condition (fixed bounds) never
//! changes on its own. The library never swallows these; recovery is the
//! caller's decision.
//!
//! The one rule worth internalizing is the shape of `FixedLength`: it is
//! raised only when a structural operation *would have had an effect*.
//! Removing an element that is not there, or appending an empty batch,
//! is a no-op and reports `false`/`None` instead of failing.

use thiserror::Error;

/// Errors produced by windows, facades, and cursors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    /// Window bounds fall outside the store, or begin exceeds end.
    #[error("bounds {begin}..{end} invalid for store of length {len}")]
    BadBounds {
        /// Requested begin index (absolute).
        begin: usize,
        /// Requested end index (absolute).
        end: usize,
        /// Length of the backing store.
        len: usize,
    },

    /// A pair interpretation was requested over an odd number of slots.
    #[error("pair interpretation requires an even number of slots, got {len}")]
    OddPairLength {
        /// Length of the offending range.
        len: usize,
    },

    /// A thumb fell outside the view.
    #[error("thumb {thumb} out of range for view of length {len}")]
    OutOfRange {
        /// The offending view-relative position.
        thumb: usize,
        /// Length of the view.
        len: usize,
    },

    /// The operation would have changed the slot count of a view.
    #[error("cannot change the slot count of a fixed-length view")]
    FixedLength,

    /// Cursor write-back without a preceding successful step.
    #[error("cursor has no element to write back; step it first")]
    StaleCursor,

    /// The cursor has nothing left in the requested direction.
    #[error("cursor exhausted")]
    Exhausted,
}
