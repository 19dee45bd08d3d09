// model = "claude-opus-4-5"
// created = "2026-02-02"
// modified = "2026-02-05"
// driver = "Isaac Clayton"

//! Pane - collection-shaped views over a fixed-length backing store.
//!
//! A pane never owns, copies, or resizes the storage it reads: it is a
//! `[begin, end)` window over a borrowed store, with list, map, and set
//! facades layered on top. Overlapping windows alias the same slots, so
//! a write through one view is visible through every other.
//!
//! # Quick Start
//!
//! ```
//! use pane::list::FixedList;
//! use pane::search;
//! use pane::store::as_cells;
//!
//! let mut buf = [5i64, 3, 1, 4, 2];
//! let store = as_cells(&mut buf);
//!
//! // A list facade over the whole store: in-place sort, then search.
//! let list = FixedList::from_store(store);
//! list.sort();
//! assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
//! assert_eq!(search::binary_search(&list.window(), 4), Ok(3));
//!
//! // Structural change is off the table: the length is fixed.
//! assert!(list.push(6).is_err());
//! ```

pub mod cursor;
pub mod error;
pub mod list;
pub mod pair;
pub mod search;
pub mod slot;
pub mod split;
pub mod store;
pub mod window;
