// model = "claude-opus-4-5"
// created = "2026-02-02"
// modified = "2026-02-04"
// driver = "Isaac Clayton"

//! The windowed view: a `[begin, end)` range over a borrowed store.
//!
//! A `Window` is three words: a store borrow and two absolute bounds.
//! Everything else in the crate is a facade over one. Key decisions:
//!
//! 1. **Thumbs vs. absolute indexes**: callers address a window with a
//!    *thumb*, a position relative to the window's own start. The
//!    window translates thumbs into absolute store indexes and nothing
//!    outside this module does that arithmetic.
//!
//! 2. **Immutable bounds**: no operation changes a window's length.
//!    Slicing returns a fresh window over the same store; the receiver
//!    is untouched. Windows are `Copy` for the same reason a range is.
//!
//! 3. **Aliasing is the point**: overlapping windows over one store see
//!    each other's writes. Equality therefore short-circuits on
//!    identity (same store, same bounds) before it ever reads a slot.
//!
//! 4. **No `std::hash::Hash`**: window contents can change through an
//!    alias, so handing windows to a `HashMap` as keys would be a trap.
//!    Content hashing is explicit, via [`Window::content_hash`].

use std::fmt;
use std::hash::Hasher;
use std::ptr;

use rustc_hash::FxHasher;

use crate::cursor::Cursor;
use crate::error::ViewError;
use crate::slot::Slot;
use crate::split::Slots;
use crate::split::SplitCursor;
use crate::store::Store;

/// A zero-copy `[begin, end)` view over a borrowed store.
pub struct Window<'a, S: Store + ?Sized> {
    store: &'a S,
    begin: usize,
    end: usize,
}

impl<'a, S: Store + ?Sized> Clone for Window<'a, S> {
    fn clone(&self) -> Self {
        return *self;
    }
}

impl<'a, S: Store + ?Sized> Copy for Window<'a, S> {}

impl<'a, S: Store + ?Sized> Window<'a, S> {
    /// View the whole store.
    pub fn new(store: &'a S) -> Window<'a, S> {
        return Window {
            store,
            begin: 0,
            end: store.len(),
        };
    }

    /// View an explicit `[begin, end)` range of the store.
    pub fn with_bounds(store: &'a S, begin: usize, end: usize) -> Result<Window<'a, S>, ViewError> {
        if begin > end || end > store.len() {
            return Err(ViewError::BadBounds {
                begin,
                end,
                len: store.len(),
            });
        }
        return Ok(Window { store, begin, end });
    }

    /// The borrowed store.
    pub fn store(&self) -> &'a S {
        return self.store;
    }

    /// Absolute index of the first slot in view.
    pub fn begin(&self) -> usize {
        return self.begin;
    }

    /// Absolute index one past the last slot in view.
    pub fn end(&self) -> usize {
        return self.end;
    }

    /// Number of slots in view.
    pub fn len(&self) -> usize {
        return self.end - self.begin;
    }

    /// Whether the window covers no slots.
    pub fn is_empty(&self) -> bool {
        return self.begin == self.end;
    }

    /// Translate a thumb into an absolute store index.
    pub fn translate(&self, thumb: usize) -> Result<usize, ViewError> {
        if thumb >= self.len() {
            return Err(ViewError::OutOfRange {
                thumb,
                len: self.len(),
            });
        }
        return Ok(self.begin + thumb);
    }

    /// Read the slot at a thumb.
    pub fn get(&self, thumb: usize) -> Result<S::Elem, ViewError> {
        let at = self.translate(thumb)?;
        return Ok(self.store.get(at));
    }

    /// Write the slot at a thumb, returning the previous value.
    pub fn set(&self, thumb: usize, value: S::Elem) -> Result<S::Elem, ViewError> {
        let at = self.translate(thumb)?;
        let prior = self.store.get(at);
        self.store.set(at, value);
        return Ok(prior);
    }

    /// Read a thumb whose validity the caller has already established.
    pub(crate) fn slot(&self, thumb: usize) -> S::Elem {
        debug_assert!(thumb < self.len());
        return self.store.get(self.begin + thumb);
    }

    /// Write a thumb whose validity the caller has already established.
    pub(crate) fn put(&self, thumb: usize, value: S::Elem) {
        debug_assert!(thumb < self.len());
        self.store.set(self.begin + thumb, value);
    }

    /// Slice out a sub-window. Thumbs are relative to this window; the
    /// result is a new window over the same store, O(1), no copying.
    pub fn sub(&self, begin: usize, end: usize) -> Result<Window<'a, S>, ViewError> {
        if begin > end || end > self.len() {
            return Err(ViewError::BadBounds {
                begin,
                end,
                len: self.len(),
            });
        }
        return Ok(Window {
            store: self.store,
            begin: self.begin + begin,
            end: self.begin + end,
        });
    }

    /// Snapshot the range into a fresh, decoupled vector.
    pub fn materialize(&self) -> Vec<S::Elem> {
        return self.materialize_resized(self.len());
    }

    /// Snapshot into a vector of the requested length. Extra capacity
    /// is zero-filled; a shorter target truncates.
    pub fn materialize_resized(&self, target: usize) -> Vec<S::Elem> {
        let mut out = Vec::with_capacity(target);
        let copied = target.min(self.len());
        for thumb in 0..copied {
            out.push(self.slot(thumb));
        }
        out.resize(target, S::Elem::zero());
        return out;
    }

    /// Whether two windows are the same view: same store, same bounds.
    pub fn same_window(&self, other: &Window<'a, S>) -> bool {
        return ptr::eq(self.store, other.store)
            && self.begin == other.begin
            && self.end == other.end;
    }

    /// Ordered content hash: length first, then slot by slot.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = FxHasher::default();
        hasher.write_usize(self.len());
        for thumb in 0..self.len() {
            hasher.write_u64(self.slot(thumb).slot_hash());
        }
        return hasher.finish();
    }

    /// A bidirectional cursor over this window, parked before the first slot.
    pub fn cursor(&self) -> Cursor<'a, S> {
        return Cursor::new(*self);
    }

    /// A splittable read-only cursor over this window.
    pub fn splitter(&self) -> SplitCursor<'a, S, Slots> {
        return SplitCursor::over(self.store, self.begin, self.end);
    }
}

/// Ordered elementwise equality, after an identity short-circuit.
impl<'a, S: Store + ?Sized> PartialEq for Window<'a, S> {
    fn eq(&self, other: &Window<'a, S>) -> bool {
        if self.same_window(other) {
            return true;
        }
        if self.len() != other.len() {
            return false;
        }
        for thumb in 0..self.len() {
            if self.slot(thumb) != other.slot(thumb) {
                return false;
            }
        }
        return true;
    }
}

impl<'a, S: Store + ?Sized> fmt::Debug for Window<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f
            .debug_struct("Window")
            .field("begin", &self.begin)
            .field("end", &self.end)
            .finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::as_cells;

    #[test]
    fn whole_store_window() {
        let mut buf = [1i32, 2, 3, 4];
        let window = Window::new(as_cells(&mut buf));

        assert_eq!(window.len(), 4);
        assert_eq!(window.begin(), 0);
        assert_eq!(window.end(), 4);
    }

    #[test]
    fn bounds_are_validated() {
        let mut buf = [0u8; 4];
        let store = as_cells(&mut buf);

        assert!(Window::with_bounds(store, 1, 3).is_ok());
        assert!(Window::with_bounds(store, 4, 4).is_ok());
        assert_eq!(
            Window::with_bounds(store, 3, 1),
            Err(ViewError::BadBounds { begin: 3, end: 1, len: 4 })
        );
        assert_eq!(
            Window::with_bounds(store, 0, 5),
            Err(ViewError::BadBounds { begin: 0, end: 5, len: 4 })
        );
    }

    #[test]
    fn translation_offsets_by_begin() {
        let mut buf = [10i64, 11, 12, 13, 14];
        let store = as_cells(&mut buf);
        let window = Window::with_bounds(store, 2, 5).unwrap();

        assert_eq!(window.translate(0), Ok(2));
        assert_eq!(window.translate(2), Ok(4));
        assert_eq!(
            window.translate(3),
            Err(ViewError::OutOfRange { thumb: 3, len: 3 })
        );
        assert_eq!(window.get(0), Ok(12));
    }

    #[test]
    fn set_returns_the_prior_value() {
        let mut buf = [7u16, 8];
        let window = Window::new(as_cells(&mut buf));

        assert_eq!(window.set(1, 80), Ok(8));
        assert_eq!(window.get(1), Ok(80));
    }

    #[test]
    fn sub_composes_against_the_same_store() {
        let mut buf = [0i32, 1, 2, 3, 4, 5];
        let store = as_cells(&mut buf);
        let outer = Window::with_bounds(store, 1, 6).unwrap();
        let inner = outer.sub(2, 4).unwrap();

        assert_eq!(inner.begin(), 3);
        assert_eq!(inner.end(), 5);
        assert_eq!(inner.get(0), Ok(3));

        // Writes through the inner slice land in the shared store.
        inner.set(0, 30).unwrap();
        assert_eq!(outer.get(2), Ok(30));
    }

    #[test]
    fn sub_bounds_are_window_relative() {
        let mut buf = [0u8; 8];
        let store = as_cells(&mut buf);
        let window = Window::with_bounds(store, 2, 6).unwrap();

        assert_eq!(
            window.sub(1, 5),
            Err(ViewError::BadBounds { begin: 1, end: 5, len: 4 })
        );
    }

    #[test]
    fn materialize_is_decoupled() {
        let mut buf = [1u32, 2, 3];
        let window = Window::new(as_cells(&mut buf));
        let snapshot = window.materialize();

        window.set(0, 100).unwrap();
        assert_eq!(snapshot, vec![1, 2, 3]);
    }

    #[test]
    fn materialize_resized_pads_and_truncates() {
        let mut buf = [5i64, 6];
        let window = Window::new(as_cells(&mut buf));

        assert_eq!(window.materialize_resized(4), vec![5, 6, 0, 0]);
        assert_eq!(window.materialize_resized(1), vec![5]);
        assert_eq!(window.materialize_resized(0), Vec::<i64>::new());
    }

    #[test]
    fn full_range_slice_is_identity() {
        let mut buf = [9i32, 8, 7];
        let window = Window::new(as_cells(&mut buf));
        let full = window.sub(0, window.len()).unwrap();

        assert!(window.same_window(&full));
        assert_eq!(window, full);
        assert_eq!(window.content_hash(), full.content_hash());
    }

    #[test]
    fn equality_falls_back_to_contents() {
        let mut left = [1i32, 2, 3];
        let mut right = [0i32, 1, 2, 3, 0];

        let a = Window::new(as_cells(&mut left));
        let bs = as_cells(&mut right);
        let b = Window::with_bounds(bs, 1, 4).unwrap();

        assert!(!a.same_window(&b));
        assert_eq!(a, b);
        assert_eq!(a.content_hash(), b.content_hash());

        b.set(0, 99).unwrap();
        assert_ne!(a, b);
    }
}
