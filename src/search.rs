// model = "claude-opus-4-5"
// created = "2026-02-03"
// modified = "2026-02-05"
// driver = "Isaac Clayton"

//! Binary search, sorting, and prefix scans over a window's range.
//!
//! All of these operate through the window's translation layer, so they
//! work against any store and leave the window's bounds untouched.
//! Allocation policy is the interesting part:
//!
//! 1. **Natural-order sort is in place**: a bottom-up heapsort through
//!    `get`/`set`. Zero allocation, O(n log n), not stable. The views
//!    promise "no extra memory" and the default sort keeps it.
//!
//! 2. **Comparator sort stages a copy**: an arbitrary caller comparator
//!    cannot run in place against a raw store, so the range is staged
//!    into a buffer (stack-inlined for small windows), sorted there,
//!    and written back.
//!
//! 3. **Parallel sort stages a copy too**, then hands it to rayon.
//!    Below `PAR_SORT_MIN` the staging cost outweighs the fan-out and
//!    it falls back to the in-place heapsort.

use std::cmp::Ordering;

use log::debug;
use log::trace;
use rayon::slice::ParallelSliceMut;
use smallvec::SmallVec;

use crate::slot::Slot;
use crate::store::Store;
use crate::window::Window;

/// Ranges shorter than this sort in place rather than in parallel.
pub const PAR_SORT_MIN: usize = 4096;

/// Inline capacity of the comparator-sort staging buffer.
const STAGE_INLINE: usize = 32;

/// Binary search an ascending-sorted window for `target`.
///
/// Returns `Ok(thumb)` of a slot holding `target` on a hit, or
/// `Err(thumb)` of the insertion point on a miss: every slot before it
/// is less than `target`, every slot from it on is greater. The range
/// must already be sorted by `total_cmp`; if it is not, the result is
/// meaningless (but never out of bounds).
pub fn binary_search<S: Store + ?Sized>(
    window: &Window<'_, S>,
    target: S::Elem,
) -> Result<usize, usize> {
    let mut low = 0;
    let mut high = window.len();

    while low < high {
        let mid = usize::midpoint(low, high);
        match window.slot(mid).total_cmp(&target) {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
            Ordering::Equal => return Ok(mid),
        }
    }
    return Err(low);
}

/// Sort the window's range in place by natural order.
pub fn sort<S: Store + ?Sized>(window: &Window<'_, S>) {
    let len = window.len();

    // Heapify, then repeatedly move the max past the shrinking heap.
    for root in (0..len / 2).rev() {
        sift_down(window, root, len);
    }
    for end in (1..len).rev() {
        swap(window, 0, end);
        sift_down(window, 0, end);
    }
}

/// Sort the window's range by a caller-supplied comparator.
pub fn sort_by<S, F>(window: &Window<'_, S>, mut compare: F)
where
    S: Store + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    let len = window.len();
    let mut staged: SmallVec<[S::Elem; STAGE_INLINE]> = SmallVec::with_capacity(len);
    for thumb in 0..len {
        staged.push(window.slot(thumb));
    }
    trace!("staged {len} slots for comparator sort");

    staged.sort_by(|a, b| compare(a, b));

    for (thumb, value) in staged.into_iter().enumerate() {
        window.put(thumb, value);
    }
}

/// Sort the window's range by natural order, fanning out across the
/// rayon pool for large ranges.
pub fn par_sort<S: Store + ?Sized>(window: &Window<'_, S>)
where
    S::Elem: Send,
{
    let len = window.len();
    if len < PAR_SORT_MIN {
        trace!("range of {len} below parallel threshold, sorting in place");
        sort(window);
        return;
    }

    debug!("staging {len} slots for parallel sort");
    let mut staged = window.materialize();
    staged.par_sort_unstable_by(|a, b| a.total_cmp(b));
    for (thumb, value) in staged.into_iter().enumerate() {
        window.put(thumb, value);
    }
}

/// In-place associative prefix scan, left to right:
/// `slot[t] = op(slot[t - 1], slot[t])`.
pub fn prefix_scan<S, F>(window: &Window<'_, S>, mut op: F)
where
    S: Store + ?Sized,
    F: FnMut(S::Elem, S::Elem) -> S::Elem,
{
    for thumb in 1..window.len() {
        let folded = op(window.slot(thumb - 1), window.slot(thumb));
        window.put(thumb, folded);
    }
}

fn swap<S: Store + ?Sized>(window: &Window<'_, S>, a: usize, b: usize) {
    let at_a = window.slot(a);
    let at_b = window.slot(b);
    window.put(a, at_b);
    window.put(b, at_a);
}

fn sift_down<S: Store + ?Sized>(window: &Window<'_, S>, mut root: usize, end: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            return;
        }
        if child + 1 < end && window.slot(child).total_cmp(&window.slot(child + 1)) == Ordering::Less
        {
            child += 1;
        }
        if window.slot(root).total_cmp(&window.slot(child)) == Ordering::Less {
            swap(window, root, child);
            root = child;
        } else {
            return;
        }
    }
}
