// model = "claude-opus-4-5"
// created = "2026-02-04"
// modified = "2026-02-05"
// driver = "Isaac Clayton"

//! The pair interpretation: a flat even-length range read as
//! alternating (key, value) slots.
//!
//! Logical pair `k` lives at thumbs `2k` (key) and `2k + 1` (value).
//! Nothing is indexed: every lookup is a linear scan over the key
//! slots, trading speed for zero extra memory and zero copying. Three
//! behaviors follow from the flat layout and must not be "fixed":
//!
//! 1. **Duplicate keys are permitted.** Construction never
//!    de-duplicates; lookup is first-match-wins, so only the first
//!    occurrence of a key is reachable. This is an observed limitation,
//!    not a uniqueness guarantee.
//!
//! 2. **Only value slots mutate.** A key that is present can have its
//!    value overwritten in place. A key that is absent has no slot to
//!    grow into, so every insert-shaped operation fails, and an
//!    operation that would *unmap* a present key fails too, because
//!    pairs cannot be removed.
//!
//! 3. **Map/set equality is membership**, independent of slot order,
//!    while the list facade over the same slots stays ordered.

use std::fmt;
use std::iter::FusedIterator;
use std::ptr;

use crate::error::ViewError;
use crate::slot::Slot;
use crate::split::Entries;
use crate::split::Keys;
use crate::split::SplitCursor;
use crate::split::Values;
use crate::store::Store;
use crate::window::Window;

/// Thumb of pair `k`'s key slot; value slot is one past it.
fn key_thumb(pair: usize) -> usize {
    return 2 * pair;
}

/// Pair index of the first pair whose key equals `key`.
fn find_pair<S: Store + ?Sized>(window: &Window<'_, S>, key: S::Elem) -> Option<usize> {
    for pair in 0..window.len() / 2 {
        if window.slot(key_thumb(pair)) == key {
            return Some(pair);
        }
    }
    return None;
}

/// A map facade over an even-length window of alternating
/// (key, value) slots.
pub struct PairMap<'a, S: Store + ?Sized> {
    window: Window<'a, S>,
}

impl<'a, S: Store + ?Sized> Clone for PairMap<'a, S> {
    fn clone(&self) -> Self {
        return *self;
    }
}

impl<'a, S: Store + ?Sized> Copy for PairMap<'a, S> {}

impl<'a, S: Store + ?Sized> PairMap<'a, S> {
    /// Interpret a window as pairs. Fails fast on an odd length and
    /// never partially constructs.
    pub fn new(window: Window<'a, S>) -> Result<PairMap<'a, S>, ViewError> {
        if window.len() % 2 != 0 {
            return Err(ViewError::OddPairLength { len: window.len() });
        }
        return Ok(PairMap { window });
    }

    /// Interpret a whole store as pairs.
    pub fn from_store(store: &'a S) -> Result<PairMap<'a, S>, ViewError> {
        return PairMap::new(Window::new(store));
    }

    /// Wrap a window whose even length is already established.
    pub(crate) fn wrap(window: Window<'a, S>) -> PairMap<'a, S> {
        debug_assert!(window.len() % 2 == 0);
        return PairMap { window };
    }

    /// The underlying window.
    pub fn window(&self) -> Window<'a, S> {
        return self.window;
    }

    /// Number of logical pairs.
    pub fn pair_count(&self) -> usize {
        return self.window.len() / 2;
    }

    /// Whether the map holds no pairs.
    pub fn is_empty(&self) -> bool {
        return self.window.is_empty();
    }

    fn key_slot(&self, pair: usize) -> S::Elem {
        return self.window.slot(key_thumb(pair));
    }

    fn value_slot(&self, pair: usize) -> S::Elem {
        return self.window.slot(key_thumb(pair) + 1);
    }

    fn write_value(&self, pair: usize, value: S::Elem) -> S::Elem {
        let prior = self.value_slot(pair);
        self.window.put(key_thumb(pair) + 1, value);
        return prior;
    }

    /// Pair index of the first pair whose key equals `key`.
    pub fn find(&self, key: S::Elem) -> Option<usize> {
        return find_pair(&self.window, key);
    }

    /// Value of the first pair whose key equals `key`.
    pub fn get(&self, key: S::Elem) -> Option<S::Elem> {
        return Some(self.value_slot(self.find(key)?));
    }

    /// Like [`get`](Self::get), with a fallback for absent keys.
    pub fn get_or(&self, key: S::Elem, default: S::Elem) -> S::Elem {
        return self.get(key).unwrap_or(default);
    }

    /// Whether any pair's key equals `key`.
    pub fn contains_key(&self, key: S::Elem) -> bool {
        return self.find(key).is_some();
    }

    /// Whether any pair's value equals `value`.
    pub fn contains_value(&self, value: S::Elem) -> bool {
        for pair in 0..self.pair_count() {
            if self.value_slot(pair) == value {
                return true;
            }
        }
        return false;
    }

    /// Overwrite the value paired with a present key, returning the
    /// old value. An absent key has no slot to grow into and fails.
    pub fn put(&self, key: S::Elem, value: S::Elem) -> Result<S::Elem, ViewError> {
        let Some(pair) = self.find(key) else {
            return Err(ViewError::FixedLength);
        };
        return Ok(self.write_value(pair, value));
    }

    /// Return the value paired with a present key without writing; an
    /// absent key would need a new pair and fails.
    pub fn put_if_absent(&self, key: S::Elem, _value: S::Elem) -> Result<S::Elem, ViewError> {
        let Some(pair) = self.find(key) else {
            return Err(ViewError::FixedLength);
        };
        return Ok(self.value_slot(pair));
    }

    /// Overwrite the value paired with a present key, returning the
    /// old value; an absent key is a plain no-op `None`. Never fails.
    pub fn replace(&self, key: S::Elem, value: S::Elem) -> Option<S::Elem> {
        let pair = self.find(key)?;
        return Some(self.write_value(pair, value));
    }

    /// Unmapping an absent key changes nothing (`Ok(None)`); a present
    /// key's pair cannot be removed, so that fails.
    pub fn remove(&self, key: S::Elem) -> Result<Option<S::Elem>, ViewError> {
        if self.find(key).is_some() {
            return Err(ViewError::FixedLength);
        }
        return Ok(None);
    }

    /// Recompute the value for `key` from its current mapping.
    ///
    /// Present + `Some(new)` writes in place; present + `None` would
    /// unmap the pair and fails. Absent + `None` is a no-op; absent +
    /// `Some` would add a pair and fails.
    pub fn compute(
        &self,
        key: S::Elem,
        f: impl FnOnce(S::Elem, Option<S::Elem>) -> Option<S::Elem>,
    ) -> Result<Option<S::Elem>, ViewError> {
        match self.find(key) {
            Some(pair) => match f(key, Some(self.value_slot(pair))) {
                Some(next) => {
                    self.write_value(pair, next);
                    return Ok(Some(next));
                }
                None => return Err(ViewError::FixedLength),
            },
            None => match f(key, None) {
                None => return Ok(None),
                Some(_) => return Err(ViewError::FixedLength),
            },
        }
    }

    /// [`compute`](Self::compute) restricted to present keys; an
    /// absent key is a no-op `Ok(None)`.
    pub fn compute_if_present(
        &self,
        key: S::Elem,
        f: impl FnOnce(S::Elem, S::Elem) -> Option<S::Elem>,
    ) -> Result<Option<S::Elem>, ViewError> {
        let Some(pair) = self.find(key) else {
            return Ok(None);
        };
        match f(key, self.value_slot(pair)) {
            Some(next) => {
                self.write_value(pair, next);
                return Ok(Some(next));
            }
            None => return Err(ViewError::FixedLength),
        }
    }

    /// A present key returns its current value untouched (`f` never
    /// runs). An absent key runs `f`: `None` is a no-op, `Some` would
    /// add a pair and fails.
    pub fn compute_if_absent(
        &self,
        key: S::Elem,
        f: impl FnOnce(S::Elem) -> Option<S::Elem>,
    ) -> Result<Option<S::Elem>, ViewError> {
        if let Some(pair) = self.find(key) {
            return Ok(Some(self.value_slot(pair)));
        }
        match f(key) {
            None => return Ok(None),
            Some(_) => return Err(ViewError::FixedLength),
        }
    }

    /// Fold `value` into a present key's mapping with `f`, writing the
    /// result in place. `f` returning `None` would unmap the pair, and
    /// an absent key would add one; both fail.
    pub fn merge(
        &self,
        key: S::Elem,
        value: S::Elem,
        f: impl FnOnce(S::Elem, S::Elem) -> Option<S::Elem>,
    ) -> Result<S::Elem, ViewError> {
        let Some(pair) = self.find(key) else {
            return Err(ViewError::FixedLength);
        };
        match f(self.value_slot(pair), value) {
            Some(next) => {
                self.write_value(pair, next);
                return Ok(next);
            }
            None => return Err(ViewError::FixedLength),
        }
    }

    /// Iterate live entry handles in slot order.
    pub fn entries(&self) -> EntryIter<'a, S> {
        return EntryIter {
            store: self.window.store(),
            at: self.window.begin(),
            end: self.window.end(),
        };
    }

    /// A live entry handle for pair index `pair`.
    pub fn entry_at(&self, pair: usize) -> Result<PairEntry<'a, S>, ViewError> {
        let at = self.window.translate(key_thumb(pair))?;
        return Ok(PairEntry::new(self.window.store(), at));
    }

    /// The set-shaped view of the key slots. O(1); shares this window.
    pub fn keys(&self) -> PairKeys<'a, S> {
        return PairKeys { window: self.window };
    }

    /// The collection-shaped view of the value slots. O(1); shares
    /// this window.
    pub fn values(&self) -> PairValues<'a, S> {
        return PairValues { window: self.window };
    }

    /// The set-shaped view of the entries. O(1); shares this window.
    pub fn entry_set(&self) -> PairEntries<'a, S> {
        return PairEntries { window: self.window };
    }

    /// A splittable cursor over the key slots.
    pub fn split_keys(&self) -> SplitCursor<'a, S, Keys> {
        return SplitCursor::over(self.window.store(), self.window.begin(), self.window.end());
    }

    /// A splittable cursor over the value slots.
    pub fn split_values(&self) -> SplitCursor<'a, S, Values> {
        return SplitCursor::over(self.window.store(), self.window.begin(), self.window.end());
    }

    /// A splittable cursor over live entry handles.
    pub fn split_entries(&self) -> SplitCursor<'a, S, Entries> {
        return SplitCursor::over(self.window.store(), self.window.begin(), self.window.end());
    }

    /// Membership content hash: the wrapping sum of entry hashes,
    /// independent of slot order.
    pub fn content_hash(&self) -> u64 {
        let mut sum = 0u64;
        for pair in 0..self.pair_count() {
            let entry = self.key_slot(pair).slot_hash() ^ self.value_slot(pair).slot_hash();
            sum = sum.wrapping_add(entry);
        }
        return sum;
    }
}

/// Membership equality: same pair count, and every pair of `self` is
/// reachable in `other` through first-match lookup.
impl<'a, S: Store + ?Sized> PartialEq for PairMap<'a, S> {
    fn eq(&self, other: &PairMap<'a, S>) -> bool {
        if self.window.same_window(&other.window) {
            return true;
        }
        if self.pair_count() != other.pair_count() {
            return false;
        }
        for pair in 0..self.pair_count() {
            if other.get(self.key_slot(pair)) != Some(self.value_slot(pair)) {
                return false;
            }
        }
        return true;
    }
}

impl<'a, S: Store + ?Sized> fmt::Debug for PairMap<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f
            .debug_map()
            .entries((0..self.pair_count()).map(|pair| (self.key_slot(pair), self.value_slot(pair))))
            .finish();
    }
}

/// Renders as `{k1=v1, k2=v2}`, or `{}` when empty.
impl<'a, S: Store + ?Sized> fmt::Display for PairMap<'a, S>
where
    S::Elem: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for pair in 0..self.pair_count() {
            if pair > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", self.key_slot(pair), self.value_slot(pair))?;
        }
        return write!(f, "}}");
    }
}

/// A live handle to one pair: the key slot at absolute index `at` and
/// the value slot after it.
///
/// Identity is (store, index): two handles are equal when they point
/// at the same pair of the same store, regardless of current contents.
pub struct PairEntry<'a, S: Store + ?Sized> {
    store: &'a S,
    at: usize,
}

impl<'a, S: Store + ?Sized> Clone for PairEntry<'a, S> {
    fn clone(&self) -> Self {
        return *self;
    }
}

impl<'a, S: Store + ?Sized> Copy for PairEntry<'a, S> {}

impl<'a, S: Store + ?Sized> PairEntry<'a, S> {
    pub(crate) fn new(store: &'a S, at: usize) -> PairEntry<'a, S> {
        debug_assert!(at + 1 < store.len());
        return PairEntry { store, at };
    }

    /// The current key slot.
    pub fn key(&self) -> S::Elem {
        return self.store.get(self.at);
    }

    /// The current value slot.
    pub fn value(&self) -> S::Elem {
        return self.store.get(self.at + 1);
    }

    /// Overwrite the value slot, returning the prior value. Always
    /// permitted: value mutation never changes the slot count.
    pub fn set_value(&self, value: S::Elem) -> S::Elem {
        let prior = self.store.get(self.at + 1);
        self.store.set(self.at + 1, value);
        return prior;
    }
}

impl<'a, S: Store + ?Sized> PartialEq for PairEntry<'a, S> {
    fn eq(&self, other: &PairEntry<'a, S>) -> bool {
        return ptr::eq(self.store, other.store) && self.at == other.at;
    }
}

impl<'a, S: Store + ?Sized> fmt::Debug for PairEntry<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{:?}={:?}", self.key(), self.value());
    }
}

impl<'a, S: Store + ?Sized> fmt::Display for PairEntry<'a, S>
where
    S::Elem: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}={}", self.key(), self.value());
    }
}

/// Iterator over live entry handles, in slot order.
pub struct EntryIter<'a, S: Store + ?Sized> {
    store: &'a S,
    at: usize,
    end: usize,
}

impl<'a, S: Store + ?Sized> Iterator for EntryIter<'a, S> {
    type Item = PairEntry<'a, S>;

    fn next(&mut self) -> Option<PairEntry<'a, S>> {
        if self.at >= self.end {
            return None;
        }
        let entry = PairEntry::new(self.store, self.at);
        self.at += 2;
        return Some(entry);
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.at) / 2;
        return (remaining, Some(remaining));
    }
}

impl<'a, S: Store + ?Sized> ExactSizeIterator for EntryIter<'a, S> {}

impl<'a, S: Store + ?Sized> FusedIterator for EntryIter<'a, S> {}

/// Iterator over key slots, in slot order.
pub struct KeyIter<'a, S: Store + ?Sized> {
    inner: EntryIter<'a, S>,
}

impl<'a, S: Store + ?Sized> Iterator for KeyIter<'a, S> {
    type Item = S::Elem;

    fn next(&mut self) -> Option<S::Elem> {
        return Some(self.inner.next()?.key());
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return self.inner.size_hint();
    }
}

impl<'a, S: Store + ?Sized> ExactSizeIterator for KeyIter<'a, S> {}

impl<'a, S: Store + ?Sized> FusedIterator for KeyIter<'a, S> {}

/// Iterator over value slots, in slot order.
pub struct ValueIter<'a, S: Store + ?Sized> {
    inner: EntryIter<'a, S>,
}

impl<'a, S: Store + ?Sized> Iterator for ValueIter<'a, S> {
    type Item = S::Elem;

    fn next(&mut self) -> Option<S::Elem> {
        return Some(self.inner.next()?.value());
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return self.inner.size_hint();
    }
}

impl<'a, S: Store + ?Sized> ExactSizeIterator for ValueIter<'a, S> {}

impl<'a, S: Store + ?Sized> FusedIterator for ValueIter<'a, S> {}

/// The set-shaped view of a pair map's key slots.
pub struct PairKeys<'a, S: Store + ?Sized> {
    window: Window<'a, S>,
}

impl<'a, S: Store + ?Sized> Clone for PairKeys<'a, S> {
    fn clone(&self) -> Self {
        return *self;
    }
}

impl<'a, S: Store + ?Sized> Copy for PairKeys<'a, S> {}

impl<'a, S: Store + ?Sized> PairKeys<'a, S> {
    /// Number of key slots.
    pub fn len(&self) -> usize {
        return self.window.len() / 2;
    }

    /// Whether there are no keys.
    pub fn is_empty(&self) -> bool {
        return self.window.is_empty();
    }

    /// Whether any key slot equals `key`.
    pub fn contains(&self, key: S::Elem) -> bool {
        return find_pair(&self.window, key).is_some();
    }

    /// Iterate the key slots in order.
    pub fn iter(&self) -> KeyIter<'a, S> {
        return KeyIter {
            inner: PairMap::wrap(self.window).entries(),
        };
    }

    /// Snapshot the keys into a fresh vector.
    pub fn to_vec(&self) -> Vec<S::Elem> {
        return self.iter().collect();
    }

    /// Adding a key would grow the view; always fails.
    pub fn insert(&self, _key: S::Elem) -> Result<bool, ViewError> {
        return Err(ViewError::FixedLength);
    }

    /// Removing an absent key is a no-op `Ok(false)`; a present key's
    /// pair cannot be removed, so that fails.
    pub fn remove(&self, key: S::Elem) -> Result<bool, ViewError> {
        if !self.contains(key) {
            return Ok(false);
        }
        return Err(ViewError::FixedLength);
    }

    /// Order-independent membership hash: wrapping sum of key hashes.
    pub fn content_hash(&self) -> u64 {
        let mut sum = 0u64;
        for key in self.iter() {
            sum = sum.wrapping_add(key.slot_hash());
        }
        return sum;
    }
}

/// Membership equality: same size, every key of `self` present in
/// `other`, independent of order.
impl<'a, S: Store + ?Sized> PartialEq for PairKeys<'a, S> {
    fn eq(&self, other: &PairKeys<'a, S>) -> bool {
        if self.window.same_window(&other.window) {
            return true;
        }
        return self.len() == other.len() && self.iter().all(|key| other.contains(key));
    }
}

impl<'a, S: Store + ?Sized> fmt::Debug for PairKeys<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_set().entries(self.iter()).finish();
    }
}

/// Renders as `[k1, k2, k3]`, or `[]` when empty.
impl<'a, S: Store + ?Sized> fmt::Display for PairKeys<'a, S>
where
    S::Elem: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (at, key) in self.iter().enumerate() {
            if at > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}")?;
        }
        return write!(f, "]");
    }
}

/// The collection-shaped view of a pair map's value slots.
pub struct PairValues<'a, S: Store + ?Sized> {
    window: Window<'a, S>,
}

impl<'a, S: Store + ?Sized> Clone for PairValues<'a, S> {
    fn clone(&self) -> Self {
        return *self;
    }
}

impl<'a, S: Store + ?Sized> Copy for PairValues<'a, S> {}

impl<'a, S: Store + ?Sized> PairValues<'a, S> {
    /// Number of value slots.
    pub fn len(&self) -> usize {
        return self.window.len() / 2;
    }

    /// Whether there are no values.
    pub fn is_empty(&self) -> bool {
        return self.window.is_empty();
    }

    /// Whether any value slot equals `value`.
    pub fn contains(&self, value: S::Elem) -> bool {
        return self.iter().any(|held| held == value);
    }

    /// Iterate the value slots in order.
    pub fn iter(&self) -> ValueIter<'a, S> {
        return ValueIter {
            inner: PairMap::wrap(self.window).entries(),
        };
    }

    /// Snapshot the values into a fresh vector.
    pub fn to_vec(&self) -> Vec<S::Elem> {
        return self.iter().collect();
    }
}

impl<'a, S: Store + ?Sized> fmt::Debug for PairValues<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.iter()).finish();
    }
}

/// Renders as `[v1, v2, v3]`, or `[]` when empty.
impl<'a, S: Store + ?Sized> fmt::Display for PairValues<'a, S>
where
    S::Elem: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (at, value) in self.iter().enumerate() {
            if at > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        return write!(f, "]");
    }
}

/// The set-shaped view of a pair map's entries.
pub struct PairEntries<'a, S: Store + ?Sized> {
    window: Window<'a, S>,
}

impl<'a, S: Store + ?Sized> Clone for PairEntries<'a, S> {
    fn clone(&self) -> Self {
        return *self;
    }
}

impl<'a, S: Store + ?Sized> Copy for PairEntries<'a, S> {}

impl<'a, S: Store + ?Sized> PairEntries<'a, S> {
    /// Number of entries.
    pub fn len(&self) -> usize {
        return self.window.len() / 2;
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        return self.window.is_empty();
    }

    /// Whether first-match lookup of `key` lands on `value`.
    pub fn contains_pair(&self, key: S::Elem, value: S::Elem) -> bool {
        return PairMap::wrap(self.window).get(key) == Some(value);
    }

    /// Iterate live entry handles in order.
    pub fn iter(&self) -> EntryIter<'a, S> {
        return PairMap::wrap(self.window).entries();
    }

    /// Membership content hash: wrapping sum of `key ^ value` hashes.
    pub fn content_hash(&self) -> u64 {
        return PairMap::wrap(self.window).content_hash();
    }
}

/// Membership equality over (key, value) pairs.
impl<'a, S: Store + ?Sized> PartialEq for PairEntries<'a, S> {
    fn eq(&self, other: &PairEntries<'a, S>) -> bool {
        if self.window.same_window(&other.window) {
            return true;
        }
        if self.len() != other.len() {
            return false;
        }
        return self
            .iter()
            .all(|entry| other.contains_pair(entry.key(), entry.value()));
    }
}

impl<'a, S: Store + ?Sized> fmt::Debug for PairEntries<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_set().entries(self.iter()).finish();
    }
}
