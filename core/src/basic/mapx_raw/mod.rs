//!
//! A `Map`-like structure guarded by one reader/writer lock.
//!
//! NOTE:
//! - Reads take the shared lock, writes and compound operations take the
//!   exclusive lock for their whole duration
//! - Keys and values are handed out as clones, nothing returned here aliases
//!   the storage except for [`MapxRaw::storage`]
//!
//! # Examples
//!
//! ```
//! use rwmap_core::{HashEngine, MapxRaw};
//!
//! let l: MapxRaw<u8, u8, HashEngine<u8, u8>> = MapxRaw::new();
//!
//! l.set(1, 0);
//! l.set(1, 0);
//! l.set(2, 0);
//!
//! l.iterator(|_, v| {
//!     assert_eq!(*v, 0);
//!     true
//! });
//!
//! l.remove(&2);
//! assert_eq!(l.len(), 1);
//!
//! l.clear();
//! assert_eq!(l.len(), 0);
//! ```
//!


use crate::common::{EmptyValue, Engine, HashEngine, LockMode, RawSync, RwLock};
use log::debug;
use std::{collections::HashMap, fmt, hash::Hash, marker::PhantomData, mem, sync::Arc};

/// An engine-generic map behind a single reader/writer lock.
///
/// - `E` is the entry storage, see [`Engine`]
/// - `R` is the raw lock, see [`LockMode`]
///
/// `Clone` is a deep copy: the clone shares nothing with its source.
pub struct MapxRaw<K, V, E = HashEngine<K, V>, R = RawSync> {
    inner: Arc<RwLock<R, E>>,
    _p: PhantomData<fn() -> (K, V)>,
}

impl<K, V, E, R> MapxRaw<K, V, E, R>
where
    K: Eq + Hash + Clone,
    V: Clone,
    E: Engine<K, V>,
    R: LockMode,
{
    #[inline(always)]
    pub fn new() -> Self {
        Self::from_engine(E::default())
    }

    #[inline(always)]
    pub fn with_capacity(cap: usize) -> Self {
        Self::from_engine(E::with_capacity(cap))
    }

    #[inline(always)]
    pub fn from_engine(engine: E) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
            _p: PhantomData,
        }
    }

    /// Bulk-loads `entries`, a later duplicate key overwrites an earlier one.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut engine = E::default();
        entries.into_iter().for_each(|(k, v)| {
            engine.insert(k, v);
        });
        Self::from_engine(engine)
    }

    /// `false` for maps built on the single-threaded lock.
    #[inline(always)]
    pub fn is_safe(&self) -> bool {
        R::SAFE
    }

    /// The live storage handle.
    ///
    /// Writes through the handle are seen by this map and writes to this map
    /// are seen through the handle, for as long as both exist. Clones of the
    /// map get storage of their own.
    #[inline(always)]
    pub fn storage(&self) -> Arc<RwLock<R, E>> {
        Arc::clone(&self.inner)
    }

    #[inline(always)]
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.read().get(key).cloned()
    }

    #[inline(always)]
    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.read().contains_key(key)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    #[inline(always)]
    pub fn set(&self, key: K, value: V) {
        self.inner.write().insert(key, value);
    }

    /// Upserts all `entries` within one exclusive section.
    pub fn sets<I>(&self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut hdr = self.inner.write();
        entries.into_iter().for_each(|(k, v)| {
            hdr.insert(k, v);
        });
    }

    #[inline(always)]
    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.write().remove(key)
    }

    /// Removes all `keys` within one exclusive section.
    pub fn removes<'a, I>(&self, keys: I)
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
    {
        let mut hdr = self.inner.write();
        keys.into_iter().for_each(|k| {
            hdr.remove(k);
        });
    }

    /// Removes and returns the first entry in the engine's natural order.
    #[inline(always)]
    pub fn pop(&self) -> Option<(K, V)> {
        self.inner.write().pop()
    }

    /// Removes and returns up to `n` entries, all of them if `n` is 0.
    pub fn pops(&self, n: usize) -> Vec<(K, V)> {
        self.inner.write().pops(n)
    }

    pub fn keys(&self) -> Vec<K> {
        self.inner.read().iter().map(|(k, _)| k.clone()).collect()
    }

    pub fn values(&self) -> Vec<V> {
        self.inner.read().iter().map(|(_, v)| v.clone()).collect()
    }

    /// A snapshot of all entries in natural order.
    pub fn entries(&self) -> Vec<(K, V)> {
        self.inner
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// An independent flat copy of the content.
    pub fn map_copy(&self) -> HashMap<K, V> {
        self.inner
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Like [`MapxRaw::map_copy`], with the keys rendered as strings.
    pub fn map_str_any(&self) -> HashMap<String, V>
    where
        K: fmt::Display,
    {
        self.inner
            .read()
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[inline(always)]
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Swaps the whole content for `entries`.
    pub fn replace<I>(&self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut engine = E::default();
        entries.into_iter().for_each(|(k, v)| {
            engine.insert(k, v);
        });
        self.swap_engine(engine);
    }

    /// Installs `engine` as the new storage and returns the previous one.
    #[inline(always)]
    pub fn swap_engine(&self, engine: E) -> E {
        mem::replace(&mut *self.inner.write(), engine)
    }

    /// Calls `f` for every entry in natural order under the shared lock,
    /// stops as soon as `f` returns `false`.
    ///
    /// `f` must not write to this map.
    pub fn iterator<F>(&self, mut f: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        let hdr = self.inner.read();
        for (k, v) in hdr.iter() {
            if !f(k, v) {
                break;
            }
        }
    }

    /// Runs `f` on the storage under the exclusive lock.
    ///
    /// The lock is released when `f` returns, whatever it returns, and when it
    /// unwinds. `f` must not call back into this map.
    pub fn lock_func<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut E) -> T,
    {
        let mut hdr = self.inner.write();
        f(&mut *hdr)
    }

    /// Runs `f` on the storage under the shared lock.
    ///
    /// `f` must not write to this map.
    pub fn rlock_func<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&E) -> T,
    {
        let hdr = self.inner.read();
        f(&*hdr)
    }

    /// Returns the existing value, or stores `value` and returns it.
    pub fn get_or_set(&self, key: K, value: V) -> V {
        let mut hdr = self.inner.write();
        if let Some(v) = hdr.get(&key) {
            return v.clone();
        }
        hdr.insert(key, value.clone());
        value
    }

    /// Stores `value` only if `key` is absent, returns whether it did.
    pub fn set_if_not_exist(&self, key: K, value: V) -> bool {
        let mut hdr = self.inner.write();
        if hdr.contains_key(&key) {
            return false;
        }
        hdr.insert(key, value);
        true
    }

    /// Like [`MapxRaw::get_or_set`], but the value is produced by `f`, which
    /// runs without any lock held.
    ///
    /// `f` may use this map. Racing callers on one absent key may all run
    /// their factory, the first one to store wins and the others get its
    /// value back.
    pub fn get_or_set_func<F>(&self, key: K, f: F) -> V
    where
        F: FnOnce() -> V,
    {
        if let Some(v) = self.get(&key) {
            return v;
        }
        self.set_with_lock_check(key, f()).0
    }

    /// Like [`MapxRaw::get_or_set`], but the value is produced by `f`, which
    /// runs under the exclusive lock.
    ///
    /// `f` runs at most once per absent key no matter how many callers race,
    /// and must not use this map.
    pub fn get_or_set_func_lock<F>(&self, key: K, f: F) -> V
    where
        F: FnOnce() -> V,
    {
        let mut hdr = self.inner.write();
        if let Some(v) = hdr.get(&key) {
            return v.clone();
        }
        let v = f();
        hdr.insert(key, v.clone());
        v
    }

    /// [`MapxRaw::set_if_not_exist`] with a lock-free factory,
    /// see [`MapxRaw::get_or_set_func`].
    ///
    /// Returns `true` only if the value of this very call was stored.
    pub fn set_if_not_exist_func<F>(&self, key: K, f: F) -> bool
    where
        F: FnOnce() -> V,
    {
        if self.contains_key(&key) {
            return false;
        }
        self.set_with_lock_check(key, f()).1
    }

    /// [`MapxRaw::set_if_not_exist`] with a locked factory,
    /// see [`MapxRaw::get_or_set_func_lock`].
    pub fn set_if_not_exist_func_lock<F>(&self, key: K, f: F) -> bool
    where
        F: FnOnce() -> V,
    {
        let mut hdr = self.inner.write();
        if hdr.contains_key(&key) {
            return false;
        }
        hdr.insert(key, f());
        true
    }

    fn set_with_lock_check(&self, key: K, value: V) -> (V, bool) {
        let mut hdr = self.inner.write();
        if let Some(v) = hdr.get(&key) {
            debug!("factory output discarded, the key has been set by another caller");
            return (v.clone(), false);
        }
        hdr.insert(key, value.clone());
        (value, true)
    }

    /// Copies every entry of `other` into this map, `other` wins on equal keys.
    ///
    /// Keys new to this map are appended in `other`'s natural order.
    pub fn merge(&self, other: &Self) {
        if Arc::ptr_eq(&self.inner, &other.inner) {
            return;
        }
        // the donor is copied out first, the two locks are never held together
        let entries = other.entries();
        self.sets(entries);
    }

    /// Turns every `(k, v)` into `(v, k)`.
    ///
    /// Entries with equal values collapse into one, the last of them in
    /// natural order survives.
    pub fn flip(&self)
    where
        K: From<V>,
        V: From<K>,
    {
        let mut hdr = self.inner.write();
        let mut flipped = E::with_capacity(hdr.len());
        hdr.iter().for_each(|(k, v)| {
            flipped.insert(K::from(v.clone()), V::from(k.clone()));
        });
        *hdr = flipped;
    }

    /// Removes every entry whose value is empty, see [`EmptyValue`].
    pub fn filter_empty(&self)
    where
        V: EmptyValue,
    {
        self.inner.write().retain(|_, v| !v.is_empty_value());
    }
}

impl<K, V, E, R> Clone for MapxRaw<K, V, E, R>
where
    E: Clone,
    R: LockMode,
{
    fn clone(&self) -> Self {
        let engine = E::clone(&self.inner.write());
        Self {
            inner: Arc::new(RwLock::new(engine)),
            _p: PhantomData,
        }
    }
}

impl<K, V, E, R> Default for MapxRaw<K, V, E, R>
where
    K: Eq + Hash + Clone,
    V: Clone,
    E: Engine<K, V>,
    R: LockMode,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, E, R> FromIterator<(K, V)> for MapxRaw<K, V, E, R>
where
    K: Eq + Hash + Clone,
    V: Clone,
    E: Engine<K, V>,
    R: LockMode,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

impl<K, V, E, R> fmt::Debug for MapxRaw<K, V, E, R>
where
    K: fmt::Debug,
    V: fmt::Debug,
    E: Engine<K, V>,
    R: LockMode,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.inner.read().iter()).finish()
    }
}
