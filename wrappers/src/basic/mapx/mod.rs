//!
//! A `HashMap`-like structure behind a reader/writer lock.
//!
//! `Mapx` keeps its entries in a `HashMap`, so iteration order is unspecified
//! and may change from one call to the next. Every method takes `&self`: a
//! `Mapx` is shared by reference (or in an `Arc`) between threads, reads run
//! in parallel and writes are serialized.
//!
//! # Aliasing
//!
//! [`Mapx::map`] is the one method that does **not** return a snapshot: the
//! [`MapxView`] it returns shares the live storage with the map. Use
//! [`Mapx::map_copy`] when an independent copy is needed.
//!
//! # Examples
//!
//! ```
//! use rwmap::Mapx;
//!
//! let m: Mapx<i32, String> = Mapx::new();
//!
//! // Insert key-value pairs
//! m.set(1, "hello".to_string());
//! m.set(2, "world".to_string());
//!
//! // Retrieve a value
//! assert_eq!(m.get(&1), Some("hello".to_string()));
//!
//! // Compute a value only if the key is absent
//! assert_eq!(m.get_or_set_func(3, || "!".to_string()), "!");
//!
//! // Iterate over the map
//! m.iterator(|k, v| {
//!     println!("key: {}, val: {}", k, v);
//!     true
//! });
//!
//! // Remove a key-value pair
//! m.remove(&2);
//!
//! // Clear the entire map
//! m.clear();
//! ```
//!


use crate::{
    common::{HashEngine, LockMode, RawSync, RawUnsync, RwLock},
    define_map_wrapper, MapxRaw, Value,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{collections::HashMap, hash::Hash, result::Result as StdResult, sync::Arc};

define_map_wrapper! {
    #[doc = "A lock-guarded, `HashMap`-like data structure."]
    #[doc = ""]
    #[doc = "Reads take the shared lock, writes and compound operations take"]
    #[doc = "the exclusive lock. With `R = RawUnsync` no locking happens at all"]
    #[doc = "and the map is confined to its thread."]
    pub struct Mapx {
        inner: HashEngine,
    }
}

/// `i64` -> `i64`.
pub type IntIntMap = Mapx<i64, i64>;
/// `i64` -> any JSON-like value.
pub type IntAnyMap = Mapx<i64, Value>;
/// `i64` -> `String`.
pub type IntStrMap = Mapx<i64, String>;
/// `String` -> any JSON-like value.
pub type StrAnyMap = Mapx<String, Value>;
/// `String` -> `i64`.
pub type StrIntMap = Mapx<String, i64>;
/// `String` -> `String`.
pub type StrStrMap = Mapx<String, String>;
/// A `Mapx` without locking, for single-threaded use.
pub type UnsyncMapx<K, V> = Mapx<K, V, RawUnsync>;

impl<K, V, R> Mapx<K, V, R>
where
    K: Eq + Hash + Clone,
    V: Clone,
    R: LockMode,
{
    /// Returns a view that **aliases** the live storage of this map.
    ///
    /// Writes through the view show up in the map, and writes to the map
    /// (including ones made later) show up in the view. This is the only
    /// non-isolated read in the API, see [`Mapx::map_copy`] for a snapshot.
    #[inline(always)]
    pub fn map(&self) -> MapxView<K, V, R> {
        MapxView {
            inner: self.inner.storage(),
        }
    }

    /// A new map with keys and values swapped, this one is left as is.
    ///
    /// Unlike [`Mapx::flip`] the key and value types may differ.
    pub fn flipped(&self) -> Mapx<V, K, R>
    where
        V: Eq + Hash,
    {
        self.rlock_func(|m| m.iter().map(|(k, v)| (v.clone(), k.clone())).collect())
    }
}

impl<K, V, R> Serialize for Mapx<K, V, R>
where
    K: Eq + Hash + Clone + Serialize,
    V: Clone + Serialize,
    R: LockMode,
{
    /// Exactly what serializing the inner `HashMap` produces.
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.rlock_func(|m| m.serialize(serializer))
    }
}

impl<'de, K, V, R> Deserialize<'de> for Mapx<K, V, R>
where
    K: Eq + Hash + Clone + Deserialize<'de>,
    V: Clone + Deserialize<'de>,
    R: LockMode,
{
    fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        HashMap::<K, V>::deserialize(deserializer).map(|m| Self {
            inner: MapxRaw::from_engine(m),
        })
    }
}

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

/// The live storage of a [`Mapx`], as returned by [`Mapx::map`].
///
/// Every access goes through the map's own lock, so the view is as safe to
/// share as the map itself. Cloning the view clones the handle, not the data.
pub struct MapxView<K, V, R = RawSync> {
    inner: Arc<RwLock<R, HashMap<K, V>>>,
}

impl<K, V, R> MapxView<K, V, R>
where
    K: Eq + Hash,
    V: Clone,
    R: LockMode,
{
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

    /// Upserts into the map's storage, returning the replaced value.
    #[inline(always)]
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.inner.write().insert(key, value)
    }

    #[inline(always)]
    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.write().remove(key)
    }

    /// Runs `f` on the storage under the exclusive lock.
    pub fn lock_func<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut HashMap<K, V>) -> T,
    {
        let mut hdr = self.inner.write();
        f(&mut *hdr)
    }

    /// Runs `f` on the storage under the shared lock.
    pub fn rlock_func<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&HashMap<K, V>) -> T,
    {
        let hdr = self.inner.read();
        f(&*hdr)
    }

    /// Detaches the current content from the map.
    pub fn to_map(&self) -> HashMap<K, V>
    where
        K: Clone,
    {
        HashMap::clone(&self.inner.read())
    }
}

impl<K, V, R> Clone for MapxView<K, V, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
