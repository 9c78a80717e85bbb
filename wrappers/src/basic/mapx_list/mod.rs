//!
//! An insertion-ordered map behind a reader/writer lock.
//!
//! `MapxList` keeps a hash index over a doubly linked list of entries:
//! lookups are O(1) and `keys`, `values` and `iterator` follow insertion
//! order. Updating an existing key keeps its position, removing and
//! re-inserting a key moves it to the end.
//!
//! Unlike [`Mapx::map`](crate::Mapx::map), [`MapxList::map`] returns a
//! fresh `HashMap`: the linked storage can not be handed out as a flat map.
//!
//! Serialization encodes the same bytes as the flat map would, keys sorted
//! the way a `BTreeMap` keeps them. Decoding links the entries in document
//! order.
//!
//! # Examples
//!
//! ```
//! use rwmap::MapxList;
//!
//! let m: MapxList<&str, u32> = MapxList::new();
//! m.set("k1", 1);
//! m.set("k2", 2);
//! m.set("k3", 3);
//! m.set("k1", 10);
//!
//! assert_eq!(m.keys(), ["k1", "k2", "k3"]);
//! assert_eq!(m.values(), [10, 2, 3]);
//!
//! m.remove(&"k1");
//! m.set("k1", 1);
//! assert_eq!(m.keys(), ["k2", "k3", "k1"]);
//! ```
//!


use crate::{
    common::{ListEngine, LockMode, RawUnsync},
    define_map_wrapper, MapxRaw, Value,
};
use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::{
    collections::HashMap, fmt, hash::Hash, marker::PhantomData,
    result::Result as StdResult,
};

define_map_wrapper! {
    #[doc = "A lock-guarded map that remembers insertion order."]
    #[doc = ""]
    #[doc = "Backed by a hash index over a doubly linked list, see `ListEngine`."]
    pub struct MapxList {
        inner: ListEngine,
    }
}

/// The ordered map, under its conventional name.
pub type ListMap<K, V> = MapxList<K, V>;
/// `String` -> any JSON-like value, in insertion order.
pub type StrAnyListMap = MapxList<String, Value>;
/// A `MapxList` without locking, for single-threaded use.
pub type UnsyncMapxList<K, V> = MapxList<K, V, RawUnsync>;

impl<K, V, R> MapxList<K, V, R>
where
    K: Eq + Hash + Clone,
    V: Clone,
    R: LockMode,
{
    /// A flat snapshot of the content, the same as [`MapxList::map_copy`].
    #[inline(always)]
    pub fn map(&self) -> HashMap<K, V> {
        self.inner.map_copy()
    }

    /// Same as [`MapxList::iterator`]: head to tail.
    #[inline(always)]
    pub fn iterator_asc<F>(&self, f: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.inner.iterator(f)
    }

    /// Visits the entries tail to head until `f` returns `false`.
    pub fn iterator_desc<F>(&self, mut f: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.rlock_func(|l| {
            for (k, v) in l.iter().rev() {
                if !f(k, v) {
                    break;
                }
            }
        })
    }

    /// The oldest entry.
    pub fn front(&self) -> Option<(K, V)> {
        self.rlock_func(|l| l.front().map(|(k, v)| (k.clone(), v.clone())))
    }

    /// The newest entry.
    pub fn back(&self) -> Option<(K, V)> {
        self.rlock_func(|l| l.back().map(|(k, v)| (k.clone(), v.clone())))
    }

    /// A new list with keys and values swapped, this one is left as is.
    ///
    /// Entries keep their list order. Equal values collapse into one entry
    /// at the position of the first of them, holding the key of the last.
    pub fn flipped(&self) -> MapxList<V, K, R>
    where
        V: Eq + Hash,
    {
        self.rlock_func(|l| l.iter().map(|(k, v)| (v.clone(), k.clone())).collect())
    }
}

impl<K, V, R> Serialize for MapxList<K, V, R>
where
    K: Eq + Hash + Clone + Ord + Serialize,
    V: Clone + Serialize,
    R: LockMode,
{
    /// A map sorted by key, byte-for-byte what a `BTreeMap` with the same
    /// entries produces. List order is not part of the encoding.
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.rlock_func(|l| {
            let mut entries = l.iter().collect::<Vec<_>>();
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
            serializer.collect_map(entries)
        })
    }
}

impl<'de, K, V, R> Deserialize<'de> for MapxList<K, V, R>
where
    K: Eq + Hash + Clone + Deserialize<'de>,
    V: Clone + Deserialize<'de>,
    R: LockMode,
{
    /// Entries are linked in document order, which is key order for
    /// documents produced by `serialize`.
    fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer
            .deserialize_map(ListVisitor(PhantomData))
            .map(|l| Self {
                inner: MapxRaw::from_engine(l),
            })
    }
}

struct ListVisitor<K, V>(PhantomData<fn() -> (K, V)>);

impl<'de, K, V> Visitor<'de> for ListVisitor<K, V>
where
    K: Eq + Hash + Clone + Deserialize<'de>,
    V: Deserialize<'de>,
{
    type Value = ListEngine<K, V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> StdResult<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        // do not trust the hint blindly, it comes from the input
        let mut l = ListEngine::with_capacity(access.size_hint().unwrap_or(0).min(4096));
        while let Some((k, v)) = access.next_entry()? {
            l.insert(k, v);
        }
        Ok(l)
    }
}
