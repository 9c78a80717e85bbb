//!
//! # Entry storage
//!
//! The associative structures a map keeps behind its lock. Every backend
//! implements [`Engine`], the generic map logic never looks further.
//!

mod hash;
mod list;

pub use hash::HashEngine;
pub use list::{ListEngine, ListIter, NodeId};

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

/// Storage interface of a map.
///
/// "Natural order" below means the order of [`Engine::iter`]: insertion
/// order for ordered backends, unspecified for hashed ones.
pub trait Engine<K, V>: Default {
    type Iter<'a>: Iterator<Item = (&'a K, &'a V)>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn with_capacity(cap: usize) -> Self;

    fn get(&self, key: &K) -> Option<&V>;

    fn get_mut(&mut self, key: &K) -> Option<&mut V>;

    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Upsert, returns the replaced value.
    ///
    /// An existing key keeps its position in the natural order.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes the first entry in natural order.
    fn pop(&mut self) -> Option<(K, V)>;

    /// Removes up to `n` entries in natural order, all of them if `n` is 0.
    ///
    /// Backends whose `pop` is not O(1) must override this.
    fn pops(&mut self, n: usize) -> Vec<(K, V)> {
        let n = if 0 == n { self.len() } else { n.min(self.len()) };
        (0..n).filter_map(|_| self.pop()).collect()
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        0 == self.len()
    }

    fn clear(&mut self);

    fn iter(&self) -> Self::Iter<'_>;

    /// Keeps only the entries for which `f` returns `true`.
    fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&K, &mut V) -> bool;
}
