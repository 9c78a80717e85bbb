use super::Engine;
use std::{
    collections::{hash_map, HashMap},
    hash::Hash,
};

/// The unordered backend: a plain `HashMap`.
///
/// Being the std type itself, it can be handed out as is to lock-scoped
/// callbacks and aliasing views.
pub type HashEngine<K, V> = HashMap<K, V>;

impl<K, V> Engine<K, V> for HashMap<K, V>
where
    K: Eq + Hash + Clone,
{
    type Iter<'a>
        = hash_map::Iter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    #[inline(always)]
    fn with_capacity(cap: usize) -> Self {
        HashMap::with_capacity(cap)
    }

    #[inline(always)]
    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    #[inline(always)]
    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        HashMap::get_mut(self, key)
    }

    #[inline(always)]
    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }

    #[inline(always)]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }

    #[inline(always)]
    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }

    fn pop(&mut self) -> Option<(K, V)> {
        let key = self.keys().next()?.clone();
        self.remove_entry(&key)
    }

    // one scan over the table, repeated `pop`s would rescan the emptied buckets
    fn pops(&mut self, n: usize) -> Vec<(K, V)> {
        if 0 == n || n >= self.len() {
            return self.drain().collect();
        }
        let keys = self.keys().take(n).cloned().collect::<Vec<_>>();
        keys.into_iter()
            .filter_map(|k| self.remove_entry(&k))
            .collect()
    }

    #[inline(always)]
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    #[inline(always)]
    fn clear(&mut self) {
        HashMap::clear(self)
    }

    #[inline(always)]
    fn iter(&self) -> Self::Iter<'_> {
        HashMap::iter(self)
    }

    #[inline(always)]
    fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        HashMap::retain(self, f)
    }
}
