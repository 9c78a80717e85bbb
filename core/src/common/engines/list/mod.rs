//!
//! An insertion-ordered backend: a hash index over a doubly linked list.
//!
//! List nodes live in a slot arena and link to each other through stable
//! [`NodeId`] handles, the index maps every key to the handle of its node.
//! The arena owns the nodes, the index and the links only name them.
//!
//! # Examples
//!
//! ```
//! use rwmap_core::common::engines::ListEngine;
//!
//! let mut l = ListEngine::new();
//! l.insert("b", 1);
//! l.insert("a", 2);
//! l.insert("b", 3);
//!
//! assert_eq!(l.keys().collect::<Vec<_>>(), [&"b", &"a"]);
//! assert_eq!(l.remove(&"b"), Some(3));
//! assert_eq!(l.len(), 1);
//! ```
//!


use super::Engine;
use slotmap::{new_key_type, SlotMap};
use std::{collections::HashMap, fmt, hash::Hash, mem};

new_key_type! {
    /// Stable handle of a list node.
    pub struct NodeId;
}

#[derive(Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// Hash index + doubly linked list.
///
/// Cloning copies the arena as is, so the clone keeps both the order and the
/// handles of the source while sharing nothing with it.
#[derive(Clone)]
pub struct ListEngine<K, V> {
    nodes: SlotMap<NodeId, Node<K, V>>,
    index: HashMap<K, NodeId>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl<K, V> ListEngine<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline(always)]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(cap),
            index: HashMap::with_capacity(cap),
            head: None,
            tail: None,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    #[inline(always)]
    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    #[inline(always)]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.index
            .get(key)
            .and_then(|id| self.nodes.get(*id))
            .map(|n| &n.value)
    }

    #[inline(always)]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = *self.index.get(key)?;
        self.nodes.get_mut(id).map(|n| &mut n.value)
    }

    /// Appends a fresh key at the tail, or updates an existing one in place.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(n) = self.index.get(&key).and_then(|id| self.nodes.get_mut(*id)) {
            return Some(mem::replace(&mut n.value, value));
        }

        let id = self.nodes.insert(Node {
            key: key.clone(),
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail.and_then(|t| self.nodes.get_mut(t)) {
            Some(t) => t.next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.index.insert(key, id);

        None
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.index.remove(key)?;
        self.unlink(id).map(|n| n.value)
    }

    pub fn pop_front(&mut self) -> Option<(K, V)> {
        self.pop_at(self.head?)
    }

    pub fn pop_back(&mut self) -> Option<(K, V)> {
        self.pop_at(self.tail?)
    }

    pub fn front(&self) -> Option<(&K, &V)> {
        self.iter().next()
    }

    pub fn back(&self) -> Option<(&K, &V)> {
        self.iter().next_back()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
        self.head = None;
        self.tail = None;
    }

    /// Walks the list from head to tail; `next_back` walks it backwards.
    #[inline(always)]
    pub fn iter(&self) -> ListIter<'_, K, V> {
        ListIter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    #[inline(always)]
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    #[inline(always)]
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let Some(n) = self.nodes.get_mut(id) else {
                break;
            };
            cursor = n.next;
            if !f(&n.key, &mut n.value) {
                if let Some(n) = self.unlink(id) {
                    self.index.remove(&n.key);
                }
            }
        }
    }

    fn pop_at(&mut self, id: NodeId) -> Option<(K, V)> {
        let n = self.unlink(id)?;
        self.index.remove(&n.key);
        Some((n.key, n.value))
    }

    // Detaches the node from the list and the arena, the index is left to
    // the caller.
    fn unlink(&mut self, id: NodeId) -> Option<Node<K, V>> {
        let n = self.nodes.remove(id)?;

        match n.prev.and_then(|p| self.nodes.get_mut(p)) {
            Some(p) => p.next = n.next,
            None => self.head = n.next,
        }
        match n.next.and_then(|x| self.nodes.get_mut(x)) {
            Some(x) => x.prev = n.prev,
            None => self.tail = n.prev,
        }

        Some(n)
    }
}

impl<K, V> Default for ListEngine<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for ListEngine<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for ListEngine<K, V>
where
    K: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut l = Self::new();
        iter.into_iter().for_each(|(k, v)| {
            l.insert(k, v);
        });
        l
    }
}

impl<'a, K, V> IntoIterator for &'a ListEngine<K, V>
where
    K: Eq + Hash + Clone,
{
    type Item = (&'a K, &'a V);
    type IntoIter = ListIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

/// Iterator over a [`ListEngine`] in list order.
pub struct ListIter<'a, K, V> {
    nodes: &'a SlotMap<NodeId, Node<K, V>>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, K, V> Iterator for ListIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if 0 == self.remaining {
            return None;
        }
        let nodes = self.nodes;
        let n = nodes.get(self.front?)?;
        self.front = n.next;
        self.remaining -= 1;
        Some((&n.key, &n.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for ListIter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if 0 == self.remaining {
            return None;
        }
        let nodes = self.nodes;
        let n = nodes.get(self.back?)?;
        self.back = n.prev;
        self.remaining -= 1;
        Some((&n.key, &n.value))
    }
}

impl<K, V> ExactSizeIterator for ListIter<'_, K, V> {}

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

impl<K, V> Engine<K, V> for ListEngine<K, V>
where
    K: Eq + Hash + Clone,
{
    type Iter<'a>
        = ListIter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    #[inline(always)]
    fn with_capacity(cap: usize) -> Self {
        ListEngine::with_capacity(cap)
    }

    #[inline(always)]
    fn get(&self, key: &K) -> Option<&V> {
        ListEngine::get(self, key)
    }

    #[inline(always)]
    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        ListEngine::get_mut(self, key)
    }

    #[inline(always)]
    fn contains_key(&self, key: &K) -> bool {
        ListEngine::contains_key(self, key)
    }

    #[inline(always)]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        ListEngine::insert(self, key, value)
    }

    #[inline(always)]
    fn remove(&mut self, key: &K) -> Option<V> {
        ListEngine::remove(self, key)
    }

    #[inline(always)]
    fn pop(&mut self) -> Option<(K, V)> {
        self.pop_front()
    }

    #[inline(always)]
    fn len(&self) -> usize {
        ListEngine::len(self)
    }

    #[inline(always)]
    fn clear(&mut self) {
        ListEngine::clear(self)
    }

    #[inline(always)]
    fn iter(&self) -> Self::Iter<'_> {
        ListEngine::iter(self)
    }

    #[inline(always)]
    fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        ListEngine::retain(self, f)
    }
}
